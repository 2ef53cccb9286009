// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 待处理的船舶
///
/// 在 images 表中还没有对应图片的船舶，每轮抓取只处理一次
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    /// IMO编号
    pub imo: i32,
    /// 船名
    pub name: String,
}
