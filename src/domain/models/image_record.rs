// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::work_item::WorkItem;
use serde::{Deserialize, Serialize};

/// 图片记录
///
/// 抓取器生成、以JSON形式写入队列、由消费者解析。
/// 精简格式只有 `url` / `alt`，扩展格式额外带上 `name` / `imo`。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// 图片地址，为空表示页面上没有找到图片
    pub url: String,
    /// 图片说明
    #[serde(default)]
    pub alt: String,
    /// 船名
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// IMO编号
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imo: Option<i32>,
}

impl ImageRecord {
    /// 为某条船舶创建尚未填充图片信息的记录
    pub fn for_vessel(item: &WorkItem) -> Self {
        Self {
            name: Some(item.name.clone()),
            imo: Some(item.imo),
            ..Default::default()
        }
    }

    pub fn has_image(&self) -> bool {
        !self.url.is_empty()
    }

    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    pub fn from_json(payload: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(payload)
    }
}

#[cfg(test)]
#[path = "image_record_test.rs"]
mod tests;
