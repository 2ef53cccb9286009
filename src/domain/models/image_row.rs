// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 已入库的图片行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRow {
    /// 自增主键
    pub id: i32,
    pub url: String,
    pub alt: Option<String>,
    /// 图片二进制，未下载时为空
    pub image: Option<Vec<u8>>,
    pub imo: Option<i32>,
}

/// 待插入的图片行
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewImageRow {
    pub url: String,
    pub alt: Option<String>,
    pub image: Option<Vec<u8>>,
    pub imo: Option<i32>,
}
