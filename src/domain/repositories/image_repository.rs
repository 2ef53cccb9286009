// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::image_row::{ImageRow, NewImageRow};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 图片仓库特质
///
/// 只有插入和按ID查询，没有更新和删除
#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// 确保表结构存在，可重复调用
    async fn ensure_schema(&self) -> Result<(), RepositoryError>;

    /// 插入一行并返回新行的ID
    async fn insert(&self, row: NewImageRow) -> Result<i32, RepositoryError>;

    /// 根据ID查找
    async fn find_by_id(&self, id: i32) -> Result<Option<ImageRow>, RepositoryError>;
}
