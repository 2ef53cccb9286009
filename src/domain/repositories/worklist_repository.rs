// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::work_item::WorkItem;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 待处理船舶仓库特质
#[async_trait]
pub trait WorklistRepository: Send + Sync {
    /// 查询 images 表中还没有图片的船舶（去重，一次性读取全部结果）
    async fn pending_vessels(&self) -> Result<Vec<WorkItem>, RepositoryError>;
}
