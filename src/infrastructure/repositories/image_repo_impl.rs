// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::image_row::{ImageRow, NewImageRow};
use crate::domain::repositories::image_repository::ImageRepository;
use crate::infrastructure::database::entities::image as image_entity;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use migration::{Migrator, MigratorTrait};
use sea_orm::*;
use std::sync::Arc;

/// 图片仓库实现
pub struct ImageRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl ImageRepositoryImpl {
    /// 创建新的图片仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的图片仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<image_entity::Model> for ImageRow {
    fn from(m: image_entity::Model) -> Self {
        Self {
            id: m.id,
            url: m.url,
            alt: m.alt,
            image: m.image,
            imo: m.imo,
        }
    }
}

#[async_trait]
impl ImageRepository for ImageRepositoryImpl {
    /// 建表语句都带 IF NOT EXISTS，已执行过的迁移会被跳过
    async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        Migrator::up(self.db.as_ref(), None).await?;
        Ok(())
    }

    async fn insert(&self, row: NewImageRow) -> Result<i32, RepositoryError> {
        let active_model = image_entity::ActiveModel {
            id: NotSet,
            url: Set(row.url),
            alt: Set(row.alt),
            image: Set(row.image),
            imo: Set(row.imo),
        };

        let result = image_entity::Entity::insert(active_model)
            .exec(self.db.as_ref())
            .await?;

        Ok(result.last_insert_id)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ImageRow>, RepositoryError> {
        let model = image_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(ImageRow::from))
    }
}

#[cfg(test)]
#[path = "image_repo_impl_test.rs"]
mod tests;
