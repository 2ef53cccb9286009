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

use crate::domain::models::work_item::WorkItem;
use crate::domain::repositories::worklist_repository::WorklistRepository;
use crate::infrastructure::database::entities::{image, vessel};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use sea_orm::sea_query::Query;
use sea_orm::*;
use std::sync::Arc;

/// 待处理船舶仓库实现
pub struct WorklistRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl WorklistRepositoryImpl {
    /// 创建新的仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WorklistRepository for WorklistRepositoryImpl {
    /// SELECT DISTINCT imo, name FROM vessels
    /// WHERE imo NOT IN (SELECT imo FROM images WHERE imo IS NOT NULL)
    async fn pending_vessels(&self) -> Result<Vec<WorkItem>, RepositoryError> {
        let rows: Vec<(i32, String)> = vessel::Entity::find()
            .select_only()
            .column(vessel::Column::Imo)
            .column(vessel::Column::Name)
            .distinct()
            .filter(
                vessel::Column::Imo.not_in_subquery(
                    Query::select()
                        .column(image::Column::Imo)
                        .from(image::Entity)
                        .and_where(image::Column::Imo.is_not_null())
                        .to_owned(),
                ),
            )
            .order_by_asc(vessel::Column::Imo)
            .into_tuple()
            .all(self.db.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .map(|(imo, name)| WorkItem { imo, name })
            .collect())
    }
}

#[cfg(test)]
#[path = "worklist_repo_impl_test.rs"]
mod tests;
