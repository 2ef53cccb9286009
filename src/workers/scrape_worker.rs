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

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::config::settings::ScraperSettings;
use crate::domain::models::image_record::ImageRecord;
use crate::domain::models::work_item::WorkItem;
use crate::domain::repositories::worklist_repository::WorklistRepository;
use crate::domain::services::page_scraper::PageScraper;
use crate::engines::traits::Fetcher;
use crate::queue::publisher::ImagePublisher;
use crate::utils::errors::WorkerError;
use crate::workers::worker::Worker;

/// 一轮抓取的统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapeSummary {
    /// 待处理船舶数
    pub pending: usize,
    /// 已发布的消息数
    pub published: usize,
    /// 页面上没有找到图片的船舶数
    pub missed: usize,
    /// 抓取或发布失败的船舶数
    pub failed: usize,
}

enum ItemOutcome {
    Published,
    Missed,
}

/// 抓取工作器
///
/// 顺序处理每一艘待处理船舶：抓取详情页、提取主图、发布记录
pub struct ScrapeWorker<W, F, P>
where
    W: WorklistRepository,
    F: Fetcher,
    P: ImagePublisher,
{
    worklist: Arc<W>,
    scraper: PageScraper<F>,
    publisher: Arc<P>,
    settings: ScraperSettings,
}

impl<W, F, P> ScrapeWorker<W, F, P>
where
    W: WorklistRepository,
    F: Fetcher,
    P: ImagePublisher,
{
    /// 创建新的抓取工作器实例
    pub fn new(
        worklist: Arc<W>,
        scraper: PageScraper<F>,
        publisher: Arc<P>,
        settings: ScraperSettings,
    ) -> Self {
        Self {
            worklist,
            scraper,
            publisher,
            settings,
        }
    }

    /// 执行一轮抓取
    ///
    /// 读取待处理列表失败时返回错误；单艘船舶的失败只记录日志并计数
    pub async fn run_once(&self) -> Result<ScrapeSummary, WorkerError> {
        info!("Retrieving names and IMOs from db...");
        let pending = self.worklist.pending_vessels().await?;

        let mut summary = ScrapeSummary {
            pending: pending.len(),
            ..Default::default()
        };

        if pending.is_empty() {
            info!("No new vessels");
            return Ok(summary);
        }

        for item in &pending {
            match self.process_item(item).await {
                Ok(ItemOutcome::Published) => summary.published += 1,
                Ok(ItemOutcome::Missed) => summary.missed += 1,
                Err(e) => {
                    summary.failed += 1;
                    warn!(imo = item.imo, error = %e, "Skipping vessel");
                }
            }
        }

        info!(
            pending = summary.pending,
            published = summary.published,
            missed = summary.missed,
            failed = summary.failed,
            "Scrape pass finished"
        );
        Ok(summary)
    }

    #[instrument(skip(self, item), fields(imo = item.imo, name = %item.name))]
    async fn process_item(&self, item: &WorkItem) -> Result<ItemOutcome, WorkerError> {
        let target_url = self.settings.page_url(item.imo);
        info!(url = %target_url, "Scraping vessel page");

        let record = if self.settings.include_vessel_fields {
            ImageRecord::for_vessel(item)
        } else {
            ImageRecord::default()
        };

        let record = self.scraper.scrape(&target_url, record).await?;
        if !record.has_image() {
            info!("No image found on vessel page");
            return Ok(ItemOutcome::Missed);
        }

        self.publisher.publish(&record).await?;
        Ok(ItemOutcome::Published)
    }
}

#[async_trait]
impl<W, F, P> Worker for ScrapeWorker<W, F, P>
where
    W: WorklistRepository,
    F: Fetcher,
    P: ImagePublisher,
{
    async fn run(&self) -> Result<(), WorkerError> {
        self.run_once().await.map(|_| ())
    }

    fn name(&self) -> &str {
        "scrape_worker"
    }
}

#[cfg(test)]
#[path = "scrape_worker_test.rs"]
mod tests;
