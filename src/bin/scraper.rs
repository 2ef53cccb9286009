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

use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use vesselpix::config::settings::Settings;
use vesselpix::domain::services::extraction_service::ImageExtractor;
use vesselpix::domain::services::page_scraper::PageScraper;
use vesselpix::engines::rate_limiter::DomainRateLimiter;
use vesselpix::engines::reqwest_engine::{RequestProfile, ReqwestEngine};
use vesselpix::infrastructure::database::connection;
use vesselpix::infrastructure::repositories::worklist_repo_impl::WorklistRepositoryImpl;
use vesselpix::queue::publisher::{ImagePublisher, KafkaPublisher};
use vesselpix::utils::telemetry;
use vesselpix::workers::scrape_worker::ScrapeWorker;

/// 主函数
///
/// 抓取端入口：读取待处理船舶，抓取主图并发布到Kafka，然后延迟退出
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting vesselpix scraper...");

    // 2. Load configuration
    let settings = Settings::new()?;
    settings.validate_scraper()?;
    info!("Configuration loaded");

    // 3. Connect to database (read only, no migrations here)
    let db = Arc::new(connection::create_pool(&settings.database).await?);
    info!("Database connection established");
    let worklist = Arc::new(WorklistRepositoryImpl::new(db));

    // 4. Initialize fetch engine and page scraper
    let engine = Arc::new(ReqwestEngine::new(RequestProfile::from_settings(
        &settings.scraper,
    ))?);
    let limiter = DomainRateLimiter::new(
        &settings.scraper.domain_glob,
        Duration::from_millis(settings.scraper.delay_ms),
        Duration::from_millis(settings.scraper.random_delay_ms),
    )?;
    let extractor = ImageExtractor::new(&settings.scraper.image_selector)?;
    let scraper = PageScraper::new(engine, limiter, extractor);

    // 5. Initialize Kafka producer
    let publisher = Arc::new(KafkaPublisher::new(&settings.kafka)?);
    info!(topic = %settings.kafka.topic, "Kafka producer initialized");

    // 6. Run one scrape pass
    let worker = ScrapeWorker::new(worklist, scraper, publisher.clone(), settings.scraper.clone());
    let summary = worker.run_once().await?;
    info!(?summary, "Scraping complete");

    if let Err(e) = publisher.flush().await {
        warn!(error = %e, "Failed to flush pending messages");
    }

    // Keep the container alive for inspection before exiting
    info!(
        "Delaying exit for {} seconds...",
        settings.scraper.exit_delay_secs
    );
    tokio::time::sleep(Duration::from_secs(settings.scraper.exit_delay_secs)).await;

    Ok(())
}
