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
use tracing::info;

use vesselpix::config::settings::Settings;
use vesselpix::domain::repositories::image_repository::ImageRepository;
use vesselpix::engines::reqwest_engine::{RequestProfile, ReqwestEngine};
use vesselpix::infrastructure::database::connection;
use vesselpix::infrastructure::repositories::image_repo_impl::ImageRepositoryImpl;
use vesselpix::queue::message_source::KafkaMessageSource;
use vesselpix::utils::telemetry;
use vesselpix::workers::ingest_worker::IngestWorker;
use vesselpix::workers::Worker;

/// 主函数
///
/// 入库端入口：确保表结构存在，然后持续消费Kafka消息并写入images表
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting vesselpix consumer...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Connect to database and ensure schema
    let db = Arc::new(connection::create_pool(&settings.database).await?);
    info!("Database connection established");

    let repository = Arc::new(ImageRepositoryImpl::new(db));
    repository.ensure_schema().await?;
    info!("Database migrations applied");

    // 4. Image downloader without scraper headers
    let downloader = Arc::new(ReqwestEngine::new(RequestProfile::plain(
        settings.scraper.request_timeout(),
    ))?);

    // 5. Subscribe to topic
    let source = Arc::new(KafkaMessageSource::new(&settings.kafka)?);
    info!(
        topic = %settings.kafka.topic,
        group_id = %settings.kafka.group_id,
        "Kafka consumer subscribed"
    );

    // 6. Consume until the source closes
    let worker = IngestWorker::new(source, repository, downloader, settings.consumer.clone());
    info!("Starting worker: {}", worker.name());
    worker.run().await?;

    Ok(())
}
