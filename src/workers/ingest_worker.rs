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
use tracing::{debug, error, info, instrument, warn};

use crate::config::settings::ConsumerSettings;
use crate::domain::models::image_record::ImageRecord;
use crate::domain::models::image_row::NewImageRow;
use crate::domain::repositories::image_repository::ImageRepository;
use crate::engines::traits::{FetchRequest, Fetcher};
use crate::queue::message_source::{InboundMessage, MessageSource};
use crate::queue::QueueError;
use crate::utils::errors::{RepositoryError, WorkerError};
use crate::workers::worker::Worker;

/// 单条消息的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOutcome {
    /// 新插入行的ID
    pub row_id: i32,
    /// 下载的图片大小，未下载时为空
    pub image_bytes: Option<usize>,
}

/// 入库工作器
///
/// 每轮：接收一条消息 → 解析 → 可选下载图片 → 插入 images → 确认
pub struct IngestWorker<S, R, F>
where
    S: MessageSource,
    R: ImageRepository,
    F: Fetcher,
{
    source: Arc<S>,
    repository: Arc<R>,
    downloader: Arc<F>,
    settings: ConsumerSettings,
}

impl<S, R, F> IngestWorker<S, R, F>
where
    S: MessageSource,
    R: ImageRepository,
    F: Fetcher,
{
    /// 创建新的入库工作器实例
    pub fn new(
        source: Arc<S>,
        repository: Arc<R>,
        downloader: Arc<F>,
        settings: ConsumerSettings,
    ) -> Self {
        Self {
            source,
            repository,
            downloader,
            settings,
        }
    }

    /// 处理下一条消息
    ///
    /// 成功的消息总是确认；失败的消息在 `ack_failed` 开启时也确认，
    /// 否则留给重新投递
    pub async fn poll_once(&self) -> Result<IngestOutcome, WorkerError> {
        let message = self.source.receive().await?;
        debug!(
            topic = %message.topic,
            partition = message.partition,
            offset = message.offset,
            "Received message"
        );

        let result = match &message.payload {
            Some(payload) => self.process(payload).await,
            None => Err(WorkerError::EmptyPayload),
        };

        if result.is_ok() || self.settings.ack_failed {
            self.acknowledge(&message).await;
        }

        result
    }

    async fn acknowledge(&self, message: &InboundMessage) {
        if let Err(e) = self.source.ack(message).await {
            warn!(
                partition = message.partition,
                offset = message.offset,
                error = %e,
                "Failed to commit offset"
            );
        }
    }

    /// 处理一条消息的内容
    #[instrument(skip(self, payload), fields(bytes = payload.len()))]
    pub async fn process(&self, payload: &[u8]) -> Result<IngestOutcome, WorkerError> {
        let record = ImageRecord::from_json(payload)?;

        let image = if self.settings.download_image {
            Some(self.download(&record.url).await?)
        } else {
            None
        };
        let image_bytes = image.as_ref().map(Vec::len);

        let row_id = self
            .repository
            .insert(NewImageRow {
                url: record.url.clone(),
                alt: Some(record.alt.clone()),
                image,
                imo: record.imo,
            })
            .await?;
        info!(row_id, url = %record.url, imo = ?record.imo, "Inserted image data");

        if let Some(path) = &self.settings.verify_output_path {
            if let Err(e) = self.verify(row_id, path).await {
                warn!(row_id, error = %e, "Read-back verification failed");
            }
        }

        Ok(IngestOutcome {
            row_id,
            image_bytes,
        })
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, WorkerError> {
        let response = self.downloader.fetch(&FetchRequest::get(url)).await?;
        debug!(url, size = response.body.len(), content_type = %response.content_type, "Downloaded image");
        Ok(response.body.to_vec())
    }

    /// 回读刚插入的行并把图片写到本地文件
    async fn verify(&self, row_id: i32, path: &str) -> Result<(), WorkerError> {
        let row = self
            .repository
            .find_by_id(row_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        tokio::fs::write(path, row.image.unwrap_or_default()).await?;
        info!(
            "Image saved as {} from URL: {} (Alt: {})",
            path,
            row.url,
            row.alt.unwrap_or_default()
        );
        Ok(())
    }
}

#[async_trait]
impl<S, R, F> Worker for IngestWorker<S, R, F>
where
    S: MessageSource,
    R: ImageRepository,
    F: Fetcher,
{
    /// 持续消费，单条消息的失败只记录日志；消息源关闭时返回
    async fn run(&self) -> Result<(), WorkerError> {
        info!("Starting Kafka consumer...");

        loop {
            match self.poll_once().await {
                Ok(outcome) => debug!(row_id = outcome.row_id, "Message processed"),
                Err(WorkerError::Queue(QueueError::Closed)) => {
                    info!("Message source closed, stopping consumer");
                    return Ok(());
                }
                Err(e) => error!(error = %e, "Failed to process message"),
            }
        }
    }

    fn name(&self) -> &str {
        "ingest_worker"
    }
}

#[cfg(test)]
#[path = "ingest_worker_test.rs"]
mod tests;
