// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::KafkaSettings;
use crate::domain::models::image_record::ImageRecord;
use crate::queue::QueueError;
use async_trait::async_trait;
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use rdkafka::ClientConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// 图片记录发布特质
#[async_trait]
pub trait ImagePublisher: Send + Sync {
    /// 发布一条记录，每次调用对应一条消息
    async fn publish(&self, record: &ImageRecord) -> Result<(), QueueError>;

    /// 等待缓冲中的消息发送完成
    async fn flush(&self) -> Result<(), QueueError>;
}

/// Kafka发布者
///
/// 不设置消息key，分区由broker默认分区器决定
pub struct KafkaPublisher {
    producer: FutureProducer,
    topic: String,
    flush_timeout: Duration,
}

impl KafkaPublisher {
    /// 创建发布者
    ///
    /// # 参数
    ///
    /// * `settings` - Kafka配置
    ///
    /// # 返回值
    ///
    /// * `Ok(KafkaPublisher)` - 发布者
    /// * `Err(QueueError)` - 客户端创建失败
    pub fn new(settings: &KafkaSettings) -> Result<Self, QueueError> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", &settings.brokers)
            .set("message.timeout.ms", settings.message_timeout_ms.to_string())
            .create()?;

        Ok(Self {
            producer,
            topic: settings.topic.clone(),
            flush_timeout: Duration::from_millis(settings.message_timeout_ms),
        })
    }
}

#[async_trait]
impl ImagePublisher for KafkaPublisher {
    async fn publish(&self, record: &ImageRecord) -> Result<(), QueueError> {
        let payload = record.to_json()?;
        debug!(
            "Attempting to send message to Kafka: {}",
            String::from_utf8_lossy(&payload)
        );

        let message = FutureRecord::<(), _>::to(&self.topic).payload(&payload);
        let delivery = self
            .producer
            .send(message, Duration::from_secs(0))
            .await
            .map_err(|(e, _)| QueueError::Kafka(e))?;

        info!(topic = %self.topic, ?delivery, "Message sent successfully to Kafka");
        Ok(())
    }

    async fn flush(&self) -> Result<(), QueueError> {
        self.producer.flush(self.flush_timeout)?;
        Ok(())
    }
}

#[async_trait]
impl<T: ImagePublisher + ?Sized> ImagePublisher for Arc<T> {
    async fn publish(&self, record: &ImageRecord) -> Result<(), QueueError> {
        (**self).publish(record).await
    }

    async fn flush(&self) -> Result<(), QueueError> {
        (**self).flush().await
    }
}
