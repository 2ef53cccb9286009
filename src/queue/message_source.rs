// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::KafkaSettings;
use crate::queue::QueueError;
use async_trait::async_trait;
use rdkafka::consumer::{CommitMode, Consumer, StreamConsumer};
use rdkafka::message::Message;
use rdkafka::{ClientConfig, Offset, TopicPartitionList};
use std::sync::Arc;
use tracing::info;

/// 收到的消息
///
/// 与客户端解耦的拷贝，处理完成后交给 `MessageSource::ack`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub payload: Option<Vec<u8>>,
    pub topic: String,
    pub partition: i32,
    pub offset: i64,
}

/// 消息源特质
///
/// 每轮处理为 接收 → 处理 → 确认，确认是显式的一步
#[async_trait]
pub trait MessageSource: Send + Sync {
    /// 阻塞等待下一条消息
    async fn receive(&self) -> Result<InboundMessage, QueueError>;

    /// 确认消息已处理，提交其后一个位点
    async fn ack(&self, message: &InboundMessage) -> Result<(), QueueError>;
}

/// Kafka消息源
///
/// 关闭自动提交，位点只在 `ack` 时提交
pub struct KafkaMessageSource {
    consumer: StreamConsumer,
}

impl KafkaMessageSource {
    /// 创建消费者并订阅主题
    ///
    /// # 参数
    ///
    /// * `settings` - Kafka配置，使用其中的 brokers / topic / group_id
    ///
    /// # 返回值
    ///
    /// * `Ok(KafkaMessageSource)` - 已订阅的消息源
    /// * `Err(QueueError)` - 客户端创建或订阅失败
    pub fn new(settings: &KafkaSettings) -> Result<Self, QueueError> {
        let consumer: StreamConsumer = ClientConfig::new()
            .set("bootstrap.servers", &settings.brokers)
            .set("group.id", &settings.group_id)
            .set("enable.auto.commit", "false")
            .set("enable.partition.eof", "false")
            .set("session.timeout.ms", "6000")
            .set("auto.offset.reset", "earliest")
            .create()?;

        consumer.subscribe(&[settings.topic.as_str()])?;
        info!(
            topic = %settings.topic,
            group_id = %settings.group_id,
            "Subscribed to Kafka topic"
        );

        Ok(Self { consumer })
    }
}

/// 构造提交列表：下一次从 offset + 1 开始消费
pub(crate) fn commit_list(message: &InboundMessage) -> Result<TopicPartitionList, QueueError> {
    let mut tpl = TopicPartitionList::new();
    tpl.add_partition_offset(
        &message.topic,
        message.partition,
        Offset::Offset(message.offset + 1),
    )?;
    Ok(tpl)
}

#[async_trait]
impl MessageSource for KafkaMessageSource {
    async fn receive(&self) -> Result<InboundMessage, QueueError> {
        let message = self.consumer.recv().await?;

        Ok(InboundMessage {
            payload: message.payload().map(|p| p.to_vec()),
            topic: message.topic().to_string(),
            partition: message.partition(),
            offset: message.offset(),
        })
    }

    async fn ack(&self, message: &InboundMessage) -> Result<(), QueueError> {
        let tpl = commit_list(message)?;
        self.consumer.commit(&tpl, CommitMode::Async)?;
        Ok(())
    }
}

#[async_trait]
impl<T: MessageSource + ?Sized> MessageSource for Arc<T> {
    async fn receive(&self) -> Result<InboundMessage, QueueError> {
        (**self).receive().await
    }

    async fn ack(&self, message: &InboundMessage) -> Result<(), QueueError> {
        (**self).ack(message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_list_points_past_message() {
        let message = InboundMessage {
            payload: Some(br#"{"url":"http://x/a.jpg","alt":"ship"}"#.to_vec()),
            topic: "image-data".to_string(),
            partition: 2,
            offset: 41,
        };

        let tpl = commit_list(&message).unwrap();
        let elem = tpl.find_partition("image-data", 2).unwrap();
        assert_eq!(elem.offset(), Offset::Offset(42));
        assert_eq!(tpl.count(), 1);
    }
}
