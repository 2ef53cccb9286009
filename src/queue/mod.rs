// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 队列模块
///
/// 图片记录经由Kafka主题从抓取器流向消费者：
/// - publisher：生产端，序列化并发送记录
/// - message_source：消费端，接收消息并显式确认
pub mod message_source;
pub mod publisher;

use rdkafka::error::KafkaError;
use thiserror::Error;

/// 队列错误类型
#[derive(Error, Debug)]
pub enum QueueError {
    /// Kafka客户端错误
    #[error("Kafka error: {0}")]
    Kafka(#[from] KafkaError),

    /// 序列化失败
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 消息源已关闭，不会再有新消息
    #[error("Message source closed")]
    Closed,
}
