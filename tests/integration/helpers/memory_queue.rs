// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use vesselpix::domain::models::image_record::ImageRecord;
use vesselpix::queue::message_source::{InboundMessage, MessageSource};
use vesselpix::queue::publisher::ImagePublisher;
use vesselpix::queue::QueueError;

/// 内存队列，同时充当发布端和消费端
///
/// 队列清空后 `receive` 返回 `Closed`，消费循环随之结束
#[derive(Default)]
pub struct MemoryQueue {
    pending: Mutex<VecDeque<InboundMessage>>,
    next_offset: Mutex<i64>,
    acked: Mutex<Vec<i64>>,
}

impl MemoryQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    pub fn acked(&self) -> Vec<i64> {
        self.acked.lock().unwrap().clone()
    }

    pub fn payloads(&self) -> Vec<ImageRecord> {
        self.pending
            .lock()
            .unwrap()
            .iter()
            .filter_map(|m| m.payload.as_deref())
            .map(|p| ImageRecord::from_json(p).unwrap())
            .collect()
    }
}

#[async_trait]
impl ImagePublisher for MemoryQueue {
    async fn publish(&self, record: &ImageRecord) -> Result<(), QueueError> {
        let payload = record.to_json()?;
        let mut offset = self.next_offset.lock().unwrap();
        self.pending.lock().unwrap().push_back(InboundMessage {
            payload: Some(payload),
            topic: "image-data".to_string(),
            partition: 0,
            offset: *offset,
        });
        *offset += 1;
        Ok(())
    }

    async fn flush(&self) -> Result<(), QueueError> {
        Ok(())
    }
}

#[async_trait]
impl MessageSource for MemoryQueue {
    async fn receive(&self) -> Result<InboundMessage, QueueError> {
        self.pending
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(QueueError::Closed)
    }

    async fn ack(&self, message: &InboundMessage) -> Result<(), QueueError> {
        self.acked.lock().unwrap().push(message.offset);
        Ok(())
    }
}
