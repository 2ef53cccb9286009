// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::EngineError;
use crate::queue::QueueError;
use thiserror::Error;

/// 仓库层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("数据库错误: {0}")]
    DatabaseError(#[from] sea_orm::DbErr),

    #[error("未找到数据")]
    NotFound,
}

/// Worker错误类型
///
/// 单个工作单元（一个船舶或一条消息）的失败原因，调用方记录日志后跳过该单元
#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("仓库错误: {0}")]
    Repository(#[from] RepositoryError),

    #[error("抓取错误: {0}")]
    Fetch(#[from] EngineError),

    #[error("队列错误: {0}")]
    Queue(#[from] QueueError),

    #[error("消息解析失败: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("消息内容为空")]
    EmptyPayload,

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}
