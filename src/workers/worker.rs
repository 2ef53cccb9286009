// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::WorkerError;
use async_trait::async_trait;

/// 进程主循环
///
/// `ScrapeWorker` 跑完一轮待处理船舶后返回；
/// `IngestWorker` 持续消费，直到消息源关闭才返回
#[async_trait]
pub trait Worker: Send + Sync {
    /// 运行主循环，只有致命错误才返回 `Err`
    async fn run(&self) -> Result<(), WorkerError>;

    /// 日志中使用的名称
    fn name(&self) -> &str;
}
