// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工作器模块
///
/// - scrape_worker：遍历待处理船舶，抓取并发布图片记录
/// - ingest_worker：消费图片记录并入库
pub mod ingest_worker;
pub mod scrape_worker;
pub mod worker;

pub use worker::Worker;
