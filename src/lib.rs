// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含船舶图片记录、仓库接口和页面抓取服务
pub mod domain;

/// 引擎模块
///
/// 实现HTTP抓取引擎和按域名限速
pub mod engines;

/// 基础设施模块
///
/// 提供数据库连接、实体和仓库实现
pub mod infrastructure;

/// 队列模块
///
/// 基于Kafka的消息发布与消费
pub mod queue;

/// 工具模块
///
/// 提供错误类型和日志初始化
pub mod utils;

/// 工作器模块
///
/// 实现抓取工作器和入库工作器
pub mod workers;
