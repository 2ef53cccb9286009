// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 与外部系统交互的具体实现：
/// - 数据库（database）：连接池与实体映射
/// - 仓库实现（repositories）：领域仓库接口的 SeaORM 实现
pub mod database;
pub mod repositories;
