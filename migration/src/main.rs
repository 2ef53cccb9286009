// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 迁移命令行入口
///
/// 手动管理 vessels / images 表结构，消费者启动时也会自动执行同样的迁移
#[async_std::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
