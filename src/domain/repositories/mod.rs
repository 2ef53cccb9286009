// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 定义存储层的访问接口，具体实现位于 infrastructure::repositories
pub mod image_repository;
pub mod worklist_repository;
