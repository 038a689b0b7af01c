// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含契约测试的核心逻辑，包括：
/// - 领域模型（models）：与接口 JSON 结构对应的值对象
/// - 服务（services）：状态码、响应内容与 Content-Type 的契约检查
///
/// 领域层只依赖数据源特质，不关心请求如何发出。
pub mod models;
pub mod services;
