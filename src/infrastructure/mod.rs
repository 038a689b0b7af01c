// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 包含的子模块：
/// - 接口客户端（festivals_client）：基于reqwest的音乐节接口客户端
/// - 夹具加载（fixture_loader）：读取本地 JSON 夹具文件
pub mod festivals_client;
pub mod fixture_loader;
