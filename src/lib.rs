// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理接口地址、夹具路径等配置与环境变量
pub mod config;

/// 领域模块
///
/// 包含音乐节值对象与契约检查服务
pub mod domain;

/// 基础设施模块
///
/// 提供 HTTP 客户端与夹具文件读取
pub mod infrastructure;

/// 工具模块
///
/// 提供错误类型与日志初始化
pub mod utils;
