// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理契约测试的配置设置，包括接口地址、夹具路径与期望值
pub mod settings;
