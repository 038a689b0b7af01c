// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 契约服务（contract_service）：针对音乐节接口的三项独立检查
pub mod contract_service;
