// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 音乐节（festival）：音乐节与乐队值对象及其构建规则
pub mod festival;
