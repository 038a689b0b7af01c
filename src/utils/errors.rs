// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::festival::MusicFestival;
use std::path::PathBuf;
use thiserror::Error;

/// 模型构建错误类型
#[derive(Error, Debug)]
pub enum ModelError {
    /// 缺少必填字段
    #[error("缺少必填字段: {0}")]
    MissingField(&'static str),

    /// 值不是 JSON 对象
    #[error("期望 JSON 对象, 实际为 {0}")]
    NotAnObject(&'static str),

    /// 期望 JSON 数组
    #[error("期望 JSON 数组, 实际为 {0}")]
    NotAnArray(&'static str),

    /// 字段类型错误
    #[error("字段 `{field}` 格式错误: {reason}")]
    Malformed { field: &'static str, reason: String },

    /// 数组中某个元素无法构建
    #[error("第 {index} 个元素无效: {source}")]
    Element {
        index: usize,
        #[source]
        source: Box<ModelError>,
    },
}

/// HTTP 客户端错误类型
#[derive(Error, Debug)]
pub enum ClientError {
    /// 请求失败 (DNS、连接、超时等)
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// 无效的端点地址
    #[error("Invalid endpoint `{endpoint}`: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    /// 响应体无法解码
    #[error("Response body is not valid JSON: {0}")]
    Body(#[from] serde_json::Error),
}

/// 夹具加载错误类型
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("无法读取夹具文件 {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("夹具文件 {path} 不是有效的 JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("夹具文件 {path} 结构错误: {source}")]
    Model {
        path: PathBuf,
        #[source]
        source: ModelError,
    },
}

/// 契约校验错误类型
#[derive(Error, Debug)]
pub enum ContractError {
    /// 状态码不符
    #[error("status code mismatch: expected {expected}, got {actual}")]
    StatusMismatch { expected: u16, actual: u16 },

    /// Content-Type 不符
    #[error("content type mismatch: expected {expected:?}, got {actual:?}")]
    ContentTypeMismatch {
        expected: String,
        actual: Option<String>,
    },

    /// 节日数量不符
    #[error("festival count mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// 某个位置上的节日不符
    #[error("festival #{index} differs: expected {expected:?}, got {actual:?}")]
    FestivalMismatch {
        index: usize,
        expected: Box<MusicFestival>,
        actual: Box<MusicFestival>,
    },

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error("response body does not match the festival schema: {0}")]
    Model(#[from] ModelError),
}

impl ContractError {
    /// 判断是否为契约本身不符 (而非网络、夹具等环境问题)
    pub fn is_violation(&self) -> bool {
        matches!(
            self,
            ContractError::StatusMismatch { .. }
                | ContractError::ContentTypeMismatch { .. }
                | ContractError::LengthMismatch { .. }
                | ContractError::FestivalMismatch { .. }
                | ContractError::Model(_)
                | ContractError::Client(ClientError::Body(_))
        )
    }
}

pub type ModelResult<T> = std::result::Result<T, ModelError>;
pub type ContractResult<T> = std::result::Result<T, ContractError>;
