// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::config::settings::Settings;
use crate::utils::errors::ClientError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;

/// 音乐节接口响应
#[derive(Debug, Clone)]
pub struct FestivalsResponse {
    /// HTTP状态码
    pub status_code: u16,
    /// 响应头 (键不区分大小写)
    pub headers: HeaderMap,
    /// 原始响应体
    pub body: String,
}

impl FestivalsResponse {
    /// 原样返回 `Content-Type` 响应头, 不做任何规范化
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> Result<serde_json::Value, ClientError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// 音乐节数据源特质
///
/// 每次调用 `fetch` 都发出一次独立的请求
#[async_trait]
pub trait FestivalsSource: Send + Sync {
    async fn fetch(&self) -> Result<FestivalsResponse, ClientError>;

    /// 数据源地址, 用于日志
    fn endpoint(&self) -> &str;
}

/// 基于reqwest的音乐节接口客户端
///
/// 普通 GET 请求: 无请求体、无认证头、不重试
pub struct FestivalsClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl FestivalsClient {
    /// 创建客户端
    ///
    /// # 参数
    ///
    /// * `endpoint` - 接口地址
    /// * `timeout` - 请求超时, `None` 表示不限制
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let endpoint = Url::parse(endpoint).map_err(|source| ClientError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            source,
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, ClientError> {
        Self::new(&settings.api.endpoint, settings.request_timeout())
    }
}

#[async_trait]
impl FestivalsSource for FestivalsClient {
    async fn fetch(&self) -> Result<FestivalsResponse, ClientError> {
        let start = Instant::now();
        let response = self.client.get(self.endpoint.clone()).send().await?;

        let status_code = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await?;

        debug!(
            endpoint = %self.endpoint,
            status = status_code,
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Fetched festivals"
        );

        Ok(FestivalsResponse {
            status_code,
            headers,
            body,
        })
    }

    fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

#[cfg(test)]
#[path = "festivals_client_test.rs"]
mod tests;
