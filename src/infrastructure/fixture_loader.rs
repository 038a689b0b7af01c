// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::festival::{festivals_from_value, MusicFestival};
use crate::utils::errors::FixtureError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 夹具加载器
///
/// 不缓存: 每次调用都重新读取并解析文件
#[derive(Debug, Clone)]
pub struct FixtureLoader {
    path: PathBuf,
}

impl FixtureLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取夹具文件并解码为 JSON
    pub async fn load_raw(&self) -> Result<serde_json::Value, FixtureError> {
        let content = tokio::fs::read_to_string(self.path())
            .await
            .map_err(|source| FixtureError::Io {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path().display(), bytes = content.len(), "Loaded fixture");

        serde_json::from_str(&content).map_err(|source| FixtureError::Json {
            path: self.path.clone(),
            source,
        })
    }

    /// 读取夹具文件并映射为音乐节列表
    pub async fn load(&self) -> Result<Vec<MusicFestival>, FixtureError> {
        let raw = self.load_raw().await?;
        festivals_from_value(&raw).map_err(|source| FixtureError::Model {
            path: self.path.clone(),
            source,
        })
    }
}
