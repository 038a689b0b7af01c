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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str =
    "https://eacp.energyaustralia.com.au/codingtest/api/v1/festivals";
pub const DEFAULT_FIXTURE_PATH: &str = "data/festivals.json";
pub const DEFAULT_EXPECTED_STATUS: u16 = 200;
pub const DEFAULT_EXPECTED_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// 契约测试配置
///
/// 包含接口地址、夹具路径以及期望的响应特征
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 接口配置
    pub api: ApiSettings,
    /// 夹具配置
    pub fixture: FixtureSettings,
    /// 契约期望值
    pub contract: ContractSettings,
}

/// 接口配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// 音乐节列表接口地址
    pub endpoint: String,
    /// 请求超时时间（秒）, 未设置时不限制
    pub timeout_secs: Option<u64>,
}

/// 夹具配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureSettings {
    /// 夹具文件路径, 相对于工作目录
    pub path: PathBuf,
}

/// 契约期望值设置
#[derive(Debug, Clone, Deserialize)]
pub struct ContractSettings {
    pub expected_status: u16,
    pub expected_content_type: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiSettings {
                endpoint: DEFAULT_ENDPOINT.to_string(),
                timeout_secs: None,
            },
            fixture: FixtureSettings {
                path: PathBuf::from(DEFAULT_FIXTURE_PATH),
            },
            contract: ContractSettings {
                expected_status: DEFAULT_EXPECTED_STATUS,
                expected_content_type: DEFAULT_EXPECTED_CONTENT_TYPE.to_string(),
            },
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加默认值、`config/default`、`config/{APP_ENVIRONMENT}` 以及
    /// `FESTIVAL_CONTRACT__*` 环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败或接口地址无效
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// 从指定目录加载配置文件, 其余规则与 `new` 相同
    pub fn load_from(config_dir: &Path) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let default_file = config_dir.join("default");
        let env_file = config_dir.join(&env);
        let builder = Config::builder()
            .set_default("api.endpoint", DEFAULT_ENDPOINT)?
            .set_default("fixture.path", DEFAULT_FIXTURE_PATH)?
            .set_default(
                "contract.expected_status",
                i64::from(DEFAULT_EXPECTED_STATUS),
            )?
            .set_default("contract.expected_content_type", DEFAULT_EXPECTED_CONTENT_TYPE)?
            .add_source(File::from(default_file).required(false))
            .add_source(File::from(env_file).required(false))
            .add_source(Environment::with_prefix("FESTIVAL_CONTRACT").separator("__"));

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// 校验接口地址是否为合法的 http(s) URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = url::Url::parse(&self.api.endpoint).map_err(|e| {
            ConfigError::Message(format!("invalid api.endpoint `{}`: {}", self.api.endpoint, e))
        })?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::Message(format!(
                "unsupported api.endpoint scheme `{}`",
                other
            ))),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.api.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
