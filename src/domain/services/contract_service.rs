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

use crate::config::settings::{Settings, DEFAULT_EXPECTED_CONTENT_TYPE, DEFAULT_EXPECTED_STATUS};
use crate::domain::models::festival::{festivals_from_value, MusicFestival};
use crate::infrastructure::festivals_client::{FestivalsClient, FestivalsSource};
use crate::infrastructure::fixture_loader::FixtureLoader;
use crate::utils::errors::{ClientError, ContractError, ContractResult};
use std::sync::Arc;
use tracing::{info, warn};

pub const CHECK_STATUS_CODE: &str = "status_code";
pub const CHECK_CONTENTS: &str = "contents";
pub const CHECK_CONTENT_TYPE: &str = "content_type";

/// 单项检查的通过结果, `Skipped` 表示状态码不符而未校验内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed,
    Skipped { status: u16 },
}

impl CheckOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, CheckOutcome::Skipped { .. })
    }
}

/// 单项检查记录
#[derive(Debug)]
pub struct CheckRecord {
    pub name: &'static str,
    pub result: ContractResult<CheckOutcome>,
}

/// 全部检查的汇总报告
#[derive(Debug, Default)]
pub struct ContractReport {
    pub checks: Vec<CheckRecord>,
}

impl ContractReport {
    pub fn is_success(&self) -> bool {
        self.checks.iter().all(|c| c.result.is_ok())
    }

    pub fn get(&self, name: &str) -> Option<&ContractResult<CheckOutcome>> {
        self.checks.iter().find(|c| c.name == name).map(|c| &c.result)
    }

    pub fn failures(&self) -> impl Iterator<Item = (&'static str, &ContractError)> {
        self.checks
            .iter()
            .filter_map(|c| c.result.as_ref().err().map(|e| (c.name, e)))
    }
}

/// 音乐节接口契约服务
///
/// 三项检查相互独立, 每项都会单独发出一次请求
pub struct ContractService {
    source: Arc<dyn FestivalsSource>,
    fixtures: FixtureLoader,
    expected_status: u16,
    expected_content_type: String,
}

impl ContractService {
    pub fn new(source: Arc<dyn FestivalsSource>, fixtures: FixtureLoader) -> Self {
        Self {
            source,
            fixtures,
            expected_status: DEFAULT_EXPECTED_STATUS,
            expected_content_type: DEFAULT_EXPECTED_CONTENT_TYPE.to_string(),
        }
    }

    /// 按配置创建服务, 使用基于reqwest的客户端
    pub fn from_settings(settings: &Settings) -> Result<Self, ClientError> {
        let client = FestivalsClient::from_settings(settings)?;
        Ok(Self::new(
            Arc::new(client),
            FixtureLoader::new(settings.fixture.path.clone()),
        )
        .with_expectations(
            settings.contract.expected_status,
            settings.contract.expected_content_type.clone(),
        ))
    }

    pub fn with_expectations(mut self, status: u16, content_type: impl Into<String>) -> Self {
        self.expected_status = status;
        self.expected_content_type = content_type.into();
        self
    }

    /// 检查状态码
    ///
    /// 线上接口偶尔返回 429, 此检查不做重试
    pub async fn check_status(&self) -> ContractResult<CheckOutcome> {
        let response = self.source.fetch().await?;

        if response.status_code != self.expected_status {
            return Err(ContractError::StatusMismatch {
                expected: self.expected_status,
                actual: response.status_code,
            });
        }

        info!(endpoint = self.source.endpoint(), "Status code check passed");
        Ok(CheckOutcome::Passed)
    }

    /// 检查响应内容是否与夹具一致
    ///
    /// 状态码不符时不做校验, 返回 `CheckOutcome::Skipped`
    pub async fn check_contents(&self) -> ContractResult<CheckOutcome> {
        let response = self.source.fetch().await?;

        if response.status_code != self.expected_status {
            warn!(
                endpoint = self.source.endpoint(),
                status = response.status_code,
                "Skipping content check"
            );
            return Ok(CheckOutcome::Skipped {
                status: response.status_code,
            });
        }

        let actual = festivals_from_value(&response.json()?)?;
        let expected = self.fixtures.load().await?;
        compare_festivals(&expected, &actual)?;

        info!(
            endpoint = self.source.endpoint(),
            festivals = actual.len(),
            "Content check passed"
        );
        Ok(CheckOutcome::Passed)
    }

    /// 检查 `Content-Type` 响应头, 与状态码无关
    pub async fn check_content_type(&self) -> ContractResult<CheckOutcome> {
        let response = self.source.fetch().await?;

        match response.content_type() {
            Some(actual) if actual == self.expected_content_type => {
                info!(endpoint = self.source.endpoint(), "Content type check passed");
                Ok(CheckOutcome::Passed)
            }
            actual => Err(ContractError::ContentTypeMismatch {
                expected: self.expected_content_type.clone(),
                actual: actual.map(str::to_string),
            }),
        }
    }

    /// 依次执行全部检查, 某项失败不影响其余检查
    pub async fn verify_all(&self) -> ContractReport {
        let mut report = ContractReport::default();

        report.checks.push(CheckRecord {
            name: CHECK_STATUS_CODE,
            result: self.check_status().await,
        });
        report.checks.push(CheckRecord {
            name: CHECK_CONTENTS,
            result: self.check_contents().await,
        });
        report.checks.push(CheckRecord {
            name: CHECK_CONTENT_TYPE,
            result: self.check_content_type().await,
        });

        for (name, error) in report.failures() {
            warn!(check = name, error = %error, "Contract check failed");
        }

        report
    }
}

/// 按位置逐个比较音乐节列表
///
/// 长度不同时报告长度差异, 否则报告第一个不同的位置
pub fn compare_festivals(expected: &[MusicFestival], actual: &[MusicFestival]) -> ContractResult<()> {
    if expected.len() != actual.len() {
        return Err(ContractError::LengthMismatch {
            expected: expected.len(),
            actual: actual.len(),
        });
    }

    match expected
        .iter()
        .zip(actual)
        .position(|(expected, actual)| expected != actual)
    {
        Some(index) => Err(ContractError::FestivalMismatch {
            index,
            expected: Box::new(expected[index].clone()),
            actual: Box::new(actual[index].clone()),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "contract_service_test.rs"]
mod tests;
