// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 线上音乐节接口的契约测试
//!
//! 每个测试单独请求一次接口。运行: `cargo test -- --ignored`

use festival_contract::config::settings::Settings;
use festival_contract::domain::services::contract_service::{CheckOutcome, ContractService};
use festival_contract::utils::telemetry;

fn contract_service() -> anyhow::Result<ContractService> {
    telemetry::init_telemetry();
    let settings = Settings::new()?;
    Ok(ContractService::from_settings(&settings)?)
}

/// 接口应返回 200
///
/// 注意: 接口有时会返回 429 (请求过多)
#[tokio::test]
#[ignore = "calls the live festivals API"]
async fn test_get_festivals_status_code() -> anyhow::Result<()> {
    contract_service()?.check_status().await?;
    Ok(())
}

/// 接口返回的数据应与夹具一致
///
/// 状态码不是 200 时跳过校验
#[tokio::test]
#[ignore = "calls the live festivals API"]
async fn test_get_festivals_contents() -> anyhow::Result<()> {
    if let CheckOutcome::Skipped { status } = contract_service()?.check_contents().await? {
        tracing::warn!(status, "Live API did not return 200; contents not verified");
    }
    Ok(())
}

#[tokio::test]
#[ignore = "calls the live festivals API"]
async fn test_get_festivals_response_content_type() -> anyhow::Result<()> {
    contract_service()?.check_content_type().await?;
    Ok(())
}
