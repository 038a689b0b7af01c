// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::{ModelError, ModelResult};
use serde::Serialize;
use serde_json::{Map, Value};

/// 乐队
///
/// 字段均为可选: 缺失或为 `null` 的键得到 `None`, 不会报错
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Band {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    record_label: Option<String>,
}

impl Band {
    pub fn new(name: Option<String>, record_label: Option<String>) -> Self {
        Self { name, record_label }
    }

    /// 从无类型的键值映射构建乐队
    ///
    /// # 参数
    ///
    /// * `map` - 包含 `name` 与 `recordLabel` 键的 JSON 对象
    ///
    /// # 返回值
    ///
    /// * `Ok(Band)` - 缺失的键对应 `None`
    /// * `Err(ModelError::Malformed)` - 字段存在但不是字符串
    ///
    /// 非字符串的值 (如 `"recordLabel": 42`) 有意报错而不是原样保留,
    /// 即使夹具与响应中的值相同也无法通过比较
    pub fn from_map(map: &Map<String, Value>) -> ModelResult<Self> {
        Ok(Self {
            name: optional_string(map, "name")?,
            record_label: optional_string(map, "recordLabel")?,
        })
    }

    pub fn from_value(value: &Value) -> ModelResult<Self> {
        Self::from_map(as_object(value)?)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn record_label(&self) -> Option<&str> {
        self.record_label.as_deref()
    }
}

/// 音乐节
///
/// 相等性按字段逐一比较, `bands` 的顺序参与比较
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MusicFestival {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    bands: Vec<Band>,
}

impl MusicFestival {
    pub fn new(name: Option<String>, bands: Vec<Band>) -> Self {
        Self { name, bands }
    }

    /// 从无类型的键值映射构建音乐节
    ///
    /// `name` 可选; `bands` 必填, 缺失时返回 `ModelError::MissingField`
    pub fn from_map(map: &Map<String, Value>) -> ModelResult<Self> {
        let name = optional_string(map, "name")?;
        let bands = match map.get("bands") {
            None => return Err(ModelError::MissingField("bands")),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    Band::from_value(item).map_err(|e| ModelError::Element {
                        index,
                        source: Box::new(e),
                    })
                })
                .collect::<ModelResult<Vec<_>>>()?,
            Some(other) => {
                return Err(ModelError::Malformed {
                    field: "bands",
                    reason: format!("expected array, got {}", kind_of(other)),
                })
            }
        };

        Ok(Self { name, bands })
    }

    pub fn from_value(value: &Value) -> ModelResult<Self> {
        Self::from_map(as_object(value)?)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }
}

/// 将 JSON 数组逐个映射为音乐节
///
/// 遇到第一个无效元素即返回错误, 错误中带有该元素的下标
pub fn festivals_from_value(value: &Value) -> ModelResult<Vec<MusicFestival>> {
    let items = value
        .as_array()
        .ok_or_else(|| ModelError::NotAnArray(kind_of(value)))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            MusicFestival::from_value(item).map_err(|e| ModelError::Element {
                index,
                source: Box::new(e),
            })
        })
        .collect()
}

fn as_object(value: &Value) -> ModelResult<&Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| ModelError::NotAnObject(kind_of(value)))
}

fn optional_string(map: &Map<String, Value>, field: &'static str) -> ModelResult<Option<String>> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ModelError::Malformed {
            field,
            reason: format!("expected string, got {}", kind_of(other)),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "festival_test.rs"]
mod tests;
