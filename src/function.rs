/*
 *
 *      Copyright (c) 2018-2025, SnackCloud All rights reserved.
 *
 *   Redistribution and use in source and binary forms, with or without
 *   modification, are permitted provided that the following conditions are met:
 *
 *   Redistributions of source code must retain the above copyright notice,
 *   this list of conditions and the following disclaimer.
 *   Redistributions in binary form must reproduce the above copyright
 *   notice, this list of conditions and the following disclaimer in the
 *   documentation and/or other materials provided with the distribution.
 *   Neither the name of the www.snackcloud.cn developer nor the names of its
 *   contributors may be used to endorse or promote products derived from
 *   this software without specific prior written permission.
 *   Author: SnackCloud
 *
 */

//!
//! 输出文件名称转换
//!
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constant::PLACE_HOLDER;

/// 根据实体名称生成输出文件名称
///
/// 配置文件中以格式字符串表示，`%s` 为实体名称占位符，例如 `%sDao`。
#[derive(Clone)]
pub enum ConverterFileName {
    Format(String),
    Custom(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl ConverterFileName {
    pub fn format<S: Into<String>>(format: S) -> Self {
        ConverterFileName::Format(format.into())
    }

    pub fn custom<F>(converter: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        ConverterFileName::Custom(Arc::new(converter))
    }

    pub fn convert(&self, entity_name: &str) -> String {
        match self {
            ConverterFileName::Format(format) => format.replace(PLACE_HOLDER, entity_name),
            ConverterFileName::Custom(converter) => converter(entity_name),
        }
    }
}

impl fmt::Debug for ConverterFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConverterFileName::Format(format) => f.debug_tuple("Format").field(format).finish(),
            ConverterFileName::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl Serialize for ConverterFileName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // 自定义转换以占位符的转换结果保存
        serializer.serialize_str(&self.convert(PLACE_HOLDER))
    }
}

impl<'de> Deserialize<'de> for ConverterFileName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(ConverterFileName::Format)
    }
}

#[test]
fn test_converter_file_name() {
    assert_eq!(ConverterFileName::format("%sDao").convert("User"), "UserDao");
    assert_eq!(ConverterFileName::format("I%sService").convert("User"), "IUserService");
    let custom = ConverterFileName::custom(|name| format!("{}Repository", name));
    assert_eq!(custom.convert("Order"), "OrderRepository");
    assert_eq!(serde_json::to_string(&custom).unwrap(), "\"%sRepository\"");
}
