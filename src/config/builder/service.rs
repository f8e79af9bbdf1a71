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

use std::collections::HashMap;

use getset::Getters;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::builder::BaseBuilder;
use crate::config::{StrategyConfig, StrategyConfigBuilder};
use crate::constant::{SUPER_SERVICE_CLASS, SUPER_SERVICE_IMPL_CLASS};
use crate::function::ConverterFileName;
use crate::po::TableInfo;
use crate::util::simple_class_name;

/// Service 属性配置
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct Service {
    /// 自定义继承的Service类全称，带包名
    super_service_class: String,
    /// 自定义继承的ServiceImpl类全称，带包名
    super_service_impl_class: String,
    converter_service_file_name: ConverterFileName,
    converter_service_impl_file_name: ConverterFileName,
}

impl Default for Service {
    fn default() -> Self {
        Self {
            super_service_class: SUPER_SERVICE_CLASS.to_string(),
            super_service_impl_class: SUPER_SERVICE_IMPL_CLASS.to_string(),
            converter_service_file_name: ConverterFileName::format("I%sService"),
            converter_service_impl_file_name: ConverterFileName::format("%sServiceImpl"),
        }
    }
}

impl Service {
    pub fn builder() -> ServiceBuilder {
        StrategyConfig::builder().service_builder()
    }

    pub fn render_data(&self, _table_info: &TableInfo) -> HashMap<String, Value> {
        let mut data = HashMap::new();
        data.insert("superServiceClassPackage".to_string(), json!(self.super_service_class));
        data.insert("superServiceClass".to_string(), json!(simple_class_name(&self.super_service_class)));
        data.insert("superServiceImplClassPackage".to_string(), json!(self.super_service_impl_class));
        data.insert("superServiceImplClass".to_string(), json!(simple_class_name(&self.super_service_impl_class)));
        data
    }
}

pub struct ServiceBuilder {
    strategy: StrategyConfigBuilder,
}

impl ServiceBuilder {
    pub(crate) fn new(strategy: StrategyConfigBuilder) -> Self {
        Self { strategy }
    }

    fn service(&mut self) -> &mut Service {
        self.strategy.config_mut().service_mut()
    }

    pub fn super_service_class<S: Into<String>>(mut self, super_service_class: S) -> Self {
        self.service().super_service_class = super_service_class.into();
        self
    }

    pub fn super_service_impl_class<S: Into<String>>(mut self, super_service_impl_class: S) -> Self {
        self.service().super_service_impl_class = super_service_impl_class.into();
        self
    }

    pub fn convert_service_file_name(mut self, converter: ConverterFileName) -> Self {
        self.service().converter_service_file_name = converter;
        self
    }

    pub fn convert_service_impl_file_name(mut self, converter: ConverterFileName) -> Self {
        self.service().converter_service_impl_file_name = converter;
        self
    }

    pub fn format_service_file_name<S: Into<String>>(self, format: S) -> Self {
        self.convert_service_file_name(ConverterFileName::format(format))
    }

    pub fn format_service_impl_file_name<S: Into<String>>(self, format: S) -> Self {
        self.convert_service_impl_file_name(ConverterFileName::format(format))
    }

    pub fn get(&self) -> &Service {
        self.strategy.config().service()
    }
}

impl BaseBuilder for ServiceBuilder {
    fn into_strategy(self) -> StrategyConfigBuilder {
        self.strategy
    }
}

#[test]
fn test_service_names() {
    let service = Service::builder().format_service_file_name("%sService").get().clone();
    assert_eq!(service.converter_service_file_name().convert("User"), "UserService");
    assert_eq!(service.converter_service_impl_file_name().convert("User"), "UserServiceImpl");
    let data = service.render_data(&TableInfo::default());
    assert_eq!(data["superServiceClass"], "IService");
    assert_eq!(data["superServiceImplClass"], "ServiceImpl");
}
