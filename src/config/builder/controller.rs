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
use crate::function::ConverterFileName;
use crate::po::TableInfo;
use crate::util::{camel_to_hyphen, simple_class_name};

/// 控制器属性配置
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct Controller {
    /// 生成 `@RestController` 控制器
    rest_style: bool,
    /// 驼峰转连字符 `@RequestMapping("/managerUserActionHistory")` -> `@RequestMapping("/manager-user-action-history")`
    hyphen_style: bool,
    /// 自定义继承的Controller类全称，带包名
    super_class: Option<String>,
    converter_file_name: ConverterFileName,
}

impl Default for Controller {
    fn default() -> Self {
        Self {
            rest_style: false,
            hyphen_style: false,
            super_class: None,
            converter_file_name: ConverterFileName::format("%sController"),
        }
    }
}

impl Controller {
    pub fn builder() -> ControllerBuilder {
        StrategyConfig::builder().controller_builder()
    }

    pub fn render_data(&self, table_info: &TableInfo) -> HashMap<String, Value> {
        let super_class = self.super_class.as_deref().filter(|class| !class.trim().is_empty());
        let mut data = HashMap::new();
        data.insert("controllerMappingHyphen".to_string(), json!(camel_to_hyphen(&table_info.entity_path())));
        data.insert("controllerMappingHyphenStyle".to_string(), json!(self.hyphen_style));
        data.insert("restControllerStyle".to_string(), json!(self.rest_style));
        data.insert("superControllerClassPackage".to_string(), json!(super_class));
        data.insert("superControllerClass".to_string(), json!(super_class.map(simple_class_name)));
        data
    }
}

pub struct ControllerBuilder {
    strategy: StrategyConfigBuilder,
}

impl ControllerBuilder {
    pub(crate) fn new(strategy: StrategyConfigBuilder) -> Self {
        Self { strategy }
    }

    fn controller(&mut self) -> &mut Controller {
        self.strategy.config_mut().controller_mut()
    }

    pub fn super_class<S: Into<String>>(mut self, super_class: S) -> Self {
        self.controller().super_class = Some(super_class.into());
        self
    }

    /// 开启生成 `@RestController` 控制器
    pub fn enable_rest_style(mut self) -> Self {
        self.controller().rest_style = true;
        self
    }

    /// 开启驼峰转连字符
    pub fn enable_hyphen_style(mut self) -> Self {
        self.controller().hyphen_style = true;
        self
    }

    pub fn convert_file_name(mut self, converter: ConverterFileName) -> Self {
        self.controller().converter_file_name = converter;
        self
    }

    pub fn format_file_name<S: Into<String>>(self, format: S) -> Self {
        self.convert_file_name(ConverterFileName::format(format))
    }

    pub fn get(&self) -> &Controller {
        self.strategy.config().controller()
    }
}

impl BaseBuilder for ControllerBuilder {
    fn into_strategy(self) -> StrategyConfigBuilder {
        self.strategy
    }
}

#[test]
fn test_controller_render_data() {
    let controller = Controller::builder()
        .enable_rest_style()
        .enable_hyphen_style()
        .super_class("com.example.BaseController")
        .get()
        .clone();
    let mut table = TableInfo::new("sys_user_role");
    table.set_entity_name("SysUserRole".to_string());
    let data = controller.render_data(&table);
    assert_eq!(data["controllerMappingHyphen"], "sys-user-role");
    assert_eq!(data["restControllerStyle"], true);
    assert_eq!(data["superControllerClass"], "BaseController");
    assert_eq!(controller.converter_file_name().convert("SysUserRole"), "SysUserRoleController");
}
