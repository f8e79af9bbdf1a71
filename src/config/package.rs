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

use crate::config::OutputFile;
use crate::constant::{CONTROLLER, DOT, ENTITY, MAPPER, MODULE_NAME, OTHER, PARENT, SERVICE, SERVICE_IMPL, STAR, XML};

/// 包相关配置
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct PackageConfig {
    /// 父包名。如果为空，将下面子包名必须写全部， 否则就只需写子包名
    parent: String,
    /// 父包模块名，`*` 表示按表生成模块
    #[getset(get = "pub")]
    module_name: String,
    /// Entity包名
    #[getset(get = "pub")]
    entity: String,
    /// Service包名
    #[getset(get = "pub")]
    service: String,
    /// Service Impl包名
    #[getset(get = "pub")]
    service_impl: String,
    /// Mapper包名
    #[getset(get = "pub")]
    mapper: String,
    /// Mapper XML包名
    #[getset(get = "pub")]
    xml: String,
    /// Controller包名
    #[getset(get = "pub")]
    controller: String,
    /// 自定义文件包名
    #[getset(get = "pub")]
    other: String,
    /// 自定义路径配置信息
    #[getset(get = "pub")]
    path_info: HashMap<OutputFile, String>,
    /// 多模块时当前处理的模块
    #[serde(skip)]
    current_module: Option<String>,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            parent: "com.baomidou".to_string(),
            module_name: String::new(),
            entity: "entity".to_string(),
            service: "service".to_string(),
            service_impl: "service.impl".to_string(),
            mapper: "mapper".to_string(),
            xml: "mapper.xml".to_string(),
            controller: "controller".to_string(),
            other: "other".to_string(),
            path_info: HashMap::new(),
            current_module: None,
        }
    }
}

impl PackageConfig {
    pub fn builder() -> PackageConfigBuilder {
        PackageConfigBuilder::default()
    }

    /// 当前生效的模块名，未刷新的通配模块视为空
    pub fn effective_module_name(&self) -> &str {
        match &self.current_module {
            Some(module) => module.as_str(),
            None if self.module_name == STAR => "",
            None => self.module_name.as_str(),
        }
    }

    /// 父包名，包含模块名
    pub fn parent(&self) -> String {
        let module = self.effective_module_name();
        if module.is_empty() {
            self.parent.clone()
        } else {
            format!("{}{}{}", self.parent, DOT, module)
        }
    }

    /// 连接父子包名
    pub fn join_package(&self, sub_package: &str) -> String {
        let parent = self.parent();
        if parent.is_empty() {
            sub_package.to_string()
        } else {
            format!("{}{}{}", parent, DOT, sub_package)
        }
    }

    /// 包配置信息
    pub fn package_info(&self) -> HashMap<String, String> {
        let mut package_info = HashMap::new();
        package_info.insert(MODULE_NAME.to_string(), self.effective_module_name().to_string());
        package_info.insert(ENTITY.to_string(), self.join_package(&self.entity));
        package_info.insert(MAPPER.to_string(), self.join_package(&self.mapper));
        package_info.insert(XML.to_string(), self.join_package(&self.xml));
        package_info.insert(SERVICE.to_string(), self.join_package(&self.service));
        package_info.insert(SERVICE_IMPL.to_string(), self.join_package(&self.service_impl));
        package_info.insert(CONTROLLER.to_string(), self.join_package(&self.controller));
        package_info.insert(OTHER.to_string(), self.join_package(&self.other));
        package_info.insert(PARENT.to_string(), self.parent());
        package_info
    }

    /// 获取指定 key 的包信息
    pub fn package_info_of(&self, module: &str) -> String {
        self.package_info().remove(module).unwrap_or_default()
    }

    /// 多模块模式下切换当前模块
    pub fn refresh_package_info<S: Into<String>>(&mut self, module_name: S) {
        self.current_module = Some(module_name.into());
    }
}

#[derive(Debug, Clone, Default)]
pub struct PackageConfigBuilder {
    config: PackageConfig,
}

impl PackageConfigBuilder {
    pub fn parent<S: Into<String>>(mut self, parent: S) -> Self {
        self.config.parent = parent.into();
        self
    }

    pub fn module_name<S: Into<String>>(mut self, module_name: S) -> Self {
        self.config.module_name = module_name.into();
        self
    }

    pub fn entity<S: Into<String>>(mut self, entity: S) -> Self {
        self.config.entity = entity.into();
        self
    }

    pub fn service<S: Into<String>>(mut self, service: S) -> Self {
        self.config.service = service.into();
        self
    }

    pub fn service_impl<S: Into<String>>(mut self, service_impl: S) -> Self {
        self.config.service_impl = service_impl.into();
        self
    }

    pub fn mapper<S: Into<String>>(mut self, mapper: S) -> Self {
        self.config.mapper = mapper.into();
        self
    }

    pub fn xml<S: Into<String>>(mut self, xml: S) -> Self {
        self.config.xml = xml.into();
        self
    }

    pub fn controller<S: Into<String>>(mut self, controller: S) -> Self {
        self.config.controller = controller.into();
        self
    }

    pub fn other<S: Into<String>>(mut self, other: S) -> Self {
        self.config.other = other.into();
        self
    }

    /// 自定义输出路径，优先于包名推导的路径
    pub fn path_info(mut self, path_info: HashMap<OutputFile, String>) -> Self {
        self.config.path_info = path_info;
        self
    }

    pub fn build(self) -> PackageConfig {
        self.config
    }
}
