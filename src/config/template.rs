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

use serde::{Deserialize, Serialize};

use crate::constant::{TEMPLATE_CONTROLLER, TEMPLATE_ENTITY_JAVA, TEMPLATE_ENTITY_KT, TEMPLATE_MAPPER, TEMPLATE_SERVICE, TEMPLATE_SERVICE_IMPL, TEMPLATE_XML};

/// 模板类型
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum TemplateType {
    Entity,
    Service,
    ServiceImpl,
    Mapper,
    Xml,
    Controller,
}

/// 模板路径配置项，值为 None 表示不生成该类文件
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    entity: Option<String>,
    entity_kt: Option<String>,
    service: Option<String>,
    service_impl: Option<String>,
    mapper: Option<String>,
    xml: Option<String>,
    controller: Option<String>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            entity: Some(TEMPLATE_ENTITY_JAVA.to_string()),
            entity_kt: Some(TEMPLATE_ENTITY_KT.to_string()),
            service: Some(TEMPLATE_SERVICE.to_string()),
            service_impl: Some(TEMPLATE_SERVICE_IMPL.to_string()),
            mapper: Some(TEMPLATE_MAPPER.to_string()),
            xml: Some(TEMPLATE_XML.to_string()),
            controller: Some(TEMPLATE_CONTROLLER.to_string()),
        }
    }
}

fn not_blank(template: &Option<String>) -> Option<&str> {
    template.as_deref().filter(|v| !v.trim().is_empty())
}

impl TemplateConfig {
    pub fn builder() -> TemplateConfigBuilder {
        TemplateConfigBuilder::default()
    }

    /// 实体模板，kotlin 模式下使用 kt 模板
    pub fn entity(&self, kotlin: bool) -> Option<&str> {
        if kotlin {
            not_blank(&self.entity_kt)
        } else {
            not_blank(&self.entity)
        }
    }

    pub fn service(&self) -> Option<&str> {
        not_blank(&self.service)
    }

    pub fn service_impl(&self) -> Option<&str> {
        not_blank(&self.service_impl)
    }

    pub fn mapper(&self) -> Option<&str> {
        not_blank(&self.mapper)
    }

    pub fn xml(&self) -> Option<&str> {
        not_blank(&self.xml)
    }

    pub fn controller(&self) -> Option<&str> {
        not_blank(&self.controller)
    }

    /// 禁用模板
    pub fn disable(&mut self, template_types: &[TemplateType]) -> &mut Self {
        for template_type in template_types {
            match template_type {
                TemplateType::Entity => {
                    self.entity = None;
                    self.entity_kt = None;
                }
                TemplateType::Service => self.service = None,
                TemplateType::ServiceImpl => self.service_impl = None,
                TemplateType::Mapper => self.mapper = None,
                TemplateType::Xml => self.xml = None,
                TemplateType::Controller => self.controller = None,
            }
        }
        self
    }

    /// 禁用全部模板
    pub fn disable_all(&mut self) -> &mut Self {
        self.disable(&[
            TemplateType::Entity,
            TemplateType::Service,
            TemplateType::ServiceImpl,
            TemplateType::Mapper,
            TemplateType::Xml,
            TemplateType::Controller,
        ])
    }
}

#[derive(Debug, Clone, Default)]
pub struct TemplateConfigBuilder {
    config: TemplateConfig,
}

impl TemplateConfigBuilder {
    pub fn entity<S: Into<String>>(mut self, template: S) -> Self {
        self.config.entity = Some(template.into());
        self
    }

    pub fn entity_kt<S: Into<String>>(mut self, template: S) -> Self {
        self.config.entity_kt = Some(template.into());
        self
    }

    pub fn service<S: Into<String>>(mut self, template: S) -> Self {
        self.config.service = Some(template.into());
        self
    }

    pub fn service_impl<S: Into<String>>(mut self, template: S) -> Self {
        self.config.service_impl = Some(template.into());
        self
    }

    pub fn mapper<S: Into<String>>(mut self, template: S) -> Self {
        self.config.mapper = Some(template.into());
        self
    }

    pub fn xml<S: Into<String>>(mut self, template: S) -> Self {
        self.config.xml = Some(template.into());
        self
    }

    pub fn controller<S: Into<String>>(mut self, template: S) -> Self {
        self.config.controller = Some(template.into());
        self
    }

    pub fn disable(mut self, template_types: &[TemplateType]) -> Self {
        self.config.disable(template_types);
        self
    }

    pub fn build(self) -> TemplateConfig {
        self.config
    }
}

#[test]
fn test_template_disable() {
    let config = TemplateConfig::builder().disable(&[TemplateType::Controller, TemplateType::Entity]).build();
    assert!(config.controller().is_none());
    assert!(config.entity(false).is_none());
    assert!(config.entity(true).is_none());
    assert_eq!(config.mapper(), Some(TEMPLATE_MAPPER));
}
