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
use crate::constant::SUPER_MAPPER_CLASS;
use crate::function::ConverterFileName;
use crate::po::TableInfo;
use crate::util::simple_class_name;

/// 控制Mapper及其XML文件的生成
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct Mapper {
    /// 自定义继承的Mapper类全称，带包名
    super_class: String,
    /// 是否开启BaseResultMap
    base_result_map: bool,
    /// 是否开启baseColumnList
    base_column_list: bool,
    /// 是否开启xml二级缓存
    enable_xml_cache: bool,
    /// 转换输出Mapper文件名称
    converter_mapper_file_name: ConverterFileName,
    /// 转换输出Xml文件名称
    converter_xml_file_name: ConverterFileName,
}

impl Default for Mapper {
    fn default() -> Self {
        Self {
            super_class: SUPER_MAPPER_CLASS.to_string(),
            base_result_map: false,
            base_column_list: false,
            enable_xml_cache: false,
            converter_mapper_file_name: ConverterFileName::format("%sMapper"),
            converter_xml_file_name: ConverterFileName::format("%sXml"),
        }
    }
}

impl Mapper {
    pub fn builder() -> MapperBuilder {
        StrategyConfig::builder().mapper_builder()
    }

    /// 模板数据只取决于 Mapper 配置，参数与其他 builder 的 `render_data` 保持一致
    pub fn render_data(&self, _table_info: &TableInfo) -> HashMap<String, Value> {
        let mut data = HashMap::new();
        data.insert("enableCache".to_string(), json!(self.enable_xml_cache));
        data.insert("baseResultMap".to_string(), json!(self.base_result_map));
        data.insert("baseColumnList".to_string(), json!(self.base_column_list));
        data.insert("superMapperClassPackage".to_string(), json!(self.super_class));
        data.insert("superMapperClass".to_string(), json!(simple_class_name(&self.super_class)));
        data
    }
}

/// Mapper 配置构建
pub struct MapperBuilder {
    strategy: StrategyConfigBuilder,
}

impl MapperBuilder {
    pub(crate) fn new(strategy: StrategyConfigBuilder) -> Self {
        Self { strategy }
    }

    fn mapper(&mut self) -> &mut Mapper {
        self.strategy.config_mut().mapper_mut()
    }

    /// 父类Mapper
    pub fn super_class<S: Into<String>>(mut self, super_class: S) -> Self {
        self.mapper().super_class = super_class.into();
        self
    }

    pub fn base_result_map(mut self, base_result_map: bool) -> Self {
        self.mapper().base_result_map = base_result_map;
        self
    }

    pub fn base_column_list(mut self, base_column_list: bool) -> Self {
        self.mapper().base_column_list = base_column_list;
        self
    }

    pub fn enable_xml_cache(mut self, enable_xml_cache: bool) -> Self {
        self.mapper().enable_xml_cache = enable_xml_cache;
        self
    }

    /// 输出Mapper文件名称转换
    pub fn convert_mapper_file_name(mut self, converter: ConverterFileName) -> Self {
        self.mapper().converter_mapper_file_name = converter;
        self
    }

    /// 输出Xml文件名称转换
    pub fn convert_xml_file_name(mut self, converter: ConverterFileName) -> Self {
        self.mapper().converter_xml_file_name = converter;
        self
    }

    /// 格式化Mapper文件名称，`%s` 为实体名称
    pub fn format_mapper_file_name<S: Into<String>>(self, format: S) -> Self {
        self.convert_mapper_file_name(ConverterFileName::format(format))
    }

    /// 格式化Xml文件名称，`%s` 为实体名称
    pub fn format_xml_file_name<S: Into<String>>(self, format: S) -> Self {
        self.convert_xml_file_name(ConverterFileName::format(format))
    }

    pub fn get(&self) -> &Mapper {
        self.strategy.config().mapper()
    }
}

impl BaseBuilder for MapperBuilder {
    fn into_strategy(self) -> StrategyConfigBuilder {
        self.strategy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mapper() {
        let mapper = Mapper::default();
        assert_eq!(mapper.super_class(), SUPER_MAPPER_CLASS);
        assert!(!mapper.base_result_map());
        assert!(!mapper.base_column_list());
        assert!(!mapper.enable_xml_cache());
        assert_eq!(mapper.converter_mapper_file_name().convert("User"), "UserMapper");
        assert_eq!(mapper.converter_xml_file_name().convert("User"), "UserXml");
    }

    #[test]
    fn test_mapper_builder() {
        let strategy = StrategyConfig::builder()
            .mapper_builder()
            .super_class("com.example.SuperMapper")
            .base_result_map(true)
            .enable_xml_cache(true)
            .format_mapper_file_name("%sDao")
            .format_xml_file_name("%sMapper")
            .build();
        let mapper = strategy.mapper();
        assert_eq!(mapper.super_class(), "com.example.SuperMapper");
        assert!(*mapper.base_result_map());
        assert!(*mapper.enable_xml_cache());
        assert_eq!(mapper.converter_mapper_file_name().convert("User"), "UserDao");
        assert_eq!(mapper.converter_xml_file_name().convert("User"), "UserMapper");
    }

    #[test]
    fn test_custom_converter() {
        let mapper = Mapper::builder()
            .convert_mapper_file_name(ConverterFileName::custom(|name| format!("I{}Repository", name)))
            .get()
            .clone();
        assert_eq!(mapper.converter_mapper_file_name().convert("Order"), "IOrderRepository");
    }

    #[test]
    fn test_render_data() {
        let data = Mapper::builder().base_column_list(true).get().render_data(&TableInfo::default());
        assert_eq!(data["superMapperClass"], "BaseMapper");
        assert_eq!(data["superMapperClassPackage"], SUPER_MAPPER_CLASS);
        assert_eq!(data["baseColumnList"], true);
        assert_eq!(data["enableCache"], false);
    }
}
