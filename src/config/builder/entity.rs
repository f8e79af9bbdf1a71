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

use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;
use std::sync::Arc;

use getset::Getters;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::builder::BaseBuilder;
use crate::config::rules::{IdType, NamingStrategy};
use crate::config::{StrategyConfig, StrategyConfigBuilder};
use crate::function::ConverterFileName;
use crate::po::{TableField, TableFill, TableInfo};
use crate::util::{capital_first, simple_class_name};

/// 名称转换接口
pub trait NameConvert: Debug + Send + Sync {
    /// 执行实体名称转换
    fn entity_name_convert(&self, table_info: &TableInfo, strategy_config: &StrategyConfig) -> String;

    /// 执行属性名称转换
    fn property_name_convert(&self, field: &TableField, strategy_config: &StrategyConfig) -> String;
}

/// 默认名称转换，按命名策略去除前后缀并转驼峰
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNameConvert;

impl DefaultNameConvert {
    fn process_name(name: &str, strategy: NamingStrategy, prefix: &[String], suffix: &[String]) -> String {
        let mut property_name = name.to_string();
        if !prefix.is_empty() {
            property_name = NamingStrategy::remove_prefix(&property_name, prefix);
        }
        if !suffix.is_empty() {
            property_name = NamingStrategy::remove_suffix(&property_name, suffix);
        }
        if strategy == NamingStrategy::UnderlineToCamel {
            return NamingStrategy::underline_to_camel(&property_name);
        }
        property_name
    }
}

impl NameConvert for DefaultNameConvert {
    fn entity_name_convert(&self, table_info: &TableInfo, strategy_config: &StrategyConfig) -> String {
        capital_first(&Self::process_name(
            table_info.name(),
            *strategy_config.entity().naming(),
            strategy_config.table_prefix(),
            strategy_config.table_suffix(),
        ))
    }

    fn property_name_convert(&self, field: &TableField, strategy_config: &StrategyConfig) -> String {
        Self::process_name(
            field.name(),
            strategy_config.entity().column_naming(),
            strategy_config.field_prefix(),
            strategy_config.field_suffix(),
        )
    }
}

static DEFAULT_NAME_CONVERT: DefaultNameConvert = DefaultNameConvert;

/// 实体属性配置
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct Entity {
    /// 名称转换，为空时使用 [`DefaultNameConvert`]
    #[serde(skip)]
    #[getset(skip)]
    name_convert: Option<Arc<dyn NameConvert>>,
    /// 自定义继承的Entity类全称，带包名
    super_class: Option<String>,
    /// 自定义基础的Entity类，公共字段
    super_entity_columns: BTreeSet<String>,
    /// 自定义忽略字段
    ignore_columns: BTreeSet<String>,
    /// 实体是否生成 serialVersionUID
    serial_version_uid: bool,
    /// 是否生成实体时，生成字段注解
    table_field_annotation_enable: bool,
    /// 【实体】是否生成字段常量
    column_constant: bool,
    /// 【实体】是否为链式模型
    chain: bool,
    /// 【实体】是否为lombok模型
    lombok: bool,
    /// Boolean类型字段是否移除is前缀
    boolean_column_remove_is_prefix: bool,
    /// 开启 ActiveRecord 模式
    active_record: bool,
    /// 乐观锁字段名称(数据库字段)
    version_column_name: Option<String>,
    /// 乐观锁属性名称(实体字段)
    version_property_name: Option<String>,
    /// 逻辑删除字段名称(数据库字段)
    logic_delete_column_name: Option<String>,
    /// 逻辑删除属性名称(实体字段)
    logic_delete_property_name: Option<String>,
    /// 数据库表映射到实体的命名策略
    naming: NamingStrategy,
    /// 数据库表字段映射到实体的命名策略，未指定按照 naming 执行
    #[getset(skip)]
    column_naming: Option<NamingStrategy>,
    /// 表填充字段
    table_fill_list: Vec<TableFill>,
    /// 指定生成的主键的ID类型
    id_type: Option<IdType>,
    /// 转换输出文件名称
    converter_file_name: ConverterFileName,
}

impl Default for Entity {
    fn default() -> Self {
        Self {
            name_convert: None,
            super_class: None,
            super_entity_columns: BTreeSet::new(),
            ignore_columns: BTreeSet::new(),
            serial_version_uid: true,
            table_field_annotation_enable: false,
            column_constant: false,
            chain: false,
            lombok: false,
            boolean_column_remove_is_prefix: false,
            active_record: false,
            version_column_name: None,
            version_property_name: None,
            logic_delete_column_name: None,
            logic_delete_property_name: None,
            naming: NamingStrategy::NoChange,
            column_naming: None,
            table_fill_list: Vec::new(),
            id_type: None,
            converter_file_name: ConverterFileName::format("%s"),
        }
    }
}


impl Entity {
    pub fn builder() -> EntityBuilder {
        StrategyConfig::builder().entity_builder()
    }

    pub fn name_convert(&self) -> &dyn NameConvert {
        match &self.name_convert {
            Some(name_convert) => name_convert.as_ref(),
            None => &DEFAULT_NAME_CONVERT,
        }
    }

    /// 字段命名策略，未指定时与表命名策略一致
    pub fn column_naming(&self) -> NamingStrategy {
        self.column_naming.unwrap_or(self.naming)
    }

    /// 匹配父类字段(忽略大小写)
    pub fn match_super_entity_columns(&self, field_name: &str) -> bool {
        self.super_entity_columns.iter().any(|column| column.eq_ignore_ascii_case(field_name))
    }

    /// 匹配忽略字段(忽略大小写)
    pub fn match_ignore_columns(&self, field_name: &str) -> bool {
        self.ignore_columns.iter().any(|column| column.eq_ignore_ascii_case(field_name))
    }

    pub fn render_data(&self, _table_info: &TableInfo) -> HashMap<String, Value> {
        let mut data = HashMap::new();
        data.insert("idType".to_string(), json!(self.id_type.map(|id_type| id_type.to_string())));
        data.insert("logicDeleteFieldName".to_string(), json!(self.logic_delete_column_name));
        data.insert("versionFieldName".to_string(), json!(self.version_column_name));
        data.insert("activeRecord".to_string(), json!(self.active_record));
        data.insert("entitySerialVersionUID".to_string(), json!(self.serial_version_uid));
        data.insert("entityColumnConstant".to_string(), json!(self.column_constant));
        data.insert("entityBuilderModel".to_string(), json!(self.chain));
        data.insert("chainModel".to_string(), json!(self.chain));
        data.insert("entityLombokModel".to_string(), json!(self.lombok));
        data.insert("entityBooleanColumnRemoveIsPrefix".to_string(), json!(self.boolean_column_remove_is_prefix));
        data.insert("superEntityClass".to_string(), json!(self.super_class.as_deref().map(simple_class_name)));
        data
    }
}

/// 实体属性配置构建
pub struct EntityBuilder {
    strategy: StrategyConfigBuilder,
}

impl EntityBuilder {
    pub(crate) fn new(strategy: StrategyConfigBuilder) -> Self {
        Self { strategy }
    }

    fn entity(&mut self) -> &mut Entity {
        self.strategy.config_mut().entity_mut()
    }

    /// 名称转换实现
    pub fn name_convert<N: NameConvert + 'static>(mut self, name_convert: N) -> Self {
        self.entity().name_convert = Some(Arc::new(name_convert));
        self
    }

    /// 自定义继承的Entity类全称
    pub fn super_class<S: Into<String>>(mut self, super_class: S) -> Self {
        self.entity().super_class = Some(super_class.into());
        self
    }

    /// 添加父类公共字段
    pub fn add_super_entity_columns<S: Into<String>>(mut self, columns: Vec<S>) -> Self {
        self.entity().super_entity_columns.extend(columns.into_iter().map(Into::into));
        self
    }

    /// 添加忽略字段
    pub fn add_ignore_columns<S: Into<String>>(mut self, columns: Vec<S>) -> Self {
        self.entity().ignore_columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn disable_serial_version_uid(mut self) -> Self {
        self.entity().serial_version_uid = false;
        self
    }

    pub fn enable_column_constant(mut self) -> Self {
        self.entity().column_constant = true;
        self
    }

    /// 开启链式模型
    pub fn enable_chain_model(mut self) -> Self {
        self.entity().chain = true;
        self
    }

    pub fn enable_lombok(mut self) -> Self {
        self.entity().lombok = true;
        self
    }

    /// 开启 Boolean 类型字段移除 is 前缀
    pub fn enable_remove_is_prefix(mut self) -> Self {
        self.entity().boolean_column_remove_is_prefix = true;
        self
    }

    /// 开启生成实体时生成字段注解
    pub fn enable_table_field_annotation(mut self) -> Self {
        self.entity().table_field_annotation_enable = true;
        self
    }

    pub fn enable_active_record(mut self) -> Self {
        self.entity().active_record = true;
        self
    }

    pub fn version_column_name<S: Into<String>>(mut self, name: S) -> Self {
        self.entity().version_column_name = Some(name.into());
        self
    }

    pub fn version_property_name<S: Into<String>>(mut self, name: S) -> Self {
        self.entity().version_property_name = Some(name.into());
        self
    }

    pub fn logic_delete_column_name<S: Into<String>>(mut self, name: S) -> Self {
        self.entity().logic_delete_column_name = Some(name.into());
        self
    }

    pub fn logic_delete_property_name<S: Into<String>>(mut self, name: S) -> Self {
        self.entity().logic_delete_property_name = Some(name.into());
        self
    }

    pub fn naming(mut self, naming: NamingStrategy) -> Self {
        self.entity().naming = naming;
        self
    }

    pub fn column_naming(mut self, column_naming: NamingStrategy) -> Self {
        self.entity().column_naming = Some(column_naming);
        self
    }

    pub fn add_table_fills(mut self, table_fills: Vec<TableFill>) -> Self {
        self.entity().table_fill_list.extend(table_fills);
        self
    }

    pub fn id_type(mut self, id_type: IdType) -> Self {
        self.entity().id_type = Some(id_type);
        self
    }

    pub fn convert_file_name(mut self, converter: ConverterFileName) -> Self {
        self.entity().converter_file_name = converter;
        self
    }

    /// 格式化文件名称，`%s` 为实体名称
    pub fn format_file_name<S: Into<String>>(self, format: S) -> Self {
        self.convert_file_name(ConverterFileName::format(format))
    }

    pub fn get(&self) -> &Entity {
        self.strategy.config().entity()
    }
}

impl BaseBuilder for EntityBuilder {
    fn into_strategy(self) -> StrategyConfigBuilder {
        self.strategy
    }
}
