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
//! 表信息与字段信息
//!
use std::collections::{BTreeMap, BTreeSet};

use getset::{Getters, MutGetters, Setters};
use serde::{Deserialize, Serialize};

use crate::config::builder::Entity;
use crate::config::converts::KeyWordsHandler;
use crate::config::rules::{DbColumnType, FieldFill, NamingStrategy};
use crate::config::StrategyConfig;
use crate::constant::{ANNOTATION_PACKAGE, DEFAULT_ID_NAME};
use crate::util::{capital_first, contains_upper_case, first_to_lower_case, remove_is_prefix};

/// 字段填充配置，按字段名或属性名匹配(忽略大小写)
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TableFill {
    field_name: String,
    field_fill: FieldFill,
}

impl TableFill {
    pub fn new<S: Into<String>>(field_name: S, field_fill: FieldFill) -> Self {
        Self { field_name: field_name.into(), field_fill }
    }
}

#[derive(Clone, Serialize, PartialEq, Debug, Default, Getters, Setters, MutGetters)]
#[getset(get_mut = "pub", get = "pub", set = "pub")]
#[serde(rename_all = "camelCase")]
pub struct TableInfo {
    /// 包导入信息
    import_packages: BTreeSet<String>,
    /// 是否转换
    convert: bool,
    /// 表名称
    name: String,
    /// 表注释
    comment: String,
    /// 实体名称
    entity_name: String,
    mapper_name: String,
    xml_name: String,
    service_name: String,
    service_impl_name: String,
    controller_name: String,
    /// 表字段
    fields: Vec<TableField>,
    /// 是否有主键
    have_primary_key: bool,
    /// 公共字段
    common_fields: Vec<TableField>,
    /// 字段名称集
    field_names: String,
}

impl TableInfo {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    /// 实体属性路径，首字母小写的实体名称
    pub fn entity_path(&self) -> String {
        first_to_lower_case(&self.entity_name)
    }

    /// 设置实体名称并判断是否需要 `@TableName` 注解
    pub fn set_entity_name_with_strategy(&mut self, strategy_config: &StrategyConfig, entity_name: String) {
        self.entity_name = entity_name;
        let entity = strategy_config.entity();
        if strategy_config.starts_with_table_prefix(&self.name) || *entity.table_field_annotation_enable() {
            self.convert = true;
        } else if strategy_config.is_capital_mode_naming(&self.name) {
            self.convert = !self.entity_name.eq_ignore_ascii_case(&self.name);
        } else if entity.column_naming() == NamingStrategy::UnderlineToCamel {
            // 包含大写处理
            if contains_upper_case(&self.name) {
                self.convert = true;
            }
        } else if !self.entity_name.eq_ignore_ascii_case(&self.name) {
            self.convert = true;
        }
    }

    pub fn add_fields(&mut self, fields: Vec<TableField>) {
        self.fields.extend(fields);
        self.field_names = self.fields.iter().map(|field| field.column_name.as_str()).collect::<Vec<_>>().join(", ");
    }

    pub fn add_common_fields(&mut self, fields: Vec<TableField>) {
        self.common_fields.extend(fields);
    }

    /// 处理表对应的类名称及导包
    pub fn process_table(&mut self, strategy_config: &StrategyConfig, entity_name: &str) {
        let entity = strategy_config.entity();
        self.set_entity_name_with_strategy(strategy_config, entity.converter_file_name().convert(entity_name));
        let mapper = strategy_config.mapper();
        self.mapper_name = mapper.converter_mapper_file_name().convert(entity_name);
        self.xml_name = mapper.converter_xml_file_name().convert(entity_name);
        let service = strategy_config.service();
        self.service_name = service.converter_service_file_name().convert(entity_name);
        self.service_impl_name = service.converter_service_impl_file_name().convert(entity_name);
        self.controller_name = strategy_config.controller().converter_file_name().convert(entity_name);
        self.import_package(entity);
    }

    /// 导包处理
    pub fn import_package(&mut self, entity: &Entity) {
        let annotation = |name: &str| format!("{}.{}", ANNOTATION_PACKAGE, name);
        let mut import_serializable = true;
        if let Some(super_class) = entity.super_class().as_ref().filter(|class| !class.trim().is_empty()) {
            import_serializable = false;
            self.import_packages.insert(super_class.to_string());
        } else if *entity.active_record() {
            // 无父类开启 AR 模式
            self.import_packages.insert(crate::constant::ACTIVE_RECORD_MODEL.to_string());
            import_serializable = false;
        }
        if import_serializable {
            self.import_packages.insert(crate::constant::SERIALIZABLE.to_string());
        }
        if self.convert {
            self.import_packages.insert(annotation("TableName"));
        }
        if entity.id_type().is_some() && self.have_primary_key {
            // 指定需要 IdType 场景
            self.import_packages.insert(annotation("IdType"));
            self.import_packages.insert(annotation("TableId"));
        }
        for field in &self.fields {
            if let Some(pkg) = field.column_type.get_pkg() {
                self.import_packages.insert(pkg.to_string());
            }
            if field.key_flag {
                if field.convert || field.key_identity_flag {
                    self.import_packages.insert(annotation("TableId"));
                }
                if field.key_identity_flag {
                    self.import_packages.insert(annotation("IdType"));
                }
            } else if field.convert {
                self.import_packages.insert(annotation("TableField"));
            }
            if field.fill.is_some() {
                self.import_packages.insert(annotation("TableField"));
                self.import_packages.insert(annotation("FieldFill"));
            }
            if field.version_field {
                self.import_packages.insert(annotation("Version"));
            }
            if field.logic_delete_field {
                self.import_packages.insert(annotation("TableLogic"));
            }
        }
    }
}

#[derive(Clone, Serialize, PartialEq, Debug, Default, Getters, Setters, MutGetters)]
#[getset(get_mut = "pub", get = "pub", set = "pub")]
#[serde(rename_all = "camelCase")]
pub struct TableField {
    /// 是否需要 `@TableField` 注解
    convert: bool,
    /// 是否主键
    key_flag: bool,
    /// 主键是否为自增类型
    key_identity_flag: bool,
    /// 原始字段名
    name: String,
    /// 字段类型
    #[serde(rename = "type")]
    field_type: String,
    /// 属性名称
    property_name: String,
    /// 属性类型
    column_type: DbColumnType,
    comment: String,
    /// 填充策略
    fill: Option<String>,
    /// 是否关键字
    key_words: bool,
    /// 数据库字段（关键字含转义符号）
    column_name: String,
    /// 首字母大写的属性名称
    capital_name: String,
    /// 是否乐观锁字段
    version_field: bool,
    /// 是否逻辑删除字段
    logic_delete_field: bool,
    /// 自定义查询字段
    custom_map: BTreeMap<String, serde_json::Value>,
}

impl TableField {
    pub fn new<S: Into<String>>(name: S) -> Self {
        let name = name.into();
        Self { column_name: name.clone(), name, ..Default::default() }
    }

    /// 设置为主键
    pub fn primary_key(&mut self, auto_increment: bool) {
        self.key_flag = true;
        self.key_identity_flag = auto_increment;
    }

    /// 设置字段名，数据库关键字会被转义
    pub fn set_column_name_with_key_words(&mut self, table_name: &str, handler: Option<KeyWordsHandler>) {
        self.column_name = self.name.clone();
        if let Some(handler) = handler.filter(|handler| handler.is_key_words(&self.name)) {
            tracing::warn!("当前表[{}]存在字段[{}]为数据库关键字或保留字!", table_name, self.name);
            self.key_words = true;
            self.column_name = handler.format_column(&self.name);
        }
    }

    /// 设置属性名称与类型，并判断是否需要 `@TableField` 注解
    pub fn set_property_name_with_entity(&mut self, entity: &Entity, property_name: String, column_type: DbColumnType) {
        self.column_type = column_type;
        if *entity.boolean_column_remove_is_prefix() && column_type.is_boolean() && property_name.starts_with("is") {
            self.convert = true;
            self.property_name = remove_is_prefix(&property_name);
        } else {
            // 与转义后的字段名比较，关键字字段总是需要注解
            self.convert = match entity.column_naming() {
                NamingStrategy::UnderlineToCamel => {
                    !property_name.eq_ignore_ascii_case(&NamingStrategy::underline_to_camel(&self.column_name))
                }
                NamingStrategy::NoChange => !property_name.eq_ignore_ascii_case(&self.column_name),
            };
            if *entity.table_field_annotation_enable() {
                self.convert = true;
            } else if self.key_flag {
                self.convert = property_name != DEFAULT_ID_NAME;
            }
            self.property_name = property_name;
        }
        self.capital_name = Self::inner_capital_name(&self.property_name, column_type);
        self.version_field = Self::matches(entity.version_column_name(), &self.name)
            || Self::matches(entity.version_property_name(), &self.property_name);
        self.logic_delete_field = Self::matches(entity.logic_delete_column_name(), &self.name)
            || Self::matches(entity.logic_delete_property_name(), &self.property_name);
        self.fill = entity
            .table_fill_list()
            .iter()
            .find(|tf| tf.field_name.eq_ignore_ascii_case(&self.name) || tf.field_name.eq_ignore_ascii_case(&self.property_name))
            .map(|tf| tf.field_fill.name().to_string());
    }

    fn matches(configured: &Option<String>, name: &str) -> bool {
        configured.as_deref().map_or(false, |value| value.eq_ignore_ascii_case(name))
    }

    /// 按 JavaBean 规则生成的 get/set 方法名称部分
    fn inner_capital_name(property_name: &str, column_type: DbColumnType) -> String {
        if property_name.chars().count() <= 1 {
            return property_name.to_uppercase();
        }
        let name = if column_type == DbColumnType::BaseBoolean {
            remove_is_prefix(property_name)
        } else {
            property_name.to_string()
        };
        // 第一个字母小写，第二个字母大写的情况保持不变
        let mut chars = name.chars();
        let first = chars.next().unwrap_or_default();
        let second = chars.next().unwrap_or_default();
        if first.is_lowercase() && second.is_uppercase() {
            return name;
        }
        capital_first(&name)
    }

    pub fn property_type(&self) -> &'static str {
        self.column_type.get_type()
    }
}
