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

use getset::{Getters, MutGetters};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::builder::{
    Controller, ControllerBuilder, Entity, EntityBuilder, Mapper, MapperBuilder, Service, ServiceBuilder,
};
use crate::config::rules::LikeTable;
use crate::error::{GeneratorError, Result};
use crate::util::is_capital_mode;

/// 策略配置项
#[derive(Debug, Clone, Serialize, Deserialize, Getters, MutGetters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct StrategyConfig {
    /// 是否大写命名
    is_capital_mode: bool,
    /// 是否跳过视图
    skip_view: bool,
    /// 过滤表前缀
    table_prefix: Vec<String>,
    /// 过滤表后缀
    table_suffix: Vec<String>,
    /// 过滤字段前缀
    field_prefix: Vec<String>,
    /// 过滤字段后缀
    field_suffix: Vec<String>,
    /// 需要包含的表名，允许正则表达式（与exclude二选一配置）
    include: Vec<String>,
    /// 需要排除的表名，允许正则表达式
    exclude: Vec<String>,
    /// 启用 schema
    enable_schema: bool,
    /// 包含表名
    like_table: Option<LikeTable>,
    /// 不包含表名
    not_like_table: Option<LikeTable>,
    #[getset(get_mut = "pub(crate)")]
    entity: Entity,
    #[getset(get_mut = "pub(crate)")]
    mapper: Mapper,
    #[getset(get_mut = "pub(crate)")]
    service: Service,
    #[getset(get_mut = "pub(crate)")]
    controller: Controller,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            is_capital_mode: false,
            skip_view: false,
            table_prefix: Vec::new(),
            table_suffix: Vec::new(),
            field_prefix: Vec::new(),
            field_suffix: Vec::new(),
            include: Vec::new(),
            exclude: Vec::new(),
            enable_schema: false,
            like_table: None,
            not_like_table: None,
            entity: Entity::default(),
            mapper: Mapper::default(),
            service: Service::default(),
            controller: Controller::default(),
        }
    }
}

impl StrategyConfig {
    pub fn builder() -> StrategyConfigBuilder {
        StrategyConfigBuilder::default()
    }

    /// 大写命名、字段符合大写字母数字下划线命名
    pub fn is_capital_mode_naming(&self, word: &str) -> bool {
        self.is_capital_mode && is_capital_mode(word)
    }

    /// 表名称匹配过滤表前缀
    pub fn starts_with_table_prefix(&self, table_name: &str) -> bool {
        self.table_prefix.iter().any(|prefix| table_name.starts_with(prefix.as_str()))
    }

    /// 验证配置项
    pub fn validate(&self) -> Result<()> {
        if !self.include.is_empty() && !self.exclude.is_empty() {
            return Err(GeneratorError::invalid_config("<strategy> 标签中 <include> 与 <exclude> 只能配置一项！"));
        }
        if self.like_table.is_some() && self.not_like_table.is_some() {
            return Err(GeneratorError::invalid_config("<strategy> 标签中 <likeTable> 与 <notLikeTable> 只能配置一项！"));
        }
        Ok(())
    }

    /// 包含表名匹配
    pub fn match_include_table(&self, table_name: &str) -> bool {
        Self::match_table(table_name, &self.include)
    }

    /// 排除表名匹配
    pub fn match_exclude_table(&self, table_name: &str) -> bool {
        Self::match_table(table_name, &self.exclude)
    }

    fn match_table(table_name: &str, match_tables: &[String]) -> bool {
        match_tables.iter().any(|t| Self::table_name_matches(t, table_name))
    }

    /// 表名匹配，忽略大小写相等或正则完全匹配
    pub fn table_name_matches(set_table_name: &str, db_table_name: &str) -> bool {
        if set_table_name.eq_ignore_ascii_case(db_table_name) {
            return true;
        }
        match Regex::new(&format!("^(?:{})$", set_table_name)) {
            Ok(regex) => regex.is_match(db_table_name),
            Err(err) => {
                tracing::debug!("table pattern {} is not a regex: {}", set_table_name, err);
                false
            }
        }
    }

    /// 按 like / not like 过滤表名
    pub fn match_like_table(&self, table_name: &str) -> bool {
        if let Some(like_table) = &self.like_table {
            return like_table.matches(table_name);
        }
        if let Some(not_like_table) = &self.not_like_table {
            return !not_like_table.matches(table_name);
        }
        true
    }
}

/// 策略配置构建者
#[derive(Debug, Clone, Default)]
pub struct StrategyConfigBuilder {
    config: StrategyConfig,
}

impl StrategyConfigBuilder {
    pub(crate) fn config(&self) -> &StrategyConfig {
        &self.config
    }

    pub(crate) fn config_mut(&mut self) -> &mut StrategyConfig {
        &mut self.config
    }

    /// 实体配置构建者
    pub fn entity_builder(self) -> EntityBuilder {
        EntityBuilder::new(self)
    }

    /// Mapper 配置构建者
    pub fn mapper_builder(self) -> MapperBuilder {
        MapperBuilder::new(self)
    }

    /// Service 配置构建者
    pub fn service_builder(self) -> ServiceBuilder {
        ServiceBuilder::new(self)
    }

    /// Controller 配置构建者
    pub fn controller_builder(self) -> ControllerBuilder {
        ControllerBuilder::new(self)
    }

    /// 开启大写命名
    pub fn enable_capital_mode(mut self) -> Self {
        self.config.is_capital_mode = true;
        self
    }

    /// 开启跳过视图
    pub fn enable_skip_view(mut self) -> Self {
        self.config.skip_view = true;
        self
    }

    /// 启用 schema
    pub fn enable_schema(mut self) -> Self {
        self.config.enable_schema = true;
        self
    }

    pub fn add_table_prefix<S: Into<String>>(mut self, prefix: Vec<S>) -> Self {
        self.config.table_prefix.extend(prefix.into_iter().map(Into::into));
        self
    }

    pub fn add_table_suffix<S: Into<String>>(mut self, suffix: Vec<S>) -> Self {
        self.config.table_suffix.extend(suffix.into_iter().map(Into::into));
        self
    }

    pub fn add_field_prefix<S: Into<String>>(mut self, prefix: Vec<S>) -> Self {
        self.config.field_prefix.extend(prefix.into_iter().map(Into::into));
        self
    }

    pub fn add_field_suffix<S: Into<String>>(mut self, suffix: Vec<S>) -> Self {
        self.config.field_suffix.extend(suffix.into_iter().map(Into::into));
        self
    }

    /// 增加包含的表名
    pub fn add_include<S: Into<String>>(mut self, include: Vec<S>) -> Self {
        self.config.include.extend(include.into_iter().map(Into::into));
        self
    }

    /// 增加排除表
    pub fn add_exclude<S: Into<String>>(mut self, exclude: Vec<S>) -> Self {
        self.config.exclude.extend(exclude.into_iter().map(Into::into));
        self
    }

    /// 包含表名
    pub fn like_table(mut self, like_table: LikeTable) -> Self {
        self.config.like_table = Some(like_table);
        self
    }

    /// 不包含表名
    pub fn not_like_table(mut self, not_like_table: LikeTable) -> Self {
        self.config.not_like_table = Some(not_like_table);
        self
    }

    pub fn build(self) -> StrategyConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::builder::BaseBuilder;
    use crate::config::rules::SqlLike;

    #[test]
    fn test_validate() {
        let config = StrategyConfig::builder().add_include(vec!["t_user"]).add_exclude(vec!["t_log"]).build();
        assert!(config.validate().is_err());
        let config = StrategyConfig::builder()
            .like_table(LikeTable::new("user"))
            .not_like_table(LikeTable::new("log"))
            .build();
        assert!(config.validate().is_err());
        assert!(StrategyConfig::default().validate().is_ok());
    }

    #[test]
    fn test_table_name_matches() {
        assert!(StrategyConfig::table_name_matches("T_USER", "t_user"));
        assert!(StrategyConfig::table_name_matches("t_user_\\w+", "t_user_role"));
        assert!(!StrategyConfig::table_name_matches("sys_user", "sys_user_role"));
        assert!(!StrategyConfig::table_name_matches("sys_(", "sys_user"));
    }

    #[test]
    fn test_match_include_exclude() {
        let config = StrategyConfig::builder().add_include(vec!["t_user", "sys_.*"]).build();
        assert!(config.match_include_table("sys_role"));
        assert!(config.match_include_table("T_User"));
        assert!(!config.match_include_table("t_order"));
        assert!(!config.match_exclude_table("t_user"));
    }

    #[test]
    fn test_like_table() {
        let config = StrategyConfig::builder().like_table(LikeTable::with_like("t_", SqlLike::Right)).build();
        assert!(config.match_like_table("t_user"));
        assert!(!config.match_like_table("sys_user"));
        let config = StrategyConfig::builder().not_like_table(LikeTable::new("log")).build();
        assert!(!config.match_like_table("sys_log_detail"));
    }

    #[test]
    fn test_nested_builders() {
        let config = StrategyConfig::builder()
            .add_table_prefix(vec!["t_"])
            .entity_builder()
            .enable_lombok()
            .mapper_builder()
            .base_result_map(true)
            .service_builder()
            .format_service_file_name("%sService")
            .controller_builder()
            .enable_rest_style()
            .build();
        assert!(config.starts_with_table_prefix("t_user"));
        assert!(*config.entity().lombok());
        assert!(*config.mapper().base_result_map());
        assert_eq!(config.service().converter_service_file_name().convert("User"), "UserService");
        assert!(*config.controller().rest_style());
    }

    #[test]
    fn test_capital_mode_naming() {
        let config = StrategyConfig::builder().enable_capital_mode().build();
        assert!(config.is_capital_mode_naming("SYS_USER"));
        assert!(!config.is_capital_mode_naming("sys_user"));
        assert!(!StrategyConfig::default().is_capital_mode_naming("SYS_USER"));
    }
}
