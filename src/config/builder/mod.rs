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
//! 配置汇总，传递给模板引擎
//!
use std::collections::HashMap;

use getset::Getters;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{
    DataSourceConfig, GlobalConfig, InjectionConfig, OutputFile, PackageConfig, PathInfoHandler, StrategyConfig,
    StrategyConfigBuilder, TemplateConfig,
};
use crate::constant::STAR;
use crate::error::Result;
use crate::po::TableInfo;
use crate::query::{DatabaseQuery, DefaultDatabaseQuery};

mod controller;
mod entity;
mod mapper;
mod service;

pub use controller::{Controller, ControllerBuilder};
pub use entity::{DefaultNameConvert, Entity, EntityBuilder, NameConvert};
pub use mapper::{Mapper, MapperBuilder};
pub use service::{Service, ServiceBuilder};

/// 不规则表名，包含任一特殊字符时视为正则表达式
static REGX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[~!/@#$%^&*()+\\\[\]|{};:'",<.>?]+"#).expect("table name pattern")
});

/// 策略子配置构建者，可在各构建者之间切换
pub trait BaseBuilder: Sized {
    fn into_strategy(self) -> StrategyConfigBuilder;

    fn entity_builder(self) -> EntityBuilder {
        self.into_strategy().entity_builder()
    }

    fn mapper_builder(self) -> MapperBuilder {
        self.into_strategy().mapper_builder()
    }

    fn service_builder(self) -> ServiceBuilder {
        self.into_strategy().service_builder()
    }

    fn controller_builder(self) -> ControllerBuilder {
        self.into_strategy().controller_builder()
    }

    fn build(self) -> StrategyConfig {
        self.into_strategy().build()
    }
}

/// 配置汇总
#[derive(Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct ConfigBuilder {
    /// 模板路径配置信息
    template_config: TemplateConfig,
    /// 数据库表信息
    #[getset(skip)]
    table_info_list: Vec<TableInfo>,
    /// 路径配置信息
    path_info: HashMap<OutputFile, String>,
    /// 策略配置信息
    strategy_config: StrategyConfig,
    /// 全局配置信息
    global_config: GlobalConfig,
    /// 注入配置信息
    injection_config: InjectionConfig,
    /// 包配置信息
    package_config: PackageConfig,
    /// 数据库配置信息
    data_source_config: DataSourceConfig,
    /// 是否多模块
    #[getset(skip)]
    multi_module: bool,
}

impl ConfigBuilder {
    /// 在构造器中处理配置，未指定的配置使用默认值
    ///
    /// * `package_config` - 包配置
    /// * `data_source_config` - 数据源配置
    /// * `strategy_config` - 表配置
    /// * `template_config` - 模板配置
    /// * `global_config` - 全局配置
    /// * `injection_config` - 注入配置
    pub fn new(
        package_config: Option<PackageConfig>,
        data_source_config: DataSourceConfig,
        strategy_config: Option<StrategyConfig>,
        template_config: Option<TemplateConfig>,
        global_config: Option<GlobalConfig>,
        injection_config: Option<InjectionConfig>,
    ) -> Self {
        let mut config = Self {
            template_config: template_config.unwrap_or_default(),
            table_info_list: Vec::new(),
            path_info: HashMap::new(),
            strategy_config: strategy_config.unwrap_or_default(),
            global_config: global_config.unwrap_or_default(),
            injection_config: injection_config.unwrap_or_default(),
            package_config: package_config.unwrap_or_default(),
            data_source_config,
            multi_module: false,
        };
        let path_info = PathInfoHandler::new(&config.global_config, &config.template_config, &config.package_config).into_path_info();
        config.path_info.extend(path_info);
        config
    }

    /// 判断表名是否为正则表名(这表名规范比较随意,只能尽量匹配上特殊符号)
    pub fn matcher_reg_table(table_name: &str) -> bool {
        REGX.is_match(table_name)
    }

    pub fn set_strategy_config(&mut self, strategy_config: StrategyConfig) -> &mut Self {
        self.strategy_config = strategy_config;
        self
    }

    pub fn set_global_config(&mut self, global_config: GlobalConfig) -> &mut Self {
        self.global_config = global_config;
        self
    }

    pub fn set_injection_config(&mut self, injection_config: InjectionConfig) -> &mut Self {
        self.injection_config = injection_config;
        self
    }

    /// 表信息，首次访问时查询数据库，查询结果为空时不缓存
    pub fn table_info_list(&mut self) -> Result<&[TableInfo]> {
        if self.table_info_list.is_empty() {
            let table_infos = DefaultDatabaseQuery::new(&self.data_source_config)?.query_tables(self)?;
            if !table_infos.is_empty() {
                self.table_info_list.extend(table_infos);
            }
        }
        Ok(&self.table_info_list)
    }

    /// 刷新配置，`*` 表示生成所有表的代码，按模块动态修改包信息
    pub fn refresh_config(&mut self, module_name: &str) {
        self.multi_module = self.package_config.module_name() == STAR;
        if self.multi_module {
            // 刷新包信息
            self.package_config.refresh_package_info(module_name);
            // 根据模块包信息刷新路径
            self.refresh_path_info();
        }
    }

    /// 刷新路径信息，合并到已有路径中
    pub fn refresh_path_info(&mut self) {
        let path_info = PathInfoHandler::new(&self.global_config, &self.template_config, &self.package_config).into_path_info();
        self.path_info.extend(path_info);
    }

    pub fn is_multi_module(&self) -> bool {
        self.multi_module
    }
}

#[cfg(test)]
mod tests {
    use std::path::MAIN_SEPARATOR;

    use super::*;
    use crate::config::TemplateType;
    use crate::query::{ColumnMeta, SchemaSnapshot, TableMeta};

    fn sep(path: &str) -> String {
        path.replace('/', &MAIN_SEPARATOR.to_string())
    }

    #[test]
    fn test_matcher_reg_table() {
        for name in ["t_user.*", "sys_[a-z]+", "user|role", "a{2}", "t_(user)", "x?", "t~", "a!b", "a/b", "a@b",
            "a#b", "a$", "^a", "a%", "a&b", "a+b", "a\\b", "a;b", "a:b", "a'b", "a\"b", "a,b", "<a>"] {
            assert!(ConfigBuilder::matcher_reg_table(name), "{}", name);
        }
        for name in ["t_user", "sys-user", "a=b", "User01"] {
            assert!(!ConfigBuilder::matcher_reg_table(name), "{}", name);
        }
    }

    #[test]
    fn test_default_configs() {
        let config = ConfigBuilder::new(None, DataSourceConfig::default(), None, None, None, None);
        assert_eq!(config.package_config().package_info_of(crate::constant::PARENT), "com.baomidou");
        assert_eq!(config.global_config().author(), "baomidou");
        assert!(config.template_config().mapper().is_some());
        assert!(config.strategy_config().include().is_empty());
        assert!(config.injection_config().custom_file().is_empty());
        assert!(!config.is_multi_module());
        for output_file in [OutputFile::Entity, OutputFile::Mapper, OutputFile::Xml, OutputFile::Service,
            OutputFile::ServiceImpl, OutputFile::Controller, OutputFile::Parent] {
            assert!(config.path_info().contains_key(&output_file), "{}", output_file);
        }
    }

    #[test]
    fn test_refresh_path_info_merges() {
        let global = GlobalConfig::builder().output_dir("/out").build();
        let template = TemplateConfig::builder().disable(&[TemplateType::Controller]).build();
        let package = PackageConfig::builder().module_name(STAR).build();
        let mut config = ConfigBuilder::new(Some(package), DataSourceConfig::default(), None, Some(template), Some(global), None);
        config.path_info.insert(OutputFile::Controller, "/custom/controller".to_string());

        config.refresh_config("user");
        assert!(config.is_multi_module());
        assert_eq!(config.path_info()[&OutputFile::Entity], sep("/out/com/baomidou/user/entity"));
        // 不在本次计算结果中的路径保留
        assert_eq!(config.path_info()[&OutputFile::Controller], "/custom/controller");

        config.refresh_config("order");
        assert_eq!(config.path_info()[&OutputFile::Mapper], sep("/out/com/baomidou/order/mapper"));
    }

    #[test]
    fn test_multi_module_flag() {
        let mut config = ConfigBuilder::new(
            Some(PackageConfig::builder().module_name("sys").build()),
            DataSourceConfig::default(),
            None,
            None,
            Some(GlobalConfig::builder().output_dir("/out").build()),
            None,
        );
        let before = config.path_info().clone();
        config.refresh_config("user");
        assert!(!config.is_multi_module());
        assert_eq!(config.path_info(), &before);
        assert_eq!(config.path_info()[&OutputFile::Entity], sep("/out/com/baomidou/sys/entity"));

        let mut config = ConfigBuilder::new(
            Some(PackageConfig::builder().module_name("**").build()),
            DataSourceConfig::default(),
            None,
            None,
            None,
            None,
        );
        config.refresh_config("user");
        assert!(!config.is_multi_module());
    }

    #[test]
    fn test_setters_chain() {
        let mut config = ConfigBuilder::new(None, DataSourceConfig::default(), None, None, None, None);
        config
            .set_global_config(GlobalConfig::builder().author("snack").build())
            .set_strategy_config(StrategyConfig::builder().add_include(vec!["t_user"]).build())
            .set_injection_config(InjectionConfig::builder().custom_file("DTO.java", "/templates/dto.java").build());
        assert_eq!(config.global_config().author(), "snack");
        assert_eq!(config.strategy_config().include().len(), 1);
        assert_eq!(config.injection_config().custom_file().len(), 1);
    }

    #[test]
    fn test_table_info_list_cache() {
        let snapshot = SchemaSnapshot::new().table(
            TableMeta::new("t_user", "用户"),
            vec![ColumnMeta::new("id", "bigint(20)").primary_key(), ColumnMeta::new("name", "varchar(32)")],
        );
        let mut config = ConfigBuilder::new(None, DataSourceConfig::from_snapshot(snapshot), None, None, None, None);
        assert_eq!(config.table_info_list().unwrap().len(), 1);
        // 数据源变化后仍使用缓存
        config.data_source_config = DataSourceConfig::from_snapshot(SchemaSnapshot::new());
        assert_eq!(config.table_info_list().unwrap().len(), 1);

        let mut empty = ConfigBuilder::new(None, DataSourceConfig::from_snapshot(SchemaSnapshot::new()), None, None, None, None);
        assert!(empty.table_info_list().unwrap().is_empty());
        empty.data_source_config = DataSourceConfig::from_snapshot(
            SchemaSnapshot::new().table(TableMeta::new("t_role", ""), vec![ColumnMeta::new("id", "int")]),
        );
        assert_eq!(empty.table_info_list().unwrap()[0].name(), "t_role");
    }
}
