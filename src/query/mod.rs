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
//! 数据库表信息查询
//!
use std::collections::BTreeMap;

use crate::config::builder::ConfigBuilder;
use crate::config::DataSourceConfig;
use crate::constant::COMMA;
use crate::error::{GeneratorError, Result};
use crate::po::{TableField, TableInfo};

mod mysql;
mod reader;

pub use mysql::MySqlQuery;
#[cfg(feature = "mysql-sync")]
pub use mysql::MySqlReader;
pub use reader::{ColumnMeta, SchemaReader, SchemaSnapshot, SnapshotTable, TableMeta};

/// 表数据查询接口
pub trait DatabaseQuery {
    /// 查询需要生成的表信息
    fn query_tables(&mut self, config: &ConfigBuilder) -> Result<Vec<TableInfo>>;
}

/// 默认表数据查询，通过 [`SchemaReader`] 读取表结构后按策略配置过滤与转换
pub struct DefaultDatabaseQuery {
    reader: Box<dyn SchemaReader>,
}

impl DefaultDatabaseQuery {
    pub fn new(data_source_config: &DataSourceConfig) -> Result<Self> {
        Ok(Self { reader: data_source_config.schema_reader()? })
    }

    pub fn with_reader(reader: Box<dyn SchemaReader>) -> Self {
        Self { reader }
    }

    /// 将字段信息与表信息关联
    fn convert_table_fields(&mut self, config: &ConfigBuilder, table_info: &mut TableInfo) -> Result<()> {
        let strategy_config = config.strategy_config();
        let data_source_config = config.data_source_config();
        let entity = strategy_config.entity();
        let type_convert = data_source_config.type_convert();
        let key_words = data_source_config.key_words();
        let date_type = *config.global_config().date_type();
        let table_name = table_info.name().to_string();

        let mut have_id = false;
        let mut field_list = Vec::new();
        let mut common_field_list = Vec::new();
        for column in self.reader.columns(&table_name)? {
            let mut field = TableField::new(column.name().as_str());
            // 避免多重主键设置，目前只取第一个找到ID
            if column.is_primary_key() && !have_id {
                have_id = true;
                field.primary_key(column.is_auto_increment());
                table_info.set_have_primary_key(true);
            }
            field.set_column_name_with_key_words(&table_name, key_words);
            field.set_field_type(column.column_type().to_string());
            field.set_comment(column.comment().to_string());

            let property_name = entity.name_convert().property_name_convert(&field, strategy_config);
            if property_name.trim().is_empty() {
                return Err(GeneratorError::invalid_config(format!("{} 的名称转换结果为空，请检查是否配置问题", column.name())));
            }
            let column_type = type_convert.process_type_convert(date_type, field.field_type());
            field.set_property_name_with_entity(entity, property_name, column_type);

            if entity.match_super_entity_columns(column.name()) {
                // 跳过公共字段
                common_field_list.push(field);
                continue;
            }
            // 跳过忽略字段
            if entity.match_ignore_columns(column.name()) {
                continue;
            }
            field_list.push(field);
        }
        table_info.add_fields(field_list);
        table_info.add_common_fields(common_field_list);

        let entity_name = entity.name_convert().entity_name_convert(table_info, strategy_config);
        if entity_name.trim().is_empty() {
            return Err(GeneratorError::invalid_config(format!("{} 的名称转换结果为空，请检查是否配置问题", table_name)));
        }
        table_info.process_table(strategy_config, &entity_name);
        Ok(())
    }
}

impl DatabaseQuery for DefaultDatabaseQuery {
    fn query_tables(&mut self, config: &ConfigBuilder) -> Result<Vec<TableInfo>> {
        let strategy_config = config.strategy_config();
        strategy_config.validate()?;
        let is_include = !strategy_config.include().is_empty();
        let is_exclude = !strategy_config.exclude().is_empty();

        let tables = self.reader.tables()?;
        if tables.is_empty() {
            tracing::warn!("当前数据库为空！！！");
        }
        let mut table_list = Vec::new();
        let mut include_table_list = Vec::new();
        let mut exclude_table_names = Vec::new();
        for table in tables {
            if table.name().trim().is_empty() {
                continue;
            }
            // 跳过视图
            if *strategy_config.skip_view() && *table.is_view() {
                continue;
            }
            let mut table_info = TableInfo::new(table.name().as_str());
            table_info.set_comment(table.comment().to_string());
            if is_include && strategy_config.match_include_table(table.name()) {
                include_table_list.push(table_info.clone());
            } else if is_exclude && strategy_config.match_exclude_table(table.name()) {
                exclude_table_names.push(table.name().to_string());
            }
            table_list.push(table_info);
        }

        if is_include || is_exclude {
            let configured = if is_exclude { strategy_config.exclude() } else { strategy_config.include() };
            let mut not_exist_tables: BTreeMap<String, String> = configured
                .iter()
                .filter(|name| !ConfigBuilder::matcher_reg_table(name))
                .map(|name| (name.to_lowercase(), name.to_string()))
                .collect();
            // 将已经存在的表移除，获取配置中数据库不存在的表
            for table_info in &table_list {
                if not_exist_tables.is_empty() {
                    break;
                }
                not_exist_tables.remove(&table_info.name().to_lowercase());
            }
            if !not_exist_tables.is_empty() {
                let names = not_exist_tables.into_values().collect::<Vec<_>>().join(COMMA);
                tracing::warn!("表[{}]在数据库中不存在！！！", names);
            }
            if is_exclude {
                table_list.retain(|table_info| !exclude_table_names.contains(table_info.name()));
            } else {
                table_list = include_table_list;
            }
        }
        table_list.retain(|table_info| strategy_config.match_like_table(table_info.name()));

        // 只处理需执行表字段
        for table_info in table_list.iter_mut() {
            self.convert_table_fields(config, table_info)?;
        }
        tracing::info!("query {} tables", table_list.len());
        Ok(table_list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::builder::BaseBuilder;
    use crate::config::converts::KeyWordsHandler;
    use crate::config::rules::{DbColumnType, NamingStrategy};
    use crate::config::{GlobalConfig, StrategyConfig};

    fn snapshot() -> SchemaSnapshot {
        SchemaSnapshot::new()
            .table(
                TableMeta::new("t_user", "用户表"),
                vec![
                    ColumnMeta::new("id", "bigint(20)").primary_key().auto_increment(),
                    ColumnMeta::new("user_name", "varchar(64)").with_comment("用户名"),
                    ColumnMeta::new("desc", "varchar(255)"),
                    ColumnMeta::new("create_time", "datetime"),
                    ColumnMeta::new("password", "varchar(64)"),
                ],
            )
            .table(TableMeta::new("t_role", "角色表"), vec![ColumnMeta::new("id", "int(11)").primary_key()])
            .table(TableMeta::view("v_user"), vec![ColumnMeta::new("id", "bigint(20)")])
    }

    fn query(strategy_config: StrategyConfig) -> Vec<TableInfo> {
        let config = ConfigBuilder::new(
            None,
            DataSourceConfig::builder("", "", "").key_words_handler(KeyWordsHandler::MySql).snapshot(snapshot()).build(),
            Some(strategy_config),
            None,
            Some(GlobalConfig::default()),
            None,
        );
        DefaultDatabaseQuery::new(config.data_source_config()).unwrap().query_tables(&config).unwrap()
    }

    fn names(tables: &[TableInfo]) -> Vec<&str> {
        tables.iter().map(|table| table.name().as_str()).collect()
    }

    #[test]
    fn test_include_exclude() {
        assert_eq!(names(&query(StrategyConfig::default())), vec!["t_user", "t_role", "v_user"]);
        assert_eq!(names(&query(StrategyConfig::builder().enable_skip_view().build())), vec!["t_user", "t_role"]);
        assert_eq!(names(&query(StrategyConfig::builder().add_include(vec!["T_ROLE", "t_missing"]).build())), vec!["t_role"]);
        assert_eq!(names(&query(StrategyConfig::builder().add_exclude(vec!["t_.*"]).build())), vec!["v_user"]);
        assert_eq!(names(&query(StrategyConfig::builder().add_include(vec!["t_.*"]).build())), vec!["t_user", "t_role"]);
    }

    #[test]
    fn test_invalid_strategy() {
        let config = ConfigBuilder::new(
            None,
            DataSourceConfig::from_snapshot(snapshot()),
            Some(StrategyConfig::builder().add_include(vec!["a"]).add_exclude(vec!["b"]).build()),
            None,
            None,
            None,
        );
        let result = DefaultDatabaseQuery::new(config.data_source_config()).unwrap().query_tables(&config);
        assert!(matches!(result, Err(GeneratorError::InvalidConfig(_))));
    }

    #[test]
    fn test_convert_table_fields() {
        let strategy = StrategyConfig::builder()
            .add_include(vec!["t_user"])
            .add_table_prefix(vec!["t_"])
            .entity_builder()
            .naming(NamingStrategy::UnderlineToCamel)
            .add_super_entity_columns(vec!["create_time"])
            .add_ignore_columns(vec!["password"])
            .build();
        let tables = query(strategy);
        let table = &tables[0];
        assert_eq!(table.entity_name(), "User");
        assert_eq!(table.mapper_name(), "UserMapper");
        assert_eq!(table.xml_name(), "UserXml");
        assert_eq!(table.service_name(), "IUserService");
        assert_eq!(table.service_impl_name(), "UserServiceImpl");
        assert_eq!(table.controller_name(), "UserController");
        assert!(*table.convert());
        assert!(*table.have_primary_key());

        let fields = table.fields();
        assert_eq!(fields.len(), 3);
        assert!(*fields[0].key_flag());
        assert!(*fields[0].key_identity_flag());
        assert_eq!(*fields[0].column_type(), DbColumnType::Long);
        assert_eq!(fields[1].property_name(), "userName");
        assert_eq!(fields[1].comment(), "用户名");
        assert!(*fields[2].key_words());
        assert_eq!(fields[2].column_name(), "`desc`");
        assert_eq!(fields[2].property_name(), "desc");
        assert!(*fields[2].convert());
        assert!(!*fields[1].convert());
        assert_eq!(table.field_names(), "id, user_name, `desc`");

        assert_eq!(table.common_fields().len(), 1);
        assert_eq!(table.common_fields()[0].property_name(), "createTime");
        assert!(table.import_packages().contains("com.baomidou.mybatisplus.annotation.TableName"));
    }
}
