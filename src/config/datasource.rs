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

use getset::Getters;
use serde::{Deserialize, Serialize};

use crate::config::converts::{self, KeyWordsHandler, TypeConvert};
use crate::config::rules::DbType;
use crate::error::{GeneratorError, Result};
use crate::query::{SchemaReader, SchemaSnapshot};

const SNAPSHOT_SCHEME: &str = "snapshot:";

/// 数据库配置
#[derive(Debug, Clone, Default, Serialize, Deserialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct DataSourceConfig {
    /// 驱动连接的URL，`snapshot:` 前缀或 `.yaml`/`.json` 文件表示从结构快照读取
    url: String,
    /// 数据库连接用户名
    username: String,
    /// 数据库连接密码
    password: String,
    /// schemaName
    schema_name: Option<String>,
    /// 关键字处理器
    key_words_handler: Option<KeyWordsHandler>,
    /// 内存中的结构快照，优先于 url
    #[serde(skip)]
    snapshot: Option<SchemaSnapshot>,
}

impl DataSourceConfig {
    pub fn new<S: Into<String>>(url: S, username: S, password: S) -> Self {
        Self { url: url.into(), username: username.into(), password: password.into(), ..Default::default() }
    }

    pub fn builder<S: Into<String>>(url: S, username: S, password: S) -> DataSourceConfigBuilder {
        DataSourceConfigBuilder { config: Self::new(url, username, password) }
    }

    /// 使用内存快照作为数据源
    pub fn from_snapshot(snapshot: SchemaSnapshot) -> Self {
        Self { snapshot: Some(snapshot), ..Default::default() }
    }

    /// 根据连接地址判断数据库类型，快照按 MYSQL 处理
    pub fn db_type(&self) -> DbType {
        if self.snapshot.is_some() || self.snapshot_path().is_some() {
            return DbType::Mysql;
        }
        DbType::from_url(&self.url)
    }

    pub fn type_convert(&self) -> Box<dyn TypeConvert> {
        converts::type_convert(self.db_type())
    }

    /// 关键字处理器，未配置时按数据库类型选择
    pub fn key_words(&self) -> Option<KeyWordsHandler> {
        self.key_words_handler.or(match self.db_type() {
            DbType::Mysql | DbType::Mariadb => Some(KeyWordsHandler::MySql),
            DbType::PostgreSql => Some(KeyWordsHandler::PostgreSql),
            _ => None,
        })
    }

    fn snapshot_path(&self) -> Option<&str> {
        let url = self.url.trim();
        if let Some(path) = url.strip_prefix(SNAPSHOT_SCHEME) {
            return Some(path);
        }
        let lower = url.to_lowercase();
        if lower.ends_with(".yaml") || lower.ends_with(".yml") || lower.ends_with(".json") {
            return Some(url);
        }
        None
    }

    /// 创建表结构读取器
    pub fn schema_reader(&self) -> Result<Box<dyn SchemaReader>> {
        if let Some(snapshot) = &self.snapshot {
            return Ok(Box::new(snapshot.clone()));
        }
        if let Some(path) = self.snapshot_path() {
            return Ok(Box::new(SchemaSnapshot::load(path)?));
        }
        match self.db_type() {
            #[cfg(feature = "mysql-sync")]
            DbType::Mysql | DbType::Mariadb => Ok(Box::new(crate::query::MySqlReader::connect(self)?)),
            #[cfg(not(feature = "mysql-sync"))]
            DbType::Mysql | DbType::Mariadb => Err(GeneratorError::UnsupportedDataSource(format!(
                "{} (enable the `mysql-sync` feature)",
                self.url
            ))),
            _ => Err(GeneratorError::UnsupportedDataSource(self.url.clone())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DataSourceConfigBuilder {
    config: DataSourceConfig,
}

impl DataSourceConfigBuilder {
    pub fn schema<S: Into<String>>(mut self, schema_name: S) -> Self {
        self.config.schema_name = Some(schema_name.into());
        self
    }

    pub fn key_words_handler(mut self, handler: KeyWordsHandler) -> Self {
        self.config.key_words_handler = Some(handler);
        self
    }

    pub fn snapshot(mut self, snapshot: SchemaSnapshot) -> Self {
        self.config.snapshot = Some(snapshot);
        self
    }

    pub fn build(self) -> DataSourceConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_type() {
        let config = DataSourceConfig::new("jdbc:mysql://localhost:3306/mp", "root", "");
        assert_eq!(config.db_type(), DbType::Mysql);
        assert_eq!(config.key_words(), Some(KeyWordsHandler::MySql));
        let config = DataSourceConfig::new("jdbc:postgresql://localhost:5432/mp", "", "");
        assert_eq!(config.key_words(), Some(KeyWordsHandler::PostgreSql));
        assert_eq!(DataSourceConfig::new("schema.yaml", "", "").db_type(), DbType::Mysql);
    }

    #[test]
    fn test_unsupported_reader() {
        let config = DataSourceConfig::new("jdbc:oracle:thin:@localhost:1521:orcl", "", "");
        assert!(matches!(config.schema_reader(), Err(GeneratorError::UnsupportedDataSource(_))));
    }

    #[test]
    fn test_snapshot_reader() {
        let config = DataSourceConfig::from_snapshot(SchemaSnapshot::new());
        assert!(config.schema_reader().is_ok());
    }
}
