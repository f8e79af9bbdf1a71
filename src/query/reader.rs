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

use std::path::Path;

use getset::Getters;
use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, Result};

/// 表元数据
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct TableMeta {
    name: String,
    comment: String,
    /// 是否视图
    is_view: bool,
}

impl TableMeta {
    pub fn new<S: Into<String>>(name: S, comment: S) -> Self {
        Self { name: name.into(), comment: comment.into(), is_view: false }
    }

    pub fn view<S: Into<String>>(name: S) -> Self {
        Self { name: name.into(), comment: "VIEW".to_string(), is_view: true }
    }
}

/// 字段元数据
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct ColumnMeta {
    name: String,
    /// 字段类型，例如 `varchar(64)`
    #[serde(rename = "type")]
    column_type: String,
    comment: String,
    /// 索引类型，主键为 `PRI`
    key: String,
    /// 附加信息，自增主键为 `auto_increment`
    extra: String,
}

impl ColumnMeta {
    pub fn new<S: Into<String>>(name: S, column_type: S) -> Self {
        Self { name: name.into(), column_type: column_type.into(), ..Default::default() }
    }

    pub fn with_comment<S: Into<String>>(mut self, comment: S) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.key = "PRI".to_string();
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.extra = "auto_increment".to_string();
        self
    }

    pub fn is_primary_key(&self) -> bool {
        self.key.eq_ignore_ascii_case("PRI")
    }

    pub fn is_auto_increment(&self) -> bool {
        self.extra.eq_ignore_ascii_case("auto_increment")
    }
}

/// 数据库结构读取
pub trait SchemaReader {
    /// 全部表信息
    fn tables(&mut self) -> Result<Vec<TableMeta>>;

    /// 表字段信息
    fn columns(&mut self, table_name: &str) -> Result<Vec<ColumnMeta>>;
}

/// 快照表结构
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotTable {
    #[serde(flatten)]
    pub table: TableMeta,
    pub columns: Vec<ColumnMeta>,
}

/// 数据库结构快照，可从 yaml/json 文件加载，无需连接数据库即可生成代码
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaSnapshot {
    tables: Vec<SnapshotTable>,
}

impl SchemaSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(mut self, table: TableMeta, columns: Vec<ColumnMeta>) -> Self {
        self.tables.push(SnapshotTable { table, columns });
        self
    }

    /// 按扩展名加载快照，`.json` 使用 json 其余按 yaml 解析
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path.extension().map(|ext| ext.eq_ignore_ascii_case("json")).unwrap_or(false);
        let snapshot = if is_json {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        tracing::debug!("loaded schema snapshot from {}", path.display());
        Ok(snapshot)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl SchemaReader for SchemaSnapshot {
    fn tables(&mut self) -> Result<Vec<TableMeta>> {
        Ok(self.tables.iter().map(|t| t.table.clone()).collect())
    }

    fn columns(&mut self, table_name: &str) -> Result<Vec<ColumnMeta>> {
        self.tables
            .iter()
            .find(|t| t.table.name == table_name)
            .map(|t| t.columns.clone())
            .ok_or_else(|| GeneratorError::DatabaseError(format!("Table '{}' doesn't exist", table_name)))
    }
}
