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

use crate::constant::PLACE_HOLDER;

/// MYSQL 表结构查询语句与结果列名
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlQuery;

impl MySqlQuery {
    /// 表信息查询 SQL
    pub fn tables_sql(&self, schema_name: Option<&str>) -> String {
        match schema_name.filter(|schema| !schema.trim().is_empty()) {
            Some(schema) => format!("show table status from `{}` WHERE 1=1 ", schema),
            None => "show table status WHERE 1=1 ".to_string(),
        }
    }

    /// 表字段信息查询 SQL
    pub fn table_fields_sql(&self, table_name: &str) -> String {
        "show full fields from `%s`".replace(PLACE_HOLDER, table_name)
    }

    pub fn table_name(&self) -> &'static str {
        "Name"
    }

    pub fn table_comment(&self) -> &'static str {
        "Comment"
    }

    pub fn field_name(&self) -> &'static str {
        "Field"
    }

    pub fn field_type(&self) -> &'static str {
        "Type"
    }

    pub fn field_comment(&self) -> &'static str {
        "Comment"
    }

    pub fn field_key(&self) -> &'static str {
        "Key"
    }

    pub fn field_extra(&self) -> &'static str {
        "Extra"
    }
}

#[cfg(feature = "mysql-sync")]
pub use reader::MySqlReader;

#[cfg(feature = "mysql-sync")]
mod reader {
    use mysql::prelude::Queryable;
    use mysql::{Conn, Opts, OptsBuilder, Row};

    use crate::config::DataSourceConfig;
    use crate::error::Result;
    use crate::query::reader::{ColumnMeta, SchemaReader, TableMeta};
    use crate::query::MySqlQuery;

    /// 通过 `show table status` 读取 MYSQL 表结构
    pub struct MySqlReader {
        conn: Conn,
        schema_name: Option<String>,
        db_query: MySqlQuery,
    }

    impl MySqlReader {
        pub fn connect(config: &DataSourceConfig) -> Result<Self> {
            let url = config.url().trim_start_matches("jdbc:");
            let mut builder = OptsBuilder::from_opts(Opts::from_url(url)?);
            if !config.username().is_empty() {
                builder = builder.user(Some(config.username()));
            }
            if !config.password().is_empty() {
                builder = builder.pass(Some(config.password()));
            }
            let conn = Conn::new(builder)?;
            tracing::info!("connected to {}", url);
            Ok(Self { conn, schema_name: config.schema_name().clone(), db_query: MySqlQuery })
        }

        fn value(row: &Row, column: &str) -> String {
            row.get_opt::<Option<String>, _>(column)
                .and_then(|value| value.ok())
                .flatten()
                .unwrap_or_default()
        }
    }

    impl SchemaReader for MySqlReader {
        fn tables(&mut self) -> Result<Vec<TableMeta>> {
            let sql = self.db_query.tables_sql(self.schema_name.as_deref());
            tracing::debug!("{}", sql);
            let rows: Vec<Row> = self.conn.query(sql)?;
            Ok(rows
                .iter()
                .map(|row| {
                    let name = Self::value(row, self.db_query.table_name());
                    let comment = Self::value(row, self.db_query.table_comment());
                    if comment.eq_ignore_ascii_case("VIEW") {
                        TableMeta::view(name)
                    } else {
                        TableMeta::new(name, comment)
                    }
                })
                .collect())
        }

        fn columns(&mut self, table_name: &str) -> Result<Vec<ColumnMeta>> {
            let sql = self.db_query.table_fields_sql(table_name);
            tracing::debug!("{}", sql);
            let rows: Vec<Row> = self.conn.query(sql)?;
            Ok(rows
                .iter()
                .map(|row| {
                    let mut column = ColumnMeta::new(
                        Self::value(row, self.db_query.field_name()),
                        Self::value(row, self.db_query.field_type()),
                    )
                    .with_comment(Self::value(row, self.db_query.field_comment()));
                    if Self::value(row, self.db_query.field_key()).eq_ignore_ascii_case("PRI") {
                        column = column.primary_key();
                    }
                    if Self::value(row, self.db_query.field_extra()).eq_ignore_ascii_case("auto_increment") {
                        column = column.auto_increment();
                    }
                    column
                })
                .collect())
        }
    }
}

#[test]
fn test_mysql_query_sql() {
    let query = MySqlQuery;
    assert_eq!(query.tables_sql(None), "show table status WHERE 1=1 ");
    assert_eq!(query.tables_sql(Some("mp")), "show table status from `mp` WHERE 1=1 ");
    assert_eq!(query.table_fields_sql("t_user"), "show full fields from `t_user`");
}
