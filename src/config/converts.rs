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

use crate::config::rules::{DateType, DbColumnType, DbType};

/// 数据库字段类型转换
pub trait TypeConvert {
    /// 执行类型转换
    ///
    /// * `date_type` - 时间类型策略
    /// * `field_type` - 字段类型，例如 `varchar(64)`
    fn process_type_convert(&self, date_type: DateType, field_type: &str) -> DbColumnType;
}

/// MYSQL 数据库字段类型转换
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlTypeConvert;

impl TypeConvert for MySqlTypeConvert {
    fn process_type_convert(&self, date_type: DateType, field_type: &str) -> DbColumnType {
        let t = field_type.to_lowercase();
        let has = |s: &str| t.contains(s);
        if has("char") || has("text") || has("json") || has("enum") {
            DbColumnType::String
        } else if has("bigint") {
            DbColumnType::Long
        } else if has("tinyint(1)") {
            DbColumnType::Boolean
        } else if has("int") {
            DbColumnType::Integer
        } else if has("date") || has("time") || has("year") {
            to_date_type(date_type, &t)
        } else if has("bit") {
            DbColumnType::Boolean
        } else if has("decimal") || has("numeric") {
            DbColumnType::BigDecimal
        } else if has("clob") {
            DbColumnType::Clob
        } else if has("blob") {
            DbColumnType::Blob
        } else if has("binary") {
            DbColumnType::ByteArray
        } else if has("float") {
            DbColumnType::Float
        } else if has("double") {
            DbColumnType::Double
        } else {
            DbColumnType::String
        }
    }
}

/// 转换为日期类型，`datetime(3)` 之类的长度会被忽略
fn to_date_type(date_type: DateType, field_type: &str) -> DbColumnType {
    let base = field_type.split('(').next().unwrap_or(field_type).trim();
    match date_type {
        DateType::OnlyDate => DbColumnType::Date,
        DateType::SqlPack => match base {
            "date" | "year" => DbColumnType::DateSql,
            "time" => DbColumnType::Time,
            _ => DbColumnType::Timestamp,
        },
        DateType::TimePack => match base {
            "date" => DbColumnType::LocalDate,
            "time" => DbColumnType::LocalTime,
            "year" => DbColumnType::Year,
            _ => DbColumnType::LocalDateTime,
        },
    }
}

/// 选择对应数据库的类型转换
pub fn type_convert(db_type: DbType) -> Box<dyn TypeConvert> {
    match db_type {
        DbType::Mysql | DbType::Mariadb => Box::new(MySqlTypeConvert),
        // TODO: oracle/postgresql 的 number、timestamptz 等类型需要单独的转换规则
        _ => Box::new(MySqlTypeConvert),
    }
}

/// 数据库关键字处理
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum KeyWordsHandler {
    MySql,
    PostgreSql,
}

impl KeyWordsHandler {
    pub fn key_words(&self) -> &'static [&'static str] {
        match self {
            KeyWordsHandler::MySql => MYSQL_KEY_WORDS,
            KeyWordsHandler::PostgreSql => POSTGRE_KEY_WORDS,
        }
    }

    pub fn is_key_words(&self, column_name: &str) -> bool {
        let upper = column_name.to_uppercase();
        self.key_words().contains(&upper.as_str())
    }

    /// 转义关键字字段
    pub fn format_column(&self, column_name: &str) -> String {
        match self {
            KeyWordsHandler::MySql => format!("`{}`", column_name),
            KeyWordsHandler::PostgreSql => format!("\"{}\"", column_name),
        }
    }
}

/// mysql 保留字
const MYSQL_KEY_WORDS: &[&str] = &[
    "ACCESSIBLE", "ADD", "ALL", "ALTER", "ANALYZE", "AND", "AS", "ASC", "BEFORE", "BETWEEN",
    "BIGINT", "BINARY", "BLOB", "BOTH", "BY", "CALL", "CASCADE", "CASE", "CHANGE", "CHAR",
    "CHARACTER", "CHECK", "COLLATE", "COLUMN", "CONDITION", "CONSTRAINT", "CONTINUE", "CONVERT",
    "CREATE", "CROSS", "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP", "CURRENT_USER",
    "CURSOR", "DATABASE", "DATABASES", "DEC", "DECIMAL", "DECLARE", "DEFAULT", "DELAYED",
    "DELETE", "DESC", "DESCRIBE", "DETERMINISTIC", "DISTINCT", "DISTINCTROW", "DIV", "DOUBLE",
    "DROP", "DUAL", "EACH", "ELSE", "ELSEIF", "ENCLOSED", "ESCAPED", "EXISTS", "EXIT", "EXPLAIN",
    "FALSE", "FETCH", "FLOAT", "FOR", "FORCE", "FOREIGN", "FROM", "FULLTEXT", "GENERATED", "GET",
    "GRANT", "GROUP", "GROUPS", "HAVING", "IF", "IGNORE", "IN", "INDEX", "INFILE", "INNER", "INOUT",
    "INSERT", "INT", "INTEGER", "INTERVAL", "INTO", "IS", "ITERATE", "JOIN", "KEY", "KEYS", "KILL",
    "LEADING", "LEAVE", "LEFT", "LIKE", "LIMIT", "LINEAR", "LINES", "LOAD", "LOCALTIME",
    "LOCALTIMESTAMP", "LOCK", "LONG", "LOOP", "MATCH", "MAXVALUE", "MOD", "MODIFIES", "NATURAL",
    "NOT", "NULL", "NUMERIC", "ON", "OPTIMIZE", "OPTION", "OR", "ORDER", "OUT", "OUTER", "OUTFILE",
    "PARTITION", "PRECISION", "PRIMARY", "PROCEDURE", "PURGE", "RANGE", "RANK", "READ", "READS",
    "REAL", "RECURSIVE", "REFERENCES", "REGEXP", "RELEASE", "RENAME", "REPEAT", "REPLACE",
    "REQUIRE", "RESTRICT", "RETURN", "REVOKE", "RIGHT", "RLIKE", "ROW", "ROWS", "SCHEMA",
    "SCHEMAS", "SELECT", "SEPARATOR", "SET", "SHOW", "SIGNAL", "SMALLINT", "SPATIAL", "SQL",
    "SSL", "STARTING", "STATUS", "STORED", "TABLE", "TERMINATED", "THEN", "TINYINT", "TO",
    "TRAILING", "TRIGGER", "TRUE", "UNDO", "UNION", "UNIQUE", "UNLOCK", "UNSIGNED", "UPDATE",
    "USAGE", "USE", "USING", "VALUES", "VARBINARY", "VARCHAR", "VARYING", "VIRTUAL", "WHEN",
    "WHERE", "WHILE", "WINDOW", "WITH", "WRITE", "XOR", "YEAR_MONTH", "ZEROFILL",
];

/// postgresql 保留字
const POSTGRE_KEY_WORDS: &[&str] = &[
    "ALL", "ANALYSE", "ANALYZE", "AND", "ANY", "ARRAY", "AS", "ASC", "ASYMMETRIC", "BOTH", "CASE",
    "CAST", "CHECK", "COLLATE", "COLUMN", "CONSTRAINT", "CREATE", "CURRENT_CATALOG",
    "CURRENT_DATE", "CURRENT_ROLE", "CURRENT_TIME", "CURRENT_TIMESTAMP", "CURRENT_USER",
    "DEFAULT", "DEFERRABLE", "DESC", "DISTINCT", "DO", "ELSE", "END", "EXCEPT", "FALSE", "FETCH",
    "FOR", "FOREIGN", "FROM", "GRANT", "GROUP", "HAVING", "IN", "INITIALLY", "INTERSECT", "INTO",
    "LATERAL", "LEADING", "LIMIT", "LOCALTIME", "LOCALTIMESTAMP", "NOT", "NULL", "OFFSET", "ON",
    "ONLY", "OR", "ORDER", "PLACING", "PRIMARY", "REFERENCES", "RETURNING", "SELECT",
    "SESSION_USER", "SOME", "SYMMETRIC", "TABLE", "THEN", "TO", "TRAILING", "TRUE", "UNION",
    "UNIQUE", "USER", "USING", "VARIADIC", "WHEN", "WHERE", "WINDOW", "WITH",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mysql_type_convert() {
        let convert = MySqlTypeConvert;
        let t = |s: &str| convert.process_type_convert(DateType::TimePack, s);
        assert_eq!(t("varchar(64)"), DbColumnType::String);
        assert_eq!(t("bigint(20)"), DbColumnType::Long);
        assert_eq!(t("tinyint(1)"), DbColumnType::Boolean);
        assert_eq!(t("tinyint(4)"), DbColumnType::Integer);
        assert_eq!(t("decimal(10,2)"), DbColumnType::BigDecimal);
        assert_eq!(t("datetime"), DbColumnType::LocalDateTime);
        assert_eq!(t("date"), DbColumnType::LocalDate);
        assert_eq!(t("longblob"), DbColumnType::Blob);
        assert_eq!(t("double"), DbColumnType::Double);
    }

    #[test]
    fn test_date_type_strategy() {
        let convert = MySqlTypeConvert;
        assert_eq!(convert.process_type_convert(DateType::OnlyDate, "datetime"), DbColumnType::Date);
        assert_eq!(convert.process_type_convert(DateType::SqlPack, "timestamp(3)"), DbColumnType::Timestamp);
        assert_eq!(convert.process_type_convert(DateType::SqlPack, "time"), DbColumnType::Time);
    }

    #[test]
    fn test_key_words() {
        assert!(KeyWordsHandler::MySql.is_key_words("desc"));
        assert!(!KeyWordsHandler::MySql.is_key_words("user_name"));
        assert_eq!(KeyWordsHandler::MySql.format_column("order"), "`order`");
        assert_eq!(KeyWordsHandler::PostgreSql.format_column("user"), "\"user\"");
    }
}
