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

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::constant::UNDERLINE;
use crate::util::{capital_first, is_capital_mode, is_mixed_mode};

/// 命名策略
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum NamingStrategy {
    /// 不做任何改变，原样输出
    NoChange,
    /// 下划线转驼峰命名
    UnderlineToCamel,
}

impl Default for NamingStrategy {
    fn default() -> Self {
        Self::NoChange
    }
}

impl NamingStrategy {

    pub fn underline_to_camel(name: &str) -> String {
        if name.trim().is_empty() {
            return String::new();
        }
        // 大写数字下划线组成转为小写, 允许混合模式转为小写
        let temp_name = if is_capital_mode(name) || is_mixed_mode(name) {
            name.to_lowercase()
        } else {
            name.to_string()
        };
        let mut result = String::with_capacity(temp_name.len());
        // 跳过原始字符串中开头、结尾的下换线或双重下划线
        for camel in temp_name.split(UNDERLINE).filter(|v| !v.is_empty()) {
            if result.is_empty() {
                result.push_str(camel);
            } else {
                result.push_str(&capital_first(camel));
            }
        }
        result
    }

    /// 去掉指定的前缀(忽略大小写)，取第一个匹配项
    pub fn remove_prefix(name: &str, prefixes: &[String]) -> String {
        if name.trim().is_empty() {
            return String::new();
        }
        let lower = name.to_lowercase();
        prefixes.iter()
            .find(|prefix| lower.starts_with(&prefix.to_lowercase()))
            .and_then(|prefix| name.get(prefix.len()..))
            .map(ToString::to_string)
            .unwrap_or_else(|| name.to_string())
    }

    /// 去掉指定的后缀(忽略大小写)，取第一个匹配项
    pub fn remove_suffix(name: &str, suffixes: &[String]) -> String {
        if name.trim().is_empty() {
            return String::new();
        }
        let lower = name.to_lowercase();
        suffixes.iter()
            .find(|suffix| lower.ends_with(&suffix.to_lowercase()))
            .and_then(|suffix| name.len().checked_sub(suffix.len()))
            .and_then(|end| name.get(..end))
            .map(ToString::to_string)
            .unwrap_or_else(|| name.to_string())
    }

    pub fn remove_prefix_and_camel(name: &str, prefixes: &[String]) -> String {
        Self::underline_to_camel(&Self::remove_prefix(name, prefixes))
    }

    pub fn remove_suffix_and_camel(name: &str, suffixes: &[String]) -> String {
        Self::underline_to_camel(&Self::remove_suffix(name, suffixes))
    }
}

/// 数据库时间类型到实体类时间类型的对应策略
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum DateType {
    /// 只使用 java.util.date 代替
    OnlyDate,
    /// 使用 java.sql 包下的
    SqlPack,
    /// 使用 java.time 包下的
    TimePack,
}

impl Default for DateType {
    fn default() -> Self {
        Self::TimePack
    }
}

/// 数据库类型，根据连接地址识别
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum DbType {
    Mysql,
    Mariadb,
    Oracle,
    Db2,
    H2,
    Sqlite,
    PostgreSql,
    SqlServer,
    Dm,
    KingbaseEs,
    Other,
}

impl DbType {
    pub fn from_url(url: &str) -> Self {
        let url = url.to_lowercase();
        let has = |name: &str| url.contains(&format!(":{}:", name)) || url.starts_with(&format!("{}:", name));
        if has("mysql") || has("cobar") {
            DbType::Mysql
        } else if has("mariadb") {
            DbType::Mariadb
        } else if has("oracle") {
            DbType::Oracle
        } else if has("postgresql") || has("postgres") {
            DbType::PostgreSql
        } else if has("sqlserver") {
            DbType::SqlServer
        } else if has("db2") {
            DbType::Db2
        } else if has("h2") {
            DbType::H2
        } else if has("sqlite") {
            DbType::Sqlite
        } else if has("dm") {
            DbType::Dm
        } else if has("kingbase8") {
            DbType::KingbaseEs
        } else {
            DbType::Other
        }
    }
}

/// 字段填充策略
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum FieldFill {
    /// 默认不处理
    Default,
    /// 插入时填充字段
    Insert,
    /// 更新时填充字段
    Update,
    /// 插入和更新时填充字段
    InsertUpdate,
}

impl FieldFill {
    pub fn name(&self) -> &'static str {
        match self {
            FieldFill::Default => "DEFAULT",
            FieldFill::Insert => "INSERT",
            FieldFill::Update => "UPDATE",
            FieldFill::InsertUpdate => "INSERT_UPDATE",
        }
    }
}

/// 主键类型
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum IdType {
    Auto,
    None,
    Input,
    AssignId,
    AssignUuid,
}

impl IdType {
    pub fn name(&self) -> &'static str {
        match self {
            IdType::Auto => "AUTO",
            IdType::None => "NONE",
            IdType::Input => "INPUT",
            IdType::AssignId => "ASSIGN_ID",
            IdType::AssignUuid => "ASSIGN_UUID",
        }
    }
}

impl fmt::Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 模糊匹配方式
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum SqlLike {
    /// `%value`
    Left,
    /// `value%`
    Right,
    /// `%value%`
    Default,
}

impl Default for SqlLike {
    fn default() -> Self {
        Self::Default
    }
}

/// 表名模糊匹配
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct LikeTable {
    value: String,
    #[serde(default)]
    like: SqlLike,
}

impl LikeTable {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self::with_like(value, SqlLike::Default)
    }

    pub fn with_like<S: Into<String>>(value: S, like: SqlLike) -> Self {
        Self { value: value.into(), like }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn matches(&self, table_name: &str) -> bool {
        let name = table_name.to_lowercase();
        let value = self.value.to_lowercase();
        match self.like {
            SqlLike::Left => name.ends_with(&value),
            SqlLike::Right => name.starts_with(&value),
            SqlLike::Default => name.contains(&value),
        }
    }
}

/// 实体属性类型
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum DbColumnType {
    // 基本类型
    BaseByte,
    BaseShort,
    BaseChar,
    BaseInt,
    BaseLong,
    BaseFloat,
    BaseDouble,
    BaseBoolean,

    // 包装类型
    Byte,
    Short,
    Character,
    Integer,
    Long,
    Float,
    Double,
    Boolean,
    String,

    // sql 包下数据类型
    DateSql,
    Time,
    Timestamp,
    Blob,
    Clob,

    // java8 新时间类型
    LocalDate,
    LocalTime,
    Year,
    YearMonth,
    LocalDateTime,
    Instant,

    // 其他杂类
    ByteArray,
    Object,
    Date,
    BigInteger,
    BigDecimal,
}

impl DbColumnType {
    /// 类型名称
    pub fn get_type(&self) -> &'static str {
        use DbColumnType::*;
        match self {
            BaseByte => "byte",
            BaseShort => "short",
            BaseChar => "char",
            BaseInt => "int",
            BaseLong => "long",
            BaseFloat => "float",
            BaseDouble => "double",
            BaseBoolean => "boolean",
            Byte => "Byte",
            Short => "Short",
            Character => "Character",
            Integer => "Integer",
            Long => "Long",
            Float => "Float",
            Double => "Double",
            Boolean => "Boolean",
            String => "String",
            DateSql | Date => "Date",
            Time => "Time",
            Timestamp => "Timestamp",
            Blob => "Blob",
            Clob => "Clob",
            LocalDate => "LocalDate",
            LocalTime => "LocalTime",
            Year => "Year",
            YearMonth => "YearMonth",
            LocalDateTime => "LocalDateTime",
            Instant => "Instant",
            ByteArray => "byte[]",
            Object => "Object",
            BigInteger => "BigInteger",
            BigDecimal => "BigDecimal",
        }
    }

    /// 需要导入的包，基本类型和 java.lang 下的类型返回 None
    pub fn get_pkg(&self) -> Option<&'static str> {
        use DbColumnType::*;
        match self {
            DateSql => Some("java.sql.Date"),
            Time => Some("java.sql.Time"),
            Timestamp => Some("java.sql.Timestamp"),
            Blob => Some("java.sql.Blob"),
            Clob => Some("java.sql.Clob"),
            LocalDate => Some("java.time.LocalDate"),
            LocalTime => Some("java.time.LocalTime"),
            Year => Some("java.time.Year"),
            YearMonth => Some("java.time.YearMonth"),
            LocalDateTime => Some("java.time.LocalDateTime"),
            Instant => Some("java.time.Instant"),
            Date => Some("java.util.Date"),
            BigInteger => Some("java.math.BigInteger"),
            BigDecimal => Some("java.math.BigDecimal"),
            _ => None,
        }
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, DbColumnType::Boolean | DbColumnType::BaseBoolean)
    }
}

impl Default for DbColumnType {
    fn default() -> Self {
        Self::String
    }
}

impl fmt::Display for DbColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.get_type())
    }
}

impl Serialize for DbColumnType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.get_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_underline_to_camel() {
        assert_eq!(NamingStrategy::underline_to_camel("sys_user_role"), "sysUserRole");
        assert_eq!(NamingStrategy::underline_to_camel("SYS_USER"), "sysUser");
        assert_eq!(NamingStrategy::underline_to_camel("Sys_User"), "sysUser");
        assert_eq!(NamingStrategy::underline_to_camel("_user__name_"), "userName");
        assert_eq!(NamingStrategy::underline_to_camel("userName"), "userName");
        assert_eq!(NamingStrategy::underline_to_camel(""), "");
    }

    #[test]
    fn test_remove_prefix_and_suffix() {
        let prefixes = strings(&["t_", "sys_"]);
        assert_eq!(NamingStrategy::remove_prefix("sys_user", &prefixes), "user");
        assert_eq!(NamingStrategy::remove_prefix("T_ORDER", &prefixes), "ORDER");
        assert_eq!(NamingStrategy::remove_prefix("user", &prefixes), "user");
        assert_eq!(NamingStrategy::remove_suffix("user_tb", &strings(&["_tb"])), "user");
        assert_eq!(NamingStrategy::remove_prefix_and_camel("t_order_item", &prefixes), "orderItem");
    }

    #[test]
    fn test_db_type_from_url() {
        assert_eq!(DbType::from_url("jdbc:mysql://localhost:3306/test"), DbType::Mysql);
        assert_eq!(DbType::from_url("mysql://root@localhost/test"), DbType::Mysql);
        assert_eq!(DbType::from_url("jdbc:postgresql://localhost/test"), DbType::PostgreSql);
        assert_eq!(DbType::from_url("snapshot:./schema.yaml"), DbType::Other);
    }

    #[test]
    fn test_like_table() {
        assert!(LikeTable::new("user").matches("sys_user_role"));
        assert!(LikeTable::with_like("sys_", SqlLike::Right).matches("SYS_USER"));
        assert!(!LikeTable::with_like("sys_", SqlLike::Left).matches("sys_user"));
        assert!(LikeTable::with_like("_log", SqlLike::Left).matches("t_login_log"));
    }

    #[test]
    fn test_column_type_pkg() {
        assert_eq!(DbColumnType::LocalDateTime.get_pkg(), Some("java.time.LocalDateTime"));
        assert_eq!(DbColumnType::String.get_pkg(), None);
        assert_eq!(DbColumnType::Date.get_type(), "Date");
    }
}
