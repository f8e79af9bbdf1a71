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

//! This crate offers:
//!
//! *   A MyBatis-Plus code generator in pure rust;
//! *   Entity / Mapper / Mapper XML / Service / Controller sources rendered by `tera` templates.
//!
//! Features:
//!
//! *   Read table structures from MySQL (`mysql-sync`) or from a YAML/JSON schema snapshot;
//! *   Per-table modules with `module_name: "*"`;
//! *   Custom templates and custom files injected per table.
//!
//! ## Installation
//!
//! Put the desired version of the crate into the `dependencies` section of your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! mybatis_plus_generator = "0.6.1"
//! ```
//!
//! ## Feature.
//!
//! * ```mysql-sync``` - read table structures from a live mysql database
//!
//! ## Example
//!
//! ```rust,no_run
//! use mybatis_plus_generator::prelude::*;
//!
//! let snapshot = SchemaSnapshot::new().table(
//!     TableMeta::new("t_user", "用户表"),
//!     vec![ColumnMeta::new("id", "bigint(20)").primary_key(), ColumnMeta::new("user_name", "varchar(64)")],
//! );
//! AutoGenerator::new(DataSourceConfig::from_snapshot(snapshot))
//!     .with_global(GlobalConfig::builder().output_dir("./output").disable_open_dir().build())
//!     .with_package(PackageConfig::builder().parent("com.example").module_name("sys").build())
//!     .with_strategy(StrategyConfig::builder().add_table_prefix(vec!["t_"]).entity_builder().enable_lombok().build())
//!     .execute()
//!     .unwrap();
//! ```
//!
pub mod config;
pub mod constant;
pub mod engine;
pub mod error;
pub mod function;
pub mod generator;
pub mod po;
pub mod query;
pub mod util;

pub use error::{GeneratorError, Result};
pub use generator::{prompt_for_config_path_or_default, AutoGenerator};

pub mod prelude {
    pub use crate::config::builder::{BaseBuilder, ConfigBuilder, DefaultNameConvert, NameConvert};
    pub use crate::config::converts::KeyWordsHandler;
    pub use crate::config::rules::{DateType, DbColumnType, DbType, FieldFill, IdType, LikeTable, NamingStrategy, SqlLike};
    pub use crate::config::{
        DataSourceConfig, GlobalConfig, InjectionConfig, OutputFile, PackageConfig, PathInfoHandler, StrategyConfig,
        TemplateConfig, TemplateType,
    };
    pub use crate::engine::TemplateEngine;
    pub use crate::error::{GeneratorError, Result};
    pub use crate::function::ConverterFileName;
    pub use crate::generator::AutoGenerator;
    pub use crate::po::{TableField, TableFill, TableInfo};
    pub use crate::query::{ColumnMeta, DatabaseQuery, DefaultDatabaseQuery, SchemaReader, SchemaSnapshot, TableMeta};
}
