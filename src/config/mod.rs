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
//! 生成配置
//!
use std::fmt;

use serde::{Deserialize, Serialize};

pub mod builder;
pub mod converts;
pub mod rules;

mod datasource;
mod global;
mod injection;
mod package;
mod path_info;
mod strategy;
mod template;

pub use datasource::{DataSourceConfig, DataSourceConfigBuilder};
pub use global::{GlobalConfig, GlobalConfigBuilder};
pub use injection::{BeforeOutputFile, InjectionConfig, InjectionConfigBuilder};
pub use package::{PackageConfig, PackageConfigBuilder};
pub use path_info::PathInfoHandler;
pub use strategy::{StrategyConfig, StrategyConfigBuilder};
pub use template::{TemplateConfig, TemplateConfigBuilder, TemplateType};

/// 输出文件类型
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum OutputFile {
    Entity,
    Service,
    ServiceImpl,
    Mapper,
    Xml,
    Controller,
    Parent,
    Other,
}

impl OutputFile {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFile::Entity => "entity",
            OutputFile::Service => "service",
            OutputFile::ServiceImpl => "serviceImpl",
            OutputFile::Mapper => "mapper",
            OutputFile::Xml => "xml",
            OutputFile::Controller => "controller",
            OutputFile::Parent => "parent",
            OutputFile::Other => "other",
        }
    }
}

impl fmt::Display for OutputFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
