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

use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use getset::{Getters, Setters};
use serde::{Deserialize, Serialize};

use crate::config::rules::DateType;

const DEFAULT_COMMENT_DATE: &str = "%Y-%m-%d";

/// 全局配置
#[derive(Debug, Clone, Serialize, Deserialize, Getters, Setters)]
#[getset(get = "pub", set = "pub")]
#[serde(default)]
pub struct GlobalConfig {
    /// 输出目录，为空时使用系统临时目录
    output_dir: String,
    /// 自定义模板目录，模板文件以 `.tmpl` 结尾
    template_dir: Option<String>,
    /// 是否覆盖已有文件
    file_override: bool,
    /// 生成完成后是否打开输出目录
    open: bool,
    /// 作者
    author: String,
    /// 开启 kotlin 模式
    kotlin: bool,
    /// 开启 swagger 模式
    swagger: bool,
    /// 时间类型对应策略
    date_type: DateType,
    /// 注释日期格式(strftime)
    comment_date: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_dir: std::env::temp_dir().to_string_lossy().to_string(),
            template_dir: None,
            file_override: false,
            open: true,
            author: "baomidou".to_string(),
            kotlin: false,
            swagger: false,
            date_type: DateType::TimePack,
            comment_date: DEFAULT_COMMENT_DATE.to_string(),
        }
    }
}

impl GlobalConfig {
    pub fn builder() -> GlobalConfigBuilder {
        GlobalConfigBuilder::default()
    }

    /// 按注释日期格式输出当前日期，格式非法时回退到 `%Y-%m-%d`
    pub fn formatted_comment_date(&self) -> String {
        let invalid = StrftimeItems::new(&self.comment_date).any(|item| matches!(item, Item::Error));
        let pattern = if invalid || self.comment_date.is_empty() {
            DEFAULT_COMMENT_DATE
        } else {
            self.comment_date.as_str()
        };
        Local::now().format(pattern).to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct GlobalConfigBuilder {
    config: GlobalConfig,
}

impl GlobalConfigBuilder {
    pub fn output_dir<S: Into<String>>(mut self, output_dir: S) -> Self {
        self.config.output_dir = output_dir.into();
        self
    }

    pub fn template_dir<S: Into<String>>(mut self, template_dir: S) -> Self {
        self.config.template_dir = Some(template_dir.into());
        self
    }

    /// 覆盖已有文件
    pub fn enable_file_override(mut self) -> Self {
        self.config.file_override = true;
        self
    }

    /// 禁止打开输出目录
    pub fn disable_open_dir(mut self) -> Self {
        self.config.open = false;
        self
    }

    pub fn author<S: Into<String>>(mut self, author: S) -> Self {
        self.config.author = author.into();
        self
    }

    pub fn enable_kotlin(mut self) -> Self {
        self.config.kotlin = true;
        self
    }

    pub fn enable_swagger(mut self) -> Self {
        self.config.swagger = true;
        self
    }

    pub fn date_type(mut self, date_type: DateType) -> Self {
        self.config.date_type = date_type;
        self
    }

    pub fn comment_date<S: Into<String>>(mut self, pattern: S) -> Self {
        self.config.comment_date = pattern.into();
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = GlobalConfig::builder()
            .output_dir("/tmp/out")
            .author("mrpan")
            .enable_kotlin()
            .disable_open_dir()
            .build();
        assert_eq!(config.output_dir(), "/tmp/out");
        assert_eq!(config.author(), "mrpan");
        assert!(*config.kotlin());
        assert!(!*config.open());
        assert!(!*config.file_override());
    }

    #[test]
    fn test_comment_date_fallback() {
        let config = GlobalConfig::builder().comment_date("%Q").build();
        let date = config.formatted_comment_date();
        assert_eq!(date.len(), "2024-01-01".len());
    }
}
