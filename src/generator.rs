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
//! 代码生成器入口，负责加载配置并驱动模板引擎
//!
use std::fs;
use std::io::Write;
use std::path::Path;

use dialoguer::{Confirm, Input};
use getset::{Getters, MutGetters, Setters};
use serde::{Deserialize, Serialize};

use crate::config::builder::ConfigBuilder;
use crate::config::{DataSourceConfig, GlobalConfig, InjectionConfig, PackageConfig, StrategyConfig, TemplateConfig};
use crate::constant::COMMA;
use crate::engine::TemplateEngine;
use crate::error::{GeneratorError, Result};

/// 生成器配置，对应 YAML 配置文件中的各个段
#[derive(Debug, Clone, Default, Serialize, Deserialize, Getters, MutGetters, Setters)]
#[getset(get_mut = "pub", get = "pub", set = "pub")]
#[serde(default)]
pub struct AutoGenerator {
    datasource: DataSourceConfig,
    global: GlobalConfig,
    package: PackageConfig,
    strategy: StrategyConfig,
    template: TemplateConfig,
    injection: InjectionConfig,
}

fn interactive_help() -> Result<AutoGenerator> {
    let database_url: String = Input::new()
        .with_prompt("Enter your database URL (or a schema snapshot file)\n")
        .default("mysql://localhost:3306/db_name".into())
        .interact_text()?;
    let username: String = Input::new()
        .with_prompt("Enter your database username\n")
        .default("root".into())
        .interact_text()?;
    let password: String = Input::new()
        .with_prompt("Enter your database password\n")
        .allow_empty(true)
        .default("".into())
        .interact_text()?;
    let tables: String = Input::new()
        .with_prompt("Enter your table_names (like 'table_a,table_b', empty for all)\n")
        .allow_empty(true)
        .default("".into())
        .interact_text()?;
    let table_prefix: String = Input::new()
        .with_prompt("Enter the table prefix to remove (like 't_')\n")
        .allow_empty(true)
        .default("".into())
        .interact_text()?;
    let parent: String = Input::new()
        .with_prompt("Enter your parent package\n")
        .default("com.baomidou".into())
        .interact_text()?;
    let module_name: String = Input::new()
        .with_prompt("Enter your module name ('*' generates one module per table)\n")
        .allow_empty(true)
        .default("".into())
        .interact_text()?;
    let author: String = Input::new()
        .with_prompt("Enter the author\n")
        .default("baomidou".into())
        .interact_text()?;
    let output_dir: String = Input::new()
        .with_prompt("Enter your output directory path\n")
        .default("./output".into())
        .interact_text()?;
    let template_dir: String = Input::new()
        .with_prompt("Enter your template directory path (empty for builtin templates)\n")
        .allow_empty(true)
        .default("".into())
        .interact_text()?;

    let mut global = GlobalConfig::builder().output_dir(output_dir).author(author).build();
    if !template_dir.trim().is_empty() {
        global.set_template_dir(Some(template_dir));
    }
    let strategy = StrategyConfig::builder()
        .add_include(split_names(&tables))
        .add_table_prefix(split_names(&table_prefix))
        .build();
    Ok(AutoGenerator {
        datasource: DataSourceConfig::new(database_url, username, password),
        global,
        package: PackageConfig::builder().parent(parent).module_name(module_name).build(),
        strategy,
        template: TemplateConfig::default(),
        injection: InjectionConfig::default(),
    })
}

fn split_names(names: &str) -> Vec<String> {
    names
        .split(COMMA)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

impl AutoGenerator {
    pub fn new(datasource: DataSourceConfig) -> Self {
        Self { datasource, ..Default::default() }
    }

    /// 从 YAML 文件读取配置
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let content = fs::read_to_string(config_path)?;
        Ok(serde_yaml::from_str::<AutoGenerator>(&content)?)
    }

    /// 读取配置文件，文件不存在时进入交互式配置并保存
    pub fn load_or_create_config(config_path: &str) -> Result<Self> {
        if Path::new(config_path).exists() {
            let config = Self::load(config_path).map_err(|err| {
                tracing::error!("Failed to parse configuration file '{}': {}", config_path, err);
                err
            })?;
            tracing::info!("Configuration loaded successfully from '{}'.", config_path);
            return Ok(config);
        }
        tracing::warn!("Configuration file '{}' not found.", config_path);
        if Confirm::new()
            .with_prompt("Would you like to set up the configuration interactively?\n")
            .interact()?
        {
            let config = interactive_help()?;
            config.save_config(config_path)?;
            Ok(config)
        } else {
            Err(GeneratorError::invalid_config(format!("configuration file '{}' not found", config_path)))
        }
    }

    pub fn with_datasource(mut self, datasource: DataSourceConfig) -> Self {
        self.datasource = datasource;
        self
    }

    pub fn with_global(mut self, cfg: GlobalConfig) -> Self {
        self.global = cfg;
        self
    }

    pub fn with_strategy(mut self, strategy: StrategyConfig) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_package(mut self, package: PackageConfig) -> Self {
        self.package = package;
        self
    }

    pub fn with_template(mut self, template: TemplateConfig) -> Self {
        self.template = template;
        self
    }

    pub fn with_injection(mut self, injection: InjectionConfig) -> Self {
        self.injection = injection;
        self
    }

    /// 校验配置项
    pub fn validate_configuration_fields(&self) -> Result<()> {
        if self.datasource.url().trim().is_empty() && self.datasource.snapshot().is_none() {
            return Err(GeneratorError::invalid_config(
                "'datasource - url' is missing or empty.\n\n\
                Example configuration:\n\
                \tdatasource:\n\
                \t  url: \"mysql://localhost:3306/db_name\"\n\
                \t  username: \"root\"\n\
                \t  password: \"\"",
            ));
        }
        self.strategy.validate()?;
        if self.strategy.include().is_empty() && self.strategy.exclude().is_empty() {
            tracing::warn!("'strategy - include' is empty, code will be generated for all tables.");
        }
        Ok(())
    }

    /// 生成代码
    pub fn execute(self) -> Result<()> {
        self.validate_configuration_fields()?;
        tracing::info!("==========================准备生成文件...==========================");
        // 初始化配置
        let builder = ConfigBuilder::new(
            Some(self.package),
            self.datasource,
            Some(self.strategy),
            Some(self.template),
            Some(self.global),
            Some(self.injection),
        );
        let mut engine = TemplateEngine::init(builder)?;
        // 模板引擎初始化执行文件输出
        engine.mkdirs()?;
        engine.batch_output()?;
        engine.open();
        tracing::info!("==========================文件生成完成！！！==========================");
        Ok(())
    }

    /// 保存配置到文件
    pub fn save_config(&self, path: &str) -> Result<()> {
        let yaml = serde_yaml::to_string(&self)?;
        fs::write(path, yaml)?;
        tracing::info!("Configuration saved to '{}'.", path);
        Ok(())
    }
}

/// 提示用户输入配置文件路径或使用默认路径
pub fn prompt_for_config_path_or_default(prompt: &str, default_value: &str) -> Result<String> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    let trimmed = input.trim();

    if trimmed.is_empty() {
        Ok(default_value.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_names() {
        assert_eq!(split_names("t_user, t_role,,"), vec!["t_user", "t_role"]);
        assert!(split_names("  ").is_empty());
    }

    #[test]
    fn test_validate_configuration_fields() {
        let generator = AutoGenerator::default();
        assert!(matches!(generator.validate_configuration_fields(), Err(GeneratorError::InvalidConfig(_))));

        let generator = AutoGenerator::new(DataSourceConfig::new("mysql://localhost:3306/test", "root", ""))
            .with_strategy(StrategyConfig::builder().add_include(vec!["a"]).add_exclude(vec!["b"]).build());
        assert!(generator.validate_configuration_fields().is_err());

        let generator = AutoGenerator::new(DataSourceConfig::new("mysql://localhost:3306/test", "root", ""));
        assert!(generator.validate_configuration_fields().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let path = path.to_str().unwrap();
        let generator = AutoGenerator::new(DataSourceConfig::new("mysql://localhost:3306/test", "root", "123456"))
            .with_global(GlobalConfig::builder().author("snack").output_dir("/tmp/out").build())
            .with_package(PackageConfig::builder().parent("com.example").module_name("sys").build())
            .with_strategy(StrategyConfig::builder().add_include(vec!["t_user"]).build());
        generator.save_config(path).unwrap();

        let loaded = AutoGenerator::load_or_create_config(path).unwrap();
        assert_eq!(loaded.datasource().url(), "mysql://localhost:3306/test");
        assert_eq!(loaded.global().author(), "snack");
        assert_eq!(loaded.package().module_name(), "sys");
        assert_eq!(loaded.strategy().include(), &vec!["t_user".to_string()]);
    }

    #[test]
    fn test_load_partial_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "datasource:\n  url: mysql://localhost:3306/test\nstrategy:\n  table_prefix: [\"t_\"]\n").unwrap();
        let loaded = AutoGenerator::load(&path).unwrap();
        assert_eq!(loaded.strategy().table_prefix(), &vec!["t_".to_string()]);
        assert_eq!(loaded.package().package_info_of(crate::constant::PARENT), "com.baomidou");
        assert!(loaded.template().mapper().is_some());
    }
}
