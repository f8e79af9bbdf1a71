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

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, MAIN_SEPARATOR};
use std::process::Command;

use serde_json::{json, Value};
use tera::{Context, Tera};

use crate::config::builder::ConfigBuilder;
use crate::config::rules::NamingStrategy;
use crate::config::OutputFile;
use crate::constant::{JAVA_SUFFIX, KT_SUFFIX, XML_SUFFIX};
use crate::error::Result;
use crate::po::TableInfo;

/// 内置模板
const BUILTIN_TEMPLATES: [(&str, &str); 7] = [
    ("entity.java.tmpl", include_str!("../templates/entity.java.tmpl")),
    ("entity.kt.tmpl", include_str!("../templates/entity.kt.tmpl")),
    ("mapper.java.tmpl", include_str!("../templates/mapper.java.tmpl")),
    ("mapper.xml.tmpl", include_str!("../templates/mapper.xml.tmpl")),
    ("service.java.tmpl", include_str!("../templates/service.java.tmpl")),
    ("serviceImpl.java.tmpl", include_str!("../templates/serviceImpl.java.tmpl")),
    ("controller.java.tmpl", include_str!("../templates/controller.java.tmpl")),
];

/// 模版引擎
pub struct TemplateEngine {
    tera: Tera,
    builder: ConfigBuilder,
}

impl TemplateEngine {
    pub const DOT_SK: &'static str = ".tmpl";

    /// 加载模板，自定义模板目录中的同名模板优先于内置模板
    pub fn init(builder: ConfigBuilder) -> Result<Self> {
        let mut tera = match builder.global_config().template_dir() {
            Some(template_dir) if !template_dir.trim().is_empty() => {
                let pattern = format!("{}/**/*{}", template_dir.trim_end_matches(&['/', '\\'][..]), Self::DOT_SK);
                tracing::debug!("load templates from {}", pattern);
                Tera::new(&pattern)?
            }
            _ => Tera::default(),
        };
        let mut builtin = Tera::default();
        builtin.add_raw_templates(BUILTIN_TEMPLATES)?;
        tera.extend(&builtin)?;
        tera.autoescape_on(vec![]);
        Ok(Self { tera, builder })
    }

    pub fn builder(&self) -> &ConfigBuilder {
        &self.builder
    }

    pub fn builder_mut(&mut self) -> &mut ConfigBuilder {
        &mut self.builder
    }

    /// 打开输出目录
    pub fn open(&self) {
        let global_config = self.builder.global_config();
        if !*global_config.open() {
            return;
        }
        let folder_path = global_config.output_dir();
        let program = match std::env::consts::OS {
            "windows" => "explorer",
            "macos" => "open",
            "linux" | "freebsd" | "openbsd" => "xdg-open",
            os => {
                tracing::warn!("Unsupported OS: {}", os);
                return;
            }
        };
        if let Err(err) = Command::new(program).arg(folder_path).spawn() {
            tracing::warn!("打开输出目录 {} 失败: {}", folder_path, err);
        }
    }

    /// 创建文件夹
    pub fn mkdirs(&self) -> Result<()> {
        for path in self.builder.path_info().values() {
            let dir = Path::new(path);
            if !dir.exists() {
                fs::create_dir_all(dir)?;
                tracing::debug!("创建目录： [{}]", path);
            }
        }
        Ok(())
    }

    /// 输出文件
    pub fn batch_output(&mut self) -> Result<()> {
        let table_info_list = self.builder.table_info_list()?.to_vec();
        for table_info in &table_info_list {
            let module_name = self.module_name(table_info);
            self.builder.refresh_config(&module_name);
            let mut object_map = self.object_map(table_info);
            self.builder.injection_config().before_output_file(table_info, &mut object_map);
            let context = Context::from_serialize(&object_map)?;

            self.output_custom_file(table_info, &context)?;
            self.output_entity(table_info, &context)?;
            self.output_mapper(table_info, &context)?;
            self.output_service(table_info, &context)?;
            self.output_controller(table_info, &context)?;
        }
        Ok(())
    }

    /// 多模块时以去除前缀后的小写表名作为模块名
    fn module_name(&self, table_info: &TableInfo) -> String {
        NamingStrategy::remove_prefix(table_info.name(), self.builder.strategy_config().table_prefix()).to_lowercase()
    }

    fn path(&self, output_file: OutputFile) -> Option<&str> {
        self.builder.path_info().get(&output_file).map(String::as_str).filter(|path| !path.is_empty())
    }

    fn file_path(dir: &str, name: &str, suffix: &str) -> String {
        format!("{}{}{}{}", dir, MAIN_SEPARATOR, name, suffix)
    }

    /// 输出自定义模板文件，位于 other 目录下的实体名称目录中
    fn output_custom_file(&self, table_info: &TableInfo, context: &Context) -> Result<()> {
        let custom_file = self.builder.injection_config().custom_file();
        if custom_file.is_empty() {
            return Ok(());
        }
        let other_path = self.path(OutputFile::Other).unwrap_or_default();
        for (file_name, template_path) in custom_file {
            let dir = format!("{}{}{}", other_path, MAIN_SEPARATOR, table_info.entity_name());
            self.output_file(&Self::file_path(&dir, file_name, ""), context, template_path)?;
        }
        Ok(())
    }

    fn output_entity(&self, table_info: &TableInfo, context: &Context) -> Result<()> {
        let kotlin = *self.builder.global_config().kotlin();
        let suffix = if kotlin { KT_SUFFIX } else { JAVA_SUFFIX };
        if let (Some(path), Some(template)) = (self.path(OutputFile::Entity), self.builder.template_config().entity(kotlin)) {
            if !table_info.entity_name().is_empty() {
                self.output_file(&Self::file_path(path, table_info.entity_name(), suffix), context, template)?;
            }
        }
        Ok(())
    }

    fn output_mapper(&self, table_info: &TableInfo, context: &Context) -> Result<()> {
        let template_config = self.builder.template_config();
        if let (Some(path), Some(template)) = (self.path(OutputFile::Mapper), template_config.mapper()) {
            self.output_file(&Self::file_path(path, table_info.mapper_name(), JAVA_SUFFIX), context, template)?;
        }
        if let (Some(path), Some(template)) = (self.path(OutputFile::Xml), template_config.xml()) {
            self.output_file(&Self::file_path(path, table_info.xml_name(), XML_SUFFIX), context, template)?;
        }
        Ok(())
    }

    fn output_service(&self, table_info: &TableInfo, context: &Context) -> Result<()> {
        let template_config = self.builder.template_config();
        if let (Some(path), Some(template)) = (self.path(OutputFile::Service), template_config.service()) {
            self.output_file(&Self::file_path(path, table_info.service_name(), JAVA_SUFFIX), context, template)?;
        }
        if let (Some(path), Some(template)) = (self.path(OutputFile::ServiceImpl), template_config.service_impl()) {
            self.output_file(&Self::file_path(path, table_info.service_impl_name(), JAVA_SUFFIX), context, template)?;
        }
        Ok(())
    }

    fn output_controller(&self, table_info: &TableInfo, context: &Context) -> Result<()> {
        if let (Some(path), Some(template)) = (self.path(OutputFile::Controller), self.builder.template_config().controller()) {
            self.output_file(&Self::file_path(path, table_info.controller_name(), JAVA_SUFFIX), context, template)?;
        }
        Ok(())
    }

    fn output_file(&self, file_path: &str, context: &Context, template_path: &str) -> Result<()> {
        if self.is_create(file_path)? {
            self.writer(context, template_path, file_path)?;
        }
        Ok(())
    }

    /// 检查文件是否创建文件，不存在时创建父目录
    fn is_create(&self, file_path: &str) -> Result<bool> {
        let path = Path::new(file_path);
        let exist = path.exists();
        if !exist {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
        } else if !*self.builder.global_config().file_override() {
            tracing::warn!("文件[{}]已存在，且未开启文件覆盖配置，需要开启配置可到策略配置中设置！！！", file_path);
        }
        Ok(!exist || *self.builder.global_config().file_override())
    }

    fn writer(&self, context: &Context, template_path: &str, output_file: &str) -> Result<()> {
        let template_name = self.template_name(template_path);
        let content = self.tera.render(&template_name, context)?;
        fs::write(output_file, content)?;
        tracing::debug!("模板:{};  文件:{}", template_path, output_file);
        Ok(())
    }

    /// 模板路径补全 `.tmpl` 后缀
    pub fn template_file_path(file_path: &str) -> String {
        if file_path.is_empty() || file_path.ends_with(Self::DOT_SK) {
            return file_path.to_string();
        }
        format!("{}{}", file_path, Self::DOT_SK)
    }

    /// 模板在引擎中的名称，取已加载模板中最长的匹配路径，如 `java/dto.java.tmpl`
    pub fn template_name(&self, template_path: &str) -> String {
        let file_path = Self::template_file_path(template_path).replace('\\', "/");
        let segments: Vec<&str> = file_path.split('/').filter(|segment| !segment.is_empty()).collect();
        let names: HashSet<&str> = self.tera.get_template_names().collect();
        (0..segments.len())
            .map(|start| segments[start..].join("/"))
            .find(|name| names.contains(name.as_str()))
            .unwrap_or(file_path)
    }

    /// 渲染对象 MAP 信息
    pub fn object_map(&self, table_info: &TableInfo) -> HashMap<String, Value> {
        let global_config = self.builder.global_config();
        let strategy_config = self.builder.strategy_config();
        let mut object_map = HashMap::new();
        object_map.extend(strategy_config.controller().render_data(table_info));
        object_map.extend(strategy_config.mapper().render_data(table_info));
        object_map.extend(strategy_config.service().render_data(table_info));
        object_map.extend(strategy_config.entity().render_data(table_info));

        let schema_name = match self.builder.data_source_config().schema_name() {
            Some(schema) if *strategy_config.enable_schema() && !schema.is_empty() => format!("{}.", schema),
            _ => String::new(),
        };
        object_map.insert("schemaName".to_string(), json!(schema_name));
        object_map.insert("package".to_string(), json!(self.builder.package_config().package_info()));
        object_map.insert("author".to_string(), json!(global_config.author()));
        object_map.insert("kotlin".to_string(), json!(global_config.kotlin()));
        object_map.insert("swagger".to_string(), json!(global_config.swagger()));
        object_map.insert("date".to_string(), json!(global_config.formatted_comment_date()));
        object_map.insert("table".to_string(), json!(table_info));
        object_map.insert("entity".to_string(), json!(table_info.entity_name()));
        object_map.insert("entityPath".to_string(), json!(table_info.entity_path()));
        object_map.insert("cfg".to_string(), json!(self.builder.injection_config().custom_map()));
        object_map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::converts::KeyWordsHandler;
    use crate::config::{DataSourceConfig, GlobalConfig, InjectionConfig};
    use crate::query::{ColumnMeta, SchemaSnapshot, TableMeta};

    fn new_engine(global_config: GlobalConfig, injection_config: Option<InjectionConfig>) -> TemplateEngine {
        let snapshot = SchemaSnapshot::new().table(
            TableMeta::new("user", "用户"),
            vec![ColumnMeta::new("id", "bigint(20)").primary_key(), ColumnMeta::new("name", "varchar(32)").with_comment("姓名")],
        );
        let builder = ConfigBuilder::new(
            None,
            DataSourceConfig::from_snapshot(snapshot),
            None,
            None,
            Some(global_config),
            injection_config,
        );
        TemplateEngine::init(builder).unwrap()
    }

    #[test]
    fn test_template_name() {
        assert_eq!(TemplateEngine::template_file_path("/templates/entity.java"), "/templates/entity.java.tmpl");
        assert_eq!(TemplateEngine::template_file_path("a.tmpl"), "a.tmpl");
        let engine = new_engine(GlobalConfig::default(), None);
        assert_eq!(engine.template_name("/templates/mapper.xml"), "mapper.xml.tmpl");
        assert_eq!(engine.template_name("/templates/missing.java"), "/templates/missing.java.tmpl");
    }

    #[test]
    fn test_nested_custom_templates() {
        let dir = tempfile::tempdir().unwrap();
        let template_dir = dir.path().join("templates");
        fs::create_dir_all(template_dir.join("java")).unwrap();
        fs::create_dir_all(template_dir.join("kt")).unwrap();
        fs::write(template_dir.join("java").join("dto.java.tmpl"), "java {{ entity }}").unwrap();
        fs::write(template_dir.join("kt").join("dto.java.tmpl"), "kt {{ entity }}").unwrap();

        let output = dir.path().join("out");
        let global_config = GlobalConfig::builder()
            .output_dir(output.to_string_lossy())
            .template_dir(template_dir.to_string_lossy())
            .disable_open_dir()
            .build();
        let injection_config = InjectionConfig::builder()
            .custom_file("UserDTO.java", "/templates/java/dto.java")
            .custom_file("UserDTO.kt", "/templates/kt/dto.java")
            .build();
        let mut engine = new_engine(global_config, Some(injection_config));
        assert_eq!(engine.template_name("/templates/java/dto.java"), "java/dto.java.tmpl");
        assert_eq!(engine.template_name("/templates/entity.java"), "entity.java.tmpl");
        engine.batch_output().unwrap();

        let other = output.join("com").join("baomidou").join("other").join("User");
        assert_eq!(fs::read_to_string(other.join("UserDTO.java")).unwrap(), "java User");
        assert_eq!(fs::read_to_string(other.join("UserDTO.kt")).unwrap(), "kt User");
    }

    #[test]
    fn test_key_words_column_annotation() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = SchemaSnapshot::new().table(
            TableMeta::new("user", "用户"),
            vec![ColumnMeta::new("id", "bigint(20)").primary_key(), ColumnMeta::new("desc", "varchar(255)")],
        );
        let builder = ConfigBuilder::new(
            None,
            DataSourceConfig::builder("", "", "").key_words_handler(KeyWordsHandler::MySql).snapshot(snapshot).build(),
            None,
            None,
            Some(GlobalConfig::builder().output_dir(dir.path().to_string_lossy()).disable_open_dir().build()),
            None,
        );
        let mut engine = TemplateEngine::init(builder).unwrap();
        engine.batch_output().unwrap();

        let entity = fs::read_to_string(dir.path().join("com").join("baomidou").join("entity").join("User.java")).unwrap();
        assert!(entity.contains("@TableField(\"`desc`\")"));
        assert!(entity.contains("private String desc;"));
    }

    #[test]
    fn test_object_map() {
        let mut engine = new_engine(GlobalConfig::builder().author("snack").build(), None);
        let table = engine.builder_mut().table_info_list().unwrap()[0].clone();
        let object_map = engine.object_map(&table);
        assert_eq!(object_map["author"], "snack");
        assert_eq!(object_map["entity"], "User");
        assert_eq!(object_map["package"]["Mapper"], "com.baomidou.mapper");
        assert_eq!(object_map["superMapperClass"], "BaseMapper");
        assert_eq!(object_map["table"]["mapperName"], "UserMapper");
        assert_eq!(object_map["schemaName"], "");
    }

    #[test]
    fn test_batch_output() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().to_string_lossy().to_string();
        let global_config = GlobalConfig::builder().output_dir(&output_dir).disable_open_dir().build();
        let injection_config = InjectionConfig::builder()
            .before_output_file(|_, map| {
                map.insert("author".to_string(), json!("hook"));
            })
            .build();
        let mut engine = new_engine(global_config, Some(injection_config));
        engine.mkdirs().unwrap();
        engine.batch_output().unwrap();

        let base = dir.path().join("com").join("baomidou");
        let entity = fs::read_to_string(base.join("entity").join("User.java")).unwrap();
        assert!(entity.contains("package com.baomidou.entity;"));
        assert!(entity.contains("public class User implements Serializable {"));
        assert!(entity.contains("private Long id;"));
        assert!(entity.contains("@author hook"));
        let mapper = fs::read_to_string(base.join("mapper").join("UserMapper.java")).unwrap();
        assert!(mapper.contains("public interface UserMapper extends BaseMapper<User>"));
        assert!(base.join("mapper").join("xml").join("UserXml.xml").exists());
        assert!(base.join("service").join("IUserService.java").exists());
        assert!(base.join("service").join("impl").join("UserServiceImpl.java").exists());
        assert!(base.join("controller").join("UserController.java").exists());
    }

    #[test]
    fn test_file_override() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().to_string_lossy().to_string();
        let entity_file = dir.path().join("com").join("baomidou").join("entity").join("User.java");
        fs::create_dir_all(entity_file.parent().unwrap()).unwrap();
        fs::write(&entity_file, "keep").unwrap();

        let mut engine = new_engine(GlobalConfig::builder().output_dir(&output_dir).disable_open_dir().build(), None);
        engine.batch_output().unwrap();
        assert_eq!(fs::read_to_string(&entity_file).unwrap(), "keep");

        let global_config = GlobalConfig::builder().output_dir(&output_dir).disable_open_dir().enable_file_override().build();
        let mut engine = new_engine(global_config, None);
        engine.batch_output().unwrap();
        assert_ne!(fs::read_to_string(&entity_file).unwrap(), "keep");
    }

    #[test]
    fn test_missing_custom_template() {
        let dir = tempfile::tempdir().unwrap();
        let global_config = GlobalConfig::builder().output_dir(dir.path().to_string_lossy()).disable_open_dir().build();
        let injection_config = InjectionConfig::builder().custom_file("DTO.java", "/templates/dto.java").build();
        let mut engine = new_engine(global_config, Some(injection_config));
        assert!(engine.batch_output().is_err());
    }
}
