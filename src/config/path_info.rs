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

use std::collections::HashMap;
use std::path::MAIN_SEPARATOR;

use crate::config::{GlobalConfig, OutputFile, PackageConfig, TemplateConfig};
use crate::constant::{CONTROLLER, ENTITY, MAPPER, OTHER, PARENT, SERVICE, SERVICE_IMPL, XML};

/// 输出路径处理，根据包配置推导各类文件的输出目录
pub struct PathInfoHandler<'a> {
    path_info: HashMap<OutputFile, String>,
    output_dir: &'a str,
    package_config: &'a PackageConfig,
}

impl<'a> PathInfoHandler<'a> {
    pub fn new(global_config: &'a GlobalConfig, template_config: &TemplateConfig, package_config: &'a PackageConfig) -> Self {
        let mut handler = Self {
            path_info: HashMap::new(),
            output_dir: global_config.output_dir(),
            package_config,
        };
        // 自定义路径优先
        handler.path_info.extend(package_config.path_info().iter().map(|(k, v)| (*k, v.clone())));
        handler.set_default_path_info(global_config, template_config);
        handler
    }

    fn set_default_path_info(&mut self, global_config: &GlobalConfig, template_config: &TemplateConfig) {
        self.put_template_path(template_config.entity(*global_config.kotlin()), OutputFile::Entity, ENTITY);
        self.put_template_path(template_config.mapper(), OutputFile::Mapper, MAPPER);
        self.put_template_path(template_config.xml(), OutputFile::Xml, XML);
        self.put_template_path(template_config.service(), OutputFile::Service, SERVICE);
        self.put_template_path(template_config.service_impl(), OutputFile::ServiceImpl, SERVICE_IMPL);
        self.put_template_path(template_config.controller(), OutputFile::Controller, CONTROLLER);
        self.put_path_info(OutputFile::Parent, PARENT);
        self.put_path_info(OutputFile::Other, OTHER);
    }

    fn put_template_path(&mut self, template: Option<&str>, output_file: OutputFile, module: &str) {
        if template.is_some() {
            self.put_path_info(output_file, module);
        }
    }

    fn put_path_info(&mut self, output_file: OutputFile, module: &str) {
        if !self.path_info.contains_key(&output_file) {
            let path = Self::join_path(self.output_dir, &self.package_config.package_info_of(module));
            self.path_info.insert(output_file, path);
        }
    }

    /// 连接路径字符串
    ///
    /// * `parent_dir` - 路径常量字符串，为空时使用系统临时目录
    /// * `package_name` - 包名，`.` 替换为路径分隔符
    pub fn join_path(parent_dir: &str, package_name: &str) -> String {
        let mut parent_dir = if parent_dir.trim().is_empty() {
            std::env::temp_dir().to_string_lossy().to_string()
        } else {
            parent_dir.to_string()
        };
        if !parent_dir.ends_with('/') && !parent_dir.ends_with(MAIN_SEPARATOR) {
            parent_dir.push(MAIN_SEPARATOR);
        }
        let package_path = package_name.replace('.', &MAIN_SEPARATOR.to_string());
        format!("{}{}", parent_dir, package_path)
    }

    pub fn path_info(&self) -> &HashMap<OutputFile, String> {
        &self.path_info
    }

    pub fn into_path_info(self) -> HashMap<OutputFile, String> {
        self.path_info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TemplateType;

    fn sep(path: &str) -> String {
        path.replace('/', &MAIN_SEPARATOR.to_string())
    }

    #[test]
    fn test_join_path() {
        assert_eq!(PathInfoHandler::join_path("/out", "com.baomidou.entity"), sep("/out/com/baomidou/entity"));
        assert_eq!(PathInfoHandler::join_path("/out/", "mapper"), sep("/out/mapper"));
        assert!(PathInfoHandler::join_path("", "mapper").ends_with("mapper"));
    }

    #[test]
    fn test_default_path_info() {
        let global = GlobalConfig::builder().output_dir("/out").build();
        let package = PackageConfig::builder().parent("com.snack").build();
        let template = TemplateConfig::builder().disable(&[TemplateType::Controller]).build();
        let handler = PathInfoHandler::new(&global, &template, &package);
        let path_info = handler.path_info();
        assert_eq!(path_info[&OutputFile::Entity], sep("/out/com/snack/entity"));
        assert_eq!(path_info[&OutputFile::Xml], sep("/out/com/snack/mapper/xml"));
        assert_eq!(path_info[&OutputFile::ServiceImpl], sep("/out/com/snack/service/impl"));
        assert_eq!(path_info[&OutputFile::Parent], sep("/out/com/snack"));
        assert!(!path_info.contains_key(&OutputFile::Controller));
    }

    #[test]
    fn test_custom_path_info() {
        let global = GlobalConfig::builder().output_dir("/out").build();
        let mut custom = HashMap::new();
        custom.insert(OutputFile::Xml, "/resources/mapper".to_string());
        let package = PackageConfig::builder().path_info(custom).build();
        let handler = PathInfoHandler::new(&global, &TemplateConfig::default(), &package);
        assert_eq!(handler.path_info()[&OutputFile::Xml], "/resources/mapper");
        assert_eq!(handler.path_info()[&OutputFile::Mapper], sep("/out/com/baomidou/mapper"));
    }
}
