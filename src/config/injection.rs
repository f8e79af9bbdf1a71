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

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::po::TableInfo;

/// 输出文件前的回调，可修改渲染参数
pub type BeforeOutputFile = Arc<dyn Fn(&TableInfo, &mut HashMap<String, serde_json::Value>) + Send + Sync>;

/// 注入配置
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InjectionConfig {
    /// 输出文件之前消费者
    #[serde(skip)]
    before_output_file: Option<BeforeOutputFile>,
    /// 自定义配置 Map 对象，模板中以 `cfg` 访问
    custom_map: BTreeMap<String, serde_json::Value>,
    /// 自定义模板文件，key 为文件名称，value 为模板路径
    custom_file: BTreeMap<String, String>,
}

impl fmt::Debug for InjectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InjectionConfig")
            .field("before_output_file", &self.before_output_file.as_ref().map(|_| ".."))
            .field("custom_map", &self.custom_map)
            .field("custom_file", &self.custom_file)
            .finish()
    }
}

impl InjectionConfig {
    pub fn builder() -> InjectionConfigBuilder {
        InjectionConfigBuilder::default()
    }

    pub fn custom_map(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.custom_map
    }

    pub fn custom_file(&self) -> &BTreeMap<String, String> {
        &self.custom_file
    }

    /// 执行输出前回调
    pub fn before_output_file(&self, table_info: &TableInfo, object_map: &mut HashMap<String, serde_json::Value>) {
        if let Some(consumer) = &self.before_output_file {
            consumer(table_info, object_map);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InjectionConfigBuilder {
    config: InjectionConfig,
}

impl InjectionConfigBuilder {
    pub fn before_output_file<F>(mut self, consumer: F) -> Self
    where
        F: Fn(&TableInfo, &mut HashMap<String, serde_json::Value>) + Send + Sync + 'static,
    {
        self.config.before_output_file = Some(Arc::new(consumer));
        self
    }

    pub fn custom_map(mut self, custom_map: BTreeMap<String, serde_json::Value>) -> Self {
        self.config.custom_map = custom_map;
        self
    }

    pub fn custom_file<S: Into<String>>(mut self, file_name: S, template_path: S) -> Self {
        self.config.custom_file.insert(file_name.into(), template_path.into());
        self
    }

    pub fn build(self) -> InjectionConfig {
        self.config
    }
}

#[test]
fn test_before_output_file() {
    let config = InjectionConfig::builder()
        .before_output_file(|table, map| {
            map.insert("tableName".to_string(), serde_json::Value::String(table.name().to_string()));
        })
        .custom_file("DTO.java", "/templates/dto.java")
        .build();
    let mut map = HashMap::new();
    let mut table = TableInfo::default();
    table.set_name("t_user".to_string());
    config.before_output_file(&table, &mut map);
    assert_eq!(map["tableName"], "t_user");
    assert_eq!(config.custom_file()["DTO.java"], "/templates/dto.java");
}
