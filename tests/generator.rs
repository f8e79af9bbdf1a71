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

use std::fs;
use std::path::{Path, PathBuf};

use mybatis_plus_generator::prelude::*;

const SCHEMA: &str = r#"
tables:
  - name: t_user
    comment: 用户表
    columns:
      - { name: id, type: bigint(20), key: PRI, extra: auto_increment, comment: 主键 }
      - { name: user_name, type: varchar(64), comment: 用户名 }
      - { name: create_time, type: datetime, comment: 创建时间 }
  - name: t_role
    comment: 角色表
    columns:
      - { name: id, type: int(11), key: PRI }
      - { name: role_name, type: varchar(32) }
  - name: v_user_role
    comment: VIEW
    is_view: true
    columns:
      - { name: user_id, type: bigint(20) }
"#;

fn java_file(root: &Path, package: &str, name: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    for segment in package.split('.') {
        path.push(segment);
    }
    path.push(name);
    path
}

fn snapshot() -> SchemaSnapshot {
    SchemaSnapshot::new()
        .table(
            TableMeta::new("t_user", "用户表"),
            vec![
                ColumnMeta::new("id", "bigint(20)").primary_key().auto_increment(),
                ColumnMeta::new("user_name", "varchar(64)").with_comment("用户名"),
            ],
        )
        .table(TableMeta::new("t_role", "角色表"), vec![ColumnMeta::new("id", "int(11)").primary_key()])
}

#[test]
fn generate_from_yaml_config() {
    let dir = tempfile::tempdir().unwrap();
    let schema_path = dir.path().join("schema.yaml");
    fs::write(&schema_path, SCHEMA).unwrap();
    let output = dir.path().join("output");
    let config = format!(
        r#"
datasource:
  url: "snapshot:{}"
global:
  output_dir: "{}"
  open: false
  author: snack
package:
  parent: com.example
  module_name: sys
strategy:
  skip_view: true
  table_prefix: ["t_"]
  entity:
    naming: UnderlineToCamel
    lombok: true
  controller:
    rest_style: true
"#,
        schema_path.display(),
        output.display()
    );
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, config).unwrap();

    let generator = AutoGenerator::load_or_create_config(config_path.to_str().unwrap()).unwrap();
    generator.execute().unwrap();

    let entity = fs::read_to_string(java_file(&output, "com.example.sys.entity", "User.java")).unwrap();
    assert!(entity.contains("package com.example.sys.entity;"));
    assert!(entity.contains("@TableName(\"t_user\")"));
    assert!(entity.contains("public class User implements Serializable {"));
    assert!(entity.contains("private String userName;"));
    assert!(entity.contains("@author snack"));

    let mapper = fs::read_to_string(java_file(&output, "com.example.sys.mapper", "UserMapper.java")).unwrap();
    assert!(mapper.contains("public interface UserMapper extends BaseMapper<User> {"));
    let xml = fs::read_to_string(java_file(&output, "com.example.sys.mapper.xml", "UserXml.xml")).unwrap();
    assert!(xml.contains("<mapper namespace=\"com.example.sys.mapper.UserMapper\">"));

    assert!(java_file(&output, "com.example.sys.service", "IRoleService.java").exists());
    assert!(java_file(&output, "com.example.sys.service.impl", "RoleServiceImpl.java").exists());
    let controller = fs::read_to_string(java_file(&output, "com.example.sys.controller", "RoleController.java")).unwrap();
    assert!(controller.contains("@RestController"));
    // 视图被跳过
    assert!(!java_file(&output, "com.example.sys.entity", "VUserRole.java").exists());
    assert!(!java_file(&output, "com.example.sys.entity", "V_user_role.java").exists());
}

#[test]
fn generate_multi_module() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().to_str().unwrap().to_string();
    AutoGenerator::new(DataSourceConfig::from_snapshot(snapshot()))
        .with_global(GlobalConfig::builder().output_dir(output.as_str()).disable_open_dir().build())
        .with_package(PackageConfig::builder().parent("com.example").module_name("*").build())
        .with_strategy(
            StrategyConfig::builder()
                .add_table_prefix(vec!["t_"])
                .entity_builder()
                .naming(NamingStrategy::UnderlineToCamel)
                .build(),
        )
        .execute()
        .unwrap();

    assert!(java_file(dir.path(), "com.example.user.entity", "User.java").exists());
    assert!(java_file(dir.path(), "com.example.user.mapper", "UserMapper.java").exists());
    assert!(java_file(dir.path(), "com.example.role.entity", "Role.java").exists());
    assert!(java_file(dir.path(), "com.example.role.controller", "RoleController.java").exists());
    assert!(!java_file(dir.path(), "com.example.role.entity", "User.java").exists());
}

#[test]
fn generate_with_injection_and_disabled_templates() {
    let dir = tempfile::tempdir().unwrap();
    let template_dir = dir.path().join("templates");
    fs::create_dir_all(&template_dir).unwrap();
    fs::write(template_dir.join("dto.java.tmpl"), "public class {{ entity }}DTO { // {{ table.name }} {{ owner }}\n}\n").unwrap();
    let output = dir.path().join("output");

    let mut template = TemplateConfig::default();
    template.disable(&[TemplateType::Controller, TemplateType::Xml]);
    let injection = InjectionConfig::builder()
        .before_output_file(|table, map| {
            map.insert("owner".to_string(), serde_json::json!(format!("owner of {}", table.entity_name())));
        })
        .custom_file("UserDTO.java", "/templates/dto.java")
        .build();

    AutoGenerator::new(DataSourceConfig::from_snapshot(snapshot()))
        .with_global(
            GlobalConfig::builder()
                .output_dir(output.to_str().unwrap())
                .template_dir(template_dir.to_str().unwrap())
                .disable_open_dir()
                .build(),
        )
        .with_strategy(StrategyConfig::builder().add_include(vec!["t_user"]).add_table_prefix(vec!["t_"]).build())
        .with_template(template)
        .with_injection(injection)
        .execute()
        .unwrap();

    let dto = fs::read_to_string(java_file(&output, "com.baomidou.other.User", "UserDTO.java")).unwrap();
    assert!(dto.contains("public class UserDTO { // t_user owner of User"));
    assert!(java_file(&output, "com.baomidou.entity", "User.java").exists());
    assert!(!java_file(&output, "com.baomidou.controller", "UserController.java").exists());
    assert!(!java_file(&output, "com.baomidou.mapper.xml", "UserXml.xml").exists());
    assert!(!java_file(&output, "com.baomidou.entity", "Role.java").exists());
}

#[test]
fn execute_rejects_invalid_configuration() {
    let result = AutoGenerator::new(DataSourceConfig::default()).execute();
    assert!(matches!(result, Err(GeneratorError::InvalidConfig(_))));

    let dir = tempfile::tempdir().unwrap();
    let result = AutoGenerator::new(DataSourceConfig::new("jdbc:oracle:thin:@localhost:1521:orcl", "", ""))
        .with_global(GlobalConfig::builder().output_dir(dir.path().to_str().unwrap()).disable_open_dir().build())
        .execute();
    assert!(matches!(result, Err(GeneratorError::UnsupportedDataSource(_))));
}
