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

pub const TEMPLATE_ENTITY_JAVA: &str = "/templates/entity.java";
pub const TEMPLATE_ENTITY_KT: &str = "/templates/entity.kt";
pub const TEMPLATE_MAPPER: &str = "/templates/mapper.java";
pub const TEMPLATE_XML: &str = "/templates/mapper.xml";
pub const TEMPLATE_SERVICE: &str = "/templates/service.java";
pub const TEMPLATE_SERVICE_IMPL: &str = "/templates/serviceImpl.java";
pub const TEMPLATE_CONTROLLER: &str = "/templates/controller.java";

/// 包信息 key
pub const MODULE_NAME: &str = "ModuleName";
pub const ENTITY: &str = "Entity";
pub const SERVICE: &str = "Service";
pub const SERVICE_IMPL: &str = "ServiceImpl";
pub const MAPPER: &str = "Mapper";
pub const XML: &str = "Xml";
pub const CONTROLLER: &str = "Controller";
pub const PARENT: &str = "Parent";
pub const OTHER: &str = "Other";

pub const DOT: &str = ".";
pub const STAR: &str = "*";
pub const UNDERLINE: &str = "_";
pub const COMMA: &str = ",";
pub const PLACE_HOLDER: &str = "%s";

pub const JAVA_SUFFIX: &str = ".java";
pub const KT_SUFFIX: &str = ".kt";
pub const XML_SUFFIX: &str = ".xml";

/// 主键默认属性名
pub const DEFAULT_ID_NAME: &str = "id";

pub const SUPER_MAPPER_CLASS: &str = "com.baomidou.mybatisplus.core.mapper.BaseMapper";
pub const SUPER_SERVICE_CLASS: &str = "com.baomidou.mybatisplus.extension.service.IService";
pub const SUPER_SERVICE_IMPL_CLASS: &str = "com.baomidou.mybatisplus.extension.service.impl.ServiceImpl";
pub const ACTIVE_RECORD_MODEL: &str = "com.baomidou.mybatisplus.extension.activerecord.Model";
pub const SERIALIZABLE: &str = "java.io.Serializable";
pub const ANNOTATION_PACKAGE: &str = "com.baomidou.mybatisplus.annotation";
