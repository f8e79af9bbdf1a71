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

use once_cell::sync::Lazy;
use regex::Regex;

/// 大写数字下划线命名
static CAPITAL_MODE: Lazy<Regex> = Lazy::new(|| Regex::new("^[0-9A-Z/_]+$").expect("capital mode pattern"));

/// 是否为大写命名
///
/// 大写字母、数字、`/` 及下划线组成的单词
pub fn is_capital_mode(word: &str) -> bool {
    !word.is_empty() && CAPITAL_MODE.is_match(word)
}

/// 是否为驼峰下划线混合命名
pub fn is_mixed_mode(word: &str) -> bool {
    contains_upper_case(word) && word.contains(|c: char| c == '/' || c == '_')
}

/// 包含大写字母
pub fn contains_upper_case(word: &str) -> bool {
    word.chars().any(char::is_uppercase)
}

/// 首字母大写
pub fn capital_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 首字母小写
pub fn first_to_lower_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 去掉 boolean 属性的 is 前缀，`isDeleted` -> `deleted`
pub fn remove_is_prefix(name: &str) -> String {
    match name.strip_prefix("is") {
        Some(rest) if rest.chars().next().map_or(false, char::is_uppercase) => first_to_lower_case(rest),
        _ => name.to_string(),
    }
}

/// 驼峰转连字符，`sysUser` -> `sys-user`
pub fn camel_to_hyphen(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i != 0 {
                result.push('-');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// 取全限定类名的简单类名
pub fn simple_class_name(class_name: &str) -> String {
    match class_name.rfind('.') {
        Some(pos) => class_name[pos + 1..].to_string(),
        None => class_name.to_string(),
    }
}
