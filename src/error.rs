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
//! Generator Errors.
//!
use std::{fmt, io};

#[derive(Debug)]
pub enum GeneratorError {
    Io(io::Error),
    YamlError(String),
    JsonError(String),
    TemplateError(String),
    RegexError(String),
    DatabaseError(String),
    PromptError(String),
    InvalidConfig(String),
    UnsupportedDataSource(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

impl GeneratorError {
    pub fn invalid_config<T: Into<String>>(msg: T) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GeneratorError::Io(err) => write!(f, "IO error: {}", err),
            GeneratorError::YamlError(err) => write!(f, "Yaml error: {}", err),
            GeneratorError::JsonError(err) => write!(f, "Json error: {}", err),
            GeneratorError::TemplateError(err) => write!(f, "Template error: {}", err),
            GeneratorError::RegexError(err) => write!(f, "Regex error: {}", err),
            GeneratorError::DatabaseError(err) => write!(f, "Database error: {}", err),
            GeneratorError::PromptError(err) => write!(f, "Prompt error: {}", err),
            GeneratorError::InvalidConfig(err) => write!(f, "Invalid config: {}", err),
            GeneratorError::UnsupportedDataSource(err) => write!(f, "Unsupported datasource: {}", err),
        }
    }
}

impl std::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeneratorError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for GeneratorError {
    fn from(err: io::Error) -> Self {
        GeneratorError::Io(err)
    }
}

impl From<serde_yaml::Error> for GeneratorError {
    fn from(err: serde_yaml::Error) -> Self {
        GeneratorError::YamlError(err.to_string())
    }
}

impl From<serde_json::Error> for GeneratorError {
    fn from(err: serde_json::Error) -> Self {
        GeneratorError::JsonError(err.to_string())
    }
}

impl From<regex::Error> for GeneratorError {
    fn from(err: regex::Error) -> Self {
        GeneratorError::RegexError(err.to_string())
    }
}

impl From<tera::Error> for GeneratorError {
    fn from(err: tera::Error) -> Self {
        // tera keeps the useful part of the message in the source chain
        let mut msg = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            msg.push_str(": ");
            msg.push_str(&cause.to_string());
            source = std::error::Error::source(cause);
        }
        GeneratorError::TemplateError(msg)
    }
}

impl From<dialoguer::Error> for GeneratorError {
    fn from(err: dialoguer::Error) -> Self {
        GeneratorError::PromptError(err.to_string())
    }
}

#[cfg(feature = "mysql-sync")]
impl From<mysql::Error> for GeneratorError {
    fn from(err: mysql::Error) -> Self {
        GeneratorError::DatabaseError(err.to_string())
    }
}

#[cfg(feature = "mysql-sync")]
impl From<mysql::UrlError> for GeneratorError {
    fn from(err: mysql::UrlError) -> Self {
        GeneratorError::DatabaseError(err.to_string())
    }
}
