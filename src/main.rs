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

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mybatis_plus_generator::{prompt_for_config_path_or_default, AutoGenerator};

#[derive(Parser, Debug)]
#[command(author = "潘安", version = "0.6.1", about = "MyBatis-Plus Code Generator CLI Tool")]
struct Args {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    print_copyright();
    // Parse command-line arguments
    let args = Args::parse();

    // 获取配置文件路径
    let config_path = match args.config {
        Some(path) => path,
        None => prompt_for_config_path_or_default(
            "Please enter the configuration file path (press Enter to use default 'config.yaml')\n: ",
            "config.yaml",
        )?,
    };

    // Load or create configuration
    AutoGenerator::load_or_create_config(&config_path)?.execute()?;
    tracing::info!("AutoGenerator executed successfully");
    Ok(())
}

/// 日志级别由 `RUST_LOG` 控制，默认 info
fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn print_copyright() {
    eprintln!(
        r#"
  __  __ ____        ____                           _
 |  \/  |  _ \      / ___| ___ _ __   ___ _ __ __ _| |_ ___  _ __
 | |\/| | |_) |____| |  _ / _ \ '_ \ / _ \ '__/ _` | __/ _ \| '__|
 | |  | |  __/_____| |_| |  __/ | | |  __/ | | (_| | || (_) | |
 |_|  |_|_|         \____|\___|_| |_|\___|_|  \__,_|\__\___/|_|
 MyBatis-Plus - Code Generator

 Author  : 潘安
 Version : 0.6.1
 License : MIT
  "#
    );
}
