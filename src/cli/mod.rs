// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use clap::Parser;

use crate::config::AppConfig;

/// Prompt2Pixel thumbnail service
#[derive(Parser, Debug, Default)]
#[command(name = "prompt2pixel")]
#[command(version = crate::version::VERSION_NUMBER)]
#[command(about = "AI thumbnail generation and chat service", long_about = None)]
pub struct Cli {
    /// Listen host (overrides API_HOST)
    #[arg(long, env = "API_HOST")]
    pub host: Option<String>,

    /// Listen port (overrides API_PORT)
    #[arg(long, env = "API_PORT")]
    pub port: Option<u16>,

    /// Upstream provider timeout in seconds (overrides PROVIDER_TIMEOUT_SECS)
    #[arg(long, env = "PROVIDER_TIMEOUT_SECS")]
    pub provider_timeout_secs: Option<u64>,
}

impl Cli {
    /// Apply command-line overrides on top of the environment config
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(timeout) = self.provider_timeout_secs {
            config.provider_timeout_secs = timeout;
        }
    }
}
