// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod providers;
pub mod thumbnail;
pub mod version;
