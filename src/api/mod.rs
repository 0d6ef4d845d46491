// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod auth;
pub mod chat;
pub mod errors;
pub mod generate_thumbnail;
pub mod http_server;

pub use auth::AuthenticatedUser;
pub use chat::{ChatMessage, ChatRequest, ChatResponse};
pub use errors::{ApiError, ErrorResponse};
pub use generate_thumbnail::{GenerateThumbnailRequest, GenerateThumbnailResponse};
pub use http_server::{create_app, start_server, AppState};
