// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat API endpoint module
//!
//! Provides POST /api/chat: scope gate, thumbnail creation, or a
//! conversational reply.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::chat_handler;
pub use request::{ChatMessage, ChatRequest};
pub use response::ChatResponse;
