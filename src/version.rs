// Version information for the Prompt2Pixel service

/// Full version string with feature description
pub const VERSION: &str = "v1.2.0-reference-images-2025-10-13";

/// Semantic version number
pub const VERSION_NUMBER: &str = "1.2.0";

/// Build date
pub const BUILD_DATE: &str = "2025-10-13";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "thumbnail-generation",
    "chat-assistant",
    "scope-classification",
    "creation-intent-detection",
    "query-rewrite",
    "prompt-enhancement",
    "reference-images",
    "remote-reference-fetch",
    "session-auth",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Prompt2Pixel {} ({})", VERSION_NUMBER, BUILD_DATE)
}

/// Get full version info for API responses
pub fn get_version_info() -> serde_json::Value {
    serde_json::json!({
        "version": VERSION_NUMBER,
        "build": VERSION,
        "date": BUILD_DATE,
        "features": FEATURES,
    })
}
