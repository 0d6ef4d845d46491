// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use clap::Parser;
use prompt2pixel::{
    api::{start_server, AppState},
    auth::JwtSessionVerifier,
    cli::Cli,
    config::AppConfig,
    providers::{GeminiClient, OpenAiClient},
    thumbnail::{QueryRewriter, ReferenceResolver, RequestClassifier},
};
use std::{env, sync::Arc};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();
    tracing::info!("{}", prompt2pixel::version::get_version_string());

    println!("🚀 Starting Prompt2Pixel...\n");
    println!("📦 BUILD VERSION: {}", prompt2pixel::version::VERSION);
    println!("📅 Build Date: {}", prompt2pixel::version::BUILD_DATE);
    println!();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env();
    cli.apply(&mut config);
    config
        .validate()
        .map_err(|e| anyhow!("Invalid configuration: {}", e))?;

    let timeout = config.provider_timeout();

    println!("🎨 Initializing providers...");
    let gemini = Arc::new(GeminiClient::new(
        &config.gemini.base_url,
        config.gemini.api_key.clone(),
        &config.gemini.image_model,
        &config.gemini.chat_model,
        timeout,
    )?);
    let openai = Arc::new(OpenAiClient::new(
        &config.openai.base_url,
        config.openai.api_key.clone(),
        &config.openai.rewrite_model,
        timeout,
    )?);
    if config.gemini.api_key.is_none() {
        println!("⚠️  GEMINI_API_KEY not set - image generation and chat replies will fail");
    }
    if config.openai.api_key.is_none() {
        println!("⚠️  OPENAI_API_KEY not set - prompts will be used without rewriting");
    }

    let pem = config
        .auth
        .jwt_public_key
        .as_deref()
        .ok_or_else(|| anyhow!("AUTH_JWT_PUBLIC_KEY must be set"))?;
    let verifier = JwtSessionVerifier::from_rsa_pem(pem, config.auth.authorized_parties.clone())?;
    println!("🔐 Session verification enabled (RS256)");

    let state = AppState {
        image_generator: gemini.clone(),
        assistant: gemini,
        rewriter: QueryRewriter::new(openai),
        session_verifier: Arc::new(verifier),
        classifier: Arc::new(RequestClassifier::new()?),
        references: ReferenceResolver::new(timeout, config.max_reference_image_bytes)?,
        cors_allowed_origins: config.cors_allowed_origins.clone(),
        max_body_bytes: config.max_body_bytes,
    };

    let separator = "=".repeat(60);
    println!("\n{}", separator);
    println!("🎉 Prompt2Pixel is running!");
    println!("{}", separator);
    println!("Listen:         http://{}", config.listen_addr());
    println!("Image model:    {}", config.gemini.image_model);
    println!("Chat model:     {}", config.gemini.chat_model);
    println!("Rewrite model:  {}", config.openai.rewrite_model);
    println!("\nAPI Endpoints:");
    println!("  Health:       http://localhost:{}/health", config.port);
    println!("  Chat:         POST http://localhost:{}/api/chat", config.port);
    println!(
        "  Thumbnail:    POST http://localhost:{}/api/generate-thumbnail",
        config.port
    );
    println!("\nPress Ctrl+C to shutdown...");
    println!("{}\n", separator);

    start_server(&config, state).await?;

    println!("👋 Goodbye!");
    Ok(())
}
