//! Memo Pad Desktop Application
//!
//! A small memo client that talks to the memo service and keeps working
//! offline when the service is unreachable.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod services;
mod state;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use memo_core::backend::Backends;
use memo_core::config::ClientConfig;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("memo=debug".parse().expect("valid directive")),
        )
        .init();

    tracing::info!("Starting Memo Pad...");

    let backends = match ClientConfig::from_env().and_then(|config| {
        tracing::info!(
            "Memo service: {}, offline store: {}",
            config.api_base_url,
            config.storage_path.display()
        );
        Backends::from_config(&config)
    }) {
        Ok(backends) => backends,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Memo Pad")
            .with_inner_size(LogicalSize::new(900.0, 800.0)),
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .with_context(backends)
        .launch(app::App);
}
