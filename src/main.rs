//! Hookline demo: runs a `save` and a `validate` action on a document.
//!
//! Wires one registry and trigger from configuration, registers a few
//! hooks, and prints the resulting payload.

mod document;

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use hookline_core::config::AppConfig;
use hookline_core::error::AppError;
use hookline_hooks::{HookRegistry, HookTrigger, hook_fn, work_fn};

use crate::document::{Document, DocumentChanges};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("HOOKLINE_CONFIG").unwrap_or_else(|_| "config/hookline".to_string());

    AppConfig::load(&config_path)
        .map_err(|e| AppError::internal(format!("Config load error: {}", e)))
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Register demo hooks and run both actions
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        validation_action = %config.hooks.validation_action,
        after_phase = ?config.hooks.after_phase,
        "Starting Hookline demo v{}",
        env!("CARGO_PKG_VERSION")
    );

    let registry = Arc::new(HookRegistry::<Document, DocumentChanges>::new());

    registry
        .register_before(
            "save",
            hook_fn("stamp_revision", |doc: &Document, changes: &mut DocumentChanges| {
                Box::pin(async move {
                    changes
                        .fields
                        .insert("revision_of".to_string(), serde_json::json!(doc.id));
                    changes.audit.push("stamp_revision".to_string());
                    Ok(())
                })
            }),
        )
        .await;

    registry
        .register_after(
            "save",
            hook_fn("audit_save", |doc: &Document, changes: &mut DocumentChanges| {
                Box::pin(async move {
                    tracing::info!(document_id = %doc.id, "Document saved");
                    changes.audit.push("audit_save".to_string());
                    Ok(())
                })
            }),
        )
        .await;

    let trigger = HookTrigger::new(registry, config.hooks.clone());
    let document = Arc::new(Document::new("Quarterly report"));

    let mut changes = DocumentChanges::default();
    changes
        .fields
        .insert("title".to_string(), serde_json::json!(document.title));

    let save = work_fn(|_: &Document, changes: &mut DocumentChanges| {
        Box::pin(async move {
            changes.audit.push("persist".to_string());
            Ok(())
        })
    });
    let document = trigger
        .trigger(document, "save", Some(save), &mut changes)
        .await?;

    let validate = work_fn(|doc: &Document, changes: &mut DocumentChanges| {
        Box::pin(async move {
            if doc.title.len() > 200 {
                return Err(AppError::validation("Document title is too long"));
            }
            changes.audit.push("check_title".to_string());
            Ok(())
        })
    });
    let action = config.hooks.validation_action.as_str();
    trigger
        .trigger(document, action, Some(validate), &mut changes)
        .await?;

    println!("{}", serde_json::to_string_pretty(&changes)?);

    Ok(())
}
