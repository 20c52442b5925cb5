//! Mallika Assist — rule-based chat assistant engine for the Mallika
//! Hospital website.
//!
//! Classifies free-text visitor messages (greeting, department listing,
//! doctor listing, department-name mention, symptom keywords) and
//! answers from a TTL-cached snapshot of the hospital's department and
//! doctor directory. The embedding application owns the UI and renders
//! the `BotReply` shapes.

pub mod cache; // Directory TTL cache
pub mod config;
pub mod directory; // Hospital API client
pub mod engine; // Assistant entry point
pub mod home; // Quick-action chips
pub mod messages; // Static reply copy
pub mod models;
pub mod reply; // Outbound reply shapes
pub mod rules; // Intent matching

pub use engine::{Assistant, AssistantError};
pub use reply::BotReply;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for embedding applications that don't bring
/// their own subscriber. Call once at startup.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} v{}", config::APP_NAME, config::APP_VERSION);
}
