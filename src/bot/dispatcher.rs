//! Message dispatcher setup.
//!
//! Builds the dispatcher with the command handlers and the onboarding
//! answer handler.

use std::sync::Arc;

use teloxide::adaptors::Throttle;
use teloxide::dispatching::{DefaultKey, UpdateHandler};
use teloxide::prelude::*;

use crate::database::ProfileStore;
use crate::onboarding::SessionStore;
use crate::plugins;

/// Bot type with Throttle adaptor for automatic rate limiting.
pub type ThrottledBot = Throttle<Bot>;

/// Dispatcher type shared by the polling and webhook runners.
pub type BotDispatcher = Dispatcher<ThrottledBot, anyhow::Error, DefaultKey>;

/// Shared application state, injected into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Profile and workout log persistence.
    pub store: Arc<dyn ProfileStore>,

    /// In-progress onboarding conversations.
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(store: Arc<dyn ProfileStore>, sessions: SessionStore) -> Self {
        Self { store, sessions }
    }
}

/// Build the dispatcher with all handlers.
pub fn build_dispatcher(bot: ThrottledBot, state: AppState) -> BotDispatcher {
    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![state])
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build()
}

/// Build the handler schema.
///
/// Commands are matched first; any other text is an onboarding answer.
fn schema() -> UpdateHandler<anyhow::Error> {
    use teloxide::dispatching::UpdateFilterExt;

    Update::filter_message()
        .branch(plugins::command_handler())
        .branch(plugins::onboarding_handler())
}
