//! /start and /cancel - begin or abort onboarding.

use teloxide::prelude::*;
use tracing::debug;

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::database::ProfileStore;
use crate::onboarding::{OnboardingState, Prompt, SessionStore};
use crate::utils::{ChatEvent, Reply};

use super::onboarding::apply;

/// Start a fresh questionnaire, discarding any unfinished one.
pub async fn start_reply(
    store: &dyn ProfileStore,
    sessions: &SessionStore,
    user_id: u64,
) -> anyhow::Result<Option<Reply>> {
    if sessions.end(user_id).is_some() {
        debug!("Restarting onboarding for user {}", user_id);
    }

    let (state, effect) = OnboardingState::start();
    apply(store, sessions, user_id, state, effect).await
}

/// Abort the user's questionnaire.
pub async fn cancel_reply(
    store: &dyn ProfileStore,
    sessions: &SessionStore,
    user_id: u64,
) -> anyhow::Result<Option<Reply>> {
    let Some(state) = sessions.get(user_id) else {
        return Ok(Some(Reply::plain(Prompt::NothingToCancel.text())));
    };

    let (next, effect) = state.cancel();
    apply(store, sessions, user_id, next, effect).await
}

/// Handle the /start command.
pub async fn start_command(
    bot: ThrottledBot,
    msg: Message,
    state: AppState,
) -> anyhow::Result<()> {
    let Some(event) = ChatEvent::from_message(&msg) else {
        return Ok(());
    };

    if let Some(reply) = start_reply(state.store.as_ref(), &state.sessions, event.user_id).await? {
        event.respond(&bot, reply).await?;
    }

    Ok(())
}

/// Handle the /cancel command.
pub async fn cancel_command(
    bot: ThrottledBot,
    msg: Message,
    state: AppState,
) -> anyhow::Result<()> {
    let Some(event) = ChatEvent::from_message(&msg) else {
        return Ok(());
    };

    if let Some(reply) = cancel_reply(state.store.as_ref(), &state.sessions, event.user_id).await? {
        event.respond(&bot, reply).await?;
    }

    Ok(())
}
