//! Onboarding answers and the transitions shared with /start and /cancel.

use teloxide::prelude::*;
use tracing::info;

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::database::ProfileStore;
use crate::onboarding::{Effect, OnboardingState, Prompt, SessionStore};
use crate::utils::{ChatEvent, Reply};

/// Apply a transition: run its effect, then record the new state.
///
/// The session is only advanced after a commit succeeds, so a failed write
/// leaves the user at the goal question.
pub async fn apply(
    store: &dyn ProfileStore,
    sessions: &SessionStore,
    user_id: u64,
    next: OnboardingState,
    effect: Effect,
) -> anyhow::Result<Option<Reply>> {
    let reply = match effect {
        Effect::Reply(prompt) => Some(Reply::plain(prompt.text())),
        Effect::Commit(draft) => {
            store.write_profile(user_id, &draft).await?;
            info!(
                "Saved profile for user {} (goal {})",
                user_id,
                draft.goal.as_str()
            );
            Some(Reply::plain(Prompt::Saved.text()))
        }
        Effect::Ignore => None,
    };

    sessions.set(user_id, next);
    Ok(reply)
}

/// Feed a plain-text message into the user's onboarding, if one is running.
pub async fn answer(
    store: &dyn ProfileStore,
    sessions: &SessionStore,
    user_id: u64,
    text: &str,
) -> anyhow::Result<Option<Reply>> {
    let Some(state) = sessions.get(user_id) else {
        return Ok(None);
    };

    let (next, effect) = state.advance(text);
    apply(store, sessions, user_id, next, effect).await
}

/// Handle a non-command text message.
pub async fn answer_handler(
    bot: ThrottledBot,
    msg: Message,
    state: AppState,
) -> anyhow::Result<()> {
    let Some(event) = ChatEvent::from_message(&msg) else {
        return Ok(());
    };

    if let Some(reply) = answer(state.store.as_ref(), &state.sessions, event.user_id, &event.text).await? {
        event.respond(&bot, reply).await?;
    }

    Ok(())
}
