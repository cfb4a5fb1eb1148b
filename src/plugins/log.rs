//! /log and /stats - workout logging.

use teloxide::prelude::*;
use tracing::info;

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::database::ProfileStore;
use crate::utils::{ChatEvent, Reply};
use crate::workout::{log_description, stats_text};

use super::ONBOARDING_REQUIRED;

const LOGGED: &str = "Workout logged successfully!";

/// Append a log entry for an onboarded user.
///
/// The profile check and the append are separate round trips, not a
/// transaction.
pub async fn log_reply(store: &dyn ProfileStore, user_id: u64, args: &str) -> anyhow::Result<Reply> {
    if store.read_profile(user_id).await?.is_none() {
        return Ok(Reply::plain(ONBOARDING_REQUIRED));
    }

    let workout = log_description(args);
    store.append_workout_log(user_id, &workout).await?;
    info!("User {} logged a workout", user_id);

    Ok(Reply::plain(LOGGED))
}

pub async fn stats_reply(store: &dyn ProfileStore, user_id: u64) -> anyhow::Result<Reply> {
    let total = store.count_workout_logs(user_id).await?;
    Ok(Reply::html(stats_text(total)))
}

/// Handle the /log command.
///
/// Usage: /log [description]
pub async fn log_command(
    bot: ThrottledBot,
    msg: Message,
    state: AppState,
    args: String,
) -> anyhow::Result<()> {
    let Some(event) = ChatEvent::from_message(&msg) else {
        return Ok(());
    };

    let reply = log_reply(state.store.as_ref(), event.user_id, &args).await?;
    event.respond(&bot, reply).await
}

/// Handle the /stats command.
pub async fn stats_command(
    bot: ThrottledBot,
    msg: Message,
    state: AppState,
) -> anyhow::Result<()> {
    let Some(event) = ChatEvent::from_message(&msg) else {
        return Ok(());
    };

    let reply = stats_reply(state.store.as_ref(), event.user_id).await?;
    event.respond(&bot, reply).await
}
