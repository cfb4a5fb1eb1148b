//! /workout - the plan matching the user's goal.

use teloxide::prelude::*;

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::database::ProfileStore;
use crate::utils::{ChatEvent, Reply};
use crate::workout::plan_for;

use super::{NO_GOAL, ONBOARDING_REQUIRED};

pub async fn workout_reply(store: &dyn ProfileStore, user_id: u64) -> anyhow::Result<Reply> {
    let Some(profile) = store.read_profile(user_id).await? else {
        return Ok(Reply::plain(ONBOARDING_REQUIRED));
    };

    Ok(match profile.goal {
        Some(goal) => Reply::html(plan_for(goal)),
        None => Reply::plain(NO_GOAL),
    })
}

/// Handle the /workout command.
pub async fn workout_command(
    bot: ThrottledBot,
    msg: Message,
    state: AppState,
) -> anyhow::Result<()> {
    let Some(event) = ChatEvent::from_message(&msg) else {
        return Ok(());
    };

    let reply = workout_reply(state.store.as_ref(), event.user_id).await?;
    event.respond(&bot, reply).await
}
