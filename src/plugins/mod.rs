//! Plugin system for command handlers.
//!
//! Each plugin exposes a `*_reply` function holding the logic and a thin
//! `*_command` endpoint that extracts the event and sends the reply.

pub mod log;
pub mod onboarding;
pub mod start;
pub mod workout;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::dispatcher::ThrottledBot;
use crate::utils::{ChatEvent, Reply};

/// Reply for commands that need a stored profile.
pub const ONBOARDING_REQUIRED: &str = "Please complete onboarding with /start first.";

/// Reply when the stored profile has no goal.
pub const NO_GOAL: &str = "No fitness goal set. Please complete onboarding. /start";

/// All bot commands.
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "Set up your fitness profile")]
    Start,

    #[command(description = "Abort profile setup")]
    Cancel,

    #[command(description = "Get your workout plan")]
    Workout,

    #[command(description = "Log a workout, e.g. /log train legs")]
    Log(String),

    #[command(description = "Show how many workouts you logged")]
    Stats,

    #[command(description = "Show this help")]
    Help,
}

/// Build the combined command handler.
pub fn command_handler() -> UpdateHandler<anyhow::Error> {
    use dptree::case;

    teloxide::filter_command::<Command, _>()
        .branch(case![Command::Start].endpoint(start::start_command))
        .branch(case![Command::Cancel].endpoint(start::cancel_command))
        .branch(case![Command::Workout].endpoint(workout::workout_command))
        .branch(case![Command::Log(args)].endpoint(log::log_command))
        .branch(case![Command::Stats].endpoint(log::stats_command))
        .branch(case![Command::Help].endpoint(help_command))
}

/// Build the handler for onboarding answers.
pub fn onboarding_handler() -> UpdateHandler<anyhow::Error> {
    dptree::filter(|msg: Message| msg.text().is_some_and(is_onboarding_answer))
        .endpoint(onboarding::answer_handler)
}

/// Plain text advances onboarding; anything shaped like a command,
/// known or not, never does.
pub fn is_onboarding_answer(text: &str) -> bool {
    !text.is_empty() && !text.starts_with('/')
}

/// Handle /help command.
async fn help_command(bot: ThrottledBot, msg: Message) -> anyhow::Result<()> {
    let Some(event) = ChatEvent::from_message(&msg) else {
        return Ok(());
    };

    event
        .respond(&bot, Reply::plain(Command::descriptions().to_string()))
        .await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::database::memory::MemoryStore;
    use crate::database::{Gender, Goal, ProfileStore, UserProfile, user_key};
    use crate::onboarding::{OnboardingState, Prompt, SessionStore};
    use crate::workout::{NO_DETAILS, plan_for, stats_text};

    const USER: u64 = 1001;

    fn setup() -> (Arc<MemoryStore>, SessionStore) {
        (Arc::new(MemoryStore::new()), SessionStore::new(None))
    }

    async fn say(store: &MemoryStore, sessions: &SessionStore, text: &str) -> Option<Reply> {
        onboarding::answer(store, sessions, USER, text).await.unwrap()
    }

    async fn onboard(store: &MemoryStore, sessions: &SessionStore, goal: &str) {
        start::start_reply(store, sessions, USER).await.unwrap();
        say(store, sessions, "30").await;
        say(store, sessions, "female").await;
        say(store, sessions, goal).await;
    }

    #[test]
    fn test_command_parsing() {
        assert_eq!(Command::parse("/start", "fitbot").unwrap(), Command::Start);
        assert_eq!(Command::parse("/workout", "fitbot").unwrap(), Command::Workout);
        assert_eq!(
            Command::parse("/log train legs", "fitbot").unwrap(),
            Command::Log("train legs".to_string())
        );
        assert_eq!(Command::parse("/log", "fitbot").unwrap(), Command::Log(String::new()));
        assert!(Command::parse("/unknown", "fitbot").is_err());
    }

    #[test]
    fn test_only_plain_text_is_an_onboarding_answer() {
        assert!(is_onboarding_answer("25"));
        assert!(is_onboarding_answer("Lose_Weight"));
        assert!(!is_onboarding_answer("/workout"));
        assert!(!is_onboarding_answer("/foo@bot"));
        assert!(!is_onboarding_answer("/log 25"));
        assert!(!is_onboarding_answer(""));
    }

    #[tokio::test]
    async fn test_unfinished_onboarding_resumes_after_a_pause() {
        let (store, sessions) = setup();
        start::start_reply(store.as_ref(), &sessions, USER).await.unwrap();
        say(&store, &sessions, "25").await;

        std::thread::sleep(Duration::from_millis(150));

        assert_eq!(say(&store, &sessions, "male").await, Some(Reply::plain(Prompt::AskGoal.text())));
    }

    #[tokio::test]
    async fn test_onboarding_writes_normalized_profile() {
        let (store, sessions) = setup();

        let reply = start::start_reply(store.as_ref(), &sessions, USER).await.unwrap();
        assert_eq!(reply, Some(Reply::plain(Prompt::AskAge.text())));

        assert_eq!(say(&store, &sessions, "25").await, Some(Reply::plain(Prompt::AskGender.text())));
        assert_eq!(say(&store, &sessions, "Male").await, Some(Reply::plain(Prompt::AskGoal.text())));
        assert_eq!(
            say(&store, &sessions, "Lose_Weight").await,
            Some(Reply::plain(Prompt::Saved.text()))
        );

        let profile = store.read_profile(USER).await.unwrap().unwrap();
        assert_eq!(profile.user_id, "1001");
        assert_eq!(profile.age, 25);
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.goal, Some(Goal::LoseWeight));
        assert!(profile.timestamp.is_some());

        // Conversation is over: further text is ignored
        assert_eq!(sessions.get(USER), None);
        assert_eq!(say(&store, &sessions, "hello").await, None);
    }

    #[tokio::test]
    async fn test_invalid_answers_reprompt_without_advancing() {
        let (store, sessions) = setup();
        start::start_reply(store.as_ref(), &sessions, USER).await.unwrap();

        assert_eq!(say(&store, &sessions, "old").await, Some(Reply::plain(Prompt::InvalidAge.text())));
        assert_eq!(sessions.get(USER), Some(OnboardingState::AwaitingAge));

        say(&store, &sessions, "40").await;
        assert_eq!(
            say(&store, &sessions, "robot").await,
            Some(Reply::plain(Prompt::InvalidGender.text()))
        );
        assert_eq!(sessions.get(USER), Some(OnboardingState::AwaitingGender { age: 40 }));

        say(&store, &sessions, "other").await;
        assert_eq!(
            say(&store, &sessions, "get_rich").await,
            Some(Reply::plain(Prompt::InvalidGoal.text()))
        );
        assert_eq!(
            sessions.get(USER),
            Some(OnboardingState::AwaitingGoal { age: 40, gender: Gender::Other })
        );
        assert!(store.read_profile(USER).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_text_outside_onboarding_is_ignored() {
        let (store, sessions) = setup();
        assert_eq!(say(&store, &sessions, "25").await, None);
        assert_eq!(sessions.get(USER), None);
    }

    #[tokio::test]
    async fn test_cancel_discards_session_and_restart_is_fresh() {
        let (store, sessions) = setup();
        start::start_reply(store.as_ref(), &sessions, USER).await.unwrap();
        say(&store, &sessions, "25").await;
        say(&store, &sessions, "male").await;

        let reply = start::cancel_reply(store.as_ref(), &sessions, USER).await.unwrap();
        assert_eq!(reply, Some(Reply::plain(Prompt::Cancelled.text())));
        assert_eq!(sessions.get(USER), None);
        assert!(store.read_profile(USER).await.unwrap().is_none());

        start::start_reply(store.as_ref(), &sessions, USER).await.unwrap();
        assert_eq!(sessions.get(USER), Some(OnboardingState::AwaitingAge));

        // A goal answer is now an invalid age, not a completion
        assert_eq!(
            say(&store, &sessions, "stay_fit").await,
            Some(Reply::plain(Prompt::InvalidAge.text()))
        );
    }

    #[tokio::test]
    async fn test_cancel_without_onboarding() {
        let (store, sessions) = setup();
        let reply = start::cancel_reply(store.as_ref(), &sessions, USER).await.unwrap();
        assert_eq!(reply, Some(Reply::plain(Prompt::NothingToCancel.text())));
    }

    #[tokio::test]
    async fn test_start_mid_onboarding_restarts() {
        let (store, sessions) = setup();
        start::start_reply(store.as_ref(), &sessions, USER).await.unwrap();
        say(&store, &sessions, "25").await;

        start::start_reply(store.as_ref(), &sessions, USER).await.unwrap();
        assert_eq!(sessions.get(USER), Some(OnboardingState::AwaitingAge));
    }

    #[tokio::test]
    async fn test_reonboarding_overwrites_profile() {
        let (store, sessions) = setup();
        onboard(&store, &sessions, "lose_weight").await;
        onboard(&store, &sessions, "gain_muscle").await;

        let profile = store.read_profile(USER).await.unwrap().unwrap();
        assert_eq!(profile.goal, Some(Goal::GainMuscle));
    }

    #[tokio::test]
    async fn test_workout_returns_plan_for_goal() {
        let (store, sessions) = setup();
        onboard(&store, &sessions, "gain_muscle").await;

        let reply = workout::workout_reply(store.as_ref(), USER).await.unwrap();
        assert_eq!(reply, Reply::html(plan_for(Goal::GainMuscle)));
    }

    #[tokio::test]
    async fn test_workout_requires_profile() {
        let (store, _) = setup();
        let reply = workout::workout_reply(store.as_ref(), USER).await.unwrap();
        assert_eq!(reply, Reply::plain(ONBOARDING_REQUIRED));
    }

    #[tokio::test]
    async fn test_workout_without_goal() {
        let (store, _) = setup();
        store.put_profile(
            USER,
            UserProfile {
                user_id: user_key(USER),
                age: 20,
                gender: Gender::Male,
                goal: None,
                timestamp: None,
            },
        );

        let reply = workout::workout_reply(store.as_ref(), USER).await.unwrap();
        assert_eq!(reply, Reply::plain(NO_GOAL));
    }

    #[tokio::test]
    async fn test_log_then_stats_increments_by_one() {
        let (store, sessions) = setup();
        onboard(&store, &sessions, "stay_fit").await;

        let before = log::stats_reply(store.as_ref(), USER).await.unwrap();
        assert_eq!(before, Reply::html(stats_text(0)));

        let reply = log::log_reply(store.as_ref(), USER, "train legs").await.unwrap();
        assert_eq!(reply, Reply::plain("Workout logged successfully!"));

        let logs = store.logs(USER);
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].workout, "train legs");
        assert_eq!(logs[0].user_id, "1001");

        let after = log::stats_reply(store.as_ref(), USER).await.unwrap();
        assert_eq!(after, Reply::html(stats_text(1)));
    }

    #[tokio::test]
    async fn test_log_without_details_uses_placeholder() {
        let (store, sessions) = setup();
        onboard(&store, &sessions, "stay_fit").await;

        log::log_reply(store.as_ref(), USER, "  ").await.unwrap();
        assert_eq!(store.logs(USER)[0].workout, NO_DETAILS);
    }

    #[tokio::test]
    async fn test_log_requires_profile() {
        let (store, _) = setup();

        let reply = log::log_reply(store.as_ref(), USER, "train legs").await.unwrap();
        assert_eq!(reply, Reply::plain(ONBOARDING_REQUIRED));
        assert!(store.logs(USER).is_empty());
        assert_eq!(store.count_workout_logs(USER).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_commands_mid_onboarding_keep_session() {
        let (store, sessions) = setup();
        start::start_reply(store.as_ref(), &sessions, USER).await.unwrap();
        say(&store, &sessions, "33").await;

        workout::workout_reply(store.as_ref(), USER).await.unwrap();
        log::stats_reply(store.as_ref(), USER).await.unwrap();

        assert_eq!(sessions.get(USER), Some(OnboardingState::AwaitingGender { age: 33 }));
    }

    #[tokio::test]
    async fn test_users_onboard_independently() {
        let (store, sessions) = setup();
        let other = USER + 1;

        start::start_reply(store.as_ref(), &sessions, USER).await.unwrap();
        start::start_reply(store.as_ref(), &sessions, other).await.unwrap();
        say(&store, &sessions, "25").await;

        assert_eq!(sessions.get(USER), Some(OnboardingState::AwaitingGender { age: 25 }));
        assert_eq!(sessions.get(other), Some(OnboardingState::AwaitingAge));
    }
}
