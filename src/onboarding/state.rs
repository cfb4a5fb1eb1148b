//! Onboarding state machine.
//!
//! `advance` is a pure `(state, input) -> (state, effect)` function; the
//! handler applies the effect (reply or commit) and stores the new state.

use crate::database::{Gender, Goal, ProfileDraft};

/// Where a user is in the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingState {
    AwaitingAge,
    AwaitingGender { age: u32 },
    AwaitingGoal { age: u32, gender: Gender },
    /// Profile assembled; conversation over.
    Done,
    /// Aborted with /cancel; conversation over.
    Cancelled,
}

/// Fixed bot messages of the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    AskAge,
    AskGender,
    AskGoal,
    InvalidAge,
    InvalidGender,
    InvalidGoal,
    Saved,
    Cancelled,
    NothingToCancel,
}

impl Prompt {
    pub fn text(&self) -> &'static str {
        match self {
            Self::AskAge => "Welcome! Let's get started. What's your age?",
            Self::AskGender => "Great! What's your gender? (male/female/other)",
            Self::AskGoal => "What's your fitness goal? (lose_weight/gain_muscle/stay_fit)",
            Self::InvalidAge => "Please enter a valid number for age.",
            Self::InvalidGender => "Please choose from: male, female, or other.",
            Self::InvalidGoal => "Invalid goal. Choose: lose_weight, gain_muscle, or stay_fit.",
            Self::Saved => "Profile saved! Use /workout for your plan.",
            Self::Cancelled => "Onboarding canceled.",
            Self::NothingToCancel => "Nothing to cancel.",
        }
    }
}

/// What the handler must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Send this prompt.
    Reply(Prompt),
    /// Persist the profile, then send `Prompt::Saved`.
    Commit(ProfileDraft),
    /// Input arrived after the conversation ended. Handlers never see this:
    /// `SessionStore` drops terminal states, so a finished user has no state.
    Ignore,
}

impl OnboardingState {
    /// Entry state for `/start`.
    pub fn start() -> (Self, Effect) {
        (Self::AwaitingAge, Effect::Reply(Prompt::AskAge))
    }

    /// Whether the conversation is over and the session can be dropped.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Cancelled)
    }

    /// Feed one answer into the state machine.
    pub fn advance(self, input: &str) -> (Self, Effect) {
        match self {
            Self::AwaitingAge => match parse_age(input) {
                Some(age) => (Self::AwaitingGender { age }, Effect::Reply(Prompt::AskGender)),
                None => (self, Effect::Reply(Prompt::InvalidAge)),
            },
            Self::AwaitingGender { age } => match Gender::parse(input) {
                Some(gender) => (Self::AwaitingGoal { age, gender }, Effect::Reply(Prompt::AskGoal)),
                None => (self, Effect::Reply(Prompt::InvalidGender)),
            },
            Self::AwaitingGoal { age, gender } => match Goal::parse(input) {
                Some(goal) => (Self::Done, Effect::Commit(ProfileDraft { age, gender, goal })),
                None => (self, Effect::Reply(Prompt::InvalidGoal)),
            },
            // Unreachable through `SessionStore`, kept so the function is total
            Self::Done | Self::Cancelled => (self, Effect::Ignore),
        }
    }

    /// Abort from any state.
    pub fn cancel(self) -> (Self, Effect) {
        (Self::Cancelled, Effect::Reply(Prompt::Cancelled))
    }
}

/// Ages are positive whole numbers.
fn parse_age(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|age| *age > 0)
}
