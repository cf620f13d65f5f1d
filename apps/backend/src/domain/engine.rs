//! The conversation decision function.
//!
//! `decide` is the whole state machine: given the stored progress (if
//! any) and the latest inbound message, it names the one action the turn
//! should take. It is pure and never fails: input the user got wrong is
//! answered with a corrective prompt, not an error.

use crate::domain::message;
use crate::domain::phone::PhoneNumber;
use crate::domain::progress::{ConversationProgress, TurnSeed};

/// Outbound prompt templates a turn can trigger. Resolved to a concrete
/// template id through the story configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    NotEnoughPlayers,
    AskBeta1,
    AskBeta2,
    InvalidMobile,
}

/// What a turn decided to do. The caller dispatches on the variant; no
/// control flow escapes through errors or sentinels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A shell record was seeded for a brand-new conversation. The caller
    /// must re-evaluate the same message against the new record before
    /// replying; the first inbound message usually *is* the first beta
    /// number, and the user should not have to repeat it.
    RecordCreated(ConversationProgress),
    /// Send a prompt; stored progress is unchanged.
    Prompt(Prompt),
    /// Persist the updated progress, then send the prompt.
    UpdateAndPrompt(ConversationProgress, Prompt),
    /// Trigger game creation with the collected numbers, then delete the
    /// record. Never rolled back.
    CreateGame(ConversationProgress),
}

/// Decide the next action for one turn.
///
/// Rule order matters: the affirmative check runs before the phone-number
/// check, so a message that parses as both is treated as affirmative.
pub fn decide(existing: Option<ConversationProgress>, message: &str, seed: &TurnSeed) -> Action {
    let Some(mut progress) = existing else {
        return Action::RecordCreated(ConversationProgress::start(seed));
    };

    if message::is_affirmative(message) {
        return match progress.betas.first() {
            // Holding a PhoneNumber proves slot 0 is valid.
            Some(_) => Action::CreateGame(progress),
            None => Action::Prompt(Prompt::NotEnoughPlayers),
        };
    }

    match PhoneNumber::parse(message) {
        Ok(beta) => match progress.push_beta(beta) {
            Some(0) => Action::UpdateAndPrompt(progress, Prompt::AskBeta1),
            Some(1) => Action::UpdateAndPrompt(progress, Prompt::AskBeta2),
            // The third number completes the set; creation needs no
            // affirmative confirmation. A record somehow already full
            // resolves the same way.
            _ => Action::CreateGame(progress),
        },
        Err(_) => Action::Prompt(Prompt::InvalidMobile),
    }
}
