use crate::config::stories::StoryType;
use crate::domain::engine::{decide, Action, Prompt};
use crate::domain::phone::PhoneNumber;
use crate::domain::progress::{BetaSlots, ConversationProgress, TurnSeed};

fn phone(s: &str) -> PhoneNumber {
    PhoneNumber::parse(s).unwrap()
}

fn seed() -> TurnSeed {
    TurnSeed {
        alpha_phone: phone("+15551230000"),
        story_id: "101".to_string(),
        story_type: StoryType::CompetitiveStory,
        game_mode: None,
    }
}

fn progress_with(betas: BetaSlots) -> ConversationProgress {
    let mut progress = ConversationProgress::start(&seed());
    progress.betas = betas;
    progress
}

#[test]
fn test_no_record_creates_shell_record() {
    let action = decide(None, "+15552340001", &seed());
    let Action::RecordCreated(created) = action else {
        panic!("expected RecordCreated, got {action:?}");
    };
    assert_eq!(created.alpha_phone, phone("+15551230000"));
    assert_eq!(created.betas, BetaSlots::Empty);
}

#[test]
fn test_first_message_fills_slot_zero_after_reevaluation() {
    // The caller's two-step path: create the shell record, then evaluate
    // the same message against it.
    let Action::RecordCreated(created) = decide(None, "+15552340001", &seed()) else {
        panic!("expected RecordCreated");
    };
    let action = decide(Some(created), "+15552340001", &seed());
    let Action::UpdateAndPrompt(updated, prompt) = action else {
        panic!("expected UpdateAndPrompt, got {action:?}");
    };
    assert_eq!(prompt, Prompt::AskBeta1);
    assert_eq!(updated.betas, BetaSlots::One(phone("+15552340001")));
}

#[test]
fn test_affirmative_with_one_beta_creates_game() {
    let progress = progress_with(BetaSlots::One(phone("+15552340001")));
    let action = decide(Some(progress.clone()), "yes", &seed());
    assert_eq!(action, Action::CreateGame(progress));
}

#[test]
fn test_affirmative_with_no_betas_prompts_not_enough_players() {
    let progress = progress_with(BetaSlots::Empty);
    let action = decide(Some(progress), "yes", &seed());
    assert_eq!(action, Action::Prompt(Prompt::NotEnoughPlayers));
}

#[test]
fn test_second_number_asks_for_third() {
    let progress = progress_with(BetaSlots::One(phone("+15552340001")));
    let action = decide(Some(progress), "555-234-0002", &seed());
    let Action::UpdateAndPrompt(updated, prompt) = action else {
        panic!("expected UpdateAndPrompt, got {action:?}");
    };
    assert_eq!(prompt, Prompt::AskBeta2);
    assert_eq!(
        updated.betas,
        BetaSlots::Two(phone("+15552340001"), phone("+15552340002"))
    );
}

#[test]
fn test_third_number_creates_game_without_confirmation() {
    let progress = progress_with(BetaSlots::Two(
        phone("+15552340001"),
        phone("+15552340002"),
    ));
    let action = decide(Some(progress), "+15559998888", &seed());
    let Action::CreateGame(completed) = action else {
        panic!("expected CreateGame, got {action:?}");
    };
    assert_eq!(
        completed.betas,
        BetaSlots::Three(
            phone("+15552340001"),
            phone("+15552340002"),
            phone("+15559998888")
        )
    );
}

#[test]
fn test_unparseable_message_prompts_invalid_mobile() {
    let progress = progress_with(BetaSlots::One(phone("+15552340001")));
    let action = decide(Some(progress), "hello", &seed());
    assert_eq!(action, Action::Prompt(Prompt::InvalidMobile));
}

#[test]
fn test_affirmative_wins_over_phone_number() {
    // "yes 5552340009" both passes the affirmative check and normalizes
    // to a valid number; the affirmative reading takes priority.
    let progress = progress_with(BetaSlots::One(phone("+15552340001")));
    let action = decide(Some(progress.clone()), "yes 5552340009", &seed());
    assert_eq!(action, Action::CreateGame(progress));
}

#[test]
fn test_full_record_resolves_on_phone_message() {
    let progress = progress_with(BetaSlots::Three(
        phone("+15552340001"),
        phone("+15552340002"),
        phone("+15552340003"),
    ));
    let action = decide(Some(progress.clone()), "+15550001111", &seed());
    assert_eq!(action, Action::CreateGame(progress));
}
