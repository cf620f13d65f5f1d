//! Property tests for the pure domain (no DB).

use proptest::prelude::*;

use crate::config::stories::StoryType;
use crate::domain::engine::{decide, Action};
use crate::domain::phone::PhoneNumber;
use crate::domain::progress::{ConversationProgress, TurnSeed};

proptest! {
    /// Property: any decoration of the same ten digits normalizes to the
    /// same canonical number.
    #[test]
    fn prop_normalization_is_canonical(
        national in "[2-9][0-9]{9}",
        with_country in any::<bool>(),
        with_punctuation in any::<bool>(),
    ) {
        let mut spelling = String::new();
        if with_country {
            spelling.push_str("+1 ");
        }
        if with_punctuation {
            spelling.push('(');
            spelling.push_str(&national[..3]);
            spelling.push_str(") ");
            spelling.push_str(&national[3..6]);
            spelling.push('-');
            spelling.push_str(&national[6..]);
        } else {
            spelling.push_str(&national);
        }

        let parsed = PhoneNumber::parse(&spelling).unwrap();
        let bare = PhoneNumber::parse(&national).unwrap();
        prop_assert_eq!(parsed, bare);
    }

    /// Property: strings without ten usable digits never parse.
    #[test]
    fn prop_short_digit_runs_rejected(digits in "[0-9]{0,9}") {
        prop_assert!(PhoneNumber::parse(&digits).is_err());
    }

    /// Property: for any sequence of valid number messages, slots fill
    /// strictly left to right with no gaps at every step.
    #[test]
    fn prop_slots_fill_in_order(numbers in proptest::collection::vec("[2-9][0-9]{9}", 1..5)) {
        let seed = TurnSeed {
            alpha_phone: PhoneNumber::parse("5551230000").unwrap(),
            story_id: "101".to_string(),
            story_type: StoryType::CompetitiveStory,
            game_mode: None,
        };
        let mut progress = ConversationProgress::start(&seed);

        for (turn, number) in numbers.iter().enumerate() {
            let before = progress.betas.filled();
            match decide(Some(progress.clone()), number, &seed) {
                Action::UpdateAndPrompt(updated, _) => {
                    prop_assert_eq!(updated.betas.filled(), before + 1);
                    let slots = updated.betas.as_array();
                    for i in 1..slots.len() {
                        prop_assert!(!(slots[i].is_some() && slots[i - 1].is_none()),
                            "gap at slot {} after turn {}", i, turn);
                    }
                    progress = updated;
                }
                Action::CreateGame(completed) => {
                    prop_assert!(completed.betas.filled() >= before);
                    prop_assert!(before >= 2, "game created before two slots were full");
                    return Ok(());
                }
                other => prop_assert!(false, "unexpected action {:?}", other),
            }
        }
    }
}
