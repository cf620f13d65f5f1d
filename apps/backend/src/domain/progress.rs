//! Per-alpha conversation progress: the durable record a creation
//! conversation leaves between turns.

use crate::config::stories::StoryType;
use crate::domain::phone::PhoneNumber;
use crate::errors::domain::DomainError;

/// Beta numbers collected so far, filled strictly left to right.
///
/// The variant *is* the conversation state: no separate state label is
/// stored, and a gap (a later slot set while an earlier one is empty) is
/// unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BetaSlots {
    #[default]
    Empty,
    One(PhoneNumber),
    Two(PhoneNumber, PhoneNumber),
    Three(PhoneNumber, PhoneNumber, PhoneNumber),
}

impl BetaSlots {
    pub fn filled(&self) -> usize {
        match self {
            BetaSlots::Empty => 0,
            BetaSlots::One(..) => 1,
            BetaSlots::Two(..) => 2,
            BetaSlots::Three(..) => 3,
        }
    }

    pub fn first(&self) -> Option<&PhoneNumber> {
        match self {
            BetaSlots::Empty => None,
            BetaSlots::One(b0) | BetaSlots::Two(b0, _) | BetaSlots::Three(b0, _, _) => Some(b0),
        }
    }

    /// Positional view of the slots, for wire payloads and persistence.
    pub fn as_array(&self) -> [Option<&PhoneNumber>; 3] {
        match self {
            BetaSlots::Empty => [None, None, None],
            BetaSlots::One(b0) => [Some(b0), None, None],
            BetaSlots::Two(b0, b1) => [Some(b0), Some(b1), None],
            BetaSlots::Three(b0, b1, b2) => [Some(b0), Some(b1), Some(b2)],
        }
    }

    /// Rebuild slots from stored columns. A populated slot after an empty
    /// one means the row was written by something that broke the ordering
    /// invariant, and is treated as data corruption.
    pub fn from_columns(
        b0: Option<PhoneNumber>,
        b1: Option<PhoneNumber>,
        b2: Option<PhoneNumber>,
    ) -> Result<Self, DomainError> {
        match (b0, b1, b2) {
            (None, None, None) => Ok(BetaSlots::Empty),
            (Some(b0), None, None) => Ok(BetaSlots::One(b0)),
            (Some(b0), Some(b1), None) => Ok(BetaSlots::Two(b0, b1)),
            (Some(b0), Some(b1), Some(b2)) => Ok(BetaSlots::Three(b0, b1, b2)),
            _ => Err(DomainError::data_corruption(
                "beta slots populated out of order",
            )),
        }
    }
}

/// Identity and story fields of the turn being processed; seeds the shell
/// record when a conversation starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnSeed {
    pub alpha_phone: PhoneNumber,
    pub story_id: String,
    pub story_type: StoryType,
    pub game_mode: Option<String>,
}

/// Durable progress of one creation conversation, keyed by the alpha's
/// phone number. Exists only between conversation start and resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationProgress {
    pub alpha_phone: PhoneNumber,
    pub alpha_display_name: String,
    pub story_id: String,
    pub story_type: StoryType,
    pub game_mode: Option<String>,
    pub betas: BetaSlots,
}

impl ConversationProgress {
    /// Shell record for a conversation that just started. No display name
    /// has been collected over SMS at this point, so the phone number
    /// stands in for it.
    pub fn start(seed: &TurnSeed) -> Self {
        Self {
            alpha_phone: seed.alpha_phone.clone(),
            alpha_display_name: seed.alpha_phone.as_str().to_string(),
            story_id: seed.story_id.clone(),
            story_type: seed.story_type,
            game_mode: seed.game_mode.clone(),
            betas: BetaSlots::Empty,
        }
    }

    /// Fill the next empty beta slot, returning which slot (0-based) was
    /// filled, or `None` if all three are already taken.
    pub fn push_beta(&mut self, beta: PhoneNumber) -> Option<usize> {
        let (next, filled) = match std::mem::take(&mut self.betas) {
            BetaSlots::Empty => (BetaSlots::One(beta), Some(0)),
            BetaSlots::One(b0) => (BetaSlots::Two(b0, beta), Some(1)),
            BetaSlots::Two(b0, b1) => (BetaSlots::Three(b0, b1, beta), Some(2)),
            full @ BetaSlots::Three(..) => (full, None),
        };
        self.betas = next;
        filled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(s: &str) -> PhoneNumber {
        PhoneNumber::parse(s).unwrap()
    }

    #[test]
    fn test_slots_fill_left_to_right() {
        let seed = TurnSeed {
            alpha_phone: phone("+15551230000"),
            story_id: "101".to_string(),
            story_type: StoryType::CompetitiveStory,
            game_mode: None,
        };
        let mut progress = ConversationProgress::start(&seed);
        assert_eq!(progress.betas.filled(), 0);

        assert_eq!(progress.push_beta(phone("+15552340001")), Some(0));
        assert_eq!(progress.push_beta(phone("+15552340002")), Some(1));
        assert_eq!(progress.push_beta(phone("+15552340003")), Some(2));
        assert_eq!(progress.push_beta(phone("+15552340004")), None);
        assert_eq!(progress.betas.filled(), 3);
    }

    #[test]
    fn test_display_name_defaults_to_phone() {
        let seed = TurnSeed {
            alpha_phone: phone("+15551230000"),
            story_id: "101".to_string(),
            story_type: StoryType::CompetitiveStory,
            game_mode: None,
        };
        let progress = ConversationProgress::start(&seed);
        assert_eq!(progress.alpha_display_name, "+15551230000");
    }

    #[test]
    fn test_from_columns_rejects_gaps() {
        assert!(BetaSlots::from_columns(None, Some(phone("5551234567")), None).is_err());
        assert!(BetaSlots::from_columns(
            Some(phone("5551234567")),
            None,
            Some(phone("5557654321"))
        )
        .is_err());
    }

    #[test]
    fn test_from_columns_accepts_prefixes() {
        let b0 = phone("5551234567");
        let b1 = phone("5552345678");
        assert_eq!(
            BetaSlots::from_columns(Some(b0.clone()), Some(b1.clone()), None).unwrap(),
            BetaSlots::Two(b0, b1)
        );
        assert_eq!(BetaSlots::from_columns(None, None, None).unwrap(), BetaSlots::Empty);
    }
}
