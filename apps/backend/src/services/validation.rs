//! Turn validation: admits an inbound turn and resolves its story
//! configuration. No side effects.

use serde::Deserialize;

use crate::config::stories::{StoryCatalog, StoryConfig, StoryType};
use crate::domain::phone::PhoneNumber;
use crate::domain::progress::TurnSeed;
use crate::error::AppError;

/// Raw turn as posted by the SMS gateway. Every field arrives as text;
/// presence is checked here rather than by serde so the reply can carry
/// the expected plain-text reason.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundTurn {
    pub story_id: Option<String>,
    pub story_type: Option<String>,
    pub game_mode: Option<String>,
    pub alpha_phone: Option<String>,
    pub message_text: Option<String>,
}

/// A turn that passed validation: normalized identity, resolved story
/// configuration, and the message to evaluate.
#[derive(Debug, Clone)]
pub struct ValidTurn {
    pub seed: TurnSeed,
    pub message_text: String,
    pub story: StoryConfig,
}

pub fn validate_turn(catalog: &StoryCatalog, turn: InboundTurn) -> Result<ValidTurn, AppError> {
    let story_id = require(turn.story_id)?;
    let raw_story_type = require(turn.story_type)?;
    let raw_alpha_phone = require(turn.alpha_phone)?;
    let message_text = require(turn.message_text)?;

    let story_type: StoryType = raw_story_type.parse().map_err(|_| {
        AppError::not_acceptable("UNSUPPORTED_STORY_TYPE", "Invalid story_type.".to_string())
    })?;

    let story = catalog.resolve(story_type, &story_id).cloned().ok_or_else(|| {
        AppError::not_acceptable(
            "UNKNOWN_STORY",
            format!("Game config not set up for story ID: {story_id}"),
        )
    })?;

    // The gateway supplies the sender's own number; one that does not
    // normalize is a malformed request, not a conversational turn.
    let alpha_phone = PhoneNumber::parse(&raw_alpha_phone).map_err(|_| {
        AppError::not_acceptable("INVALID_ALPHA_PHONE", "Invalid alpha phone number.".to_string())
    })?;

    Ok(ValidTurn {
        seed: TurnSeed {
            alpha_phone,
            story_id,
            story_type,
            game_mode: turn.game_mode.filter(|mode| !mode.trim().is_empty()),
        },
        message_text,
        story,
    })
}

fn require(field: Option<String>) -> Result<String, AppError> {
    field
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| {
            AppError::not_acceptable("MISSING_FIELD", "Missing required params.".to_string())
        })
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use super::*;

    const CATALOG_JSON: &str = r#"{
        "competitive": {
            "101": {
                "mobile_create": {
                    "not_enough_players": "oip-1",
                    "ask_beta_1": "oip-2",
                    "ask_beta_2": "oip-3",
                    "invalid_mobile": "oip-4"
                }
            }
        }
    }"#;

    fn catalog() -> StoryCatalog {
        StoryCatalog::from_json(CATALOG_JSON).unwrap()
    }

    fn full_turn() -> InboundTurn {
        InboundTurn {
            story_id: Some("101".to_string()),
            story_type: Some("competitive-story".to_string()),
            game_mode: None,
            alpha_phone: Some("(555) 123-0000".to_string()),
            message_text: Some("+15552340001".to_string()),
        }
    }

    #[test]
    fn test_valid_turn_resolves_story_and_normalizes_alpha() {
        let valid = validate_turn(&catalog(), full_turn()).unwrap();
        assert_eq!(valid.seed.alpha_phone.as_str(), "+15551230000");
        assert_eq!(valid.seed.story_id, "101");
        assert_eq!(valid.story.mobile_create.ask_beta_1, "oip-2");
    }

    #[test]
    fn test_missing_fields_rejected() {
        for strip in ["story_id", "story_type", "alpha_phone", "message_text"] {
            let mut turn = full_turn();
            match strip {
                "story_id" => turn.story_id = None,
                "story_type" => turn.story_type = Some("  ".to_string()),
                "alpha_phone" => turn.alpha_phone = None,
                _ => turn.message_text = Some(String::new()),
            }
            let err = validate_turn(&catalog(), turn).unwrap_err();
            assert_eq!(err.code(), "MISSING_FIELD", "field {strip}");
            assert_eq!(err.status(), StatusCode::NOT_ACCEPTABLE);
        }
    }

    #[test]
    fn test_game_mode_is_optional() {
        let mut turn = full_turn();
        turn.game_mode = Some("competitive".to_string());
        let valid = validate_turn(&catalog(), turn).unwrap();
        assert_eq!(valid.seed.game_mode.as_deref(), Some("competitive"));
    }

    #[test]
    fn test_unsupported_story_type_rejected() {
        let mut turn = full_turn();
        turn.story_type = Some("most-likely-to".to_string());
        let err = validate_turn(&catalog(), turn).unwrap_err();
        assert_eq!(err.code(), "UNSUPPORTED_STORY_TYPE");
    }

    #[test]
    fn test_unknown_story_id_rejected() {
        let mut turn = full_turn();
        turn.story_id = Some("999".to_string());
        let err = validate_turn(&catalog(), turn).unwrap_err();
        assert_eq!(err.code(), "UNKNOWN_STORY");
    }

    #[test]
    fn test_malformed_alpha_phone_rejected() {
        let mut turn = full_turn();
        turn.alpha_phone = Some("not-a-number".to_string());
        let err = validate_turn(&catalog(), turn).unwrap_err();
        assert_eq!(err.code(), "INVALID_ALPHA_PHONE");
    }
}
