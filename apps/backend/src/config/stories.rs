//! Story configuration catalog.
//!
//! A read-only lookup from (story family, story id) to the prompt
//! templates that drive the mobile creation flow. Loaded once from a JSON
//! file at startup and passed explicitly into validation; there is no
//! per-request global.

use std::collections::HashMap;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::config::outbound::must_var;
use crate::domain::engine::Prompt;
use crate::error::AppError;

/// Recognized story families. Only competitive stories have a mobile
/// creation flow today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryType {
    CompetitiveStory,
}

impl StoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoryType::CompetitiveStory => "competitive-story",
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unrecognized story type")]
pub struct UnsupportedStoryType;

impl FromStr for StoryType {
    type Err = UnsupportedStoryType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "competitive-story" => Ok(StoryType::CompetitiveStory),
            _ => Err(UnsupportedStoryType),
        }
    }
}

/// Prompt template ids for the mobile creation conversation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MobileCreatePrompts {
    pub not_enough_players: String,
    pub ask_beta_1: String,
    pub ask_beta_2: String,
    pub invalid_mobile: String,
}

impl MobileCreatePrompts {
    pub fn template_for(&self, prompt: Prompt) -> &str {
        match prompt {
            Prompt::NotEnoughPlayers => &self.not_enough_players,
            Prompt::AskBeta1 => &self.ask_beta_1,
            Prompt::AskBeta2 => &self.ask_beta_2,
            Prompt::InvalidMobile => &self.invalid_mobile,
        }
    }
}

/// Configuration for one story.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoryConfig {
    /// Human label, for logs and ops tooling.
    #[serde(default)]
    pub name: String,
    pub mobile_create: MobileCreatePrompts,
}

/// All story configurations, grouped by family.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoryCatalog {
    #[serde(default)]
    competitive: HashMap<String, StoryConfig>,
}

impl StoryCatalog {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json)
            .map_err(|e| AppError::config(format!("invalid story catalog: {e}")))
    }

    /// Load the catalog from the file named by `MUSTER_STORY_CONFIG`.
    pub fn from_env() -> Result<Self, AppError> {
        let path = must_var("MUSTER_STORY_CONFIG")?;
        let json = std::fs::read_to_string(&path)
            .map_err(|e| AppError::config(format!("cannot read story catalog '{path}': {e}")))?;
        Self::from_json(&json)
    }

    pub fn resolve(&self, story_type: StoryType, story_id: &str) -> Option<&StoryConfig> {
        match story_type {
            StoryType::CompetitiveStory => self.competitive.get(story_id),
        }
    }
}
