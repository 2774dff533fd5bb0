//! Registry of the games the color table knows about.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::colors::{self, ColorPair};
use crate::errors::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Game {
    Genshin,
    StarRail,
    Zenless,
}

impl Game {
    pub const ALL: [Game; 3] = [Game::Genshin, Game::StarRail, Game::Zenless];

    pub fn id(&self) -> &'static str {
        match self {
            Game::Genshin => "genshin",
            Game::StarRail => "starrail",
            Game::Zenless => "zenless",
        }
    }

    /// Short code used by the announcement feeds.
    pub fn code(&self) -> &'static str {
        match self {
            Game::Genshin => "ys",
            Game::StarRail => "sr",
            Game::Zenless => "zzz",
        }
    }

    /// Display title, which is also the color table key.
    pub fn label(&self) -> &'static str {
        match self {
            Game::Genshin => "原神",
            Game::StarRail => "崩坏：星穹铁道",
            Game::Zenless => "绝区零",
        }
    }

    pub fn from_label(label: &str) -> Option<Game> {
        Game::ALL.into_iter().find(|game| game.label() == label)
    }

    pub fn colors(&self) -> Option<ColorPair> {
        colors::get_pair(self.label())
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Game {
    type Err = GameError;

    /// Accepts an id, a short code, or the exact label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        if let Some(game) = Game::from_label(needle) {
            return Ok(game);
        }

        let lowered = needle.to_ascii_lowercase();
        Game::ALL
            .into_iter()
            .find(|game| game.id() == lowered || game.code() == lowered)
            .ok_or_else(|| GameError::Unknown(s.to_string()))
    }
}
