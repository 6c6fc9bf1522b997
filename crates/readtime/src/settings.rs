use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Reading speed used to turn word counts into seconds.
    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: NonZeroU32,
}

impl Settings {
    pub fn new(words_per_minute: u32) -> Result<Self> {
        match NonZeroU32::new(words_per_minute) {
            Some(words_per_minute) => Ok(Self { words_per_minute }),
            None => Err(Error::InvalidConfiguration),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            words_per_minute: default_words_per_minute(),
        }
    }
}

fn default_words_per_minute() -> NonZeroU32 {
    NonZeroU32::new(DEFAULT_WORDS_PER_MINUTE).unwrap_or(NonZeroU32::MIN)
}
