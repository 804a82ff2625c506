//! Hero headline that types a phrase, holds it, deletes it, and moves on
//! to the next one.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, SiteError};

/// Delays between typewriter ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypewriterTiming {
    #[serde(with = "millis")]
    pub start: Duration,
    #[serde(with = "millis")]
    pub type_char: Duration,
    #[serde(with = "millis")]
    pub delete_char: Duration,
    /// Pause with the full phrase on screen.
    #[serde(with = "millis")]
    pub hold: Duration,
    /// Pause with an empty line before the next phrase.
    #[serde(with = "millis")]
    pub pause: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            start: Duration::from_millis(1000),
            type_char: Duration::from_millis(100),
            delete_char: Duration::from_millis(40),
            hold: Duration::from_millis(2000),
            pause: Duration::from_millis(500),
        }
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Duration, D::Error> {
        u64::deserialize(de).map(Duration::from_millis)
    }
}

/// Text to display after a tick and how long to wait before the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterStep {
    pub text: String,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    timing: TypewriterTiming,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new<I, P>(phrases: I, timing: TypewriterTiming) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(SiteError::NoPhrases);
        }
        Ok(Self {
            phrases,
            timing,
            phrase_index: 0,
            char_index: 0,
            deleting: false,
        })
    }

    /// Advance by one character in the current direction.
    pub fn tick(&mut self) -> TypewriterStep {
        let len = self.current_phrase().chars().count();

        if len == 0 {
            self.advance_phrase();
            return TypewriterStep {
                text: String::new(),
                delay: self.timing.pause,
            };
        }

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            let text = self.visible_text();
            if self.char_index == 0 {
                self.advance_phrase();
                return TypewriterStep {
                    text,
                    delay: self.timing.pause,
                };
            }
            TypewriterStep {
                text,
                delay: self.timing.delete_char,
            }
        } else {
            self.char_index = (self.char_index + 1).min(len);
            let text = self.visible_text();
            if self.char_index == len {
                self.deleting = true;
                return TypewriterStep {
                    text,
                    delay: self.timing.hold,
                };
            }
            TypewriterStep {
                text,
                delay: self.timing.type_char,
            }
        }
    }

    pub fn visible_text(&self) -> String {
        self.current_phrase().chars().take(self.char_index).collect()
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.phrase_index]
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Phrase with the most characters; the last one wins a tie.
    pub fn longest_phrase(&self) -> &str {
        self.phrases
            .iter()
            .fold(&self.phrases[0], |best, p| {
                if p.chars().count() >= best.chars().count() {
                    p
                } else {
                    best
                }
            })
    }

    fn advance_phrase(&mut self) {
        self.deleting = false;
        self.char_index = 0;
        self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
    }
}

pub fn default_phrases() -> Vec<String> {
    ["Unified Flocks", "Insights", "Decisions", "Pipelines"]
        .into_iter()
        .map(String::from)
        .collect()
}
