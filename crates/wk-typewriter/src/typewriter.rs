//! Writes text one character at a time.

use std::io::Write;
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::cue::{Cue, CuePlayer};
use crate::error::TypeResult;

/// How the configured delay is spread over the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pacing {
    /// Pause for the full delay after every letter but the last.
    #[default]
    PerLetter,
    /// The delay is the time for the whole text, split evenly per letter.
    Total,
}

/// Letter-by-letter renderer.
#[derive(Debug, Clone)]
pub struct Typewriter {
    /// Pause between letters, or for the whole text with [`Pacing::Total`].
    pub delay: Duration,
    /// How `delay` is applied.
    pub pacing: Pacing,
    /// Play [`Cue::Begin`] before writing.
    pub begin_cue: bool,
    /// Play [`Cue::Letter`] between letters.
    pub letter_cue: bool,
    /// Block on the begin cue until it finishes playing.
    pub begin_wait: bool,
    /// Block on each letter cue until it finishes playing.
    pub letter_wait: bool,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(4),
            pacing: Pacing::PerLetter,
            begin_cue: false,
            letter_cue: false,
            begin_wait: false,
            letter_wait: false,
        }
    }
}

impl Typewriter {
    /// Set the delay and how it is applied.
    pub fn with_delay(mut self, delay: Duration, pacing: Pacing) -> Self {
        self.delay = delay;
        self.pacing = pacing;
        self
    }

    /// Choose which cues to play.
    pub fn with_cues(mut self, begin: bool, letters: bool) -> Self {
        self.begin_cue = begin;
        self.letter_cue = letters;
        self
    }

    /// Choose which cues block until they finish.
    pub fn with_wait(mut self, begin: bool, letters: bool) -> Self {
        self.begin_wait = begin;
        self.letter_wait = letters;
        self
    }

    /// The pause after each letter of a text with `chars` characters.
    pub fn letter_delay(&self, chars: usize) -> Duration {
        match self.pacing {
            Pacing::PerLetter => self.delay,
            Pacing::Total if chars == 0 => Duration::ZERO,
            Pacing::Total => self.delay / u32::try_from(chars).unwrap_or(u32::MAX),
        }
    }

    /// Write `text` to `out`, flushing after each character.
    pub fn write<W, P>(&self, text: &str, out: &mut W, player: &mut P) -> TypeResult<()>
    where
        W: Write + ?Sized,
        P: CuePlayer + ?Sized,
    {
        let chars = text.chars().count();
        let pause = self.letter_delay(chars);
        debug!(chars, ?pause, "typing");

        if self.begin_cue {
            player.play(Cue::Begin, self.begin_wait)?;
        }

        for (i, c) in text.chars().enumerate() {
            write!(out, "{c}")?;
            out.flush()?;
            if i + 1 == chars {
                break;
            }
            if self.letter_cue {
                player.play(Cue::Letter, self.letter_wait)?;
            }
            if !pause.is_zero() {
                thread::sleep(pause);
            }
        }
        Ok(())
    }
}
