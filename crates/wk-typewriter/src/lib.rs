//! Letter-by-letter text rendering with sound cues.
//!
//! A [`Typewriter`] writes text one character at a time with a pause between
//! characters, asking a [`CuePlayer`] to play a cue before the text starts and
//! between letters. Players range from silent to spawning an external audio
//! program per cue.

/// Sound cues and players.
pub mod cue;
/// Error types.
pub mod error;
/// The letter-by-letter renderer.
pub mod typewriter;

pub use cue::{BellPlayer, CommandPlayer, Cue, CuePlayer, SilentPlayer};
pub use error::{TypeError, TypeResult};
pub use typewriter::{Pacing, Typewriter};
