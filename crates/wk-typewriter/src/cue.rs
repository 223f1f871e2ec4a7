//! Sound cues and the players that make them audible.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

use tracing::{debug, warn};

use crate::error::{TypeError, TypeResult};

/// A sound event requested by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cue {
    /// Played once before the text starts.
    Begin,
    /// Played between letters.
    Letter,
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Begin => write!(f, "begin"),
            Self::Letter => write!(f, "letter"),
        }
    }
}

/// Something that can play a cue.
pub trait CuePlayer {
    /// Play `cue`. With `wait`, return only once playback has finished.
    fn play(&mut self, cue: Cue, wait: bool) -> TypeResult<()>;
}

/// Plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentPlayer;

impl CuePlayer for SilentPlayer {
    fn play(&mut self, _cue: Cue, _wait: bool) -> TypeResult<()> {
        Ok(())
    }
}

/// Rings the terminal bell on stderr for every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct BellPlayer;

impl CuePlayer for BellPlayer {
    fn play(&mut self, _cue: Cue, _wait: bool) -> TypeResult<()> {
        let mut stderr = std::io::stderr();
        stderr.write_all(b"\x07")?;
        stderr.flush()?;
        Ok(())
    }
}

/// Plays sound files by running an external program, e.g. `aplay` or
/// `afplay`, with the cue's file as the last argument.
///
/// Cues without a configured file are skipped. Without `wait` the process
/// runs in the background; finished processes are reaped on the next play,
/// and [`CommandPlayer::finish`] waits for the rest.
#[derive(Debug)]
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
    sounds: BTreeMap<Cue, PathBuf>,
    running: Vec<Child>,
}

impl CommandPlayer {
    /// Create a player that runs `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            sounds: BTreeMap::new(),
            running: Vec::new(),
        }
    }

    /// Pass an extra argument before the sound file.
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Play `path` for `cue`.
    pub fn with_sound(mut self, cue: Cue, path: impl Into<PathBuf>) -> Self {
        self.sounds.insert(cue, path.into());
        self
    }

    /// Number of background playbacks not yet reaped.
    pub fn running(&self) -> usize {
        self.running.len()
    }

    /// Wait for every background playback to finish.
    pub fn finish(&mut self) -> TypeResult<()> {
        for mut child in self.running.drain(..) {
            child.wait()?;
        }
        Ok(())
    }

    fn reap(&mut self) {
        self.running.retain_mut(|child| match child.try_wait() {
            Ok(Some(_)) => false,
            Ok(None) => true,
            Err(e) => {
                warn!(error = %e, "could not poll sound player");
                false
            }
        });
    }
}

impl CuePlayer for CommandPlayer {
    fn play(&mut self, cue: Cue, wait: bool) -> TypeResult<()> {
        self.reap();
        let Some(path) = self.sounds.get(&cue) else {
            return Ok(());
        };

        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        debug!(%cue, program = %self.program, path = %path.display(), wait, "playing cue");

        if wait {
            let status = command.status()?;
            if !status.success() {
                return Err(TypeError::Playback(format!(
                    "{} exited with {status}",
                    self.program
                )));
            }
        } else {
            let child = command.spawn()?;
            self.running.push(child);
        }
        Ok(())
    }
}
