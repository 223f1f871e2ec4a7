use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use wk_core::SentenceGenerator;
use wk_typewriter::{BellPlayer, CommandPlayer, Cue, CuePlayer, Pacing, SilentPlayer, Typewriter};

use crate::SentenceArgs;

/// Timing and sound flags of the `type` command.
pub struct Sound {
    pub delay_ms: u64,
    pub total: bool,
    pub bell: bool,
    pub player: Option<String>,
    pub begin_sound: Option<PathBuf>,
    pub letter_sound: Option<PathBuf>,
    pub wait_begin: bool,
    pub wait_letter: bool,
}

pub fn run(args: &SentenceArgs, text: Option<&str>, sound: Sound) -> Result<(), String> {
    let lines = match text {
        Some(text) => vec![text.to_string()],
        None => generate(args)?,
    };

    let pacing = if sound.total {
        Pacing::Total
    } else {
        Pacing::PerLetter
    };
    let typewriter = Typewriter::default()
        .with_delay(Duration::from_millis(sound.delay_ms), pacing)
        .with_wait(sound.wait_begin, sound.wait_letter);

    if sound.bell {
        type_lines(&typewriter.with_cues(true, false), &lines, &mut BellPlayer)
    } else if let Some(program) = sound.player {
        let typewriter =
            typewriter.with_cues(sound.begin_sound.is_some(), sound.letter_sound.is_some());
        let mut player = CommandPlayer::new(program);
        if let Some(path) = sound.begin_sound {
            player = player.with_sound(Cue::Begin, path);
        }
        if let Some(path) = sound.letter_sound {
            player = player.with_sound(Cue::Letter, path);
        }
        type_lines(&typewriter, &lines, &mut player)?;
        player.finish().map_err(|e| e.to_string())
    } else {
        type_lines(&typewriter, &lines, &mut SilentPlayer)
    }
}

fn generate(args: &SentenceArgs) -> Result<Vec<String>, String> {
    let generator = SentenceGenerator::new(super::load_grammar(args.grammar.as_deref())?);
    let options = super::sentence_options(args)?;
    let mut rng = super::make_rng(args.seed);

    (0..args.count)
        .map(|_| {
            generator
                .structured_sentence(&options, &mut rng)
                .map_err(|e| e.to_string())
        })
        .collect()
}

fn type_lines<P: CuePlayer>(
    typewriter: &Typewriter,
    lines: &[String],
    player: &mut P,
) -> Result<(), String> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        typewriter
            .write(line, &mut out, player)
            .map_err(|e| e.to_string())?;
        writeln!(out).map_err(|e| e.to_string())?;
    }
    Ok(())
}
