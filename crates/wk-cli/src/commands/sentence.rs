use wk_core::SentenceGenerator;

use crate::SentenceArgs;

pub fn run(args: &SentenceArgs, json: bool) -> Result<(), String> {
    let generator = SentenceGenerator::new(super::load_grammar(args.grammar.as_deref())?);
    let options = super::sentence_options(args)?;
    let mut rng = super::make_rng(args.seed);

    for _ in 0..args.count {
        let sentence = generator
            .compose(&options, &mut rng)
            .map_err(|e| e.to_string())?;
        if json {
            let line = serde_json::to_string(&sentence).map_err(|e| e.to_string())?;
            println!("{line}");
        } else {
            println!("{sentence}");
        }
    }

    Ok(())
}
