use wk_core::{TextOptions, unstructured_random};

pub fn run(
    min: u64,
    max: u64,
    letters: Option<&str>,
    seed: Option<u64>,
    count: usize,
) -> Result<(), String> {
    let mut options = TextOptions::default().with_length(min, max);
    if let Some(letters) = letters {
        options = options.with_letters(letters.chars());
    }
    let mut rng = super::make_rng(seed);

    for _ in 0..count {
        let text = unstructured_random(&options, &mut rng).map_err(|e| e.to_string())?;
        println!("{text}");
    }

    Ok(())
}
