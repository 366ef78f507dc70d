use rs_gram_core::feature::feature_input::FeatureInput;
use rs_gram_core::feature::featurizer::FeatureTokens;
use rs_gram_core::feature::gram_sequence::GramSequence;
use rs_gram_core::feature::padding::PaddingMode;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Start from the default configuration:
    // window size 3, no guards, '~' filler, '#' separator
    let mut input = FeatureInput::new();

    // Number of characters per gram
    input.set_window_size(3)?;

    // Guards mark the start and end of each string, so the outermost
    // grams encode boundary context
    input.use_guards = true;
    input.set_guard_char("$")?;

    // Attempting to set a window size below 2
    match input.set_window_size(1) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("Window size 1 is invalid, must be at least 2"),
    }

    // Attempting to set a multi-character guard
    match input.set_guard_char("ab") {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("Guard \"ab\" is invalid, must be a single character"),
    }

    // List the grams of a guarded string
    let grams = GramSequence::new("cat", input.window_size(), &input.padding_mode())?;
    println!("Grams of 'cat': {}", grams.collect::<Vec<_>>().join(" "));

    // Feature tokens pair each gram with its occurrence ordinal
    let feats = FeatureTokens::with_input("cat", &input)?;
    println!("Features of 'cat': {}", feats.collect::<Vec<_>>().join(" "));

    // Without guards, strings shorter than the window are right-padded
    // with the null character so one gram is always produced
    input.use_guards = false;
    let feats = FeatureTokens::with_input("a", &input)?;
    println!("Features of 'a': {}", feats.collect::<Vec<_>>().join(" "));

    // Repeated grams get distinct ordinals, so every occurrence maps to
    // its own feature key
    let feats = FeatureTokens::new("aaaa", 2, &PaddingMode::None, '#')?;
    println!("Features of 'aaaa': {}", feats.collect::<Vec<_>>().join(" "));

    // Featurization is deterministic: the same input always produces
    // byte-identical output
    let first: Vec<String> = FeatureTokens::with_input("banana", &input)?.collect();
    let second: Vec<String> = FeatureTokens::with_input("banana", &input)?.collect();
    println!("Deterministic: {}", first == second);

    Ok(())
}
