use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use log::debug;

use rs_gram_core::feature::feature_input::FeatureInput;
use rs_gram_core::feature::featurizer::FeatureTokens;
use rs_gram_core::feature::{DEFAULT_GUARD_CHAR, DEFAULT_NULL_CHAR, DEFAULT_WINDOW_SIZE};

/// Command-line flags for the featurizer.
///
/// One string per input line; every output line is the original string
/// followed by its tab-separated feature tokens.
#[derive(Parser)]
#[command(name = "rs-gram")]
#[command(about = "Generate string n-gram features")]
#[command(version)]
struct Cli {
	/// Input file, one string per line (defaults to stdin)
	#[arg(short, long)]
	input: Option<PathBuf>,

	/// Output file (defaults to stdout)
	#[arg(short, long)]
	output: Option<PathBuf>,

	/// Number of characters per gram
	#[arg(short = 'n', long, default_value_t = DEFAULT_WINDOW_SIZE)]
	ngram: usize,

	/// Filler for strings shorter than the gram size
	#[arg(short = 'u', long, default_value_t = DEFAULT_NULL_CHAR.to_string())]
	null_char: String,

	/// Add boundary guards around each string
	#[arg(short, long)]
	guards: bool,

	/// Boundary marker used with --guards
	#[arg(short = 'r', long, default_value_t = DEFAULT_GUARD_CHAR.to_string())]
	guard_char: String,
}

/// Reads the whole input and returns its lines, terminators stripped.
///
/// Splits on `\n` / `\r\n`.
fn read_lines(input: Option<&PathBuf>) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	match input {
		Some(path) => {
			File::open(path)?.read_to_string(&mut contents)?;
		}
		None => {
			io::stdin().read_to_string(&mut contents)?;
		}
	}
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Opens the output sink, stdout when no path is given.
fn open_output(output: Option<&PathBuf>) -> io::Result<Box<dyn Write>> {
	Ok(match output {
		Some(path) => Box::new(File::create(path)?),
		None => Box::new(io::stdout()),
	})
}

/// Entry point of the featurizer.
///
/// # Behavior
/// - Validates the configuration before touching any input, so a bad
///   flag aborts the run with no partial output.
/// - Writes one output line per input line: the original string, a tab,
///   and the feature tokens joined by tabs.
fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();
	let cli = Cli::parse();

	let mut input = FeatureInput::new();
	input.use_guards = cli.guards;
	input.set_window_size(cli.ngram)?;
	input.set_null_char(&cli.null_char)?;
	input.set_guard_char(&cli.guard_char)?;

	let lines = read_lines(cli.input.as_ref())?;
	debug!("featurizing {} lines with window size {}", lines.len(), input.window_size());

	let mut out = BufWriter::new(open_output(cli.output.as_ref())?);
	for line in &lines {
		let feats: Vec<String> = FeatureTokens::with_input(line, &input)?.collect();
		writeln!(out, "{}\t{}", line, feats.join("\t"))?;
	}
	out.flush()?;

	Ok(())
}
