use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use dart_filter::rules::Pipeline;
use dart_filter::source::{read_source, write_output};

#[derive(Parser)]
#[command(name = "dart-filter")]
#[command(
	author,
	version,
	about = "Doxygen input filter that rewrites Dart source into C++-like syntax"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	/// Dart source file to filter
	#[arg(value_name = "FILE", required_unless_present = "list_rules")]
	file: Option<PathBuf>,

	/// Print the rule pipeline and exit
	#[arg(long)]
	list_rules: bool,

	/// Report on stderr how many replacements each rule made
	#[arg(short, long)]
	verbose: bool,
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	if cli.list_rules {
		return match handle_list_rules() {
			Ok(()) => ExitCode::SUCCESS,
			Err(e) => {
				eprintln!("error: {e:#}");
				ExitCode::FAILURE
			}
		};
	}

	let Some(path) = cli.file else {
		Cli::command()
			.error(
				ErrorKind::MissingRequiredArgument,
				"the input file <FILE> is required",
			)
			.exit();
	};

	match handle_filter(&path, cli.verbose) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("Error processing file {}: {e:#}", path.display());
			ExitCode::FAILURE
		}
	}
}

fn handle_filter(path: &Path, verbose: bool) -> Result<()> {
	let pipeline = Pipeline::builtin().context("Failed to compile built-in rules")?;
	let content = read_source(path)?;

	let filtered = if verbose {
		let (filtered, hits) = pipeline.apply_with_report(&content);
		for hit in hits.iter().filter(|hit| hit.replacements > 0) {
			eprintln!("rule {}: {} replacement(s)", hit.name, hit.replacements);
		}
		filtered
	} else {
		pipeline.apply(&content)
	};

	let mut stdout = std::io::stdout().lock();
	write_output(&mut stdout, &filtered)?;
	Ok(())
}

fn handle_list_rules() -> Result<()> {
	let pipeline = Pipeline::builtin().context("Failed to compile built-in rules")?;

	for (i, rule) in pipeline.rules().iter().enumerate() {
		println!("{:>2}. {} [{}]", i + 1, rule.name, rule.category);
		println!("    pattern:     {}", rule.substitution.pattern.as_str());
		println!("    replacement: {}", rule.substitution.replacement);
	}

	Ok(())
}
