use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "caret")]
#[command(about = "A modal command-string editing shell")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Initial buffer contents (starts empty if omitted)
	pub text: Option<String>,

	/// Log command dispatch details to stderr
	#[arg(long, short = 'v')]
	pub verbose: bool,
}
