mod cli;

use std::io::{self, BufRead, Write};

use caret_engine::EditorState;
use clap::Parser;
use cli::Cli;
use tracing::info;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let mut state = EditorState::new(cli.text.as_deref().unwrap_or(""));
	info!(chars = state.len_chars(), "editor ready");

	let stdin = io::stdin();
	let mut stdout = io::stdout().lock();
	print_state(&mut stdout, &state)?;

	for line in stdin.lock().lines() {
		let line = line?;
		state = state.apply(&line);
		print_state(&mut stdout, &state)?;
	}

	Ok(())
}

/// Renders one state line: mode label, buffer with the highlight bracketed,
/// and the raw selection numbers.
fn print_state(out: &mut impl Write, state: &EditorState) -> io::Result<()> {
	let mut rendered = String::new();
	for segment in state.segments() {
		if segment.selected {
			rendered.push('[');
			rendered.push_str(&segment.text);
			rendered.push(']');
		} else {
			rendered.push_str(&segment.text);
		}
	}
	writeln!(
		out,
		"{:6} {} (sel {}+{})",
		state.mode().name(),
		rendered,
		state.selection.start,
		state.selection.length,
	)
}

fn setup_tracing(verbose: bool) {
	let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
	tracing_subscriber::fmt()
		.with_max_level(level)
		.with_writer(io::stderr)
		.init();
}
