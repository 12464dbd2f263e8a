// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgentoken
// File: app.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

use crate::rgt::config::{ColorWhen, TokenizeConfig, DEFAULT_OUTPUT_FILE};
use crate::rgt::error::Result as TokenizeResult;
use crate::rgt::logger::init_logger;
use crate::rgt::tokenize::tokenize_data;
use crate::rgt::weak::emit_md5_warning;
use crate::rgt::writer::write_tokens;
use clap::{crate_name, Arg, ArgAction};
use clap_complete::{generate, Generator, Shell};
use colored::*;
use dialoguer::Input;
use std::error::Error;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const BANNER: &str = "Data Tokenization";
pub const INPUT_PROMPT: &str =
	"Enter the name of the text file to tokenize";

const HELP_TEMPLATE: &str = "{before-help}{name} {version}
Written by {author-with-newline}{about-with-newline}
Each line of INPUT is stripped of surrounding whitespace and replaced by its
MD5 digest (lowercase hex). Digests are written one per line, in input order.
{usage-heading} {usage}

{all-args}{after-help}
";

fn build_cli() -> clap::Command {
	clap::Command::new(crate_name!())
		.color(clap::ColorChoice::Never)
		.help_template(HELP_TEMPLATE)
		.bin_name("rgt")
		.version(clap::crate_version!())
		.author(clap::crate_authors!())
		.about("Tokenize a text file into per-line MD5 digests")
		.arg(
			Arg::new("input")
				.help("Text file to tokenize (prompted for when omitted)")
				.value_parser(clap::value_parser!(PathBuf)),
		)
		.arg(
			Arg::new("output")
				.short('o')
				.long("output")
				.value_parser(clap::value_parser!(PathBuf))
				.help("File receiving the tokens")
				.default_value(DEFAULT_OUTPUT_FILE),
		)
		.arg(
			Arg::new("quiet")
				.short('q')
				.long("quiet")
				.help("Suppress the weak algorithm warning")
				.action(ArgAction::SetTrue),
		)
		.arg(
			Arg::new("verbose")
				.short('v')
				.long("verbose")
				.help("Emit debug diagnostics on stderr")
				.action(ArgAction::SetTrue),
		)
		.arg(
			Arg::new("color")
				.long("color")
				.value_parser(clap::value_parser!(ColorWhen))
				.help("When to colorize console output")
				.default_value("auto"),
		)
		.arg(
			Arg::new("completions")
				.long("completions")
				.value_parser(clap::value_parser!(Shell))
				.help("Print a shell completion script and exit")
				.exclusive(true),
		)
}

/// Tokenizes `input` and writes the result to `output`.
///
/// The input is read completely before the output is opened; nothing is
/// written when reading fails. Returns the number of tokens written.
pub fn tokenize_to_file(
	input: &Path,
	output: &Path,
) -> TokenizeResult<usize> {
	let tokens = tokenize_data(input)?;
	write_tokens(output, &tokens)?;
	Ok(tokens.len())
}

fn prompt_input_path() -> Result<PathBuf, Box<dyn Error>> {
	if io::stdin().is_terminal() {
		let path = Input::<String>::new()
			.with_prompt(INPUT_PROMPT)
			.interact_text()?;
		return Ok(PathBuf::from(path));
	}
	print!("{}: ", INPUT_PROMPT);
	io::stdout().flush()?;
	let mut line = String::new();
	if io::stdin().lock().read_line(&mut line)? == 0 {
		return Err(Box::new(io::Error::new(
			io::ErrorKind::UnexpectedEof,
			"no input file name provided",
		)));
	}
	println!();
	let path = line.trim_end_matches(['\r', '\n']);
	Ok(PathBuf::from(path))
}

fn fail(message: impl std::fmt::Display) -> ! {
	eprintln!("{}", format!("Error: {}", message).red());
	std::process::exit(1);
}

pub fn run() -> Result<(), Box<dyn Error>> {
	let mut capp = build_cli();
	let m = capp.get_matches_mut();

	if let Some(shell) = m.get_one::<Shell>("completions").copied() {
		print_completions(shell, &mut capp);
		return Ok(());
	}

	let config = TokenizeConfig::from_matches(&m);
	config.color.apply();
	init_logger(config.verbose);
	debug!(?config, "resolved configuration");

	println!("{}", BANNER.green().bold());
	if !config.quiet {
		emit_md5_warning();
	}

	let input = match config.input.clone() {
		Some(path) => path,
		None => match prompt_input_path() {
			Ok(path) => path,
			Err(e) => fail(e),
		},
	};

	match tokenize_to_file(&input, &config.output) {
		Ok(count) => {
			info!(
				input = %input.display(),
				output = %config.output.display(),
				tokens = count,
				"tokenization finished"
			);
			println!(
				"Tokenization completed. The tokenized data has been saved to '{}'.",
				config.output.display()
			);
		}
		Err(e) => {
			debug!(
				path = %e.path().display(),
				not_found = e.is_not_found(),
				"tokenization failed"
			);
			fail(e)
		}
	}
	Ok(())
}

fn print_completions<G: Generator>(gen: G, cmd: &mut clap::Command) {
	let bin_name =
		cmd.get_bin_name().unwrap_or(cmd.get_name()).to_string();
	generate(gen, cmd, bin_name, &mut std::io::stdout());
}
