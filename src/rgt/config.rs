// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgentoken
// File: config.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

use std::path::PathBuf;

/// Output file written in the working directory unless overridden.
pub const DEFAULT_OUTPUT_FILE: &str = "tokenized_output.txt";

#[derive(clap::ValueEnum, Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ColorWhen {
	#[default]
	Auto,
	Always,
	Never,
}

impl ColorWhen {
	/// Installs the colour policy for all `colored` output.
	///
	/// `Auto` defers to `colored`, which honours `NO_COLOR`,
	/// `CLICOLOR` and `CLICOLOR_FORCE`.
	pub fn apply(self) {
		match self {
			ColorWhen::Auto => colored::control::unset_override(),
			ColorWhen::Always => colored::control::set_override(true),
			ColorWhen::Never => colored::control::set_override(false),
		}
	}
}

impl std::fmt::Display for ColorWhen {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		write!(f, "{:?}", self)
	}
}

#[derive(Clone, Debug)]
pub struct TokenizeConfig {
	/// Input path; prompted for when absent.
	pub input: Option<PathBuf>,
	pub output: PathBuf,
	pub quiet: bool,
	pub verbose: bool,
	pub color: ColorWhen,
}

impl Default for TokenizeConfig {
	fn default() -> Self {
		TokenizeConfig {
			input: None,
			output: PathBuf::from(DEFAULT_OUTPUT_FILE),
			quiet: false,
			verbose: false,
			color: ColorWhen::Auto,
		}
	}
}

impl TokenizeConfig {
	pub fn from_matches(matches: &clap::ArgMatches) -> Self {
		let defaults = TokenizeConfig::default();
		TokenizeConfig {
			input: matches.get_one::<PathBuf>("input").cloned(),
			output: matches
				.get_one::<PathBuf>("output")
				.cloned()
				.unwrap_or(defaults.output),
			quiet: matches.get_flag("quiet"),
			verbose: matches.get_flag("verbose"),
			color: matches
				.get_one::<ColorWhen>("color")
				.copied()
				.unwrap_or(defaults.color),
		}
	}
}
