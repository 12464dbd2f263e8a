// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgentoken
// File: tokenize.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

//! Line splitting and per-line tokenization of text input.

use crate::rgt::error::{Result, TokenizeError};
use crate::rgt::token::{generate_token, Token};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Iterator over the lines of a text buffer.
///
/// `\n`, `\r\n` and a lone `\r` each end a line. A trailing terminator
/// does not yield an extra empty line.
#[derive(Clone, Debug)]
pub struct Lines<'a> {
	rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<Self::Item> {
		if self.rest.is_empty() {
			return None;
		}
		match self.rest.find(['\r', '\n']) {
			Some(idx) => {
				let line = &self.rest[..idx];
				let skip = if self.rest[idx..].starts_with("\r\n") {
					2
				} else {
					1
				};
				self.rest = &self.rest[idx + skip..];
				Some(line)
			}
			None => {
				let line = self.rest;
				self.rest = "";
				Some(line)
			}
		}
	}
}

pub fn split_lines(text: &str) -> Lines<'_> {
	Lines { rest: text }
}

/// Unicode whitespace plus the ASCII separators U+001C..U+001F.
fn is_strippable(c: char) -> bool {
	c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

pub fn strip_line(line: &str) -> &str {
	line.trim_matches(is_strippable)
}

/// Tokenizes every line of `text`, stripping surrounding whitespace first.
pub fn tokenize_str(text: &str) -> Vec<Token> {
	split_lines(text)
		.map(|line| generate_token(strip_line(line)))
		.collect()
}

/// Reads `input` as UTF-8 text and returns one token per line.
///
/// A missing file yields [`TokenizeError::InputNotFound`]; an empty file
/// yields an empty sequence.
pub fn tokenize_data<P: AsRef<Path>>(input: P) -> Result<Vec<Token>> {
	let input = input.as_ref();
	debug!(path = %input.display(), "reading input");
	let text = fs::read_to_string(input)
		.map_err(|e| TokenizeError::from_io(input, e))?;
	let tokens = tokenize_str(&text);
	debug!(lines = tokens.len(), "tokenized input");
	Ok(tokens)
}
