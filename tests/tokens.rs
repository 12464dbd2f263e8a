// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgentoken
// File: tokens.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

use hex_literal::hex;
use md5::{Digest, Md5};
use rustgentoken::rgt::token::TOKEN_HEX_LEN;
use rustgentoken::{generate_token, tokenize_data, write_tokens, Token};
use std::fs;

const PHRASE: &str = "Jeder wackere Bayer vertilgt bequem zwo Pfund Kalbshaxen.";

#[test]
fn lib_md5_matches_token() {
	let mut hasher = Md5::new();
	hasher.update(PHRASE.as_bytes());
	let result = hasher.finalize();
	assert_eq!(
		generate_token(PHRASE).as_str(),
		hex::encode(result)
	);
	assert_eq!(
		generate_token("hello").as_str(),
		hex::encode(hex!("5d41402abc4b2a76b9719d911017c592"))
	);
}

#[test]
fn every_line_becomes_one_token() -> Result<(), Box<dyn std::error::Error>>
{
	let dir = tempfile::tempdir()?;
	let input = dir.path().join("input.txt");
	let lines: Vec<String> =
		(0..250).map(|idx| format!("  line-{idx}\t")).collect();
	fs::write(&input, lines.join("\r\n"))?;

	let tokens = tokenize_data(&input)?;
	assert_eq!(tokens.len(), lines.len());
	for (token, line) in tokens.iter().zip(&lines) {
		assert!(Token::is_well_formed(token.as_str()));
		assert_eq!(token.as_str().len(), TOKEN_HEX_LEN);
		assert_eq!(*token, generate_token(line.trim()));
	}

	let output = dir.path().join("tokens.txt");
	write_tokens(&output, &tokens)?;
	let written = fs::read_to_string(&output)?;
	assert_eq!(written.lines().count(), lines.len());
	assert!(!written.ends_with('\n'));
	Ok(())
}
