// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgentoken
// File: token.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

use digest::Digest;
use md5::Md5;
use std::fmt;

/// Length of a token in hexadecimal characters.
pub const TOKEN_HEX_LEN: usize = 32;

/// Lowercase hexadecimal MD5 digest of a single line.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token(String);

impl Token {
	pub fn from_line(line: &str) -> Self {
		let digest = Md5::digest(line.as_bytes());
		Token(hex::encode(digest))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// True when `candidate` has the shape of a token.
	pub fn is_well_formed(candidate: &str) -> bool {
		candidate.len() == TOKEN_HEX_LEN
			&& candidate
				.bytes()
				.all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for Token {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

pub fn generate_token(line: &str) -> Token {
	Token::from_line(line)
}
