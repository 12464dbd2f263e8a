// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgentoken
// File: lib.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

pub mod rgt {
	pub mod app;
	pub mod config;
	pub mod error;
	pub mod logger;
	pub mod token;
	pub mod tokenize;
	pub mod weak;
	pub mod writer;
}

pub use rgt::error::{Result, TokenizeError};
pub use rgt::token::{generate_token, Token};
pub use rgt::tokenize::tokenize_data;
pub use rgt::writer::write_tokens;
