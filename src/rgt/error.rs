// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgentoken
// File: error.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

use std::io;
use std::path::{Path, PathBuf};

/// Failures surfaced by the tokenizer and the output writer.
#[derive(Debug, thiserror::Error)]
pub enum TokenizeError {
	#[error("The specified file does not exist.")]
	InputNotFound { path: PathBuf },

	#[error("{}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

impl TokenizeError {
	/// Classifies an I/O error raised while touching `path`.
	pub fn from_io(path: &Path, source: io::Error) -> Self {
		if source.kind() == io::ErrorKind::NotFound {
			TokenizeError::InputNotFound {
				path: path.to_path_buf(),
			}
		} else {
			TokenizeError::Io {
				path: path.to_path_buf(),
				source,
			}
		}
	}

	pub fn path(&self) -> &Path {
		match self {
			TokenizeError::InputNotFound { path }
			| TokenizeError::Io { path, .. } => path,
		}
	}

	pub fn is_not_found(&self) -> bool {
		matches!(self, TokenizeError::InputNotFound { .. })
	}
}

pub type Result<T> = std::result::Result<T, TokenizeError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn not_found_is_classified_separately() {
		let err = TokenizeError::from_io(
			Path::new("missing.txt"),
			io::Error::from(io::ErrorKind::NotFound),
		);
		assert!(err.is_not_found());
		assert_eq!(err.path(), Path::new("missing.txt"));
		assert_eq!(
			err.to_string(),
			"The specified file does not exist."
		);
	}

	#[test]
	fn other_failures_collapse_into_io() {
		let err = TokenizeError::from_io(
			Path::new("locked.txt"),
			io::Error::new(
				io::ErrorKind::PermissionDenied,
				"permission denied",
			),
		);
		assert!(!err.is_not_found());
		assert!(err.to_string().starts_with("locked.txt: "));
		assert!(err.to_string().contains("permission denied"));
	}
}
