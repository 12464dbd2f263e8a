// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgentoken
// File: writer.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

use crate::rgt::error::{Result, TokenizeError};
use crate::rgt::token::Token;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};
use tracing::debug;

/// Newline-joined token text without a trailing newline.
pub fn render_tokens(tokens: &[Token]) -> String {
	tokens
		.iter()
		.map(Token::as_str)
		.collect::<Vec<_>>()
		.join("\n")
}

/// Replaces the contents of `output` with the rendered tokens.
///
/// Data is staged in a sibling temporary file and renamed into place, so
/// a failure leaves any previous file untouched. An existing target keeps
/// its permissions and a symlinked target is written through the link; a
/// new target gets `0o666` masked by the umask.
pub fn write_tokens<P: AsRef<Path>>(
	output: P,
	tokens: &[Token],
) -> Result<()> {
	let output = output.as_ref();
	let io_err = |source: io::Error| TokenizeError::Io {
		path: output.to_path_buf(),
		source,
	};
	let target = resolve_target(output).map_err(io_err)?;
	let dir = match target.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};
	let existing = fs::metadata(&target).ok();
	let mut staged =
		stage_in(dir, existing.as_ref()).map_err(io_err)?;
	staged
		.write_all(render_tokens(tokens).as_bytes())
		.map_err(io_err)?;
	staged.flush().map_err(io_err)?;
	staged.persist(&target).map_err(|e| io_err(e.error))?;
	debug!(
		path = %output.display(),
		target = %target.display(),
		tokens = tokens.len(),
		"wrote tokens"
	);
	Ok(())
}

fn resolve_target(output: &Path) -> io::Result<PathBuf> {
	match fs::symlink_metadata(output) {
		Ok(meta) if meta.file_type().is_symlink() => {
			match fs::canonicalize(output) {
				Ok(resolved) => Ok(resolved),
				// dangling link: create the file it points at
				Err(e) if e.kind() == io::ErrorKind::NotFound => {
					let link = fs::read_link(output)?;
					Ok(match output.parent() {
						Some(parent) => parent.join(link),
						None => link,
					})
				}
				Err(e) => Err(e),
			}
		}
		_ => Ok(output.to_path_buf()),
	}
}

fn stage_in(
	dir: &Path,
	existing: Option<&fs::Metadata>,
) -> io::Result<NamedTempFile> {
	let mut builder = Builder::new();
	builder.prefix(".rgt-");
	#[cfg(unix)]
	{
		use std::os::unix::fs::PermissionsExt;
		builder.permissions(fs::Permissions::from_mode(0o666));
	}
	let staged = builder.tempfile_in(dir)?;
	if let Some(meta) = existing {
		staged.as_file().set_permissions(meta.permissions())?;
	}
	Ok(staged)
}
