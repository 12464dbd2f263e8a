// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgentoken
// Module: token digest warning
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Tokens stay MD5 so existing outputs remain comparable, but a token is a
//! lookup key, not a collision-resistant fingerprint. Every run says so on
//! stderr unless `--quiet` is given.

use colored::Colorize;

const NIST_REFERENCE: &str =
	"https://doi.org/10.6028/NIST.SP.800-131Ar2";
const BSI_REFERENCE: &str =
    "https://www.bsi.bund.de/SharedDocs/Downloads/EN/BSI/Publications/TechGuidelines/TG02102/BSI-TR-02102-1.pdf";

pub const MD5_HEADLINE: &str =
	"WARNING: tokens are MD5 digests, a weak algorithm (collisions known).";
pub const MD5_ADVICE: &str =
	"Distinct lines can be crafted to share a token; do not use tokens to prove integrity or to hide sensitive text.";

/// Single-line banner naming MD5 and what tokens must not be used for.
pub fn md5_warning() -> String {
	format!("⚠ {} {}", MD5_HEADLINE, MD5_ADVICE)
}

pub fn references_line() -> String {
	format!("References: {} | {}", NIST_REFERENCE, BSI_REFERENCE)
}

pub fn emit_md5_warning() {
	eprintln!("{}", md5_warning().yellow().bold());
	eprintln!("{}", references_line().yellow());
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn banner_names_md5_and_its_limits() {
		let banner = md5_warning();
		assert!(banner.contains("MD5"));
		assert!(banner.contains("weak algorithm"));
		assert!(banner.contains("integrity"));
		assert_eq!(banner.lines().count(), 1);
	}

	#[test]
	fn references_cite_nist_and_bsi() {
		let line = references_line();
		assert!(line.starts_with("References: "));
		assert!(line.contains("NIST.SP.800-131A"));
		assert!(line.contains("bsi.bund.de"));
	}
}
