// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgentoken
// File: logger.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

use tracing_subscriber::{
	layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Diagnostics go to stderr so stdout stays limited to user messages.
/// `RUST_LOG` takes precedence over `verbose`. Call once per process.
pub fn init_logger(verbose: bool) {
	let fallback = if verbose {
		"rustgentoken=debug,warn"
	} else {
		"warn"
	};
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(fallback));

	tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_writer(std::io::stderr)
				.with_target(false)
				.with_thread_ids(false)
				.with_file(false)
				.with_line_number(false)
				.compact(),
		)
		.init();
}
