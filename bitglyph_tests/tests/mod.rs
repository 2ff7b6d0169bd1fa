// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `bitglyph`.
//!
//! - The `util` module contains shared utility functions that are needed by different
//!   test methods.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that shared utilities are compiled once.
//! - Put the "topic" of a test at the start of its name (`hex_quad_missing_glyph`, not
//!   `missing_glyph_hex_quad`). Images from failing pixel comparisons are named after the
//!   test and written to `bitglyph_tests/current/`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod atlas;
#[macro_use]
mod util;
