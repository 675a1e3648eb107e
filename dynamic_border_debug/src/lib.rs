// Copyright 2026 the Subduction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing and JSON snapshots for `dynamic_border` diagnostics.
//!
//! This crate provides development helpers around `dynamic_border_core`:
//!
//! - [`pretty::PrettyPrintSink`]: a
//!   [`TraceSink`](dynamic_border_core::trace::TraceSink) writing one
//!   human-readable line per view lifecycle event.
//! - [`snapshot::SnapshotPresenter`]: a
//!   [`Presenter`](dynamic_border_core::backend::Presenter) that keeps a JSON
//!   image of the evaluated layer tree, for golden files and inspection.

pub mod pretty;
pub mod snapshot;
