// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests may unwrap freely.
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Drag-and-drop PDF intake and viewer-widget lifecycle for the browser.
//!
//! The user drops or picks a file, the [`intake::IntakeController`] checks
//! its media type and turns it into a [`handle::ResourceHandle`], and a
//! [`viewer::ViewerAdapter`] mounts an external viewer widget on it. Going
//! back to the upload prompt unmounts the widget and releases the handle.
//!
//! # Key entry points
//!
//! - [`intake::IntakeController`] - upload state, validation, drag feedback
//! - [`viewer::ViewerAdapter`] - mount/unmount reconciliation for a
//!   [`viewer::ViewerWidget`]
//! - [`options::Options`] - intake rules, viewer placement and UI text
//!
//! # Platforms
//!
//! The core is written against small traits ([`handle::HandleStore`],
//! [`intake::Notifier`], [`viewer::ViewerWidget`]). The `web` feature adds
//! their browser implementations in `web`, used by the `pdfdrop-ui` Dioxus
//! app.

pub mod error;
pub mod handle;
pub mod intake;
pub mod options;
pub mod viewer;
#[cfg(feature = "web")]
pub mod web;

#[cfg(test)]
mod testing;
