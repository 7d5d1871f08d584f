//! Extracts the swc plugin version compatibility manifest.
//!
//! The swc docs list, for every `swc_core` range, the `@swc/core` and
//! framework versions built against it. This crate fetches that page,
//! turns each section into a [`manifest::VersionSnapshot`] and writes the
//! result as a JSON array.

pub mod config;
pub mod logging;
pub mod manifest;
pub mod source;
pub mod update;
