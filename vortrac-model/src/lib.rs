//!
//! # vortrac-model
//! The shared data model for VORTRAC: radar volumes, the gridded Cappi wind
//! field, per-volume vortex/simplex/pressure results, and run configuration.
//! Consumed read-only by `vortrac-process`'s analysis stages and persisted
//! to XML by `vortrac-cli`.
//!
//! A number of optional features are available:
//! - `uom`: Use the `uom` crate for type-safe units of measure.
//! - `serde`: Implement `serde::Serialize` and `serde::Deserialize` for all models.
//! - `chrono`: Use the `chrono` crate for date and time types.
//!

#![forbid(unsafe_code)]
#![warn(clippy::correctness)]
#![allow(clippy::too_many_arguments)]

pub mod cappi;
pub mod config;
pub mod data;
pub mod field;
pub mod meta;
pub mod result;
pub mod sentinel;
pub mod volume;
pub mod vortex;
