//!
//! # vortrac-process
//! The VORTRAC analytical core: initial-guess extrapolation, simplex-based
//! center finding, cross-volume center selection, the GBVTD harmonic ring
//! solver, HVVP environmental wind estimation, and gradient-wind pressure
//! integration. Operates on the gridded wind fields and configuration types
//! from `vortrac-model`; owns no I/O.
//!

#![forbid(unsafe_code)]
#![warn(clippy::correctness)]
#![allow(clippy::too_many_arguments)]

pub mod cappi_builder;
pub mod center_chooser;
pub mod center_finder;
pub mod gbvtd;
pub mod hvvp;
pub mod matrix;
pub mod preprocess;
pub mod result;
pub mod simplex;
pub mod vortex_synth;
