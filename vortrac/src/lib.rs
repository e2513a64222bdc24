#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::correctness)]

//! # VORTRAC
//!
//! Facade crate unifying the `vortrac-model`, `vortrac-decode`,
//! `vortrac-data`, `vortrac-render`, and `vortrac-process` crates'
//! error types behind a single [`result::Error`].
//!

pub mod result;
