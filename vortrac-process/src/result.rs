//!
//! Contains the Result and Error types for the VORTRAC analysis pipeline.
//!

use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

/// The error kinds of spec §7, one per failure mode the pipeline
/// distinguishes. Ring/layer-scoped kinds (`IllConditioned`,
/// `InsufficientData`) are caught by the stage that produces them and
/// folded into a sentinel record; they are defined here because they still
/// need a named type to log and test against, not because they propagate
/// to the controller.
#[derive(ThisError, Debug)]
pub enum Error {
    /// Missing or malformed configuration field; fatal at run start.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Volume time outside the 6h forward / 0s backward acceptance window.
    #[error("volume time {volume_epoch_millis} is out of range of observation {obs_epoch_millis}")]
    TimeOutOfRange {
        volume_epoch_millis: i64,
        obs_epoch_millis: i64,
    },

    /// Candidate center farther than any sweep's unambiguous range.
    #[error("center is beyond radar range; estimated time to range {eta_seconds:?}s")]
    BeyondRadar { eta_seconds: Option<f32> },

    /// Simplex result drifts 75-150 km from the extrapolated estimate.
    #[error("center drifted {distance_km:.1}km from extrapolated estimate (warning threshold)")]
    DistanceWarning { distance_km: f32 },

    /// Simplex result drifts more than 150 km from the extrapolated
    /// estimate.
    #[error("center drifted {distance_km:.1}km from extrapolated estimate (failure threshold)")]
    DistanceError { distance_km: f32 },

    /// Zero converging centers across all rings at all levels.
    #[error("no ring converged at any level")]
    NoConvergence,

    /// LLS normal-equations matrix was singular.
    #[error("ill-conditioned least-squares system (pivot below threshold)")]
    IllConditioned,

    /// Fewer samples than required for a fit.
    #[error("insufficient data: needed {required}, had {available}")]
    InsufficientData { required: usize, available: usize },

    /// User-requested cancellation observed at a suspension point.
    #[error("analysis aborted")]
    Aborted,
}
