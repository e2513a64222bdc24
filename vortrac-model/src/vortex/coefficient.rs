//! GBVTD Fourier coefficients.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed set of GBVTD/mean-wind Fourier coefficient parameters (spec
/// §9 "Reflection / dynamic typing"). Wavenumber-dependent variants carry
/// their wavenumber as associated data rather than as flat per-wavenumber
/// variants, following `original_source/trunk/DataObjects/Coefficient.h`'s
/// separate `int wavenumber` field alongside its string parameter tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoefficientKind {
    /// Mean tangential wind (wavenumber 0).
    VtC0,
    /// Wavenumber-k cosine tangential wind amplitude.
    VtCk(u8),
    /// Wavenumber-k sine tangential wind amplitude.
    VtSk(u8),
    /// Mean radial wind (wavenumber 0).
    VrC0,
    /// Wavenumber-k cosine radial wind amplitude.
    VrCk(u8),
    /// Wavenumber-k sine radial wind amplitude.
    VrSk(u8),
    /// Mean-wind-mode mean tangential wind.
    VmC0,
    /// Mean-wind-mode wavenumber-k cosine amplitude.
    VmCk(u8),
    /// Mean-wind-mode wavenumber-k sine amplitude.
    VmSk(u8),
}

impl CoefficientKind {
    /// A short machine-stable tag, used for XML persistence.
    pub fn tag(&self) -> String {
        match self {
            CoefficientKind::VtC0 => "VTC0".to_string(),
            CoefficientKind::VtCk(k) => format!("VTC{k}"),
            CoefficientKind::VtSk(k) => format!("VTS{k}"),
            CoefficientKind::VrC0 => "VRC0".to_string(),
            CoefficientKind::VrCk(k) => format!("VRC{k}"),
            CoefficientKind::VrSk(k) => format!("VRS{k}"),
            CoefficientKind::VmC0 => "VMC0".to_string(),
            CoefficientKind::VmCk(k) => format!("VMC{k}"),
            CoefficientKind::VmSk(k) => format!("VMS{k}"),
        }
    }

    /// Parses a tag produced by [`CoefficientKind::tag`].
    pub fn parse(tag: &str) -> Option<Self> {
        let (family, rest) = tag.split_at(3);
        let wavenumber: u8 = rest.parse().ok()?;
        match (family, wavenumber) {
            ("VTC", 0) => Some(CoefficientKind::VtC0),
            ("VTC", k) => Some(CoefficientKind::VtCk(k)),
            ("VTS", k) => Some(CoefficientKind::VtSk(k)),
            ("VRC", 0) => Some(CoefficientKind::VrC0),
            ("VRC", k) => Some(CoefficientKind::VrCk(k)),
            ("VRS", k) => Some(CoefficientKind::VrSk(k)),
            ("VMC", 0) => Some(CoefficientKind::VmC0),
            ("VMC", k) => Some(CoefficientKind::VmCk(k)),
            ("VMS", k) => Some(CoefficientKind::VmSk(k)),
            _ => None,
        }
    }
}

/// A single GBVTD coefficient at a given level and ring radius.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coefficient {
    pub level: usize,
    pub radius_km: f32,
    pub parameter: CoefficientKind,
    pub value: f32,
}

impl Coefficient {
    /// Creates a new coefficient.
    pub fn new(level: usize, radius_km: f32, parameter: CoefficientKind, value: f32) -> Self {
        Self {
            level,
            radius_km,
            parameter,
            value,
        }
    }
}
