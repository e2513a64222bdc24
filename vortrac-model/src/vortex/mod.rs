//! Per-volume analysis results: [`VortexData`]/[`VortexList`],
//! [`SimplexData`]/[`SimplexList`], [`PressureData`]/[`PressureList`], and
//! [`Coefficient`].
//!
//! Field layout and lookup semantics are grounded on
//! `original_source/src/DataObjects/VortexData.cpp` and
//! `original_source/trunk/DataObjects/Coefficient.h`.

mod coefficient;
mod pressure;
mod simplex;
mod vortex_data;
mod vortex_list;

pub use coefficient::{Coefficient, CoefficientKind};
pub use pressure::{PressureData, PressureList, MAX_PRESSURE_OBSERVATIONS};
pub use simplex::{SimplexCandidate, SimplexData, SimplexList};
pub use vortex_data::{LevelData, VortexData, MAX_LEVELS, MAX_RADII, MAX_WAVENUM};
pub use vortex_list::VortexList;

/// Enforces spec §3's "VortexList and SimplexList share a one-to-one time
/// key" invariant after a reload: drops any `VortexData` without a matching
/// `SimplexData` timestamp and vice versa, then trims the most recent entry
/// from both as a safety margin against a torn write at either file (spec
/// §6).
pub fn reconcile(vortex: &mut VortexList, simplex: &mut SimplexList) {
    let vortex_times = vortex.times();
    let simplex_times = simplex.times();

    let shared: std::collections::HashSet<i64> =
        vortex_times.intersection(&simplex_times).copied().collect();

    vortex.retain_times(&shared);
    simplex.retain_times(&shared);

    vortex.pop_most_recent();
    simplex.pop_most_recent();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconcile_drops_orphans_and_trims_latest() {
        let mut vortex = VortexList::new();
        vortex.append(VortexData::new(100));
        vortex.append(VortexData::new(200));
        vortex.append(VortexData::new(300));

        let mut simplex = SimplexList::new();
        simplex.append(SimplexData::new(100));
        simplex.append(SimplexData::new(300));

        reconcile(&mut vortex, &mut simplex);

        // 200 has no simplex match and is dropped; 300 survives the orphan
        // check but is then trimmed as the most-recent safety margin,
        // leaving only 100 in both lists.
        assert_eq!(vortex.entries().len(), 1);
        assert_eq!(vortex.entries()[0].time_epoch_millis(), 100);
        assert_eq!(simplex.entries().len(), 1);
        assert_eq!(simplex.entries()[0].time_epoch_millis(), 100);
    }
}
