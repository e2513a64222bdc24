//! Per-volume simplex candidate centers, parallel to [`super::VortexData`].

use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use xml::reader::XmlEvent as ReadEvent;
use xml::writer::XmlEvent as WriteEvent;
use xml::{EmitterConfig, EventReader};

use crate::result::{Error, Result};

/// One ring's converged (or failed) simplex search result (spec §3
/// "SimplexData/SimplexList").
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimplexCandidate {
    pub level: usize,
    pub radius_km: f32,
    pub x_km: f32,
    pub y_km: f32,
    pub std_dev: f32,
    pub max_tangential_wind_ms: f32,
    pub converged: bool,
}

/// The full set of per-level, per-ring candidates produced by CenterFinder
/// for one volume.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimplexData {
    time_epoch_millis: i64,
    candidates: Vec<SimplexCandidate>,
}

impl SimplexData {
    /// Creates an empty simplex result for the given volume time.
    pub fn new(time_epoch_millis: i64) -> Self {
        Self {
            time_epoch_millis,
            candidates: Vec::new(),
        }
    }

    /// This result's volume time as a UNIX epoch timestamp in milliseconds.
    pub fn time_epoch_millis(&self) -> i64 {
        self.time_epoch_millis
    }

    /// Appends a candidate result.
    pub fn push(&mut self, candidate: SimplexCandidate) {
        self.candidates.push(candidate);
    }

    /// All candidates recorded for this volume.
    pub fn candidates(&self) -> &[SimplexCandidate] {
        &self.candidates
    }

    /// Candidates for a single level, in ring order.
    pub fn candidates_at_level(&self, level: usize) -> impl Iterator<Item = &SimplexCandidate> {
        self.candidates.iter().filter(move |c| c.level == level)
    }

    /// Number of rings whose simplex search converged (terminated by
    /// tolerance rather than the iteration cap) at the given level.
    pub fn converging_count(&self, level: usize) -> u32 {
        self.candidates_at_level(level)
            .filter(|c| c.converged)
            .count() as u32
    }
}

/// A time-sorted sequence of [`SimplexData`], parallel to
/// [`super::VortexList`].
#[derive(Debug, Clone, Default)]
pub struct SimplexList {
    entries: Vec<SimplexData>,
}

impl SimplexList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `entry`, per Open Question 3's resolution: only if its
    /// volume time is strictly greater than the list's current last entry
    /// (see DESIGN.md). Returns `false` if the entry was rejected as
    /// out-of-order or duplicate.
    pub fn append(&mut self, entry: SimplexData) -> bool {
        if let Some(last) = self.entries.last() {
            if entry.time_epoch_millis() <= last.time_epoch_millis() {
                return false;
            }
        }
        self.entries.push(entry);
        true
    }

    /// All entries, in ascending time order.
    pub fn entries(&self) -> &[SimplexData] {
        &self.entries
    }

    /// Removes and returns the most recent entry, used by
    /// [`super::reconcile`]'s safety-margin trim.
    pub fn pop_most_recent(&mut self) -> Option<SimplexData> {
        self.entries.pop()
    }

    /// Removes every entry whose time is not present in `times`.
    pub fn retain_times(&mut self, times: &std::collections::HashSet<i64>) {
        self.entries.retain(|e| times.contains(&e.time_epoch_millis()));
    }

    /// The set of volume times present in this list.
    pub fn times(&self) -> std::collections::HashSet<i64> {
        self.entries.iter().map(|e| e.time_epoch_millis()).collect()
    }

    /// Serializes this list as the `simplexList.xml` document described in
    /// spec §6, parallel to [`super::VortexList::save`]: written to a
    /// sibling `.tmp` path, then renamed atomically over `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let tmp_path = path.with_extension("xml.tmp");
        {
            let file = fs::File::create(&tmp_path).map_err(Error::IoError)?;
            let mut writer = EmitterConfig::new()
                .perform_indent(true)
                .create_writer(BufWriter::new(file));

            writer
                .write(WriteEvent::start_element("simplexList"))
                .map_err(Error::XmlWriteError)?;

            for entry in &self.entries {
                write_simplex_data(&mut writer, entry)?;
            }

            writer
                .write(WriteEvent::end_element())
                .map_err(Error::XmlWriteError)?;
        }
        fs::rename(&tmp_path, path).map_err(Error::IoError)?;
        Ok(())
    }

    /// Loads a list previously written by [`SimplexList::save`]. A corrupt
    /// trailing entry is discarded rather than failing the whole load,
    /// mirroring [`super::VortexList::load`].
    pub fn load(path: &Path) -> Result<Self> {
        let file = fs::File::open(path).map_err(Error::IoError)?;
        let parser = EventReader::new(BufReader::new(file));

        let mut entries = Vec::new();
        let mut current: Option<SimplexData> = None;

        for event in parser {
            match event {
                Ok(ReadEvent::StartElement { name, attributes, .. }) => match name.local_name.as_str() {
                    "simplexData" => {
                        let time = attr_i64(&attributes, "time").unwrap_or(0);
                        current = Some(SimplexData::new(time));
                    }
                    "candidate" => {
                        if let Some(data) = current.as_mut() {
                            data.push(SimplexCandidate {
                                level: attr_i64(&attributes, "level").unwrap_or(0) as usize,
                                radius_km: attr_f32(&attributes, "radius_km"),
                                x_km: attr_f32(&attributes, "x_km"),
                                y_km: attr_f32(&attributes, "y_km"),
                                std_dev: attr_f32(&attributes, "std_dev"),
                                max_tangential_wind_ms: attr_f32(&attributes, "max_tangential_wind_ms"),
                                converged: attr_i64(&attributes, "converged").unwrap_or(0) != 0,
                            });
                        }
                    }
                    _ => {}
                },
                Ok(ReadEvent::EndElement { name }) if name.local_name == "simplexData" => {
                    if let Some(data) = current.take() {
                        entries.push(data);
                    }
                }
                Err(_) => {
                    log::warn!("discarding corrupt trailing simplexList entry");
                    break;
                }
                _ => {}
            }
        }

        Ok(Self { entries })
    }
}

fn write_simplex_data<W: std::io::Write>(
    writer: &mut xml::writer::EventWriter<W>,
    entry: &SimplexData,
) -> Result<()> {
    writer
        .write(WriteEvent::start_element("simplexData").attr("time", &entry.time_epoch_millis().to_string()))
        .map_err(Error::XmlWriteError)?;

    for candidate in &entry.candidates {
        writer
            .write(
                WriteEvent::start_element("candidate")
                    .attr("level", &candidate.level.to_string())
                    .attr("radius_km", &candidate.radius_km.to_string())
                    .attr("x_km", &candidate.x_km.to_string())
                    .attr("y_km", &candidate.y_km.to_string())
                    .attr("std_dev", &candidate.std_dev.to_string())
                    .attr("max_tangential_wind_ms", &candidate.max_tangential_wind_ms.to_string())
                    .attr("converged", if candidate.converged { "1" } else { "0" }),
            )
            .map_err(Error::XmlWriteError)?;
        writer.write(WriteEvent::end_element()).map_err(Error::XmlWriteError)?;
    }

    writer.write(WriteEvent::end_element()).map_err(Error::XmlWriteError)?;
    Ok(())
}

fn attr_f32(attributes: &[xml::attribute::OwnedAttribute], name: &str) -> f32 {
    attributes
        .iter()
        .find(|a| a.name.local_name == name)
        .and_then(|a| a.value.parse().ok())
        .unwrap_or(crate::sentinel::MISSING)
}

fn attr_i64(attributes: &[xml::attribute::OwnedAttribute], name: &str) -> Option<i64> {
    attributes
        .iter()
        .find(|a| a.name.local_name == name)
        .and_then(|a| a.value.parse().ok())
}
