//! A time-sorted, persistent sequence of [`VortexData`].

use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::warn;
use xml::reader::XmlEvent as ReadEvent;
use xml::writer::XmlEvent as WriteEvent;
use xml::{EmitterConfig, EventReader};

use crate::result::{Error, Result};
use crate::vortex::coefficient::{Coefficient, CoefficientKind};
use crate::vortex::vortex_data::{LevelData, VortexData};

/// A time-sorted sequence of [`VortexData`], one entry per successfully
/// analyzed volume.
#[derive(Debug, Clone, Default)]
pub struct VortexList {
    entries: Vec<VortexData>,
}

impl VortexList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `entry` if its volume time is strictly greater than the
    /// list's current last entry (Open Question 3's resolution; see
    /// DESIGN.md). Returns `false` if rejected as out-of-order or
    /// duplicate.
    pub fn append(&mut self, entry: VortexData) -> bool {
        if let Some(last) = self.entries.last() {
            if entry.time_epoch_millis() <= last.time_epoch_millis() {
                return false;
            }
        }
        self.entries.push(entry);
        true
    }

    /// All entries, in ascending time order.
    pub fn entries(&self) -> &[VortexData] {
        &self.entries
    }

    /// The most recently appended entry, used by Preprocess to seed the
    /// next volume's initial guess.
    pub fn most_recent(&self) -> Option<&VortexData> {
        self.entries.last()
    }

    /// Removes and returns the most recent entry, used by [`super::reconcile`]'s
    /// safety-margin trim.
    pub fn pop_most_recent(&mut self) -> Option<VortexData> {
        self.entries.pop()
    }

    /// Entries with volume time in `[start_epoch_millis, end_epoch_millis]`.
    pub fn in_range(&self, start_epoch_millis: i64, end_epoch_millis: i64) -> Vec<&VortexData> {
        self.entries
            .iter()
            .filter(|e| {
                e.time_epoch_millis() >= start_epoch_millis
                    && e.time_epoch_millis() <= end_epoch_millis
            })
            .collect()
    }

    /// Removes every entry whose time is not present in `times`.
    pub fn retain_times(&mut self, times: &std::collections::HashSet<i64>) {
        self.entries.retain(|e| times.contains(&e.time_epoch_millis()));
    }

    /// The set of volume times present in this list.
    pub fn times(&self) -> std::collections::HashSet<i64> {
        self.entries.iter().map(|e| e.time_epoch_millis()).collect()
    }

    /// Serializes this list as the XML document described in spec §6 and
    /// writes it atomically: the document is written to a sibling
    /// `.tmp`-suffixed path and then renamed over `path`, so a crash mid-write
    /// never leaves a truncated file at `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let tmp_path = path.with_extension("xml.tmp");
        {
            let file = fs::File::create(&tmp_path).map_err(Error::IoError)?;
            let mut writer = EmitterConfig::new()
                .perform_indent(true)
                .create_writer(BufWriter::new(file));

            writer
                .write(WriteEvent::start_element("vortexList"))
                .map_err(Error::XmlWriteError)?;

            for entry in &self.entries {
                write_vortex_data(&mut writer, entry)?;
            }

            writer
                .write(WriteEvent::end_element())
                .map_err(Error::XmlWriteError)?;
        }
        fs::rename(&tmp_path, path).map_err(Error::IoError)?;
        Ok(())
    }

    /// Loads a list previously written by [`VortexList::save`]. A corrupt
    /// last entry (e.g. from a crash between `save`'s write and rename, on
    /// a filesystem without atomic rename) is discarded rather than failing
    /// the whole load.
    pub fn load(path: &Path) -> Result<Self> {
        let file = fs::File::open(path).map_err(Error::IoError)?;
        let parser = EventReader::new(BufReader::new(file));

        let mut entries = Vec::new();
        let mut current: Option<VortexData> = None;
        let mut current_level: Option<usize> = None;

        for event in parser {
            match event {
                Ok(ReadEvent::StartElement { name, attributes, .. }) => {
                    match name.local_name.as_str() {
                        "vortexData" => {
                            let time = attr_i64(&attributes, "time").unwrap_or(0);
                            current = Some(VortexData::new(time));
                        }
                        "level" => {
                            if let Some(data) = current.as_mut() {
                                let level = LevelData {
                                    altitude_km: attr_f32(&attributes, "altitude_km"),
                                    center_latitude: attr_f32(&attributes, "center_latitude"),
                                    center_longitude: attr_f32(&attributes, "center_longitude"),
                                    rmw_km: attr_f32(&attributes, "rmw_km"),
                                    rmw_uncertainty_km: attr_f32(&attributes, "rmw_uncertainty_km"),
                                    max_tangential_wind_ms: attr_f32(
                                        &attributes,
                                        "max_tangential_wind_ms",
                                    ),
                                    center_std_dev_km: attr_f32(&attributes, "center_std_dev_km"),
                                    converging_center_count: attr_i64(
                                        &attributes,
                                        "converging_center_count",
                                    )
                                    .unwrap_or(0) as u32,
                                };
                                data.push_level(level);
                                current_level = Some(data.levels().len() - 1);
                            }
                        }
                        "coefficient" => {
                            if let (Some(data), Some(level)) = (current.as_mut(), current_level) {
                                let radius_km = attr_f32(&attributes, "radius_km");
                                let value = attr_f32(&attributes, "value");
                                if let Some(parameter) = attributes
                                    .iter()
                                    .find(|a| a.name.local_name == "parameter")
                                    .and_then(|a| CoefficientKind::parse(&a.value))
                                {
                                    data.set_coefficients(
                                        level,
                                        vec![Coefficient::new(level, radius_km, parameter, value)],
                                    );
                                }
                            }
                        }
                        "pressure" => {
                            if let Some(data) = current.as_mut() {
                                data.central_pressure_mb = attr_f32(&attributes, "central_pressure_mb");
                                data.central_pressure_uncertainty_mb =
                                    attr_f32(&attributes, "central_pressure_uncertainty_mb");
                                data.pressure_deficit_mb = attr_f32(&attributes, "pressure_deficit_mb");
                                data.pressure_deficit_uncertainty_mb =
                                    attr_f32(&attributes, "pressure_deficit_uncertainty_mb");
                                data.mean_rmw_km = attr_f32(&attributes, "mean_rmw_km");
                                data.max_valid_radius_km = attr_f32(&attributes, "max_valid_radius_km");
                            }
                        }
                        _ => {}
                    }
                }
                Ok(ReadEvent::EndElement { name }) if name.local_name == "vortexData" => {
                    if let Some(data) = current.take() {
                        entries.push(data);
                    }
                    current_level = None;
                }
                Err(_) => {
                    warn!("discarding corrupt trailing vortexList entry");
                    break;
                }
                _ => {}
            }
        }

        Ok(Self { entries })
    }
}

fn write_vortex_data<W: std::io::Write>(
    writer: &mut xml::writer::EventWriter<W>,
    entry: &VortexData,
) -> Result<()> {
    writer
        .write(
            WriteEvent::start_element("vortexData")
                .attr("time", &entry.time_epoch_millis().to_string()),
        )
        .map_err(Error::XmlWriteError)?;

    for (level_index, level) in entry.levels().iter().enumerate() {
        writer
            .write(
                WriteEvent::start_element("level")
                    .attr("altitude_km", &level.altitude_km.to_string())
                    .attr("center_latitude", &level.center_latitude.to_string())
                    .attr("center_longitude", &level.center_longitude.to_string())
                    .attr("rmw_km", &level.rmw_km.to_string())
                    .attr("rmw_uncertainty_km", &level.rmw_uncertainty_km.to_string())
                    .attr(
                        "max_tangential_wind_ms",
                        &level.max_tangential_wind_ms.to_string(),
                    )
                    .attr("center_std_dev_km", &level.center_std_dev_km.to_string())
                    .attr(
                        "converging_center_count",
                        &level.converging_center_count.to_string(),
                    ),
            )
            .map_err(Error::XmlWriteError)?;

        for coefficient in entry.coefficients_at_level(level_index) {
            writer
                .write(
                    WriteEvent::start_element("coefficient")
                        .attr("radius_km", &coefficient.radius_km.to_string())
                        .attr("parameter", &coefficient.parameter.tag())
                        .attr("value", &coefficient.value.to_string()),
                )
                .map_err(Error::XmlWriteError)?;
            writer.write(WriteEvent::end_element()).map_err(Error::XmlWriteError)?;
        }

        writer.write(WriteEvent::end_element()).map_err(Error::XmlWriteError)?;
    }

    writer
        .write(
            WriteEvent::start_element("pressure")
                .attr("central_pressure_mb", &entry.central_pressure_mb.to_string())
                .attr(
                    "central_pressure_uncertainty_mb",
                    &entry.central_pressure_uncertainty_mb.to_string(),
                )
                .attr("pressure_deficit_mb", &entry.pressure_deficit_mb.to_string())
                .attr(
                    "pressure_deficit_uncertainty_mb",
                    &entry.pressure_deficit_uncertainty_mb.to_string(),
                )
                .attr("mean_rmw_km", &entry.mean_rmw_km.to_string())
                .attr("max_valid_radius_km", &entry.max_valid_radius_km.to_string()),
        )
        .map_err(Error::XmlWriteError)?;
    writer.write(WriteEvent::end_element()).map_err(Error::XmlWriteError)?;

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
