//! XML loading for [`Configuration`] (spec §6's "Configuration format").
//!
//! `vortrac-model::config` defines the in-memory shape only; parsing the
//! document is explicitly this crate's job. The document is a root element
//! with child sections named `vortex`, `radar`, `cappi`, `vtd`, `center`,
//! `choosecenter`, `pressure`, and `qc`, each holding string-valued
//! parameter child elements keyed by field name. Unknown parameters are
//! ignored; a missing required parameter fails the whole load.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use vortrac_model::config::{
    CappiConfig, CenterConfig, ChooseCenterConfig, Closure, Configuration, GapTolerance, Geometry,
    PressureConfig, QcConfig, RadarConfig, VortexConfig, VtdConfig,
};
use vortrac_model::result::{Error, Result};
use xml::reader::XmlEvent;
use xml::EventReader;

/// Loads a [`Configuration`] from the XML document at `path`.
pub fn load(path: &Path) -> Result<Configuration> {
    let file = File::open(path).map_err(Error::IoError)?;
    let parser = EventReader::new(BufReader::new(file));

    let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
    let mut current_section: Option<String> = None;
    let mut current_param: Option<String> = None;
    let mut current_text = String::new();

    for event in parser {
        match event.map_err(|e| Error::ConfigError(e.to_string()))? {
            XmlEvent::StartElement { name, .. } => {
                let local = name.local_name;
                if current_section.is_none() {
                    if SECTION_NAMES.contains(&local.as_str()) {
                        current_section = Some(local);
                        sections.entry(current_section.clone().unwrap()).or_default();
                    }
                } else if current_param.is_none() {
                    current_param = Some(local);
                    current_text.clear();
                }
            }
            XmlEvent::Characters(text) => {
                if current_param.is_some() {
                    current_text.push_str(&text);
                }
            }
            XmlEvent::EndElement { .. } => {
                if let (Some(section), Some(param)) = (current_section.clone(), current_param.take()) {
                    sections
                        .get_mut(&section)
                        .unwrap()
                        .insert(param, current_text.trim().to_string());
                } else if current_section.is_some() {
                    current_section = None;
                }
            }
            _ => {}
        }
    }

    build_configuration(&sections)
}

const SECTION_NAMES: [&str; 8] = [
    "vortex",
    "radar",
    "cappi",
    "vtd",
    "center",
    "choosecenter",
    "pressure",
    "qc",
];

fn build_configuration(sections: &HashMap<String, HashMap<String, String>>) -> Result<Configuration> {
    Ok(Configuration {
        vortex: VortexConfig {
            initial_latitude: field(sections, "vortex", "initial_latitude")?,
            initial_longitude: field(sections, "vortex", "initial_longitude")?,
            storm_speed_ms: field(sections, "vortex", "storm_speed_ms")?,
            storm_direction_degrees: field(sections, "vortex", "storm_direction_degrees")?,
            observation_epoch_millis: field(sections, "vortex", "observation_epoch_millis")?,
        },
        radar: RadarConfig {
            latitude: field(sections, "radar", "latitude")?,
            longitude: field(sections, "radar", "longitude")?,
            altitude_m: field(sections, "radar", "altitude_m")?,
            start_epoch_millis: field(sections, "radar", "start_epoch_millis")?,
            format: string_field(sections, "radar", "format")?,
        },
        cappi: CappiConfig {
            z_grid_spacing_km: field(sections, "cappi", "z_grid_spacing_km")?,
        },
        vtd: VtdConfig {
            bottom_level_km: field(sections, "vtd", "bottom_level_km")?,
            top_level_km: field(sections, "vtd", "top_level_km")?,
            inner_radius_km: field(sections, "vtd", "inner_radius_km")?,
            outer_radius_km: field(sections, "vtd", "outer_radius_km")?,
            ring_width_km: field(sections, "vtd", "ring_width_km")?,
            max_wavenumber: field(sections, "vtd", "max_wavenumber")?,
            gap_tolerances: gap_tolerances(sections)?,
            geometry: match string_field(sections, "vtd", "geometry")?.as_str() {
                "gvtd" => Geometry::Gvtd,
                _ => Geometry::Gbvtd,
            },
            closure: match string_field(sections, "vtd", "closure")?.as_str() {
                "hvvp" => Closure::Hvvp,
                _ => Closure::Original,
            },
        },
        center: CenterConfig {
            inner_radius_km: field(sections, "center", "inner_radius_km")?,
            outer_radius_km: field(sections, "center", "outer_radius_km")?,
            bottom_level_km: field(sections, "center", "bottom_level_km")?,
            top_level_km: field(sections, "center", "top_level_km")?,
            max_iterations: field(sections, "center", "max_iterations")?,
            convergence_tolerance: field(sections, "center", "convergence_tolerance")?,
            ring_count: field(sections, "center", "ring_count")?,
        },
        choosecenter: ChooseCenterConfig {
            averaging_interval_volumes: field(sections, "choosecenter", "averaging_interval_volumes")?,
            std_dev_multiplier: field(sections, "choosecenter", "std_dev_multiplier")?,
            start_epoch_millis: field(sections, "choosecenter", "start_epoch_millis")?,
            force_center: optional_pair(sections, "choosecenter", "force_center_x_km", "force_center_y_km"),
        },
        pressure: PressureConfig {
            rapid_change_rate_mb_per_hr: field(sections, "pressure", "rapid_change_rate_mb_per_hr")?,
            averaging_interval_volumes: field(sections, "pressure", "averaging_interval_volumes")?,
            default_boundary_pressure_mb: field(sections, "pressure", "default_boundary_pressure_mb")?,
        },
        qc: QcConfig {
            min_valid_gate_fraction: field(sections, "qc", "min_valid_gate_fraction")?,
        },
    })
}

fn gap_tolerances(sections: &HashMap<String, HashMap<String, String>>) -> Result<Vec<GapTolerance>> {
    let vtd = sections
        .get("vtd")
        .ok_or_else(|| Error::ConfigError("missing vtd section".to_string()))?;

    let mut tolerances = Vec::new();
    for wavenumber in 0..=9u8 {
        let key = format!("gap_tolerance_wavenumber_{wavenumber}");
        if let Some(raw) = vtd.get(&key) {
            let max_gap_degrees: f32 = raw
                .parse()
                .map_err(|_| Error::ConfigError(format!("malformed field: {key}")))?;
            tolerances.push(GapTolerance { wavenumber, max_gap_degrees });
        }
    }
    Ok(tolerances)
}

fn field<T: std::str::FromStr>(
    sections: &HashMap<String, HashMap<String, String>>,
    section: &str,
    name: &str,
) -> Result<T> {
    let raw = string_field(sections, section, name)?;
    raw.parse()
        .map_err(|_| Error::ConfigError(format!("malformed field {section}.{name}")))
}

fn string_field(
    sections: &HashMap<String, HashMap<String, String>>,
    section: &str,
    name: &str,
) -> Result<String> {
    sections
        .get(section)
        .and_then(|params| params.get(name))
        .cloned()
        .ok_or_else(|| Error::ConfigError(format!("missing required field {section}.{name}")))
}

fn optional_pair(
    sections: &HashMap<String, HashMap<String, String>>,
    section: &str,
    x_name: &str,
    y_name: &str,
) -> Option<(f32, f32)> {
    let params = sections.get(section)?;
    let x: f32 = params.get(x_name)?.parse().ok()?;
    let y: f32 = params.get(y_name)?.parse().ok()?;
    Some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_sample(path: &Path) {
        let xml = r#"<configuration>
  <vortex>
    <initial_latitude>25.0</initial_latitude>
    <initial_longitude>-75.0</initial_longitude>
    <storm_speed_ms>8.0</storm_speed_ms>
    <storm_direction_degrees>270.0</storm_direction_degrees>
    <observation_epoch_millis>0</observation_epoch_millis>
  </vortex>
  <radar>
    <latitude>25.1</latitude>
    <longitude>-75.2</longitude>
    <altitude_m>10.0</altitude_m>
    <start_epoch_millis>0</start_epoch_millis>
    <format>archive2</format>
  </radar>
  <cappi>
    <z_grid_spacing_km>1.0</z_grid_spacing_km>
  </cappi>
  <vtd>
    <bottom_level_km>1.0</bottom_level_km>
    <top_level_km>8.0</top_level_km>
    <inner_radius_km>5.0</inner_radius_km>
    <outer_radius_km>60.0</outer_radius_km>
    <ring_width_km>1.0</ring_width_km>
    <max_wavenumber>2</max_wavenumber>
    <gap_tolerance_wavenumber_1>90.0</gap_tolerance_wavenumber_1>
    <geometry>gbvtd</geometry>
    <closure>original</closure>
  </vtd>
  <center>
    <inner_radius_km>5.0</inner_radius_km>
    <outer_radius_km>60.0</outer_radius_km>
    <bottom_level_km>1.0</bottom_level_km>
    <top_level_km>8.0</top_level_km>
    <max_iterations>125</max_iterations>
    <convergence_tolerance>0.001</convergence_tolerance>
    <ring_count>10</ring_count>
  </center>
  <choosecenter>
    <averaging_interval_volumes>6</averaging_interval_volumes>
    <std_dev_multiplier>2.0</std_dev_multiplier>
    <start_epoch_millis>0</start_epoch_millis>
  </choosecenter>
  <pressure>
    <rapid_change_rate_mb_per_hr>5.0</rapid_change_rate_mb_per_hr>
    <averaging_interval_volumes>6</averaging_interval_volumes>
    <default_boundary_pressure_mb>1013.0</default_boundary_pressure_mb>
  </pressure>
  <qc>
    <min_valid_gate_fraction>0.5</min_valid_gate_fraction>
  </qc>
</configuration>"#;
        let mut f = File::create(path).unwrap();
        f.write_all(xml.as_bytes()).unwrap();
    }

    #[test]
    fn loads_a_complete_document() {
        let dir = std::env::temp_dir().join(format!("vortrac-cli-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.xml");
        write_sample(&path);

        let config = load(&path).unwrap();
        assert_eq!(config.vortex.initial_latitude, 25.0);
        assert_eq!(config.vtd.max_wavenumber, 2);
        assert_eq!(config.vtd.gap_tolerance_degrees(1), Some(90.0));
        assert_eq!(config.choosecenter.force_center, None);

        std::fs::remove_file(&path).ok();
        std::fs::remove_dir(&dir).ok();
    }

    #[test]
    fn missing_required_field_fails() {
        let dir = std::env::temp_dir().join(format!("vortrac-cli-test2-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.xml");
        std::fs::write(&path, "<configuration><vortex></vortex></configuration>").unwrap();

        assert!(load(&path).is_err());

        std::fs::remove_file(&path).ok();
        std::fs::remove_dir(&dir).ok();
    }
}
