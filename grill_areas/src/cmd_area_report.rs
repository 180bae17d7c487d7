/*
This file is part of the Grilling Area Report
Copyright (C) 2022 Novel-T

The Grilling Area Report is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use geo::{ChamberlainDuquetteArea, Polygon};
use log::{debug, info};
use structopt::StructOpt;

use geo_util::config::AreaConfig;
use geo_util::constants::DEFAULT_INPUT_PATH;
use geo_util::io::read_feature_collection;
use geo_util::util::format_duration;
use geo_util::vector::{AreaFeature, RingClosure};

use crate::csv_output::write_results_csv;
use crate::report::{write_district_totals, write_report, AreaReport, AreaResult};

#[derive(StructOpt, Default)]
pub struct AreaReportArgs {
    #[structopt(long, parse(from_os_str), help="GeoJSON FeatureCollection of the grilling areas [default: data/official-grilling-areas.json]")]
    pub(crate) input: Option<PathBuf>,

    #[structopt(long, parse(from_os_str), help="TOML file with earth_radius_m, reference_area_km2, reference_name, ring_closure")]
    pub(crate) config: Option<PathBuf>,

    #[structopt(long, help="Sphere radius in meters, overrides the config file")]
    pub(crate) earth_radius: Option<f64>,

    #[structopt(long, help="Reference area in km², overrides the config file")]
    pub(crate) reference_area_km2: Option<f64>,

    #[structopt(long, help="Name of the reference area, overrides the config file")]
    pub(crate) reference_name: Option<String>,

    #[structopt(long, help="require or close, what to do with rings that are not closed")]
    pub(crate) ring_closure: Option<RingClosure>,

    #[structopt(long, help="Also print the totals per district")]
    pub(crate) by_district: bool,

    #[structopt(long, parse(from_os_str), help="Per feature areas will be written to this CSV")]
    pub(crate) out_csv: Option<PathBuf>,
}

impl AreaReportArgs {
    fn input_path(&self) -> PathBuf {
        self.input.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH))
    }
}

/// Config file (or defaults) with the command line values on top
pub fn resolve_config(args: &AreaReportArgs) -> Result<AreaConfig> {
    let mut config = match &args.config {
        Some(path) => AreaConfig::load_from_file(path)?,
        None => AreaConfig::default(),
    };

    if let Some(earth_radius) = args.earth_radius {
        config.earth_radius_m = earth_radius;
    }
    if let Some(reference_area_km2) = args.reference_area_km2 {
        config.reference_area_km2 = reference_area_km2;
    }
    if let Some(reference_name) = &args.reference_name {
        config.reference_name = reference_name.clone();
    }
    if let Some(ring_closure) = args.ring_closure {
        config.ring_closure = ring_closure;
    }

    config.validate()?;

    Ok(config)
}

pub fn build_report(features: &[AreaFeature], config: &AreaConfig) -> Result<AreaReport> {
    let results = features
        .iter()
        .map(|f| {
            let result = AreaResult::from_feature(f, config.earth_radius_m);

            debug!("{}: {:.2} m², Chamberlain-Duquette (equatorial radius) {:.2} m²",
                   f.name,
                   result.area_m2,
                   Polygon::new(f.ring.clone(), vec![]).chamberlain_duquette_unsigned_area());

            result
        })
        .collect();

    Ok(AreaReport::new(results, config)?)
}

pub fn area_report(args: &AreaReportArgs) -> Result<()> {
    let now = Instant::now();

    let config = resolve_config(args)?;
    debug!("Using {:?}", &config);

    let input = args.input_path();
    info!("Reading {:?}", &input);

    let features = read_feature_collection(&input, config.ring_closure)?;
    info!("Read {} features", features.len());

    let report = build_report(&features, &config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    write_report(&mut out, &report)?;

    if args.by_district {
        write_district_totals(&mut out, &report)?;
    }

    if let Some(out_csv) = &args.out_csv {
        write_results_csv(out_csv, report.results())?;
        info!("Wrote {} rows to {:?}", report.count(), out_csv);
    }

    info!("Finished in {}", format_duration(now.elapsed()));

    Ok(())
}

#[cfg(test)]
mod area_report_tests {
    use super::*;
    use float_cmp::{ApproxEq, F64Margin};
    use geo_util::errors::ErrorKind;
    use std::env::temp_dir;
    use std::fs::{read_to_string, remove_file, write};

    const TWO_AREAS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            { "type": "Feature",
              "properties": { "name": "Monbijoupark BBQ Area", "district": "Mitte" },
              "geometry": { "type": "Polygon", "coordinates": [[
                  [13.3970, 52.5235], [13.3980, 52.5235], [13.3980, 52.5245], [13.3970, 52.5245], [13.3970, 52.5235]
              ]] } },
            { "type": "Feature",
              "properties": { "name": "Mauerpark BBQ Area", "district": "Pankow" },
              "geometry": { "type": "MultiPolygon", "coordinates": [[[
                  [13.4020, 52.5405], [13.4040, 52.5405], [13.4040, 52.5415], [13.4020, 52.5415], [13.4020, 52.5405]
              ]]] } }
        ]
    }"#;

    #[test]
    fn test_resolve_config_overrides() {
        let path = temp_dir().join("grill_areas_resolve_config.toml");
        write(&path, "reference_area_km2 = 100.0\nreference_name = \"Hamburg\"\n").unwrap();

        let args = AreaReportArgs {
            config: Some(path),
            reference_area_km2: Some(755.2),
            ring_closure: Some(RingClosure::Close),
            ..AreaReportArgs::default()
        };
        let config = resolve_config(&args).unwrap();

        assert_eq!(755.2, config.reference_area_km2);
        assert_eq!("Hamburg", config.reference_name);
        assert_eq!(RingClosure::Close, config.ring_closure);
        assert_eq!(AreaConfig::default().earth_radius_m, config.earth_radius_m);

        let args = AreaReportArgs {
            earth_radius: Some(0.0),
            ..AreaReportArgs::default()
        };
        assert!(resolve_config(&args).is_err());

        assert_eq!(AreaConfig::default(), resolve_config(&AreaReportArgs::default()).unwrap());
    }

    #[test]
    fn test_default_input_path() {
        assert_eq!(PathBuf::from("data/official-grilling-areas.json"), AreaReportArgs::default().input_path());
    }

    #[test]
    fn test_build_report() {
        let features = geo_util::io::parse_feature_collection_str(TWO_AREAS, RingClosure::Require).unwrap();
        let report = build_report(&features, &AreaConfig::default()).unwrap();

        assert_eq!(2, report.count());
        assert_eq!("Mauerpark BBQ Area", report.largest().name);
        assert_eq!("Monbijoupark BBQ Area", report.smallest().name);

        //Mauerpark is twice as wide at nearly the same latitude
        let ratio = report.largest().area_m2 / report.smallest().area_m2;
        assert!(ratio.approx_eq(2.0, F64Margin { epsilon: 0.01, ulps: 4 }));

        let sum: f64 = report.results().iter().map(|r| r.area_m2).sum();
        assert_eq!(sum, report.total_area_m2());
    }

    #[test]
    fn test_area_report_writes_csv() {
        let input = temp_dir().join("grill_areas_two_areas.json");
        write(&input, TWO_AREAS).unwrap();

        let out_csv = temp_dir().join("grill_areas_two_areas.csv");
        if out_csv.exists() {
            remove_file(&out_csv).unwrap();
        }

        let args = AreaReportArgs {
            input: Some(input),
            by_district: true,
            out_csv: Some(out_csv.clone()),
            ..AreaReportArgs::default()
        };

        area_report(&args).unwrap();

        let csv = read_to_string(&out_csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(3, lines.len());
        assert!(lines[1].starts_with("1,Monbijoupark BBQ Area,Mitte,"));
        assert!(lines[2].starts_with("2,Mauerpark BBQ Area,Pankow,"));
    }

    #[test]
    fn test_empty_collection_is_an_error() {
        let input = temp_dir().join("grill_areas_empty.json");
        write(&input, r#"{ "type": "FeatureCollection", "features": [] }"#).unwrap();

        let args = AreaReportArgs {
            input: Some(input),
            ..AreaReportArgs::default()
        };
        let err = area_report(&args).unwrap_err();

        assert_eq!(Some(&ErrorKind::EmptyFeatureCollection), err.downcast_ref::<ErrorKind>());
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let args = AreaReportArgs {
            input: Some(temp_dir().join("grill_areas_does_not_exist.json")),
            ..AreaReportArgs::default()
        };

        assert!(area_report(&args).is_err());
    }
}
