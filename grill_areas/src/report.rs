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
use std::collections::HashMap;
use std::io::{self, Write};

use format_num::NumberFormat;
use itertools::Itertools;

use geo_util::config::AreaConfig;
use geo_util::constants::M2_PER_KM2;
use geo_util::errors::ErrorKind;
use geo_util::vector::AreaFeature;

const RULER_WIDTH: usize = 80;
const M2_FORMAT: &str = ",.2f";

#[derive(Clone, Debug, PartialEq)]
pub struct AreaResult {
    pub name: String,
    pub district: String,
    pub area_m2: f64,
    pub area_km2: f64,
}

impl AreaResult {
    pub fn new(name: &str, district: &str, area_m2: f64) -> Self {
        AreaResult {
            name: name.to_string(),
            district: district.to_string(),
            area_m2,
            area_km2: area_m2 / M2_PER_KM2,
        }
    }

    pub fn from_feature(feature: &AreaFeature, earth_radius: f64) -> Self {
        AreaResult::new(&feature.name, &feature.district, feature.area_m2(earth_radius))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DistrictTotal {
    pub district: String,
    pub count: usize,
    pub area_m2: f64,
}

/// Totals over all the area results of one run
pub struct AreaReport {
    results: Vec<AreaResult>,
    total_area_m2: f64,
    largest_idx: usize,
    smallest_idx: usize,
    reference_area_km2: f64,
    reference_name: String,
}

impl AreaReport {
    pub fn new(results: Vec<AreaResult>, config: &AreaConfig) -> Result<Self, ErrorKind> {
        if results.is_empty() {
            return Err(ErrorKind::EmptyFeatureCollection);
        }

        let total_area_m2 = results.iter().map(|r| r.area_m2).sum();

        //Stable, so ties keep their input order
        let mut by_area_desc: Vec<usize> = (0..results.len()).collect();
        by_area_desc.sort_by(|&a, &b| results[b].area_m2.total_cmp(&results[a].area_m2));

        Ok(AreaReport {
            largest_idx: by_area_desc[0],
            smallest_idx: by_area_desc[by_area_desc.len() - 1],
            results,
            total_area_m2,
            reference_area_km2: config.reference_area_km2,
            reference_name: config.reference_name.clone(),
        })
    }

    pub fn results(&self) -> &[AreaResult] {
        &self.results
    }

    pub fn count(&self) -> usize {
        self.results.len()
    }

    pub fn total_area_m2(&self) -> f64 {
        self.total_area_m2
    }

    pub fn total_area_km2(&self) -> f64 {
        self.total_area_m2 / M2_PER_KM2
    }

    /// Share of the reference area covered, in percent
    pub fn percentage_of_reference(&self) -> f64 {
        self.total_area_km2() / self.reference_area_km2 * 100.0
    }

    pub fn average_area_m2(&self) -> f64 {
        self.total_area_m2 / self.count() as f64
    }

    pub fn average_area_km2(&self) -> f64 {
        self.total_area_km2() / self.count() as f64
    }

    pub fn largest(&self) -> &AreaResult {
        &self.results[self.largest_idx]
    }

    pub fn smallest(&self) -> &AreaResult {
        &self.results[self.smallest_idx]
    }

    /// Sorted by district name
    pub fn district_totals(&self) -> Vec<DistrictTotal> {
        //district => count, area
        let mut group_by: HashMap<&str, (usize, f64)> = HashMap::new();

        for r in self.results.iter() {
            let entry = group_by.entry(r.district.as_str()).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += r.area_m2;
        }

        group_by
            .keys()
            .sorted()
            .map(|district| {
                let (count, area_m2) = group_by[district];
                DistrictTotal {
                    district: district.to_string(),
                    count,
                    area_m2,
                }
            })
            .collect()
    }
}

/// Whole numbers keep one decimal, 1000 prints as 1000.0
fn format_reference_area(area_km2: f64) -> String {
    if area_km2.fract() == 0.0 {
        format!("{:.1}", area_km2)
    } else {
        format!("{}", area_km2)
    }
}

/// Percent of the grilling total, 0 when every area is degenerate
fn district_share(area_m2: f64, total_area_m2: f64) -> f64 {
    if total_area_m2 > 0.0 {
        area_m2 / total_area_m2 * 100.0
    } else {
        0.0
    }
}

pub fn write_report<W: Write>(w: &mut W, report: &AreaReport) -> io::Result<()> {
    let num = NumberFormat::new();
    let ruler = "=".repeat(RULER_WIDTH);

    writeln!(w, "Calculating areas of official grilling spots in {}\n", report.reference_name)?;
    writeln!(w, "{}", ruler)?;

    for (idx, r) in report.results().iter().enumerate() {
        writeln!(w, "{}. {}", idx + 1, r.name)?;
        writeln!(w, "   District: {}", r.district)?;
        writeln!(w, "   Area: {} m² ({:.6} km²)", num.format(M2_FORMAT, r.area_m2), r.area_km2)?;
        writeln!(w)?;
    }

    writeln!(w, "{}", ruler)?;
    writeln!(w, "\nTOTAL GRILLING AREA:")?;
    writeln!(w, "  - {} square meters", num.format(M2_FORMAT, report.total_area_m2()))?;
    writeln!(w, "  - {:.6} square kilometers", report.total_area_km2())?;

    writeln!(w, "\n{}'s total area: {} km²", report.reference_name, format_reference_area(report.reference_area_km2))?;
    writeln!(w, "Grilling areas represent: {:.6}% of {}'s total area",
             report.percentage_of_reference(), report.reference_name)?;

    writeln!(w, "\nAverage grilling area size: {} m² ({:.6} km²)",
             num.format(M2_FORMAT, report.average_area_m2()), report.average_area_km2())?;

    let largest = report.largest();
    let smallest = report.smallest();
    writeln!(w, "\nLargest grilling area: {} ({} m²)", largest.name, num.format(M2_FORMAT, largest.area_m2))?;
    writeln!(w, "Smallest grilling area: {} ({} m²)", smallest.name, num.format(M2_FORMAT, smallest.area_m2))?;

    Ok(())
}

pub fn write_district_totals<W: Write>(w: &mut W, report: &AreaReport) -> io::Result<()> {
    let num = NumberFormat::new();

    writeln!(w, "\nGRILLING AREA BY DISTRICT:")?;

    for d in report.district_totals() {
        writeln!(w, "  - {}: {} area(s), {} m² ({:.2}% of grilling area)",
                 d.district,
                 d.count,
                 num.format(M2_FORMAT, d.area_m2),
                 district_share(d.area_m2, report.total_area_m2()))?;
    }

    Ok(())
}
