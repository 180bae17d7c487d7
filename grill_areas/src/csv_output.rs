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
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use geo_util::constants::EXT_CSV;

use crate::report::AreaResult;

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct AreaRow {
    pub index: usize,
    pub name: String,
    pub district: String,
    pub area_m2: f64,
    pub area_km2: f64,
}

/// One row per feature, in input order
pub fn write_results_csv(path: &Path, results: &[AreaResult]) -> Result<()> {
    if path.extension().and_then(|e| e.to_str()) != Some(EXT_CSV) {
        warn!("{:?} does not have a .{} extension", path, EXT_CSV);
    }

    debug!("Creating csv at {:?}", path);
    let mut csv_f = WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Unable to create file {:?}", path))?;

    for (idx, r) in results.iter().enumerate() {
        let record = AreaRow {
            index: idx + 1,
            name: r.name.clone(),
            district: r.district.clone(),
            area_m2: r.area_m2,
            area_km2: r.area_km2,
        };

        csv_f.serialize(&record)?;
    }

    csv_f.flush()?;

    Ok(())
}
