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
use geo::LineString;

use crate::vector::get_ring_area;

/// A named polygon with a single, closed outer ring in WGS84 degrees
#[derive(Clone, Debug, PartialEq)]
pub struct AreaFeature {
    pub name: String,
    pub district: String,
    pub ring: LineString<f64>,
}

impl AreaFeature {
    pub fn area_m2(&self, earth_radius: f64) -> f64 {
        get_ring_area(&self.ring, earth_radius)
    }
}
