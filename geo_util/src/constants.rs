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

pub const DEFAULT_INPUT_PATH: &str = "data/official-grilling-areas.json";

pub const EXT_CSV: &str = "csv";

///https://en.wikipedia.org/wiki/World_Geodetic_System#WGS84
/**
 * The WGS84 equatorial radius (semi-major axis a).
 * in meters
 */
pub const EQUATORIAL_EARTH_RADIUS: f64 = 6378137.0;

/// Administrative area of Berlin, in square kilometers
pub const BERLIN_AREA_KM2: f64 = 891.8;

pub const BERLIN_NAME: &str = "Berlin";

pub const M2_PER_KM2: f64 = 1_000_000.0;
