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
use geo::{Coord, LineString};

/// Area in square meters of a ring of WGS84 (lon, lat) degree coordinates.
///
/// Shoelace formula with a spherical correction on the latitude, the same
/// approximation as the Chamberlain-Duquette area.  Only the edges between
/// consecutive positions are summed, the ring is not wrapped from the last
/// position back to the first, so callers must pass a closed ring
/// (see [`crate::vector::prepare_ring`]).
pub fn compute_area(coords: &[Coord<f64>], earth_radius: f64) -> f64 {
    let total: f64 = coords
        .windows(2)
        .map(|edge| {
            let (lon1, lat1) = (edge[0].x.to_radians(), edge[0].y.to_radians());
            let (lon2, lat2) = (edge[1].x.to_radians(), edge[1].y.to_radians());

            (lon2 - lon1) * (2.0 + lat1.sin() + lat2.sin())
        })
        .sum();

    total.abs() * earth_radius * earth_radius / 2.0
}

pub fn get_ring_area(ring: &LineString<f64>, earth_radius: f64) -> f64 {
    compute_area(&ring.0, earth_radius)
}
