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
use std::fmt;
use std::str::FromStr;

use geo::{Coord, LineString};
use serde::Deserialize;

use crate::errors::ErrorKind;

/// What to do with a ring whose last position is not its first position
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RingClosure {
    /// Reject the ring
    #[default]
    Require,
    /// Append the first position
    Close,
}

impl FromStr for RingClosure {
    type Err = ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "require" => Ok(RingClosure::Require),
            "close" => Ok(RingClosure::Close),
            _ => Err(ErrorKind::InvalidConfig {
                reason: format!("unknown ring closure '{}', expected require or close", s),
            }),
        }
    }
}

impl fmt::Display for RingClosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RingClosure::Require => write!(f, "require"),
            RingClosure::Close => write!(f, "close"),
        }
    }
}

pub fn is_closed(coords: &[Coord<f64>]) -> bool {
    match (coords.first(), coords.last()) {
        (Some(first), Some(last)) => first == last,
        _ => false,
    }
}

/// Checks the position count and closure of a ring so that
/// [`crate::vector::compute_area`] sees every edge.
pub fn prepare_ring(feature: &str, mut coords: Vec<Coord<f64>>, closure: RingClosure) -> Result<LineString<f64>, ErrorKind> {
    if coords.len() < 2 {
        return Err(ErrorKind::TooFewPositions {
            feature: feature.to_string(),
            count: coords.len(),
        });
    }

    if !is_closed(&coords) {
        match closure {
            RingClosure::Require => {
                return Err(ErrorKind::UnclosedRing {
                    feature: feature.to_string(),
                });
            }
            RingClosure::Close => {
                let first = coords[0];
                coords.push(first);
            }
        }
    }

    Ok(LineString(coords))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_square() -> Vec<Coord<f64>> {
        vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 0.001, y: 0.0 },
            Coord { x: 0.001, y: 0.001 },
            Coord { x: 0.0, y: 0.001 },
        ]
    }

    #[test]
    fn test_require_rejects_open_ring() {
        let err = prepare_ring("a", open_square(), RingClosure::Require).unwrap_err();
        assert_eq!(ErrorKind::UnclosedRing { feature: "a".to_string() }, err);
    }

    #[test]
    fn test_close_appends_first_position() {
        let ring = prepare_ring("a", open_square(), RingClosure::Close).unwrap();

        assert_eq!(5, ring.0.len());
        assert_eq!(ring.0[0], ring.0[4]);
        assert!(ring.is_closed());
    }

    #[test]
    fn test_closed_ring_is_untouched() {
        let mut coords = open_square();
        coords.push(coords[0]);

        for closure in [RingClosure::Require, RingClosure::Close] {
            let ring = prepare_ring("a", coords.clone(), closure).unwrap();
            assert_eq!(coords, ring.0);
        }
    }

    #[test]
    fn test_too_few_positions() {
        let err = prepare_ring("b", vec![Coord { x: 1.0, y: 2.0 }], RingClosure::Close).unwrap_err();
        assert_eq!(ErrorKind::TooFewPositions { feature: "b".to_string(), count: 1 }, err);

        let err = prepare_ring("b", vec![], RingClosure::Require).unwrap_err();
        assert_eq!(ErrorKind::TooFewPositions { feature: "b".to_string(), count: 0 }, err);
    }

    #[test]
    fn test_parse_ring_closure() {
        assert_eq!(RingClosure::Require, "require".parse().unwrap());
        assert_eq!(RingClosure::Close, "Close".parse().unwrap());
        assert!("wrap".parse::<RingClosure>().is_err());
        assert_eq!("close", RingClosure::Close.to_string());
    }
}
