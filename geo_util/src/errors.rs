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
use thiserror::Error;

#[derive(Clone, PartialEq, Debug, Error)]
pub enum ErrorKind {
    #[error("Feature '{feature}' has a ring with {count} positions, at least 2 are needed")]
    TooFewPositions {
        feature: String,
        count: usize,
    },
    #[error("Feature '{feature}' has a position with {len} ordinates, expected [lon, lat]")]
    InvalidPosition {
        feature: String,
        len: usize,
    },
    #[error("Feature '{feature}' has a ring whose last position is not its first position")]
    UnclosedRing {
        feature: String,
    },
    #[error("Feature '{}' has an unsupported geometry: {}", feature, reason)]
    UnsupportedGeometry {
        feature: String,
        reason: String,
    },
    #[error("No features to report on")]
    EmptyFeatureCollection,
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        reason: String,
    },
}
