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
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::constants::{BERLIN_AREA_KM2, BERLIN_NAME, EQUATORIAL_EARTH_RADIUS};
use crate::errors::ErrorKind;
use crate::vector::RingClosure;

/// Values the area computation and the report depend on.
///
/// Every key of the TOML file is optional:
/// ```toml
/// earth_radius_m = 6378137.0
/// reference_area_km2 = 891.8
/// reference_name = "Berlin"
/// ring_closure = "require"
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AreaConfig {
    /// Sphere radius in meters
    pub earth_radius_m: f64,
    /// Area the grilling total is compared against, in square kilometers
    pub reference_area_km2: f64,
    pub reference_name: String,
    pub ring_closure: RingClosure,
}

impl Default for AreaConfig {
    fn default() -> Self {
        AreaConfig {
            earth_radius_m: EQUATORIAL_EARTH_RADIUS,
            reference_area_km2: BERLIN_AREA_KM2,
            reference_name: BERLIN_NAME.to_string(),
            ring_closure: RingClosure::default(),
        }
    }
}

impl AreaConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: AreaConfig = toml::from_str(&content)
            .with_context(|| "Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ErrorKind> {
        if !self.earth_radius_m.is_finite() || self.earth_radius_m <= 0.0 {
            return Err(ErrorKind::InvalidConfig {
                reason: format!("earth radius must be positive, got {}", self.earth_radius_m),
            });
        }
        if !self.reference_area_km2.is_finite() || self.reference_area_km2 <= 0.0 {
            return Err(ErrorKind::InvalidConfig {
                reason: format!("reference area must be positive, got {}", self.reference_area_km2),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = temp_dir().join("geo_util_partial_config.toml");
        fs::write(&path, "reference_area_km2 = 100.5\nring_closure = \"close\"\n").unwrap();

        let config = AreaConfig::load_from_file(&path).unwrap();

        assert_eq!(100.5, config.reference_area_km2);
        assert_eq!(RingClosure::Close, config.ring_closure);
        assert_eq!(EQUATORIAL_EARTH_RADIUS, config.earth_radius_m);
        assert_eq!("Berlin", config.reference_name);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let path = temp_dir().join("geo_util_invalid_config.toml");
        fs::write(&path, "earth_radius_m = -1.0\n").unwrap();

        let err = AreaConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err.downcast_ref::<ErrorKind>(), Some(ErrorKind::InvalidConfig { .. })));

        let config = AreaConfig {
            reference_area_km2: 0.0,
            ..AreaConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(AreaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let path = temp_dir().join("geo_util_unknown_key_config.toml");
        fs::write(&path, "berlin_area = 891.8\n").unwrap();

        assert!(AreaConfig::load_from_file(&path).is_err());
    }
}
