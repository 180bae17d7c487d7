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
use std::time::Duration;

pub fn format_duration(d: Duration) -> String {
    let mut secs = d.as_secs();
    let hours = secs / 3600;
    secs = secs % 3600;
    let minutes = secs / 60;
    secs = secs % 60;

    let ms = d.as_millis() % 1000;

    format!("{}h {}m {}s {}ms", hours, minutes, secs, ms )
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!("0h 0m 0s 250ms", format_duration(Duration::from_millis(250)));
        assert_eq!("1h 1m 5s 7ms", format_duration(Duration::from_millis(3_665_007)));
    }
}

