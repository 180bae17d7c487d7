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
mod cmd_area_report;
mod csv_output;
mod report;

use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use structopt::StructOpt;
use crate::cmd_area_report::{area_report, AreaReportArgs};

/// Prints the area of each grilling spot and how much of the city they cover
#[derive(StructOpt)]
struct Cli {

    #[structopt(long, default_value = "Warn")]
    log_level: LevelFilter,

    #[structopt(flatten)]
    report: AreaReportArgs,
}

fn run() -> Result<()> {

    let args = Cli::from_args();

    SimpleLogger::new().with_level(args.log_level).init()?;

    area_report(&args.report)?;

    Ok(())
}

fn main() {
    run().unwrap();
}
