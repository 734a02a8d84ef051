// This file is part of unit-converter.
//
// unit-converter is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// unit-converter is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::{
    io::{self, Write},
    process::exit,
};

use clap::{self, CommandFactory, Parser};
use log::{debug, info};

use unit_converter::{COPYRIGHT, convert::Converter, utils};

/// A Unit Conversion Service
///
/// Reads conversion requests from standard input, one per line, and
/// answers each on standard output.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Whether the application is being run by systemd
    #[arg(long)]
    systemd: bool,

    /// Build the manpage
    #[arg(long)]
    man: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.man {
        let mut buffer: Vec<u8> = Vec::default();
        let cmd = Args::command()
            .name("unit-converter-service")
            .long_version(None);
        let man = clap_mangen::Man::new(cmd).date("2026-08-25");

        man.render(&mut buffer)?;
        write!(buffer, "{COPYRIGHT}")?;

        std::fs::write("unit-converter-service.1", buffer)?;
        return Ok(());
    }

    utils::init_logger(args.systemd);

    // The input stream closing is the shutdown signal, an interrupt ends
    // the loop without further output.
    ctrlc::set_handler(|| exit(0))?;

    let converter = Converter::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut buffer = String::new();

    writeln!(stdout, "READY")?;
    stdout.flush()?;
    info!("ready, waiting for requests");

    loop {
        buffer.clear();
        if stdin.read_line(&mut buffer)? == 0 {
            break;
        }

        if let Some(response) = converter.read_line(&buffer) {
            debug!("{} -> {response}", buffer.trim_end());
            writeln!(stdout, "{response}")?;
            stdout.flush()?;
        }
    }

    info!("input closed, shutting down");
    Ok(())
}
