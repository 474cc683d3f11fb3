// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Command-line arguments.
#[derive(Parser)]
#[command(name = "badge-tool")]
#[command(about = "Host companion tool for the badge firmware")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the badge CRC-16 of each file
    Crc {
        /// Files to checksum
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },

    /// List the .RAW artwork the extras menu would show for a directory
    Extras {
        /// Directory to scan (e.g., a mounted SD card)
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Maximum number of entries, like the firmware's menu size
        #[arg(short, long, default_value = "16")]
        max: usize,
    },

    /// Show the LED bar patterns for a level and power-up
    Leds {
        /// Player level (0-4)
        #[arg(value_name = "LEVEL")]
        level: u8,

        /// Power-up strength (0-4)
        #[arg(short, long, default_value = "0")]
        power_up: u8,
    },
}

/// Execute the parsed CLI command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Crc { files } => commands::crc(&files),
        Commands::Extras { dir, max } => commands::extras(&dir, max),
        Commands::Leds { level, power_up } => commands::leds(level, power_up),
    }
}
