// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command implementations.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use badge_util::checksum::checksum;
use badge_util::{try_list_files, FileName, Level, PowerUp, INDICATOR_COUNT};

use crate::dir::HostDirectory;

/// Print the CRC-16 of each file.
pub fn crc(files: &[PathBuf]) -> Result<()> {
    for file in files {
        let data = fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
        println!("0x{:04X}  {}", checksum(&data), file.display());
    }
    Ok(())
}

/// List the extras menu entries for `dir`.
pub fn extras(dir: &Path, max: usize) -> Result<()> {
    if max == 0 {
        bail!("--max must be at least 1");
    }
    let path = dir
        .to_str()
        .with_context(|| format!("Path is not valid UTF-8: {}", dir.display()))?;

    let mut host = HostDirectory::new();
    let mut names = vec![FileName::new(); max];
    let count = try_list_files(&mut host, path, &mut names)
        .with_context(|| format!("Failed to list {}", dir.display()))?;

    println!("Extras in {}:", dir.display());
    for name in &names[..count] {
        println!("  {}", name);
    }
    println!("{} file(s)", count);
    if count == max {
        println!("(menu full, more files may exist)");
    }
    Ok(())
}

/// Print both indicator bars.
pub fn leds(level: u8, power_up: u8) -> Result<()> {
    if usize::from(level) > INDICATOR_COUNT || usize::from(power_up) > INDICATOR_COUNT {
        eprintln!("Warning: values above {} show as 0 on the badge", INDICATOR_COUNT);
    }

    let level = Level::from_ordinal(level);
    let power_up = PowerUp::from_ordinal(power_up);
    println!("Level:    {}  ({:?})", bar(level.pattern()), level);
    println!("Power-up: {}  ({:?})", bar(power_up.pattern()), power_up);
    Ok(())
}

/// Lowest line first, `#` for lit.
fn bar(pattern: [bool; INDICATOR_COUNT]) -> String {
    pattern.iter().map(|&lit| if lit { '#' } else { '.' }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_rendering() {
        assert_eq!(bar(Level::L0.pattern()), "....");
        assert_eq!(bar(Level::L3.pattern()), "###.");
        assert_eq!(bar(PowerUp::P4.pattern()), "####");
    }

    #[test]
    fn test_crc_missing_file_is_error() {
        let missing = std::env::temp_dir().join("badge-tool-no-such-file.bin");
        assert!(crc(&[missing]).is_err());
    }

    #[test]
    fn test_extras_rejects_zero_max() {
        assert!(extras(Path::new("."), 0).is_err());
    }
}
