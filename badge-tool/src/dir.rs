// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! [`Directory`] over the host filesystem.

use std::fs::{self, ReadDir};
use std::io;

use badge_util::{DirEntry, Directory};

/// Walks one host directory at a time, like the firmware's SD card driver.
#[derive(Default)]
pub struct HostDirectory {
    entries: Option<ReadDir>,
    name: String,
}

impl HostDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Directory for HostDirectory {
    type Error = io::Error;

    fn open_dir(&mut self, path: &str) -> Result<(), io::Error> {
        self.entries = Some(fs::read_dir(path)?);
        Ok(())
    }

    fn read_entry(&mut self) -> Result<Option<DirEntry<'_>>, io::Error> {
        let Some(entries) = self.entries.as_mut() else {
            return Ok(None);
        };
        let Some(entry) = entries.next().transpose()? else {
            return Ok(None);
        };

        let is_dir = entry.file_type()?.is_dir();
        self.name = entry.file_name().to_string_lossy().into_owned();
        Ok(Some(DirEntry {
            name: &self.name,
            is_dir,
        }))
    }

    fn close_dir(&mut self) {
        self.entries = None;
    }
}
