// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Listing of `.RAW` artwork files on removable storage.

use core::fmt;

use heapless::String;

use crate::config::{EXTRAS_EXTENSION, FILE_NAME_LEN};

/// Base name of an 8.3 file, without the extension.
pub type FileName = String<FILE_NAME_LEN>;

/// One entry returned by [`Directory::read_entry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirEntry<'a> {
    pub name: &'a str,
    pub is_dir: bool,
}

/// Minimal directory iteration provided by the filesystem driver.
pub trait Directory {
    type Error;

    fn open_dir(&mut self, path: &str) -> Result<(), Self::Error>;

    /// Next entry of the open directory, `None` at the end.
    fn read_entry(&mut self) -> Result<Option<DirEntry<'_>>, Self::Error>;

    fn close_dir(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError<E> {
    /// The directory could not be opened.
    Open(E),
}

impl<E: fmt::Debug> fmt::Display for ListError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::Open(e) => write!(f, "cannot open directory: {:?}", e),
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug> std::error::Error for ListError<E> {}

/// List `.RAW` files under `path` into `out`; returns how many were written.
///
/// Open failures are logged and reported as zero files, so callers cannot
/// tell them apart from an empty directory. Use [`try_list_files`] when that
/// matters.
pub fn list_files<D: Directory>(dir: &mut D, path: &str, out: &mut [FileName]) -> usize {
    match try_list_files(dir, path, out) {
        Ok(count) => count,
        Err(ListError::Open(_)) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("Can't open directory {}", path);
            0
        }
    }
}

/// Like [`list_files`], but an open failure is returned as an error.
///
/// A read error part-way through ends the listing; the names gathered so far
/// are kept.
pub fn try_list_files<D: Directory>(
    dir: &mut D,
    path: &str,
    out: &mut [FileName],
) -> Result<usize, ListError<D::Error>> {
    dir.open_dir(path).map_err(ListError::Open)?;

    let mut count = 0;
    while count < out.len() {
        let entry = match dir.read_entry() {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Read error in {}, stopping after {} files", path, count);
                break;
            }
        };

        if entry.is_dir {
            continue;
        }
        if let Some(name) = extras_name(entry.name) {
            out[count] = name;
            count += 1;
        }
    }

    dir.close_dir();
    Ok(count)
}

/// Base name of `file_name` if it carries the extras extension and fits 8.3.
pub fn extras_name(file_name: &str) -> Option<FileName> {
    let (base, ext) = file_name.rsplit_once('.')?;
    if base.is_empty() || !ext.eq_ignore_ascii_case(EXTRAS_EXTENSION) {
        return None;
    }
    FileName::try_from(base).ok()
}
