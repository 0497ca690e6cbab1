//! The categorized listing produced for one directory, and its printer.

use std::io::{self, Write};

use colored::Colorize;

use crate::{
    error::ScanError,
    utils::{SizeUnit, format_size, scale_size},
};

use super::{DirectoryEntry, EntryKind};

/// Files and directories found in one directory, plus their combined size.
///
/// Entries keep the order the filesystem enumerated them in. The total always
/// equals the sum of every entry's size.
#[derive(Debug, Default)]
pub struct Report {
    /// File entries, in encounter order
    pub files: Vec<DirectoryEntry>,

    /// Directory entries, in encounter order
    pub directories: Vec<DirectoryEntry>,

    /// Sum of every entry's size in bytes
    pub total_size: u64,

    /// Non-fatal problems hit while building the report, in the order raised
    pub errors: Vec<ScanError>,
}

impl Report {
    /// Record an entry in its category and add its size to the total.
    pub fn push(&mut self, entry: DirectoryEntry) {
        self.total_size += entry.size;

        match entry.kind {
            EntryKind::File => self.files.push(entry),
            EntryKind::Directory => self.directories.push(entry),
        }
    }

    /// Number of entries in both categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len() + self.directories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.directories.is_empty()
    }

    /// The report as plain lines: files, then directories, then the total.
    #[must_use]
    pub fn render_lines(&self) -> Vec<String> {
        self.entries()
            .map(|entry| format!("{} {}", entry.kind, entry.label()))
            .chain(std::iter::once(format!(
                "Total size: {}",
                format_size(self.total_size)
            )))
            .collect()
    }

    /// Write the coloured report to `out`.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for entry in self.entries() {
            let marker = match entry.kind {
                EntryKind::File => entry.kind.marker().bright_green(),
                EntryKind::Directory => entry.kind.marker().bright_blue(),
            };
            writeln!(out, "{marker} {}: {}", entry.name, colored_size(entry.size))?;
        }

        writeln!(out, "Total size: {}", colored_size(self.total_size))
    }

    /// Print the coloured report to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if stdout cannot be written to.
    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)?;
        out.flush()
    }

    fn entries(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.files.iter().chain(&self.directories)
    }
}

/// Like [`format_size`], but with the `GB` unit highlighted in red.
fn colored_size(bytes: u64) -> String {
    let (value, unit) = scale_size(bytes);

    match unit {
        SizeUnit::Gigabytes => format!("{value:.2} {}", unit.label().red()),
        _ => format!("{value:.2} {unit}"),
    }
}
