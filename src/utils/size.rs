//! Size formatting utilities.
//!
//! All sizes inside the crate are `u64` byte counts. Floating point is only
//! used here, at the display boundary.

use std::fmt;

/// Bytes in one kibibyte.
pub const KIB: u64 = 1 << 10;

/// Bytes in one mebibyte.
pub const MIB: u64 = 1 << 20;

/// Bytes in one gibibyte.
pub const GIB: u64 = 1 << 30;

/// One of the four unit tiers a size can be displayed in.
///
/// The labels are the short `KB`/`MB`/`GB` forms even though the divisors are
/// binary (powers of 1024).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
}

impl SizeUnit {
    /// Pick the tier for a byte count.
    ///
    /// Thresholds are compared with a strict `>`, so a value sitting exactly
    /// on a threshold stays in the lower tier: `1024` bytes is shown as
    /// `1024.00 B`, not `1.00 KB`.
    #[must_use]
    pub const fn for_bytes(bytes: u64) -> Self {
        if bytes > GIB {
            Self::Gigabytes
        } else if bytes > MIB {
            Self::Megabytes
        } else if bytes > KIB {
            Self::Kilobytes
        } else {
            Self::Bytes
        }
    }

    /// Number of bytes in one unit of this tier.
    #[must_use]
    pub const fn divisor(self) -> u64 {
        match self {
            Self::Bytes => 1,
            Self::Kilobytes => KIB,
            Self::Megabytes => MIB,
            Self::Gigabytes => GIB,
        }
    }

    /// Short label printed after the number.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bytes => "B",
            Self::Kilobytes => "KB",
            Self::Megabytes => "MB",
            Self::Gigabytes => "GB",
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scale a byte count into its tier, returning the value and the unit.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn scale_size(bytes: u64) -> (f64, SizeUnit) {
    let unit = SizeUnit::for_bytes(bytes);
    (bytes as f64 / unit.divisor() as f64, unit)
}

/// Format a byte count as `"<value> <unit>"` with exactly two decimals.
///
/// # Examples
///
/// ```
/// # use dir_weight::utils::format_size;
/// assert_eq!(format_size(1024), "1024.00 B");
/// assert_eq!(format_size(1025), "1.00 KB");
/// assert_eq!(format_size(1_048_577), "1.00 MB");
/// ```
#[must_use]
pub fn format_size(bytes: u64) -> String {
    let (value, unit) = scale_size(bytes);
    format!("{value:.2} {unit}")
}
