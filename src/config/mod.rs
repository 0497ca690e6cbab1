//! Configuration types.
//!
//! - [`ScanOptions`] - how directory trees are walked
//! - [`DisplayOptions`] - cosmetic report settings
//! - [`FileConfig`] - the optional on-disk TOML file both are resolved from

pub mod display;
pub mod file;
pub mod scan;

pub use display::DisplayOptions;
pub use file::FileConfig;
pub use scan::ScanOptions;
