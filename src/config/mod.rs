//! Configuration management.
//!
//! `ScanConfig` is the validated input of a single scan; `AppSettings`
//! holds user defaults loaded from an XDG-compliant settings file.

mod scan;
mod settings;

pub use scan::ScanConfig;
pub use settings::AppSettings;
