//! Embedded screen art.

const BANNER_RAW: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/banner.txt"));
const LOADER_RAW: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/loader.txt"));

/// Background banner art revealed after the loader.
pub fn banner() -> &'static str {
    BANNER_RAW
}

/// Loader overlay art shown while the gate warms up.
pub fn loader() -> &'static str {
    LOADER_RAW
}
