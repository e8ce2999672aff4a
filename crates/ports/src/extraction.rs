// crates/ports/src/extraction.rs
use std::path::Path;

/// Port for reading the sales total from a single file.
///
/// Implementations absorb every failure and report `0.0` instead.
pub trait RecordExtractor {
    fn extract_total(&self, path: &Path) -> f64;
}
