use std::path::Path;

use pagesieve::{LopdfSource, Orientation};

/// Open a PDF file with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is not
/// found or cannot be parsed as a valid PDF.
pub fn open_source(file: &Path) -> Result<LopdfSource, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    LopdfSource::open(file).map_err(|e| {
        eprintln!("Error: failed to open PDF: {e}");
        1
    })
}

/// Convert an `Orientation` to a lowercase string.
pub fn orientation_str(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Portrait => "portrait",
        Orientation::Landscape => "landscape",
    }
}
