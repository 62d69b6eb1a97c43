use std::path::Path;

use pagesieve::PageSelector;

use crate::cli::{MatchArg, OrientationArg, OutputFormat, ParityArg};
use crate::shared::open_source;

#[allow(clippy::too_many_arguments)]
pub fn run(
    file: &Path,
    pages: Option<&str>,
    parity: Option<ParityArg>,
    orientation: Option<OrientationArg>,
    match_mode: Option<MatchArg>,
    text: &str,
    format: &OutputFormat,
) -> Result<(), i32> {
    let source = open_source(file)?;

    let mut selector = PageSelector::new();
    if let Some(spec) = pages {
        selector.set_page_ranges(spec);
    }
    selector.parity = parity.map(Into::into);
    selector.orientation = orientation.map(Into::into);
    if let Some(mode) = match_mode {
        selector.match_mode = mode.into();
    }
    selector.match_text = text.to_string();
    selector.read_document_info(&source);

    let selected: Vec<usize> = selector.pages().collect();

    match format {
        OutputFormat::Text => {
            for page in &selected {
                println!("{page}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&selected).unwrap());
        }
    }

    Ok(())
}
