use std::path::Path;

use pagesieve::PageMetadataSource;

use crate::cli::OutputFormat;
use crate::shared::{open_source, orientation_str};

pub fn run(file: &Path, format: &OutputFormat) -> Result<(), i32> {
    let source = open_source(file)?;
    let count = source.page_count();

    let mut rows = Vec::with_capacity(count);
    for page in 1..=count {
        let dims = source.page_dimensions(page).map_err(|e| {
            eprintln!("Error: page {page}: {e}");
            1
        })?;
        rows.push((page, dims));
    }

    match format {
        OutputFormat::Text => {
            println!("pages: {count}");
            println!("page\twidth\theight\torientation");
            for (page, dims) in &rows {
                println!(
                    "{page}\t{:.1}\t{:.1}\t{}",
                    dims.width,
                    dims.height,
                    orientation_str(dims.orientation())
                );
            }
        }
        OutputFormat::Json => {
            let pages: Vec<serde_json::Value> = rows
                .iter()
                .map(|(page, dims)| {
                    serde_json::json!({
                        "page": page,
                        "width": dims.width,
                        "height": dims.height,
                        "orientation": orientation_str(dims.orientation()),
                    })
                })
                .collect();
            let doc = serde_json::json!({
                "pages": count,
                "page_info": pages,
            });
            println!("{}", serde_json::to_string(&doc).unwrap());
        }
    }

    Ok(())
}
