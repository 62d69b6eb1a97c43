use std::path::Path;

use pagesieve::PageMetadataSource;

use crate::cli::OutputFormat;
use crate::shared::open_source;

pub fn run(file: &Path, format: &OutputFormat) -> Result<(), i32> {
    let source = open_source(file)?;
    let count = source.page_count();

    let labeled: Vec<(usize, Vec<String>)> = (1..=count)
        .filter_map(|page| match source.page_labels(page) {
            Ok(Some(labels)) => Some((page, labels)),
            _ => None,
        })
        .collect();

    match format {
        OutputFormat::Text => write_text(&labeled),
        OutputFormat::Json => write_json(&labeled),
    }
}

fn write_text(labeled: &[(usize, Vec<String>)]) -> Result<(), i32> {
    if labeled.is_empty() {
        println!("No bookmark labels found.");
        return Ok(());
    }

    println!("page\tlabel");
    for (page, labels) in labeled {
        for label in labels {
            println!("{page}\t{label}");
        }
    }

    Ok(())
}

fn write_json(labeled: &[(usize, Vec<String>)]) -> Result<(), i32> {
    let entries: Vec<serde_json::Value> = labeled
        .iter()
        .map(|(page, labels)| {
            serde_json::json!({
                "page": page,
                "labels": labels,
            })
        })
        .collect();

    println!("{}", serde_json::to_string(&entries).unwrap());

    Ok(())
}
