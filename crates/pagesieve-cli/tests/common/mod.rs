#![allow(dead_code)]

//! Shared helpers: in-memory PDF generation for CLI tests.

use std::io::Write;

use lopdf::{Object, dictionary};
use tempfile::NamedTempFile;

/// Six pages, page 3 landscape, outline entries on pages 1, 3, 4, and 6.
pub fn sample_pdf() -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");

    let sizes: [(i64, i64); 6] = [
        (612, 792),
        (612, 792),
        (792, 612),
        (612, 792),
        (612, 792),
        (612, 792),
    ];

    let mut page_ids = Vec::new();
    for (width, height) in sizes {
        let page_dict = dictionary! {
            "Type" => "Page",
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(width),
                Object::Integer(height),
            ],
        };
        page_ids.push(doc.add_object(page_dict));
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(6),
    });
    for &pid in &page_ids {
        if let Ok(dict) = doc.get_object_mut(pid).and_then(|o| o.as_dict_mut()) {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    let items = [
        ("Intro", 0usize),
        ("Media setup", 2),
        ("Media teardown", 3),
        ("Index", 5),
    ];
    let item_ids: Vec<lopdf::ObjectId> = items
        .iter()
        .map(|(title, page_idx)| {
            doc.add_object(dictionary! {
                "Title" => Object::string_literal(*title),
                "Dest" => vec![
                    Object::Reference(page_ids[*page_idx]),
                    Object::Name(b"Fit".to_vec()),
                ],
            })
        })
        .collect();
    for window in item_ids.windows(2) {
        if let Ok(dict) = doc.get_object_mut(window[0]).and_then(|o| o.as_dict_mut()) {
            dict.set("Next", Object::Reference(window[1]));
        }
        if let Ok(dict) = doc.get_object_mut(window[1]).and_then(|o| o.as_dict_mut()) {
            dict.set("Prev", Object::Reference(window[0]));
        }
    }
    let outlines_id = doc.add_object(dictionary! {
        "Type" => "Outlines",
        "First" => Object::Reference(item_ids[0]),
        "Last" => Object::Reference(*item_ids.last().unwrap()),
        "Count" => Object::Integer(items.len() as i64),
    });

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
        "Outlines" => Object::Reference(outlines_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    save(&mut doc)
}

/// Two portrait pages, no outline.
pub fn no_outline_pdf() -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");

    let mut page_ids = Vec::new();
    for _ in 0..2 {
        page_ids.push(doc.add_object(dictionary! {
            "Type" => "Page",
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ],
        }));
    }
    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(2),
    });
    for &pid in &page_ids {
        if let Ok(dict) = doc.get_object_mut(pid).and_then(|o| o.as_dict_mut()) {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    save(&mut doc)
}

fn save(doc: &mut lopdf::Document) -> Vec<u8> {
    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Write `bytes` to a temp file kept alive by the returned handle.
pub fn write_temp(bytes: &[u8]) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(bytes).unwrap();
    tmp
}
