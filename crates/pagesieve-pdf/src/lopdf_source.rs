//! lopdf-backed metadata source.
//!
//! Implements [`PageMetadataSource`] using the
//! [lopdf](https://crates.io/crates/lopdf) crate. Page dimensions come
//! from the CropBox, falling back to the MediaBox inherited through the
//! page tree; bookmark labels come from a single walk of the document
//! outline tree performed at open time.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use pagesieve_core::{PageDimensions, PageMetadataSource};

use crate::error::SourceError;

/// Maximum outline nesting depth honored by the tree walk.
const MAX_OUTLINE_DEPTH: usize = 64;

/// Maximum siblings visited at one outline level.
const MAX_OUTLINE_SIBLINGS: usize = 10_000;

/// A page metadata source backed by a parsed lopdf document.
///
/// Opening walks the outline tree once and indexes each item's title
/// under its destination page; per-page queries afterwards are cheap
/// lookups.
pub struct LopdfSource {
    doc: lopdf::Document,
    /// Ordered page object ids, indexed by 0-based page number.
    page_ids: Vec<lopdf::ObjectId>,
    /// Bookmark labels per 1-based page number, in outline order.
    labels: BTreeMap<usize, Vec<String>>,
}

impl std::fmt::Debug for LopdfSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LopdfSource")
            .field("page_count", &self.page_ids.len())
            .field("labeled_pages", &self.labels.len())
            .finish_non_exhaustive()
    }
}

impl LopdfSource {
    /// Open a PDF file from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let bytes = std::fs::read(path)?;
        Self::open_bytes(&bytes)
    }

    /// Open a PDF from in-memory bytes.
    pub fn open_bytes(bytes: &[u8]) -> Result<Self, SourceError> {
        let doc = lopdf::Document::load_mem(bytes)
            .map_err(|e| SourceError::Parse(format!("failed to parse PDF: {e}")))?;
        Self::from_document(doc)
    }

    fn from_document(doc: lopdf::Document) -> Result<Self, SourceError> {
        if doc.is_encrypted() {
            return Err(SourceError::Encrypted);
        }

        // get_pages returns BTreeMap<u32, ObjectId> with 1-based keys
        let pages_map = doc.get_pages();
        let page_ids: Vec<lopdf::ObjectId> = pages_map.values().copied().collect();
        let labels = collect_outline_labels(&doc, &pages_map);

        Ok(Self {
            doc,
            page_ids,
            labels,
        })
    }

    fn page_id(&self, page: usize) -> Result<lopdf::ObjectId, SourceError> {
        if page < 1 || page > self.page_ids.len() {
            return Err(SourceError::PageOutOfRange {
                page,
                count: self.page_ids.len(),
            });
        }
        Ok(self.page_ids[page - 1])
    }
}

impl PageMetadataSource for LopdfSource {
    type Error = SourceError;

    fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    fn page_dimensions(&self, page: usize) -> Result<PageDimensions, SourceError> {
        let page_id = self.page_id(page)?;
        let rect = match own_page_box(&self.doc, page_id, b"CropBox")? {
            Some(rect) => rect,
            None => inherited_page_box(&self.doc, page_id, b"MediaBox")?.ok_or_else(|| {
                SourceError::Parse("MediaBox not found on page or ancestors".into())
            })?,
        };
        Ok(PageDimensions::new(rect.width(), rect.height()))
    }

    fn page_labels(&self, page: usize) -> Result<Option<Vec<String>>, SourceError> {
        self.page_id(page)?;
        Ok(self.labels.get(&page).cloned())
    }
}

/// A page box rectangle `[x0, y0, x1, y1]` in raw PDF coordinates.
#[derive(Debug, Clone, Copy)]
struct PageBox {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl PageBox {
    fn width(&self) -> f64 {
        (self.x1 - self.x0).abs()
    }

    fn height(&self) -> f64 {
        (self.y1 - self.y0).abs()
    }
}

/// Extract a [`PageBox`] from a lopdf array of 4 numbers.
fn box_from_array(array: &[lopdf::Object]) -> Result<PageBox, SourceError> {
    if array.len() != 4 {
        return Err(SourceError::Parse(format!(
            "expected 4-element array for box, got {}",
            array.len()
        )));
    }
    Ok(PageBox {
        x0: object_to_f64(&array[0])?,
        y0: object_to_f64(&array[1])?,
        x1: object_to_f64(&array[2])?,
        y1: object_to_f64(&array[3])?,
    })
}

/// Convert a lopdf numeric object (Integer or Real) to f64.
fn object_to_f64(obj: &lopdf::Object) -> Result<f64, SourceError> {
    match obj {
        lopdf::Object::Integer(i) => Ok(*i as f64),
        lopdf::Object::Real(f) => Ok(*f as f64),
        _ => Err(SourceError::Parse(format!("expected number, got {obj:?}"))),
    }
}

/// Look up a box `key` on the page dictionary itself, without
/// inheritance.
fn own_page_box(
    doc: &lopdf::Document,
    page_id: lopdf::ObjectId,
    key: &[u8],
) -> Result<Option<PageBox>, SourceError> {
    let dict = doc
        .get_object(page_id)
        .and_then(|o| o.as_dict())
        .map_err(|e| SourceError::Parse(format!("failed to get page dictionary: {e}")))?;

    match dict.get(key) {
        Ok(obj) => {
            let array = obj
                .as_array()
                .map_err(|e| SourceError::Parse(format!("page box is not an array: {e}")))?;
            Ok(Some(box_from_array(array)?))
        }
        Err(_) => Ok(None),
    }
}

/// Look up a box `key` on the page dictionary, walking up the page tree
/// via `/Parent` when the key is not found on the page itself.
fn inherited_page_box(
    doc: &lopdf::Document,
    page_id: lopdf::ObjectId,
    key: &[u8],
) -> Result<Option<PageBox>, SourceError> {
    let mut current_id = page_id;
    loop {
        let dict = doc
            .get_object(current_id)
            .and_then(|o| o.as_dict())
            .map_err(|e| SourceError::Parse(format!("failed to get page dictionary: {e}")))?;

        if let Ok(obj) = dict.get(key) {
            let array = obj
                .as_array()
                .map_err(|e| SourceError::Parse(format!("page box is not an array: {e}")))?;
            return Ok(Some(box_from_array(array)?));
        }

        match dict.get(b"Parent") {
            Ok(parent_obj) => {
                current_id = parent_obj
                    .as_reference()
                    .map_err(|e| SourceError::Parse(format!("invalid /Parent reference: {e}")))?;
            }
            Err(_) => return Ok(None),
        }
    }
}

/// Chase a reference to its target object; non-references pass through.
fn resolve<'a>(doc: &'a lopdf::Document, obj: &'a lopdf::Object) -> Option<&'a lopdf::Object> {
    match obj {
        lopdf::Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    }
}

/// Decode a PDF string or name object to text. Text strings with a
/// UTF-16BE BOM are decoded as UTF-16; everything else falls back to
/// UTF-8, then to Latin-1.
fn decode_pdf_string(obj: &lopdf::Object) -> Option<String> {
    match obj {
        lopdf::Object::String(bytes, _) => {
            if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
                let chars: Vec<u16> = bytes[2..]
                    .chunks(2)
                    .filter(|c| c.len() == 2)
                    .map(|c| u16::from_be_bytes([c[0], c[1]]))
                    .collect();
                String::from_utf16(&chars).ok()
            } else {
                match std::str::from_utf8(bytes) {
                    Ok(s) => Some(s.to_string()),
                    Err(_) => Some(bytes.iter().map(|&b| b as char).collect()),
                }
            }
        }
        lopdf::Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
        _ => None,
    }
}

/// Look up `key` in `dict` and decode it as a string.
fn dict_string(doc: &lopdf::Document, dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    decode_pdf_string(resolve(doc, dict.get(key).ok()?)?)
}

/// Walk the outline tree once, collecting each item's title under its
/// destination page.
fn collect_outline_labels(
    doc: &lopdf::Document,
    pages_map: &BTreeMap<u32, lopdf::ObjectId>,
) -> BTreeMap<usize, Vec<String>> {
    let mut labels = BTreeMap::new();
    if let Some(first_id) = outline_first_item(doc) {
        walk_outline(doc, first_id, 0, pages_map, &mut labels);
    }
    labels
}

/// Find the first top-level outline item, if the document has outlines.
fn outline_first_item(doc: &lopdf::Document) -> Option<lopdf::ObjectId> {
    let catalog = resolve(doc, doc.trailer.get(b"Root").ok()?)?.as_dict().ok()?;
    let outlines = resolve(doc, catalog.get(b"Outlines").ok()?)?
        .as_dict()
        .ok()?;
    match outlines.get(b"First") {
        Ok(lopdf::Object::Reference(id)) => Some(*id),
        _ => None,
    }
}

/// Walk one sibling chain of the outline tree, recursing into children.
///
/// Protected against circular references with a visited set, a sibling
/// cap, and a depth cap.
fn walk_outline(
    doc: &lopdf::Document,
    item_id: lopdf::ObjectId,
    level: usize,
    pages_map: &BTreeMap<u32, lopdf::ObjectId>,
    labels: &mut BTreeMap<usize, Vec<String>>,
) {
    if level >= MAX_OUTLINE_DEPTH {
        return;
    }

    let mut current_id = Some(item_id);
    let mut visited = HashSet::new();
    let mut sibling_count = 0;

    while let Some(node_id) = current_id {
        if !visited.insert(node_id) || sibling_count >= MAX_OUTLINE_SIBLINGS {
            break;
        }
        sibling_count += 1;

        let Ok(node_dict) = doc.get_object(node_id).and_then(|o| o.as_dict()) else {
            break;
        };

        match resolve_item_page(doc, node_dict, pages_map) {
            Some(page) => {
                let title = dict_string(doc, node_dict, b"Title").unwrap_or_default();
                labels.entry(page).or_default().push(title);
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(?node_id, "outline item without a resolvable destination");
            }
        }

        if let Ok(lopdf::Object::Reference(child_id)) = node_dict.get(b"First") {
            walk_outline(doc, *child_id, level + 1, pages_map, labels);
        }

        current_id = match node_dict.get(b"Next") {
            Ok(lopdf::Object::Reference(next_id)) => Some(*next_id),
            _ => None,
        };
    }
}

/// Resolve an outline item's destination to a 1-based page number.
///
/// Checks `/Dest` first, then `/A` action dictionaries whose `/S` is
/// `GoTo`; other action types carry no page destination.
fn resolve_item_page(
    doc: &lopdf::Document,
    node_dict: &lopdf::Dictionary,
    pages_map: &BTreeMap<u32, lopdf::ObjectId>,
) -> Option<usize> {
    if let Ok(dest_obj) = node_dict.get(b"Dest") {
        if let Some(page) = dest_page(doc, dest_obj, pages_map) {
            return Some(page);
        }
    }

    let action = resolve(doc, node_dict.get(b"A").ok()?)?.as_dict().ok()?;
    if let Ok(lopdf::Object::Name(action_type)) = action.get(b"S") {
        if String::from_utf8_lossy(action_type) == "GoTo" {
            return dest_page(doc, action.get(b"D").ok()?, pages_map);
        }
    }
    None
}

/// Resolve a destination object (an explicit array or a named
/// destination) to a 1-based page number.
fn dest_page(
    doc: &lopdf::Document,
    dest_obj: &lopdf::Object,
    pages_map: &BTreeMap<u32, lopdf::ObjectId>,
) -> Option<usize> {
    let dest_obj = resolve(doc, dest_obj)?;
    match dest_obj {
        lopdf::Object::Array(_) => dest_array_page(doc, dest_obj, pages_map),
        lopdf::Object::String(..) | lopdf::Object::Name(_) => {
            let name = decode_pdf_string(dest_obj)?;
            let target = resolve(doc, named_dest(doc, &name)?)?;
            match target {
                // A named destination may be a dictionary holding /D.
                lopdf::Object::Dictionary(dict) => {
                    dest_array_page(doc, dict.get(b"D").ok()?, pages_map)
                }
                other => dest_array_page(doc, other, pages_map),
            }
        }
        _ => None,
    }
}

/// Resolve an explicit destination array `[page_ref, /type, ...]` to a
/// 1-based page number.
fn dest_array_page(
    doc: &lopdf::Document,
    obj: &lopdf::Object,
    pages_map: &BTreeMap<u32, lopdf::ObjectId>,
) -> Option<usize> {
    let arr = resolve(doc, obj)?.as_array().ok()?;
    let lopdf::Object::Reference(page_ref) = arr.first()? else {
        return None;
    };
    pages_map
        .iter()
        .find_map(|(&page_num, &page_id)| (page_id == *page_ref).then_some(page_num as usize))
}

/// Look up a named destination through the catalog's `/Names` → `/Dests`
/// name tree, falling back to the older `/Dests` dictionary.
fn named_dest<'a>(doc: &'a lopdf::Document, name: &str) -> Option<&'a lopdf::Object> {
    let catalog = resolve(doc, doc.trailer.get(b"Root").ok()?)?.as_dict().ok()?;

    if let Ok(names_obj) = catalog.get(b"Names") {
        if let Some(names_dict) = resolve(doc, names_obj).and_then(|o| o.as_dict().ok()) {
            if let Some(dests_dict) = names_dict
                .get(b"Dests")
                .ok()
                .and_then(|o| resolve(doc, o))
                .and_then(|o| o.as_dict().ok())
            {
                if let Some(found) = lookup_name_tree(doc, dests_dict, name, 0) {
                    return Some(found);
                }
            }
        }
    }

    if let Ok(dests_obj) = catalog.get(b"Dests") {
        if let Some(dests_dict) = resolve(doc, dests_obj).and_then(|o| o.as_dict().ok()) {
            if let Ok(dest) = dests_dict.get(name.as_bytes()) {
                return Some(dest);
            }
        }
    }

    None
}

/// Scan a name-tree node's `/Names` pairs for `name`, recursing into
/// `/Kids`.
fn lookup_name_tree<'a>(
    doc: &'a lopdf::Document,
    node: &'a lopdf::Dictionary,
    name: &str,
    depth: usize,
) -> Option<&'a lopdf::Object> {
    if depth >= MAX_OUTLINE_DEPTH {
        return None;
    }

    if let Some(pairs) = node
        .get(b"Names")
        .ok()
        .and_then(|o| resolve(doc, o))
        .and_then(|o| o.as_array().ok())
    {
        for pair in pairs.chunks(2) {
            if pair.len() == 2 && decode_pdf_string(&pair[0]).as_deref() == Some(name) {
                return Some(&pair[1]);
            }
        }
    }

    if let Some(kids) = node
        .get(b"Kids")
        .ok()
        .and_then(|o| resolve(doc, o))
        .and_then(|o| o.as_array().ok())
    {
        for kid in kids {
            let Some(kid_dict) = resolve(doc, kid).and_then(|o| o.as_dict().ok()) else {
                continue;
            };
            if let Some(found) = lookup_name_tree(doc, kid_dict, name, depth + 1) {
                return Some(found);
            }
        }
    }

    None
}
