//! Shared in-memory fixture: a 22-page document with one landscape page
//! and production-print bookmark labels on a handful of pages.

use std::convert::Infallible;

use pagesieve_core::{PageDimensions, PageMetadataSource};

pub const STAPLE: &str = "<<  /Staple 0 /OutputType (Stacker) >> setpagedevice";
pub const JOG_0: &str = "<<  /Jog 0 >> setpagedevice";
pub const JOG_3: &str = "<<  /Jog 3 >> setpagedevice";
pub const COVER: &str = "<<  /MediaType (cover) /MediaType (cover) /MediaWeight 210.0 /MediaFrontCoating (Glossy) /MediaBackCoating (Glossy) >> setpagedevice";
pub const BOND: &str = "<<  /MediaType (bond) /MediaType (bond) /MediaWeight 90.0 /MediaFrontCoating (Any) /MediaBackCoating (Any) >> setpagedevice";

/// 22 pages of US Letter portrait, except page 9 at 17"×11" landscape.
pub struct FixtureSource;

impl PageMetadataSource for FixtureSource {
    type Error = Infallible;

    fn page_count(&self) -> usize {
        22
    }

    fn page_dimensions(&self, page: usize) -> Result<PageDimensions, Infallible> {
        if page == 9 {
            Ok(PageDimensions::new(17.0 * 72.0, 11.0 * 72.0))
        } else {
            Ok(PageDimensions::new(8.5 * 72.0, 11.0 * 72.0))
        }
    }

    fn page_labels(&self, page: usize) -> Result<Option<Vec<String>>, Infallible> {
        let labels: Option<Vec<&str>> = match page {
            4 => Some(vec![STAPLE]),
            8 => Some(vec![STAPLE, JOG_0, COVER]),
            9 => Some(vec![BOND]),
            14 => Some(vec![JOG_3, JOG_0, COVER]),
            15 => Some(vec![BOND]),
            22 => Some(vec![JOG_3]),
            _ => None,
        };
        Ok(labels.map(|l| l.into_iter().map(str::to_string).collect()))
    }
}
