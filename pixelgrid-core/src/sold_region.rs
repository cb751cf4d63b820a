//! Previously purchased regions of the grid.
//!
//! Regions are created by the purchase backend and only ever read here. The
//! JSON shape matches what the backend stores: rect fields at the top level
//! next to optional owner/image/link metadata.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{GridRect, Point, RegionError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoldRegion {
    pub id: String,
    #[serde(flatten)]
    pub rect: GridRect,
    /// Display name of the buyer
    #[serde(default, rename = "owner", skip_serializing_if = "Option::is_none")]
    pub owner_label: Option<String>,
    #[serde(default, rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Click-through target opened in a new tab
    #[serde(default, rename = "url", skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl SoldRegion {
    pub fn new(id: impl Into<String>, rect: GridRect) -> Self {
        Self {
            id: id.into(),
            rect,
            owner_label: None,
            image_url: None,
            link_url: None,
            alt: None,
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        self.link_url = Some(url.into());
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner_label = Some(owner.into());
        self
    }
}

/// Parse a JSON array of regions and keep only the valid ones.
///
/// A malformed document is an error. Individual regions that fall outside
/// the grid, have zero area, reuse an id or overlap an earlier region are
/// dropped with a warning so one bad record cannot blank the whole canvas.
pub fn parse_regions(json: &str, grid_size: u32) -> Result<Vec<SoldRegion>, RegionError> {
    let regions: Vec<SoldRegion> = serde_json::from_str(json)?;
    Ok(retain_valid_regions(regions, grid_size))
}

/// Drop invalid, duplicate or overlapping regions, logging each one.
///
/// Pixels are sold once, so a region overlapping an earlier kept region is
/// treated as bad data; the first one in the list wins.
pub fn retain_valid_regions(regions: Vec<SoldRegion>, grid_size: u32) -> Vec<SoldRegion> {
    let total = regions.len();
    let mut seen = HashSet::new();
    let mut valid: Vec<SoldRegion> = Vec::with_capacity(total);

    for region in regions {
        let check = region
            .rect
            .validate(grid_size)
            .and_then(|_| {
                if seen.contains(&region.id) {
                    Err(RegionError::DuplicateId(region.id.clone()))
                } else {
                    Ok(())
                }
            })
            .and_then(|_| match valid.iter().find(|kept| kept.rect.intersects(&region.rect)) {
                Some(kept) => Err(RegionError::Overlaps(kept.id.clone())),
                None => Ok(()),
            });

        match check {
            Ok(()) => {
                seen.insert(region.id.clone());
                valid.push(region);
            }
            Err(e) => log::warn!("Dropping sold region {}: {}", region.id, e),
        }
    }

    if valid.len() != total {
        log::info!("Kept {} of {} sold regions", valid.len(), total);
    }
    valid
}

/// Find the region under a logical point. Later regions are drawn on top, so
/// they win when regions overlap.
pub fn region_at(regions: &[SoldRegion], point: Point) -> Option<&SoldRegion> {
    regions
        .iter()
        .rev()
        .find(|region| region.rect.contains(point.x, point.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_json_shape() {
        let json = r#"[
            {"id": "a1", "x": 100, "y": 200, "width": 50, "height": 20,
             "owner": "Acme", "imageUrl": "https://img/a.png", "url": "https://acme.test", "alt": "Acme logo"}
        ]"#;
        let regions = parse_regions(json, 1000).unwrap();
        assert_eq!(regions.len(), 1);
        let region = &regions[0];
        assert_eq!(region.rect, GridRect::new(100, 200, 50, 20));
        assert_eq!(region.owner_label.as_deref(), Some("Acme"));
        assert_eq!(region.image_url.as_deref(), Some("https://img/a.png"));
        assert_eq!(region.link_url.as_deref(), Some("https://acme.test"));
        assert_eq!(region.alt.as_deref(), Some("Acme logo"));
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let json = r#"[{"id": "b", "x": 0, "y": 0, "width": 10, "height": 10}]"#;
        let regions = parse_regions(json, 1000).unwrap();
        assert_eq!(regions[0].image_url, None);
        assert_eq!(regions[0].link_url, None);
    }

    #[test]
    fn invalid_regions_are_dropped() {
        let json = r#"[
            {"id": "ok", "x": 0, "y": 0, "width": 10, "height": 10},
            {"id": "outside", "x": 995, "y": 0, "width": 10, "height": 10},
            {"id": "empty", "x": 0, "y": 0, "width": 0, "height": 10},
            {"id": "ok", "x": 20, "y": 20, "width": 10, "height": 10}
        ]"#;
        let regions = parse_regions(json, 1000).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].rect, GridRect::new(0, 0, 10, 10));
    }

    #[test]
    fn overlapping_regions_are_dropped() {
        let json = r#"[
            {"id": "first", "x": 0, "y": 0, "width": 100, "height": 100},
            {"id": "overlap", "x": 50, "y": 50, "width": 100, "height": 100},
            {"id": "adjacent", "x": 100, "y": 0, "width": 50, "height": 50}
        ]"#;
        let regions = parse_regions(json, 1000).unwrap();
        let ids: Vec<&str> = regions.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "adjacent"]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            parse_regions("[{\"id\": 3", 1000),
            Err(RegionError::Malformed(_))
        ));
    }

    #[test]
    fn region_at_finds_topmost_hit() {
        let regions = vec![
            SoldRegion::new("under", GridRect::new(0, 0, 100, 100)),
            SoldRegion::new("over", GridRect::new(50, 50, 100, 100)),
        ];
        assert_eq!(region_at(&regions, Point::new(75.0, 75.0)).unwrap().id, "over");
        assert_eq!(region_at(&regions, Point::new(10.0, 10.0)).unwrap().id, "under");
        assert!(region_at(&regions, Point::new(500.0, 500.0)).is_none());
    }

    #[test]
    fn serializes_with_backend_keys() {
        let region = SoldRegion::new("c", GridRect::new(1, 2, 3, 4)).with_link("https://x.test");
        let json = serde_json::to_value(&region).unwrap();
        assert_eq!(json["url"], "https://x.test");
        assert_eq!(json["x"], 1);
        assert!(json.get("imageUrl").is_none());
    }
}
