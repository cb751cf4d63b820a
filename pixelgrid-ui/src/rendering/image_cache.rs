//! Per-region image cache.
//!
//! Images load asynchronously and independently. A region whose image fails
//! keeps its fallback fill for as long as its URL stays the same; a late
//! success is accepted only if the region still wants that URL.

use std::collections::HashMap;

use leptos::StoredValue;
use pixelgrid_core::{RegionImages, SoldRegion};
use wasm_bindgen::prelude::*;
use web_sys::HtmlImageElement;

use crate::error::CanvasError;

#[derive(Clone, Debug, PartialEq)]
pub enum ImageState<I> {
    Loading,
    Ready { image: I, dims: (u32, u32) },
    Failed,
}

#[derive(Clone, Debug)]
struct Entry<I> {
    url: String,
    state: ImageState<I>,
}

/// A load the cache wants started: `(region id, image url)`.
pub type ImageRequest = (String, String);

#[derive(Clone, Debug)]
pub struct ImageCache<I> {
    entries: HashMap<String, Entry<I>>,
}

impl<I> ImageCache<I> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Reconcile with a new region list. Entries for vanished regions or
    /// changed URLs are dropped; returns the loads that need starting.
    pub fn sync(&mut self, regions: &[SoldRegion]) -> Vec<ImageRequest> {
        let wanted: HashMap<&str, &str> = regions
            .iter()
            .filter_map(|r| r.image_url.as_deref().map(|url| (r.id.as_str(), url)))
            .collect();

        self.entries
            .retain(|id, entry| wanted.get(id.as_str()) == Some(&entry.url.as_str()));

        let mut requests = Vec::new();
        for (id, url) in wanted {
            if !self.entries.contains_key(id) {
                self.entries.insert(
                    id.to_string(),
                    Entry {
                        url: url.to_string(),
                        state: ImageState::Loading,
                    },
                );
                requests.push((id.to_string(), url.to_string()));
            }
        }
        requests
    }

    /// Store a decoded image. Returns false if the region no longer wants it.
    pub fn mark_ready(&mut self, id: &str, url: &str, image: I, dims: (u32, u32)) -> bool {
        match self.entries.get_mut(id) {
            Some(entry) if entry.url == url && matches!(entry.state, ImageState::Loading) => {
                entry.state = ImageState::Ready { image, dims };
                true
            }
            _ => false,
        }
    }

    pub fn mark_failed(&mut self, id: &str, url: &str) -> bool {
        match self.entries.get_mut(id) {
            Some(entry) if entry.url == url && matches!(entry.state, ImageState::Loading) => {
                entry.state = ImageState::Failed;
                true
            }
            _ => false,
        }
    }

    pub fn state(&self, id: &str) -> Option<&ImageState<I>> {
        self.entries.get(id).map(|entry| &entry.state)
    }
}

impl<I> Default for ImageCache<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> RegionImages for ImageCache<I> {
    type Image = I;

    fn loaded(&self, region: &SoldRegion) -> Option<(&I, (u32, u32))> {
        let entry = self.entries.get(&region.id)?;
        if region.image_url.as_deref() != Some(entry.url.as_str()) {
            return None;
        }
        match &entry.state {
            ImageState::Ready { image, dims } => Some((image, *dims)),
            _ => None,
        }
    }
}

/// Start loading a region's image in the browser.
///
/// `on_ready` runs once, after the image is decoded and accepted by the cache.
pub fn load_region_image(
    request: ImageRequest,
    cache: StoredValue<ImageCache<HtmlImageElement>>,
    on_ready: impl Fn() + 'static,
) -> Result<(), CanvasError> {
    let (id, url) = request;
    let img = HtmlImageElement::new()?;
    img.set_cross_origin(Some("anonymous"));

    let onload = {
        let img = img.clone();
        let (id, url) = (id.clone(), url.clone());
        Closure::once_into_js(move || {
            let dims = (img.natural_width(), img.natural_height());
            let accepted = cache
                .try_update_value(|c| c.mark_ready(&id, &url, img.clone(), dims))
                .unwrap_or(false);
            if accepted {
                on_ready();
            }
        })
    };

    let onerror = {
        let (id, url) = (id.clone(), url.clone());
        Closure::once_into_js(move || {
            log::warn!("Failed to load image for region {}: {}", id, url);
            cache.try_update_value(|c| c.mark_failed(&id, &url));
        })
    };

    img.set_onload(Some(onload.unchecked_ref()));
    img.set_onerror(Some(onerror.unchecked_ref()));
    img.set_src(&url);
    Ok(())
}
