//! Aspect-preserving placement of a region's image inside its rectangle.

use serde::{Deserialize, Serialize};

use crate::{FloatRect, GridRect};

/// How an image is fitted to a rectangle with a different aspect ratio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FitMode {
    /// Whole image visible, centred, padded along the short axis.
    #[default]
    Contain,
    /// Rectangle fully covered, image centre-cropped along the long axis.
    Cover,
}

/// Source and destination rectangles for a single `drawImage` call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageFit {
    /// Sub-rectangle of the image, in image pixels
    pub source: FloatRect,
    /// Where that sub-rectangle lands, in logical grid units
    pub dest: FloatRect,
}

/// Compute where to draw an image of `source_dims` inside `target`.
///
/// Returns `None` for images with a zero dimension (not decoded, or broken),
/// in which case the caller falls back to a plain fill.
pub fn fit_image(source_dims: (u32, u32), target: GridRect, mode: FitMode) -> Option<ImageFit> {
    let (img_w, img_h) = source_dims;
    if img_w == 0 || img_h == 0 || target.is_empty() {
        return None;
    }

    let img_w = img_w as f64;
    let img_h = img_h as f64;
    let target_rect = FloatRect::from(target);
    let image_aspect = img_w / img_h;
    let target_aspect = target_rect.width / target_rect.height;
    let full_image = FloatRect::new(0.0, 0.0, img_w, img_h);

    let fit = match mode {
        FitMode::Contain => {
            let dest = if image_aspect > target_aspect {
                // Wider than target: full width, pad top and bottom
                let height = target_rect.width / image_aspect;
                FloatRect::new(
                    target_rect.x,
                    target_rect.y + (target_rect.height - height) / 2.0,
                    target_rect.width,
                    height,
                )
            } else {
                // Taller than target: full height, pad left and right
                let width = target_rect.height * image_aspect;
                FloatRect::new(
                    target_rect.x + (target_rect.width - width) / 2.0,
                    target_rect.y,
                    width,
                    target_rect.height,
                )
            };
            ImageFit {
                source: full_image,
                dest,
            }
        }
        FitMode::Cover => {
            let source = if image_aspect > target_aspect {
                // Wider than target: crop left and right
                let width = img_h * target_aspect;
                FloatRect::new((img_w - width) / 2.0, 0.0, width, img_h)
            } else {
                // Taller than target: crop top and bottom
                let height = img_w / target_aspect;
                FloatRect::new(0.0, (img_h - height) / 2.0, img_w, height)
            };
            ImageFit {
                source,
                dest: target_rect,
            }
        }
    };

    Some(fit)
}
