use crate::{GridRect, SoldRegion};

/// Summary numbers for the statistics overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridStats {
    pub total: u64,
    pub sold_regions: usize,
    pub sold_area: u64,
    pub available: u64,
    pub selected_area: u64,
}

impl GridStats {
    /// Region areas are summed, which is exact for lists that went through
    /// [`crate::retain_valid_regions`] since it drops overlapping regions.
    pub fn compute(grid_size: u32, regions: &[SoldRegion], selection: Option<GridRect>) -> Self {
        let total = grid_size as u64 * grid_size as u64;
        let sold_area: u64 = regions.iter().map(|r| r.rect.area()).sum();

        Self {
            total,
            sold_regions: regions.len(),
            sold_area,
            available: total.saturating_sub(sold_area),
            selected_area: selection.map(|rect| rect.area()).unwrap_or(0),
        }
    }
}

/// Format a count with thousands separators, e.g. `1,000,000`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
