//! Adaptive grid-line spacing.
//!
//! Lines start at the base spacing and are coarsened by powers of ten until
//! neighbouring lines are far enough apart on screen.

use crate::GridConfig;

/// Spacing between grid lines in logical units, or `None` when the view is
/// zoomed out so far that lines would only add noise.
pub fn grid_line_spacing(zoom: f64, config: &GridConfig) -> Option<u32> {
    if zoom < config.line_min_zoom {
        return None;
    }

    let mut spacing = config.base_line_spacing;
    while (spacing as f64) * zoom < config.min_screen_line_spacing
        && spacing < config.max_line_spacing
    {
        spacing = spacing.saturating_mul(10);
    }
    Some(spacing.min(config.max_line_spacing))
}

/// Logical positions of grid lines along one axis, both grid edges included.
pub fn grid_line_positions(spacing: u32, grid_size: u32) -> impl Iterator<Item = u32> {
    (0..=grid_size).step_by(spacing.max(1) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_at_unit_zoom() {
        assert_eq!(grid_line_spacing(1.0, &GridConfig::DEFAULT), Some(100));
    }

    #[test]
    fn spacing_at_high_zoom_uses_base() {
        assert_eq!(grid_line_spacing(5.0, &GridConfig::DEFAULT), Some(10));
        assert_eq!(grid_line_spacing(50.0, &GridConfig::DEFAULT), Some(10));
    }

    #[test]
    fn spacing_at_fit_zoom() {
        assert_eq!(grid_line_spacing(0.54, &GridConfig::DEFAULT), Some(100));
    }

    #[test]
    fn spacing_is_capped() {
        assert_eq!(grid_line_spacing(0.02, &GridConfig::DEFAULT), Some(1000));
    }

    #[test]
    fn no_lines_below_threshold() {
        assert_eq!(grid_line_spacing(0.005, &GridConfig::DEFAULT), None);
    }

    #[test]
    fn screen_spacing_meets_minimum_unless_capped() {
        let config = GridConfig::DEFAULT;
        for zoom in [0.1, 0.3, 0.5, 0.9, 1.0, 2.0, 4.9, 5.0, 12.0] {
            let spacing = grid_line_spacing(zoom, &config).unwrap();
            assert!(
                spacing as f64 * zoom >= config.min_screen_line_spacing
                    || spacing == config.max_line_spacing,
                "zoom {} gave spacing {}",
                zoom,
                spacing
            );
        }
    }

    #[test]
    fn positions_include_both_edges() {
        let positions: Vec<u32> = grid_line_positions(250, 1000).collect();
        assert_eq!(positions, vec![0, 250, 500, 750, 1000]);
    }
}
