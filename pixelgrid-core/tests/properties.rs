use pixelgrid_core::{snap_selection, CanvasView, GridConfig, Point, ViewTransform};
use proptest::prelude::*;

fn transform_strategy() -> impl Strategy<Value = ViewTransform> {
    (0.1f64..50.0, -5000.0f64..5000.0, -5000.0f64..5000.0)
        .prop_map(|(zoom, x, y)| ViewTransform::new(zoom, Point::new(x, y)))
}

proptest! {
    #[test]
    fn screen_to_logical_stays_on_grid(
        transform in transform_strategy(),
        px in -1.0e6f64..1.0e6,
        py in -1.0e6f64..1.0e6,
    ) {
        let logical = transform.screen_to_logical(Point::new(px, py), 1000.0);
        prop_assert!((0.0..=1000.0).contains(&logical.x));
        prop_assert!((0.0..=1000.0).contains(&logical.y));
    }

    #[test]
    fn roundtrip_for_in_bounds_points(
        transform in transform_strategy(),
        lx in 0.0f64..1000.0,
        ly in 0.0f64..1000.0,
    ) {
        let screen = transform.logical_to_screen(Point::new(lx, ly));
        let back = transform.logical_to_screen(transform.screen_to_logical(screen, 1000.0));
        let tolerance = 1e-6 * (1.0 + screen.x.abs().max(screen.y.abs()));
        prop_assert!((back.x - screen.x).abs() < tolerance);
        prop_assert!((back.y - screen.y).abs() < tolerance);
    }

    #[test]
    fn zoom_stays_within_bounds(
        deltas in prop::collection::vec(-500.0f64..500.0, 1..60),
        buttons in prop::collection::vec(any::<bool>(), 0..20),
        px in 0.0f64..800.0,
        py in 0.0f64..600.0,
    ) {
        let config = GridConfig::DEFAULT;
        let mut view = CanvasView::new(config);
        view.resize((800, 600));
        for delta in deltas {
            view.wheel(Point::new(px, py), delta);
            let zoom = view.transform().zoom;
            prop_assert!(zoom >= config.min_zoom && zoom <= config.max_zoom);
        }
        for zoom_in in buttons {
            if zoom_in { view.zoom_in(); } else { view.zoom_out(); }
            let zoom = view.transform().zoom;
            prop_assert!(zoom >= config.min_zoom && zoom <= config.max_zoom);
        }
    }

    #[test]
    fn snapped_selection_is_aligned_and_on_grid(
        ax in 0.0f64..=1000.0,
        ay in 0.0f64..=1000.0,
        cx in 0.0f64..=1000.0,
        cy in 0.0f64..=1000.0,
    ) {
        let config = GridConfig::DEFAULT;
        let rect = snap_selection(Point::new(ax, ay), Point::new(cx, cy), &config);
        for value in [rect.x, rect.y, rect.width, rect.height] {
            prop_assert_eq!(value % config.snap_unit, 0);
        }
        prop_assert!(rect.right() <= config.grid_size);
        prop_assert!(rect.bottom() <= config.grid_size);
    }

    #[test]
    fn snapped_selection_covers_both_drag_endpoints(
        ax in 0.0f64..=1000.0,
        ay in 0.0f64..=1000.0,
        cx in 0.0f64..=1000.0,
        cy in 0.0f64..=1000.0,
    ) {
        prop_assume!((ax, ay) != (cx, cy));
        let config = GridConfig::DEFAULT;
        let rect = snap_selection(Point::new(ax, ay), Point::new(cx, cy), &config);
        // Tolerance absorbs division rounding a hair's breadth from a cell edge
        let eps = 1e-9;
        prop_assert!(rect.x as f64 <= ax.min(cx) + eps);
        prop_assert!(rect.y as f64 <= ay.min(cy) + eps);
        prop_assert!(rect.right() as f64 >= ax.max(cx) - eps);
        prop_assert!(rect.bottom() as f64 >= ay.max(cy) - eps);
    }
}

#[test]
fn snapped_selection_crossing_a_cell_boundary() {
    let rect = snap_selection(
        Point::new(108.0, 108.0),
        Point::new(112.0, 112.0),
        &GridConfig::DEFAULT,
    );
    assert_eq!((rect.x, rect.y, rect.width, rect.height), (100, 100, 20, 20));
}
