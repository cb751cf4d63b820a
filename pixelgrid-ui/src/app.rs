// pixelgrid-ui/src/app.rs
use leptos::*;
use pixelgrid_core::GridRect;

use crate::components::{PixelCanvas, SelectionSummary};
use crate::config::load_grid_config;
use crate::hooks::{use_sold_regions, RegionSource};

#[component]
pub fn App() -> impl IntoView {
    let config = load_grid_config();
    let regions = use_sold_regions(RegionSource::from_page(), config.grid_size);

    let (selection, set_selection) = create_signal::<Option<GridRect>>(None);
    let on_selection_complete = Callback::new(move |rect: GridRect| {
        log::info!(
            "Selected {}x{} at ({}, {})",
            rect.width,
            rect.height,
            rect.x,
            rect.y
        );
        set_selection.set(Some(rect));
    });

    view! {
        <div class="w-screen h-screen flex flex-col bg-slate-900 text-white">
            <div class="flex-1 min-h-0">
                <PixelCanvas
                    regions=regions
                    on_selection_complete=on_selection_complete
                    config=config
                />
            </div>
            <SelectionSummary selection=selection />
        </div>
    }
}
