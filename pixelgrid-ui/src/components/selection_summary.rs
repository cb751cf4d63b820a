// pixelgrid-ui/src/components/selection_summary.rs
use leptos::*;
use pixelgrid_core::{format_count, GridRect};

/// Host-side read-out of the last completed selection.
#[component]
pub fn SelectionSummary(#[prop(into)] selection: Signal<Option<GridRect>>) -> impl IntoView {
    let summary = move || match selection.get() {
        Some(rect) => format!(
            "Selected {} × {} at ({}, {}): {} pixels",
            rect.width,
            rect.height,
            rect.x,
            rect.y,
            format_count(rect.area())
        ),
        None => "No selection yet".to_string(),
    };

    view! {
        <div class="px-4 py-3 bg-black/50 text-white text-sm text-center">
            {summary}
        </div>
    }
}
