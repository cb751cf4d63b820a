// pixelgrid-ui/src/components/grid_stats.rs
use leptos::*;
use pixelgrid_core::{format_count, GridStats};

#[component]
fn StatRow(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="flex justify-between gap-4">
            <span class="text-gray-400">{label}</span>
            <span class="font-mono">{move || value.get()}</span>
        </div>
    }
}

/// Pixel counts for the whole grid and the current selection.
#[component]
pub fn GridStatsPanel(stats: Signal<GridStats>) -> impl IntoView {
    let stat = move |f: fn(&GridStats) -> u64| Signal::derive(move || format_count(f(&stats.get())));

    view! {
        <div class="absolute bottom-3 right-3 min-w-48 px-3 py-2 rounded-lg bg-black/50 backdrop-blur-sm text-white text-xs space-y-1 pointer-events-none">
            <StatRow label="Total pixels" value=stat(|s| s.total) />
            <StatRow label="Sold regions" value=stat(|s| s.sold_regions as u64) />
            <StatRow label="Sold pixels" value=stat(|s| s.sold_area) />
            <StatRow label="Available" value=stat(|s| s.available) />
            <Show when=move || { stats.get().selected_area > 0 }>
                <StatRow label="Selected" value=stat(|s| s.selected_area) />
            </Show>
        </div>
    }
}
