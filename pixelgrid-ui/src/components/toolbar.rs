// pixelgrid-ui/src/components/toolbar.rs
use leptos::*;

#[component]
fn ToolbarButton(
    on_click: Callback<()>,
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class="text-white hover:text-gray-200 hover:bg-white/10 rounded px-2 py-1 text-sm transition-colors"
            on:click=move |_| on_click.call(())
            title=title
        >
            {children()}
        </button>
    }
}

/// Zoom and view controls shown over the canvas.
#[component]
pub fn Toolbar(
    /// Current zoom as a rounded percentage
    zoom_percent: Signal<u32>,
    on_zoom_out: Callback<()>,
    on_zoom_in: Callback<()>,
    on_fit: Callback<()>,
    on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="absolute top-3 left-3 flex flex-col gap-2 pointer-events-none">
            <div class="flex items-center gap-1 px-2 py-1 rounded-lg bg-black/50 backdrop-blur-sm pointer-events-auto">
                <ToolbarButton on_click=on_zoom_out title="Zoom out">"−"</ToolbarButton>
                <span class="w-14 text-center text-white text-sm font-mono">
                    {move || format!("{}%", zoom_percent.get())}
                </span>
                <ToolbarButton on_click=on_zoom_in title="Zoom in">"+"</ToolbarButton>
                <ToolbarButton on_click=on_fit title="Fit grid to view">"Fit"</ToolbarButton>
                <ToolbarButton on_click=on_reset title="Reset to 100%">"Reset"</ToolbarButton>
            </div>
            <div class="px-2 py-1 rounded-lg bg-black/50 text-gray-300 text-xs space-x-3">
                <span>"Drag to pan"</span>
                <span>"Shift+Drag to select"</span>
                <span>"Scroll to zoom"</span>
            </div>
        </div>
    }
}
