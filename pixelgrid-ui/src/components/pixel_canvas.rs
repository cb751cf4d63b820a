// pixelgrid-ui/src/components/pixel_canvas.rs
use leptos::*;
use leptos_use::use_element_size;
use pixelgrid_core::{
    render_frame, Frame, GridConfig, GridRect, GridStats, Palette, PointerDown, SoldRegion,
};
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, HtmlImageElement, PointerEvent, WheelEvent};

use crate::components::{GridStatsPanel, Toolbar};
use crate::config::REDRAW_DEBOUNCE_MS;
use crate::hooks::{use_canvas_view, use_debounced_redraw, CanvasViewHandle};
use crate::rendering::{
    canvas_local_point, detach_listener, get_2d_context, load_region_image, open_in_new_tab,
    sync_canvas_buffer, CanvasSurface, ImageCache,
};

#[component]
pub fn PixelCanvas(
    /// Previously sold regions; replaced wholesale when the list changes
    #[prop(into)]
    regions: Signal<Vec<SoldRegion>>,
    /// Fired once per completed drag-select with non-zero area
    on_selection_complete: Callback<GridRect>,
    #[prop(optional)] config: Option<GridConfig>,
) -> impl IntoView {
    let container_ref = create_node_ref::<html::Div>();
    let canvas_ref = create_node_ref::<html::Canvas>();

    let view = use_canvas_view(config.unwrap_or_default());
    let images = store_value(ImageCache::<HtmlImageElement>::new());
    let (last_selection, set_last_selection) = create_signal::<Option<GridRect>>(None);

    let draw = move || {
        // Not mounted yet: nothing to draw on
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let size = (canvas.width(), canvas.height());
        if size.0 == 0 || size.1 == 0 {
            return;
        }
        let ctx = match get_2d_context(&canvas) {
            Ok(ctx) => ctx,
            Err(e) => {
                log::warn!("Skipping redraw: {}", e);
                return;
            }
        };

        let mut surface = CanvasSurface::new(ctx, size);
        regions.with_untracked(|regions| {
            view.with_untracked(|v| {
                images.try_with_value(|images| {
                    let frame = Frame {
                        transform: v.transform(),
                        regions,
                        selection: v.selection(),
                        config: v.config(),
                        palette: &Palette::DEFAULT,
                    };
                    render_frame(&mut surface, &frame, images);
                })
            })
        });
    };
    let redraw = use_debounced_redraw(REDRAW_DEBOUNCE_MS, draw);

    // Any visible change schedules a redraw
    create_effect(move |_| {
        view.with(|_| ());
        regions.with(|_| ());
        redraw.request();
    });

    // Keep the drawing buffer matched to the element size
    let container_size = use_element_size(container_ref);
    create_effect(move |_| {
        let size = (
            container_size.width.get().floor().max(0.0) as u32,
            container_size.height.get().floor().max(0.0) as u32,
        );
        let Some(canvas) = canvas_ref.get() else {
            return;
        };

        let buffer_cleared = sync_canvas_buffer(&canvas, size);
        view.modify(|v| v.resize(size));
        if buffer_cleared {
            redraw.flush();
        }
    });

    // Start loading images for new regions; evict the rest
    create_effect(move |_| {
        let requests = regions
            .with(|regions| images.try_update_value(|cache| cache.sync(regions)))
            .unwrap_or_default();
        for request in requests {
            if let Err(e) = load_region_image(request, images, move || redraw.request()) {
                log::warn!("Could not start image load: {}", e);
            }
        }
    });

    install_wheel_listener(canvas_ref, view);

    let finish = move |finished: Option<GridRect>| {
        if let Some(rect) = finished {
            set_last_selection.set(Some(rect));
            on_selection_complete.call(rect);
        }
    };

    let on_pointer_down = move |ev: PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let point = canvas_local_point(&canvas, &ev);
        let outcome = regions.with_untracked(|regions| {
            view.update(|v| v.pointer_down(point, ev.shift_key(), regions))
        });

        match outcome {
            Some(PointerDown::OpenLink(url)) => {
                if let Err(e) = open_in_new_tab(&url) {
                    log::warn!("Could not open {}: {}", url, e);
                }
            }
            Some(PointerDown::StartedPan) | Some(PointerDown::StartedSelection) => {
                ev.prevent_default();
            }
            _ => {}
        }
    };

    let on_pointer_move = move |ev: PointerEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let point = canvas_local_point(&canvas, &ev);
        view.modify(|v| v.pointer_move(point));
    };

    let on_pointer_up = move |_: PointerEvent| finish(view.update(|v| v.pointer_up()).flatten());
    let on_pointer_leave =
        move |_: PointerEvent| finish(view.update(|v| v.pointer_leave()).flatten());

    let cursor = move || view.with(|v| v.mode().cursor()).unwrap_or("grab");
    let zoom_percent =
        Signal::derive(move || view.with(|v| v.transform().zoom_percent()).unwrap_or(100));

    let stats = Signal::derive(move || {
        let selection = view.with(|v| v.selection()).flatten().or(last_selection.get());
        let grid_size = view.with_untracked(|v| v.config().grid_size).unwrap_or(0);
        regions.with(|regions| GridStats::compute(grid_size, regions, selection))
    });

    view! {
        <div node_ref=container_ref class="relative w-full h-full overflow-hidden select-none">
            <canvas
                node_ref=canvas_ref
                class="absolute inset-0 block touch-none"
                style:cursor=cursor
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointerleave=on_pointer_leave
            />
            <Toolbar
                zoom_percent=zoom_percent
                on_zoom_out=Callback::new(move |_| {
                    view.modify(|v| v.zoom_out());
                })
                on_zoom_in=Callback::new(move |_| {
                    view.modify(|v| v.zoom_in());
                })
                on_fit=Callback::new(move |_| {
                    view.modify(|v| v.fit_to_view());
                })
                on_reset=Callback::new(move |_| {
                    view.modify(|v| v.reset_view());
                })
            />
            <GridStatsPanel stats=stats />
        </div>
    }
}

/// Wheel zoom needs a non-passive listener so the page does not scroll.
fn install_wheel_listener(canvas_ref: NodeRef<html::Canvas>, view: CanvasViewHandle) {
    let handler_storage = store_value::<Option<Closure<dyn Fn(WheelEvent)>>>(None);

    create_effect(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };

        let handler = Closure::wrap(Box::new(move |ev: WheelEvent| {
            ev.prevent_default();
            let Some(canvas) = canvas_ref.get_untracked() else {
                return;
            };
            let point = canvas_local_point(&canvas, &ev);
            view.modify(|v| v.wheel(point, ev.delta_y()));
        }) as Box<dyn Fn(WheelEvent)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        if let Err(e) = canvas.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            handler.as_ref().unchecked_ref(),
            &options,
        ) {
            log::warn!("Could not add wheel listener: {:?}", e);
        }
        handler_storage.set_value(Some(handler));

        on_cleanup(move || {
            handler_storage.try_update_value(|stored| {
                if let Some(handler) = stored.take() {
                    detach_listener(&canvas, "wheel", handler.as_ref().unchecked_ref());
                }
            });
        });
    });
}
