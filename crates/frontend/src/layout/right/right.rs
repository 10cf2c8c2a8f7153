use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::window_event_listener;
use leptos::prelude::*;

const DEFAULT_WIDTH: f64 = 420.0;
const MIN_WIDTH: f64 = 320.0;

#[component]
pub fn Right(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let is_open = move || ctx.right_open.get();

    let width = RwSignal::new(DEFAULT_WIDTH);
    let is_resizing = RwSignal::new(false);
    let start_x = RwSignal::new(0.0f64);
    let start_width = RwSignal::new(DEFAULT_WIDTH);

    // Обработчик начала resize
    let on_resize_start = move |ev: leptos::ev::MouseEvent| {
        if !is_open() || ctx.is_mobile.get_untracked() {
            return;
        }
        is_resizing.set(true);
        start_x.set(ev.client_x() as f64);
        start_width.set(width.get_untracked());
        ev.prevent_default();
    };

    // Глобальный обработчик mousemove на window
    let _ = window_event_listener(leptos::ev::mousemove, move |ev: leptos::ev::MouseEvent| {
        if !is_resizing.get_untracked() {
            return;
        }

        let window_width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
            .unwrap_or(DEFAULT_WIDTH * 2.0);
        let max_width = (window_width * 0.5).max(MIN_WIDTH);

        let dx = start_x.get_untracked() - ev.client_x() as f64;
        let new_width = (start_width.get_untracked() + dx).clamp(MIN_WIDTH, max_width);

        width.set(new_width);
    });

    // Глобальный обработчик mouseup на window
    let _ = window_event_listener(leptos::ev::mouseup, move |_ev: leptos::ev::MouseEvent| {
        if is_resizing.get_untracked() {
            is_resizing.set(false);
        }
    });

    // Effect для управления cursor и user-select
    Effect::new(move |_| {
        let is_resizing_value = is_resizing.get();

        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            if is_resizing_value {
                let _ = body.style().set_property("cursor", "col-resize");
                let _ = body.style().set_property("user-select", "none");
            } else {
                let _ = body.style().set_property("cursor", "");
                let _ = body.style().set_property("user-select", "");
            }
        }
    });

    view! {
        <div
            data-zone="right"
            class="right-column"
            class:right-column--hidden=move || !is_open()
            class:right-column--mobile=move || ctx.is_mobile.get()
            class:right-column--resizing=move || is_resizing.get()
            style:width=move || {
                if ctx.is_mobile.get() {
                    "100%".to_string()
                } else {
                    format!("{}px", width.get())
                }
            }
        >
            <div class="right-column__resizer" on:mousedown=on_resize_start></div>
            {children()}
        </div>
    }
}
