use leptos::prelude::*;

/// Re-mounts its content whenever `active_key` changes.
///
/// The enter animation is pure CSS keyed on `Transition--<name>`, so the
/// `none` name simply swaps content in place.
#[component]
pub fn Transition(
    #[prop(into)]
    name: Signal<&'static str>,
    #[prop(into)]
    active_key: Signal<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class=move || format!("Transition Transition--{}", name.get())>
            {move || {
                let key = active_key.get();
                view! {
                    <div class="Transition__slide Transition__slide--active" data-key=key>
                        {children()}
                    </div>
                }
            }}
        </div>
    }
}
