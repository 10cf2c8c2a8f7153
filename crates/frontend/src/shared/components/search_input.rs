use crate::shared::icons::icon;
use leptos::html;
use leptos::prelude::*;

/// Search box that echoes `value` and reports every edit
#[component]
pub fn SearchInput(
    /// Current query, owned by the caller
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Focus the field once mounted
    #[prop(optional)]
    auto_focus: bool,
) -> impl IntoView {
    let input_ref = NodeRef::<html::Input>::new();
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    Effect::new(move |_| {
        if !auto_focus {
            return;
        }
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let emit = move |query: String| {
        if let Some(handler) = on_change {
            handler.run(query);
        }
    };

    view! {
        <div class="search-input" class:search-input--filled=move || !value.get().is_empty()>
            <span class="search-input__icon">{icon("search")}</span>
            <input
                node_ref=input_ref
                class="form__input search-input__field"
                type="text"
                prop:value=move || value.get()
                placeholder=input_placeholder
                on:input=move |ev| emit(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button class="search-input__clear" on:click=move |_| emit(String::new())>
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
