//! RightHeader - заголовок правой колонки
//!
//! Resolves which header variant to show from the store, renders its title or
//! search field plus toolbar, and forwards clicks to the store as intents.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{ConfirmDialog, SearchInput, Transition};
use crate::shared::i18n::{lang, lang_text};
use crate::shared::icons::icon;
use contracts::right_header::presentation::{Activation, ButtonColor, HeaderBody, SearchTarget};
use contracts::right_header::resolver::resolve_from;
use contracts::right_header::{
    is_back_button, present, CommandSink, ConfirmPrompt, HeaderIntent, HeaderPresentation,
    StateReader, ToolbarAction, TransitionTracker,
};
use contracts::shared::config::PanelConfig;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn RightHeader() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let config = leptos::context::use_context::<PanelConfig>().unwrap_or_default();

    let tracker = StoredValue::new(TransitionTracker::new(
        ctx.right_open.get_untracked(),
        &config,
    ));
    // Dropping the handle cancels the pending release.
    let release_timer = StoredValue::new_local(None::<Timeout>);
    let is_suppressed = RwSignal::new(tracker.with_value(|t| t.is_suppressed()));

    Effect::new(move |_| {
        let is_open = ctx.right_open.get();
        let request = tracker
            .try_update_value(|t| t.set_column_open(is_open))
            .flatten();

        let Some(request) = request else {
            is_suppressed.set(tracker.with_value(|t| t.is_suppressed()));
            release_timer.set_value(None);
            return;
        };

        is_suppressed.set(true);
        let timeout = Timeout::new(request.delay_ms, move || {
            let released = tracker
                .try_update_value(|t| t.on_timer(request.token))
                .unwrap_or(false);
            if released {
                is_suppressed.set(false);
            }
        });
        release_timer.set_value(Some(timeout));
    });

    on_cleanup(move || {
        release_timer.set_value(None);
    });

    let content = Memo::new(move |_| resolve_from(&ctx));
    let rendering = Memo::new(move |_| {
        let kind = content.get();
        tracker.try_update_value(|t| t.render_key(kind)).unwrap_or(kind)
    });
    let presentation = Memo::new(move |_| {
        let mut presentation = present(rendering.get(), &ctx.header_context());
        // SearchInput reads the query live; typing must not remount it
        if let Some(HeaderPresentation {
            body: HeaderBody::Search(field),
            ..
        }) = presentation.as_mut()
        {
            field.query.clear();
        }
        presentation
    });

    let is_back = Memo::new(move |_| {
        is_back_button(content.get(), &ctx.mode_flags(), &ctx.header_context())
    });
    let skip_transition = move || {
        is_suppressed.get() || ctx.should_skip_history_animations.get()
    };
    let transition_name = Signal::derive(move || {
        is_suppressed.track();
        let skip_history = ctx.should_skip_history_animations.get();
        tracker.with_value(|t| t.transition_name(skip_history)).css_name()
    });
    let active_key = Signal::derive(move || rendering.get().key());

    // Action waiting for the confirmation dialog
    let pending_action = RwSignal::new(None::<ToolbarAction>);
    let confirm_open = RwSignal::new(false);

    let run_action = move |action: ToolbarAction| match action.trigger(&ctx) {
        Activation::Dispatched => {}
        Activation::NeedsConfirmation(_) => {
            pending_action.set(Some(action.clone()));
            confirm_open.set(true);
        }
    };

    let prompt_text = move |pick: fn(&ConfirmPrompt) -> &'static str| {
        Signal::derive(move || {
            pending_action.with(|action| {
                action
                    .as_ref()
                    .and_then(|action| action.confirm.as_ref())
                    .map(|prompt| lang(pick(prompt)))
                    .unwrap_or_default()
            })
        })
    };
    let is_destructive = Signal::derive(move || {
        pending_action.with(|action| {
            action
                .as_ref()
                .and_then(|action| action.confirm)
                .is_some_and(|prompt| prompt.is_destructive)
        })
    });

    let on_confirm = Callback::new(move |_: ()| {
        if let Some(action) = pending_action.get_untracked() {
            action.confirm_with(&ctx);
        }
        pending_action.set(None);
        confirm_open.set(false);
    });

    let handle_close = move |_| {
        let intent = HeaderIntent::close_panel(&ctx.header_context());
        ctx.dispatch(intent);
    };

    let render_body = move |presentation: HeaderPresentation| match presentation.body {
        HeaderBody::Title { title, subtitle } => match subtitle {
            Some(subtitle) => view! {
                <div class="right-header__titles">
                    <h3 class="right-header__title">{lang_text(&title)}</h3>
                    <div class="right-header__subtitle">{lang_text(&subtitle)}</div>
                </div>
            }
            .into_any(),
            None => view! { <h3 class="right-header__title">{lang_text(&title)}</h3> }.into_any(),
        },
        HeaderBody::Search(field) => {
            let placeholder = lang(field.placeholder_key);
            let target = field.target;
            let query = Signal::derive(move || match target {
                SearchTarget::Stickers => ctx.sticker_search_query.get(),
                SearchTarget::Gifs => ctx.gif_search_query.get(),
            });
            let on_change = Callback::new(move |text: String| {
                ctx.dispatch(field.change_intent(text));
            });
            view! {
                <SearchInput
                    value=query
                    placeholder=placeholder
                    auto_focus=true
                    on_change=on_change
                />
            }
            .into_any()
        }
    };

    let render_tools = move |tools: Vec<ToolbarAction>| {
        tools
            .into_iter()
            .map(|action| {
                let label = lang(action.aria_label_key);
                let icon_name = action.icon.name();
                let is_danger = action.color == ButtonColor::Danger;
                view! {
                    <span class="right-header__tool" class:right-header__tool--danger=is_danger>
                        <Button
                            shape=ButtonShape::Circular
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            attr:aria-label=label
                            on_click=move |_| run_action(action.clone())
                        >
                            {icon(icon_name)}
                        </Button>
                    </span>
                }
            })
            .collect_view()
    };

    view! {
        <div class="right-header">
            <span class="right-header__close">
                <Button
                    shape=ButtonShape::Circular
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    attr:aria-label=move || {
                        if is_back.get() { lang("Common.Back") } else { lang("Common.Close") }
                    }
                    on_click=handle_close
                >
                    <div
                        class="animated-close-icon"
                        class:state-back=move || is_back.get()
                        class:no-transition=skip_transition
                    ></div>
                </Button>
            </span>
            <Transition name=transition_name active_key=active_key>
                {move || {
                    presentation
                        .get()
                        .map(|presentation| {
                            let tools = presentation.tools.clone();
                            view! {
                                {render_body(presentation)}
                                <section class="right-header__tools">{render_tools(tools)}</section>
                            }
                        })
                }}
            </Transition>
            <ConfirmDialog
                open=confirm_open
                title=prompt_text(|prompt| prompt.title_key)
                text=prompt_text(|prompt| prompt.text_key)
                confirm_label=prompt_text(|prompt| prompt.confirm_label_key)
                confirm_is_destructive=is_destructive
                on_confirm=on_confirm
            />
        </div>
    }
}
