//! Chat area stand-in: the buttons play the part of the chat's own menus
//! that route into the right column.

use crate::layout::global_context::{AppGlobalContext, RightColumnMode};
use contracts::right_header::ProfileState;
use leptos::prelude::*;

#[component]
pub fn Center() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let title = move || {
        ctx.chat
            .get()
            .map(|chat| chat.chat_id)
            .unwrap_or_default()
    };

    let entries: Vec<(&'static str, Callback<()>)> = vec![
        ("Info", Callback::new(move |_| ctx.toggle_right())),
        (
            "Members",
            Callback::new(move |_| ctx.open_profile_pane(ProfileState::MemberList)),
        ),
        (
            "Media",
            Callback::new(move |_| ctx.open_profile_pane(ProfileState::SharedMedia)),
        ),
        (
            "Stickers",
            Callback::new(move |_| ctx.open_right_column(RightColumnMode::StickerSearch)),
        ),
        (
            "GIFs",
            Callback::new(move |_| ctx.open_right_column(RightColumnMode::GifSearch)),
        ),
        (
            "Poll",
            Callback::new(move |_| ctx.open_right_column(RightColumnMode::PollResults)),
        ),
        (
            "Manage",
            Callback::new(move |_| ctx.open_right_column(RightColumnMode::Management)),
        ),
    ];

    view! {
        <div data-zone="center" class="chat" style="flex: 1; overflow: auto;">
            <div class="chat__toolbar">
                <span class="chat__title">{title}</span>
                {entries
                    .into_iter()
                    .map(|(label, action)| {
                        view! {
                            <button class="chat__toolbar-btn" on:click=move |_| action.run(())>
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="chat__messages">
                {move || {
                    let requests = ctx.scroll_up_requests.get();
                    (requests > 0).then(|| view! {
                        <div class="chat__scroll-marker" data-scroll-requests=requests></div>
                    })
                }}
            </div>
        </div>
    }
}
