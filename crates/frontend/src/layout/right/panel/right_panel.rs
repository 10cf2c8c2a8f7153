//! Right panel component - содержимое правой колонки
//!
//! Header on top, the active screen below it.

use crate::layout::global_context::{AppGlobalContext, RightColumnMode};
use crate::layout::right::header::RightHeader;
use crate::shared::i18n::{lang, lang_text};
use contracts::right_header::{ExportedInvite, LangText};
use leptos::prelude::*;

/// "12 people joined", or the joins left for a limited link.
fn usage_text(invite: &ExportedInvite) -> Option<String> {
    if let Some(left) = invite.usage_left() {
        return Some(lang_text(&LangText::plural("CanJoin", left)));
    }
    invite
        .usage
        .map(|usage| lang_text(&LangText::plural("PeopleJoined", usage)))
}

#[component]
pub fn RightPanel() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let invites = move || {
        ctx.chat
            .get()
            .map(|chat| chat.invites)
            .unwrap_or_default()
    };

    view! {
        <div class="app-panel__content">
            <RightHeader />
            <div class="right-panel__body">
                <Show when=move || ctx.right_mode.get() == Some(RightColumnMode::Management)>
                    <ul class="invite-list">
                        <For
                            each=invites
                            key=|invite| invite.link.clone()
                            children=move |invite| {
                                let link = invite.link.clone();
                                view! {
                                    <li
                                        class="invite-list__item"
                                        class:invite-list__item--revoked=invite.is_revoked
                                        on:click=move |_| ctx.inspect_invite(&link)
                                    >
                                        <span class="invite-list__title">
                                            {invite.title.clone().unwrap_or_else(|| lang("InviteLink"))}
                                        </span>
                                        <span class="invite-list__link">{invite.link.clone()}</span>
                                        {usage_text(&invite)
                                            .map(|text| view! { <span class="invite-list__usage">{text}</span> })}
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </div>
        </div>
    }
}
