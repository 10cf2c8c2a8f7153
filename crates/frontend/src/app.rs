use crate::layout::center::Center;
use crate::layout::global_context::{AppGlobalContext, ChatInfo};
use crate::layout::right::panel::RightPanel;
use crate::layout::Shell;
use contracts::shared::config::load_config;
use leptos::prelude::*;
use thaw::ConfigProvider;

const PANEL_CONFIG: &str = include_str!("../panel.toml");
const DEMO_CHAT: &str = include_str!("../fixtures/chat.json");

#[component]
pub fn App() -> impl IntoView {
    let config = load_config(Some(PANEL_CONFIG)).unwrap_or_else(|err| {
        log::warn!("Invalid panel.toml, falling back to defaults: {}", err);
        Default::default()
    });
    provide_context(config);

    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    match serde_json::from_str::<ChatInfo>(DEMO_CHAT) {
        Ok(chat) => ctx.set_chat(chat),
        Err(err) => log::error!("Failed to parse demo chat: {}", err),
    }
    ctx.init_layout_detection();
    ctx.init_router_integration();
    provide_context(ctx);

    view! {
        <ConfigProvider>
            <Shell
                center=|| view! { <Center /> }.into_any()
                right=|| view! { <RightPanel /> }.into_any()
            />
        </ConfigProvider>
    }
}
