//! Capability seams between the header and its host.
//!
//! The header reads host state only through [`StateReader`] and asks for
//! mutations only through [`CommandSink`]. Both are narrow so the resolver and
//! the presentation table can be exercised without the real store.

use super::resolver::ModeFlags;
use super::screens::{ManagementScreen, ProfileState};
use serde::{Deserialize, Serialize};

/// Exported invite link as the management screens know it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedInvite {
    pub link: String,
    pub is_revoked: bool,
    pub title: Option<String>,
    pub usage: Option<u32>,
    pub usage_limit: Option<u32>,
}

impl ExportedInvite {
    pub fn new(link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            is_revoked: false,
            title: None,
            usage: None,
            usage_limit: None,
        }
    }

    pub fn revoked(mut self, is_revoked: bool) -> Self {
        self.is_revoked = is_revoked;
        self
    }

    /// Joins left before a limited link runs out.
    pub fn usage_left(&self) -> Option<u32> {
        self.usage_limit
            .map(|limit| limit.saturating_sub(self.usage.unwrap_or(0)))
    }
}

/// Read-only facts about the chat the panel is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderContext {
    pub chat_id: Option<String>,
    pub thread_id: Option<i64>,
    /// Set only when the profile belongs to a user
    pub user_id: Option<String>,
    pub is_channel: bool,
    /// The viewer is looking at their own profile
    pub is_self: bool,
    /// The chat with self ("Saved Messages")
    pub is_saved_messages: bool,
    pub is_bot: bool,
    pub is_inside_topic: bool,
    pub is_editing_invite: bool,
    pub can_add_contact: bool,
    pub can_manage: bool,
    pub can_edit_bot: bool,
    pub can_edit_topic: bool,
    pub can_view_statistics: bool,
    pub current_invite: Option<ExportedInvite>,
    pub sticker_search_query: String,
    pub gif_search_query: String,
    pub saved_dialogs_count: u32,
    pub is_mobile: bool,
    pub should_skip_history_animations: bool,
}

/// One-way command for the host store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeaderIntent {
    ClosePanel { should_scroll_up: bool },
    SelectManagementScreen(ManagementScreen),
    SetStickerSearchQuery(String),
    SetGifSearchQuery(String),
    OpenAddContactDialog { user_id: String },
    ToggleManagement,
    ToggleStatistics,
    OpenEditTopicPanel { chat_id: String, topic_id: i64 },
    BeginEditInvite { chat_id: String, invite: ExportedInvite },
    DeleteInvite { chat_id: String, link: String },
}

impl HeaderIntent {
    /// Closing "Saved Messages" keeps the chat scroll position.
    pub fn close_panel(ctx: &HeaderContext) -> Self {
        HeaderIntent::ClosePanel {
            should_scroll_up: !ctx.is_saved_messages,
        }
    }
}

pub trait StateReader {
    fn mode_flags(&self) -> ModeFlags;
    fn profile_state(&self) -> Option<ProfileState>;
    fn management_screen(&self) -> Option<ManagementScreen>;
    fn header_context(&self) -> HeaderContext;
}

/// Fire-and-forget: the header never inspects the outcome.
pub trait CommandSink {
    fn dispatch(&self, intent: HeaderIntent);

    fn dispatch_all(&self, intents: Vec<HeaderIntent>) {
        for intent in intents {
            self.dispatch(intent);
        }
    }
}

impl<T: CommandSink + ?Sized> CommandSink for &T {
    fn dispatch(&self, intent: HeaderIntent) {
        (**self).dispatch(intent);
    }
}
