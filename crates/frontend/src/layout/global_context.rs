use contracts::right_header::{
    CommandSink, ExportedInvite, HeaderContext, HeaderIntent, ManagementScreen, ModeFlags,
    ProfileState, StateReader,
};
use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Thread id of a forum's general chat, not a real topic
pub const MAIN_THREAD_ID: i64 = -1;

const MOBILE_MEDIA_QUERY: &str = "(max-width: 600px)";

/// What the right column is currently used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RightColumnMode {
    Profile,
    PollResults,
    StickerSearch,
    GifSearch,
    AddingMembers,
    Management,
    Statistics,
    MessageStatistics,
    StoryStatistics,
    MonetizationStatistics,
    BoostStatistics,
    CreatingTopic,
    EditingTopic,
}

impl RightColumnMode {
    pub fn code(&self) -> &'static str {
        match self {
            RightColumnMode::Profile => "profile",
            RightColumnMode::PollResults => "poll",
            RightColumnMode::StickerSearch => "stickers",
            RightColumnMode::GifSearch => "gifs",
            RightColumnMode::AddingMembers => "add-members",
            RightColumnMode::Management => "management",
            RightColumnMode::Statistics => "stats",
            RightColumnMode::MessageStatistics => "message-stats",
            RightColumnMode::StoryStatistics => "story-stats",
            RightColumnMode::MonetizationStatistics => "monetization",
            RightColumnMode::BoostStatistics => "boosts",
            RightColumnMode::CreatingTopic => "new-topic",
            RightColumnMode::EditingTopic => "edit-topic",
        }
    }

    pub fn all() -> Vec<RightColumnMode> {
        vec![
            RightColumnMode::Profile,
            RightColumnMode::PollResults,
            RightColumnMode::StickerSearch,
            RightColumnMode::GifSearch,
            RightColumnMode::AddingMembers,
            RightColumnMode::Management,
            RightColumnMode::Statistics,
            RightColumnMode::MessageStatistics,
            RightColumnMode::StoryStatistics,
            RightColumnMode::MonetizationStatistics,
            RightColumnMode::BoostStatistics,
            RightColumnMode::CreatingTopic,
            RightColumnMode::EditingTopic,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|mode| mode.code() == code)
    }
}

/// Flags the header resolves from; exactly one mode flag is set by the router.
pub fn mode_flags(is_open: bool, mode: Option<RightColumnMode>) -> ModeFlags {
    let mut flags = ModeFlags {
        is_column_open: is_open,
        ..ModeFlags::default()
    };
    let Some(mode) = mode else {
        return flags;
    };
    match mode {
        RightColumnMode::Profile => flags.is_profile = true,
        RightColumnMode::PollResults => flags.is_poll_results = true,
        RightColumnMode::StickerSearch => flags.is_sticker_search = true,
        RightColumnMode::GifSearch => flags.is_gif_search = true,
        RightColumnMode::AddingMembers => flags.is_adding_members = true,
        RightColumnMode::Management => flags.is_management = true,
        RightColumnMode::Statistics => flags.is_statistics = true,
        RightColumnMode::MessageStatistics => flags.is_message_statistics = true,
        RightColumnMode::StoryStatistics => flags.is_story_statistics = true,
        RightColumnMode::MonetizationStatistics => flags.is_monetization_statistics = true,
        RightColumnMode::BoostStatistics => flags.is_boost_statistics = true,
        RightColumnMode::CreatingTopic => flags.is_creating_topic = true,
        RightColumnMode::EditingTopic => flags.is_editing_topic = true,
    }
    flags
}

/// Snapshot of the chat shown in the right column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatInfo {
    pub chat_id: String,
    pub thread_id: Option<i64>,
    pub user_id: Option<String>,
    pub is_channel: bool,
    pub is_forum: bool,
    pub is_self: bool,
    pub is_saved_messages: bool,
    pub is_bot: bool,
    pub can_add_contact: bool,
    pub can_manage: bool,
    pub can_edit_bot: bool,
    pub can_manage_topic: bool,
    pub can_view_statistics: bool,
    pub saved_dialogs_count: u32,
    #[serde(default)]
    pub invites: Vec<ExportedInvite>,
}

impl ChatInfo {
    pub fn is_inside_topic(&self) -> bool {
        self.is_forum && self.thread_id.is_some_and(|id| id != MAIN_THREAD_ID)
    }
}

/// Query-string form of the right column route: `?right=management&screen=invites`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RightColumnRoute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen: Option<String>,
}

impl RightColumnRoute {
    pub fn mode(&self) -> Option<RightColumnMode> {
        self.right.as_deref().and_then(RightColumnMode::from_code)
    }

    /// A missing sub-state means the first screen; an unknown one stays `None`.
    pub fn profile_state(&self) -> Option<ProfileState> {
        match self.profile.as_deref() {
            None => Some(ProfileState::Profile),
            Some(code) => ProfileState::from_code(code),
        }
    }

    pub fn management_screen(&self) -> Option<ManagementScreen> {
        match self.screen.as_deref() {
            None => Some(ManagementScreen::Initial),
            Some(code) => ManagementScreen::from_code(code),
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub right_open: RwSignal<bool>,
    pub right_mode: RwSignal<Option<RightColumnMode>>,
    pub profile_state: RwSignal<Option<ProfileState>>,
    pub management_screen: RwSignal<Option<ManagementScreen>>,
    pub chat: RwSignal<Option<ChatInfo>>,
    /// Link of the invite opened on the invite info screen
    pub inspected_invite: RwSignal<Option<String>>,
    pub editing_invite: RwSignal<Option<ExportedInvite>>,
    pub sticker_search_query: RwSignal<String>,
    pub gif_search_query: RwSignal<String>,
    pub add_contact_user: RwSignal<Option<String>>,
    pub scroll_up_requests: RwSignal<u32>,
    pub is_mobile: RwSignal<bool>,
    pub should_skip_history_animations: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            right_open: RwSignal::new(false),
            right_mode: RwSignal::new(None),
            profile_state: RwSignal::new(Some(ProfileState::Profile)),
            management_screen: RwSignal::new(Some(ManagementScreen::Initial)),
            chat: RwSignal::new(None),
            inspected_invite: RwSignal::new(None),
            editing_invite: RwSignal::new(None),
            sticker_search_query: RwSignal::new(String::new()),
            gif_search_query: RwSignal::new(String::new()),
            add_contact_user: RwSignal::new(None),
            scroll_up_requests: RwSignal::new(0),
            is_mobile: RwSignal::new(false),
            should_skip_history_animations: RwSignal::new(false),
        }
    }

    pub fn set_chat(&self, chat: ChatInfo) {
        log::info!("Right column chat: {}", chat.chat_id);
        self.chat.set(Some(chat));
    }

    pub fn init_layout_detection(&self) {
        use wasm_bindgen::prelude::*;
        use wasm_bindgen::JsCast;

        let Some(query) = window().and_then(|w| w.match_media(MOBILE_MEDIA_QUERY).ok().flatten())
        else {
            return;
        };
        self.is_mobile.set(query.matches());

        let is_mobile = self.is_mobile;
        let on_change = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
            log::debug!("Layout changed, mobile: {}", event.matches());
            is_mobile.set(event.matches());
        }) as Box<dyn FnMut(_)>);
        let _ = query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
        on_change.forget(); // Keep the closure alive for the page lifetime
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let route: RightColumnRoute =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(mode) = route.mode() {
            log::debug!("Restoring right column from URL: {:?}", route);
            self.profile_state.set(route.profile_state());
            self.management_screen.set(route.management_screen());
            self.right_mode.set(Some(mode));
            self.right_open.set(true);
        }

        let this = *self;
        Effect::new(move |_| {
            let route = this.current_route();
            let query_string = serde_qs::to_string(&route).unwrap_or_default();

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search.trim_start_matches('?') != query_string {
                let new_url = format!("?{}", query_string);
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    fn current_route(&self) -> RightColumnRoute {
        let mode = if self.right_open.get() {
            self.right_mode.get()
        } else {
            None
        };
        let Some(mode) = mode else {
            return RightColumnRoute::default();
        };
        RightColumnRoute {
            right: Some(mode.code().to_string()),
            profile: (mode == RightColumnMode::Profile)
                .then(|| self.profile_state.get().map(|s| s.code().to_string()))
                .flatten(),
            screen: (mode == RightColumnMode::Management)
                .then(|| self.management_screen.get().map(|s| s.code().to_string()))
                .flatten(),
        }
    }

    pub fn open_right_column(&self, mode: RightColumnMode) {
        log::debug!("open_right_column: {:?}", mode);
        if mode == RightColumnMode::Profile && self.profile_state.get_untracked().is_none() {
            self.profile_state.set(Some(ProfileState::Profile));
        }
        if mode == RightColumnMode::Management {
            self.finish_invite_edit();
            self.management_screen.set(Some(ManagementScreen::Initial));
        }
        self.right_mode.set(Some(mode));
        self.right_open.set(true);
    }

    pub fn open_profile_pane(&self, state: ProfileState) {
        self.profile_state.set(Some(state));
        self.open_right_column(RightColumnMode::Profile);
    }

    pub fn inspect_invite(&self, link: &str) {
        self.inspected_invite.set(Some(link.to_string()));
        self.open_right_column(RightColumnMode::Management);
        self.management_screen.set(Some(ManagementScreen::InviteInfo));
    }

    /// Drops the invite editor state once its screen is left.
    fn finish_invite_edit(&self) {
        if self.editing_invite.with_untracked(Option::is_some) {
            self.editing_invite.set(None);
        }
    }

    /// Steps one screen back, closing the column from a top-level screen.
    ///
    /// A full close keeps `right_mode` so the outgoing header can still be
    /// presented while the column slides shut.
    fn close_right_column(&self, should_scroll_up: bool) {
        if should_scroll_up {
            self.scroll_up_requests.update(|n| *n += 1);
        }

        let mode = self.right_mode.get_untracked();
        match mode {
            Some(RightColumnMode::Management) => match self.management_screen.get_untracked() {
                Some(ManagementScreen::InviteInfo) | Some(ManagementScreen::EditInvite) => {
                    self.finish_invite_edit();
                    self.management_screen.set(Some(ManagementScreen::Invites));
                }
                Some(ManagementScreen::Initial) | None => {
                    self.right_mode.set(Some(RightColumnMode::Profile));
                }
                Some(_) => self.management_screen.set(Some(ManagementScreen::Initial)),
            },
            Some(RightColumnMode::Profile)
                if self.profile_state.get_untracked() != Some(ProfileState::Profile) =>
            {
                self.profile_state.set(Some(ProfileState::Profile));
            }
            Some(RightColumnMode::MessageStatistics) | Some(RightColumnMode::StoryStatistics) => {
                self.right_mode.set(Some(RightColumnMode::Statistics));
            }
            Some(RightColumnMode::AddingMembers) => {
                self.right_mode.set(Some(RightColumnMode::Profile));
            }
            _ => {
                self.finish_invite_edit();
                self.right_open.set(false);
            }
        }
    }

    fn toggle_mode(&self, mode: RightColumnMode) {
        if self.right_open.get_untracked() && self.right_mode.get_untracked() == Some(mode) {
            self.right_mode.set(Some(RightColumnMode::Profile));
        } else {
            self.open_right_column(mode);
        }
    }

    fn delete_invite(&self, chat_id: &str, link: &str) {
        self.chat.update(|chat| {
            if let Some(chat) = chat.as_mut().filter(|c| c.chat_id == chat_id) {
                chat.invites.retain(|invite| invite.link != link);
            }
        });
        if self.inspected_invite.get_untracked().as_deref() == Some(link) {
            self.inspected_invite.set(None);
        }
        self.finish_invite_edit();
    }

    pub fn toggle_right(&self) {
        if self.right_open.get_untracked() {
            self.finish_invite_edit();
            self.right_open.set(false);
        } else {
            self.open_right_column(RightColumnMode::Profile);
        }
    }
}

impl StateReader for AppGlobalContext {
    fn mode_flags(&self) -> ModeFlags {
        let is_open = self.right_open.get();
        mode_flags(is_open, self.right_mode.get().filter(|_| is_open))
    }

    fn profile_state(&self) -> Option<ProfileState> {
        self.profile_state.get()
    }

    fn management_screen(&self) -> Option<ManagementScreen> {
        self.management_screen.get()
    }

    /// Also answers for the last open mode while the column is closing.
    fn header_context(&self) -> HeaderContext {
        let mode = self.right_mode.get();
        let mut ctx = HeaderContext {
            sticker_search_query: self.sticker_search_query.get(),
            gif_search_query: self.gif_search_query.get(),
            is_mobile: self.is_mobile.get(),
            should_skip_history_animations: self.should_skip_history_animations.get(),
            is_editing_invite: self.editing_invite.with(Option::is_some),
            ..HeaderContext::default()
        };
        let Some(chat) = self.chat.get() else {
            return ctx;
        };

        let is_profile = mode == Some(RightColumnMode::Profile);
        let is_management = mode == Some(RightColumnMode::Management);
        let is_inside_topic = chat.is_inside_topic();
        let inspected = self.inspected_invite.get();

        ctx.user_id = chat.user_id.clone().filter(|_| is_profile);
        ctx.is_channel = chat.is_channel;
        ctx.is_self = chat.is_self;
        ctx.is_saved_messages = chat.is_saved_messages;
        ctx.is_bot = chat.is_bot;
        ctx.is_inside_topic = is_inside_topic;
        ctx.can_add_contact = is_profile && chat.user_id.is_some() && chat.can_add_contact;
        ctx.can_manage = !is_management && is_profile && chat.can_manage;
        ctx.can_edit_bot = chat.is_bot && chat.can_edit_bot;
        ctx.can_edit_topic = is_inside_topic && chat.can_manage_topic;
        ctx.can_view_statistics = !is_inside_topic && chat.can_view_statistics;
        ctx.current_invite = inspected.and_then(|link| {
            chat.invites
                .iter()
                .find(|invite| invite.link == link)
                .cloned()
        });
        ctx.saved_dialogs_count = chat.saved_dialogs_count;
        ctx.thread_id = chat.thread_id;
        ctx.chat_id = Some(chat.chat_id);
        ctx
    }
}

impl CommandSink for AppGlobalContext {
    fn dispatch(&self, intent: HeaderIntent) {
        log::debug!("Header intent: {:?}", intent);
        match intent {
            HeaderIntent::ClosePanel { should_scroll_up } => {
                self.close_right_column(should_scroll_up)
            }
            HeaderIntent::SelectManagementScreen(screen) => {
                if screen != ManagementScreen::EditInvite {
                    self.finish_invite_edit();
                }
                self.management_screen.set(Some(screen))
            }
            HeaderIntent::SetStickerSearchQuery(query) => self.sticker_search_query.set(query),
            HeaderIntent::SetGifSearchQuery(query) => self.gif_search_query.set(query),
            HeaderIntent::OpenAddContactDialog { user_id } => {
                self.add_contact_user.set(Some(user_id))
            }
            HeaderIntent::ToggleManagement => self.toggle_mode(RightColumnMode::Management),
            HeaderIntent::ToggleStatistics => self.toggle_mode(RightColumnMode::Statistics),
            HeaderIntent::OpenEditTopicPanel { chat_id, topic_id } => {
                log::info!("Editing topic {} in {}", topic_id, chat_id);
                self.open_right_column(RightColumnMode::EditingTopic);
            }
            HeaderIntent::BeginEditInvite { invite, .. } => self.editing_invite.set(Some(invite)),
            HeaderIntent::DeleteInvite { chat_id, link } => self.delete_invite(&chat_id, &link),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::right_header::{present, resolve_from, HeaderContent, TransitionTracker};

    fn fixture_chat() -> ChatInfo {
        serde_json::from_str(include_str!("../../fixtures/chat.json")).unwrap()
    }

    fn user_chat() -> ChatInfo {
        ChatInfo {
            chat_id: "42".to_string(),
            user_id: Some("42".to_string()),
            can_add_contact: true,
            invites: vec![],
            ..fixture_chat()
        }
    }

    #[test]
    fn test_mode_codes_round_trip() {
        for mode in RightColumnMode::all() {
            assert_eq!(RightColumnMode::from_code(mode.code()), Some(mode));
        }
        assert_eq!(RightColumnMode::from_code("nope"), None);
    }

    #[test]
    fn test_mode_flags_set_one_flag() {
        let closed = mode_flags(false, None);
        assert_eq!(closed, ModeFlags::default());

        let flags = mode_flags(true, Some(RightColumnMode::BoostStatistics));
        assert!(flags.is_column_open);
        assert!(flags.is_boost_statistics);
        assert!(!flags.is_statistics);
    }

    #[test]
    fn test_route_parsing() {
        let route: RightColumnRoute = serde_qs::from_str("right=management&screen=invites").unwrap();
        assert_eq!(route.mode(), Some(RightColumnMode::Management));
        assert_eq!(route.management_screen(), Some(ManagementScreen::Invites));
        assert_eq!(route.profile_state(), Some(ProfileState::Profile));

        let broken: RightColumnRoute = serde_qs::from_str("right=management&screen=bogus").unwrap();
        assert_eq!(broken.management_screen(), None);

        let empty: RightColumnRoute = serde_qs::from_str("").unwrap();
        assert_eq!(empty.mode(), None);
        assert_eq!(serde_qs::to_string(&empty).unwrap(), "");
    }

    #[test]
    fn test_fixture_chat_parses() {
        let chat = fixture_chat();
        assert_eq!(chat.invites.len(), 2);
        assert!(chat.invites[1].is_revoked);
        assert!(!chat.is_inside_topic());
    }

    #[test]
    fn test_inside_topic_skips_main_thread() {
        let forum = ChatInfo {
            is_forum: true,
            thread_id: Some(MAIN_THREAD_ID),
            ..fixture_chat()
        };
        assert!(!forum.is_inside_topic());

        let topic = ChatInfo {
            thread_id: Some(7),
            ..forum.clone()
        };
        assert!(topic.is_inside_topic());

        let general = ChatInfo {
            thread_id: None,
            ..forum
        };
        assert!(!general.is_inside_topic());
    }

    #[test]
    fn test_closing_keeps_outgoing_header() {
        Owner::new().with(|| {
            let store = AppGlobalContext::new();
            store.set_chat(user_chat());
            store.open_right_column(RightColumnMode::Profile);

            let mut tracker = TransitionTracker::with_delay(true, 550);
            let key = tracker.render_key(resolve_from(&store));
            assert_eq!(key, HeaderContent::Profile);
            let open = present(key, &store.header_context()).unwrap();
            assert_eq!(open.title_key(), Some("lng_info_user_title"));

            store.dispatch(HeaderIntent::ClosePanel {
                should_scroll_up: true,
            });
            assert!(!store.right_open.get_untracked());
            assert_eq!(resolve_from(&store), HeaderContent::Closed);
            tracker.set_column_open(false);

            let key = tracker.render_key(resolve_from(&store));
            assert_eq!(key, HeaderContent::Profile);
            assert_eq!(present(key, &store.header_context()), Some(open));
        });
    }

    #[test]
    fn test_leaving_invite_editor_clears_edit_state() {
        Owner::new().with(|| {
            let store = AppGlobalContext::new();
            let chat = fixture_chat();
            let chat_id = chat.chat_id.clone();
            let invite = chat.invites[0].clone();
            store.set_chat(chat);
            store.inspect_invite(&invite.link);

            store.dispatch_all(vec![
                HeaderIntent::BeginEditInvite {
                    chat_id: chat_id.clone(),
                    invite: invite.clone(),
                },
                HeaderIntent::SelectManagementScreen(ManagementScreen::EditInvite),
            ]);
            assert!(store.header_context().is_editing_invite);

            store.dispatch(HeaderIntent::ClosePanel {
                should_scroll_up: true,
            });
            assert_eq!(
                store.management_screen.get_untracked(),
                Some(ManagementScreen::Invites)
            );
            assert!(!store.header_context().is_editing_invite);

            // Creating a new link after an edit
            store.dispatch(HeaderIntent::SelectManagementScreen(ManagementScreen::EditInvite));
            let kind = resolve_from(&store);
            assert_eq!(kind, HeaderContent::ManageEditInvite);
            assert_eq!(
                present(kind, &store.header_context()).unwrap().title_key(),
                Some("NewLink")
            );

            store.dispatch(HeaderIntent::BeginEditInvite {
                chat_id: chat_id.clone(),
                invite,
            });
            while store.right_open.get_untracked() {
                store.dispatch(HeaderIntent::ClosePanel {
                    should_scroll_up: true,
                });
            }
            assert!(!store.header_context().is_editing_invite);
        });
    }

    #[test]
    fn test_delete_invite_ends_edit() {
        Owner::new().with(|| {
            let store = AppGlobalContext::new();
            let chat = fixture_chat();
            let chat_id = chat.chat_id.clone();
            let invite = chat.invites[1].clone();
            store.set_chat(chat);
            store.inspect_invite(&invite.link);

            store.dispatch(HeaderIntent::BeginEditInvite {
                chat_id: chat_id.clone(),
                invite: invite.clone(),
            });
            store.dispatch(HeaderIntent::DeleteInvite {
                chat_id,
                link: invite.link.clone(),
            });

            let ctx = store.header_context();
            assert!(!ctx.is_editing_invite);
            assert_eq!(ctx.current_invite, None);
            assert_eq!(store.chat.get_untracked().unwrap().invites.len(), 1);
        });
    }
}
