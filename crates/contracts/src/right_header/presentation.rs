//! Title/toolbar table: what each [`HeaderContent`] looks like.
//!
//! Titles are translation keys; the view layer owns the dictionary.

use super::content::HeaderContent;
use super::intents::{CommandSink, HeaderContext, HeaderIntent};
use super::screens::ManagementScreen;
use serde::Serialize;

/// Translation key with an optional plural count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LangText {
    pub key: &'static str,
    pub count: Option<u32>,
}

impl LangText {
    pub fn new(key: &'static str) -> Self {
        Self { key, count: None }
    }

    pub fn plural(key: &'static str, count: u32) -> Self {
        Self {
            key,
            count: Some(count),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ToolIcon {
    Edit,
    Delete,
    AddUser,
    Stats,
}

impl ToolIcon {
    pub fn name(&self) -> &'static str {
        match self {
            ToolIcon::Edit => "edit",
            ToolIcon::Delete => "delete",
            ToolIcon::AddUser => "add-user",
            ToolIcon::Stats => "stats",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ButtonColor {
    Translucent,
    Danger,
}

/// Confirmation that must be accepted before an action's intents go out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfirmPrompt {
    pub title_key: &'static str,
    pub text_key: &'static str,
    pub confirm_label_key: &'static str,
    pub is_destructive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolbarAction {
    pub icon: ToolIcon,
    pub aria_label_key: &'static str,
    pub color: ButtonColor,
    pub intents: Vec<HeaderIntent>,
    pub confirm: Option<ConfirmPrompt>,
}

/// Result of clicking a toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation<'a> {
    Dispatched,
    NeedsConfirmation(&'a ConfirmPrompt),
}

impl ToolbarAction {
    fn new(icon: ToolIcon, aria_label_key: &'static str, intents: Vec<HeaderIntent>) -> Self {
        Self {
            icon,
            aria_label_key,
            color: ButtonColor::Translucent,
            intents,
            confirm: None,
        }
    }

    /// Dispatches right away unless the action is guarded by a prompt.
    pub fn trigger<S: CommandSink + ?Sized>(&self, sink: &S) -> Activation<'_> {
        match &self.confirm {
            Some(prompt) => Activation::NeedsConfirmation(prompt),
            None => {
                self.confirm_with(sink);
                Activation::Dispatched
            }
        }
    }

    /// Called once the user accepted the prompt.
    pub fn confirm_with<S: CommandSink + ?Sized>(&self, sink: &S) {
        for intent in &self.intents {
            sink.dispatch(intent.clone());
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchTarget {
    Stickers,
    Gifs,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchField {
    pub target: SearchTarget,
    pub query: String,
    pub placeholder_key: &'static str,
}

impl SearchField {
    pub fn change_intent(&self, query: String) -> HeaderIntent {
        match self.target {
            SearchTarget::Stickers => HeaderIntent::SetStickerSearchQuery(query),
            SearchTarget::Gifs => HeaderIntent::SetGifSearchQuery(query),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum HeaderBody {
    Title {
        title: LangText,
        subtitle: Option<LangText>,
    },
    Search(SearchField),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderPresentation {
    pub body: HeaderBody,
    pub tools: Vec<ToolbarAction>,
}

impl HeaderPresentation {
    fn title(key: &'static str) -> Self {
        Self {
            body: HeaderBody::Title {
                title: LangText::new(key),
                subtitle: None,
            },
            tools: Vec::new(),
        }
    }

    fn search(field: SearchField) -> Self {
        Self {
            body: HeaderBody::Search(field),
            tools: Vec::new(),
        }
    }

    pub fn title_key(&self) -> Option<&'static str> {
        match &self.body {
            HeaderBody::Title { title, .. } => Some(title.key),
            HeaderBody::Search(_) => None,
        }
    }
}

/// Title chain of the plain profile header, first match wins.
pub fn profile_title_key(ctx: &HeaderContext) -> &'static str {
    if ctx.is_saved_messages {
        "SavedMessages"
    } else if ctx.is_inside_topic {
        "AccDescrTopic"
    } else if ctx.is_channel {
        "Channel.TitleInfo"
    } else if ctx.user_id.is_some() {
        if ctx.is_bot {
            "lng_info_bot_title"
        } else {
            "lng_info_user_title"
        }
    } else {
        "GroupInfo.Title"
    }
}

fn profile_tools(ctx: &HeaderContext) -> Vec<ToolbarAction> {
    let mut tools = Vec::new();

    if ctx.can_add_contact {
        if let Some(user_id) = &ctx.user_id {
            tools.push(ToolbarAction::new(
                ToolIcon::AddUser,
                "AddContact",
                vec![HeaderIntent::OpenAddContactDialog {
                    user_id: user_id.clone(),
                }],
            ));
        }
    }
    if ctx.can_manage && !ctx.is_inside_topic {
        tools.push(ToolbarAction::new(
            ToolIcon::Edit,
            "Edit",
            vec![HeaderIntent::ToggleManagement],
        ));
    }
    if ctx.can_edit_bot {
        tools.push(ToolbarAction::new(
            ToolIcon::Edit,
            "Edit",
            vec![HeaderIntent::ToggleManagement],
        ));
    }
    if ctx.can_edit_topic {
        if let (Some(chat_id), Some(topic_id)) = (&ctx.chat_id, ctx.thread_id) {
            tools.push(ToolbarAction::new(
                ToolIcon::Edit,
                "EditTopic",
                vec![HeaderIntent::OpenEditTopicPanel {
                    chat_id: chat_id.clone(),
                    topic_id,
                }],
            ));
        }
    }
    if ctx.can_view_statistics {
        tools.push(ToolbarAction::new(
            ToolIcon::Stats,
            "Statistics",
            vec![HeaderIntent::ToggleStatistics],
        ));
    }

    tools
}

fn invite_info_tools(ctx: &HeaderContext) -> Vec<ToolbarAction> {
    let (Some(chat_id), Some(invite)) = (&ctx.chat_id, &ctx.current_invite) else {
        return Vec::new();
    };

    if !invite.is_revoked {
        return vec![ToolbarAction::new(
            ToolIcon::Edit,
            "Edit",
            vec![
                HeaderIntent::BeginEditInvite {
                    chat_id: chat_id.clone(),
                    invite: invite.clone(),
                },
                HeaderIntent::SelectManagementScreen(ManagementScreen::EditInvite),
            ],
        )];
    }

    vec![ToolbarAction {
        icon: ToolIcon::Delete,
        aria_label_key: "Delete",
        color: ButtonColor::Danger,
        intents: vec![
            HeaderIntent::DeleteInvite {
                chat_id: chat_id.clone(),
                link: invite.link.clone(),
            },
            HeaderIntent::SelectManagementScreen(ManagementScreen::Invites),
        ],
        confirm: Some(ConfirmPrompt {
            title_key: "DeleteLink",
            text_key: "DeleteLinkHelp",
            confirm_label_key: "Delete",
            is_destructive: true,
        }),
    }]
}

/// Presentation for `kind`, or `None` for [`HeaderContent::Closed`].
pub fn present(kind: HeaderContent, ctx: &HeaderContext) -> Option<HeaderPresentation> {
    let by_chat_kind = |channel: &'static str, group: &'static str| {
        if ctx.is_channel {
            channel
        } else {
            group
        }
    };

    let presentation = match kind {
        HeaderContent::Closed => return None,
        HeaderContent::PollResults => HeaderPresentation::title("PollResults"),
        HeaderContent::AddingMembers => {
            HeaderPresentation::title(by_chat_kind("ChannelAddSubscribers", "GroupAddMembers"))
        }
        HeaderContent::ManageInitial => HeaderPresentation::title("Edit"),
        HeaderContent::ManageChatPrivacyType => {
            HeaderPresentation::title(by_chat_kind("ChannelTypeHeader", "GroupTypeHeader"))
        }
        HeaderContent::ManageDiscussion => HeaderPresentation::title("Discussion"),
        HeaderContent::ManageChatAdministrators => {
            HeaderPresentation::title("ChannelAdministrators")
        }
        HeaderContent::ManageGroupRecentActions => {
            HeaderPresentation::title("Group.Info.AdminLog")
        }
        HeaderContent::ManageGroupAdminRights => HeaderPresentation::title("EditAdminRights"),
        HeaderContent::ManageGroupNewAdminRights => HeaderPresentation::title("SetAsAdmin"),
        HeaderContent::ManageGroupPermissions => HeaderPresentation::title("ChannelPermissions"),
        HeaderContent::ManageGroupRemovedUsers => HeaderPresentation::title("BlockedUsers"),
        HeaderContent::ManageChannelRemovedUsers => {
            HeaderPresentation::title("ChannelBlockedUsers")
        }
        HeaderContent::ManageGroupUserPermissionsCreate => {
            HeaderPresentation::title("ChannelAddException")
        }
        HeaderContent::ManageGroupUserPermissions => HeaderPresentation::title("UserRestrictions"),
        HeaderContent::ManageInvites => HeaderPresentation::title("lng_group_invite_title"),
        HeaderContent::ManageEditInvite => HeaderPresentation::title(if ctx.is_editing_invite {
            "EditLink"
        } else {
            "NewLink"
        }),
        HeaderContent::ManageInviteInfo => HeaderPresentation {
            tools: invite_info_tools(ctx),
            ..HeaderPresentation::title("InviteLink")
        },
        HeaderContent::ManageJoinRequests => {
            HeaderPresentation::title(by_chat_kind("SubscribeRequests", "MemberRequests"))
        }
        HeaderContent::ManageGroupAddAdmins => {
            HeaderPresentation::title("Channel.Management.AddModerator")
        }
        HeaderContent::StickerSearch => HeaderPresentation::search(SearchField {
            target: SearchTarget::Stickers,
            query: ctx.sticker_search_query.clone(),
            placeholder_key: "SearchStickersHint",
        }),
        HeaderContent::GifSearch => HeaderPresentation::search(SearchField {
            target: SearchTarget::Gifs,
            query: ctx.gif_search_query.clone(),
            placeholder_key: "SearchGifsTitle",
        }),
        HeaderContent::Statistics => {
            HeaderPresentation::title(by_chat_kind("ChannelStats.Title", "GroupStats.Title"))
        }
        HeaderContent::MessageStatistics => HeaderPresentation::title("Stats.MessageTitle"),
        HeaderContent::StoryStatistics => HeaderPresentation::title("Stats.StoryTitle"),
        HeaderContent::BoostStatistics => HeaderPresentation::title("Boosts"),
        HeaderContent::MonetizationStatistics => {
            HeaderPresentation::title("lng_channel_earn_title")
        }
        HeaderContent::SharedMedia => HeaderPresentation::title("SharedMedia"),
        HeaderContent::ManageChannelSubscribers => HeaderPresentation::title("ChannelSubscribers"),
        HeaderContent::MemberList | HeaderContent::ManageGroupMembers => {
            HeaderPresentation::title("GroupMembers")
        }
        HeaderContent::StoryList => HeaderPresentation::title(if ctx.is_self {
            "Settings.MyStories"
        } else {
            "PeerInfo.PaneStories"
        }),
        HeaderContent::SavedDialogs => HeaderPresentation {
            body: HeaderBody::Title {
                title: LangText::new("SavedMessagesTab"),
                subtitle: Some(LangText::plural("Chats", ctx.saved_dialogs_count)),
            },
            tools: Vec::new(),
        },
        HeaderContent::ManageReactions => HeaderPresentation::title("Reactions"),
        HeaderContent::CreateTopic => HeaderPresentation::title("NewTopic"),
        HeaderContent::EditTopic => HeaderPresentation::title("EditTopic"),
        HeaderContent::Profile => HeaderPresentation {
            tools: profile_tools(ctx),
            ..HeaderPresentation::title(profile_title_key(ctx))
        },
    };

    Some(presentation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::right_header::intents::testing::RecordingSink;
    use crate::right_header::intents::ExportedInvite;

    fn invite_ctx(is_revoked: bool) -> HeaderContext {
        HeaderContext {
            chat_id: Some("-100200".to_string()),
            current_invite: Some(ExportedInvite::new("https://t.me/+abc").revoked(is_revoked)),
            ..HeaderContext::default()
        }
    }

    fn icons(presentation: &HeaderPresentation) -> Vec<(ToolIcon, &'static str)> {
        presentation
            .tools
            .iter()
            .map(|tool| (tool.icon, tool.aria_label_key))
            .collect()
    }

    #[test]
    fn test_closed_renders_nothing() {
        assert_eq!(present(HeaderContent::Closed, &HeaderContext::default()), None);
    }

    #[test]
    fn test_profile_title_precedence() {
        let mut ctx = HeaderContext {
            is_saved_messages: true,
            is_inside_topic: true,
            is_channel: true,
            user_id: Some("42".to_string()),
            is_bot: true,
            ..HeaderContext::default()
        };
        assert_eq!(profile_title_key(&ctx), "SavedMessages");

        ctx.is_saved_messages = false;
        assert_eq!(profile_title_key(&ctx), "AccDescrTopic");

        ctx.is_inside_topic = false;
        assert_eq!(profile_title_key(&ctx), "Channel.TitleInfo");

        ctx.is_channel = false;
        assert_eq!(profile_title_key(&ctx), "lng_info_bot_title");

        ctx.is_bot = false;
        assert_eq!(profile_title_key(&ctx), "lng_info_user_title");

        ctx.user_id = None;
        assert_eq!(profile_title_key(&ctx), "GroupInfo.Title");
    }

    #[test]
    fn test_profile_tools_are_independent() {
        let ctx = HeaderContext {
            chat_id: Some("-100200".to_string()),
            thread_id: Some(17),
            user_id: Some("42".to_string()),
            can_add_contact: true,
            can_manage: true,
            can_edit_bot: true,
            can_edit_topic: true,
            can_view_statistics: true,
            ..HeaderContext::default()
        };
        let presentation = present(HeaderContent::Profile, &ctx).unwrap();
        assert_eq!(
            icons(&presentation),
            vec![
                (ToolIcon::AddUser, "AddContact"),
                (ToolIcon::Edit, "Edit"),
                (ToolIcon::Edit, "Edit"),
                (ToolIcon::Edit, "EditTopic"),
                (ToolIcon::Stats, "Statistics"),
            ]
        );
        assert_eq!(
            presentation.tools[3].intents,
            vec![HeaderIntent::OpenEditTopicPanel {
                chat_id: "-100200".to_string(),
                topic_id: 17
            }]
        );

        let bare = present(HeaderContent::Profile, &HeaderContext::default()).unwrap();
        assert!(bare.tools.is_empty());
    }

    #[test]
    fn test_manage_hidden_inside_topic() {
        let ctx = HeaderContext {
            can_manage: true,
            is_inside_topic: true,
            ..HeaderContext::default()
        };
        let presentation = present(HeaderContent::Profile, &ctx).unwrap();
        assert!(presentation.tools.is_empty());
        assert_eq!(presentation.title_key(), Some("AccDescrTopic"));
    }

    #[test]
    fn test_invite_tools_follow_revoked_flag() {
        let active = present(HeaderContent::ManageInviteInfo, &invite_ctx(false)).unwrap();
        assert_eq!(icons(&active), vec![(ToolIcon::Edit, "Edit")]);
        assert_eq!(active.tools[0].confirm, None);

        let revoked = present(HeaderContent::ManageInviteInfo, &invite_ctx(true)).unwrap();
        assert_eq!(icons(&revoked), vec![(ToolIcon::Delete, "Delete")]);
        assert_eq!(revoked.tools[0].color, ButtonColor::Danger);
        assert!(revoked.tools[0].confirm.unwrap().is_destructive);

        let ctx = HeaderContext {
            current_invite: None,
            ..invite_ctx(true)
        };
        let missing = present(HeaderContent::ManageInviteInfo, &ctx).unwrap();
        assert!(missing.tools.is_empty());
    }

    #[test]
    fn test_edit_invite_dispatches_immediately() {
        let sink = RecordingSink::default();
        let presentation = present(HeaderContent::ManageInviteInfo, &invite_ctx(false)).unwrap();

        assert_eq!(presentation.tools[0].trigger(&sink), Activation::Dispatched);
        let sent = sink.take();
        assert_eq!(sent.len(), 2);
        assert!(matches!(&sent[0], HeaderIntent::BeginEditInvite { chat_id, .. } if chat_id == "-100200"));
        assert_eq!(
            sent[1],
            HeaderIntent::SelectManagementScreen(ManagementScreen::EditInvite)
        );
    }

    #[test]
    fn test_delete_invite_waits_for_confirmation() {
        let sink = RecordingSink::default();
        let presentation = present(HeaderContent::ManageInviteInfo, &invite_ctx(true)).unwrap();
        let delete = &presentation.tools[0];

        match delete.trigger(&sink) {
            Activation::NeedsConfirmation(prompt) => {
                assert_eq!(prompt.title_key, "DeleteLink");
                assert_eq!(prompt.confirm_label_key, "Delete");
            }
            Activation::Dispatched => panic!("delete must ask first"),
        }
        assert!(sink.take().is_empty());

        delete.confirm_with(&sink);
        assert_eq!(
            sink.take(),
            vec![
                HeaderIntent::DeleteInvite {
                    chat_id: "-100200".to_string(),
                    link: "https://t.me/+abc".to_string(),
                },
                HeaderIntent::SelectManagementScreen(ManagementScreen::Invites),
            ]
        );
    }

    #[test]
    fn test_channel_and_group_alternates() {
        let group = HeaderContext::default();
        let channel = HeaderContext {
            is_channel: true,
            ..HeaderContext::default()
        };
        let cases = [
            (HeaderContent::AddingMembers, "ChannelAddSubscribers", "GroupAddMembers"),
            (HeaderContent::ManageChatPrivacyType, "ChannelTypeHeader", "GroupTypeHeader"),
            (HeaderContent::ManageJoinRequests, "SubscribeRequests", "MemberRequests"),
            (HeaderContent::Statistics, "ChannelStats.Title", "GroupStats.Title"),
        ];
        for (kind, channel_key, group_key) in cases {
            assert_eq!(present(kind, &channel).unwrap().title_key(), Some(channel_key));
            assert_eq!(present(kind, &group).unwrap().title_key(), Some(group_key));
        }
    }

    #[test]
    fn test_search_fields_echo_query() {
        let ctx = HeaderContext {
            sticker_search_query: "cat".to_string(),
            gif_search_query: "dog".to_string(),
            ..HeaderContext::default()
        };
        let HeaderBody::Search(stickers) = present(HeaderContent::StickerSearch, &ctx).unwrap().body
        else {
            panic!("expected a search field");
        };
        assert_eq!(stickers.query, "cat");
        assert_eq!(
            stickers.change_intent("cats".to_string()),
            HeaderIntent::SetStickerSearchQuery("cats".to_string())
        );

        let HeaderBody::Search(gifs) = present(HeaderContent::GifSearch, &ctx).unwrap().body else {
            panic!("expected a search field");
        };
        assert_eq!(gifs.placeholder_key, "SearchGifsTitle");
        assert_eq!(
            gifs.change_intent(String::new()),
            HeaderIntent::SetGifSearchQuery(String::new())
        );
    }

    #[test]
    fn test_saved_dialogs_subtitle_counts_chats() {
        let ctx = HeaderContext {
            saved_dialogs_count: 5,
            ..HeaderContext::default()
        };
        let presentation = present(HeaderContent::SavedDialogs, &ctx).unwrap();
        assert_eq!(
            presentation.body,
            HeaderBody::Title {
                title: LangText::new("SavedMessagesTab"),
                subtitle: Some(LangText::plural("Chats", 5)),
            }
        );
    }

    #[test]
    fn test_shared_titles_and_variants() {
        let ctx = HeaderContext::default();
        assert_eq!(
            present(HeaderContent::MemberList, &ctx).unwrap().title_key(),
            present(HeaderContent::ManageGroupMembers, &ctx).unwrap().title_key()
        );
        assert_eq!(
            present(HeaderContent::StoryList, &ctx).unwrap().title_key(),
            Some("PeerInfo.PaneStories")
        );
        let own = HeaderContext {
            is_self: true,
            is_editing_invite: true,
            ..HeaderContext::default()
        };
        assert_eq!(
            present(HeaderContent::StoryList, &own).unwrap().title_key(),
            Some("Settings.MyStories")
        );
        assert_eq!(
            present(HeaderContent::ManageEditInvite, &own).unwrap().title_key(),
            Some("EditLink")
        );
        assert_eq!(
            present(HeaderContent::ManageEditInvite, &ctx).unwrap().title_key(),
            Some("NewLink")
        );
    }
}
