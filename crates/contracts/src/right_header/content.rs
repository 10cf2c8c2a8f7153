use serde::{Deserialize, Serialize};

/// Every renderable header variant, plus the `Closed` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderContent {
    Profile,
    MemberList,
    SharedMedia,
    StoryList,
    SavedDialogs,
    Statistics,
    MessageStatistics,
    StoryStatistics,
    BoostStatistics,
    MonetizationStatistics,
    ManageInitial,
    ManageChannelSubscribers,
    ManageChatAdministrators,
    ManageChatPrivacyType,
    ManageDiscussion,
    ManageGroupPermissions,
    ManageGroupRemovedUsers,
    ManageChannelRemovedUsers,
    ManageGroupUserPermissionsCreate,
    ManageGroupUserPermissions,
    ManageGroupRecentActions,
    ManageGroupAdminRights,
    ManageGroupNewAdminRights,
    ManageGroupMembers,
    ManageGroupAddAdmins,
    ManageInvites,
    ManageEditInvite,
    ManageReactions,
    ManageInviteInfo,
    ManageJoinRequests,
    StickerSearch,
    GifSearch,
    PollResults,
    AddingMembers,
    CreateTopic,
    EditTopic,
    /// Nothing to render: the column is closed or the state was unreachable.
    Closed,
}

impl HeaderContent {
    pub fn is_closed(&self) -> bool {
        matches!(self, HeaderContent::Closed)
    }

    /// Stable key for the keyed transition in the view layer.
    pub fn key(&self) -> &'static str {
        match self {
            HeaderContent::Profile => "profile",
            HeaderContent::MemberList => "member-list",
            HeaderContent::SharedMedia => "shared-media",
            HeaderContent::StoryList => "story-list",
            HeaderContent::SavedDialogs => "saved-dialogs",
            HeaderContent::Statistics => "statistics",
            HeaderContent::MessageStatistics => "message-statistics",
            HeaderContent::StoryStatistics => "story-statistics",
            HeaderContent::BoostStatistics => "boost-statistics",
            HeaderContent::MonetizationStatistics => "monetization-statistics",
            HeaderContent::ManageInitial => "manage-initial",
            HeaderContent::ManageChannelSubscribers => "manage-channel-subscribers",
            HeaderContent::ManageChatAdministrators => "manage-chat-administrators",
            HeaderContent::ManageChatPrivacyType => "manage-chat-privacy-type",
            HeaderContent::ManageDiscussion => "manage-discussion",
            HeaderContent::ManageGroupPermissions => "manage-group-permissions",
            HeaderContent::ManageGroupRemovedUsers => "manage-group-removed-users",
            HeaderContent::ManageChannelRemovedUsers => "manage-channel-removed-users",
            HeaderContent::ManageGroupUserPermissionsCreate => "manage-user-permissions-create",
            HeaderContent::ManageGroupUserPermissions => "manage-user-permissions",
            HeaderContent::ManageGroupRecentActions => "manage-recent-actions",
            HeaderContent::ManageGroupAdminRights => "manage-admin-rights",
            HeaderContent::ManageGroupNewAdminRights => "manage-new-admin-rights",
            HeaderContent::ManageGroupMembers => "manage-group-members",
            HeaderContent::ManageGroupAddAdmins => "manage-add-admins",
            HeaderContent::ManageInvites => "manage-invites",
            HeaderContent::ManageEditInvite => "manage-edit-invite",
            HeaderContent::ManageReactions => "manage-reactions",
            HeaderContent::ManageInviteInfo => "manage-invite-info",
            HeaderContent::ManageJoinRequests => "manage-join-requests",
            HeaderContent::StickerSearch => "sticker-search",
            HeaderContent::GifSearch => "gif-search",
            HeaderContent::PollResults => "poll-results",
            HeaderContent::AddingMembers => "adding-members",
            HeaderContent::CreateTopic => "create-topic",
            HeaderContent::EditTopic => "edit-topic",
            HeaderContent::Closed => "closed",
        }
    }
}
