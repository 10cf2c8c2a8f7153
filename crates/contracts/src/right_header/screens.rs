use serde::{Deserialize, Serialize};

/// Which pane of the profile column is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileState {
    Profile,
    SharedMedia,
    MemberList,
    StoryList,
    SavedDialogs,
}

impl ProfileState {
    pub fn code(&self) -> &'static str {
        match self {
            ProfileState::Profile => "profile",
            ProfileState::SharedMedia => "media",
            ProfileState::MemberList => "members",
            ProfileState::StoryList => "stories",
            ProfileState::SavedDialogs => "saved",
        }
    }

    pub fn all() -> Vec<ProfileState> {
        vec![
            ProfileState::Profile,
            ProfileState::SharedMedia,
            ProfileState::MemberList,
            ProfileState::StoryList,
            ProfileState::SavedDialogs,
        ]
    }

    /// Unknown codes yield `None`; the resolver treats that as an unreachable state.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|state| state.code() == code)
    }
}

/// Administrative screens reachable from the "Edit" button of a chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManagementScreen {
    Initial,
    ChatPrivacyType,
    Discussion,
    ChannelSubscribers,
    GroupPermissions,
    ChatAdministrators,
    GroupRemovedUsers,
    ChannelRemovedUsers,
    GroupUserPermissionsCreate,
    GroupUserPermissions,
    GroupRecentActions,
    ChatAdminRights,
    ChatNewAdminRights,
    GroupMembers,
    Invites,
    EditInvite,
    GroupAddAdmins,
    Reactions,
    InviteInfo,
    JoinRequests,
}

impl ManagementScreen {
    pub fn code(&self) -> &'static str {
        match self {
            ManagementScreen::Initial => "initial",
            ManagementScreen::ChatPrivacyType => "privacy-type",
            ManagementScreen::Discussion => "discussion",
            ManagementScreen::ChannelSubscribers => "subscribers",
            ManagementScreen::GroupPermissions => "permissions",
            ManagementScreen::ChatAdministrators => "administrators",
            ManagementScreen::GroupRemovedUsers => "removed-users",
            ManagementScreen::ChannelRemovedUsers => "channel-removed-users",
            ManagementScreen::GroupUserPermissionsCreate => "user-permissions-create",
            ManagementScreen::GroupUserPermissions => "user-permissions",
            ManagementScreen::GroupRecentActions => "recent-actions",
            ManagementScreen::ChatAdminRights => "admin-rights",
            ManagementScreen::ChatNewAdminRights => "new-admin-rights",
            ManagementScreen::GroupMembers => "members",
            ManagementScreen::Invites => "invites",
            ManagementScreen::EditInvite => "edit-invite",
            ManagementScreen::GroupAddAdmins => "add-admins",
            ManagementScreen::Reactions => "reactions",
            ManagementScreen::InviteInfo => "invite-info",
            ManagementScreen::JoinRequests => "join-requests",
        }
    }

    pub fn all() -> Vec<ManagementScreen> {
        vec![
            ManagementScreen::Initial,
            ManagementScreen::ChatPrivacyType,
            ManagementScreen::Discussion,
            ManagementScreen::ChannelSubscribers,
            ManagementScreen::GroupPermissions,
            ManagementScreen::ChatAdministrators,
            ManagementScreen::GroupRemovedUsers,
            ManagementScreen::ChannelRemovedUsers,
            ManagementScreen::GroupUserPermissionsCreate,
            ManagementScreen::GroupUserPermissions,
            ManagementScreen::GroupRecentActions,
            ManagementScreen::ChatAdminRights,
            ManagementScreen::ChatNewAdminRights,
            ManagementScreen::GroupMembers,
            ManagementScreen::Invites,
            ManagementScreen::EditInvite,
            ManagementScreen::GroupAddAdmins,
            ManagementScreen::Reactions,
            ManagementScreen::InviteInfo,
            ManagementScreen::JoinRequests,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|screen| screen.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_unique() {
        let profile: HashSet<_> = ProfileState::all().iter().map(|s| s.code()).collect();
        assert_eq!(profile.len(), ProfileState::all().len());

        let management: HashSet<_> = ManagementScreen::all().iter().map(|s| s.code()).collect();
        assert_eq!(management.len(), ManagementScreen::all().len());
    }

    #[test]
    fn test_from_code() {
        assert_eq!(ProfileState::from_code("media"), Some(ProfileState::SharedMedia));
        assert_eq!(
            ManagementScreen::from_code("invite-info"),
            Some(ManagementScreen::InviteInfo)
        );
        assert_eq!(ManagementScreen::from_code("bogus"), None);
        assert_eq!(ProfileState::from_code(""), None);
    }
}
