//! Content resolver: mode flags and sub-states to a single [`HeaderContent`].
//!
//! Several flags can be true at once while one screen hands off to another,
//! so the rules are an ordered table and the first match wins.

use super::content::HeaderContent;
use super::intents::StateReader;
use super::screens::{ManagementScreen, ProfileState};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level purpose of the right column, as set by the parent router.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeFlags {
    pub is_column_open: bool,
    pub is_profile: bool,
    pub is_poll_results: bool,
    pub is_sticker_search: bool,
    pub is_gif_search: bool,
    pub is_adding_members: bool,
    pub is_management: bool,
    pub is_statistics: bool,
    pub is_message_statistics: bool,
    pub is_story_statistics: bool,
    pub is_monetization_statistics: bool,
    pub is_boost_statistics: bool,
    pub is_creating_topic: bool,
    pub is_editing_topic: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("profile mode is active but the profile state is unknown")]
    UnknownProfileState,
    #[error("management mode is active but the management screen is unknown")]
    UnknownManagementScreen,
}

/// Precedence tiers, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Profile,
    PollResults,
    StickerSearch,
    GifSearch,
    AddingMembers,
    Management,
    Statistics,
    CreatingTopic,
    EditingTopic,
}

#[derive(Clone, Copy)]
struct SubStates {
    profile: Option<ProfileState>,
    management: Option<ManagementScreen>,
}

struct Rule {
    tier: Tier,
    applies: fn(&ModeFlags) -> bool,
    content: fn(SubStates) -> Result<HeaderContent, ResolveError>,
}

const RULES: &[Rule] = &[
    Rule {
        tier: Tier::Profile,
        applies: |f: &ModeFlags| f.is_profile,
        content: |s: SubStates| profile_content(s.profile),
    },
    Rule {
        tier: Tier::PollResults,
        applies: |f: &ModeFlags| f.is_poll_results,
        content: |_: SubStates| Ok(HeaderContent::PollResults),
    },
    Rule {
        tier: Tier::StickerSearch,
        applies: |f: &ModeFlags| f.is_sticker_search,
        content: |_: SubStates| Ok(HeaderContent::StickerSearch),
    },
    Rule {
        tier: Tier::GifSearch,
        applies: |f: &ModeFlags| f.is_gif_search,
        content: |_: SubStates| Ok(HeaderContent::GifSearch),
    },
    Rule {
        tier: Tier::AddingMembers,
        applies: |f: &ModeFlags| f.is_adding_members,
        content: |_: SubStates| Ok(HeaderContent::AddingMembers),
    },
    Rule {
        tier: Tier::Management,
        applies: |f: &ModeFlags| f.is_management,
        content: |s: SubStates| management_content(s.management),
    },
    Rule {
        tier: Tier::Statistics,
        applies: |f: &ModeFlags| f.is_statistics,
        content: |_: SubStates| Ok(HeaderContent::Statistics),
    },
    Rule {
        tier: Tier::Statistics,
        applies: |f: &ModeFlags| f.is_message_statistics,
        content: |_: SubStates| Ok(HeaderContent::MessageStatistics),
    },
    Rule {
        tier: Tier::Statistics,
        applies: |f: &ModeFlags| f.is_story_statistics,
        content: |_: SubStates| Ok(HeaderContent::StoryStatistics),
    },
    Rule {
        tier: Tier::Statistics,
        applies: |f: &ModeFlags| f.is_monetization_statistics,
        content: |_: SubStates| Ok(HeaderContent::MonetizationStatistics),
    },
    Rule {
        tier: Tier::Statistics,
        applies: |f: &ModeFlags| f.is_boost_statistics,
        content: |_: SubStates| Ok(HeaderContent::BoostStatistics),
    },
    Rule {
        tier: Tier::CreatingTopic,
        applies: |f: &ModeFlags| f.is_creating_topic,
        content: |_: SubStates| Ok(HeaderContent::CreateTopic),
    },
    Rule {
        tier: Tier::EditingTopic,
        applies: |f: &ModeFlags| f.is_editing_topic,
        content: |_: SubStates| Ok(HeaderContent::EditTopic),
    },
];

fn profile_content(state: Option<ProfileState>) -> Result<HeaderContent, ResolveError> {
    match state.ok_or(ResolveError::UnknownProfileState)? {
        ProfileState::Profile => Ok(HeaderContent::Profile),
        ProfileState::SharedMedia => Ok(HeaderContent::SharedMedia),
        ProfileState::MemberList => Ok(HeaderContent::MemberList),
        ProfileState::StoryList => Ok(HeaderContent::StoryList),
        ProfileState::SavedDialogs => Ok(HeaderContent::SavedDialogs),
    }
}

fn management_content(screen: Option<ManagementScreen>) -> Result<HeaderContent, ResolveError> {
    let content = match screen.ok_or(ResolveError::UnknownManagementScreen)? {
        ManagementScreen::Initial => HeaderContent::ManageInitial,
        ManagementScreen::ChatPrivacyType => HeaderContent::ManageChatPrivacyType,
        ManagementScreen::Discussion => HeaderContent::ManageDiscussion,
        ManagementScreen::ChannelSubscribers => HeaderContent::ManageChannelSubscribers,
        ManagementScreen::GroupPermissions => HeaderContent::ManageGroupPermissions,
        ManagementScreen::ChatAdministrators => HeaderContent::ManageChatAdministrators,
        ManagementScreen::GroupRemovedUsers => HeaderContent::ManageGroupRemovedUsers,
        ManagementScreen::ChannelRemovedUsers => HeaderContent::ManageChannelRemovedUsers,
        ManagementScreen::GroupUserPermissionsCreate => {
            HeaderContent::ManageGroupUserPermissionsCreate
        }
        ManagementScreen::GroupUserPermissions => HeaderContent::ManageGroupUserPermissions,
        ManagementScreen::GroupRecentActions => HeaderContent::ManageGroupRecentActions,
        ManagementScreen::ChatAdminRights => HeaderContent::ManageGroupAdminRights,
        ManagementScreen::ChatNewAdminRights => HeaderContent::ManageGroupNewAdminRights,
        ManagementScreen::GroupMembers => HeaderContent::ManageGroupMembers,
        ManagementScreen::Invites => HeaderContent::ManageInvites,
        ManagementScreen::EditInvite => HeaderContent::ManageEditInvite,
        ManagementScreen::GroupAddAdmins => HeaderContent::ManageGroupAddAdmins,
        ManagementScreen::Reactions => HeaderContent::ManageReactions,
        ManagementScreen::InviteInfo => HeaderContent::ManageInviteInfo,
        ManagementScreen::JoinRequests => HeaderContent::ManageJoinRequests,
    };
    Ok(content)
}

/// Tier order as evaluated by [`try_resolve`].
pub fn precedence_tiers() -> Vec<Tier> {
    let mut tiers: Vec<Tier> = RULES.iter().map(|rule| rule.tier).collect();
    tiers.dedup();
    tiers
}

pub fn try_resolve(
    flags: &ModeFlags,
    profile_state: Option<ProfileState>,
    management_screen: Option<ManagementScreen>,
) -> Result<HeaderContent, ResolveError> {
    let sub_states = SubStates {
        profile: profile_state,
        management: management_screen,
    };

    if let Some(rule) = RULES.iter().find(|rule| (rule.applies)(flags)) {
        return (rule.content)(sub_states);
    }

    if flags.is_column_open {
        Ok(HeaderContent::Profile)
    } else {
        Ok(HeaderContent::Closed)
    }
}

/// Like [`try_resolve`] but never fails: an unreachable state is logged and
/// renders nothing for this frame.
pub fn resolve(
    flags: &ModeFlags,
    profile_state: Option<ProfileState>,
    management_screen: Option<ManagementScreen>,
) -> HeaderContent {
    match try_resolve(flags, profile_state, management_screen) {
        Ok(content) => content,
        Err(err) => {
            log::error!("Unreachable right header state: {} ({:?})", err, flags);
            HeaderContent::Closed
        }
    }
}

pub fn resolve_from<R: StateReader + ?Sized>(reader: &R) -> HeaderContent {
    resolve(
        &reader.mode_flags(),
        reader.profile_state(),
        reader.management_screen(),
    )
}
