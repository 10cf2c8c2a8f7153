//! Translation table for the panel header.
//!
//! Keys follow the chat client's language packs; plural forms live under
//! `<key>_one` / `<key>_other`. A missing key renders as the key itself.

use contracts::right_header::LangText;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static STRINGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("AccDescrTopic", "Topic Info"),
        ("AddContact", "Add to contacts"),
        ("BlockedUsers", "Removed Users"),
        ("Boosts", "Boosts"),
        ("Channel.Management.AddModerator", "Add Admin"),
        ("Channel.TitleInfo", "Channel Info"),
        ("ChannelAddException", "Add Exception"),
        ("ChannelAddSubscribers", "Add Subscribers"),
        ("ChannelAdministrators", "Administrators"),
        ("ChannelBlockedUsers", "Removed Users"),
        ("ChannelPermissions", "Permissions"),
        ("ChannelStats.Title", "Channel Statistics"),
        ("ChannelSubscribers", "Subscribers"),
        ("ChannelTypeHeader", "Channel Type"),
        ("Chats_one", "{} chat"),
        ("Chats_other", "{} chats"),
        ("Cancel", "Cancel"),
        ("CanJoin_one", "{} can join"),
        ("CanJoin_other", "{} can join"),
        ("Common.Back", "Back"),
        ("Common.Close", "Close"),
        ("Delete", "Delete"),
        ("DeleteLink", "Delete Link"),
        ("DeleteLinkHelp", "Are you sure you want to delete this link? It will be completely gone."),
        ("Discussion", "Discussion"),
        ("Edit", "Edit"),
        ("EditAdminRights", "Admin Rights"),
        ("EditLink", "Edit Link"),
        ("EditTopic", "Edit Topic"),
        ("Group.Info.AdminLog", "Recent Actions"),
        ("GroupAddMembers", "Add Members"),
        ("GroupInfo.Title", "Group Info"),
        ("GroupMembers", "Members"),
        ("GroupStats.Title", "Group Statistics"),
        ("GroupTypeHeader", "Group Type"),
        ("InviteLink", "Invite Link"),
        ("lng_channel_earn_title", "Monetization"),
        ("lng_group_invite_title", "Invite links"),
        ("lng_info_bot_title", "Bot Info"),
        ("lng_info_user_title", "User Info"),
        ("MemberRequests", "Member Requests"),
        ("NewLink", "New Link"),
        ("NewTopic", "New Topic"),
        ("PeerInfo.PaneStories", "Stories"),
        ("PeopleJoined_one", "{} person joined"),
        ("PeopleJoined_other", "{} people joined"),
        ("PollResults", "Poll Results"),
        ("Reactions", "Reactions"),
        ("SavedMessages", "Saved Messages"),
        ("SavedMessagesTab", "Saved Messages"),
        ("SearchGifsTitle", "Search GIFs"),
        ("SearchStickersHint", "Search Stickers"),
        ("SetAsAdmin", "New Admin"),
        ("Settings.MyStories", "My Stories"),
        ("SharedMedia", "Shared Media"),
        ("Statistics", "Statistics"),
        ("Stats.MessageTitle", "Message Statistic"),
        ("Stats.StoryTitle", "Story Statistic"),
        ("SubscribeRequests", "Subscribe Requests"),
        ("UserRestrictions", "User Permissions"),
    ])
});

pub fn lang(key: &str) -> String {
    STRINGS
        .get(key)
        .map(|text| text.to_string())
        .unwrap_or_else(|| {
            log::warn!("Missing translation: {}", key);
            key.to_string()
        })
}

pub fn lang_text(text: &LangText) -> String {
    let Some(count) = text.count else {
        return lang(text.key);
    };
    let form = if count == 1 { "one" } else { "other" };
    let plural_key = format!("{}_{}", text.key, form);
    match STRINGS.get(plural_key.as_str()) {
        Some(template) => template.replace("{}", &count.to_string()),
        None => format!("{} {}", count, lang(text.key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang() {
        assert_eq!(lang("SavedMessages"), "Saved Messages");
        assert_eq!(lang("No.Such.Key"), "No.Such.Key");
    }

    #[test]
    fn test_plural() {
        assert_eq!(lang_text(&LangText::plural("Chats", 1)), "1 chat");
        assert_eq!(lang_text(&LangText::plural("Chats", 0)), "0 chats");
        assert_eq!(lang_text(&LangText::plural("Chats", 12)), "12 chats");
        assert_eq!(lang_text(&LangText::new("Boosts")), "Boosts");
    }
}
