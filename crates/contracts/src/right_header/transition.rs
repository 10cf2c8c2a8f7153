//! Transition key tracking and the column animation gate.
//!
//! While the column slides shut the header keeps showing its last content.
//! Opening or closing the column freezes the header's own transition until a
//! release timer fires; only the most recently issued timer counts.

use super::content::HeaderContent;
use super::intents::HeaderContext;
use super::resolver::ModeFlags;
use crate::shared::config::PanelConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// Ask the host to call [`TransitionTracker::on_timer`] after `delay_ms`,
/// replacing any timer it still holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    pub token: TimerToken,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionName {
    None,
    SlideFade,
}

impl TransitionName {
    pub fn css_name(&self) -> &'static str {
        match self {
            TransitionName::None => "none",
            TransitionName::SlideFade => "slideFade",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransitionTracker {
    delay_ms: u32,
    is_open: bool,
    suppressed: bool,
    last_rendered: Option<HeaderContent>,
    pending: Option<TimerToken>,
    next_token: u64,
}

impl TransitionTracker {
    pub fn new(is_open: bool, config: &PanelConfig) -> Self {
        Self::with_delay(is_open, config.column_transition_ms())
    }

    pub fn with_delay(is_open: bool, delay_ms: u32) -> Self {
        Self {
            delay_ms,
            is_open,
            suppressed: !is_open,
            last_rendered: None,
            pending: None,
            next_token: 1,
        }
    }

    /// Current content, or the last real one while the column is closing.
    pub fn render_key(&mut self, resolved: HeaderContent) -> HeaderContent {
        if resolved.is_closed() {
            return self.last_rendered.unwrap_or(HeaderContent::Closed);
        }
        self.last_rendered = Some(resolved);
        resolved
    }

    pub fn set_column_open(&mut self, is_open: bool) -> Option<TimerRequest> {
        if is_open == self.is_open {
            return None;
        }
        self.is_open = is_open;

        if is_open && !self.suppressed {
            self.pending = None;
            return None;
        }
        self.suppressed = true;

        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.pending = Some(token);
        Some(TimerRequest {
            token,
            delay_ms: self.delay_ms,
        })
    }

    /// Returns `false` for a superseded timer.
    pub fn on_timer(&mut self, token: TimerToken) -> bool {
        if self.pending != Some(token) {
            log::debug!("Ignoring stale header transition timer {:?}", token);
            return false;
        }
        self.pending = None;
        self.suppressed = false;
        true
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    pub fn transition_name(&self, should_skip_history_animations: bool) -> TransitionName {
        if self.suppressed || should_skip_history_animations {
            TransitionName::None
        } else {
            TransitionName::SlideFade
        }
    }
}

/// Whether the leading control means "back" rather than "close".
///
/// Uses the freshly resolved kind, not the one kept for the exit animation.
pub fn is_back_button(kind: HeaderContent, flags: &ModeFlags, ctx: &HeaderContext) -> bool {
    if ctx.is_mobile {
        return true;
    }
    if ctx.is_saved_messages {
        return false;
    }
    flags.is_management
        || matches!(
            kind,
            HeaderContent::SharedMedia
                | HeaderContent::MemberList
                | HeaderContent::StoryList
                | HeaderContent::AddingMembers
                | HeaderContent::MessageStatistics
                | HeaderContent::StoryStatistics
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(is_open: bool) -> TransitionTracker {
        TransitionTracker::new(is_open, &PanelConfig::default())
    }

    #[test]
    fn test_keeps_last_content_while_closing() {
        let mut tracker = tracker(true);
        assert_eq!(tracker.render_key(HeaderContent::Closed), HeaderContent::Closed);
        assert_eq!(tracker.render_key(HeaderContent::MemberList), HeaderContent::MemberList);
        assert_eq!(tracker.render_key(HeaderContent::Closed), HeaderContent::MemberList);
        assert_eq!(tracker.render_key(HeaderContent::PollResults), HeaderContent::PollResults);
    }

    #[test]
    fn test_reopen_within_window_skips_animation() {
        let mut tracker = tracker(true);
        assert_eq!(tracker.transition_name(false), TransitionName::SlideFade);

        let close = tracker.set_column_open(false).unwrap();
        assert_eq!(close.delay_ms, 550);
        let reopen = tracker.set_column_open(true).unwrap();
        assert_eq!(tracker.transition_name(false), TransitionName::None);

        // The close timer was superseded by the reopen.
        assert!(!tracker.on_timer(close.token));
        assert_eq!(tracker.transition_name(false), TransitionName::None);

        assert!(tracker.on_timer(reopen.token));
        assert_eq!(tracker.transition_name(false), TransitionName::SlideFade);
    }

    #[test]
    fn test_reopen_after_window_animates() {
        let mut tracker = tracker(true);
        let close = tracker.set_column_open(false).unwrap();
        assert!(tracker.on_timer(close.token));

        assert_eq!(tracker.set_column_open(true), None);
        assert_eq!(tracker.transition_name(false), TransitionName::SlideFade);
    }

    #[test]
    fn test_mounted_closed_starts_suppressed() {
        let mut tracker = tracker(false);
        assert!(tracker.is_suppressed());

        let open = tracker.set_column_open(true).unwrap();
        assert_eq!(tracker.set_column_open(true), None);
        assert!(tracker.on_timer(open.token));
        assert!(!tracker.on_timer(open.token));
        assert!(!tracker.is_suppressed());
    }

    #[test]
    fn test_skip_history_animations() {
        let tracker = tracker(true);
        assert_eq!(tracker.transition_name(true), TransitionName::None);
        assert_eq!(TransitionName::SlideFade.css_name(), "slideFade");
    }

    #[test]
    fn test_back_or_close() {
        let flags = ModeFlags {
            is_column_open: true,
            is_profile: true,
            ..ModeFlags::default()
        };
        let desktop = HeaderContext::default();

        let back_kinds = [
            HeaderContent::SharedMedia,
            HeaderContent::MemberList,
            HeaderContent::StoryList,
            HeaderContent::AddingMembers,
            HeaderContent::MessageStatistics,
            HeaderContent::StoryStatistics,
        ];
        for kind in back_kinds {
            assert!(is_back_button(kind, &flags, &desktop), "{:?}", kind);
        }
        for kind in [
            HeaderContent::Profile,
            HeaderContent::Statistics,
            HeaderContent::PollResults,
            HeaderContent::CreateTopic,
        ] {
            assert!(!is_back_button(kind, &flags, &desktop), "{:?}", kind);
        }

        let mobile = HeaderContext {
            is_mobile: true,
            ..HeaderContext::default()
        };
        assert!(is_back_button(HeaderContent::Profile, &flags, &mobile));
        assert!(is_back_button(HeaderContent::Closed, &flags, &mobile));

        let saved = HeaderContext {
            is_saved_messages: true,
            ..HeaderContext::default()
        };
        assert!(!is_back_button(HeaderContent::MemberList, &flags, &saved));

        let management = ModeFlags {
            is_management: true,
            ..flags
        };
        assert!(is_back_button(HeaderContent::ManageInitial, &management, &desktop));
    }
}
