pub mod content;
pub mod intents;
pub mod presentation;
pub mod resolver;
pub mod screens;
pub mod transition;

pub use content::HeaderContent;
pub use intents::{CommandSink, ExportedInvite, HeaderContext, HeaderIntent, StateReader};
pub use presentation::{
    present, Activation, ButtonColor, ConfirmPrompt, HeaderBody, HeaderPresentation, LangText,
    SearchField, ToolIcon, ToolbarAction,
};
pub use resolver::{precedence_tiers, resolve, resolve_from, try_resolve, ModeFlags, ResolveError, Tier};
pub use screens::{ManagementScreen, ProfileState};
pub use transition::{is_back_button, TimerRequest, TimerToken, TransitionName, TransitionTracker};
