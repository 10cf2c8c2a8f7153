pub mod confirm_dialog;
pub mod search_input;
pub mod transition;

pub use confirm_dialog::ConfirmDialog;
pub use search_input::SearchInput;
pub use transition::Transition;
