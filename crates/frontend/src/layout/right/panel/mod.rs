pub mod right_panel;

pub use right_panel::RightPanel;
