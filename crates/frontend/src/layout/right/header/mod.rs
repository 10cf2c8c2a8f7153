pub mod right_header;

pub use right_header::RightHeader;
