pub mod common;
pub mod contact_section;
pub mod content;
pub mod footer;
pub mod hero;
pub mod hotspot_viewer;
pub mod navbar;
