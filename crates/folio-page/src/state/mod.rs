//! State management for the portfolio page.

pub mod menu_state;
pub mod page_state;

pub use menu_state::*;
pub use page_state::*;
