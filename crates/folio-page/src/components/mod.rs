//! UI components for the portfolio page.

mod about;
mod app;
mod contact;
mod hero;
mod navbar;
mod projects;

pub use about::*;
pub use app::*;
pub use contact::*;
pub use hero::*;
pub use navbar::*;
pub use projects::*;
