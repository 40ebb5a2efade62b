//! Single-page personal portfolio.
//!
//! This crate provides the Dioxus page (hero, about, projects, contact) with
//! a persisted light/dark theme and a mobile navigation drawer, plus the
//! desktop launcher's configuration.

pub mod catalog;
pub mod components;
pub mod config;
pub mod state;
