//! JSON Generator AI: a chat front end that turns natural-language requests
//! and CSV/Excel samples into highlighted JSON.

pub mod ai;
pub mod attachments;
pub mod config;
pub mod conversation;
pub mod files;
pub mod gallery;
pub mod highlight;
pub mod markdown;
pub mod notice;
pub mod preferences;
pub mod runtime;
pub mod theme;
pub mod types;

#[cfg(any(feature = "web", feature = "desktop", feature = "mobile"))]
pub mod ui;
#[cfg(any(feature = "web", feature = "desktop", feature = "mobile"))]
pub mod views;
