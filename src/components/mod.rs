//! Shared UI components used across pages.

pub mod bottom_nav;
pub mod error_display;
pub mod footer;
pub mod header;
pub mod mindful_cta;
pub mod scroll_to_top;
pub mod searching;
pub mod share_button;
pub mod support_chat;
pub mod welcome_modal;
