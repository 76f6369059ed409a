//! answer-i18n library
//!
//! Localization bootstrap and the answer icon of the chat front-end.

pub mod core;
pub mod i18n;
pub mod icon;
