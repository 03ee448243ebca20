pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod events;
pub mod icons;
pub mod modal;
pub mod page_frame;
pub mod polling;
pub mod toast;
