pub mod animation;
pub mod api_utils;
pub mod browser;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod error;
pub mod icons;
pub mod theme;
