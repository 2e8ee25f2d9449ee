pub mod api_utils;
pub mod cart;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod http;
pub mod keyboard_nav;
pub mod notice;
pub mod number_format;
pub mod page_frame;
