pub mod client;
pub mod csrf;
