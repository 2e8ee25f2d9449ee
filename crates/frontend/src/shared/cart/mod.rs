//! Cart shared by the purchases and sales screens.
//!
//! - cart.rs, product_cache.rs, checkout.rs, policy.rs: pure state and rules
//! - model.rs: product list fetch
//! - view_model.rs: reactive wrapper owned by a screen (CartVm)
//! - table.rs, picker.rs: Leptos components

pub mod cart;
pub mod checkout;
mod model;
pub mod picker;
pub mod policy;
pub mod product_cache;
pub mod table;
pub mod view_model;

pub use picker::ProductPicker;
pub use table::CartTable;
pub use view_model::CartVm;
