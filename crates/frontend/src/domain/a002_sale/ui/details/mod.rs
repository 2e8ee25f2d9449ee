//! Sale entry screen (`/ventas/nueva`)
//!
//! MVVM split:
//! - model.rs: submission call
//! - view_model.rs: client and payment fields, scanner, cart, submit command
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::SaleDetails;
pub use view_model::SaleDetailsVm;
