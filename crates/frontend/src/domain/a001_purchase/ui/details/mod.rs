//! Purchase entry screen (`/compras/nueva`)
//!
//! MVVM split:
//! - model.rs: submission call
//! - view_model.rs: header fields, cart and submit command
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::PurchaseDetails;
pub use view_model::PurchaseDetailsVm;
