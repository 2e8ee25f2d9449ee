//! ViewModel for the purchase entry form
//!
//! Header fields are individual RwSignals; the lines live in a `CartVm`
//! configured with the purchase policy (repeats rejected, cost editable).

use super::model;
use crate::shared::cart::checkout::{
    purchase_document, CheckoutError, PurchaseHeader, SubmissionWorkflow,
};
use crate::shared::cart::CartVm;
use crate::shared::config::Config;
use crate::shared::date_utils::today;
use crate::shared::notice::{FollowUp, Notice, NoticeService};
use contracts::domain::a002_purchase::aggregate::PURCHASE_DOCUMENT_TYPES;
use leptos::prelude::*;

/// "Error al guardar: {status}", falling back to the reason when there is no status
fn failure_message(err: &CheckoutError) -> String {
    match err {
        CheckoutError::SubmissionFailed {
            status: Some(status),
            ..
        } => format!("Error al guardar: {}", status),
        other => format!("Error al guardar: {}", other),
    }
}

#[derive(Clone, Copy)]
pub struct PurchaseDetailsVm {
    // === Header fields ===
    pub document_type: RwSignal<String>,
    pub series: RwSignal<String>,
    pub number: RwSignal<String>,
    pub supplier_tax_id: RwSignal<String>,
    pub supplier_name: RwSignal<String>,

    // === Lines ===
    pub cart: CartVm,

    // === UI State ===
    pub workflow: RwSignal<SubmissionWorkflow>,
    config: StoredValue<Config>,
    notices: NoticeService,
}

impl PurchaseDetailsVm {
    pub fn new(config: &Config, notices: NoticeService) -> Self {
        let policy = config.purchase.clone();
        Self {
            document_type: RwSignal::new(PURCHASE_DOCUMENT_TYPES[0].to_string()),
            series: RwSignal::new(String::new()),
            number: RwSignal::new(String::new()),
            supplier_tax_id: RwSignal::new(String::new()),
            supplier_name: RwSignal::new(String::new()),
            workflow: RwSignal::new(SubmissionWorkflow::new(policy.lock_submit)),
            cart: CartVm::new(policy, config, notices),
            config: StoredValue::new(config.clone()),
            notices,
        }
    }

    pub fn header(&self) -> PurchaseHeader {
        PurchaseHeader {
            document_type: self.document_type.get_untracked(),
            series: self.series.get_untracked(),
            number: self.number.get_untracked(),
            supplier_tax_id: self.supplier_tax_id.get_untracked(),
            supplier_name: self.supplier_name.get_untracked(),
        }
    }

    pub fn is_save_disabled(&self) -> Signal<bool> {
        let workflow = self.workflow;
        Signal::derive(move || workflow.with(SubmissionWorkflow::control_disabled))
    }

    // === Data loading ===

    pub fn load(&self) {
        self.cart.load_products(&self.config.get_value());
    }

    // === Commands ===

    /// Validate, post the document and report the outcome.
    ///
    /// The control stays enabled while the request is in flight.
    pub fn save(&self) {
        let header = self.header();
        let document = match self.cart.with_cart(|c| purchase_document(c, &header, today())) {
            Ok(document) => document,
            Err(e) => {
                log::debug!("Purchase not submitted: {}", e);
                self.notices.show(Notice::from(&e));
                return;
            }
        };

        let mut started = false;
        self.workflow.update(|w| started = w.begin());
        if !started {
            return;
        }

        log::info!(
            "Submitting purchase {}-{} ({} lines, total {:.2})",
            document.series,
            document.number,
            document.items.len(),
            document.total()
        );

        let this = *self;
        let config = self.config.get_value();
        leptos::task::spawn_local(async move {
            match model::submit_purchase(&config, &document).await {
                Ok(()) => {
                    log::info!("Purchase {}-{} registered", document.series, document.number);
                    this.workflow.update(SubmissionWorkflow::succeed);
                    this.notices
                        .show(Notice::success("Inventario Actualizado").then(FollowUp::ReloadPage));
                }
                Err(failure) => {
                    let err = CheckoutError::from(failure);
                    log::error!("Purchase rejected: {}", err);
                    this.workflow.update(SubmissionWorkflow::fail);
                    this.notices.show(Notice::error(failure_message(&err)));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_prefers_status() {
        let err = CheckoutError::SubmissionFailed {
            status: Some(500),
            message: Some("Internal".into()),
        };
        assert_eq!(failure_message(&err), "Error al guardar: 500");
    }

    #[test]
    fn test_failure_message_without_response() {
        let err = CheckoutError::SubmissionFailed {
            status: None,
            message: Some("Error de red: timeout".into()),
        };
        assert_eq!(failure_message(&err), "Error al guardar: Error de red: timeout");
    }
}
