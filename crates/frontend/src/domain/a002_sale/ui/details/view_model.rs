//! ViewModel for the sale entry form
//!
//! Sales merge repeated products, enforce a minimum quantity of one and lock
//! the submit control while a request is in flight.

use super::model;
use crate::shared::cart::checkout::{sale_document, CheckoutError, SaleHeader, SubmissionWorkflow};
use crate::shared::cart::CartVm;
use crate::shared::config::Config;
use crate::shared::notice::{FollowUp, Notice, NoticeService};
use contracts::domain::a003_sale::aggregate::{
    client_doc_type_for, DEFAULT_PAYMENT_METHOD, DEFAULT_PAYMENT_TERMS, SALE_DOCUMENT_TYPES,
};
use leptos::prelude::*;

/// "No se pudo procesar: {message}"; the status alone is not shown to the cashier
fn failure_message(err: &CheckoutError) -> String {
    let reason = match err {
        CheckoutError::SubmissionFailed {
            message: Some(message),
            ..
        } => message.as_str(),
        _ => "Error desconocido",
    };
    format!("No se pudo procesar: {}", reason)
}

/// Empty cart wording used on the sales screen
const EMPTY_CART_MESSAGE: &str = "El carrito está vacío";

fn validation_notice(err: &CheckoutError) -> Notice {
    match err {
        CheckoutError::EmptyCart => Notice::warning(EMPTY_CART_MESSAGE),
        other => Notice::from(other),
    }
}

/// Element id of the barcode field
pub const SCAN_INPUT_ID: &str = "codigoBarra";

/// True on the transition from loading to loaded
pub fn loading_finished(previous: Option<bool>, loading: bool) -> bool {
    previous == Some(true) && !loading
}

/// Label for the client document field: RUC for invoices, DNI otherwise
pub fn client_doc_label(document_type: &str) -> &'static str {
    match client_doc_type_for(document_type) {
        "6" => "RUC",
        _ => "DNI",
    }
}

#[derive(Clone, Copy)]
pub struct SaleDetailsVm {
    // === Client fields ===
    pub document_type: RwSignal<String>,
    pub client_doc: RwSignal<String>,
    pub client_name: RwSignal<String>,
    pub client_address: RwSignal<String>,

    // === Payment fields ===
    pub payment_terms: RwSignal<String>,
    pub payment_method: RwSignal<String>,

    /// Barcode scanner / manual code entry
    pub scan_code: RwSignal<String>,

    // === Lines ===
    pub cart: CartVm,

    // === UI State ===
    pub workflow: RwSignal<SubmissionWorkflow>,
    config: StoredValue<Config>,
    notices: NoticeService,
}

impl SaleDetailsVm {
    pub fn new(config: &Config, notices: NoticeService) -> Self {
        let policy = config.sale.clone();
        Self {
            document_type: RwSignal::new(SALE_DOCUMENT_TYPES[0].to_string()),
            client_doc: RwSignal::new(String::new()),
            client_name: RwSignal::new(String::new()),
            client_address: RwSignal::new(String::new()),
            payment_terms: RwSignal::new(DEFAULT_PAYMENT_TERMS.to_string()),
            payment_method: RwSignal::new(DEFAULT_PAYMENT_METHOD.to_string()),
            scan_code: RwSignal::new(String::new()),
            workflow: RwSignal::new(SubmissionWorkflow::new(policy.lock_submit)),
            cart: CartVm::new(policy, config, notices),
            config: StoredValue::new(config.clone()),
            notices,
        }
    }

    pub fn header(&self) -> SaleHeader {
        SaleHeader {
            document_type: self.document_type.get_untracked(),
            client_doc: self.client_doc.get_untracked(),
            client_name: self.client_name.get_untracked(),
            client_address: self.client_address.get_untracked(),
            payment_terms: self.payment_terms.get_untracked(),
            payment_method: self.payment_method.get_untracked(),
        }
    }

    pub fn client_doc_label(&self) -> Signal<&'static str> {
        let document_type = self.document_type;
        Signal::derive(move || document_type.with(|t| client_doc_label(t)))
    }

    pub fn is_submit_disabled(&self) -> Signal<bool> {
        let workflow = self.workflow;
        Signal::derive(move || workflow.with(SubmissionWorkflow::control_disabled))
    }

    // === Data loading ===

    pub fn load(&self) {
        self.cart.load_products(&self.config.get_value());
    }

    // === Commands ===

    /// Add the scanned product; the field is cleared either way
    pub fn scan(&self) {
        let code = self.scan_code.get_untracked();
        if code.trim().is_empty() {
            return;
        }
        if let Err(e) = self.cart.add_by_code(&code) {
            log::debug!("Scan miss for '{}'", code.trim());
            self.notices.show(Notice::from(&e));
        }
        self.scan_code.set(String::new());
    }

    /// Validate, post the document and report the outcome.
    ///
    /// The submit control is disabled from `begin` until the request settles.
    pub fn submit(&self) {
        let header = self.header();
        let document = match self.cart.with_cart(|c| sale_document(c, &header)) {
            Ok(document) => document,
            Err(e) => {
                log::debug!("Sale not submitted: {}", e);
                self.notices.show(validation_notice(&e));
                return;
            }
        };

        let mut started = false;
        self.workflow.update(|w| started = w.begin());
        if !started {
            log::debug!("Sale already in flight");
            return;
        }

        log::info!(
            "Submitting {} for {} ({} lines, total {:.2})",
            document.document_type,
            document.client_doc,
            document.items.len(),
            document.total()
        );

        let this = *self;
        let config = self.config.get_value();
        leptos::task::spawn_local(async move {
            match model::submit_sale(&config, &document).await {
                Ok(()) => {
                    log::info!("Sale registered");
                    this.workflow.update(SubmissionWorkflow::succeed);
                    this.notices.show(
                        Notice::success("Venta registrada correctamente").then(FollowUp::ReloadPage),
                    );
                }
                Err(failure) => {
                    let err = CheckoutError::from(failure);
                    log::error!("Sale rejected: {}", err);
                    this.workflow.update(SubmissionWorkflow::fail);
                    this.notices.show(Notice::error(failure_message(&err)));
                }
            }
        });
    }
}
