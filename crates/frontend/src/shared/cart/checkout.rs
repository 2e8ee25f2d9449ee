//! Submission workflow: pre-request validation, document building and the
//! `Idle -> Submitting -> (Idle | Unloaded)` state machine.

use super::cart::Cart;
use chrono::NaiveDate;
use contracts::domain::a002_purchase::aggregate::PurchaseDocument;
use contracts::domain::a003_sale::aggregate::{
    client_doc_type_for, SaleDocument, DEFAULT_CLIENT_ADDRESS, DEFAULT_CLIENT_DOC,
    DEFAULT_CLIENT_NAME, DEFAULT_PAYMENT_METHOD, DEFAULT_PAYMENT_TERMS,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckoutError {
    #[error("No hay productos en la lista")]
    EmptyCart,

    #[error("Faltan datos del comprobante ({})", .fields.join(", "))]
    MissingHeader { fields: Vec<&'static str> },

    #[error("Producto no encontrado con ese código")]
    ProductNotFound { code: String },

    #[error("{}", submission_reason(.status, .message))]
    SubmissionFailed {
        status: Option<u16>,
        message: Option<String>,
    },
}

fn submission_reason(status: &Option<u16>, message: &Option<String>) -> String {
    match (message, status) {
        (Some(m), _) => m.clone(),
        (None, Some(s)) => format!("HTTP {}", s),
        (None, None) => "Error desconocido".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    /// The page is being reloaded; nothing may happen any more
    Unloaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionWorkflow {
    state: SubmitState,
    lock_control: bool,
}

impl SubmissionWorkflow {
    pub fn new(lock_control: bool) -> Self {
        Self {
            state: SubmitState::Idle,
            lock_control,
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Submit control state; only locking flows ever disable it
    pub fn control_disabled(&self) -> bool {
        match self.state {
            SubmitState::Idle => false,
            SubmitState::Submitting => self.lock_control,
            SubmitState::Unloaded => true,
        }
    }

    /// Enter `Submitting`. Returns false when the control is locked or the page is gone.
    pub fn begin(&mut self) -> bool {
        if self.state == SubmitState::Unloaded || self.control_disabled() {
            return false;
        }
        self.state = SubmitState::Submitting;
        true
    }

    pub fn succeed(&mut self) {
        self.state = SubmitState::Unloaded;
    }

    pub fn fail(&mut self) {
        if self.state == SubmitState::Submitting {
            self.state = SubmitState::Idle;
        }
    }
}

/// Header fields of the purchases form, as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurchaseHeader {
    pub document_type: String,
    pub series: String,
    pub number: String,
    pub supplier_tax_id: String,
    pub supplier_name: String,
}

/// Header fields of the sales form, as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaleHeader {
    pub document_type: String,
    pub client_doc: String,
    pub client_name: String,
    pub client_address: String,
    pub payment_terms: String,
    pub payment_method: String,
}

fn or_default(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn purchase_document(
    cart: &Cart,
    header: &PurchaseHeader,
    today: NaiveDate,
) -> Result<PurchaseDocument, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let fields: Vec<&'static str> = [
        ("Serie", &header.series),
        ("Número", &header.number),
        ("RUC", &header.supplier_tax_id),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(name, _)| name)
    .collect();
    if !fields.is_empty() {
        return Err(CheckoutError::MissingHeader { fields });
    }

    Ok(PurchaseDocument {
        document_type: header.document_type.clone(),
        series: header.series.trim().to_string(),
        number: header.number.trim().to_string(),
        issue_date: today,
        supplier_tax_id: header.supplier_tax_id.trim().to_string(),
        supplier_name: header.supplier_name.trim().to_string(),
        items: cart.purchase_lines(),
    })
}

/// Sales have no header precondition: blank client fields get defaults
pub fn sale_document(cart: &Cart, header: &SaleHeader) -> Result<SaleDocument, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    Ok(SaleDocument {
        document_type: header.document_type.clone(),
        client_doc: or_default(&header.client_doc, DEFAULT_CLIENT_DOC),
        client_name: or_default(&header.client_name, DEFAULT_CLIENT_NAME),
        client_address: or_default(&header.client_address, DEFAULT_CLIENT_ADDRESS),
        client_doc_type: client_doc_type_for(&header.document_type).to_string(),
        payment_terms: or_default(&header.payment_terms, DEFAULT_PAYMENT_TERMS),
        payment_method: or_default(&header.payment_method, DEFAULT_PAYMENT_METHOD),
        items: cart.sale_lines(),
    })
}
