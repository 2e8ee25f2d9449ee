//! Per-screen cart rules.
//!
//! Purchases and sales share one cart implementation; everything that differs
//! between the two screens lives here and is read from the `[purchase]` and
//! `[sale]` config sections.

use serde::Deserialize;

/// What happens when a product that is already listed is selected again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatPolicy {
    /// Increment the existing line's quantity by one
    Merge,
    /// Keep the cart as is and tell the user the product is already listed
    Reject,
}

/// Where a new line takes its unit rate from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// Last purchase cost (`precioCompra`)
    PurchaseCost,
    /// Sale price (`precioVenta`)
    SalePrice,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlowPolicy {
    pub on_repeat: RepeatPolicy,
    pub rate_source: RateSource,
    /// Lowest accepted quantity; unparsable or smaller input snaps to it.
    /// Without a floor unparsable input becomes 0.
    #[serde(default)]
    pub quantity_floor: Option<f64>,
    /// Disable the submit control while a submission is in flight
    #[serde(default)]
    pub lock_submit: bool,
    /// The unit rate column is an input (purchases) or plain text (sales)
    #[serde(default)]
    pub rate_editable: bool,
    pub category_fallback: String,
    /// VAT rate included in the prices; `None` hides the tax breakdown
    #[serde(default)]
    pub tax_rate: Option<f64>,
}

impl FlowPolicy {
    /// Rules of the purchases screen
    pub fn purchase() -> Self {
        Self {
            on_repeat: RepeatPolicy::Reject,
            rate_source: RateSource::PurchaseCost,
            quantity_floor: None,
            lock_submit: false,
            rate_editable: true,
            category_fallback: "GENERAL".to_string(),
            tax_rate: None,
        }
    }

    /// Rules of the sales screen
    pub fn sale() -> Self {
        Self {
            on_repeat: RepeatPolicy::Merge,
            rate_source: RateSource::SalePrice,
            quantity_floor: Some(1.0),
            lock_submit: true,
            rate_editable: false,
            category_fallback: "GRAL".to_string(),
            tax_rate: Some(0.18),
        }
    }
}
