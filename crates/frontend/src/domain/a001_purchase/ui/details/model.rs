use crate::shared::config::Config;
use crate::shared::http::client::{self, ApiFailure};
use crate::shared::http::csrf::Transport;
use contracts::domain::a002_purchase::aggregate::PurchaseDocument;

/// Register a purchase; the server updates stock on success
pub async fn submit_purchase(config: &Config, document: &PurchaseDocument) -> Result<(), ApiFailure> {
    client::post_json(&config.api.purchase_submit_url(), document, Transport::Ajax, &config.csrf).await
}
