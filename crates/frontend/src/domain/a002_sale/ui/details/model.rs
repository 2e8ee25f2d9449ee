use crate::shared::config::Config;
use crate::shared::http::client::{self, ApiFailure};
use crate::shared::http::csrf::Transport;
use contracts::domain::a003_sale::aggregate::SaleDocument;

/// Register a sale; the server issues the receipt and moves stock
pub async fn submit_sale(config: &Config, document: &SaleDocument) -> Result<(), ApiFailure> {
    client::post_json(&config.api.sale_submit_url(), document, Transport::Ajax, &config.csrf).await
}
