use crate::shared::config::Config;
use crate::shared::http::client::{self, ApiFailure};
use crate::shared::http::csrf::Transport;
use contracts::domain::a001_product::aggregate::Product;

/// Active products, as served for both screens
pub async fn fetch_active_products(config: &Config) -> Result<Vec<Product>, ApiFailure> {
    client::get_json::<Vec<Product>>(&config.api.products_url(), Transport::Ajax, &config.csrf).await
}
