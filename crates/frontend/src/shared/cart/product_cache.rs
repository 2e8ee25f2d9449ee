//! Snapshot of the active product list, fetched once per page load.

use contracts::domain::a001_product::aggregate::{Product, ProductId};

/// One entry of the product picker: the id and the text shown and searched.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOption {
    pub id: ProductId,
    pub text: String,
    /// Lowercased text plus codes, matched by [`filter_options`]
    haystack: String,
}

#[derive(Debug, Clone, Default)]
pub struct ProductCache {
    products: Vec<Product>,
}

impl ProductCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot wholesale
    pub fn replace(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Exact match against the barcode or the internal code
    pub fn find_by_code(&self, code: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.has_code(code))
    }

    /// Build picker entries: `"{name} [{category}] - {currency} {price}"`
    pub fn search_options(&self, category_fallback: &str, currency: &str) -> Vec<SearchOption> {
        self.products
            .iter()
            .map(|p| {
                let text = format!(
                    "{} [{}] - {} {}",
                    p.name,
                    p.category_or(category_fallback),
                    currency,
                    default_price(p)
                );
                let mut haystack = text.to_lowercase();
                for code in [&p.barcode, &p.internal_code].into_iter().flatten() {
                    haystack.push(' ');
                    haystack.push_str(&code.to_lowercase());
                }
                SearchOption {
                    id: p.id,
                    text,
                    haystack,
                }
            })
            .collect()
    }
}

/// Last purchase cost, or 0 when unknown
pub fn default_cost(product: &Product) -> f64 {
    non_negative(product.purchase_price)
}

/// Sale price, or 0 when unknown
pub fn default_price(product: &Product) -> f64 {
    non_negative(product.sale_price)
}

fn non_negative(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Options whose text or codes contain every whitespace-separated term of
/// `query`, case-insensitively. An empty query yields the first `limit` options.
pub fn filter_options<'a>(
    options: &'a [SearchOption],
    query: &str,
    limit: usize,
) -> Vec<&'a SearchOption> {
    let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
    options
        .iter()
        .filter(|o| terms.iter().all(|t| o.haystack.contains(t.as_str())))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, price: Option<f64>) -> Product {
        Product {
            id: ProductId(id),
            name: name.to_string(),
            category: None,
            sale_price: price,
            purchase_price: None,
            barcode: None,
            internal_code: None,
        }
    }

    fn sample_cache() -> ProductCache {
        let mut notebook = product(2, "Cuaderno A4", Some(6.5));
        notebook.category = Some("UTILES".into());
        notebook.purchase_price = Some(4.0);
        notebook.barcode = Some("7751234".into());
        notebook.internal_code = Some("CU-01".into());

        let mut cache = ProductCache::new();
        cache.replace(vec![product(1, "Agua", Some(2.5)), notebook]);
        cache
    }

    #[test]
    fn test_find_by_id() {
        let cache = sample_cache();
        assert_eq!(cache.find_by_id(ProductId(2)).map(|p| p.name.as_str()), Some("Cuaderno A4"));
        assert!(cache.find_by_id(ProductId(99)).is_none());
    }

    #[test]
    fn test_find_by_code_matches_either_code() {
        let cache = sample_cache();
        assert_eq!(cache.find_by_code("7751234").map(|p| p.id), Some(ProductId(2)));
        assert_eq!(cache.find_by_code("CU-01").map(|p| p.id), Some(ProductId(2)));
        assert!(cache.find_by_code("cu-01").is_none());
        assert!(cache.find_by_code("").is_none());
    }

    #[test]
    fn test_replace_drops_previous_snapshot() {
        let mut cache = sample_cache();
        cache.replace(vec![product(5, "Tiza", None)]);
        assert_eq!(cache.len(), 1);
        assert!(cache.find_by_id(ProductId(1)).is_none());
    }

    #[test]
    fn test_empty_cache_finds_nothing() {
        let cache = ProductCache::new();
        assert!(cache.is_empty());
        assert!(cache.find_by_id(ProductId(1)).is_none());
        assert!(cache.find_by_code("7751234").is_none());
    }

    #[test]
    fn test_defaults_fall_back_to_zero() {
        let cache = sample_cache();
        let water = cache.find_by_id(ProductId(1)).unwrap();
        let notebook = cache.find_by_id(ProductId(2)).unwrap();

        assert_eq!(default_cost(water), 0.0);
        assert_eq!(default_price(water), 2.5);
        assert_eq!(default_cost(notebook), 4.0);

        assert_eq!(default_price(&product(9, "x", Some(-3.0))), 0.0);
        assert_eq!(default_price(&product(9, "x", Some(f64::NAN))), 0.0);
    }

    #[test]
    fn test_search_options_text() {
        let cache = sample_cache();
        let options = cache.search_options("GRAL", "S/");
        assert_eq!(options[0].text, "Agua [GRAL] - S/ 2.5");
        assert_eq!(options[1].text, "Cuaderno A4 [UTILES] - S/ 6.5");
    }

    #[test]
    fn test_filter_options() {
        let cache = sample_cache();
        let options = cache.search_options("GENERAL", "S/");

        let hits = filter_options(&options, "cuad utiles", 10);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, ProductId(2));

        // codes are searchable even though they are not displayed
        assert_eq!(filter_options(&options, "775", 10)[0].id, ProductId(2));

        assert_eq!(filter_options(&options, "", 10).len(), 2);
        assert_eq!(filter_options(&options, "", 1).len(), 1);
        assert!(filter_options(&options, "tiza", 10).is_empty());
    }
}
