//! Line-item cart shared by the purchases and sales screens.
//!
//! Lines are addressed by position. Any index handed out before a
//! [`Cart::remove`] is stale afterwards.

use super::policy::{FlowPolicy, RateSource, RepeatPolicy};
use super::product_cache::{default_cost, default_price, ProductCache};
use contracts::domain::a001_product::aggregate::ProductId;
use contracts::domain::a002_purchase::aggregate::PurchaseLine;
use contracts::domain::a003_sale::aggregate::SaleLine;

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: ProductId,
    /// Copied from the product when the line is created
    pub name: String,
    pub quantity: f64,
    /// Unit cost (purchases) or unit price (sales)
    pub rate: f64,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.quantity * self.rate
    }
}

/// Result of [`Cart::add_or_merge`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended
    Added,
    /// The existing line's quantity went up by one
    Merged,
    /// The product is already listed and the policy forbids merging
    AlreadyListed,
    /// The id is not in the product cache; nothing changed
    UnknownProduct,
}

/// An inline edit of one cell, carrying the raw text typed by the user
#[derive(Debug, Clone, PartialEq)]
pub enum LineEdit {
    Quantity { index: usize, raw: String },
    Rate { index: usize, raw: String },
}

impl LineEdit {
    pub fn index(&self) -> usize {
        match self {
            LineEdit::Quantity { index, .. } | LineEdit::Rate { index, .. } => *index,
        }
    }
}

/// Parse user input as a finite number
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn coerce_quantity(raw: &str, floor: Option<f64>) -> f64 {
    match (parse_amount(raw), floor) {
        (Some(v), Some(min)) if v >= min => v,
        (_, Some(min)) => min,
        (Some(v), None) => v,
        (None, None) => 0.0,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CartLine> {
        self.lines.get(index)
    }

    /// Add the product with `id`, or merge it into its existing line
    pub fn add_or_merge(
        &mut self,
        cache: &ProductCache,
        id: ProductId,
        policy: &FlowPolicy,
    ) -> AddOutcome {
        let Some(product) = cache.find_by_id(id) else {
            return AddOutcome::UnknownProduct;
        };

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == id) {
            return match policy.on_repeat {
                RepeatPolicy::Merge => {
                    line.quantity += 1.0;
                    AddOutcome::Merged
                }
                RepeatPolicy::Reject => AddOutcome::AlreadyListed,
            };
        }

        let rate = match policy.rate_source {
            RateSource::PurchaseCost => default_cost(product),
            RateSource::SalePrice => default_price(product),
        };
        self.lines.push(CartLine {
            product_id: product.id,
            name: product.name.clone(),
            quantity: 1.0,
            rate,
        });
        AddOutcome::Added
    }

    /// Apply an inline edit and return the line's new subtotal.
    ///
    /// Returns `None` and leaves the cart untouched when the index is out of range.
    pub fn update_line(&mut self, edit: &LineEdit, policy: &FlowPolicy) -> Option<f64> {
        let line = self.lines.get_mut(edit.index())?;
        match edit {
            LineEdit::Quantity { raw, .. } => {
                line.quantity = coerce_quantity(raw, policy.quantity_floor);
            }
            LineEdit::Rate { raw, .. } => {
                line.rate = parse_amount(raw).unwrap_or(0.0);
            }
        }
        Some(line.subtotal())
    }

    /// Remove the line at `index`; later lines move up by one
    pub fn remove(&mut self, index: usize) -> Option<CartLine> {
        if index < self.lines.len() {
            Some(self.lines.remove(index))
        } else {
            None
        }
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Total without the VAT included in it: `total / (1 + rate)`
    pub fn tax_exclusive(&self, tax_rate: f64) -> f64 {
        self.total() / (1.0 + tax_rate)
    }

    pub fn tax_amount(&self, tax_rate: f64) -> f64 {
        self.total() - self.tax_exclusive(tax_rate)
    }

    pub fn purchase_lines(&self) -> Vec<PurchaseLine> {
        self.lines
            .iter()
            .map(|l| PurchaseLine {
                product_id: l.product_id,
                name: l.name.clone(),
                quantity: l.quantity,
                unit_cost: l.rate,
            })
            .collect()
    }

    pub fn sale_lines(&self) -> Vec<SaleLine> {
        self.lines
            .iter()
            .map(|l| SaleLine {
                product_id: l.product_id,
                name: l.name.clone(),
                unit_price: l.rate,
                quantity: l.quantity,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::aggregate::Product;

    fn product(id: i64, name: &str, price: Option<f64>, cost: Option<f64>) -> Product {
        Product {
            id: ProductId(id),
            name: name.to_string(),
            category: None,
            sale_price: price,
            purchase_price: cost,
            barcode: None,
            internal_code: None,
        }
    }

    fn cache() -> ProductCache {
        let mut cache = ProductCache::new();
        cache.replace(vec![
            product(1, "Agua", Some(2.5), Some(1.2)),
            product(2, "Cuaderno", Some(6.0), None),
            product(3, "Lapicero", Some(1.5), Some(0.8)),
        ]);
        cache
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn recomputed_total(cart: &Cart) -> f64 {
        cart.lines().iter().map(|l| l.quantity * l.rate).sum()
    }

    #[test]
    fn test_sale_merge_counts_repeats() {
        let cache = cache();
        let policy = FlowPolicy::sale();
        let mut cart = Cart::new();

        let adds = [1, 2, 1, 3, 1, 2];
        for id in adds {
            cart.add_or_merge(&cache, ProductId(id), &policy);
        }

        assert_eq!(cart.len(), 3);
        for line in cart.lines() {
            let expected = adds.iter().filter(|&&id| ProductId(id) == line.product_id).count();
            assert_eq!(line.quantity, expected as f64);
        }
        // insertion order is display order
        let ids: Vec<i64> = cart.lines().iter().map(|l| l.product_id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_purchase_repeat_is_rejected() {
        let cache = cache();
        let policy = FlowPolicy::purchase();
        let mut cart = Cart::new();

        assert_eq!(cart.add_or_merge(&cache, ProductId(1), &policy), AddOutcome::Added);
        cart.update_line(&LineEdit::Rate { index: 0, raw: "1.75".into() }, &policy);
        cart.update_line(&LineEdit::Quantity { index: 0, raw: "12".into() }, &policy);
        let before = cart.clone();

        assert_eq!(
            cart.add_or_merge(&cache, ProductId(1), &policy),
            AddOutcome::AlreadyListed
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_unknown_product_is_noop() {
        let cache = cache();
        let mut cart = Cart::new();
        assert_eq!(
            cart.add_or_merge(&cache, ProductId(42), &FlowPolicy::sale()),
            AddOutcome::UnknownProduct
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_new_line_rate_follows_policy() {
        let cache = cache();
        let mut purchase = Cart::new();
        purchase.add_or_merge(&cache, ProductId(1), &FlowPolicy::purchase());
        purchase.add_or_merge(&cache, ProductId(2), &FlowPolicy::purchase());
        assert_eq!(purchase.get(0).map(|l| l.rate), Some(1.2));
        // no purchase history: cost starts at 0
        assert_eq!(purchase.get(1).map(|l| l.rate), Some(0.0));

        let mut sale = Cart::new();
        sale.add_or_merge(&cache, ProductId(1), &FlowPolicy::sale());
        assert_eq!(sale.get(0).map(|l| l.rate), Some(2.5));
        assert_eq!(sale.get(0).map(|l| l.name.as_str()), Some("Agua"));
    }

    #[test]
    fn test_non_numeric_edit_is_asymmetric() {
        let cache = cache();

        let sale_policy = FlowPolicy::sale();
        let mut sale = Cart::new();
        sale.add_or_merge(&cache, ProductId(1), &sale_policy);
        sale.update_line(&LineEdit::Quantity { index: 0, raw: "5".into() }, &sale_policy);
        sale.update_line(&LineEdit::Quantity { index: 0, raw: "abc".into() }, &sale_policy);
        assert_eq!(sale.get(0).map(|l| l.quantity), Some(1.0));

        let purchase_policy = FlowPolicy::purchase();
        let mut purchase = Cart::new();
        purchase.add_or_merge(&cache, ProductId(1), &purchase_policy);
        purchase.update_line(&LineEdit::Rate { index: 0, raw: "abc".into() }, &purchase_policy);
        purchase.update_line(&LineEdit::Quantity { index: 0, raw: "".into() }, &purchase_policy);
        assert_eq!(purchase.get(0).map(|l| l.rate), Some(0.0));
        assert_eq!(purchase.get(0).map(|l| l.quantity), Some(0.0));
    }

    #[test]
    fn test_sale_quantity_floor() {
        let cache = cache();
        let policy = FlowPolicy::sale();
        let mut cart = Cart::new();
        cart.add_or_merge(&cache, ProductId(1), &policy);

        for raw in ["0", "-4", "0.5", "NaN", "inf"] {
            cart.update_line(&LineEdit::Quantity { index: 0, raw: raw.into() }, &policy);
            assert_eq!(cart.get(0).map(|l| l.quantity), Some(1.0), "input {raw:?}");
        }
        let subtotal = cart.update_line(&LineEdit::Quantity { index: 0, raw: " 2.5 ".into() }, &policy);
        assert_eq!(subtotal, Some(6.25));
    }

    #[test]
    fn test_update_touches_only_named_field() {
        let cache = cache();
        let policy = FlowPolicy::purchase();
        let mut cart = Cart::new();
        cart.add_or_merge(&cache, ProductId(3), &policy);

        cart.update_line(&LineEdit::Quantity { index: 0, raw: "10".into() }, &policy);
        assert_eq!(cart.get(0).map(|l| (l.quantity, l.rate)), Some((10.0, 0.8)));

        let subtotal = cart.update_line(&LineEdit::Rate { index: 0, raw: "0.9".into() }, &policy);
        assert_eq!(cart.get(0).map(|l| (l.quantity, l.rate)), Some((10.0, 0.9)));
        assert!(approx(subtotal.unwrap(), 9.0));
    }

    #[test]
    fn test_stale_index_leaves_cart_untouched() {
        let cache = cache();
        let policy = FlowPolicy::sale();
        let mut cart = Cart::new();
        cart.add_or_merge(&cache, ProductId(1), &policy);
        let before = cart.clone();

        assert_eq!(cart.update_line(&LineEdit::Quantity { index: 3, raw: "9".into() }, &policy), None);
        assert_eq!(cart.remove(3), None);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_shifts_following_lines() {
        let cache = cache();
        let policy = FlowPolicy::sale();
        let mut cart = Cart::new();
        for id in [1, 2, 3] {
            cart.add_or_merge(&cache, ProductId(id), &policy);
        }
        cart.update_line(&LineEdit::Quantity { index: 2, raw: "4".into() }, &policy);
        let tail: Vec<CartLine> = cart.lines()[1..].to_vec();

        let removed = cart.remove(0);
        assert_eq!(removed.map(|l| l.product_id), Some(ProductId(1)));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines(), tail.as_slice());
    }

    #[test]
    fn test_total_matches_lines_after_mixed_operations() {
        let cache = cache();
        let policy = FlowPolicy::purchase();
        let mut cart = Cart::new();

        cart.add_or_merge(&cache, ProductId(1), &policy);
        cart.add_or_merge(&cache, ProductId(2), &policy);
        cart.update_line(&LineEdit::Rate { index: 1, raw: "3.33".into() }, &policy);
        cart.update_line(&LineEdit::Quantity { index: 1, raw: "7".into() }, &policy);
        assert!(approx(cart.total(), recomputed_total(&cart)));

        cart.add_or_merge(&cache, ProductId(3), &policy);
        cart.remove(0);
        cart.update_line(&LineEdit::Quantity { index: 1, raw: "2.5".into() }, &policy);
        assert!(approx(cart.total(), recomputed_total(&cart)));
        assert!(approx(cart.total(), 7.0 * 3.33 + 2.5 * 0.8));

        cart.remove(1);
        cart.remove(0);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_sale_scenario_totals_and_tax() {
        let mut cache = ProductCache::new();
        cache.replace(vec![product(1, "Agua", Some(2.5), None)]);
        let policy = FlowPolicy::sale();
        let mut cart = Cart::new();

        assert_eq!(cart.add_or_merge(&cache, ProductId(1), &policy), AddOutcome::Added);
        assert_eq!(cart.add_or_merge(&cache, ProductId(1), &policy), AddOutcome::Merged);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(0).map(|l| l.quantity), Some(2.0));
        assert_eq!(cart.get(0).map(CartLine::subtotal), Some(5.0));
        assert_eq!(cart.total(), 5.0);
        assert!((cart.tax_exclusive(0.18) - 4.237).abs() < 1e-3);
        assert!((cart.tax_amount(0.18) - 0.763).abs() < 1e-3);
    }

    #[test]
    fn test_document_lines() {
        let cache = cache();
        let mut cart = Cart::new();
        cart.add_or_merge(&cache, ProductId(1), &FlowPolicy::sale());

        let sale = cart.sale_lines();
        assert_eq!(sale[0].unit_price, 2.5);
        assert_eq!(sale[0].quantity, 1.0);

        let purchase = cart.purchase_lines();
        assert_eq!(purchase[0].unit_cost, 2.5);
        assert_eq!(purchase[0].name, "Agua");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("3.5"), Some(3.5));
        assert_eq!(parse_amount(" 7 "), Some(7.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("1,5"), None);
        assert_eq!(parse_amount("inf"), None);
    }
}
