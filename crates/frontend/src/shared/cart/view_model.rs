//! Reactive cart owned by one screen.
//!
//! Two redraw paths:
//! - `render_all` rebuilds every row (structure changed: add, merge, remove, load)
//! - `render_line_total` touches one subtotal cell and the totals only, so the
//!   input being typed into is never recreated and keeps focus and caret

use super::cart::{AddOutcome, Cart, CartLine, LineEdit};
use super::checkout::CheckoutError;
use super::model;
use super::policy::FlowPolicy;
use super::product_cache::{ProductCache, SearchOption};
use crate::shared::config::Config;
use crate::shared::notice::{Notice, NoticeService};
use contracts::domain::a001_product::aggregate::{Product, ProductId};
use leptos::prelude::*;

/// One rendered table row. `generation` changes on every full redraw so the
/// keyed list recreates all rows and their inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRow {
    pub generation: u64,
    pub index: usize,
    pub name: String,
    pub quantity: f64,
    pub rate: f64,
}

impl LineRow {
    pub fn key(&self) -> (u64, usize) {
        (self.generation, self.index)
    }
}

/// Project the cart into display rows, in cart order
pub fn project_rows(cart: &Cart, generation: u64) -> Vec<LineRow> {
    cart.lines()
        .iter()
        .enumerate()
        .map(|(index, line)| LineRow {
            generation,
            index,
            name: line.name.clone(),
            quantity: line.quantity,
            rate: line.rate,
        })
        .collect()
}

pub fn project_subtotals(cart: &Cart) -> Vec<f64> {
    cart.lines().iter().map(CartLine::subtotal).collect()
}

struct CartState {
    policy: FlowPolicy,
    cache: ProductCache,
    cart: Cart,
    generation: u64,
}

#[derive(Clone, Copy)]
pub struct CartVm {
    state: StoredValue<CartState>,
    currency: StoredValue<String>,
    picker_limit: usize,
    notices: NoticeService,

    // === Rendered state ===
    pub rows: RwSignal<Vec<LineRow>>,
    /// Indexed like `rows`
    pub subtotals: RwSignal<Vec<f64>>,
    pub total: RwSignal<f64>,
    pub options: RwSignal<Vec<SearchOption>>,
    pub products_loading: RwSignal<bool>,
}

impl CartVm {
    pub fn new(policy: FlowPolicy, config: &Config, notices: NoticeService) -> Self {
        Self {
            state: StoredValue::new(CartState {
                policy,
                cache: ProductCache::new(),
                cart: Cart::new(),
                generation: 0,
            }),
            currency: StoredValue::new(config.display.currency.clone()),
            picker_limit: config.display.picker_limit,
            notices,
            rows: RwSignal::new(Vec::new()),
            subtotals: RwSignal::new(Vec::new()),
            total: RwSignal::new(0.0),
            options: RwSignal::new(Vec::new()),
            products_loading: RwSignal::new(false),
        }
    }

    pub fn policy(&self) -> FlowPolicy {
        self.state.with_value(|s| s.policy.clone())
    }

    pub fn currency(&self) -> String {
        self.currency.get_value()
    }

    pub fn picker_limit(&self) -> usize {
        self.picker_limit
    }

    pub fn with_cart<R>(&self, f: impl FnOnce(&Cart) -> R) -> R {
        self.state.with_value(|s| f(&s.cart))
    }

    // === Data loading ===

    /// Fetch the active products once; the cache is replaced wholesale
    pub fn load_products(&self, config: &Config) {
        let this = *self;
        let config = config.clone();
        this.products_loading.set(true);

        leptos::task::spawn_local(async move {
            match model::fetch_active_products(&config).await {
                Ok(products) => {
                    log::info!("Loaded {} active products", products.len());
                    this.set_products(products);
                }
                // The screen stays usable with an empty picker
                Err(e) => log::warn!("Product list unavailable: {:?}", e),
            }
            this.products_loading.set(false);
        });
    }

    pub fn set_products(&self, products: Vec<Product>) {
        let currency = self.currency.get_value();
        let mut options = Vec::new();
        self.state.update_value(|s| {
            s.cache.replace(products);
            options = s.cache.search_options(&s.policy.category_fallback, &currency);
        });
        self.options.set(options);
        self.render_all();
    }

    // === Commands ===

    pub fn add_product(&self, id: ProductId) -> AddOutcome {
        let mut outcome = AddOutcome::UnknownProduct;
        self.state
            .update_value(|s| outcome = s.cart.add_or_merge(&s.cache, id, &s.policy));

        match outcome {
            AddOutcome::Added | AddOutcome::Merged => {
                log::debug!("Cart {:?}: product {}", outcome, id);
                self.render_all();
            }
            AddOutcome::AlreadyListed => {
                log::debug!("Product {} already listed", id);
                self.notices.show(Notice::info("El producto ya está en la lista"));
            }
            AddOutcome::UnknownProduct => {
                log::warn!("Product {} is not in the cache", id);
            }
        }
        outcome
    }

    /// Add the product whose barcode or internal code is exactly `code`
    pub fn add_by_code(&self, code: &str) -> Result<AddOutcome, CheckoutError> {
        let code = code.trim();
        let found = self
            .state
            .with_value(|s| s.cache.find_by_code(code).map(|p| p.id));
        match found {
            Some(id) => Ok(self.add_product(id)),
            None => Err(CheckoutError::ProductNotFound {
                code: code.to_string(),
            }),
        }
    }

    pub fn apply_edit(&self, edit: LineEdit) {
        let mut subtotal = None;
        self.state
            .update_value(|s| subtotal = s.cart.update_line(&edit, &s.policy));

        match subtotal {
            Some(_) => self.render_line_total(edit.index()),
            None => log::warn!("Edit for stale line {} ignored", edit.index()),
        }
    }

    pub fn remove_line(&self, index: usize) {
        let mut removed = None;
        self.state.update_value(|s| removed = s.cart.remove(index));

        match removed {
            Some(line) => {
                log::debug!("Removed {} from cart", line.name);
                self.render_all();
            }
            None => log::warn!("Remove for stale line {} ignored", index),
        }
    }

    // === Rendering ===

    /// Full redraw: new generation, every row rebuilt
    pub fn render_all(&self) {
        let mut projection = (Vec::new(), Vec::new(), 0.0);
        self.state.update_value(|s| {
            s.generation += 1;
            projection = (
                project_rows(&s.cart, s.generation),
                project_subtotals(&s.cart),
                s.cart.total(),
            );
        });
        let (rows, subtotals, total) = projection;
        self.rows.set(rows);
        self.subtotals.set(subtotals);
        self.total.set(total);
    }

    /// Incremental redraw of one line's subtotal and the totals; rows untouched
    pub fn render_line_total(&self, index: usize) {
        let (subtotal, total) = self
            .state
            .with_value(|s| (s.cart.get(index).map(CartLine::subtotal), s.cart.total()));

        if let Some(value) = subtotal {
            self.subtotals.update(|v| {
                if let Some(slot) = v.get_mut(index) {
                    *slot = value;
                }
            });
        }
        self.total.set(total);
    }
}
