use super::api_utils::api_url;
use super::cart::policy::FlowPolicy;
use super::http::csrf::CsrfSettings;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub csrf: CsrfSettings,
    pub display: DisplayConfig,
    pub purchase: FlowPolicy,
    pub sale: FlowPolicy,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Prefix for every API path; empty keeps URLs relative
    #[serde(default)]
    pub base: String,
    pub products_path: String,
    pub purchase_submit_path: String,
    pub sale_submit_path: String,
}

impl ApiConfig {
    pub fn products_url(&self) -> String {
        api_url(&self.base, &self.products_path)
    }

    pub fn purchase_submit_url(&self) -> String {
        api_url(&self.base, &self.purchase_submit_path)
    }

    pub fn sale_submit_url(&self) -> String {
        api_url(&self.base, &self.sale_submit_path)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    pub currency: String,
    /// Max entries shown under the product search box
    pub picker_limit: usize,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base = ""
products_path = "/ventas/api/productos-activos"
purchase_submit_path = "/compras/api/procesar"
sale_submit_path = "/ventas/api/procesar"

[csrf]
token_meta = "_csrf"
header_meta = "_csrf_header"
ajax_scope = "always"
fetch_scope = "always"
xhr_scope = "same_origin"

[display]
currency = "S/"
picker_limit = 20

[purchase]
on_repeat = "reject"
rate_source = "purchase_cost"
lock_submit = false
rate_editable = true
category_fallback = "GENERAL"

[sale]
on_repeat = "merge"
rate_source = "sale_price"
quantity_floor = 1.0
lock_submit = true
rate_editable = false
category_fallback = "GRAL"
tax_rate = 0.18
"#;

/// Id of the optional inline override: `<script id="pos-config" type="application/toml">`
const OVERRIDE_ELEMENT_ID: &str = "pos-config";

/// Recursively overlay `over` onto `base`; tables merge, everything else replaces
fn merge(base: &mut toml::Value, over: toml::Value) {
    match (base, over) {
        (toml::Value::Table(base), toml::Value::Table(over)) => {
            for (key, value) in over {
                match base.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, over) => *base = over,
    }
}

/// Parse the embedded defaults with an optional partial TOML override on top
pub fn parse_config(override_toml: Option<&str>) -> anyhow::Result<Config> {
    let mut value = toml::Value::Table(toml::from_str::<toml::Table>(DEFAULT_CONFIG)?);
    if let Some(text) = override_toml.filter(|t| !t.trim().is_empty()) {
        let over = toml::Value::Table(toml::from_str::<toml::Table>(text)?);
        merge(&mut value, over);
    }
    Ok(value.try_into::<Config>()?)
}

fn override_text() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(OVERRIDE_ELEMENT_ID)?
        .text_content()
}

/// Load configuration for the current page
///
/// Search order:
/// 1. Inline `#pos-config` element on the page, layered over the defaults
/// 2. Falls back to the embedded default config
pub fn load_config() -> Config {
    let text = override_text();
    match parse_config(text.as_deref()) {
        Ok(config) => {
            if text.is_some() {
                log::info!("Loaded config with page override");
            } else {
                log::info!("Using default embedded configuration");
            }
            config
        }
        Err(e) => {
            log::warn!("Invalid page config, using defaults: {}", e);
            default_config()
        }
    }
}

/// Embedded defaults; falls back to the hard-coded policies if they ever fail to parse
pub fn default_config() -> Config {
    parse_config(None).unwrap_or_else(|e| {
        log::error!("Embedded config is invalid: {}", e);
        Config {
            api: ApiConfig {
                base: String::new(),
                products_path: "/ventas/api/productos-activos".to_string(),
                purchase_submit_path: "/compras/api/procesar".to_string(),
                sale_submit_path: "/ventas/api/procesar".to_string(),
            },
            csrf: CsrfSettings::default(),
            display: DisplayConfig {
                currency: "S/".to_string(),
                picker_limit: 20,
            },
            purchase: FlowPolicy::purchase(),
            sale: FlowPolicy::sale(),
        }
    })
}
