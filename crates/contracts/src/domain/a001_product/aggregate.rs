use serde::{Deserialize, Serialize};
use std::fmt;

/// Идентификатор товара (Long на стороне сервера)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(ProductId::new)
            .map_err(|e| format!("Invalid product id '{}': {}", s, e))
    }
}

/// Producto activo tal como lo entrega `GET /ventas/api/productos-activos`.
///
/// Solo lectura en el cliente: se carga una vez por página y nunca se modifica.
/// Los campos que el servidor envía además de estos (stock, ubicación...) se ignoran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "categoria", default)]
    pub category: Option<String>,

    /// Precio de venta
    #[serde(rename = "precioVenta", default)]
    pub sale_price: Option<f64>,

    /// Último costo de compra; `None` para productos sin historial
    #[serde(rename = "precioCompra", default)]
    pub purchase_price: Option<f64>,

    #[serde(rename = "codigoBarra", default)]
    pub barcode: Option<String>,

    #[serde(rename = "codigoInterno", default)]
    pub internal_code: Option<String>,
}

impl Product {
    /// Category label, or `fallback` when the product has none (or a blank one).
    pub fn category_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.category.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => fallback,
        }
    }

    /// True when `code` equals the barcode or the internal code exactly.
    pub fn has_code(&self, code: &str) -> bool {
        !code.is_empty()
            && (self.barcode.as_deref() == Some(code) || self.internal_code.as_deref() == Some(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_server_payload() {
        let json = r#"[
            {"id": 1, "nombre": "Agua", "precioVenta": 2.5, "stockActual": 40},
            {"id": 2, "nombre": "Cuaderno", "categoria": "UTILES", "precioVenta": 6.0,
             "precioCompra": 4.2, "codigoBarra": "775100", "codigoInterno": "CU-01"}
        ]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, ProductId(1));
        assert_eq!(products[0].category, None);
        assert_eq!(products[0].purchase_price, None);
        assert_eq!(products[1].barcode.as_deref(), Some("775100"));
        assert_eq!(products[1].purchase_price, Some(4.2));
    }

    #[test]
    fn test_null_fields_are_none() {
        let json = r#"{"id": 7, "nombre": "Lapiz", "categoria": null, "precioVenta": null}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.sale_price, None);
        assert_eq!(p.category_or("GRAL"), "GRAL");
    }

    #[test]
    fn test_has_code() {
        let p = Product {
            id: ProductId(3),
            name: "Borrador".into(),
            category: Some("UTILES".into()),
            sale_price: Some(1.0),
            purchase_price: None,
            barcode: Some("123".into()),
            internal_code: Some("B-3".into()),
        };
        assert!(p.has_code("123"));
        assert!(p.has_code("B-3"));
        assert!(!p.has_code("12"));
        assert!(!p.has_code(""));
        assert_eq!(p.category_or("GENERAL"), "UTILES");
    }

    #[test]
    fn test_product_id_from_str() {
        assert_eq!(" 42 ".parse::<ProductId>(), Ok(ProductId(42)));
        assert!("abc".parse::<ProductId>().is_err());
    }
}
