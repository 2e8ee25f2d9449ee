use crate::domain::a001_product::aggregate::ProductId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tipos de comprobante de compra ofrecidos en el formulario
pub const PURCHASE_DOCUMENT_TYPES: &[&str] = &["FACTURA", "BOLETA", "GUIA"];

/// Línea del documento de compra (`ItemCompraDTO`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseLine {
    #[serde(rename = "productoId")]
    pub product_id: ProductId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "cantidad")]
    pub quantity: f64,

    /// Costo unitario ingresado por el usuario
    #[serde(rename = "costoUnitario")]
    pub unit_cost: f64,
}

/// Documento de compra enviado a `POST /compras/api/procesar` (`CompraDTO`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseDocument {
    #[serde(rename = "tipoComprobante")]
    pub document_type: String,

    #[serde(rename = "serie")]
    pub series: String,

    #[serde(rename = "numero")]
    pub number: String,

    /// Fecha de emisión (YYYY-MM-DD)
    #[serde(rename = "fechaEmision")]
    pub issue_date: NaiveDate,

    /// RUC del proveedor
    #[serde(rename = "proveedorRuc")]
    pub supplier_tax_id: String,

    #[serde(rename = "proveedorRazon")]
    pub supplier_name: String,

    pub items: Vec<PurchaseLine>,
}

impl PurchaseDocument {
    pub fn total(&self) -> f64 {
        self.items.iter().map(|l| l.quantity * l.unit_cost).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shape() {
        let doc = PurchaseDocument {
            document_type: "FACTURA".into(),
            series: "F001".into(),
            number: "123".into(),
            issue_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            supplier_tax_id: "20123456789".into(),
            supplier_name: "Distribuidora SAC".into(),
            items: vec![PurchaseLine {
                product_id: ProductId(1),
                name: "Agua".into(),
                quantity: 12.0,
                unit_cost: 1.5,
            }],
        };

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            value,
            json!({
                "tipoComprobante": "FACTURA",
                "serie": "F001",
                "numero": "123",
                "fechaEmision": "2024-03-15",
                "proveedorRuc": "20123456789",
                "proveedorRazon": "Distribuidora SAC",
                "items": [
                    {"productoId": 1, "nombre": "Agua", "cantidad": 12.0, "costoUnitario": 1.5}
                ]
            })
        );
        assert_eq!(doc.total(), 18.0);
    }
}
