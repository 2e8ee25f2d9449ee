use crate::domain::a001_product::aggregate::ProductId;
use serde::{Deserialize, Serialize};

/// Documento del cliente cuando no se ingresa ninguno
pub const DEFAULT_CLIENT_DOC: &str = "00000000";
/// Nombre del cliente cuando no se ingresa ninguno
pub const DEFAULT_CLIENT_NAME: &str = "CLIENTE VARIOS";
/// Dirección del cliente cuando no se ingresa ninguna
pub const DEFAULT_CLIENT_ADDRESS: &str = "-";

pub const DEFAULT_PAYMENT_TERMS: &str = "CONTADO";
pub const DEFAULT_PAYMENT_METHOD: &str = "EFECTIVO";

/// Tipos de comprobante de venta aceptados por el servidor
pub const SALE_DOCUMENT_TYPES: &[&str] = &["BOLETA", "FACTURA", "NOTA_VENTA"];
pub const PAYMENT_TERMS: &[&str] = &["CONTADO", "CREDITO"];
pub const PAYMENT_METHODS: &[&str] = &["EFECTIVO", "YAPE", "PLIN", "TARJETA", "TRANSFERENCIA", "MIXTO"];

/// Tipo de documento de identidad del cliente: "6" (RUC) para facturas, "1" (DNI) en otro caso
pub fn client_doc_type_for(document_type: &str) -> &'static str {
    if document_type == "FACTURA" {
        "6"
    } else {
        "1"
    }
}

/// Línea del documento de venta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleLine {
    #[serde(rename = "productoId")]
    pub product_id: ProductId,

    #[serde(rename = "nombre")]
    pub name: String,

    /// Precio unitario de venta
    #[serde(rename = "precio")]
    pub unit_price: f64,

    #[serde(rename = "cantidad")]
    pub quantity: f64,
}

/// Documento de venta enviado a `POST /ventas/api/procesar` (`VentaDTO`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleDocument {
    #[serde(rename = "tipoComprobante")]
    pub document_type: String,

    #[serde(rename = "clienteDoc")]
    pub client_doc: String,

    #[serde(rename = "clienteNombre")]
    pub client_name: String,

    #[serde(rename = "clienteDireccion")]
    pub client_address: String,

    #[serde(rename = "clienteTipoDoc")]
    pub client_doc_type: String,

    /// CONTADO | CREDITO
    #[serde(rename = "formaPago")]
    pub payment_terms: String,

    /// EFECTIVO | YAPE | PLIN | TARJETA | TRANSFERENCIA | MIXTO
    #[serde(rename = "metodoPago")]
    pub payment_method: String,

    pub items: Vec<SaleLine>,
}

impl SaleDocument {
    pub fn total(&self) -> f64 {
        self.items.iter().map(|l| l.quantity * l.unit_price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_doc_type() {
        assert_eq!(client_doc_type_for("FACTURA"), "6");
        assert_eq!(client_doc_type_for("BOLETA"), "1");
        assert_eq!(client_doc_type_for("NOTA_VENTA"), "1");
        assert_eq!(client_doc_type_for(""), "1");
    }

    #[test]
    fn test_wire_shape() {
        let doc = SaleDocument {
            document_type: "BOLETA".into(),
            client_doc: DEFAULT_CLIENT_DOC.into(),
            client_name: DEFAULT_CLIENT_NAME.into(),
            client_address: DEFAULT_CLIENT_ADDRESS.into(),
            client_doc_type: client_doc_type_for("BOLETA").into(),
            payment_terms: DEFAULT_PAYMENT_TERMS.into(),
            payment_method: DEFAULT_PAYMENT_METHOD.into(),
            items: vec![SaleLine {
                product_id: ProductId(1),
                name: "Agua".into(),
                unit_price: 2.5,
                quantity: 2.0,
            }],
        };

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["clienteDoc"], json!("00000000"));
        assert_eq!(value["clienteNombre"], json!("CLIENTE VARIOS"));
        assert_eq!(value["clienteTipoDoc"], json!("1"));
        assert_eq!(
            value["items"],
            json!([{"productoId": 1, "nombre": "Agua", "precio": 2.5, "cantidad": 2.0}])
        );
        assert_eq!(doc.total(), 5.0);
    }
}
