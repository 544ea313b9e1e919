use serde::{Deserialize, Serialize};

/// Producto de la carta (precio en euros)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Precio tal como se muestra en la fila (`1.5€`)
    pub fn price_label(&self) -> String {
        format!("{}€", self.price)
    }
}

/// Interpreta el texto del campo precio. Acepta coma decimal ("1,50").
/// Devuelve `None` si está vacío o no es un número finito.
pub fn parse_price(text: &str) -> Option<f64> {
    let normalized = text.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|price| price.is_finite())
}
