// ============================================================================
// WIRE - DTOs DEL GATEWAY + VALIDACIÓN
// ============================================================================
// El backend devuelve `id`/`precio` unas veces como número y otras como
// string. Nada se da por presente: cada DTO se convierte explícitamente al
// modelo de dominio o falla con un `ParseError` estructurado.
// ============================================================================

use serde::de::{DeserializeOwned, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use thiserror::Error;

use crate::config::GatewayVariant;
use super::category::Category;
use super::product::Product;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("JSON inválido: {0}")]
    InvalidJson(String),
    #[error("Falta el campo `{field}` en {entity}")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },
    #[error("Valor numérico inválido en `{field}`: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Categoría tal como llega del gateway
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDto {
    #[serde(default, deserialize_with = "deserialize_lenient_scalar")]
    pub id: Option<String>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub icono: Option<String>,
}

/// Producto tal como llega del gateway
#[derive(Debug, Clone, Deserialize)]
pub struct ProductDto {
    #[serde(default, deserialize_with = "deserialize_lenient_scalar")]
    pub id: Option<String>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_scalar")]
    pub precio: Option<String>,
}

/// Sobre `{data: [...]}` del contrato REST
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    #[serde(default = "Option::default")]
    data: Option<Vec<T>>,
}

impl CategoryDto {
    pub fn into_category(self) -> Result<Category, ParseError> {
        let id = parse_id("categoría", self.id)?;
        let name = self.nombre.ok_or(ParseError::MissingField {
            entity: "categoría",
            field: "nombre",
        })?;
        let mut category = Category::new(id, name);
        category.icon = self.icono.filter(|icon| !icon.trim().is_empty());
        Ok(category)
    }
}

impl ProductDto {
    pub fn into_product(self) -> Result<Product, ParseError> {
        let id = parse_id("producto", self.id)?;
        let name = self.nombre.ok_or(ParseError::MissingField {
            entity: "producto",
            field: "nombre",
        })?;
        let raw_price = self.precio.ok_or(ParseError::MissingField {
            entity: "producto",
            field: "precio",
        })?;
        let price = raw_price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| ParseError::InvalidNumber {
                field: "precio",
                value: raw_price.clone(),
            })?;
        Ok(Product::new(id, name, price))
    }
}

fn parse_id(entity: &'static str, raw: Option<String>) -> Result<i64, ParseError> {
    let raw = raw.ok_or(ParseError::MissingField { entity, field: "id" })?;
    raw.trim().parse::<i64>().map_err(|_| ParseError::InvalidNumber {
        field: "id",
        value: raw.clone(),
    })
}

/// Decodifica una colección según el contrato: sobre `{data}` (REST) o array
/// plano (legacy). `null` o `data` ausente cuentan como colección vacía.
fn decode_list<T: DeserializeOwned>(body: &str, variant: GatewayVariant) -> Result<Vec<T>, ParseError> {
    let body = body.trim();
    if body.is_empty() {
        return Ok(Vec::new());
    }
    let decoded = match variant {
        GatewayVariant::Rest => serde_json::from_str::<Option<DataEnvelope<T>>>(body)
            .map(|envelope| envelope.and_then(|e| e.data)),
        GatewayVariant::Legacy => serde_json::from_str::<Option<Vec<T>>>(body),
    };
    decoded
        .map(Option::unwrap_or_default)
        .map_err(|e| ParseError::InvalidJson(e.to_string()))
}

/// Respuesta de la colección de categorías → categorías sin productos
pub fn parse_categories(body: &str, variant: GatewayVariant) -> Result<Vec<Category>, ParseError> {
    decode_list::<CategoryDto>(body, variant)?
        .into_iter()
        .map(CategoryDto::into_category)
        .collect()
}

/// Respuesta de la colección de productos de una categoría
pub fn parse_products(body: &str, variant: GatewayVariant) -> Result<Vec<Product>, ParseError> {
    decode_list::<ProductDto>(body, variant)?
        .into_iter()
        .map(ProductDto::into_product)
        .collect()
}

/// Deserializador tolerante: número, string o null → `Option<String>`
fn deserialize_lenient_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientScalarVisitor;

    impl<'de> Visitor<'de> for LenientScalarVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("number or string or null")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
        where
            D2: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(LenientScalarVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_envelope_is_unwrapped() {
        let body = r#"{"data":[{"id":1,"nombre":"Bebidas"},{"id":"2","nombre":"Postres"}]}"#;
        let categories = parse_categories(body, GatewayVariant::Rest).unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0], Category::new(1, "Bebidas"));
        assert_eq!(categories[1].id, 2);
        assert!(categories.iter().all(|c| c.products.is_empty() && c.image.is_none()));
    }

    #[test]
    fn missing_or_null_data_is_empty() {
        assert!(parse_categories(r#"{"data":null}"#, GatewayVariant::Rest).unwrap().is_empty());
        assert!(parse_categories(r#"{}"#, GatewayVariant::Rest).unwrap().is_empty());
        assert!(parse_categories("null", GatewayVariant::Rest).unwrap().is_empty());
        assert!(parse_categories("", GatewayVariant::Legacy).unwrap().is_empty());
        assert!(parse_categories("null", GatewayVariant::Legacy).unwrap().is_empty());
    }

    #[test]
    fn legacy_array_keeps_icon() {
        let body = r#"[{"id":"7","nombre":"Tostadas","icono":"https://x/t.png"},{"id":8,"nombre":"Zumos","icono":""}]"#;
        let categories = parse_categories(body, GatewayVariant::Legacy).unwrap();
        assert_eq!(categories[0].icon.as_deref(), Some("https://x/t.png"));
        assert_eq!(categories[1].icon, None);
    }

    #[test]
    fn string_price_becomes_float() {
        let body = r#"{"data":[{"id":10,"nombre":"Café","precio":"1.50"},{"id":11,"nombre":"Té","precio":2}]}"#;
        let products = parse_products(body, GatewayVariant::Rest).unwrap();
        assert_eq!(products, vec![Product::new(10, "Café", 1.5), Product::new(11, "Té", 2.0)]);
    }

    #[test]
    fn missing_name_is_a_structured_error() {
        let err = parse_categories(r#"{"data":[{"id":1}]}"#, GatewayVariant::Rest).unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingField {
                entity: "categoría",
                field: "nombre"
            }
        );
    }

    #[test]
    fn bad_price_is_rejected() {
        let err = parse_products(r#"[{"id":1,"nombre":"Café","precio":"uno"}]"#, GatewayVariant::Legacy)
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                field: "precio",
                value: "uno".to_string()
            }
        );
    }

    #[test]
    fn fractional_id_is_rejected() {
        let err = parse_products(r#"[{"id":1.5,"nombre":"Café","precio":1}]"#, GatewayVariant::Legacy)
            .unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { field: "id", .. }));
    }

    #[test]
    fn wrong_shape_is_invalid_json() {
        // Un array plano no es un sobre REST válido
        let err = parse_categories(r#"[{"id":1,"nombre":"Bebidas"}]"#, GatewayVariant::Rest).unwrap_err();
        assert!(matches!(err, ParseError::InvalidJson(_)));
    }
}
