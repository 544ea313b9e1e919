// ============================================================================
// MENU GATEWAY - CONTRATO CON EL BACKEND DE LA CARTA
// ============================================================================
// Los futuros de gloo-net no son Send: el trait es `?Send` y todo corre en
// el event loop de wasm.
// ============================================================================

use async_trait::async_trait;

use crate::models::{Category, Product};
use super::error::GatewayError;

#[async_trait(?Send)]
pub trait MenuGateway {
    /// Categorías del usuario, sin productos
    async fn list_categories(&self) -> Result<Vec<Category>, GatewayError>;

    async fn list_products(&self, category_id: i64) -> Result<Vec<Product>, GatewayError>;

    async fn create_category(&self, name: &str) -> Result<(), GatewayError>;

    async fn rename_category(&self, category_id: i64, name: &str) -> Result<(), GatewayError>;

    /// El backend borra en cascada los productos de la categoría
    async fn delete_category(&self, category_id: i64) -> Result<(), GatewayError>;

    async fn create_product(&self, category_id: i64, name: &str, price: f64) -> Result<(), GatewayError>;

    async fn update_product(&self, product_id: i64, name: &str, price: f64) -> Result<(), GatewayError>;

    async fn delete_product(&self, product_id: i64) -> Result<(), GatewayError>;
}
