// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP.
// La URL base, el usuario y el contrato llegan inyectados desde AppConfig.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::config::{AppConfig, GatewayVariant};
use crate::models::{parse_categories, parse_products, Category, Product};
use super::error::GatewayError;
use super::gateway::MenuGateway;

/// Orden con el que se dan de alta los productos nuevos
const DEFAULT_PRODUCT_ORDER: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Form(Vec<(&'static str, String)>),
}

/// Petición HTTP ya resuelta para un contrato concreto
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub url: String,
    pub query: Vec<(&'static str, String)>,
    pub body: RequestBody,
}

/// Operaciones del gateway, independientes del contrato
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuRequest<'a> {
    ListCategories,
    ListProducts { category_id: i64 },
    CreateCategory { name: &'a str },
    RenameCategory { category_id: i64, name: &'a str },
    DeleteCategory { category_id: i64 },
    CreateProduct { category_id: i64, name: &'a str, price: f64 },
    UpdateProduct { product_id: i64, name: &'a str, price: f64 },
    DeleteProduct { product_id: i64 },
}

impl MenuRequest<'_> {
    fn operation(&self) -> &'static str {
        match self {
            Self::ListCategories => "list_categories",
            Self::ListProducts { .. } => "list_products",
            Self::CreateCategory { .. } => "create_category",
            Self::RenameCategory { .. } => "rename_category",
            Self::DeleteCategory { .. } => "delete_category",
            Self::CreateProduct { .. } => "create_product",
            Self::UpdateProduct { .. } => "update_product",
            Self::DeleteProduct { .. } => "delete_product",
        }
    }
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    user_id: String,
    variant: GatewayVariant,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, user_id: impl Into<String>, variant: GatewayVariant) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            user_id: user_id.into(),
            variant,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.api_base_url, &config.user_id, config.gateway_variant)
    }

    pub fn variant(&self) -> GatewayVariant {
        self.variant
    }

    /// Traduce una operación al endpoint del contrato configurado
    pub fn endpoint(&self, request: MenuRequest<'_>) -> Result<Endpoint, GatewayError> {
        match self.variant {
            GatewayVariant::Rest => self.rest_endpoint(request),
            GatewayVariant::Legacy => self.legacy_endpoint(request),
        }
    }

    fn rest_endpoint(&self, request: MenuRequest<'_>) -> Result<Endpoint, GatewayError> {
        let base = &self.base_url;
        let user = || vec![("usuario_id", self.user_id.clone())];
        let endpoint = match request {
            MenuRequest::ListCategories => Endpoint {
                method: HttpMethod::Get,
                url: format!("{}/categorias/", base),
                query: user(),
                body: RequestBody::Empty,
            },
            MenuRequest::ListProducts { category_id } => Endpoint {
                method: HttpMethod::Get,
                url: format!("{}/productos/{}", base, category_id),
                query: user(),
                body: RequestBody::Empty,
            },
            MenuRequest::CreateCategory { name } => Endpoint {
                method: HttpMethod::Post,
                url: format!("{}/categorias/", base),
                query: Vec::new(),
                body: self.json(&CategoryWriteRequest {
                    usuario_id: &self.user_id,
                    nombre: name.trim(),
                })?,
            },
            MenuRequest::RenameCategory { category_id, name } => Endpoint {
                method: HttpMethod::Put,
                url: format!("{}/categorias/{}", base, category_id),
                query: Vec::new(),
                body: self.json(&CategoryWriteRequest {
                    usuario_id: &self.user_id,
                    nombre: name.trim(),
                })?,
            },
            MenuRequest::DeleteCategory { category_id } => Endpoint {
                method: HttpMethod::Delete,
                url: format!("{}/categorias/{}", base, category_id),
                query: Vec::new(),
                body: self.json(&OwnerRequest { usuario_id: &self.user_id })?,
            },
            MenuRequest::CreateProduct { category_id, name, price } => Endpoint {
                method: HttpMethod::Post,
                url: format!("{}/productos/{}", base, category_id),
                query: Vec::new(),
                body: self.json(&ProductCreateRequest {
                    usuario_id: &self.user_id,
                    nombre: name.trim(),
                    precio: price,
                    orden: DEFAULT_PRODUCT_ORDER,
                })?,
            },
            MenuRequest::UpdateProduct { product_id, name, price } => Endpoint {
                method: HttpMethod::Put,
                url: format!("{}/productos/{}", base, product_id),
                query: Vec::new(),
                body: self.json(&ProductUpdateRequest {
                    usuario_id: &self.user_id,
                    nombre: name.trim(),
                    precio: price,
                })?,
            },
            MenuRequest::DeleteProduct { product_id } => Endpoint {
                method: HttpMethod::Delete,
                url: format!("{}/productos/{}", base, product_id),
                query: Vec::new(),
                body: self.json(&OwnerRequest { usuario_id: &self.user_id })?,
            },
        };
        Ok(endpoint)
    }

    fn legacy_endpoint(&self, request: MenuRequest<'_>) -> Result<Endpoint, GatewayError> {
        let base = &self.base_url;
        let endpoint = match request {
            MenuRequest::ListCategories => Endpoint {
                method: HttpMethod::Get,
                url: format!("{}/categorias.php", base),
                query: vec![("usuario_id", self.user_id.clone())],
                body: RequestBody::Empty,
            },
            MenuRequest::ListProducts { category_id } => Endpoint {
                method: HttpMethod::Get,
                url: format!("{}/productos.php", base),
                query: vec![
                    ("categoria_id", category_id.to_string()),
                    ("usuario_id", self.user_id.clone()),
                ],
                body: RequestBody::Empty,
            },
            MenuRequest::CreateCategory { name } => Endpoint {
                method: HttpMethod::Post,
                url: format!("{}/crear_categoria.php", base),
                query: Vec::new(),
                body: RequestBody::Form(vec![
                    ("nombre", name.to_string()),
                    ("usuario_id", self.user_id.clone()),
                ]),
            },
            MenuRequest::DeleteCategory { category_id } => Endpoint {
                method: HttpMethod::Delete,
                url: format!("{}/eliminar_categoria.php", base),
                query: vec![("id", category_id.to_string())],
                body: RequestBody::Empty,
            },
            other => {
                return Err(GatewayError::Unsupported {
                    variant: self.variant.name(),
                    operation: other.operation(),
                })
            }
        };
        Ok(endpoint)
    }

    fn json<T: Serialize>(&self, body: &T) -> Result<RequestBody, GatewayError> {
        serde_json::to_value(body)
            .map(RequestBody::Json)
            .map_err(|e| GatewayError::Serialization(e.to_string()))
    }

    /// Envía la petición y devuelve la respuesta si el status es 2xx
    async fn send(&self, endpoint: Endpoint) -> Result<Response, GatewayError> {
        log::debug!("🌐 {:?} {}", endpoint.method, endpoint.url);

        let builder: RequestBuilder = match endpoint.method {
            HttpMethod::Get => Request::get(&endpoint.url),
            HttpMethod::Post => Request::post(&endpoint.url),
            HttpMethod::Put => Request::put(&endpoint.url),
            HttpMethod::Delete => Request::delete(&endpoint.url),
        };
        let builder = if endpoint.query.is_empty() {
            builder
        } else {
            builder.query(endpoint.query.iter().map(|(k, v)| (*k, v.as_str())))
        };

        let response = match endpoint.body {
            RequestBody::Empty => builder.send().await?,
            RequestBody::Json(value) => builder.json(&value)?.send().await?,
            RequestBody::Form(fields) => {
                let form = build_form_data(&fields)
                    .map_err(|e| GatewayError::Serialization(format!("{:?}", e)))?;
                builder.body(form)?.send().await?
            }
        };

        if !response.ok() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| response.status_text());
            return Err(GatewayError::Http { status, message });
        }
        Ok(response)
    }

    async fn send_and_read(&self, request: MenuRequest<'_>) -> Result<String, GatewayError> {
        let endpoint = self.endpoint(request)?;
        let response = self.send(endpoint).await?;
        Ok(response.text().await?)
    }

    async fn send_and_discard(&self, request: MenuRequest<'_>) -> Result<(), GatewayError> {
        let endpoint = self.endpoint(request)?;
        self.send(endpoint).await?;
        Ok(())
    }
}

fn build_form_data(fields: &[(&'static str, String)]) -> Result<web_sys::FormData, JsValue> {
    let form = web_sys::FormData::new()?;
    for (key, value) in fields {
        form.append_with_str(key, value)?;
    }
    Ok(form)
}

#[async_trait(?Send)]
impl MenuGateway for ApiClient {
    async fn list_categories(&self) -> Result<Vec<Category>, GatewayError> {
        let body = self.send_and_read(MenuRequest::ListCategories).await?;
        let categories = parse_categories(&body, self.variant)?;
        log::info!("📂 Categorías obtenidas: {}", categories.len());
        Ok(categories)
    }

    async fn list_products(&self, category_id: i64) -> Result<Vec<Product>, GatewayError> {
        let body = self
            .send_and_read(MenuRequest::ListProducts { category_id })
            .await?;
        Ok(parse_products(&body, self.variant)?)
    }

    async fn create_category(&self, name: &str) -> Result<(), GatewayError> {
        log::info!("➕ Creando categoría: {}", name);
        self.send_and_discard(MenuRequest::CreateCategory { name }).await
    }

    async fn rename_category(&self, category_id: i64, name: &str) -> Result<(), GatewayError> {
        log::info!("📝 Renombrando categoría {} → {}", category_id, name);
        self.send_and_discard(MenuRequest::RenameCategory { category_id, name })
            .await
    }

    async fn delete_category(&self, category_id: i64) -> Result<(), GatewayError> {
        log::info!("🗑️ Eliminando categoría {}", category_id);
        self.send_and_discard(MenuRequest::DeleteCategory { category_id })
            .await
    }

    async fn create_product(&self, category_id: i64, name: &str, price: f64) -> Result<(), GatewayError> {
        log::info!("➕ Creando producto {} ({}€) en categoría {}", name, price, category_id);
        self.send_and_discard(MenuRequest::CreateProduct { category_id, name, price })
            .await
    }

    async fn update_product(&self, product_id: i64, name: &str, price: f64) -> Result<(), GatewayError> {
        log::info!("📝 Actualizando producto {} → {} ({}€)", product_id, name, price);
        self.send_and_discard(MenuRequest::UpdateProduct { product_id, name, price })
            .await
    }

    async fn delete_product(&self, product_id: i64) -> Result<(), GatewayError> {
        log::info!("🗑️ Eliminando producto {}", product_id);
        self.send_and_discard(MenuRequest::DeleteProduct { product_id })
            .await
    }
}

#[derive(serde::Serialize)]
struct CategoryWriteRequest<'a> {
    usuario_id: &'a str,
    nombre: &'a str,
}

#[derive(serde::Serialize)]
struct OwnerRequest<'a> {
    usuario_id: &'a str,
}

#[derive(serde::Serialize)]
struct ProductCreateRequest<'a> {
    usuario_id: &'a str,
    nombre: &'a str,
    precio: f64,
    orden: u32,
}

#[derive(serde::Serialize)]
struct ProductUpdateRequest<'a> {
    usuario_id: &'a str,
    nombre: &'a str,
    precio: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rest() -> ApiClient {
        ApiClient::new("https://api.test/carta/", "0110", GatewayVariant::Rest)
    }

    fn legacy() -> ApiClient {
        ApiClient::new("https://api.test/carta", "0110", GatewayVariant::Legacy)
    }

    #[test]
    fn rest_listing_uses_user_query() {
        let endpoint = rest().endpoint(MenuRequest::ListProducts { category_id: 3 }).unwrap();
        assert_eq!(endpoint.method, HttpMethod::Get);
        assert_eq!(endpoint.url, "https://api.test/carta/productos/3");
        assert_eq!(endpoint.query, vec![("usuario_id", "0110".to_string())]);
        assert_eq!(endpoint.body, RequestBody::Empty);
    }

    #[test]
    fn rest_product_creation_body() {
        let endpoint = rest()
            .endpoint(MenuRequest::CreateProduct {
                category_id: 1,
                name: "  Café ",
                price: 1.5,
            })
            .unwrap();
        assert_eq!(endpoint.method, HttpMethod::Post);
        assert_eq!(endpoint.url, "https://api.test/carta/productos/1");
        assert_eq!(
            endpoint.body,
            RequestBody::Json(json!({"usuario_id": "0110", "nombre": "Café", "precio": 1.5, "orden": 1}))
        );
    }

    #[test]
    fn rest_deletes_send_owner() {
        let endpoint = rest().endpoint(MenuRequest::DeleteCategory { category_id: 9 }).unwrap();
        assert_eq!(endpoint.method, HttpMethod::Delete);
        assert_eq!(endpoint.url, "https://api.test/carta/categorias/9");
        assert_eq!(endpoint.body, RequestBody::Json(json!({"usuario_id": "0110"})));
    }

    #[test]
    fn rest_rename_is_put() {
        let endpoint = rest()
            .endpoint(MenuRequest::RenameCategory { category_id: 2, name: "Postres " })
            .unwrap();
        assert_eq!(endpoint.method, HttpMethod::Put);
        assert_eq!(endpoint.body, RequestBody::Json(json!({"usuario_id": "0110", "nombre": "Postres"})));
    }

    #[test]
    fn legacy_creation_is_form_encoded() {
        let endpoint = legacy().endpoint(MenuRequest::CreateCategory { name: "Bebidas" }).unwrap();
        assert_eq!(endpoint.url, "https://api.test/carta/crear_categoria.php");
        assert_eq!(
            endpoint.body,
            RequestBody::Form(vec![("nombre", "Bebidas".to_string()), ("usuario_id", "0110".to_string())])
        );
    }

    #[test]
    fn legacy_products_query() {
        let endpoint = legacy().endpoint(MenuRequest::ListProducts { category_id: 4 }).unwrap();
        assert_eq!(endpoint.url, "https://api.test/carta/productos.php");
        assert_eq!(
            endpoint.query,
            vec![("categoria_id", "4".to_string()), ("usuario_id", "0110".to_string())]
        );
    }

    #[test]
    fn legacy_lacks_product_mutations() {
        let err = legacy()
            .endpoint(MenuRequest::UpdateProduct { product_id: 1, name: "x", price: 1.0 })
            .unwrap_err();
        assert_eq!(
            err,
            GatewayError::Unsupported {
                variant: "legacy",
                operation: "update_product"
            }
        );
    }

    #[test]
    fn from_config_threads_settings() {
        let config = AppConfig {
            api_base_url: "http://localhost:9000".to_string(),
            user_id: "7".to_string(),
            gateway_variant: GatewayVariant::Legacy,
            ..AppConfig::default()
        };
        let client = ApiClient::from_config(&config);
        assert_eq!(client.variant(), GatewayVariant::Legacy);
        let endpoint = client.endpoint(MenuRequest::ListCategories).unwrap();
        assert_eq!(endpoint.url, "http://localhost:9000/categorias.php");
        assert_eq!(endpoint.query, vec![("usuario_id", "7".to_string())]);
    }
}
