use serde::{Deserialize, Serialize};

/// Contrato del gateway remoto. Conviven dos formas de la API:
/// - `Rest`: endpoints JSON `/categorias/`, `/productos/{id}` con sobre `{data: [...]}`
/// - `Legacy`: scripts `.php` con arrays planos y formulario en el alta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayVariant {
    Rest,
    Legacy,
}

impl GatewayVariant {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "rest" => Some(Self::Rest),
            "legacy" | "php" => Some(Self::Legacy),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Rest => "rest",
            Self::Legacy => "legacy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub user_id: String,
    pub gateway_variant: GatewayVariant,
    pub language: String,
    pub enable_logging: bool,
    pub show_json_debug: bool,
    pub map_config: MapConfig,
    pub image_config: ImageConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://jlorenzo.ddns.net/carta_restaurante".to_string(),
            user_id: "0110".to_string(),
            gateway_variant: GatewayVariant::Rest,
            language: "ES".to_string(),
            enable_logging: true,
            show_json_debug: false,
            map_config: MapConfig::default(),
            image_config: ImageConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub cafe_lat: f64,
    pub cafe_lng: f64,
    /// Ancho visible en grados (equivalente a `latitudeDelta`)
    pub cafe_delta: f64,
    pub marker_title: String,
    pub marker_color: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            cafe_lat: 28.0916,
            cafe_lng: -15.4190,
            cafe_delta: 0.005,
            marker_title: "Camper Café".to_string(),
            marker_color: "#4a1f1a".to_string(),
        }
    }
}

impl MapConfig {
    /// Nivel de zoom web-mercator que muestra `cafe_delta` grados
    pub fn zoom(&self) -> f64 {
        if self.cafe_delta <= 0.0 || !self.cafe_delta.is_finite() {
            return 16.0;
        }
        (360.0 / self.cafe_delta).log2().clamp(1.0, 20.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Calidad JPEG (0.0 - 1.0) al recomprimir la foto
    pub quality: f64,
    pub aspect_width: u32,
    pub aspect_height: u32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            quality: 0.5,
            aspect_width: 4,
            aspect_height: 3,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "API_BASE_URL" => option_env!("API_BASE_URL"),
            "USER_ID" => option_env!("USER_ID"),
            "GATEWAY_VARIANT" => option_env!("GATEWAY_VARIANT"),
            "LANGUAGE" => option_env!("LANGUAGE"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "SHOW_JSON_DEBUG" => option_env!("SHOW_JSON_DEBUG"),
            "CAFE_LAT" => option_env!("CAFE_LAT"),
            "CAFE_LNG" => option_env!("CAFE_LNG"),
            "CAFE_DELTA" => option_env!("CAFE_DELTA"),
            "IMAGE_QUALITY" => option_env!("IMAGE_QUALITY"),
            _ => None,
        })
    }

    /// Construye la configuración a partir de una función de búsqueda de claves.
    /// Los valores ausentes o mal formados caen al valor por defecto.
    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let defaults = Self::default();
        let parse_or = |key: &str, default: f64| {
            lookup(key)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .unwrap_or(default)
        };
        let flag_or = |key: &str, default: bool| {
            lookup(key)
                .and_then(|v| v.trim().parse::<bool>().ok())
                .unwrap_or(default)
        };

        Self {
            api_base_url: lookup("API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            user_id: lookup("USER_ID")
                .map(|id| id.trim().to_string())
                .unwrap_or(defaults.user_id),
            gateway_variant: lookup("GATEWAY_VARIANT")
                .and_then(GatewayVariant::from_name)
                .unwrap_or(defaults.gateway_variant),
            language: lookup("LANGUAGE")
                .map(|lang| lang.trim().to_uppercase())
                .unwrap_or(defaults.language),
            enable_logging: flag_or("ENABLE_LOGGING", defaults.enable_logging),
            show_json_debug: flag_or("SHOW_JSON_DEBUG", defaults.show_json_debug),
            map_config: MapConfig {
                cafe_lat: parse_or("CAFE_LAT", defaults.map_config.cafe_lat),
                cafe_lng: parse_or("CAFE_LNG", defaults.map_config.cafe_lng),
                cafe_delta: parse_or("CAFE_DELTA", defaults.map_config.cafe_delta),
                ..defaults.map_config
            },
            image_config: ImageConfig {
                quality: parse_or("IMAGE_QUALITY", defaults.image_config.quality).clamp(0.05, 1.0),
                ..defaults.image_config
            },
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática (solo se lee al arrancar; el resto se inyecta)
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
