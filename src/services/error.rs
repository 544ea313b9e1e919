use thiserror::Error;

use crate::models::ParseError;

/// Fallos al hablar con el gateway de la carta
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("El contrato `{variant}` no soporta `{operation}`")]
    Unsupported {
        variant: &'static str,
        operation: &'static str,
    },
}

impl From<gloo_net::Error> for GatewayError {
    fn from(error: gloo_net::Error) -> Self {
        match error {
            gloo_net::Error::SerdeError(e) => Self::Serialization(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}
