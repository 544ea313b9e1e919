pub mod api_client;
pub mod error;
pub mod gateway;
pub mod image_capture;
pub mod menu_loader;

pub use api_client::ApiClient;
pub use error::GatewayError;
pub use gateway::MenuGateway;
pub use image_capture::{CaptureError, CaptureEvent, CaptureSource, CaptureState};
pub use menu_loader::load_menu;
