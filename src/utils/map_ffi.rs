// ============================================================================
// MAP FFI - Foreign Function Interface para el mapa (index.html)
// ============================================================================
// Solo wrappers para funciones JS - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = initCafeMap)]
    pub fn init_cafe_map(container_id: &str, lat: f64, lng: f64, zoom: f64);

    #[wasm_bindgen(js_name = addCafeMarker)]
    pub fn add_cafe_marker(lat: f64, lng: f64, title: &str, description: &str, color: &str);
}

/// `true` si index.html cargó el puente del mapa
pub fn map_bridge_available() -> bool {
    web_sys::window()
        .map(|win| {
            js_sys::Reflect::get(&win, &JsValue::from_str("initCafeMap"))
                .map(|f| f.is_function())
                .unwrap_or(false)
        })
        .unwrap_or(false)
}
