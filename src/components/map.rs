use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::config::MapConfig;
use crate::utils::map_ffi::{add_cafe_marker, init_cafe_map, map_bridge_available};
use crate::utils::{t, MAP_CONTAINER_ID, MAP_INIT_DELAY_MS};

#[derive(Properties, PartialEq)]
pub struct MapContainerProps {
    pub map_config: MapConfig,
    #[prop_or_default]
    pub language: String,
}

/// Mapa con la ubicación del café (widget JS de index.html)
#[function_component(MapContainer)]
pub fn map_container(props: &MapContainerProps) -> Html {
    {
        let map = props.map_config.clone();
        let description = t("nuestra_ubicacion", &props.language);

        use_effect_with(map.clone(), move |_| {
            // Esperar a que el contenedor esté en el DOM
            Timeout::new(MAP_INIT_DELAY_MS, move || {
                if !map_bridge_available() {
                    log::warn!("⚠️ initCafeMap no disponible, mapa omitido");
                    return;
                }
                log::info!("🗺️ Inicializando mapa en {}, {}", map.cafe_lat, map.cafe_lng);
                init_cafe_map(MAP_CONTAINER_ID, map.cafe_lat, map.cafe_lng, map.zoom());
                add_cafe_marker(
                    map.cafe_lat,
                    map.cafe_lng,
                    &map.marker_title,
                    &description,
                    &map.marker_color,
                );
            })
            .forget();

            || ()
        });
    }

    html! {
        <div class="map-section">
            <h2>{t("estamos_aqui", &props.language)}</h2>
            <div id={MAP_CONTAINER_ID} class="map-container"></div>
        </div>
    }
}
