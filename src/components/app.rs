use std::rc::Rc;
use yew::prelude::*;

use super::MenuScreen;
use crate::config::{AppConfig, CONFIG};

/// Raíz: publica la configuración por contexto
#[function_component(App)]
pub fn app() -> Html {
    let config: Rc<AppConfig> = use_memo((), |_| CONFIG.clone());

    log::debug!(
        "⚙️ Gateway {} en {} (usuario {})",
        config.gateway_variant.name(),
        config.api_base_url,
        config.user_id
    );

    html! {
        <ContextProvider<Rc<AppConfig>> context={config}>
            <MenuScreen />
        </ContextProvider<Rc<AppConfig>>>
    }
}
