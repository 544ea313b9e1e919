// ============================================================================
// USE IMAGE CAPTURE HOOK - Cámara / galería → data URI JPEG
// ============================================================================
// Recorre la máquina de estados de services::image_capture con las llamadas
// reales del navegador (utils::media_ffi). Un intento a la vez.
// ============================================================================

use std::rc::Rc;
use yew::prelude::*;

use crate::config::AppConfig;
use crate::services::{CaptureError, CaptureEvent, CaptureSource, CaptureState};
use crate::utils::media_ffi::{capture_image, request_permission};
use crate::utils::{t, BrowserPrompt, Prompt};

#[derive(Clone)]
pub struct UseImageCaptureHandle {
    pub state: UseStateHandle<CaptureState>,
    pub start: Callback<CaptureSource>,
}

/// Un intento completo. Devuelve el data URI si el usuario eligió una foto.
async fn run_attempt(
    source: CaptureSource,
    config: &AppConfig,
    state: &UseStateHandle<CaptureState>,
) -> Result<Option<String>, CaptureError> {
    let mut machine = CaptureState::Idle.next(CaptureEvent::Start(source))?;
    state.set(machine.clone());

    if !request_permission(source).await {
        machine = machine.next(CaptureEvent::PermissionDenied)?;
        state.set(machine);
        let lang = &config.language;
        BrowserPrompt.alert(&t("permiso_denegado", lang), &t("permiso_camara", lang));
        return Ok(None);
    }

    machine = machine.next(CaptureEvent::PermissionGranted)?;
    state.set(machine.clone());

    match capture_image(source, &config.image_config).await? {
        Some(data_uri) => {
            machine = machine.next(CaptureEvent::ImageReady(data_uri.clone()))?;
            state.set(machine);
            Ok(Some(data_uri))
        }
        None => {
            state.set(machine.next(CaptureEvent::Cancel)?);
            Ok(None)
        }
    }
}

#[hook]
pub fn use_image_capture(config: Rc<AppConfig>, on_captured: Callback<String>) -> UseImageCaptureHandle {
    let state = use_state(CaptureState::default);

    let start = {
        let state = state.clone();
        Callback::from(move |source: CaptureSource| {
            if state.is_busy() {
                log::warn!("⚠️ Ya hay una captura en curso");
                return;
            }
            let state = state.clone();
            let config = config.clone();
            let on_captured = on_captured.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let lang = config.language.clone();
                match run_attempt(source, &config, &state).await {
                    Ok(Some(data_uri)) => {
                        log::info!("📷 Foto lista ({} caracteres)", data_uri.len());
                        on_captured.emit(data_uri);
                        BrowserPrompt.alert(&t("exito", &lang), &t("imagen_anadida", &lang));
                    }
                    Ok(None) => {}
                    Err(e) => {
                        log::error!("❌ Error capturando imagen: {}", e);
                        BrowserPrompt.alert(&t("error", &lang), &t("error_imagen", &lang));
                    }
                }
                state.set(CaptureState::Idle);
            });
        })
    };

    UseImageCaptureHandle { state, start }
}
