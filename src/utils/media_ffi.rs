// ============================================================================
// MEDIA FFI - Cámara / galería / recompresión JPEG en el navegador
// ============================================================================
// Los callbacks JS se puentean a futuros con un oneshot. Los closures se
// mantienen vivos hasta que el futuro se resuelve.
// ============================================================================

use futures::channel::oneshot;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    window, CanvasRenderingContext2d, Document, File, FileReader, HtmlCanvasElement,
    HtmlImageElement, HtmlInputElement, MediaStream, MediaStreamConstraints, MediaStreamTrack,
};

use crate::config::ImageConfig;
use crate::utils::PICKER_FOCUS_GRACE_MS;
use crate::services::image_capture::{center_crop, CaptureError, CaptureSource};

type SharedSender<T> = Rc<RefCell<Option<oneshot::Sender<T>>>>;

fn once_channel<T>() -> (SharedSender<T>, oneshot::Receiver<T>) {
    let (tx, rx) = oneshot::channel();
    (Rc::new(RefCell::new(Some(tx))), rx)
}

/// Envía solo la primera vez; los eventos posteriores se ignoran
fn fire<T>(tx: &SharedSender<T>, value: T) {
    if let Some(tx) = tx.borrow_mut().take() {
        let _ = tx.send(value);
    }
}

fn browser_err(e: JsValue) -> CaptureError {
    CaptureError::Browser(format!("{:?}", e))
}

fn document() -> Result<Document, CaptureError> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| CaptureError::Browser("document no disponible".to_string()))
}

/// Pide permiso para la fuente. La galería (selector de ficheros) no lo necesita.
pub async fn request_permission(source: CaptureSource) -> bool {
    if !source.needs_permission() {
        return true;
    }
    match request_camera_permission().await {
        Ok(granted) => granted,
        Err(e) => {
            log::warn!("⚠️ getUserMedia no disponible: {:?}", e);
            false
        }
    }
}

/// Abre y cierra un stream de vídeo para disparar el diálogo de permisos
async fn request_camera_permission() -> Result<bool, JsValue> {
    let Some(win) = window() else {
        return Ok(false);
    };
    let devices = win.navigator().media_devices()?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    let promise = devices.get_user_media_with_constraints(&constraints)?;

    match JsFuture::from(promise).await {
        Ok(stream) => {
            let stream: MediaStream = stream.dyn_into()?;
            for track in stream.get_tracks().iter() {
                if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                    track.stop();
                }
            }
            log::info!("📷 Permiso de cámara concedido");
            Ok(true)
        }
        Err(e) => {
            log::warn!("🚫 Permiso de cámara denegado: {:?}", e);
            Ok(false)
        }
    }
}

/// Abre el selector (cámara trasera o galería). `None` si el usuario cancela.
async fn pick_image_file(source: CaptureSource) -> Result<Option<File>, CaptureError> {
    let input: HtmlInputElement = document()?
        .create_element("input")
        .map_err(browser_err)?
        .dyn_into()
        .map_err(|_| CaptureError::Browser("no es un <input>".to_string()))?;
    input.set_type("file");
    input.set_accept("image/*");
    if source == CaptureSource::Camera {
        input.set_attribute("capture", "environment").map_err(browser_err)?;
    }

    let (tx, rx) = once_channel::<Option<File>>();

    let on_change = {
        let tx = tx.clone();
        let input = input.clone();
        Closure::wrap(Box::new(move |_e: web_sys::Event| {
            fire(&tx, input.files().and_then(|files| files.get(0)));
        }) as Box<dyn FnMut(web_sys::Event)>)
    };
    let on_cancel = {
        let tx = tx.clone();
        Closure::wrap(Box::new(move |_e: web_sys::Event| {
            fire(&tx, None);
        }) as Box<dyn FnMut(web_sys::Event)>)
    };

    input
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        .map_err(browser_err)?;
    input
        .add_event_listener_with_callback("cancel", on_cancel.as_ref().unchecked_ref())
        .map_err(browser_err)?;
    input.click();

    // Hay navegadores que no emiten `cancel`: al volver el foco a la ventana
    // sin `change` en el margen, el selector se da por cerrado
    let win = window().ok_or_else(|| CaptureError::Browser("window no disponible".to_string()))?;
    let on_focus = {
        let tx = tx.clone();
        Closure::wrap(Box::new(move |_e: web_sys::Event| {
            let tx = tx.clone();
            Timeout::new(PICKER_FOCUS_GRACE_MS, move || fire(&tx, None)).forget();
        }) as Box<dyn FnMut(web_sys::Event)>)
    };
    win.add_event_listener_with_callback("focus", on_focus.as_ref().unchecked_ref())
        .map_err(browser_err)?;

    let file = rx.await.unwrap_or(None);
    let _ = win.remove_event_listener_with_callback("focus", on_focus.as_ref().unchecked_ref());
    drop(on_focus);
    drop(on_change);
    drop(on_cancel);
    Ok(file)
}

async fn read_as_data_url(file: &File) -> Result<String, CaptureError> {
    let reader = FileReader::new().map_err(browser_err)?;
    let (tx, rx) = once_channel::<Option<String>>();

    let on_load = {
        let tx = tx.clone();
        let reader = reader.clone();
        Closure::wrap(Box::new(move |_e: web_sys::Event| {
            fire(&tx, reader.result().ok().and_then(|r| r.as_string()));
        }) as Box<dyn FnMut(web_sys::Event)>)
    };
    let on_error = {
        let tx = tx.clone();
        Closure::wrap(Box::new(move |_e: web_sys::Event| {
            fire(&tx, None);
        }) as Box<dyn FnMut(web_sys::Event)>)
    };
    reader.set_onload(Some(on_load.as_ref().unchecked_ref()));
    reader.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    reader.read_as_data_url(file).map_err(browser_err)?;

    let result = rx.await.ok().flatten();
    reader.set_onload(None);
    reader.set_onerror(None);
    result.ok_or_else(|| CaptureError::Browser("no se pudo leer el fichero".to_string()))
}

/// Recorta a la proporción configurada y recomprime como JPEG
async fn reencode_jpeg(data_url: &str, config: &ImageConfig) -> Result<String, CaptureError> {
    let image = HtmlImageElement::new().map_err(browser_err)?;
    let (tx, rx) = once_channel::<bool>();

    let on_load = {
        let tx = tx.clone();
        Closure::wrap(Box::new(move |_e: web_sys::Event| fire(&tx, true)) as Box<dyn FnMut(web_sys::Event)>)
    };
    let on_error = {
        let tx = tx.clone();
        Closure::wrap(Box::new(move |_e: web_sys::Event| fire(&tx, false)) as Box<dyn FnMut(web_sys::Event)>)
    };
    image.set_onload(Some(on_load.as_ref().unchecked_ref()));
    image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    image.set_src(data_url);

    let decoded = rx.await.unwrap_or(false);
    image.set_onload(None);
    image.set_onerror(None);
    if !decoded {
        return Err(CaptureError::Browser("no se pudo decodificar la imagen".to_string()));
    }

    let (sx, sy, sw, sh) = center_crop(
        image.natural_width(),
        image.natural_height(),
        config.aspect_width,
        config.aspect_height,
    );

    let canvas: HtmlCanvasElement = document()?
        .create_element("canvas")
        .map_err(browser_err)?
        .dyn_into()
        .map_err(|_| CaptureError::Browser("no es un <canvas>".to_string()))?;
    canvas.set_width(sw);
    canvas.set_height(sh);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(browser_err)?
        .ok_or_else(|| CaptureError::Browser("sin contexto 2d".to_string()))?
        .dyn_into()
        .map_err(|_| CaptureError::Browser("contexto 2d inválido".to_string()))?;

    context
        .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
            &image,
            sx as f64,
            sy as f64,
            sw as f64,
            sh as f64,
            0.0,
            0.0,
            sw as f64,
            sh as f64,
        )
        .map_err(browser_err)?;

    canvas
        .to_data_url_with_type_and_encoder_options("image/jpeg", &JsValue::from_f64(config.quality))
        .map_err(browser_err)
}

/// Captura completa: selector → lectura → recorte + JPEG.
/// `Ok(None)` cuando el usuario cancela el selector.
pub async fn capture_image(source: CaptureSource, config: &ImageConfig) -> Result<Option<String>, CaptureError> {
    let Some(file) = pick_image_file(source).await? else {
        log::info!("↩️ Captura cancelada");
        return Ok(None);
    };
    log::info!("🖼️ Imagen seleccionada: {} ({} bytes)", file.name(), file.size());

    let original = read_as_data_url(&file).await?;
    let jpeg = reencode_jpeg(&original, config).await?;
    log::info!("✅ Imagen recomprimida: {} → {} caracteres", original.len(), jpeg.len());
    Ok(Some(jpeg))
}
