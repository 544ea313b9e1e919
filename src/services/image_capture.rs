// ============================================================================
// IMAGE CAPTURE - MÁQUINA DE ESTADOS POR INTENTO DE CAPTURA
// ============================================================================
// idle → permission-requested → granted → capturing → completed | canceled
//                             → denied (alerta) → idle
// La parte de navegador (getUserMedia, file input, canvas) vive en
// utils::media_ffi; aquí solo las transiciones y el recorte.
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureSource {
    Camera,
    Gallery,
}

impl CaptureSource {
    /// Solo la cámara pide permiso; el selector de ficheros del navegador no
    /// tiene ese paso, así que la galería nunca puede quedar denegada
    pub fn needs_permission(self) -> bool {
        matches!(self, Self::Camera)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CaptureState {
    Idle,
    PermissionRequested(CaptureSource),
    Capturing(CaptureSource),
    /// Data URI JPEG listo para el update optimista
    Completed(String),
    Canceled,
    Denied(CaptureSource),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CaptureEvent {
    Start(CaptureSource),
    PermissionGranted,
    PermissionDenied,
    ImageReady(String),
    Cancel,
    /// Vuelta a reposo tras completar, cancelar, denegar o fallar
    Reset,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CaptureError {
    #[error("Transición inválida: {event:?} desde {state:?}")]
    InvalidTransition {
        state: CaptureState,
        event: CaptureEvent,
    },
    #[error("La imagen capturada no es un data URI: {0}")]
    NotADataUri(String),
    #[error("Error del navegador: {0}")]
    Browser(String),
}

impl Default for CaptureState {
    fn default() -> Self {
        Self::Idle
    }
}

impl CaptureState {
    pub fn next(&self, event: CaptureEvent) -> Result<CaptureState, CaptureError> {
        use CaptureEvent as E;
        use CaptureState as S;

        let next = match (self, &event) {
            (S::Idle, E::Start(source)) => S::PermissionRequested(*source),
            (S::PermissionRequested(source), E::PermissionGranted) => S::Capturing(*source),
            (S::PermissionRequested(source), E::PermissionDenied) if source.needs_permission() => {
                S::Denied(*source)
            }
            (S::Capturing(_), E::ImageReady(uri)) => {
                if !uri.starts_with("data:image/") {
                    return Err(CaptureError::NotADataUri(truncate(uri, 32)));
                }
                S::Completed(uri.clone())
            }
            (S::Capturing(_), E::Cancel) => S::Canceled,
            (S::PermissionRequested(_), E::Cancel) => S::Canceled,
            (_, E::Reset) => S::Idle,
            _ => {
                return Err(CaptureError::InvalidTransition {
                    state: self.clone(),
                    event: event.clone(),
                })
            }
        };
        Ok(next)
    }

    /// Hay un intento en curso (no se debe lanzar otro)
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::PermissionRequested(_) | Self::Capturing(_))
    }
}

/// Rectángulo de origen (sx, sy, sw, sh) que recorta la imagen centrada a la
/// proporción `aspect_w:aspect_h`
pub fn center_crop(width: u32, height: u32, aspect_w: u32, aspect_h: u32) -> (u32, u32, u32, u32) {
    if width == 0 || height == 0 || aspect_w == 0 || aspect_h == 0 {
        return (0, 0, width, height);
    }
    let (w, h, aw, ah) = (width as u64, height as u64, aspect_w as u64, aspect_h as u64);
    if w * ah > h * aw {
        // Demasiado ancha: se recortan los laterales
        let crop_w = h * aw / ah;
        (((w - crop_w) / 2) as u32, 0, crop_w as u32, height)
    } else {
        let crop_h = w * ah / aw;
        (0, ((h - crop_h) / 2) as u32, width, crop_h as u32)
    }
}

fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
