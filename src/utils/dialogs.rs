// ============================================================================
// DIÁLOGOS - alert/confirm del navegador detrás de un trait
// ============================================================================

use web_sys::window;

/// Alertas y confirmaciones bloqueantes para el usuario
pub trait Prompt {
    fn alert(&self, title: &str, message: &str);

    /// `true` solo si el usuario acepta explícitamente
    fn confirm(&self, title: &str, message: &str) -> bool;
}

/// `window.alert` / `window.confirm`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserPrompt;

fn compose(title: &str, message: &str) -> String {
    if title.is_empty() {
        message.to_string()
    } else {
        format!("{}\n\n{}", title, message)
    }
}

impl Prompt for BrowserPrompt {
    fn alert(&self, title: &str, message: &str) {
        if let Some(win) = window() {
            let _ = win.alert_with_message(&compose(title, message));
        } else {
            log::warn!("⚠️ Sin window para mostrar alerta: {} - {}", title, message);
        }
    }

    fn confirm(&self, title: &str, message: &str) -> bool {
        window()
            .and_then(|win| win.confirm_with_message(&compose(title, message)).ok())
            .unwrap_or(false)
    }
}
