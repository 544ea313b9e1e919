// Utils compartidos

pub mod constants;
pub mod dialogs;
pub mod i18n;
pub mod map_ffi;
pub mod media_ffi;

pub use constants::*;
pub use dialogs::{BrowserPrompt, Prompt};
pub use i18n::*;
