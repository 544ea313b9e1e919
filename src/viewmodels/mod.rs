pub mod menu_viewmodel;

pub use menu_viewmodel::{local_category_update, ImageChange, MenuViewModel, MutationOutcome};
