pub mod catalog;
pub mod toast;

pub use catalog::{CatalogProvider, use_catalog};
pub use toast::{ToastProvider, use_toast};
