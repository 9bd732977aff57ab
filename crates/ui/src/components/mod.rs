//! # UI Components
//!
//! Dioxus components for the Category Desk window.
//!
//! ```text
//! CategoriesPage
//! ├── CategoryTable
//! │   └── CategoryRowView (multiple)
//! ├── CategoryModal (create/edit form)
//! ├── ConfirmDeleteDialog
//! └── AlertToast
//! ```

pub mod alert_toast;
pub mod category_modal;
pub mod category_table;
pub mod confirm_dialog;

pub use alert_toast::AlertToast;
pub use category_modal::CategoryModal;
pub use category_table::{CategoryRow, CategoryTable, NO_IMAGE, RowImage, category_rows};
pub use confirm_dialog::ConfirmDeleteDialog;
