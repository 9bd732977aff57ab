//! Page Components for Category Desk
//!
//! - **CategoriesPage**: the category list with its modal and dialogs
//!

pub mod categories;

pub use categories::CategoriesPage;
