//! # Category Table Component
//!
//! Renders the loaded categories: 1-based index, name, first image (or a
//! placeholder message) and per-row edit/delete actions.

use catdesk_core::{Category, CategoryId};
use dioxus::prelude::*;

use crate::state::APP_STATE;

/// Text shown when a category has no image
pub const NO_IMAGE: &str = "No image available";

// ============================================================================
// Row Model
// ============================================================================

/// Image cell content
#[derive(Debug, Clone, PartialEq)]
pub enum RowImage {
    Url(String),
    Missing,
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    /// 1-based position in the list
    pub index: usize,
    pub id: CategoryId,
    pub name: String,
    pub image: RowImage,
}

/// Build table rows in list order
pub fn category_rows(categories: &[Category]) -> Vec<CategoryRow> {
    categories
        .iter()
        .enumerate()
        .map(|(i, category)| CategoryRow {
            index: i + 1,
            id: category.id.clone(),
            name: category.name.clone(),
            image: match category.first_image() {
                Some(url) => RowImage::Url(url.to_string()),
                None => RowImage::Missing,
            },
        })
        .collect()
}

// ============================================================================
// Components
// ============================================================================

/// Table of all loaded categories
#[component]
pub fn CategoryTable() -> Element {
    let state = APP_STATE.read();
    let rows = category_rows(&state.categories);
    let loading = state.loading;
    drop(state);

    rsx! {
        div {
            class: "table-responsive",

            table {
                class: "table table-bordered",
                thead {
                    tr {
                        th { "#" }
                        th { "Category" }
                        th { "Image" }
                        th { "Actions" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td {
                                colspan: "4",
                                class: "table-empty",
                                if loading { "Loading categories..." } else { "No categories" }
                            }
                        }
                    }
                    for row in rows {
                        CategoryRowView { key: "{row.id}", row: row.clone() }
                    }
                }
            }
        }
    }
}

/// A single table row with its actions
#[component]
fn CategoryRowView(row: CategoryRow) -> Element {
    let edit_id = row.id.clone();
    let delete_id = row.id.clone();

    rsx! {
        tr {
            td { "{row.index}" }
            td { "{row.name}" }
            td {
                match &row.image {
                    RowImage::Url(url) => rsx! {
                        img {
                            class: "row-image",
                            src: "{url}",
                            alt: "{row.name}",
                        }
                    },
                    RowImage::Missing => rsx! {
                        span { class: "text-muted", "{NO_IMAGE}" }
                    },
                }
            }
            td {
                class: "row-actions",
                button {
                    class: "btn btn-warning",
                    title: "Edit",
                    onclick: move |_| {
                        let mut state = APP_STATE.write();
                        if let Some(category) = state.category(&edit_id).cloned() {
                            state.open_edit(&category);
                        }
                    },
                    "✏️"
                }
                button {
                    class: "btn btn-danger",
                    title: "Delete",
                    onclick: move |_| {
                        APP_STATE.write().request_delete(delete_id.clone());
                    },
                    "🗑️"
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_one_based_with_first_image() {
        let categories = vec![
            Category::new(1, "Shoes")
                .with_image("http://img/1.png")
                .with_image("http://img/2.png"),
            Category::new(7, "Misc"),
        ];

        let rows = category_rows(&categories);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].name, "Shoes");
        assert_eq!(rows[0].image, RowImage::Url("http://img/1.png".to_string()));
        assert_eq!(rows[1].index, 2);
        assert_eq!(rows[1].id, CategoryId::from(7));
        assert_eq!(rows[1].image, RowImage::Missing);
    }

    #[test]
    fn test_empty_list() {
        assert!(category_rows(&[]).is_empty());
    }
}
