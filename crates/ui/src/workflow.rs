//! Request workflows
//!
//! Each workflow takes the state only for short synchronous steps and never
//! across an `.await`: build the request, release, await the API, then apply
//! the outcome. A list refresh always runs after the mutation has settled.

use catdesk_client::{CategoryApi, CategoryRequest};
use std::sync::Mutex;

use crate::state::AppState;

/// Access to the application state for the duration of a closure
pub trait StateStore {
    fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R;
}

impl StateStore for Mutex<AppState> {
    fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let mut state = self.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut state)
    }
}

/// Fetch the list and replace the collection
pub async fn load_categories<A, S>(api: &A, store: &S)
where
    A: CategoryApi + ?Sized,
    S: StateStore,
{
    let seq = store.update(|s| s.begin_loading());

    match api.fetch_all().await {
        Ok(categories) => store.update(|s| s.replace_categories(seq, categories)),
        Err(err) => store.update(|s| s.load_failed(seq, &err)),
    }
}

/// Validate the form modal and send the create or edit
pub async fn submit_form<A, S>(api: &A, store: &S)
where
    A: CategoryApi + ?Sized,
    S: StateStore,
{
    if let Some(request) = store.update(|s| s.submit_form()) {
        dispatch(api, store, request).await;
    }
}

/// Send the DELETE for a pending confirmation
pub async fn confirm_delete<A, S>(api: &A, store: &S)
where
    A: CategoryApi + ?Sized,
    S: StateStore,
{
    if let Some(request) = store.update(|s| s.confirm_delete()) {
        dispatch(api, store, request).await;
    }
}

/// Send one mutation, report it, and refresh the list on success
async fn dispatch<A, S>(api: &A, store: &S, request: CategoryRequest)
where
    A: CategoryApi + ?Sized,
    S: StateStore,
{
    let result = api.submit(&request).await;
    let refresh = store.update(|s| s.settle(&request, &result));

    if refresh {
        load_categories(api, store).await;
    }
}

// ============================================================================
// Tests
// ============================================================================
