//! Application State Management for Category Desk
//!
//! All view state lives in one `AppState` held by a Dioxus 0.7 global
//! signal. The modal, the delete confirmation and the alert are explicit
//! values here rather than hidden widget state, and every transition is a
//! plain method so it can be tested without a renderer.

use catdesk_client::{CategoryRequest, ClientError, ClientResult};
use catdesk_core::{AppConfig, Category, CategoryId, CategoryPayload, PayloadDefaults};
use dioxus::prelude::*;

use crate::alerts::{AlertSlot, NAME_REQUIRED, success_message};
use crate::workflow::StateStore;

// ============================================================================
// Form Modal
// ============================================================================

/// Which operation the form modal performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Register a new category (operation 1)
    Create,
    /// Edit an existing category (operation 2)
    Edit,
}

impl FormMode {
    /// Numeric operation code (1 = create, 2 = edit)
    pub fn code(&self) -> u8 {
        match self {
            FormMode::Create => 1,
            FormMode::Edit => 2,
        }
    }

    /// Modal title
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Register Category",
            FormMode::Edit => "Edit Category",
        }
    }
}

/// Modal lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(FormMode),
    /// A create/edit request is in flight
    Submitting(FormMode),
}

impl ModalState {
    /// Whether the modal is visible
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    /// Whether a request is in flight
    pub fn is_submitting(&self) -> bool {
        matches!(self, ModalState::Submitting(_))
    }

    /// Operation of the visible modal
    pub fn mode(&self) -> Option<FormMode> {
        match self {
            ModalState::Closed => None,
            ModalState::Open(mode) | ModalState::Submitting(mode) => Some(*mode),
        }
    }
}

/// Form fields bound to the modal inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    /// Present only in edit mode
    pub id: Option<CategoryId>,
    pub name: String,
    /// Image URL input. Not sent to the API; the payload image is fixed.
    pub imagen: String,
}

impl CategoryForm {
    /// Clear every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// Delete Confirmation
// ============================================================================

/// Delete confirmation lifecycle
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ConfirmState {
    #[default]
    Hidden,
    /// Waiting for the user to answer
    Pending(CategoryId),
    /// Confirmed; DELETE in flight
    Deleting(CategoryId),
}

impl ConfirmState {
    /// Category the dialog refers to
    pub fn target(&self) -> Option<&CategoryId> {
        match self {
            ConfirmState::Hidden => None,
            ConfirmState::Pending(id) | ConfirmState::Deleting(id) => Some(id),
        }
    }
}

// ============================================================================
// Application State
// ============================================================================

/// Main application state container
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Latest `fetch_all` result, replaced wholesale
    pub categories: Vec<Category>,
    /// Whether a list fetch is in flight
    pub loading: bool,
    /// Sequence number of the latest fetch started
    fetch_seq: u64,
    pub modal: ModalState,
    pub form: CategoryForm,
    pub confirm: ConfirmState,
    pub alerts: AlertSlot,
    /// Fixed values sent with every create/edit
    pub payload: PayloadDefaults,
}

impl AppState {
    /// Create new application state with default payload values
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply configuration values that affect view behavior
    pub fn configure(&mut self, config: &AppConfig) {
        self.payload = config.payload.clone();
        self.alerts.set_ttl_ms(config.alerts.ttl_ms);
    }

    // ------------------------------------------------------------------------
    // List
    // ------------------------------------------------------------------------

    /// Mark a list fetch as started and return its sequence number
    pub fn begin_loading(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.loading = true;
        self.fetch_seq
    }

    /// Whether `seq` belongs to the latest fetch started
    fn is_latest_fetch(&self, seq: u64) -> bool {
        seq == self.fetch_seq
    }

    /// Replace the whole collection with the result of fetch `seq`.
    ///
    /// A result from a fetch superseded by a later one is dropped.
    pub fn replace_categories(&mut self, seq: u64, categories: Vec<Category>) {
        if !self.is_latest_fetch(seq) {
            tracing::debug!("Dropping stale category list from fetch #{}", seq);
            return;
        }
        tracing::debug!("Loaded {} categories", categories.len());
        self.categories = categories;
        self.loading = false;
    }

    /// Record a failed fetch. The previous collection stays.
    pub fn load_failed(&mut self, seq: u64, err: &ClientError) {
        tracing::error!("Failed to load categories: {}", err);
        if !self.is_latest_fetch(seq) {
            return;
        }
        self.loading = false;
        self.alerts.error(err.user_message());
    }

    /// Look up a loaded category
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    // ------------------------------------------------------------------------
    // Form Modal
    // ------------------------------------------------------------------------

    /// Open the form modal.
    ///
    /// Fields are always cleared first; in edit mode they are then filled
    /// from the arguments.
    pub fn open_modal(
        &mut self,
        mode: FormMode,
        id: Option<CategoryId>,
        name: Option<String>,
        imagen: Option<String>,
    ) {
        self.form.reset();

        if mode == FormMode::Edit {
            self.form.id = id;
            self.form.name = name.unwrap_or_default();
            self.form.imagen = imagen.unwrap_or_default();
        }

        self.modal = ModalState::Open(mode);
    }

    /// Open the modal empty, for a new category
    pub fn open_create(&mut self) {
        self.open_modal(FormMode::Create, None, None, None);
    }

    /// Open the modal for a listed category.
    ///
    /// Only id and name are carried over; the image input starts empty.
    pub fn open_edit(&mut self, category: &Category) {
        self.open_modal(
            FormMode::Edit,
            Some(category.id.clone()),
            Some(category.name.clone()),
            None,
        );
    }

    /// Close the modal and discard the form
    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
        self.form.reset();
    }

    /// Modal title, when open
    pub fn modal_title(&self) -> Option<&'static str> {
        self.modal.mode().map(|m| m.title())
    }

    /// Validate the form and build the request to send.
    ///
    /// Returns `None` without touching the network when the modal is not
    /// open for input or the name is empty (a warning is raised for the
    /// latter). On success the modal moves to `Submitting`.
    pub fn submit_form(&mut self) -> Option<CategoryRequest> {
        let ModalState::Open(mode) = self.modal else {
            return None;
        };

        if let Err(err) = CategoryPayload::validate_name(&self.form.name) {
            tracing::warn!("Category form rejected: {}", err);
            self.alerts.warning(NAME_REQUIRED, err.field());
            return None;
        }

        let payload = CategoryPayload::new(
            self.form.name.clone(),
            self.payload.category_id,
            self.payload.image_url.clone(),
        );

        let request = match (mode, &self.form.id) {
            (FormMode::Edit, Some(id)) => CategoryRequest::Update(id.clone(), payload),
            (FormMode::Edit, None) => {
                tracing::warn!("Edit form has no category id");
                self.alerts.error("No category selected for editing");
                return None;
            }
            (FormMode::Create, _) => CategoryRequest::Create(payload),
        };

        self.modal = ModalState::Submitting(mode);
        Some(request)
    }

    // ------------------------------------------------------------------------
    // Delete Confirmation
    // ------------------------------------------------------------------------

    /// Ask the user to confirm deleting `id`
    pub fn request_delete(&mut self, id: CategoryId) {
        self.confirm = ConfirmState::Pending(id);
    }

    /// The user answered no
    pub fn dismiss_delete(&mut self) {
        if matches!(self.confirm, ConfirmState::Pending(_)) {
            self.confirm = ConfirmState::Hidden;
        }
    }

    /// The user answered yes: returns the DELETE to send, once
    pub fn confirm_delete(&mut self) -> Option<CategoryRequest> {
        let ConfirmState::Pending(id) = &self.confirm else {
            return None;
        };
        let id = id.clone();
        self.confirm = ConfirmState::Deleting(id.clone());
        Some(CategoryRequest::Delete(id))
    }

    // ------------------------------------------------------------------------
    // Request Outcome
    // ------------------------------------------------------------------------

    /// Apply the outcome of a mutating request.
    ///
    /// Returns `true` when the list must be re-fetched.
    pub fn settle(&mut self, request: &CategoryRequest, result: &ClientResult<()>) -> bool {
        let method = request.method();

        match result {
            Ok(()) => {
                tracing::info!("{} {} succeeded", method, request.path());
                self.alerts.success(success_message(request));
                match request {
                    CategoryRequest::Delete(_) => self.confirm = ConfirmState::Hidden,
                    _ => self.close_modal(),
                }
                true
            }
            Err(err) => {
                tracing::error!("{} {} failed: {}", method, request.path(), err);
                self.alerts.error(err.user_message());
                match request {
                    CategoryRequest::Delete(_) => self.confirm = ConfirmState::Hidden,
                    _ => {
                        if let ModalState::Submitting(mode) = self.modal {
                            self.modal = ModalState::Open(mode);
                        }
                    }
                }
                false
            }
        }
    }
}

// ============================================================================
// Global State Context
// ============================================================================

/// Global application state signal
/// Use this in components to access and modify app state
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

/// Initialize the global app state from configuration.
/// Call this once from the root component.
pub fn init_app_state(config: &AppConfig) {
    APP_STATE.write().configure(config);
}

/// [`StateStore`] over the global signal
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalStore;

impl StateStore for GlobalStore {
    fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let mut state = APP_STATE.write();
        f(&mut state)
    }
}

// ============================================================================
// Tests
// ============================================================================
