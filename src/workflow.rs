//! Per-page CRUD bookkeeping: the last fetched list, the search text, which
//! modal is open and whether a submit is in flight. Every resource page runs
//! the same machine; only the record and form types differ.

use crate::helper::api_client::ApiError;
use crate::models::{Record, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Loaded,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalState<F> {
    Closed,
    Creating(F),
    Editing { id: RecordId, form: F },
    ConfirmDelete { id: RecordId, label: String },
}

#[derive(Debug, Clone)]
pub struct Workflow<R, F> {
    resource: &'static str,
    phase: Phase,
    items: Vec<R>,
    search: String,
    modal: ModalState<F>,
    submitting: bool,
}

impl<R: Record, F: Default> Workflow<R, F> {
    /// A freshly mounted page: nothing fetched yet.
    pub fn new(resource: &'static str) -> Self {
        Workflow {
            resource,
            phase: Phase::Loading,
            items: Vec::new(),
            search: String::new(),
            modal: ModalState::Closed,
            submitting: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn modal(&self) -> &ModalState<F> {
        &self.modal
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Replaces the list with a fetch result. A failed fetch is logged and
    /// leaves an empty list.
    pub fn finish_loading(&mut self, result: Result<Vec<R>, ApiError>) {
        self.items = match result {
            Ok(items) => items,
            Err(e) => {
                log::error!("Error fetching {}: {}", self.resource, e);
                Vec::new()
            }
        };
        self.phase = Phase::Loaded;
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Items matching the search text, in list order.
    pub fn visible(&self) -> Vec<&R> {
        self.items.iter().filter(|item| item.matches_search(&self.search)).collect()
    }

    pub fn open_create(&mut self) {
        self.modal = ModalState::Creating(F::default());
    }

    /// Opens the edit modal pre-filled from the listed item. Returns false and
    /// leaves the modal closed when `id` is not in the list.
    pub fn open_edit(&mut self, id: RecordId, to_form: impl FnOnce(&R) -> F) -> bool {
        match self.items.iter().find(|item| item.id() == id) {
            Some(item) => {
                self.modal = ModalState::Editing { id, form: to_form(item) };
                true
            }
            None => false,
        }
    }

    /// Asks for delete confirmation of a listed item.
    pub fn open_delete(&mut self, id: RecordId) -> bool {
        match self.items.iter().find(|item| item.id() == id) {
            Some(item) => {
                self.modal = ModalState::ConfirmDelete { id, label: item.label().to_string() };
                true
            }
            None => false,
        }
    }

    /// Puts a submitted form back into its modal, e.g. after a rejected write.
    pub fn reopen(&mut self, target: Option<RecordId>, form: F) {
        self.modal = match target {
            Some(id) => ModalState::Editing { id, form },
            None => ModalState::Creating(form),
        };
    }

    /// Records a delete request coming straight from a confirmation prompt.
    pub fn request_delete(&mut self, id: RecordId) {
        self.modal = ModalState::ConfirmDelete { id, label: String::new() };
    }

    /// Resolves the pending confirmation. Returns the id to delete only when
    /// the user accepted; either way the prompt closes.
    pub fn confirm_delete(&mut self, accepted: bool) -> Option<RecordId> {
        let pending = match &self.modal {
            ModalState::ConfirmDelete { id, .. } => Some(*id),
            _ => None,
        };
        self.modal = ModalState::Closed;
        pending.filter(|_| accepted)
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// Marks a submit as in flight. Refuses while another one on this same
    /// workflow has not settled, or when no create/edit modal is open.
    ///
    /// Route handlers build a fresh workflow per request, so across HTTP
    /// requests this never refuses; double submits from the browser are
    /// blocked by `static/app.js` disabling `button[data-submit]`.
    pub fn begin_submit(&mut self) -> bool {
        let has_form = matches!(self.modal, ModalState::Creating(_) | ModalState::Editing { .. });
        if self.submitting || !has_form {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Settles the in-flight submit. Success closes the modal; failure is
    /// logged and keeps it open with the entered values.
    pub fn finish_submit<T>(&mut self, outcome: Result<T, ApiError>) -> bool {
        self.submitting = false;
        match outcome {
            Ok(_) => {
                self.modal = ModalState::Closed;
                true
            }
            Err(e) => {
                log::error!("Error saving {}: {}", self.resource, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u64,
        name: &'static str,
    }

    impl Record for Item {
        fn id(&self) -> RecordId {
            RecordId(self.id)
        }

        fn label(&self) -> &str {
            self.name
        }
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Form {
        name: String,
    }

    fn loaded() -> Workflow<Item, Form> {
        let mut wf = Workflow::new("items");
        wf.finish_loading(Ok(vec![
            Item { id: 1, name: "Technology" },
            Item { id: 2, name: "Travel" },
            Item { id: 3, name: "Cooking" },
        ]));
        wf
    }

    fn backend_error() -> ApiError {
        ApiError::Status { status: StatusCode::INTERNAL_SERVER_ERROR, message: "boom".to_string() }
    }

    #[test]
    fn starts_loading_and_fetch_failure_yields_empty_list() {
        let mut wf: Workflow<Item, Form> = Workflow::new("items");
        assert_eq!(wf.phase(), Phase::Loading);

        wf.finish_loading(Err(backend_error()));
        assert_eq!(wf.phase(), Phase::Loaded);
        assert!(wf.items().is_empty());
    }

    #[rstest]
    #[case("tech", vec![1])]
    #[case("TR", vec![2])]
    #[case("o", vec![1, 3])]
    #[case("zzz", vec![])]
    #[case("", vec![1, 2, 3])]
    fn search_filters_by_label(#[case] term: &str, #[case] expected: Vec<u64>) {
        let mut wf = loaded();
        wf.set_search(term);
        let ids: Vec<u64> = wf.visible().iter().map(|item| item.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn clearing_search_restores_full_list() {
        let mut wf = loaded();
        wf.set_search("nothing matches");
        assert!(wf.visible().is_empty());
        wf.set_search("");
        assert_eq!(wf.visible().len(), 3);
    }

    #[test]
    fn search_reapplies_after_refresh() {
        let mut wf = loaded();
        wf.set_search("new");
        assert!(wf.visible().is_empty());
        wf.finish_loading(Ok(vec![Item { id: 4, name: "News" }]));
        assert_eq!(wf.visible().len(), 1);
    }

    #[test]
    fn edit_prefills_from_row() {
        let mut wf = loaded();
        assert!(wf.open_edit(RecordId(2), |item| Form { name: item.name.to_string() }));
        assert_eq!(
            wf.modal(),
            &ModalState::Editing { id: RecordId(2), form: Form { name: "Travel".to_string() } }
        );

        wf.close_modal();
        assert!(!wf.open_edit(RecordId(99), |_| Form::default()));
        assert_eq!(wf.modal(), &ModalState::Closed);
    }

    #[test]
    fn create_starts_blank() {
        let mut wf = loaded();
        wf.open_create();
        assert_eq!(wf.modal(), &ModalState::Creating(Form::default()));
    }

    #[test]
    fn declined_delete_yields_nothing() {
        let mut wf = loaded();
        assert!(wf.open_delete(RecordId(3)));
        assert_eq!(wf.confirm_delete(false), None);
        assert_eq!(wf.modal(), &ModalState::Closed);
        assert_eq!(wf.items().len(), 3);
    }

    #[test]
    fn accepted_delete_yields_id() {
        let mut wf = loaded();
        wf.request_delete(RecordId(3));
        assert_eq!(wf.confirm_delete(true), Some(RecordId(3)));
        assert_eq!(wf.confirm_delete(true), None);
    }

    #[test]
    fn in_flight_flag_blocks_second_submit() {
        let mut wf = loaded();
        assert!(!wf.begin_submit());

        wf.open_create();
        assert!(wf.begin_submit());
        assert!(wf.is_submitting());
        assert!(!wf.begin_submit());

        assert!(wf.finish_submit(Ok(())));
        assert!(!wf.is_submitting());
        assert_eq!(wf.modal(), &ModalState::Closed);
    }

    #[test]
    fn failed_submit_keeps_modal_open() {
        let mut wf = loaded();
        wf.reopen(Some(RecordId(1)), Form { name: "Tech".to_string() });
        assert!(wf.begin_submit());
        assert!(!wf.finish_submit::<()>(Err(backend_error())));
        assert!(!wf.is_submitting());
        assert_eq!(
            wf.modal(),
            &ModalState::Editing { id: RecordId(1), form: Form { name: "Tech".to_string() } }
        );
    }
}
