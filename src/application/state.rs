//! Application state for the project board.
//!
//! `App` is the composition root: it owns the single `ProjectStore`, attaches
//! the two list views to it, and tracks the UI state that the presentation
//! layer renders and the input handler mutates.

use crate::application::form::ProjectForm;
use crate::application::list::{ListHandle, ProjectList};
use crate::domain::{DomainResult, ProjectId, ProjectStatus, ProjectStore};
use log::{info, warn};
use std::cell::Ref;

pub const DEFAULT_EXPORT_PATH: &str = "projects.csv";

/// Represents the current mode of the application.
///
/// The mode decides how key presses are interpreted and which
/// UI elements are highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Browsing the lists - selection, pick-up and drop
    Normal,
    /// Typing into the project form
    Editing,
    /// Help screen is displayed
    Help,
    /// CSV export dialog is open
    ExportCsv,
}

/// A picked-up project waiting to be dropped onto a list.
#[derive(Debug, Clone, PartialEq)]
pub struct DragPayload {
    pub project_id: ProjectId,
    pub origin: ProjectStatus,
}

/// Main application state.
///
/// # Examples
///
/// ```
/// use projdeck::application::App;
///
/// let app = App::default();
/// assert!(app.store.is_empty());
/// assert_eq!(app.store.listener_count(), 2);
/// ```
#[derive(Debug)]
pub struct App {
    /// The one store every view observes
    pub store: ProjectStore,
    pub active: ListHandle,
    pub finished: ListHandle,
    /// List that navigation and drops currently target
    pub focused_list: ProjectStatus,
    pub mode: AppMode,
    pub form: ProjectForm,
    /// Project currently picked up, if any
    pub drag: Option<DragPayload>,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Input buffer for filename entry
    pub filename_input: String,
    /// Cursor position within the filename buffer
    pub filename_cursor: usize,
    /// Filename offered when an export starts
    pub export_path: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new(ProjectStore::new(), DEFAULT_EXPORT_PATH)
    }
}

impl App {
    /// Builds the application around `store`, attaching one view per status.
    pub fn new(mut store: ProjectStore, export_path: &str) -> Self {
        let active = ProjectList::attach(&mut store, ProjectStatus::Active);
        let finished = ProjectList::attach(&mut store, ProjectStatus::Finished);

        Self {
            store,
            active,
            finished,
            focused_list: ProjectStatus::Active,
            mode: AppMode::Normal,
            form: ProjectForm::default(),
            drag: None,
            status_message: None,
            help_scroll: 0,
            filename_input: String::new(),
            filename_cursor: 0,
            export_path: export_path.to_string(),
        }
    }

    pub fn list(&self, kind: ProjectStatus) -> &ListHandle {
        match kind {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    pub fn focused(&self) -> Ref<'_, ProjectList> {
        self.list(self.focused_list).borrow()
    }

    /// Switches to editing mode with the cursor in the form's focused field.
    pub fn start_editing(&mut self) {
        self.mode = AppMode::Editing;
        let field = self.form.focus;
        self.form.focus_field(field);
        self.status_message = None;
    }

    /// Leaves the form without discarding what was typed.
    pub fn stop_editing(&mut self) {
        self.mode = AppMode::Normal;
    }

    /// Validates the form and, if valid, adds the project and clears the form.
    ///
    /// Invalid input leaves the form untouched so the user can correct it.
    pub fn submit_form(&mut self) {
        match self.form.gather() {
            Ok(draft) => {
                let id = self.store.add_project(&draft.title, &draft.description, draft.people);
                info!("event=form_submit status=ok id={}", id);
                self.status_message = Some(format!("Added \"{}\"", draft.title));
                self.form.clear();
            }
            Err(error) => {
                warn!("event=form_submit status=rejected reason=\"{}\"", error);
                self.status_message = Some(format!("Invalid input, please try again! ({})", error));
            }
        }
    }

    pub fn focus_list(&mut self, kind: ProjectStatus) {
        self.focused_list = kind;
    }

    pub fn toggle_list_focus(&mut self) {
        self.focused_list = self.focused_list.other();
    }

    pub fn select_next(&mut self) {
        self.list(self.focused_list).borrow_mut().select_next();
    }

    pub fn select_previous(&mut self) {
        self.list(self.focused_list).borrow_mut().select_previous();
    }

    /// Picks up the selected project of the focused list.
    ///
    /// Returns `false` when the focused list is empty.
    pub fn pick_up(&mut self) -> bool {
        let payload = self.focused().selected_project().map(|p| DragPayload {
            project_id: p.id.clone(),
            origin: p.status,
        });
        match payload {
            Some(payload) => {
                self.status_message = Some("Picked up - choose a list and press Space to drop".to_string());
                self.drag = Some(payload);
                true
            }
            None => false,
        }
    }

    /// Drops the held project onto the focused list.
    ///
    /// Dropping onto the list it came from changes nothing.
    pub fn drop_on_focused(&mut self) {
        let Some(payload) = self.drag.take() else {
            return;
        };
        self.status_message = None;
        let target = self.focused_list;
        let result = self.store.move_project(&payload.project_id, target);
        self.report_move(&payload.project_id, target, result);
    }

    pub fn cancel_drag(&mut self) {
        if self.drag.take().is_some() {
            self.status_message = None;
        }
    }

    /// Space key: pick up when empty-handed, drop otherwise.
    pub fn toggle_drag(&mut self) {
        if self.drag.is_some() {
            self.drop_on_focused();
        } else {
            self.pick_up();
        }
    }

    /// Sends the selected project straight to the other list.
    pub fn move_selected(&mut self) {
        let Some(id) = self.focused().selected_project().map(|p| p.id.clone()) else {
            return;
        };
        let target = self.focused_list.other();
        let result = self.store.move_project(&id, target);
        self.report_move(&id, target, result);
    }

    fn report_move(&mut self, id: &ProjectId, target: ProjectStatus, result: DomainResult<bool>) {
        match result {
            Ok(true) => {
                self.focused_list = target;
                self.list(target).borrow_mut().select_id(id);
                let title = self.store.get(id).map(|p| p.title.clone()).unwrap_or_default();
                self.status_message = Some(format!("Moved \"{}\" to {}", title, target));
            }
            Ok(false) => {}
            Err(error) => {
                warn!("event=project_move status=failed reason=\"{}\"", error);
                self.status_message = Some(error.to_string());
            }
        }
    }

    /// Switches to CSV export mode to prompt for a filename.
    pub fn start_csv_export(&mut self) {
        self.mode = AppMode::ExportCsv;
        self.filename_input = self.export_path.clone();
        self.filename_cursor = self.filename_input.len();
        self.status_message = None;
    }

    /// Returns the filename input if not empty, otherwise the configured default.
    pub fn get_csv_export_filename(&self) -> String {
        if self.filename_input.trim().is_empty() {
            self.export_path.clone()
        } else {
            self.filename_input.trim().to_string()
        }
    }

    /// Cancels filename input and returns to normal mode.
    pub fn cancel_filename_input(&mut self) {
        self.mode = AppMode::Normal;
        self.filename_input.clear();
        self.filename_cursor = 0;
    }

    /// Processes the result of a CSV export and returns to normal mode.
    pub fn set_csv_export_result(&mut self, result: DomainResult<String>) {
        match result {
            Ok(filename) => {
                info!("event=export status=ok path={}", filename);
                self.status_message = Some(format!("Exported {} projects to {}", self.store.len(), filename));
                self.export_path = filename;
            }
            Err(error) => {
                warn!("event=export status=failed reason=\"{}\"", error);
                self.status_message = Some(error.to_string());
            }
        }

        self.cancel_filename_input();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    fn app_with_form(title: &str, description: &str, people: &str) -> App {
        let mut app = App::default();
        app.form.title = title.to_string();
        app.form.description = description.to_string();
        app.form.people = people.to_string();
        app
    }

    fn add(app: &mut App, title: &str) -> ProjectId {
        app.store.add_project(title, "", 1)
    }

    #[test]
    fn test_app_default() {
        let app = App::default();
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.focused_list, ProjectStatus::Active);
        assert!(app.drag.is_none());
        assert_eq!(app.store.listener_count(), 2);
        assert_eq!(app.export_path, DEFAULT_EXPORT_PATH);
    }

    #[test]
    fn test_submit_valid_form_adds_and_clears() {
        let mut app = app_with_form("Build shed", "weekend project", "3");
        app.start_editing();

        app.submit_form();

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.active.borrow().len(), 1);
        assert!(app.finished.borrow().is_empty());
        assert!(app.form.title.is_empty());
        assert!(app.status_message.unwrap().contains("Build shed"));
    }

    #[test]
    fn test_submit_invalid_form_keeps_input() {
        let mut app = app_with_form("Shed", "", "3");

        app.submit_form();

        assert!(app.store.is_empty());
        assert_eq!(app.form.title, "Shed");
        assert!(app.status_message.unwrap().starts_with("Invalid input, please try again!"));
    }

    #[test]
    fn test_pick_up_and_drop_on_other_list() {
        let mut app = App::default();
        let id = add(&mut app, "Build shed");

        assert!(app.pick_up());
        assert_eq!(app.drag, Some(DragPayload { project_id: id.clone(), origin: ProjectStatus::Active }));

        app.focus_list(ProjectStatus::Finished);
        app.drop_on_focused();

        assert!(app.drag.is_none());
        assert_eq!(app.store.get(&id).unwrap().status, ProjectStatus::Finished);
        assert!(app.active.borrow().is_empty());
        assert_eq!(app.finished.borrow().selected_project().unwrap().id, id);
        assert_eq!(app.focused_list, ProjectStatus::Finished);
    }

    #[test]
    fn test_drop_on_origin_list_is_silent() {
        let mut app = App::default();
        let id = add(&mut app, "Build shed");

        app.toggle_drag();
        assert!(app.status_message.is_some());
        app.toggle_drag();

        assert!(app.drag.is_none());
        assert_eq!(app.store.get(&id).unwrap().status, ProjectStatus::Active);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_pick_up_from_empty_list() {
        let mut app = App::default();
        assert!(!app.pick_up());
        assert!(app.drag.is_none());
    }

    #[test]
    fn test_drop_of_unknown_project_reports_error() {
        let mut app = App::default();
        app.drag = Some(DragPayload {
            project_id: ProjectId::from("gone"),
            origin: ProjectStatus::Active,
        });
        app.focus_list(ProjectStatus::Finished);

        app.drop_on_focused();

        let expected = DomainError::ProjectNotFound("gone".to_string()).to_string();
        assert_eq!(app.status_message, Some(expected));
    }

    #[test]
    fn test_cancel_drag() {
        let mut app = App::default();
        add(&mut app, "Build shed");
        app.pick_up();
        app.cancel_drag();
        assert!(app.drag.is_none());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_move_selected_round_trip() {
        let mut app = App::default();
        add(&mut app, "First project");
        let second = add(&mut app, "Second project");
        app.select_next();

        app.move_selected();
        assert_eq!(app.store.get(&second).unwrap().status, ProjectStatus::Finished);
        assert_eq!(app.focused_list, ProjectStatus::Finished);

        app.move_selected();
        assert_eq!(app.store.get(&second).unwrap().status, ProjectStatus::Active);
        assert_eq!(app.focused().selected_project().unwrap().id, second);
    }

    #[test]
    fn test_lists_always_partition_store() {
        let mut app = App::default();
        for i in 0..6 {
            add(&mut app, &format!("Project {i}"));
        }
        app.move_selected();
        app.toggle_list_focus();
        app.select_next();
        app.select_next();
        app.move_selected();

        let total = app.active.borrow().len() + app.finished.borrow().len();
        assert_eq!(total, app.store.len());
        for project in app.store.projects() {
            let in_view = app.list(project.status).borrow().projects.iter().any(|p| p.id == project.id);
            assert!(in_view);
        }
    }

    #[test]
    fn test_start_csv_export() {
        let mut app = App::default();
        app.start_csv_export();

        assert_eq!(app.mode, AppMode::ExportCsv);
        assert_eq!(app.filename_input, DEFAULT_EXPORT_PATH);
        assert_eq!(app.filename_cursor, DEFAULT_EXPORT_PATH.len());
    }

    #[test]
    fn test_get_csv_export_filename() {
        let mut app = App::default();
        assert_eq!(app.get_csv_export_filename(), DEFAULT_EXPORT_PATH);
        app.filename_input = " board.csv ".to_string();
        assert_eq!(app.get_csv_export_filename(), "board.csv");
    }

    #[test]
    fn test_set_csv_export_result() {
        let mut app = App::default();
        app.start_csv_export();
        app.set_csv_export_result(Ok("board.csv".to_string()));
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.export_path, "board.csv");
        assert!(app.status_message.as_ref().unwrap().contains("board.csv"));

        app.start_csv_export();
        app.set_csv_export_result(Err(DomainError::Export("disk full".to_string())));
        assert_eq!(app.export_path, "board.csv");
        assert!(app.status_message.unwrap().contains("disk full"));
        assert!(app.filename_input.is_empty());
    }
}
