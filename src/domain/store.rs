//! The in-memory project store.
//!
//! `ProjectStore` owns every project the application knows about and
//! broadcasts a snapshot of the whole list to its subscribers after each
//! mutation. Views never touch the store's projects directly; they keep
//! their own filtered copy built from the snapshots they receive.

use super::errors::{DomainError, DomainResult};
use super::models::{Project, ProjectId, ProjectStatus};
use log::debug;
use std::rc::Rc;

/// Immutable copy of the full project list at the time of a mutation.
///
/// A single snapshot is shared by every listener notified for that mutation.
pub type Snapshot = Rc<[Project]>;

/// Callback invoked with a fresh snapshot after every mutation.
pub type Listener = Box<dyn FnMut(Snapshot)>;

/// Authoritative, ordered collection of projects with change notification.
///
/// Notification is synchronous and follows registration order. Because the
/// store is borrowed mutably for the whole mutate-then-notify sequence, a
/// listener can never observe or trigger a second mutation midway.
///
/// # Examples
///
/// ```
/// use projdeck::domain::{ProjectStatus, ProjectStore};
///
/// let mut store = ProjectStore::new();
/// let id = store.add_project("Build shed", "weekend project", 3);
/// assert_eq!(store.move_project(&id, ProjectStatus::Finished), Ok(true));
/// assert_eq!(store.get(&id).map(|p| p.status), Some(ProjectStatus::Finished));
/// ```
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<Listener>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener. There is no way to unsubscribe; registering the
    /// same logic twice means it runs twice.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(Snapshot) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Appends a new `Active` project and notifies subscribers.
    ///
    /// Input is taken as-is: validation belongs to whoever collects it.
    pub fn add_project(&mut self, title: &str, description: &str, people: u32) -> ProjectId {
        let id = ProjectId::generate();
        self.projects.push(Project {
            id: id.clone(),
            title: title.to_string(),
            description: description.to_string(),
            people,
            status: ProjectStatus::Active,
        });
        debug!("event=project_added id={} count={}", id, self.projects.len());
        self.notify();
        id
    }

    /// Changes a project's status.
    ///
    /// Returns `Ok(true)` when the status changed and subscribers were
    /// notified, `Ok(false)` when the project already had `new_status`.
    /// An unknown id yields `ProjectNotFound`. Neither of the latter two
    /// touches the store or fires a notification.
    pub fn move_project(&mut self, id: &ProjectId, new_status: ProjectStatus) -> DomainResult<bool> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| DomainError::ProjectNotFound(id.to_string()))?;

        if project.status == new_status {
            return Ok(false);
        }

        project.status = new_status;
        debug!("event=project_moved id={} status={}", id, new_status);
        self.notify();
        Ok(true)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        let snapshot: Snapshot = self.projects.clone().into();
        for listener in self.listeners.iter_mut() {
            listener(Rc::clone(&snapshot));
        }
    }
}

impl std::fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.projects)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Subscribes a recorder that keeps every snapshot it receives.
    fn record(store: &mut ProjectStore) -> Rc<RefCell<Vec<Snapshot>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot));
        seen
    }

    #[test]
    fn test_add_preserves_call_order() {
        let mut store = ProjectStore::new();
        let seen = record(&mut store);

        let titles = ["Alpha project", "Beta project", "Gamma project"];
        for title in titles {
            store.add_project(title, "", 2);
        }

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        let last = seen.last().unwrap();
        assert_eq!(last.len(), 3);
        let got: Vec<&str> = last.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(got, titles);
    }

    #[test]
    fn test_added_projects_are_active_with_unique_ids() {
        let mut store = ProjectStore::new();
        let mut ids = Vec::new();
        for i in 0..50 {
            ids.push(store.add_project(&format!("Project {i}"), "", 1));
        }

        assert!(store.projects().iter().all(|p| p.status == ProjectStatus::Active));
        let mut unique = ids.clone();
        unique.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_add_example_snapshot() {
        let mut store = ProjectStore::new();
        let seen = record(&mut store);

        let id = store.add_project("Build shed", "weekend project", 3);

        let expected = Project {
            id: id.clone(),
            title: "Build shed".to_string(),
            description: "weekend project".to_string(),
            people: 3,
            status: ProjectStatus::Active,
        };
        assert_eq!(&*seen.borrow()[0], &[expected.clone()][..]);

        assert_eq!(store.move_project(&id, ProjectStatus::Finished), Ok(true));
        let finished = Project { status: ProjectStatus::Finished, ..expected };
        assert_eq!(&*seen.borrow()[1], &[finished][..]);
    }

    #[test]
    fn test_move_unknown_id_is_rejected_without_notification() {
        let mut store = ProjectStore::new();
        store.add_project("Existing one", "", 1);
        let seen = record(&mut store);
        let before = store.projects().to_vec();

        let result = store.move_project(&ProjectId::from("missing"), ProjectStatus::Finished);

        assert_eq!(result, Err(DomainError::ProjectNotFound("missing".to_string())));
        assert_eq!(store.projects(), &before[..]);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_move_to_same_status_is_noop() {
        let mut store = ProjectStore::new();
        let id = store.add_project("Existing one", "", 1);
        let seen = record(&mut store);
        let before = store.projects().to_vec();

        assert_eq!(store.move_project(&id, ProjectStatus::Active), Ok(false));

        assert_eq!(store.projects(), &before[..]);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_move_changes_only_target_and_notifies_once() {
        let mut store = ProjectStore::new();
        let first = store.add_project("First project", "", 1);
        let second = store.add_project("Second project", "", 2);
        let third = store.add_project("Third project", "", 3);
        let seen = record(&mut store);

        assert_eq!(store.move_project(&second, ProjectStatus::Finished), Ok(true));

        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(store.get(&first).unwrap().status, ProjectStatus::Active);
        assert_eq!(store.get(&second).unwrap().status, ProjectStatus::Finished);
        assert_eq!(store.get(&third).unwrap().status, ProjectStatus::Active);
        assert_eq!(&*seen.borrow()[0], store.projects());
    }

    #[test]
    fn test_listeners_called_in_registration_order_with_identical_snapshot() {
        let mut store = ProjectStore::new();
        let calls: Rc<RefCell<Vec<(usize, Snapshot)>>> = Rc::new(RefCell::new(Vec::new()));

        for n in 0..4 {
            let calls = Rc::clone(&calls);
            store.subscribe(move |snapshot| calls.borrow_mut().push((n, snapshot)));
        }
        store.add_project("Only project", "", 1);

        let calls = calls.borrow();
        let order: Vec<usize> = calls.iter().map(|(n, _)| *n).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
        assert!(calls.iter().all(|(_, s)| Rc::ptr_eq(s, &calls[0].1)));
    }

    #[test]
    fn test_duplicate_subscription_runs_twice() {
        let mut store = ProjectStore::new();
        let count = Rc::new(RefCell::new(0));
        for _ in 0..2 {
            let count = Rc::clone(&count);
            store.subscribe(move |_| *count.borrow_mut() += 1);
        }

        store.add_project("Counted project", "", 1);

        assert_eq!(store.listener_count(), 2);
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_snapshot_is_detached_from_store() {
        let mut store = ProjectStore::new();
        let seen = record(&mut store);
        let id = store.add_project("Detached one", "", 1);

        store.move_project(&id, ProjectStatus::Finished).unwrap();

        assert_eq!(seen.borrow()[0][0].status, ProjectStatus::Active);
        assert_eq!(seen.borrow()[1][0].status, ProjectStatus::Finished);
    }

    #[test]
    fn test_store_accepts_unvalidated_input() {
        let mut store = ProjectStore::new();
        store.add_project("", "", 0);
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
    }
}
