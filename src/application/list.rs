//! Per-status project views fed by store notifications.

use crate::domain::{Project, ProjectId, ProjectStatus, ProjectStore, Snapshot};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a list view; the store's listener holds the other clone.
pub type ListHandle = Rc<RefCell<ProjectList>>;

/// The projects of one status, in store order, plus a selection cursor.
#[derive(Debug, Clone)]
pub struct ProjectList {
    pub kind: ProjectStatus,
    pub projects: Vec<Project>,
    pub selected: usize,
}

impl ProjectList {
    pub fn new(kind: ProjectStatus) -> Self {
        Self {
            kind,
            projects: Vec::new(),
            selected: 0,
        }
    }

    /// Creates an empty view and subscribes it to `store`.
    ///
    /// The view fills in on the next notification; it does not read the
    /// store's current contents.
    pub fn attach(store: &mut ProjectStore, kind: ProjectStatus) -> ListHandle {
        let handle = Rc::new(RefCell::new(Self::new(kind)));
        let view = Rc::clone(&handle);
        store.subscribe(move |snapshot| view.borrow_mut().refresh(&snapshot));
        handle
    }

    /// Replaces the view's contents with the matching projects of `snapshot`.
    pub fn refresh(&mut self, snapshot: &Snapshot) {
        self.projects = snapshot
            .iter()
            .filter(|p| p.status == self.kind)
            .cloned()
            .collect();
        self.clamp_selection();
    }

    pub fn title(&self) -> String {
        format!("{} PROJECTS", self.kind.label())
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.projects.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.projects.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Points the selection at the project with `id`, if this view has it.
    pub fn select_id(&mut self, id: &ProjectId) -> bool {
        match self.projects.iter().position(|p| &p.id == id) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.projects.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_starts_empty_and_subscribes() {
        let mut store = ProjectStore::new();
        store.add_project("Before attach", "", 1);

        let list = ProjectList::attach(&mut store, ProjectStatus::Active);

        assert!(list.borrow().is_empty());
        assert_eq!(store.listener_count(), 1);
    }

    #[test]
    fn test_views_partition_store_in_order() {
        let mut store = ProjectStore::new();
        let active = ProjectList::attach(&mut store, ProjectStatus::Active);
        let finished = ProjectList::attach(&mut store, ProjectStatus::Finished);

        let a = store.add_project("First project", "", 1);
        let b = store.add_project("Second project", "", 2);
        let c = store.add_project("Third project", "", 3);
        store.move_project(&b, ProjectStatus::Finished).unwrap();
        store.move_project(&a, ProjectStatus::Finished).unwrap();

        let active_ids: Vec<_> = active.borrow().projects.iter().map(|p| p.id.clone()).collect();
        let finished_ids: Vec<_> = finished.borrow().projects.iter().map(|p| p.id.clone()).collect();
        assert_eq!(active_ids, vec![c]);
        assert_eq!(finished_ids, vec![a, b]);
    }

    #[test]
    fn test_selection_is_clamped_after_refresh() {
        let mut store = ProjectStore::new();
        let active = ProjectList::attach(&mut store, ProjectStatus::Active);
        store.add_project("First project", "", 1);
        let last = store.add_project("Second project", "", 1);

        active.borrow_mut().select_next();
        assert_eq!(active.borrow().selected, 1);

        store.move_project(&last, ProjectStatus::Finished).unwrap();
        assert_eq!(active.borrow().selected, 0);
        assert_eq!(active.borrow().selected_project().unwrap().title, "First project");
    }

    #[test]
    fn test_navigation_bounds() {
        let mut list = ProjectList::new(ProjectStatus::Finished);
        list.select_previous();
        list.select_next();
        assert_eq!(list.selected, 0);
        assert!(list.selected_project().is_none());
        assert_eq!(list.title(), "FINISHED PROJECTS");
    }
}
