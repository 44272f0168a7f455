use std::cell::RefCell;
use std::rc::Rc;

/// Callbacks into the editing core.
///
/// The menu engine dispatches here and ignores results; nothing in the core
/// depends on what a handler does. Open and Quit are handled inside the core
/// itself, so they have no callback.
pub trait EditorActions {
    fn save(&mut self, _name: Option<&str>) {}
    fn copy(&mut self) {}
    fn paste(&mut self) {}
    fn find(&mut self) {}
    fn replace(&mut self) {}
    fn undo(&mut self) {}
    fn redo(&mut self) {}
    fn about(&mut self) {}
    fn website(&mut self) {}
}

/// Editing core that is not written yet.
pub struct NullActions;

impl EditorActions for NullActions {}

#[derive(Clone, Debug, PartialEq, Eq)]
#[allow(dead_code)] // Used by integration tests
pub enum ActionCall {
    Save(Option<String>),
    Copy,
    Paste,
    Find,
    Replace,
    Undo,
    Redo,
    About,
    Website,
}

/// Records every call for dispatch assertions. Clones share the same log,
/// so tests can keep a handle while the editor owns the other.
#[derive(Clone, Default)]
#[allow(dead_code)] // Used by integration tests
pub struct RecordingActions {
    calls: Rc<RefCell<Vec<ActionCall>>>,
}

impl RecordingActions {
    #[allow(dead_code)] // Used by integration tests
    pub fn calls(&self) -> Vec<ActionCall> {
        self.calls.borrow().clone()
    }
}

impl EditorActions for RecordingActions {
    fn save(&mut self, name: Option<&str>) {
        self.calls
            .borrow_mut()
            .push(ActionCall::Save(name.map(str::to_string)));
    }
    fn copy(&mut self) {
        self.calls.borrow_mut().push(ActionCall::Copy);
    }
    fn paste(&mut self) {
        self.calls.borrow_mut().push(ActionCall::Paste);
    }
    fn find(&mut self) {
        self.calls.borrow_mut().push(ActionCall::Find);
    }
    fn replace(&mut self) {
        self.calls.borrow_mut().push(ActionCall::Replace);
    }
    fn undo(&mut self) {
        self.calls.borrow_mut().push(ActionCall::Undo);
    }
    fn redo(&mut self) {
        self.calls.borrow_mut().push(ActionCall::Redo);
    }
    fn about(&mut self) {
        self.calls.borrow_mut().push(ActionCall::About);
    }
    fn website(&mut self) {
        self.calls.borrow_mut().push(ActionCall::Website);
    }
}
