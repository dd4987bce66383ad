use crate::domain::areas::difftool::Difftool;
use crate::domain::areas::editor::{Editor, ScmProvider};
use crate::domain::areas::scratch::ScratchStore;
use std::cell::{Cell, RefCell, RefMut};

/// Whether a difftool run is currently in flight. Held by the launcher
/// itself so a second command added later cannot couple to it by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

/// Aggregates the collaborators one difftool command needs: the host editor
/// surface, the version-control provider, the scratch store, the tool
/// invocation, and the writer for user-facing notices.
pub struct Launcher {
    editor: Box<dyn Editor>,
    scm: Box<dyn ScmProvider>,
    scratch: ScratchStore,
    difftool: Difftool,
    writer: RefCell<Box<dyn std::io::Write>>,
    state: Cell<RunState>,
}

impl Launcher {
    pub fn new(
        editor: Box<dyn Editor>,
        scm: Box<dyn ScmProvider>,
        scratch: ScratchStore,
        difftool: Difftool,
        writer: Box<dyn std::io::Write>,
    ) -> Self {
        Launcher {
            editor,
            scm,
            scratch,
            difftool,
            writer: RefCell::new(writer),
            state: Cell::new(RunState::Idle),
        }
    }

    pub fn editor(&self) -> &dyn Editor {
        self.editor.as_ref()
    }

    pub fn scm(&self) -> &dyn ScmProvider {
        self.scm.as_ref()
    }

    pub fn scratch(&self) -> &ScratchStore {
        &self.scratch
    }

    pub fn difftool(&self) -> &Difftool {
        &self.difftool
    }

    pub fn writer(&self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn state(&self) -> RunState {
        self.state.get()
    }

    pub(crate) fn set_state(&self, state: RunState) {
        self.state.set(state);
    }
}
