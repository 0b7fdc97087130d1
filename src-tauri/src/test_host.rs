use std::cell::{Cell, RefCell};

use crate::{
    shell_host::ShellHost,
    window_bootstrap::{LoadTarget, WindowSpec},
};

/// In-memory host that records what the shell asked of it.
#[derive(Default)]
pub(crate) struct RecordingHost {
    created: RefCell<Vec<(WindowSpec, String)>>,
    exit_codes: RefCell<Vec<i32>>,
    next_window_id: Cell<u32>,
    create_error: Option<String>,
}

impl RecordingHost {
    pub(crate) fn failing(error: &str) -> Self {
        Self {
            create_error: Some(error.to_string()),
            ..Self::default()
        }
    }

    pub(crate) fn created_windows(&self) -> Vec<(WindowSpec, String)> {
        self.created.borrow().clone()
    }

    pub(crate) fn exit_codes(&self) -> Vec<i32> {
        self.exit_codes.borrow().clone()
    }
}

impl ShellHost for RecordingHost {
    type Window = u32;

    fn create_window(&self, spec: &WindowSpec, target: &LoadTarget) -> Result<u32, String> {
        if let Some(error) = &self.create_error {
            return Err(error.clone());
        }
        self.created.borrow_mut().push((*spec, target.to_string()));
        let id = self.next_window_id.get() + 1;
        self.next_window_id.set(id);
        Ok(id)
    }

    fn terminate(&self, exit_code: i32) {
        self.exit_codes.borrow_mut().push(exit_code);
    }
}
