//! Test doubles for the platform capabilities.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::IntakeError;
use crate::handle::{CandidateFile, HandleStore};
use crate::intake::Notifier;
use crate::options::PDF_MEDIA_TYPE;
use crate::viewer::ViewerWidget;

#[derive(Debug, Clone)]
pub(crate) struct FakeFile {
    pub name: String,
    pub media_type: String,
    pub size: u64,
}

impl FakeFile {
    pub fn new(name: &str, media_type: &str, size: u64) -> Self {
        Self {
            name: name.to_owned(),
            media_type: media_type.to_owned(),
            size,
        }
    }

    pub fn pdf(name: &str) -> Self {
        Self::new(name, PDF_MEDIA_TYPE, 1024)
    }
}

impl CandidateFile for FakeFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn media_type(&self) -> String {
        self.media_type.clone()
    }

    fn size(&self) -> u64 {
        self.size
    }
}

/// Hands out `blob:fake/N` addresses and records which are still live.
#[derive(Debug, Default)]
pub(crate) struct FakeStore {
    next: Cell<u32>,
    refuse: bool,
    live: RefCell<Vec<String>>,
    revoked: RefCell<Vec<String>>,
}

impl FakeStore {
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    pub fn live(&self) -> Vec<String> {
        self.live.borrow().clone()
    }

    pub fn revoked(&self) -> Vec<String> {
        self.revoked.borrow().clone()
    }
}

impl HandleStore for FakeStore {
    type File = FakeFile;

    fn create(&self, file: &FakeFile) -> Result<String, IntakeError> {
        if self.refuse {
            return Err(IntakeError::HandleCreation(format!(
                "refused {}",
                file.name
            )));
        }
        let n = self.next.get() + 1;
        self.next.set(n);
        let address = format!("blob:fake/{n}");
        self.live.borrow_mut().push(address.clone());
        Ok(address)
    }

    fn revoke(&self, address: &str) {
        self.live.borrow_mut().retain(|a| a != address);
        self.revoked.borrow_mut().push(address.to_owned());
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct RecordingNotifier {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_blocking(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_owned());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WidgetCall {
    Load {
        target: &'static str,
        document: String,
    },
    Unload {
        target: &'static str,
    },
}

/// Widget double whose call log and availability are shared with the test.
#[derive(Debug, Clone)]
pub(crate) struct RecordingWidget {
    calls: Rc<RefCell<Vec<WidgetCall>>>,
    available: Rc<Cell<bool>>,
}

impl Default for RecordingWidget {
    fn default() -> Self {
        Self {
            calls: Rc::default(),
            available: Rc::new(Cell::new(true)),
        }
    }
}

impl RecordingWidget {
    pub fn calls(&self) -> Vec<WidgetCall> {
        self.calls.borrow().clone()
    }

    pub fn loads(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, WidgetCall::Load { .. }))
            .count()
    }

    pub fn unloads(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, WidgetCall::Unload { .. }))
            .count()
    }

    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }
}

impl ViewerWidget for RecordingWidget {
    type Target = &'static str;

    fn is_available(&self) -> bool {
        self.available.get()
    }

    fn load(&self, target: &&'static str, document: &str) {
        self.calls.borrow_mut().push(WidgetCall::Load {
            target: *target,
            document: document.to_owned(),
        });
    }

    fn unload(&self, target: &&'static str) {
        self.calls.borrow_mut().push(WidgetCall::Unload { target: *target });
    }
}
