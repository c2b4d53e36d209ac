//! Intake controller: file validation, drag feedback and the upload state.
//!
//! Drops and file-picker selections both end up in
//! [`IntakeController::accept_file`]. A refused file is reported through the
//! injected [`Notifier`] and leaves the state untouched. An accepted file
//! replaces whatever was being viewed; the old [`ResourceHandle`] is dropped,
//! and therefore released, before the new one is created.

use std::rc::Rc;

use crate::error::IntakeError;
use crate::handle::{CandidateFile, HandleStore, ResourceHandle};
use crate::options::Options;

/// Shows a message the user has to acknowledge.
pub trait Notifier {
    /// Present `message` as a blocking notification.
    fn notify_blocking(&self, message: &str);
}

/// What the page is showing.
#[derive(Debug)]
pub enum UploadState<S: HandleStore> {
    /// Upload prompt.
    Idle,
    /// Viewer screen, owning the handle of the file being viewed.
    Viewing(ResourceHandle<S>),
}

impl<S: HandleStore> Default for UploadState<S> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<S: HandleStore> UploadState<S> {
    /// Whether this is the [`Idle`](Self::Idle) state.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Handle of the file being viewed, if any.
    #[must_use]
    pub fn handle(&self) -> Option<&ResourceHandle<S>> {
        match self {
            Self::Idle => None,
            Self::Viewing(handle) => Some(handle),
        }
    }
}

/// Owns the upload state and the drop-zone feedback flag.
pub struct IntakeController<S: HandleStore> {
    store: Rc<S>,
    notifier: Rc<dyn Notifier>,
    accepted_media_type: String,
    size_limit: Option<u64>,
    rejected_message: String,
    state: UploadState<S>,
    drag_active: bool,
}

impl<S: HandleStore> IntakeController<S> {
    /// Create an idle controller.
    #[must_use]
    pub fn new(
        store: Rc<S>,
        notifier: Rc<dyn Notifier>,
        options: &Options,
    ) -> Self {
        Self {
            store,
            notifier,
            accepted_media_type: options.intake.accepted_media_type.clone(),
            size_limit: options.intake.enforced_limit(),
            rejected_message: options.labels.rejected.clone(),
            state: UploadState::Idle,
            drag_active: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────────

    /// Current upload state.
    #[must_use]
    pub fn state(&self) -> &UploadState<S> {
        &self.state
    }

    /// Whether a file is being viewed.
    #[must_use]
    pub fn is_viewing(&self) -> bool {
        !self.state.is_idle()
    }

    /// Address of the document being viewed.
    #[must_use]
    pub fn document_address(&self) -> Option<&str> {
        self.state.handle().map(ResourceHandle::address)
    }

    /// Name of the file being viewed.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.state.handle().map(ResourceHandle::file_name)
    }

    /// Whether the drop zone should show drag feedback. Always false while
    /// viewing.
    #[must_use]
    pub fn is_drag_active(&self) -> bool {
        self.drag_active && self.state.is_idle()
    }

    // ── Transitions ──────────────────────────────────────────────────────

    /// Validate `file` and, if it is accepted, start viewing it.
    ///
    /// On refusal the user is notified and the state is unchanged.
    ///
    /// # Errors
    ///
    /// [`IntakeError::UnsupportedType`] when the declared media type is not
    /// the accepted one, [`IntakeError::TooLarge`] when size enforcement is
    /// on and the file exceeds it, and [`IntakeError::HandleCreation`] when
    /// the store refuses the file. The last one also ends any previous
    /// viewing session, since the old handle is released first.
    pub fn accept_file(
        &mut self,
        file: &S::File,
    ) -> Result<&ResourceHandle<S>, IntakeError> {
        self.drag_active = false;
        if let Err(err) = self.validate(file) {
            log::warn!("refused {:?}: {err}", file.name());
            self.notify(&err);
            return Err(err);
        }

        // Release the previous handle before creating the next one.
        self.state = UploadState::Idle;
        match ResourceHandle::acquire(&self.store, file) {
            Ok(handle) => {
                log::info!(
                    "viewing {:?} ({} bytes)",
                    handle.file_name(),
                    handle.size()
                );
                self.state = UploadState::Viewing(handle);
                self.state.handle().ok_or_else(|| {
                    IntakeError::HandleCreation("handle was not kept".to_owned())
                })
            }
            Err(err) => {
                log::warn!("could not open {:?}: {err}", file.name());
                self.notify(&err);
                Err(err)
            }
        }
    }

    /// Accept the first of several offered files; the rest are ignored.
    ///
    /// Returns `None` when nothing was offered. Errors are those of
    /// [`accept_file`](Self::accept_file).
    pub fn accept_first<I>(
        &mut self,
        files: I,
    ) -> Option<Result<&ResourceHandle<S>, IntakeError>>
    where
        I: IntoIterator<Item = S::File>,
    {
        let mut files = files.into_iter();
        let first = files.next()?;
        let ignored = files.count();
        if ignored > 0 {
            log::debug!("ignoring {ignored} additional file(s)");
        }
        Some(self.accept_file(&first))
    }

    /// Return to the upload prompt, releasing the current handle.
    ///
    /// Returns whether anything was being viewed.
    pub fn reset(&mut self) -> bool {
        self.drag_active = false;
        match std::mem::take(&mut self.state) {
            UploadState::Idle => false,
            UploadState::Viewing(handle) => {
                log::info!("closing {:?}", handle.file_name());
                true
            }
        }
    }

    // ── Drop zone ────────────────────────────────────────────────────────

    /// A drag entered the drop zone.
    pub fn drag_enter(&mut self) {
        self.drag_over();
    }

    /// A drag is moving over the drop zone.
    pub fn drag_over(&mut self) {
        if self.state.is_idle() {
            self.drag_active = true;
        }
    }

    /// The drag left the drop zone.
    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    /// Files were dropped on the zone. Clears drag feedback whatever the
    /// outcome, then accepts the first file.
    pub fn drop_files<I>(
        &mut self,
        files: I,
    ) -> Option<Result<&ResourceHandle<S>, IntakeError>>
    where
        I: IntoIterator<Item = S::File>,
    {
        self.drag_active = false;
        self.accept_first(files)
    }

    fn validate(&self, file: &S::File) -> Result<(), IntakeError> {
        let media_type = file.media_type();
        if media_type != self.accepted_media_type {
            return Err(IntakeError::UnsupportedType { media_type });
        }
        if let Some(limit) = self.size_limit {
            let size = file.size();
            if size > limit {
                return Err(IntakeError::TooLarge { size, limit });
            }
        }
        Ok(())
    }

    fn notify(&self, err: &IntakeError) {
        match err {
            IntakeError::UnsupportedType { .. } => {
                self.notifier.notify_blocking(&self.rejected_message);
            }
            _ => self.notifier.notify_blocking(&err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::PDF_MEDIA_TYPE;
    use crate::testing::{FakeFile, FakeStore, RecordingNotifier};

    fn controller(
        options: &Options,
    ) -> (IntakeController<FakeStore>, Rc<FakeStore>, RecordingNotifier) {
        let store = Rc::new(FakeStore::default());
        let notifier = RecordingNotifier::default();
        let controller = IntakeController::new(
            Rc::clone(&store),
            Rc::new(notifier.clone()),
            options,
        );
        (controller, store, notifier)
    }

    #[test]
    fn pdf_moves_idle_to_viewing() {
        let (mut intake, store, notifier) = controller(&Options::default());
        assert!(intake.state().is_idle());

        let address = intake
            .accept_file(&FakeFile::pdf("report.pdf"))
            .unwrap()
            .address()
            .to_owned();

        assert!(intake.is_viewing());
        assert_eq!(intake.document_address(), Some(address.as_str()));
        assert_eq!(intake.file_name(), Some("report.pdf"));
        assert_eq!(store.live(), vec![address]);
        assert!(notifier.messages().is_empty());
    }

    #[test]
    fn non_pdf_stays_idle_and_notifies_once() {
        let (mut intake, store, notifier) = controller(&Options::default());

        let err = intake
            .accept_file(&FakeFile::new("photo.png", "image/png", 10))
            .unwrap_err();

        assert_eq!(
            err,
            IntakeError::UnsupportedType {
                media_type: "image/png".to_owned()
            }
        );
        assert!(intake.state().is_idle());
        assert_eq!(notifier.messages(), vec!["Please upload a valid PDF file."]);
        assert!(store.live().is_empty());
    }

    #[test]
    fn media_type_must_match_exactly() {
        let (mut intake, _, notifier) = controller(&Options::default());

        assert!(intake
            .accept_file(&FakeFile::new("a.pdf", "application/pdf; v=1", 1))
            .is_err());
        assert!(intake
            .accept_file(&FakeFile::new("a.pdf", "APPLICATION/PDF", 1))
            .is_err());
        assert!(intake.accept_file(&FakeFile::new("a.pdf", "", 1)).is_err());
        assert_eq!(notifier.messages().len(), 3);
    }

    #[test]
    fn refused_file_keeps_current_document() {
        let (mut intake, store, _) = controller(&Options::default());
        let _ = intake.accept_file(&FakeFile::pdf("a.pdf")).unwrap();
        let before = intake.document_address().map(str::to_owned);

        assert!(intake
            .accept_file(&FakeFile::new("b.txt", "text/plain", 1))
            .is_err());

        assert_eq!(intake.document_address().map(str::to_owned), before);
        assert_eq!(store.live().len(), 1);
    }

    #[test]
    fn reset_releases_handle_and_is_idempotent() {
        let (mut intake, store, _) = controller(&Options::default());
        let _ = intake.accept_file(&FakeFile::pdf("a.pdf")).unwrap();

        assert!(intake.reset());
        assert!(intake.state().is_idle());
        assert!(store.live().is_empty());
        assert_eq!(store.revoked().len(), 1);

        assert!(!intake.reset());
        assert_eq!(store.revoked().len(), 1);
    }

    #[test]
    fn sequential_uploads_keep_one_live_handle() {
        let (mut intake, store, _) = controller(&Options::default());

        let _ = intake.accept_file(&FakeFile::pdf("a.pdf")).unwrap();
        let _ = intake.accept_file(&FakeFile::pdf("b.pdf")).unwrap();
        assert_eq!(store.live(), vec!["blob:fake/2".to_owned()]);
        assert_eq!(store.revoked(), vec!["blob:fake/1".to_owned()]);

        assert!(intake.reset());
        let _ = intake.accept_file(&FakeFile::pdf("c.pdf")).unwrap();
        assert_eq!(store.live(), vec!["blob:fake/3".to_owned()]);
        assert_eq!(intake.file_name(), Some("c.pdf"));
    }

    #[test]
    fn only_first_offered_file_is_considered() {
        let (mut intake, store, notifier) = controller(&Options::default());

        let result = intake.accept_first(vec![
            FakeFile::pdf("first.pdf"),
            FakeFile::new("second.png", "image/png", 1),
        ]);
        assert!(matches!(result, Some(Ok(_))));
        assert_eq!(intake.file_name(), Some("first.pdf"));
        assert_eq!(store.live().len(), 1);
        assert!(notifier.messages().is_empty());

        assert!(intake.accept_first(Vec::<FakeFile>::new()).is_none());
        assert_eq!(intake.file_name(), Some("first.pdf"));
    }

    #[test]
    fn drag_feedback_follows_the_pointer() {
        let (mut intake, _, _) = controller(&Options::default());

        intake.drag_enter();
        assert!(intake.is_drag_active());
        intake.drag_leave();
        assert!(!intake.is_drag_active());

        intake.drag_over();
        assert!(intake.is_drag_active());
        let _ = intake.drop_files(vec![FakeFile::new("x.doc", "text/x", 1)]);
        assert!(!intake.is_drag_active());
        assert!(intake.state().is_idle());

        intake.drag_over();
        let _ = intake.drop_files(vec![FakeFile::pdf("a.pdf")]);
        assert!(!intake.is_drag_active());
        assert!(intake.is_viewing());
    }

    #[test]
    fn drag_feedback_is_never_active_while_viewing() {
        let (mut intake, _, _) = controller(&Options::default());
        let _ = intake.accept_file(&FakeFile::pdf("a.pdf")).unwrap();

        intake.drag_over();
        assert!(!intake.is_drag_active());

        assert!(intake.reset());
        assert!(!intake.is_drag_active());
    }

    #[test]
    fn empty_drop_clears_feedback() {
        let (mut intake, _, _) = controller(&Options::default());
        intake.drag_over();
        assert!(intake.drop_files(Vec::new()).is_none());
        assert!(!intake.is_drag_active());
    }

    #[test]
    fn size_limit_is_only_enforced_when_enabled() {
        let big = FakeFile::new("big.pdf", PDF_MEDIA_TYPE, 20 * 1024 * 1024);

        let (mut hint_only, _, _) = controller(&Options::default());
        assert!(hint_only.accept_file(&big).is_ok());

        let mut options = Options::default();
        options.intake.enforce_max_size = true;
        let (mut strict, store, notifier) = controller(&options);
        let err = strict.accept_file(&big).unwrap_err();
        assert!(matches!(err, IntakeError::TooLarge { .. }));
        assert!(strict.state().is_idle());
        assert!(store.live().is_empty());
        assert_eq!(notifier.messages(), vec![err.to_string()]);
    }

    #[test]
    fn handle_creation_failure_returns_to_idle() {
        let store = Rc::new(FakeStore::refusing());
        let notifier = RecordingNotifier::default();
        let mut intake = IntakeController::new(
            store,
            Rc::new(notifier.clone()),
            &Options::default(),
        );

        let err = intake.accept_file(&FakeFile::pdf("a.pdf")).unwrap_err();
        assert!(matches!(err, IntakeError::HandleCreation(_)));
        assert!(intake.state().is_idle());
        assert_eq!(notifier.messages().len(), 1);
    }

    #[test]
    fn dropping_controller_releases_handle() {
        let (mut intake, store, _) = controller(&Options::default());
        let _ = intake.accept_file(&FakeFile::pdf("a.pdf")).unwrap();
        drop(intake);
        assert!(store.live().is_empty());
    }
}
