//! Viewer adapter: keeps the external viewer widget mounted on the right
//! container with the right document.
//!
//! The adapter is driven by [`ViewerAdapter::sync`], which is called with
//! whatever mount target and document are current. It issues the minimum
//! `unload`/`load` calls to get there: never a second `load` on a container
//! that already has an instance, never an `unload` on one that has none.
//!
//! ```
//! # use std::cell::RefCell;
//! # use pdfdrop::viewer::{ViewerAdapter, ViewerWidget};
//! #[derive(Default)]
//! struct Log(RefCell<Vec<String>>);
//!
//! impl ViewerWidget for Log {
//!     type Target = u32;
//!     fn is_available(&self) -> bool { true }
//!     fn load(&self, target: &u32, document: &str) {
//!         self.0.borrow_mut().push(format!("load {target} {document}"));
//!     }
//!     fn unload(&self, target: &u32) {
//!         self.0.borrow_mut().push(format!("unload {target}"));
//!     }
//! }
//!
//! let mut adapter = ViewerAdapter::new(Log::default());
//! adapter.sync(Some(&1), Some("blob:a"));
//! adapter.sync(Some(&1), Some("blob:b"));
//! adapter.sync(None, None);
//! assert_eq!(
//!     *adapter.widget().0.borrow(),
//!     ["load 1 blob:a", "unload 1", "load 1 blob:b", "unload 1"],
//! );
//! ```

/// An external document viewer that renders into a container element.
pub trait ViewerWidget {
    /// Container the widget mounts into.
    type Target: Clone + PartialEq;

    /// Whether the widget is present on the page.
    fn is_available(&self) -> bool;

    /// Start rendering `document` into `target`. Rendering may finish later;
    /// the caller does not wait for it.
    fn load(&self, target: &Self::Target, document: &str);

    /// Tear down whatever is rendered in `target`.
    fn unload(&self, target: &Self::Target);
}

/// What a call to [`ViewerAdapter::sync`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Nothing changed.
    Unchanged,
    /// A new instance was loaded.
    Mounted,
    /// The previous instance was unloaded and nothing replaced it.
    Unmounted,
    /// The previous instance was unloaded and a new one loaded.
    Remounted,
    /// A load was wanted but the widget is not on the page yet.
    WidgetMissing,
}

struct Mounted<T> {
    target: T,
    document: String,
}

/// Issues mount/unmount commands to a [`ViewerWidget`].
///
/// Dropping the adapter unmounts whatever it mounted.
pub struct ViewerAdapter<W: ViewerWidget> {
    widget: W,
    mounted: Option<Mounted<W::Target>>,
}

impl<W: ViewerWidget> ViewerAdapter<W> {
    /// Wrap a widget. Nothing is mounted yet.
    #[must_use]
    pub fn new(widget: W) -> Self {
        Self {
            widget,
            mounted: None,
        }
    }

    /// The wrapped widget.
    #[must_use]
    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Whether an instance is currently mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Document currently mounted, if any.
    #[must_use]
    pub fn mounted_document(&self) -> Option<&str> {
        self.mounted.as_ref().map(|m| m.document.as_str())
    }

    /// Bring the widget in line with the current target and document.
    ///
    /// A mount is wanted only when both are present. A changed target or
    /// document unloads the old instance before loading the new one.
    pub fn sync(
        &mut self,
        target: Option<&W::Target>,
        document: Option<&str>,
    ) -> SyncOutcome {
        let wanted = target.zip(document);

        if let Some(current) = &self.mounted {
            let unchanged = wanted.is_some_and(|(t, d)| {
                *t == current.target && d == current.document
            });
            if unchanged {
                return SyncOutcome::Unchanged;
            }
        }

        let unloaded = self.unmount();

        let Some((target, document)) = wanted else {
            return if unloaded {
                SyncOutcome::Unmounted
            } else {
                SyncOutcome::Unchanged
            };
        };

        if !self.widget.is_available() {
            log::debug!("viewer widget not available, deferring load");
            return SyncOutcome::WidgetMissing;
        }

        log::debug!("loading {document} into viewer");
        self.widget.load(target, document);
        self.mounted = Some(Mounted {
            target: target.clone(),
            document: document.to_owned(),
        });

        if unloaded {
            SyncOutcome::Remounted
        } else {
            SyncOutcome::Mounted
        }
    }

    /// Unload the mounted instance, if any. Returns whether one was mounted.
    pub fn unmount(&mut self) -> bool {
        let Some(current) = self.mounted.take() else {
            return false;
        };
        if self.widget.is_available() {
            log::debug!("unloading {} from viewer", current.document);
            self.widget.unload(&current.target);
        } else {
            log::debug!("viewer widget gone, dropping mount record");
        }
        true
    }
}

impl<W: ViewerWidget> Drop for ViewerAdapter<W> {
    fn drop(&mut self) {
        let _ = self.unmount();
    }
}
