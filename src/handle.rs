//! Resource handles: page-lifetime references to local file data.
//!
//! A [`ResourceHandle`] is created by a [`HandleStore`] and revokes itself
//! through the same store when dropped, so every path that discards a handle
//! (a newer upload, a reset, teardown of the owner) releases it.

use std::fmt;
use std::rc::Rc;

use crate::error::IntakeError;

/// A file offered by the user, described by what the platform declares
/// about it.
pub trait CandidateFile {
    /// File name as reported by the platform.
    fn name(&self) -> String;
    /// Declared media type. Empty when the platform could not tell.
    fn media_type(&self) -> String;
    /// Size in bytes.
    fn size(&self) -> u64;
}

/// Creates and releases dereferenceable addresses for local file data.
pub trait HandleStore {
    /// File type this store can create handles for.
    type File: CandidateFile;

    /// Bind the file's bytes to a new address string.
    ///
    /// # Errors
    ///
    /// [`IntakeError::HandleCreation`] when the platform refuses.
    fn create(&self, file: &Self::File) -> Result<String, IntakeError>;

    /// Release an address previously returned by [`create`](Self::create).
    fn revoke(&self, address: &str);
}

/// Owned, self-releasing reference to one file's data.
pub struct ResourceHandle<S: HandleStore> {
    address: String,
    file_name: String,
    size: u64,
    store: Rc<S>,
}

impl<S: HandleStore> ResourceHandle<S> {
    /// Create a handle for `file` through `store`.
    ///
    /// # Errors
    ///
    /// Whatever [`HandleStore::create`] returns.
    pub fn acquire(store: &Rc<S>, file: &S::File) -> Result<Self, IntakeError> {
        let address = store.create(file)?;
        log::debug!("acquired resource handle {address}");
        Ok(Self {
            address,
            file_name: file.name(),
            size: file.size(),
            store: Rc::clone(store),
        })
    }

    /// Address string the viewer dereferences.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Name of the file the handle refers to.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Size of the referenced file in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }
}

impl<S: HandleStore> Drop for ResourceHandle<S> {
    fn drop(&mut self) {
        log::debug!("releasing resource handle {}", self.address);
        self.store.revoke(&self.address);
    }
}

impl<S: HandleStore> fmt::Debug for ResourceHandle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceHandle")
            .field("address", &self.address)
            .field("file_name", &self.file_name)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}
