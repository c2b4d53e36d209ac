//! Browser implementations of the platform capabilities.
//!
//! - [`ObjectUrls`]: resource handles as `blob:` object URLs.
//! - [`NutrientViewer`]: the viewer widget registered as a page global.
//! - [`AlertNotifier`]: blocking notifications through `window.alert`.
//!
//! Plus helpers that pull [`File`]s out of DOM events.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, DragEvent, Element, Event, File, FileList, HtmlInputElement, Url,
};

use crate::error::IntakeError;
use crate::handle::{CandidateFile, HandleStore};
use crate::intake::Notifier;
use crate::viewer::ViewerWidget;

/// Route `log` output and panics to the browser console. Call once at
/// startup.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::warn!("logger already initialized");
    }
}

// ── Files ────────────────────────────────────────────────────────────────

impl CandidateFile for File {
    fn name(&self) -> String {
        File::name(self)
    }

    fn media_type(&self) -> String {
        self.type_()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn size(&self) -> u64 {
        Blob::size(self) as u64
    }
}

fn collect_files(list: Option<FileList>) -> Vec<File> {
    list.map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
        .unwrap_or_default()
}

/// Files carried by a drop event, in the order the browser lists them.
#[must_use]
pub fn dropped_files(event: &DragEvent) -> Vec<File> {
    collect_files(event.data_transfer().and_then(|dt| dt.files()))
}

/// Files chosen in a file input, taken from its `change` event.
///
/// The input is cleared afterwards so choosing the same file again fires
/// another `change`.
#[must_use]
pub fn take_selected_files(event: &Event) -> Vec<File> {
    let Some(input) = event
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
    else {
        return Vec::new();
    };
    let files = collect_files(input.files());
    input.set_value("");
    files
}

/// Look up the element with the given DOM id.
#[must_use]
pub fn element_by_id(id: &str) -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

// ── Resource handles ─────────────────────────────────────────────────────

/// Object URLs via `URL.createObjectURL` / `URL.revokeObjectURL`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ObjectUrls;

impl HandleStore for ObjectUrls {
    type File = File;

    fn create(&self, file: &File) -> Result<String, IntakeError> {
        Url::create_object_url_with_blob(file)
            .map_err(|e| IntakeError::HandleCreation(format!("{e:?}")))
    }

    fn revoke(&self, address: &str) {
        if let Err(e) = Url::revoke_object_url(address) {
            log::error!("failed to revoke {address}: {e:?}");
        }
    }
}

// ── Notifications ────────────────────────────────────────────────────────

/// `window.alert`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify_blocking(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("no window to show: {message}");
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::error!("alert failed: {e:?}");
        }
    }
}

// ── Viewer widget ────────────────────────────────────────────────────────

#[wasm_bindgen]
extern "C" {
    /// The viewer global: an object with `load(options)` and
    /// `unload(container)`.
    type ViewerGlobal;

    #[wasm_bindgen(method, catch)]
    fn load(this: &ViewerGlobal, options: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn unload(this: &ViewerGlobal, container: &Element)
        -> Result<JsValue, JsValue>;
}

/// Nutrient Viewer, looked up on `window` by name on every call so a script
/// that finishes loading late is still picked up.
#[derive(Debug, Clone)]
pub struct NutrientViewer {
    global_name: String,
}

impl NutrientViewer {
    /// Bind to the global called `global_name`.
    #[must_use]
    pub fn new(global_name: &str) -> Self {
        Self {
            global_name: global_name.to_owned(),
        }
    }

    fn global(&self) -> Option<ViewerGlobal> {
        let window = web_sys::window()?;
        let value =
            js_sys::Reflect::get(&window, &JsValue::from_str(&self.global_name))
                .ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        Some(value.unchecked_into())
    }
}

impl ViewerWidget for NutrientViewer {
    type Target = Element;

    fn is_available(&self) -> bool {
        self.global().is_some()
    }

    fn load(&self, target: &Element, document: &str) {
        let Some(viewer) = self.global() else {
            return;
        };

        let options = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &options,
            &JsValue::from_str("container"),
            target,
        );
        let _ = js_sys::Reflect::set(
            &options,
            &JsValue::from_str("document"),
            &JsValue::from_str(document),
        );

        match viewer.load(&options) {
            // The render itself is not awaited; a rejection is only logged.
            Ok(result) => {
                if let Ok(promise) = result.dyn_into::<js_sys::Promise>() {
                    wasm_bindgen_futures::spawn_local(async move {
                        if let Err(e) = JsFuture::from(promise).await {
                            log::error!("viewer failed to render document: {e:?}");
                        }
                    });
                }
            }
            Err(e) => log::error!("viewer load threw: {e:?}"),
        }
    }

    fn unload(&self, target: &Element) {
        let Some(viewer) = self.global() else {
            return;
        };
        if let Err(e) = viewer.unload(target) {
            log::warn!("viewer unload threw: {e:?}");
        }
    }
}
