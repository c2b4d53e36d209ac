//! Viewer screen: status bar, reset button and the widget container.

use std::rc::Rc;

use dioxus::prelude::*;
use pdfdrop::options::Options;
use pdfdrop::web;

use crate::{Adapter, Intake};

/// Shows the document being viewed.
///
/// The adapter is synced whenever the document or the container changes,
/// and unmounted when this screen goes away.
#[component]
#[allow(unused_qualifications)] // rsx! event handler expansion
pub fn ViewerScreen(
    mut intake: Signal<Intake>,
    mut adapter: Signal<Adapter>,
) -> Element {
    let options = use_context::<Rc<Options>>();
    let container_id = options.viewer.container_id.clone();
    let reset_label = options.labels.reset.clone();
    let status = intake
        .read()
        .file_name()
        .map(|name| options.labels.status(name))
        .unwrap_or_default();

    let mut target = use_signal(|| None::<web_sys::Element>);

    let _ = use_effect(move || {
        let document = intake.read().document_address().map(str::to_owned);
        let target = target.read().clone();
        let outcome = adapter.write().sync(target.as_ref(), document.as_deref());
        log::debug!("viewer sync: {outcome:?}");
    });

    use_drop(move || {
        if let Ok(mut adapter) = adapter.try_write() {
            let _ = adapter.unmount();
        }
    });

    let mount_id = container_id.clone();

    rsx! {
        div { class: "status-bar",
            span { class: "status", "{status}" }
            button {
                class: "reset-button",
                onclick: move |_| {
                    // Unmount before the handle goes away with the state.
                    let _ = adapter.write().unmount();
                    let _ = intake.write().reset();
                },
                "{reset_label}"
            }
        }
        div {
            id: "{container_id}",
            class: "viewer-container",
            onmounted: move |_| target.set(web::element_by_id(&mount_id)),
        }
    }
}
