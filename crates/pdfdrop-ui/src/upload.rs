//! Upload screen: drop zone with a file-picker fallback.
//!
//! Both paths go through the intake controller, which only looks at the
//! first file and reports refusals itself.

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus::web::WebEventExt;
use pdfdrop::options::Options;
use pdfdrop::web;

use crate::Intake;

/// Drop zone and browse button. Highlights while a drag is over it.
#[component]
#[allow(unused_qualifications)] // rsx! event handler expansion
pub fn UploadScreen(mut intake: Signal<Intake>) -> Element {
    let options = use_context::<Rc<Options>>();
    let labels = &options.labels;
    let (prompt, separator, browse, size_hint) = (
        labels.prompt.clone(),
        labels.separator.clone(),
        labels.browse.clone(),
        labels.size_hint.clone(),
    );
    let accept = options.intake.accepted_media_type.clone();

    let zone_class = if intake.read().is_drag_active() {
        "drop-zone drag-active"
    } else {
        "drop-zone"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragenter: move |evt: DragEvent| {
                evt.prevent_default();
                intake.write().drag_enter();
            },
            ondragover: move |evt: DragEvent| {
                evt.prevent_default();
                // Fires continuously; only write on the edge.
                if !intake.peek().is_drag_active() {
                    intake.write().drag_over();
                }
            },
            ondragleave: move |_| {
                intake.write().drag_leave();
            },
            ondrop: move |evt: DragEvent| {
                evt.prevent_default();
                let files = evt
                    .data()
                    .try_as_web_event()
                    .map(|e| web::dropped_files(&e))
                    .unwrap_or_default();
                let _ = intake.write().drop_files(files);
            },

            div { class: "drop-card",
                svg {
                    class: "drop-icon",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "1.5",
                    view_box: "0 0 24 24",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        d: "M12 16v-8m0 0l-3 3m3-3l3 3m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
                    }
                }
                p { class: "prompt", "{prompt}" }
                p { class: "separator", "{separator}" }
                label { class: "browse-button",
                    input {
                        r#type: "file",
                        accept: "{accept}",
                        class: "hidden",
                        onchange: move |evt: FormEvent| {
                            let files = evt
                                .data()
                                .try_as_web_event()
                                .map(|e| web::take_selected_files(&e))
                                .unwrap_or_default();
                            let _ = intake.write().accept_first(files);
                        },
                    }
                    "{browse}"
                }
                p { class: "size-hint", "{size_hint}" }
            }
        }
    }
}
