//! Dioxus web app: drop or pick a PDF and view it in the page.
//!
//! Compiled to WASM with trunk. The viewer itself is the Nutrient Viewer
//! script loaded by `index.html`; this app only decides when to mount it and
//! on which document.

mod upload;
mod viewer;

use std::rc::Rc;

use dioxus::prelude::*;
use pdfdrop::intake::IntakeController;
use pdfdrop::options::Options;
use pdfdrop::viewer::ViewerAdapter;
use pdfdrop::web::{self, AlertNotifier, NutrientViewer, ObjectUrls};

/// Upload state, shared by both screens.
type Intake = IntakeController<ObjectUrls>;
/// Widget mount state. Lives as long as the app so teardown unmounts.
type Adapter = ViewerAdapter<NutrientViewer>;

fn main() {
    web::init_logging();
    launch(app);
}

fn app() -> Element {
    let options = use_context_provider(|| Rc::new(Options::bundled()));

    let intake_options = Rc::clone(&options);
    let intake: Signal<Intake> = use_signal(move || {
        IntakeController::new(
            Rc::new(ObjectUrls),
            Rc::new(AlertNotifier),
            &intake_options,
        )
    });
    let adapter: Signal<Adapter> = use_signal(move || {
        ViewerAdapter::new(NutrientViewer::new(&options.viewer.global_name))
    });

    let viewing = intake.read().is_viewing();

    rsx! {
        div { class: "app",
            if viewing {
                viewer::ViewerScreen { intake, adapter }
            } else {
                upload::UploadScreen { intake }
            }
        }
    }
}
