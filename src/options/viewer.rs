use serde::{Deserialize, Serialize};

/// Where the external viewer widget lives and where it renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ViewerOptions {
    /// Name of the global object exposing `load`/`unload`.
    pub global_name: String,
    /// DOM id of the container element the widget mounts into.
    pub container_id: String,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            global_name: "NutrientViewer".to_owned(),
            container_id: "pdf-viewer".to_owned(),
        }
    }
}
