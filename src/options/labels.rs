use serde::{Deserialize, Serialize};

/// User-facing text for both screens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LabelOptions {
    /// Main line of the drop zone.
    pub prompt: String,
    /// Separator between the prompt and the browse button.
    pub separator: String,
    /// Browse button text.
    pub browse: String,
    /// Hint under the browse button.
    pub size_hint: String,
    /// Status label prefix on the viewer screen, followed by the file name.
    pub status_prefix: String,
    /// Reset button text.
    pub reset: String,
    /// Blocking notification shown when a file is refused.
    pub rejected: String,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            prompt: "Drag & drop your PDF here".to_owned(),
            separator: "or".to_owned(),
            browse: "Browse Files".to_owned(),
            size_hint: "Max 10MB \u{2022} PDF format only".to_owned(),
            status_prefix: "Now viewing:".to_owned(),
            reset: "Upload Another".to_owned(),
            rejected: "Please upload a valid PDF file.".to_owned(),
        }
    }
}

impl LabelOptions {
    /// Status line for the viewer screen.
    #[must_use]
    pub fn status(&self, file_name: &str) -> String {
        format!("{} {file_name}", self.status_prefix)
    }
}
