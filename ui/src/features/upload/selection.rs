//! Selection display and upload submission for the dashboard file widget.
//!
//! Drag-and-drop and the native file dialog both end up here: each hands over the
//! list of chosen files and gets back the single status line shown under the drop
//! zone. Only the first file is ever named.

/// A file chosen through the drop zone or the file dialog. Only the name is kept;
/// the contents are never read.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SelectedFile {
    pub name: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Wrap the file names reported by the browser, keeping their order
    pub fn from_names<I, S>(names: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(Self::new).collect()
    }

    /// Lowercased text after the last dot, if there is one
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
    }

    pub fn has_extension_in(&self, accepted: &[String]) -> bool {
        match self.extension() {
            Some(ext) => accepted.iter().any(|a| a.eq_ignore_ascii_case(&ext)),
            None => false,
        }
    }
}

/// The selection-display update: names the first file, or nothing.
pub fn selection_display(files: &[SelectedFile]) -> String {
    match files.first() {
        Some(file) => format!("Selected file: {}", file.name),
        None => String::new(),
    }
}

/// Result of submitting the upload form. Both variants end in a modal message;
/// neither navigates or clears the page.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum UploadNotice {
    /// A file was present. No transport happens; the user is told so.
    Placeholder { file_name: String },
    NoFileSelected,
}

impl UploadNotice {
    pub fn message(&self) -> String {
        match self {
            UploadNotice::Placeholder { file_name } => format!(
                "File upload functionality is not yet implemented. Selected file: {}",
                file_name
            ),
            UploadNotice::NoFileSelected => "Please select a file first.".to_string(),
        }
    }
}

pub fn submit_upload(files: &[SelectedFile]) -> UploadNotice {
    match files.first() {
        Some(file) => {
            tracing::debug!(file = %file.name, "upload submitted to placeholder");
            UploadNotice::Placeholder {
                file_name: file.name.clone(),
            }
        }
        None => UploadNotice::NoFileSelected,
    }
}
