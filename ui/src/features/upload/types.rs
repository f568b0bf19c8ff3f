// File widget state - no dioxus imports needed here
use super::selection::{selection_display, submit_upload, SelectedFile, UploadNotice};

#[derive(Clone, Debug)]
pub enum FileSelectionAction {
    DragOver,
    DragLeave,
    /// Files dropped onto the zone replace the current selection
    Dropped(Vec<SelectedFile>),
    /// Files picked in the native dialog replace the current selection
    DialogChanged(Vec<SelectedFile>),
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct FileSelectionState {
    pub files: Vec<SelectedFile>,
    /// Something is being dragged over the drop zone
    pub armed: bool,
}

impl FileSelectionState {
    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: FileSelectionAction) {
        match action {
            FileSelectionAction::DragOver => {
                self.armed = true;
            }
            FileSelectionAction::DragLeave => {
                self.armed = false;
            }
            FileSelectionAction::Dropped(files) => {
                self.armed = false;
                self.files = files;
            }
            FileSelectionAction::DialogChanged(files) => {
                self.files = files;
            }
        }
    }

    pub fn display(&self) -> String {
        selection_display(&self.files)
    }

    pub fn first_file(&self) -> Option<&SelectedFile> {
        self.files.first()
    }

    /// The first file has an extension outside `accepted`
    pub fn has_unsupported_file(&self, accepted: &[String]) -> bool {
        self.first_file()
            .map(|file| !file.has_extension_in(accepted))
            .unwrap_or(false)
    }

    pub fn submit(&self) -> UploadNotice {
        submit_upload(&self.files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_arms_and_leave_disarms() {
        let mut state = FileSelectionState::default();
        state.reduce_in_place(FileSelectionAction::DragOver);
        assert!(state.armed);
        state.reduce_in_place(FileSelectionAction::DragLeave);
        assert!(!state.armed);
    }

    #[test]
    fn test_drop_disarms_and_selects() {
        let mut state = FileSelectionState::default();
        state.reduce_in_place(FileSelectionAction::DragOver);
        state.reduce_in_place(FileSelectionAction::Dropped(SelectedFile::from_names([
            "first.png",
            "second.png",
        ])));

        assert!(!state.armed);
        assert_eq!(state.files.len(), 2);
        assert_eq!(state.display(), "Selected file: first.png");
    }

    #[test]
    fn test_dialog_and_drop_share_display() {
        let mut dropped = FileSelectionState::default();
        dropped.reduce_in_place(FileSelectionAction::Dropped(SelectedFile::from_names([
            "sheet.jpg",
        ])));

        let mut picked = FileSelectionState::default();
        picked.reduce_in_place(FileSelectionAction::DialogChanged(SelectedFile::from_names(
            ["sheet.jpg"],
        )));

        assert_eq!(dropped.display(), picked.display());
    }

    #[test]
    fn test_cancelled_dialog_clears_display() {
        let mut state = FileSelectionState::default();
        state.reduce_in_place(FileSelectionAction::DialogChanged(SelectedFile::from_names([
            "sheet.jpg",
        ])));
        state.reduce_in_place(FileSelectionAction::DialogChanged(Vec::new()));
        assert_eq!(state.display(), "");
    }

    #[test]
    fn test_dialog_pick_after_drop_replaces_dropped_file() {
        let mut state = FileSelectionState::default();
        state.reduce_in_place(FileSelectionAction::DialogChanged(SelectedFile::from_names([
            "A.png",
        ])));
        state.reduce_in_place(FileSelectionAction::Dropped(SelectedFile::from_names(["B.png"])));
        assert_eq!(state.display(), "Selected file: B.png");

        // The input now holds B, so picking A again fires a change
        state.reduce_in_place(FileSelectionAction::DialogChanged(SelectedFile::from_names([
            "A.png",
        ])));
        assert_eq!(state.display(), "Selected file: A.png");
        assert_eq!(
            state.submit(),
            UploadNotice::Placeholder {
                file_name: "A.png".to_string()
            }
        );
    }

    #[test]
    fn test_submit_with_nothing_keeps_state() {
        let state = FileSelectionState::default();
        assert_eq!(state.submit(), UploadNotice::NoFileSelected);
        assert_eq!(state, FileSelectionState::default());
    }

    #[test]
    fn test_unsupported_file_hint() {
        let accepted = vec!["png".to_string(), "jpg".to_string(), "jpeg".to_string()];
        let mut state = FileSelectionState::default();
        assert!(!state.has_unsupported_file(&accepted));

        state.reduce_in_place(FileSelectionAction::DialogChanged(SelectedFile::from_names([
            "notes.pdf",
        ])));
        assert!(state.has_unsupported_file(&accepted));

        state.reduce_in_place(FileSelectionAction::DialogChanged(SelectedFile::from_names([
            "sheet.png",
            "notes.pdf",
        ])));
        assert!(!state.has_unsupported_file(&accepted));
    }
}
