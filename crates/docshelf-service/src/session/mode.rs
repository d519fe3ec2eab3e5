//! The selection and mode state machine.
//!
//! Exactly one mode is active at a time. Entering a new mode replaces
//! the previous one wholesale; unsaved edit state of an abandoned mode
//! is dropped with its variant, with no network effect.

use std::collections::HashSet;

use docshelf_core::types::{DocumentId, FolderId};

use crate::view::FolderView;

/// The active interaction mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Plain browsing of the current view.
    Browsing,
    /// The create-folder dialog is open.
    CreatingFolder {
        /// The parent the new folder will land under (None = top level).
        parent: Option<FolderId>,
    },
    /// The rename-folder dialog is open.
    RenamingFolder {
        /// The folder being renamed.
        id: FolderId,
    },
    /// The rename-document dialog is open.
    RenamingDocument {
        /// The document being retitled.
        id: DocumentId,
    },
    /// The move-document destination picker is open.
    MovingDocument {
        /// The document being moved.
        id: DocumentId,
    },
    /// Documents are being selected for a bulk action.
    BulkSelecting {
        /// Accumulated selection.
        selected: HashSet<DocumentId>,
    },
    /// A document preview is open.
    Previewing {
        /// The document in the preview pane.
        document: DocumentId,
    },
}

/// One user's interaction state: the view in focus plus the mode.
#[derive(Debug, Clone)]
pub struct Session {
    location: FolderView,
    mode: Mode,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Starts a session browsing the virtual root.
    pub fn new() -> Self {
        Self {
            location: FolderView::All,
            mode: Mode::Browsing,
        }
    }

    /// The view currently in focus.
    pub fn location(&self) -> FolderView {
        self.location
    }

    /// The active mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Navigates into a folder and returns to plain browsing.
    pub fn open_folder(&mut self, folder_id: FolderId) {
        self.location = FolderView::Folder(folder_id);
        self.mode = Mode::Browsing;
    }

    /// Navigates to the virtual root and returns to plain browsing.
    pub fn go_to_root(&mut self) {
        self.location = FolderView::All;
        self.mode = Mode::Browsing;
    }

    /// Navigates to an arbitrary view (breadcrumb click, "up one level").
    pub fn navigate(&mut self, view: FolderView) {
        self.location = view;
        self.mode = Mode::Browsing;
    }

    /// Opens the create-folder dialog.
    pub fn start_creating_folder(&mut self, parent: Option<FolderId>) {
        self.mode = Mode::CreatingFolder { parent };
    }

    /// Opens the rename dialog for a folder.
    pub fn start_renaming_folder(&mut self, id: FolderId) {
        self.mode = Mode::RenamingFolder { id };
    }

    /// Opens the rename dialog for a document.
    pub fn start_renaming_document(&mut self, id: DocumentId) {
        self.mode = Mode::RenamingDocument { id };
    }

    /// Opens the destination picker for a single-document move.
    pub fn start_moving_document(&mut self, id: DocumentId) {
        self.mode = Mode::MovingDocument { id };
    }

    /// Opens the preview pane for a document.
    pub fn start_previewing(&mut self, document: DocumentId) {
        self.mode = Mode::Previewing { document };
    }

    /// Enters bulk selection with an empty set.
    pub fn start_bulk_selecting(&mut self) {
        self.mode = Mode::BulkSelecting {
            selected: HashSet::new(),
        };
    }

    /// Abandons the current mode and returns to plain browsing.
    ///
    /// Leaving bulk selection drops the selection set with the variant.
    pub fn cancel(&mut self) {
        self.mode = Mode::Browsing;
    }

    /// The current bulk selection, when in bulk mode.
    pub fn selected(&self) -> Option<&HashSet<DocumentId>> {
        match &self.mode {
            Mode::BulkSelecting { selected } => Some(selected),
            _ => None,
        }
    }

    /// Toggles one document in the bulk selection.
    ///
    /// Outside bulk mode this does nothing.
    pub fn toggle_selected(&mut self, id: DocumentId) {
        if let Mode::BulkSelecting { selected } = &mut self.mode {
            if !selected.insert(id) {
                selected.remove(&id);
            }
        }
    }

    /// Select-all as a pure toggle over the currently listed documents:
    /// selects every listed id unless all of them are already selected,
    /// in which case the set is cleared.
    pub fn toggle_select_all(&mut self, listed: &[DocumentId]) {
        if let Mode::BulkSelecting { selected } = &mut self.mode {
            let all_selected =
                !listed.is_empty() && listed.iter().all(|id| selected.contains(id));
            if all_selected {
                selected.clear();
            } else {
                selected.extend(listed.iter().copied());
            }
        }
    }

    /// Reacts to a confirmed folder deletion: a session browsing the
    /// deleted folder falls back to the virtual root.
    pub fn note_folder_removed(&mut self, folder_id: FolderId) {
        if self.location == FolderView::Folder(folder_id) {
            self.go_to_root();
        }
    }
}
