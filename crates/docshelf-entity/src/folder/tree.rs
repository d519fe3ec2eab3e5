//! Tree index over a flat folder list.
//!
//! The remote store returns folders as a flat list; tree shape is
//! derived here in one grouping pass on `parent_id`.

use std::collections::HashMap;

use docshelf_core::types::FolderId;
use docshelf_core::{AppError, AppResult};

use super::model::Folder;

/// An immutable index over one owner's flat folder list.
///
/// Provides children-of and ancestor-chain queries without further
/// remote calls. Rebuilt from scratch after every re-fetch; never
/// patched in place.
#[derive(Debug, Clone)]
pub struct FolderTree {
    /// Folder lookup by id.
    by_id: HashMap<FolderId, Folder>,
    /// Parent (None = virtual root) to child ids, in input order.
    children: HashMap<Option<FolderId>, Vec<FolderId>>,
}

impl FolderTree {
    /// Maximum hops followed when walking parent pointers. Ancestor
    /// chains deeper than this are treated as an upstream acyclicity
    /// violation rather than walked forever.
    pub const MAX_DEPTH: usize = 64;

    /// Build the index from a flat folder list in one grouping pass.
    pub fn from_folders(folders: &[Folder]) -> Self {
        let mut by_id = HashMap::with_capacity(folders.len());
        let mut children: HashMap<Option<FolderId>, Vec<FolderId>> = HashMap::new();

        for folder in folders {
            children.entry(folder.parent_id).or_default().push(folder.id);
            by_id.insert(folder.id, folder.clone());
        }

        Self { by_id, children }
    }

    /// Look up a folder by id.
    pub fn get(&self, id: FolderId) -> Option<&Folder> {
        self.by_id.get(&id)
    }

    /// Top-level folders (the contents of the virtual root view).
    pub fn top_level(&self) -> Vec<&Folder> {
        self.children_lookup(None)
    }

    /// Direct children of a folder.
    pub fn children_of(&self, id: FolderId) -> Vec<&Folder> {
        self.children_lookup(Some(id))
    }

    fn children_lookup(&self, parent: Option<FolderId>) -> Vec<&Folder> {
        self.children
            .get(&parent)
            .map(|ids| ids.iter().filter_map(|id| self.by_id.get(id)).collect())
            .unwrap_or_default()
    }

    /// The root-to-target ancestor path, ending with the target folder.
    ///
    /// Walks parent pointers from the target, prepending each ancestor
    /// until a top-level folder is reached. The walk stops after
    /// [`Self::MAX_DEPTH`] hops with an invariant-violation error so a
    /// corrupted parent relation upstream can never loop forever.
    pub fn breadcrumb(&self, id: FolderId) -> AppResult<Vec<Folder>> {
        let mut trail = Vec::new();
        let mut current = self
            .by_id
            .get(&id)
            .ok_or_else(|| AppError::not_found("Folder not found"))?;

        let mut hops = 0;
        loop {
            trail.push(current.clone());
            match current.parent_id {
                None => break,
                Some(parent_id) => match self.by_id.get(&parent_id) {
                    // Dangling parent reference: the knowable prefix ends here.
                    None => break,
                    Some(parent) => {
                        hops += 1;
                        if hops >= Self::MAX_DEPTH {
                            return Err(AppError::invariant_violation(format!(
                                "Ancestor chain for folder {id} exceeds {} hops; \
                                 parent relation is cyclic",
                                Self::MAX_DEPTH
                            )));
                        }
                        current = parent;
                    }
                },
            }
        }

        trail.reverse();
        Ok(trail)
    }

    /// The parent of a folder, for "up one level" navigation.
    ///
    /// Returns `None` for a top-level folder, meaning the virtual root.
    pub fn parent_of(&self, id: FolderId) -> AppResult<Option<FolderId>> {
        self.by_id
            .get(&id)
            .map(|folder| folder.parent_id)
            .ok_or_else(|| AppError::not_found("Folder not found"))
    }

    /// Whether `candidate` sits somewhere below `ancestor`.
    ///
    /// Used for cycle prevention on folder reparenting: a folder must
    /// never be moved into one of its own descendants.
    pub fn is_descendant(&self, candidate: FolderId, ancestor: FolderId) -> AppResult<bool> {
        let mut current = candidate;
        for _ in 0..Self::MAX_DEPTH {
            match self.by_id.get(&current).and_then(|f| f.parent_id) {
                Some(parent_id) if parent_id == ancestor => return Ok(true),
                Some(parent_id) => current = parent_id,
                None => return Ok(false),
            }
        }
        Err(AppError::invariant_violation(format!(
            "Ancestor walk from folder {candidate} exceeds {} hops; parent relation is cyclic",
            Self::MAX_DEPTH
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use docshelf_core::types::OwnerId;

    fn folder(id: FolderId, parent_id: Option<FolderId>, name: &str) -> Folder {
        Folder {
            id,
            owner_id: OwnerId::from_uuid(uuid::Uuid::nil()),
            parent_id,
            name: name.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn three_level_tree() -> (FolderTree, FolderId, FolderId, FolderId) {
        let root = FolderId::new();
        let mid = FolderId::new();
        let leaf = FolderId::new();
        let tree = FolderTree::from_folders(&[
            folder(root, None, "Personal Documents"),
            folder(mid, Some(root), "Taxes"),
            folder(leaf, Some(mid), "2024"),
        ]);
        (tree, root, mid, leaf)
    }

    #[test]
    fn test_top_level_and_children() {
        let (tree, root, mid, leaf) = three_level_tree();
        assert_eq!(tree.top_level().len(), 1);
        assert_eq!(tree.top_level()[0].id, root);
        assert_eq!(tree.children_of(root)[0].id, mid);
        assert_eq!(tree.children_of(mid)[0].id, leaf);
        assert!(tree.children_of(leaf).is_empty());
    }

    #[test]
    fn test_breadcrumb_root_to_target() {
        let (tree, root, mid, leaf) = three_level_tree();
        let trail = tree.breadcrumb(leaf).unwrap();
        let ids: Vec<FolderId> = trail.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![root, mid, leaf]);
        assert!(trail[0].is_top_level());
    }

    #[test]
    fn test_breadcrumb_prefix_property() {
        let (tree, _, _, leaf) = three_level_tree();
        let trail = tree.breadcrumb(leaf).unwrap();
        for (i, entry) in trail.iter().enumerate() {
            let sub = tree.breadcrumb(entry.id).unwrap();
            let sub_ids: Vec<FolderId> = sub.iter().map(|f| f.id).collect();
            let prefix_ids: Vec<FolderId> = trail[..=i].iter().map(|f| f.id).collect();
            assert_eq!(sub_ids, prefix_ids);
        }
    }

    #[test]
    fn test_breadcrumb_unknown_folder() {
        let (tree, _, _, _) = three_level_tree();
        let err = tree.breadcrumb(FolderId::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_breadcrumb_terminates_on_cycle() {
        let a = FolderId::new();
        let b = FolderId::new();
        // a and b point at each other; the upstream invariant is broken.
        let tree = FolderTree::from_folders(&[
            folder(a, Some(b), "a"),
            folder(b, Some(a), "b"),
        ]);
        let err = tree.breadcrumb(a).unwrap_err();
        assert_eq!(err.kind, docshelf_core::error::ErrorKind::InvariantViolation);
    }

    #[test]
    fn test_parent_of() {
        let (tree, root, mid, _) = three_level_tree();
        assert_eq!(tree.parent_of(mid).unwrap(), Some(root));
        assert_eq!(tree.parent_of(root).unwrap(), None);
    }

    #[test]
    fn test_is_descendant() {
        let (tree, root, mid, leaf) = three_level_tree();
        assert!(tree.is_descendant(leaf, root).unwrap());
        assert!(tree.is_descendant(mid, root).unwrap());
        assert!(!tree.is_descendant(root, leaf).unwrap());
        assert!(!tree.is_descendant(root, root).unwrap());
    }

    #[test]
    fn test_is_descendant_terminates_on_cycle() {
        let a = FolderId::new();
        let b = FolderId::new();
        let tree = FolderTree::from_folders(&[
            folder(a, Some(b), "a"),
            folder(b, Some(a), "b"),
        ]);
        assert!(tree.is_descendant(a, FolderId::new()).is_err());
    }
}
