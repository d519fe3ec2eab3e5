//! Integration tests for folder and document operations, end to end
//! against the in-memory remote store.

mod helpers;

use docshelf_core::error::ErrorKind;
use docshelf_service::{DeleteOutcome, FolderView, Listing, Session};

#[tokio::test]
async fn test_create_folders_and_breadcrumb() {
    let app = helpers::TestApp::new();

    let personal = app.folder("Personal Documents", None).await;
    let taxes = app.folder("Taxes", Some(personal.id)).await;
    app.document(taxes.id, "w2.pdf").await;

    let all = app.folders.list_folders(&app.ctx).await.unwrap();
    let names: Vec<&str> = all.iter().map(|f| f.name.as_str()).collect();
    assert!(names.contains(&"Personal Documents"));
    assert!(names.contains(&"Taxes"));

    let trail = app.breadcrumbs.trail(&app.ctx, taxes.id).await.unwrap();
    let trail_names: Vec<&str> = trail.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(trail_names, vec!["Personal Documents", "Taxes"]);
}

#[tokio::test]
async fn test_up_one_level() {
    let app = helpers::TestApp::new();
    let personal = app.folder("Personal Documents", None).await;
    let taxes = app.folder("Taxes", Some(personal.id)).await;

    let from_taxes = app.breadcrumbs.up_one_level(&app.ctx, taxes.id).await.unwrap();
    assert_eq!(from_taxes, FolderView::Folder(personal.id));

    let from_top = app
        .breadcrumbs
        .up_one_level(&app.ctx, personal.id)
        .await
        .unwrap();
    assert_eq!(from_top, FolderView::All);
}

#[tokio::test]
async fn test_root_view_lists_top_level_folders() {
    let app = helpers::TestApp::new();
    let inbox = app.folder("Inbox", None).await;
    app.folder("Nested", Some(inbox.id)).await;

    let listing = app.documents.list(&app.ctx, FolderView::All).await.unwrap();
    match listing {
        Listing::TopLevelFolders(folders) => {
            assert_eq!(folders.len(), 1);
            assert_eq!(folders[0].name, "Inbox");
        }
        Listing::Documents(_) => panic!("root view must list folders"),
    }
}

#[tokio::test]
async fn test_create_document_requires_concrete_folder() {
    let app = helpers::TestApp::new();
    let err = app
        .documents
        .create_document(&app.ctx, FolderView::All, "w2.pdf", "mem-x".into())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn test_empty_names_rejected_before_any_remote_call() {
    let app = helpers::TestApp::new();
    let folder = app.folder("Inbox", None).await;
    let doc = app.document(folder.id, "w2.pdf").await;

    assert_eq!(
        app.folders
            .create_folder(&app.ctx, "   ", None)
            .await
            .unwrap_err()
            .kind,
        ErrorKind::Validation
    );
    assert_eq!(
        app.folders
            .rename_folder(&app.ctx, folder.id, "")
            .await
            .unwrap_err()
            .kind,
        ErrorKind::Validation
    );
    assert_eq!(
        app.documents
            .rename_document(&app.ctx, doc.id, "  ")
            .await
            .unwrap_err()
            .kind,
        ErrorKind::Validation
    );
    // Nothing changed remotely.
    assert_eq!(app.folders.list_folders(&app.ctx).await.unwrap().len(), 1);
    assert_eq!(app.titles_in(folder.id).await, vec!["w2.pdf"]);
}

#[tokio::test]
async fn test_move_updates_both_listings_after_refetch() {
    let app = helpers::TestApp::new();
    let a = app.folder("A", None).await;
    let b = app.folder("B", None).await;
    let doc = app.document(a.id, "invoice.pdf").await;

    // Prime both cached listings so the move must invalidate them.
    assert_eq!(app.titles_in(a.id).await, vec!["invoice.pdf"]);
    assert!(app.titles_in(b.id).await.is_empty());

    let moved = app
        .orchestrator
        .move_document(&app.ctx, doc.id, b.id)
        .await
        .unwrap();
    assert_eq!(moved.folder_id, b.id);

    assert!(app.titles_in(a.id).await.is_empty());
    assert_eq!(app.titles_in(b.id).await, vec!["invoice.pdf"]);
}

#[tokio::test]
async fn test_move_to_missing_destination_rejected() {
    let app = helpers::TestApp::new();
    let a = app.folder("A", None).await;
    let doc = app.document(a.id, "invoice.pdf").await;

    let err = app
        .orchestrator
        .move_document(&app.ctx, doc.id, docshelf_core::types::FolderId::new())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    // The document stayed where it was.
    assert_eq!(app.titles_in(a.id).await, vec!["invoice.pdf"]);
}

#[tokio::test]
async fn test_bulk_move_from_selection() {
    let app = helpers::TestApp::new();
    let c = app.folder("C", None).await;
    let d = app.folder("D", None).await;

    let mut docs = Vec::new();
    for name in ["1.pdf", "2.pdf", "3.pdf", "4.pdf", "5.pdf"] {
        docs.push(app.document(c.id, name).await);
    }

    // Enter bulk mode in C and pick 3 of 5.
    let mut session = Session::new();
    session.open_folder(c.id);
    session.start_bulk_selecting();
    for doc in &docs[..3] {
        session.toggle_selected(doc.id);
    }
    let selection: Vec<_> = session.selected().unwrap().iter().copied().collect();

    let report = app.orchestrator.bulk_move(&app.ctx, &selection, d.id).await;
    assert!(report.is_complete());
    assert_eq!(report.summary(), "3 of 3 moved");

    assert_eq!(app.titles_in(d.id).await.len(), 3);
    assert_eq!(app.titles_in(c.id).await.len(), 2);
}

#[tokio::test]
async fn test_bulk_move_partial_failure_leaves_earlier_moves_in_place() {
    let app = helpers::TestApp::new();
    let c = app.folder("C", None).await;
    let d = app.folder("D", None).await;

    let first = app.document(c.id, "first.pdf").await;
    let stale = app.document(c.id, "stale.pdf").await;
    let last = app.document(c.id, "last.pdf").await;

    // Another session already deleted this one.
    app.orchestrator
        .delete_document(&app.ctx, stale.id)
        .await
        .unwrap();

    let report = app
        .orchestrator
        .bulk_move(&app.ctx, &[first.id, stale.id, last.id], d.id)
        .await;

    assert_eq!(report.summary(), "2 of 3 moved");
    assert_eq!(report.moved, vec![first.id, last.id]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, stale.id);

    // Every success landed in D; nothing else was corrupted.
    let in_d = app.documents.list_by_folder(&app.ctx, d.id).await.unwrap();
    assert!(in_d.iter().all(|doc| doc.folder_id == d.id));
    assert_eq!(in_d.len(), 2);
    assert!(app.titles_in(c.id).await.is_empty());
}

#[tokio::test]
async fn test_document_delete_is_idempotent() {
    let app = helpers::TestApp::new();
    let folder = app.folder("Inbox", None).await;
    let doc = app.document(folder.id, "invoice.pdf").await;

    let first = app
        .orchestrator
        .delete_document(&app.ctx, doc.id)
        .await
        .unwrap();
    assert_eq!(first, DeleteOutcome::Deleted);

    let second = app
        .orchestrator
        .delete_document(&app.ctx, doc.id)
        .await
        .unwrap();
    assert_eq!(second, DeleteOutcome::AlreadyGone);

    assert!(app.titles_in(folder.id).await.is_empty());
}

#[tokio::test]
async fn test_delete_nonempty_folder_rejected_and_state_unchanged() {
    let app = helpers::TestApp::new();
    let personal = app.folder("Personal Documents", None).await;
    let taxes = app.folder("Taxes", Some(personal.id)).await;
    app.document(taxes.id, "w2.pdf").await;

    let mut session = Session::new();
    session.open_folder(taxes.id);

    let err = app
        .orchestrator
        .delete_folder(&app.ctx, taxes.id, &mut session)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotEmpty);

    // Folder, document, and browsing location are all untouched.
    assert_eq!(app.folders.list_folders(&app.ctx).await.unwrap().len(), 2);
    assert_eq!(app.titles_in(taxes.id).await, vec!["w2.pdf"]);
    assert_eq!(session.location(), FolderView::Folder(taxes.id));
}

#[tokio::test]
async fn test_deleting_the_open_folder_falls_back_to_root() {
    let app = helpers::TestApp::new();
    let empty = app.folder("Empty", None).await;

    let mut session = Session::new();
    session.open_folder(empty.id);

    app.orchestrator
        .delete_folder(&app.ctx, empty.id, &mut session)
        .await
        .unwrap();
    assert_eq!(session.location(), FolderView::All);
    assert!(app.folders.list_folders(&app.ctx).await.unwrap().is_empty());
}
