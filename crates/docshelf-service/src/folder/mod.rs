//! Folder management and breadcrumb services.

pub mod breadcrumb;
pub mod service;

pub use breadcrumb::BreadcrumbResolver;
pub use service::FolderService;
