//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod catalog;
pub mod entities;
pub mod errors;
pub mod identity;
pub mod menu;
pub mod routes;

pub use catalog::PostCatalog;
pub use entities::{
    AuthState, ContentSection, NavLink, NavSection, Panel, PanelState, PostBody, PostRecord,
    SessionSnapshot, TocEntry, UserIdentity,
};
pub use errors::DomainError;
pub use identity::{user_display_name, user_initials};
pub use menu::{HeaderActions, HeaderView, RenderedLink, header_view};
pub use routes::is_active;
