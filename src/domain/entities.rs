//! Domain entities. Pure data structures for the core business.
//!
//! No router/session/terminal types here; adapters map into these.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single blog post. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    /// Unique slug across the whole catalog.
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub read_time: String,
    /// Display date, e.g. "January 15, 2026".
    pub date: String,
    #[serde(rename = "dateISO")]
    pub date_iso: NaiveDate,
    pub keywords: Vec<String>,
    pub table_of_contents: Vec<TocEntry>,
    /// Ids of other posts in the catalog.
    pub related_posts: Vec<String>,
    pub content: PostBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub id: String,
    pub title: String,
}

/// Post content as structured text. Presentation lives in the renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostBody {
    pub sections: Vec<ContentSection>,
}

/// One anchored section of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSection {
    /// Anchor id, matches the TOC entry.
    pub id: String,
    pub heading: String,
    pub paragraphs: Vec<String>,
}

/// Identity as reported by the session provider. Read-only for this layer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserIdentity {
    pub email: String,
    pub display_name: Option<String>,
    pub role: Option<String>,
}

impl UserIdentity {
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

/// Snapshot published by the session provider.
///
/// `loading` means identity is not yet known, which is different from
/// `identity == None` (known to be signed out).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    pub identity: Option<UserIdentity>,
    pub loading: bool,
}

impl SessionSnapshot {
    pub fn pending() -> Self {
        Self {
            identity: None,
            loading: true,
        }
    }

    pub fn resolved(identity: Option<UserIdentity>) -> Self {
        Self {
            identity,
            loading: false,
        }
    }
}

/// Authentication state the header renders from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Authenticating,
    Anonymous,
    Authenticated(UserIdentity),
}

impl From<SessionSnapshot> for AuthState {
    fn from(snapshot: SessionSnapshot) -> Self {
        if snapshot.loading {
            return AuthState::Authenticating;
        }
        match snapshot.identity {
            Some(identity) => AuthState::Authenticated(identity),
            None => AuthState::Anonymous,
        }
    }
}

/// Static navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Named group of links shown in the mobile slide-over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub name: &'static str,
    pub title: &'static str,
    pub links: &'static [NavLink],
}

/// Transient header panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    UserMenu,
    MobileMenu,
}

/// Open/closed flags of the transient panels. Starts with everything closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelState {
    pub user_menu_open: bool,
    pub mobile_menu_open: bool,
}

impl PanelState {
    pub fn is_open(&self, panel: Panel) -> bool {
        match panel {
            Panel::UserMenu => self.user_menu_open,
            Panel::MobileMenu => self.mobile_menu_open,
        }
    }

    pub fn set(&mut self, panel: Panel, open: bool) {
        match panel {
            Panel::UserMenu => self.user_menu_open = open,
            Panel::MobileMenu => self.mobile_menu_open = open,
        }
    }

    pub fn any_open(&self) -> bool {
        self.user_menu_open || self.mobile_menu_open
    }

    pub fn close_all(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_state_from_snapshot() {
        assert_eq!(
            AuthState::from(SessionSnapshot::pending()),
            AuthState::Authenticating
        );
        assert_eq!(
            AuthState::from(SessionSnapshot::resolved(None)),
            AuthState::Anonymous
        );
        let who = UserIdentity::with_email("a@b.com");
        assert_eq!(
            AuthState::from(SessionSnapshot::resolved(Some(who.clone()))),
            AuthState::Authenticated(who)
        );
    }

    #[test]
    fn test_loading_wins_over_stale_identity() {
        let snap = SessionSnapshot {
            identity: Some(UserIdentity::with_email("a@b.com")),
            loading: true,
        };
        assert_eq!(AuthState::from(snap), AuthState::Authenticating);
    }

    #[test]
    fn test_post_serializes_date_iso_key() {
        let post = PostRecord {
            id: "x".into(),
            title: "X".into(),
            excerpt: String::new(),
            category: "Guides".into(),
            read_time: "3 min read".into(),
            date: "March 1, 2026".into(),
            date_iso: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            keywords: vec![],
            table_of_contents: vec![],
            related_posts: vec![],
            content: PostBody::default(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["dateISO"], "2026-03-01");
        assert_eq!(json["readTime"], "3 min read");
        assert!(json.get("relatedPosts").is_some());
    }
}
