//! Header menu trees and the view model rendered from them.
//!
//! Which tree is shown depends only on [`AuthState`]; active flags come from
//! [`is_active`]. The view is recomputed on every render, nothing is cached.

use super::entities::{AuthState, NavLink, NavSection, Panel, PanelState, UserIdentity};
use super::identity::{user_display_name, user_initials};
use super::routes::{ROOT, is_active};

/// Role that unlocks the agent portal entry unless configured otherwise.
pub const DEFAULT_PRIVILEGED_ROLE: &str = "agent";

pub const BRAND: NavLink = NavLink {
    href: ROOT,
    label: "HVUT 2290",
};

/// Marketing navigation for signed-out visitors.
pub const MARKETING_LINKS: &[NavLink] = &[
    NavLink { href: "/", label: "Home" },
    NavLink { href: "/how-it-works", label: "How It Works" },
    NavLink { href: "/pricing", label: "Pricing" },
    NavLink { href: "/blog", label: "Blog" },
    NavLink { href: "/contact", label: "Contact" },
];

pub const CALL_TO_ACTION: NavLink = NavLink {
    href: "/signup",
    label: "File Form 2290 Now",
};
pub const LOGIN: NavLink = NavLink {
    href: "/login",
    label: "Login",
};
pub const SIGN_UP: NavLink = NavLink {
    href: "/signup",
    label: "Sign Up",
};

/// Grouped links of the mobile slide-over.
pub const MOBILE_SECTIONS: &[NavSection] = &[
    NavSection {
        name: "resources",
        title: "Resources",
        links: &[
            NavLink { href: "/blog", label: "Blog" },
            NavLink { href: "/faq", label: "FAQ" },
            NavLink { href: "/form-2290-due-dates", label: "Form 2290 Due Dates" },
        ],
    },
    NavSection {
        name: "compliance",
        title: "Compliance",
        links: &[
            NavLink { href: "/schedule-1", label: "Stamped Schedule 1" },
            NavLink { href: "/amendments", label: "Form 2290 Amendments" },
            NavLink { href: "/vin-correction", label: "VIN Corrections" },
        ],
    },
    NavSection {
        name: "tools",
        title: "Tools",
        links: &[
            NavLink { href: "/tools/hvut-calculator", label: "HVUT Tax Calculator" },
            NavLink { href: "/tools/vin-checker", label: "VIN Checker" },
            NavLink { href: "/tools/due-date-reminder", label: "Due Date Reminder" },
        ],
    },
];

/// Account dropdown entries for every signed-in user.
pub const ACCOUNT_LINKS: &[NavLink] = &[
    NavLink { href: "/dashboard", label: "Dashboard" },
    NavLink { href: "/dashboard/filings", label: "My Filings" },
    NavLink { href: "/dashboard/vehicles", label: "My Vehicles" },
    NavLink { href: "/dashboard/settings", label: "Account Settings" },
];

pub const AGENT_PORTAL: NavLink = NavLink {
    href: "/agent",
    label: "Agent Portal",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLink {
    pub href: String,
    pub label: String,
    pub active: bool,
}

impl RenderedLink {
    fn from_link(link: &NavLink, current_path: &str) -> Self {
        Self {
            href: link.href.to_string(),
            label: link.label.to_string(),
            active: is_active(current_path, link.href),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub name: String,
    pub title: String,
    pub links: Vec<RenderedLink>,
}

/// Identity control shown in place of the marketing nav once signed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountControl {
    pub initials: String,
    pub display_name: String,
    pub email: String,
    /// `Some` only while the dropdown is open.
    pub dropdown: Option<Vec<RenderedLink>>,
}

/// Right-hand side of the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderActions {
    /// Identity not known yet: render neither guest nor account controls.
    Pending,
    Guest {
        call_to_action: RenderedLink,
        login: RenderedLink,
        sign_up: RenderedLink,
    },
    Account(AccountControl),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MobileFooter {
    Pending,
    Guest {
        login: RenderedLink,
        sign_up: RenderedLink,
    },
    Account {
        display_name: String,
        email: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobilePanel {
    pub links: Vec<RenderedLink>,
    pub sections: Vec<RenderedSection>,
    pub footer: MobileFooter,
}

/// Everything a shell needs to draw the header for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub brand: RenderedLink,
    /// Empty unless the visitor is anonymous.
    pub primary_nav: Vec<RenderedLink>,
    pub actions: HeaderActions,
    pub mobile_panel: Option<MobilePanel>,
    /// Click-outside overlays currently mounted, one per open panel.
    pub overlays: Vec<Panel>,
}

impl HeaderView {
    /// Every link currently clickable, in display order.
    pub fn visible_links(&self) -> Vec<&RenderedLink> {
        let mut out: Vec<&RenderedLink> = vec![&self.brand];
        out.extend(self.primary_nav.iter());
        match &self.actions {
            HeaderActions::Pending => {}
            HeaderActions::Guest {
                call_to_action,
                login,
                sign_up,
            } => out.extend([call_to_action, login, sign_up]),
            HeaderActions::Account(control) => {
                if let Some(items) = &control.dropdown {
                    out.extend(items.iter());
                }
            }
        }
        if let Some(panel) = &self.mobile_panel {
            out.extend(panel.links.iter());
            out.extend(panel.sections.iter().flat_map(|s| s.links.iter()));
            if let MobileFooter::Guest { login, sign_up } = &panel.footer {
                out.extend([login, sign_up]);
            }
        }
        out
    }
}

/// Account entries for `identity`; the agent portal only for the privileged role.
pub fn account_links(identity: &UserIdentity, privileged_role: &str) -> Vec<NavLink> {
    let mut links = ACCOUNT_LINKS.to_vec();
    if identity.role.as_deref() == Some(privileged_role) {
        links.push(AGENT_PORTAL);
    }
    links
}

fn render_links(links: &[NavLink], current_path: &str) -> Vec<RenderedLink> {
    links
        .iter()
        .map(|l| RenderedLink::from_link(l, current_path))
        .collect()
}

fn render_sections(current_path: &str) -> Vec<RenderedSection> {
    MOBILE_SECTIONS
        .iter()
        .map(|s| RenderedSection {
            name: s.name.to_string(),
            title: s.title.to_string(),
            links: render_links(s.links, current_path),
        })
        .collect()
}

/// Derive the header view from the current auth state, panel flags and path.
pub fn header_view(
    auth: &AuthState,
    panels: PanelState,
    current_path: &str,
    privileged_role: &str,
) -> HeaderView {
    let brand = RenderedLink::from_link(&BRAND, current_path);
    let link = |l: &NavLink| RenderedLink::from_link(l, current_path);

    let (primary_nav, actions, mobile_panel) = match auth {
        AuthState::Authenticating => {
            let mobile = panels.mobile_menu_open.then(|| MobilePanel {
                links: Vec::new(),
                sections: Vec::new(),
                footer: MobileFooter::Pending,
            });
            (Vec::new(), HeaderActions::Pending, mobile)
        }
        AuthState::Anonymous => {
            let actions = HeaderActions::Guest {
                call_to_action: link(&CALL_TO_ACTION),
                login: link(&LOGIN),
                sign_up: link(&SIGN_UP),
            };
            let mobile = panels.mobile_menu_open.then(|| MobilePanel {
                links: render_links(MARKETING_LINKS, current_path),
                sections: render_sections(current_path),
                footer: MobileFooter::Guest {
                    login: link(&LOGIN),
                    sign_up: link(&SIGN_UP),
                },
            });
            (render_links(MARKETING_LINKS, current_path), actions, mobile)
        }
        AuthState::Authenticated(identity) => {
            let entries = account_links(identity, privileged_role);
            let who = Some(identity);
            let control = AccountControl {
                initials: user_initials(who),
                display_name: user_display_name(who),
                email: identity.email.clone(),
                dropdown: panels
                    .user_menu_open
                    .then(|| render_links(&entries, current_path)),
            };
            let mobile = panels.mobile_menu_open.then(|| MobilePanel {
                links: render_links(&entries, current_path),
                sections: Vec::new(),
                footer: MobileFooter::Account {
                    display_name: control.display_name.clone(),
                    email: control.email.clone(),
                },
            });
            (Vec::new(), HeaderActions::Account(control), mobile)
        }
    };

    let mut overlays = Vec::new();
    if matches!(actions, HeaderActions::Account(AccountControl { dropdown: Some(_), .. })) {
        overlays.push(Panel::UserMenu);
    }
    if mobile_panel.is_some() {
        overlays.push(Panel::MobileMenu);
    }

    HeaderView {
        brand,
        primary_nav,
        actions,
        mobile_panel,
        overlays,
    }
}
