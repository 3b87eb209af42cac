//! Plain-text rendering of a [`HeaderView`] for the terminal shell.

use crate::domain::menu::{AccountControl, MobileFooter};
use crate::domain::{HeaderActions, HeaderView, RenderedLink};

fn link(l: &RenderedLink) -> String {
    if l.active {
        format!("[*{}*]", l.label)
    } else {
        format!("[{}]", l.label)
    }
}

fn join(links: &[RenderedLink]) -> String {
    links.iter().map(link).collect::<Vec<_>>().join(" ")
}

/// One line for the bar, then indented blocks for any open panel.
pub fn render_header(view: &HeaderView) -> String {
    let mut bar = vec![link(&view.brand)];
    if !view.primary_nav.is_empty() {
        bar.push(join(&view.primary_nav));
    }
    match &view.actions {
        HeaderActions::Pending => bar.push("…".to_string()),
        HeaderActions::Guest {
            call_to_action,
            login,
            sign_up,
        } => {
            bar.push(format!("{} | {} {}", link(call_to_action), link(login), link(sign_up)));
        }
        HeaderActions::Account(AccountControl {
            initials,
            display_name,
            ..
        }) => bar.push(format!("({}) {} ▾", initials, display_name)),
    }

    let mut out = bar.join("  ");
    out.push('\n');

    if let HeaderActions::Account(AccountControl {
        email,
        dropdown: Some(items),
        ..
    }) = &view.actions
    {
        out.push_str(&format!("  ┌ {}\n", email));
        for item in items {
            out.push_str(&format!("  │ {}\n", link(item)));
        }
        out.push_str("  └ [Sign out]\n");
    }

    if let Some(panel) = &view.mobile_panel {
        out.push_str("  ≡ Menu\n");
        if !panel.links.is_empty() {
            out.push_str(&format!("    {}\n", join(&panel.links)));
        }
        for section in &panel.sections {
            out.push_str(&format!("    {}: {}\n", section.title, join(&section.links)));
        }
        match &panel.footer {
            MobileFooter::Pending => {}
            MobileFooter::Guest { login, sign_up } => {
                out.push_str(&format!("    {} {}\n", link(login), link(sign_up)));
            }
            MobileFooter::Account {
                display_name,
                email,
            } => {
                out.push_str(&format!("    {} <{}> [Sign out]\n", display_name, email));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::DEFAULT_PRIVILEGED_ROLE;
    use crate::domain::{AuthState, PanelState, UserIdentity, header_view};

    #[test]
    fn test_guest_bar_marks_active() {
        let view = header_view(
            &AuthState::Anonymous,
            PanelState::default(),
            "/blog/ifta-vs-hvut",
            DEFAULT_PRIVILEGED_ROLE,
        );
        let text = render_header(&view);
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("[*Blog*]"));
        assert!(text.contains("[Home]"));
        assert!(text.contains("[File Form 2290 Now]"));
    }

    #[test]
    fn test_account_dropdown_block() {
        let who = UserIdentity::with_email("j.doe@example.com");
        let view = header_view(
            &AuthState::Authenticated(who),
            PanelState {
                user_menu_open: true,
                mobile_menu_open: false,
            },
            "/dashboard",
            DEFAULT_PRIVILEGED_ROLE,
        );
        let text = render_header(&view);
        assert!(text.starts_with("[HVUT 2290]  (J) j.doe ▾\n"));
        assert!(text.contains("  ┌ j.doe@example.com\n"));
        assert!(text.contains("  │ [*Dashboard*]\n"));
        assert!(!text.contains("Agent Portal"));
        assert!(text.ends_with("  └ [Sign out]\n"));
    }

    #[test]
    fn test_pending_shows_placeholder_only() {
        let view = header_view(
            &AuthState::Authenticating,
            PanelState::default(),
            "/",
            DEFAULT_PRIVILEGED_ROLE,
        );
        assert_eq!(render_header(&view), "[*HVUT 2290*]  …\n");
    }
}
