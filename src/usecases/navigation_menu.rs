//! Header controller: auth-driven menu trees, panel toggles, navigation, sign-out.
//!
//! - Reads a fresh session snapshot on every render (no caching across renders)
//! - Panel flags are local to one menu and published via a watch channel
//! - Every navigation closes all transient panels before routing
//! - Sign-out: await provider, close panels, then route to `/`

use crate::domain::routes::ROOT;
use crate::domain::{AuthState, DomainError, HeaderView, Panel, PanelState, header_view};
use crate::ports::{RouterPort, SessionPort};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

pub struct NavigationMenu {
    session: Arc<dyn SessionPort>,
    router: Arc<dyn RouterPort>,
    privileged_role: String,
    panels: watch::Sender<PanelState>,
}

impl NavigationMenu {
    pub fn new(
        session: Arc<dyn SessionPort>,
        router: Arc<dyn RouterPort>,
        privileged_role: impl Into<String>,
    ) -> Self {
        let (panels, _) = watch::channel(PanelState::default());
        Self {
            session,
            router,
            privileged_role: privileged_role.into(),
            panels,
        }
    }

    pub fn panels(&self) -> PanelState {
        *self.panels.borrow()
    }

    /// Receiver that observes every panel change.
    pub fn subscribe(&self) -> watch::Receiver<PanelState> {
        self.panels.subscribe()
    }

    pub async fn auth_state(&self) -> AuthState {
        AuthState::from(self.session.snapshot().await)
    }

    /// Build the header for the current identity, path and panel flags.
    pub async fn render(&self) -> HeaderView {
        let auth = self.auth_state().await;
        let path = self.router.current_path();
        header_view(&auth, self.panels(), &path, &self.privileged_role)
    }

    /// Trigger click: flip one panel.
    pub fn toggle(&self, panel: Panel) {
        self.panels.send_modify(|p| {
            let open = !p.is_open(panel);
            p.set(panel, open);
            debug!(?panel, open, "panel toggled");
        });
    }

    /// Click on the overlay of `panel`.
    pub fn dismiss(&self, panel: Panel) {
        self.panels.send_if_modified(|p| {
            if p.is_open(panel) {
                p.set(panel, false);
                true
            } else {
                false
            }
        });
    }

    /// Escape key. Closes whatever is open.
    pub fn escape(&self) {
        self.close_all();
    }

    fn close_all(&self) {
        self.panels.send_if_modified(|p| {
            let was_open = p.any_open();
            p.close_all();
            was_open
        });
    }

    /// Follow a link from anywhere in the header.
    pub async fn navigate(&self, href: &str) -> Result<(), DomainError> {
        self.close_all();
        self.router.navigate(href).await?;
        info!(path = href, "navigated");
        Ok(())
    }

    /// Sign out, close panels, return to `/`, strictly in that order.
    ///
    /// A provider failure does not block the redirect; it is logged and then
    /// returned so the caller can tell the user. When both steps fail the
    /// provider error wins.
    pub async fn sign_out(&self) -> Result<(), DomainError> {
        let outcome = self.session.sign_out().await;
        if let Err(e) = &outcome {
            warn!(error = %e, "sign-out failed at provider, redirecting anyway");
        }
        self.close_all();
        let redirect = self.router.navigate(ROOT).await;
        if let Err(e) = &redirect {
            warn!(error = %e, "redirect after sign-out failed");
        }
        info!(
            provider_ok = outcome.is_ok(),
            redirect_ok = redirect.is_ok(),
            "signed out"
        );
        outcome.and(redirect)
    }
}
