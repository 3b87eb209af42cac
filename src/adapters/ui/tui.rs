//! Implements InputPort. Inquire-based interactive shell.
//!
//! Lets you click through the header as a guest or signed-in user, read posts
//! and export the catalog.

use crate::adapters::render::{post_to_markdown, render_header};
use crate::adapters::router::MemoryRouter;
use crate::adapters::session::InMemorySession;
use crate::domain::menu::AccountControl;
use crate::domain::{
    DomainError, HeaderActions, HeaderView, Panel, PostCatalog, UserIdentity,
};
use crate::ports::{InputPort, RouterPort, SessionPort};
use crate::usecases::{CatalogExporter, NavigationMenu};
use async_trait::async_trait;
use indicatif::ProgressBar;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{InquireError, Select};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Applies the prompt theme for all subsequent inquire prompts.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("▸").with_fg(Color::LightYellow))
        .with_highlighted_option_prefix(Styled::new("➜").with_fg(Color::LightBlue));
    inquire::set_global_render_config(config);
}

/// Settings for each header browsing session.
#[derive(Debug, Clone)]
pub struct HeaderSettings {
    pub privileged_role: String,
    pub initial_path: String,
    pub sign_out_delay: Duration,
    pub demo_identity: UserIdentity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainChoice {
    BrowseAsGuest,
    BrowseSignedIn,
    BrowseBlog,
    Export,
    Quit,
}

impl fmt::Display for MainChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MainChoice::BrowseAsGuest => "Browse header as guest",
            MainChoice::BrowseSignedIn => "Browse header as signed-in user",
            MainChoice::BrowseBlog => "Read the blog",
            MainChoice::Export => "Export catalog",
            MainChoice::Quit => "Quit",
        };
        f.write_str(s)
    }
}

/// One clickable thing in the rendered header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderAction {
    Follow { href: String, label: String },
    Toggle { panel: Panel, open: bool },
    Dismiss(Panel),
    SignOut,
    Back,
}

impl fmt::Display for HeaderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderAction::Follow { href, label } => write!(f, "Go to {} ({})", label, href),
            HeaderAction::Toggle { panel, open } => {
                let verb = if *open { "Close" } else { "Open" };
                write!(f, "{} {}", verb, panel_name(*panel))
            }
            HeaderAction::Dismiss(panel) => write!(f, "Click outside the {}", panel_name(*panel)),
            HeaderAction::SignOut => f.write_str("Sign out"),
            HeaderAction::Back => f.write_str("Back to main menu"),
        }
    }
}

fn panel_name(panel: Panel) -> &'static str {
    match panel {
        Panel::UserMenu => "account menu",
        Panel::MobileMenu => "mobile menu",
    }
}

fn ui_err(e: InquireError) -> DomainError {
    DomainError::Ui(e.to_string())
}

fn is_cancel(e: &InquireError) -> bool {
    matches!(
        e,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Actions offered for `view`: links first, then panel controls.
pub fn header_actions(view: &HeaderView) -> Vec<HeaderAction> {
    let mut out: Vec<HeaderAction> = Vec::new();
    for link in view.visible_links() {
        let action = HeaderAction::Follow {
            href: link.href.clone(),
            label: link.label.clone(),
        };
        if !out.contains(&action) {
            out.push(action);
        }
    }

    if let HeaderActions::Account(AccountControl { dropdown, .. }) = &view.actions {
        out.push(HeaderAction::Toggle {
            panel: Panel::UserMenu,
            open: dropdown.is_some(),
        });
    }
    if !matches!(view.actions, HeaderActions::Pending) {
        out.push(HeaderAction::Toggle {
            panel: Panel::MobileMenu,
            open: view.mobile_panel.is_some(),
        });
    }
    out.extend(view.overlays.iter().map(|p| HeaderAction::Dismiss(*p)));
    if matches!(view.actions, HeaderActions::Account(_)) {
        out.push(HeaderAction::SignOut);
    }
    out.push(HeaderAction::Back);
    out
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    catalog: Arc<PostCatalog>,
    exporter: Arc<CatalogExporter>,
    settings: HeaderSettings,
}

impl TuiInputPort {
    pub fn new(
        catalog: Arc<PostCatalog>,
        exporter: Arc<CatalogExporter>,
        settings: HeaderSettings,
    ) -> Self {
        Self {
            catalog,
            exporter,
            settings,
        }
    }

    async fn browse_header(&self, identity: Option<UserIdentity>) -> Result<(), DomainError> {
        let session = Arc::new(
            InMemorySession::new().with_sign_out_delay(self.settings.sign_out_delay),
        );
        let router = Arc::new(MemoryRouter::new(self.settings.initial_path.clone()));
        let menu = NavigationMenu::new(
            Arc::clone(&session) as Arc<dyn SessionPort>,
            Arc::clone(&router) as Arc<dyn RouterPort>,
            self.settings.privileged_role.clone(),
        );

        println!("{}", render_header(&menu.render().await));
        session.resolve(identity);

        loop {
            let view = menu.render().await;
            println!("\n{}  @ {}", render_header(&view).trim_end(), router.current_path());

            let choice = match Select::new("Header", header_actions(&view)).prompt() {
                Ok(c) => c,
                Err(e) if is_cancel(&e) => return Ok(()),
                Err(e) => return Err(ui_err(e)),
            };

            match choice {
                HeaderAction::Follow { href, .. } => menu.navigate(&href).await?,
                HeaderAction::Toggle { panel, .. } => menu.toggle(panel),
                HeaderAction::Dismiss(panel) => menu.dismiss(panel),
                HeaderAction::SignOut => {
                    let spinner = ProgressBar::new_spinner();
                    spinner.set_message("Signing out...");
                    spinner.enable_steady_tick(Duration::from_millis(80));
                    let res = menu.sign_out().await;
                    spinner.finish_and_clear();
                    if let Err(e) = res {
                        warn!(error = %e, "sign-out reported an error");
                        println!("Sign-out problem: {}", e);
                    }
                }
                HeaderAction::Back => return Ok(()),
            }
        }
    }

    fn browse_blog(&self) -> Result<(), DomainError> {
        let categories: Vec<String> = self
            .catalog
            .categories()
            .into_iter()
            .map(String::from)
            .collect();
        let category = match Select::new("Category", categories).prompt() {
            Ok(c) => c,
            Err(e) if is_cancel(&e) => return Ok(()),
            Err(e) => return Err(ui_err(e)),
        };

        let posts = self.catalog.in_category(&category);
        let titles: Vec<String> = posts
            .iter()
            .map(|p| format!("{} ({})", p.title, p.date))
            .collect();
        let picked = match Select::new("Post", titles).raw_prompt() {
            Ok(opt) => opt.index,
            Err(e) if is_cancel(&e) => return Ok(()),
            Err(e) => return Err(ui_err(e)),
        };

        if let Some(post) = posts.get(picked) {
            println!("\n{}", post_to_markdown(post, &self.catalog));
        }
        Ok(())
    }

    async fn export(&self) -> Result<(), DomainError> {
        let summary = self.exporter.export(&self.catalog).await?;
        println!(
            "Exported {} posts: {}, {}",
            summary.pages.len(),
            summary.json.display(),
            summary.index.display()
        );
        Ok(())
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let options = vec![
            MainChoice::BrowseAsGuest,
            MainChoice::BrowseSignedIn,
            MainChoice::BrowseBlog,
            MainChoice::Export,
            MainChoice::Quit,
        ];
        loop {
            let choice = match Select::new("What next?", options.clone()).prompt() {
                Ok(c) => c,
                Err(e) if is_cancel(&e) => return Ok(()),
                Err(e) => return Err(ui_err(e)),
            };
            match choice {
                MainChoice::BrowseAsGuest => self.browse_header(None).await?,
                MainChoice::BrowseSignedIn => {
                    let who = self.settings.demo_identity.clone();
                    self.browse_header(Some(who)).await?
                }
                MainChoice::BrowseBlog => self.browse_blog()?,
                MainChoice::Export => self.export().await?,
                MainChoice::Quit => return Ok(()),
            }
        }
    }
}
