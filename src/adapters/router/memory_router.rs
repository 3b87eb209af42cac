//! History-stack router kept in memory. Implements RouterPort.

use crate::domain::DomainError;
use crate::ports::RouterPort;
use tokio::sync::watch;
use tracing::debug;

#[derive(Debug, Clone, Default)]
struct RouteState {
    current: String,
    history: Vec<String>,
}

pub struct MemoryRouter {
    state: watch::Sender<RouteState>,
}

impl MemoryRouter {
    pub fn new(initial_path: impl Into<String>) -> Self {
        let (state, _) = watch::channel(RouteState {
            current: initial_path.into(),
            history: Vec::new(),
        });
        Self { state }
    }

    /// Paths navigated away from, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.state.borrow().history.clone()
    }

    /// Go back one entry. Returns false when there is nothing to go back to.
    pub fn back(&self) -> bool {
        self.state.send_if_modified(|s| match s.history.pop() {
            Some(prev) => {
                s.current = prev;
                true
            }
            None => false,
        })
    }
}

#[async_trait::async_trait]
impl RouterPort for MemoryRouter {
    fn current_path(&self) -> String {
        self.state.borrow().current.clone()
    }

    async fn navigate(&self, path: &str) -> Result<(), DomainError> {
        if !path.starts_with('/') {
            return Err(DomainError::Navigation(format!(
                "expected an absolute path, got '{}'",
                path
            )));
        }
        self.state.send_modify(|s| {
            let prev = std::mem::replace(&mut s.current, path.to_string());
            s.history.push(prev);
        });
        debug!(path, "route changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_navigate_and_back() {
        let router = MemoryRouter::new("/");
        router.navigate("/blog").await.unwrap();
        router.navigate("/blog/ifta-vs-hvut").await.unwrap();
        assert_eq!(router.current_path(), "/blog/ifta-vs-hvut");
        assert_eq!(router.history(), vec!["/", "/blog"]);

        assert!(router.back());
        assert_eq!(router.current_path(), "/blog");
        assert!(router.back());
        assert!(!router.back());
        assert_eq!(router.current_path(), "/");
    }

    #[tokio::test]
    async fn test_relative_path_rejected() {
        let router = MemoryRouter::new("/");
        let err = router.navigate("pricing").await.unwrap_err();
        assert!(matches!(err, DomainError::Navigation(_)));
        assert_eq!(router.current_path(), "/");
    }
}
