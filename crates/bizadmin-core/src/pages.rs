//! Static pages

use serde::{Deserialize, Serialize};

/// Shown by the router when no route matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotFoundPage {
    pub title: String,
    pub message: String,
    /// Label of the single link back to the application root
    pub home_label: String,
    pub home_href: String,
}

impl NotFoundPage {
    pub fn new(home_href: impl Into<String>) -> Self {
        Self {
            title: "404".to_string(),
            message: "The page you are looking for does not exist.".to_string(),
            home_label: "Back to home".to_string(),
            home_href: home_href.into(),
        }
    }
}

impl Default for NotFoundPage {
    fn default() -> Self {
        Self::new("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_to_root() {
        let page = NotFoundPage::default();
        assert_eq!(page.home_href, "/");
        assert_eq!(page.title, "404");
    }
}
