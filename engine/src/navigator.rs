//! Current-page holder.

use labsim_types::Page;

/// Holds the page being shown. Any page may be set from any other; legality
/// of a move is the workflows' business, not the navigator's.
#[derive(Debug, Clone, Copy, Default)]
pub struct Navigator {
    current: Page,
}

impl Navigator {
    #[must_use]
    pub fn current(&self) -> Page {
        self.current
    }

    /// Switch pages. Returns whether the page actually changed.
    pub fn go(&mut self, page: Page) -> bool {
        if self.current == page {
            return false;
        }
        tracing::info!(from = %self.current, to = %page, "Page transition");
        self.current = page;
        true
    }
}

#[cfg(test)]
mod tests {
    use labsim_types::{Page, PhenolPage, TitrationPage};

    use super::Navigator;

    #[test]
    fn starts_home_and_moves_anywhere() {
        let mut nav = Navigator::default();
        assert_eq!(nav.current(), Page::Home);
        assert!(nav.go(Page::Titration(TitrationPage::Graph)));
        assert!(nav.go(Page::Phenol(PhenolPage::Observe)));
        assert_eq!(nav.current(), Page::Phenol(PhenolPage::Observe));
    }

    #[test]
    fn same_page_is_not_a_change() {
        let mut nav = Navigator::default();
        assert!(!nav.go(Page::Home));
    }
}
