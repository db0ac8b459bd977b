#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Checking,
    Savings,
    CapCoach,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Dashboard, Page::Checking, Page::Savings, Page::CapCoach];

    pub fn hash(self) -> &'static str {
        match self {
            Page::Dashboard => "#/",
            Page::Checking => "#/checking",
            Page::Savings => "#/savings",
            Page::CapCoach => "#/capcoach",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Checking => "Checking Account",
            Page::Savings => "Savings Account",
            Page::CapCoach => "CapCoach",
        }
    }

    /// Unknown fragments land on the dashboard.
    pub fn from_hash(hash: &str) -> Page {
        let path = hash.trim_start_matches('#').trim_end_matches('/');
        match path {
            "/checking" => Page::Checking,
            "/savings" => Page::Savings,
            "/capcoach" => Page::CapCoach,
            _ => Page::Dashboard,
        }
    }
}

pub fn current_page() -> Page {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Page::from_hash(&hash))
        .unwrap_or(Page::Dashboard)
}

pub fn push_page(page: Page) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(page.hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_round_trips_through_its_hash() {
        for page in Page::ALL {
            assert_eq!(Page::from_hash(page.hash()), page);
        }
    }

    #[test]
    fn unknown_or_empty_hash_is_dashboard() {
        assert_eq!(Page::from_hash(""), Page::Dashboard);
        assert_eq!(Page::from_hash("#/budget"), Page::Dashboard);
        assert_eq!(Page::from_hash("#/savings/"), Page::Savings);
    }
}
