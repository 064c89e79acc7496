//! Navigation sidebar model.
//!
//! Maps a static route list to highlighted links based on the current
//! location, plus a collapse toggle that only affects layout width. The
//! sidebar is fully independent of the table's query state.

use tabula_core::SidebarConfig;

/// One link in the navigation sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    /// Display label.
    pub name: &'static str,

    /// Route the link points at.
    pub route: &'static str,

    /// Named icon for the renderer to resolve.
    pub icon: &'static str,
}

/// The static route list.
pub static NAV_ENTRIES: [NavEntry; 4] = [
    NavEntry {
        name: "Dashboard",
        route: "/dashboard",
        icon: "layout-dashboard",
    },
    NavEntry {
        name: "Sales",
        route: "/",
        icon: "shopping-cart",
    },
    NavEntry {
        name: "Customers",
        route: "/customers",
        icon: "users",
    },
    NavEntry {
        name: "Settings",
        route: "/settings",
        icon: "settings",
    },
];

/// Sidebar state: collapse flag and current location.
#[derive(Debug, Clone)]
pub struct SidebarState {
    /// Collapsed to icon-only width.
    pub collapsed: bool,

    /// Current route, for link highlighting.
    pub current_route: String,
}

impl SidebarState {
    /// Create sidebar state from configuration, starting at the sales view.
    pub fn new(config: &SidebarConfig) -> Self {
        Self {
            collapsed: config.collapsed,
            current_route: "/".to_string(),
        }
    }

    /// Flip the collapse toggle.
    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    /// Navigate to a route.
    pub fn navigate(&mut self, route: impl Into<String>) {
        self.current_route = route.into();
    }

    /// Whether an entry should render highlighted. Exact route match only.
    pub fn is_active(&self, entry: &NavEntry) -> bool {
        self.current_route == entry.route
    }

    /// The entry matching the current route, if any.
    pub fn active_entry(&self) -> Option<&'static NavEntry> {
        NAV_ENTRIES.iter().find(|entry| self.is_active(entry))
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new(&SidebarConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_start_expanded_at_sales() {
        let sidebar = SidebarState::default();
        assert!(!sidebar.collapsed);
        assert_eq!(sidebar.active_entry().map(|e| e.name), Some("Sales"));
    }

    #[test]
    fn test_config_sets_initial_collapse() {
        let sidebar = SidebarState::new(&SidebarConfig { collapsed: true });
        assert!(sidebar.collapsed);
    }

    #[test]
    fn test_toggle_flips_collapse_only() {
        let mut sidebar = SidebarState::default();
        sidebar.toggle();
        assert!(sidebar.collapsed);
        assert_eq!(sidebar.active_entry().map(|e| e.name), Some("Sales"));
        sidebar.toggle();
        assert!(!sidebar.collapsed);
    }

    #[test]
    fn test_navigation_moves_the_highlight() {
        let mut sidebar = SidebarState::default();
        sidebar.navigate("/customers");
        assert_eq!(sidebar.active_entry().map(|e| e.name), Some("Customers"));

        let active: Vec<&NavEntry> = NAV_ENTRIES
            .iter()
            .filter(|e| sidebar.is_active(e))
            .collect();
        assert_eq!(active.len(), 1);
    }

    #[test]
    fn test_unknown_route_highlights_nothing() {
        let mut sidebar = SidebarState::default();
        sidebar.navigate("/reports");
        assert_eq!(sidebar.active_entry(), None);
    }
}
