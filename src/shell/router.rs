//! Dashboard page router
//!
//! Inner navigation is plain state: one active page, the sidebar flag and
//! the last known viewport width. The URL never changes.

use std::fmt;

use crate::config::UiConfig;

/// Dashboard pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Ingredients,
    Recipes,
    Inventory,
    Menus,
    Tables,
    Sales,
    Reports,
}

impl Page {
    /// Sidebar order
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::Ingredients,
        Page::Recipes,
        Page::Inventory,
        Page::Menus,
        Page::Tables,
        Page::Sales,
        Page::Reports,
    ];

    /// Stable key, also used as the menu item's data attribute
    pub fn key(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Ingredients => "ingredientes",
            Page::Recipes => "fichas",
            Page::Inventory => "inventario",
            Page::Menus => "cardapio",
            Page::Tables => "mesas",
            Page::Sales => "vendas",
            Page::Reports => "relatorios",
        }
    }

    /// Unknown keys land on Home
    pub fn from_key(key: &str) -> Page {
        Page::ALL
            .into_iter()
            .find(|p| p.key() == key)
            .unwrap_or(Page::Home)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Dashboard",
            Page::Ingredients => "Ingredientes",
            Page::Recipes => "Fichas Técnicas",
            Page::Inventory => "Inventário",
            Page::Menus => "Cardápios",
            Page::Tables => "Mesas & QR Codes",
            Page::Sales => "Vendas",
            Page::Reports => "Relatórios",
        }
    }

    pub fn breadcrumb(&self) -> String {
        format!("Home / {}", self.title())
    }

    /// Font Awesome icon class
    pub fn icon(&self) -> &'static str {
        match self {
            Page::Home => "fas fa-home",
            Page::Ingredients => "fas fa-box",
            Page::Recipes => "fas fa-utensils",
            Page::Inventory => "fas fa-clipboard-list",
            Page::Menus => "fas fa-book-open",
            Page::Tables => "fas fa-qrcode",
            Page::Sales => "fas fa-cash-register",
            Page::Reports => "fas fa-chart-bar",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Transition produced by [`Router::navigate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub from: Page,
    pub to: Page,
}

impl Navigation {
    /// Re-selecting the current page still reloads its content
    pub fn is_reload(&self) -> bool {
        self.from == self.to
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub page: Page,
    pub title: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct Router {
    active: Page,
    sidebar_open: bool,
    viewport_width: Option<u32>,
    breakpoint_px: u32,
}

impl Router {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            active: Page::Home,
            sidebar_open: false,
            viewport_width: None,
            breakpoint_px: config.mobile_breakpoint_px,
        }
    }

    pub fn active(&self) -> Page {
        self.active
    }

    pub fn title(&self) -> &'static str {
        self.active.title()
    }

    pub fn breadcrumb(&self) -> String {
        self.active.breadcrumb()
    }

    /// Switch the active page
    pub fn navigate(&mut self, page: Page) -> Navigation {
        let nav = Navigation {
            from: self.active,
            to: page,
        };
        self.active = page;
        if self.is_mobile() {
            self.sidebar_open = false;
        }
        tracing::debug!(from = %nav.from, to = %nav.to, "Navigate");
        nav
    }

    /// Every page with exactly one flagged active
    pub fn menu(&self) -> Vec<MenuEntry> {
        Page::ALL
            .into_iter()
            .map(|page| MenuEntry {
                page,
                title: page.title(),
                icon: page.icon(),
                active: page == self.active,
            })
            .collect()
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_open
    }

    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = Some(width);
    }

    /// At or below the configured breakpoint
    pub fn is_mobile(&self) -> bool {
        self.viewport_width
            .is_some_and(|w| w <= self.breakpoint_px)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(&UiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_home() {
        let router = Router::default();
        assert_eq!(router.active(), Page::Home);
        assert_eq!(router.title(), "Dashboard");
        assert_eq!(router.breadcrumb(), "Home / Dashboard");
    }

    #[test]
    fn test_navigate_updates_title_and_breadcrumb() {
        let mut router = Router::default();
        let nav = router.navigate(Page::Tables);

        assert_eq!(nav, Navigation { from: Page::Home, to: Page::Tables });
        assert_eq!(router.title(), "Mesas & QR Codes");
        assert_eq!(router.breadcrumb(), "Home / Mesas & QR Codes");
    }

    #[test]
    fn test_exactly_one_active_entry() {
        let mut router = Router::default();
        for page in Page::ALL {
            router.navigate(page);
            let menu = router.menu();
            assert_eq!(menu.len(), 8);
            let active: Vec<_> = menu.iter().filter(|e| e.active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].page, page);
        }
    }

    #[test]
    fn test_keys_round_trip_and_unknown_falls_back() {
        for page in Page::ALL {
            assert_eq!(Page::from_key(page.key()), page);
        }
        assert_eq!(Page::from_key("configuracoes"), Page::Home);
        assert_eq!(Page::from_key(""), Page::Home);
    }

    #[test]
    fn test_reselect_is_reload() {
        let mut router = Router::default();
        router.navigate(Page::Sales);
        assert!(router.navigate(Page::Sales).is_reload());
    }

    #[test]
    fn test_sidebar_closes_on_mobile_navigation() {
        let mut router = Router::default();
        router.set_viewport_width(768);
        assert!(router.toggle_sidebar());

        router.navigate(Page::Recipes);
        assert!(!router.sidebar_open());
    }

    #[test]
    fn test_sidebar_stays_on_desktop() {
        let mut router = Router::default();
        router.set_viewport_width(1280);
        router.toggle_sidebar();

        router.navigate(Page::Recipes);
        assert!(router.sidebar_open());
        assert!(!router.toggle_sidebar());
    }
}
