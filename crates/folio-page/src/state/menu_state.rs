//! Mobile navigation drawer state.

/// Whether the small-viewport drawer is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

/// In-page anchor a navigation link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Home,
    About,
    Projects,
    Contact,
}

impl NavTarget {
    /// All targets, in navigation bar order.
    pub const ALL: [NavTarget; 4] = [
        NavTarget::Home,
        NavTarget::About,
        NavTarget::Projects,
        NavTarget::Contact,
    ];

    /// Element id of the section this target scrolls to.
    pub fn anchor(&self) -> &'static str {
        match self {
            NavTarget::Home => "home",
            NavTarget::About => "about",
            NavTarget::Projects => "projects",
            NavTarget::Contact => "contact",
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            NavTarget::Home => "#home",
            NavTarget::About => "#about",
            NavTarget::Projects => "#projects",
            NavTarget::Contact => "#contact",
        }
    }

    /// Link text. The desktop bar capitalizes it with CSS.
    pub fn label(&self) -> &'static str {
        self.anchor()
    }
}

/// Open/closed flag of the drawer. Lives as long as the page view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationMenu {
    state: MenuState,
}

impl NavigationMenu {
    /// Create a closed menu.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Flips between Open and Closed.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        };
    }

    /// Forces Closed.
    pub fn close(&mut self) {
        self.state = MenuState::Closed;
    }

    /// Follows a navigation link: closes the drawer and returns the href.
    pub fn select(&mut self, target: NavTarget) -> &'static str {
        self.close();
        target.href()
    }
}
