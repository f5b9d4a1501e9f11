use leptos::prelude::*;

/// Which of the three top-level panels is rendered.  A single enum value
/// keeps the panels mutually exclusive: exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Home,
    About,
    Connect,
}

impl ViewMode {
    /// Header, marquee, hero card, and the two navigation buttons.
    pub fn shows_home(self) -> bool {
        matches!(self, Self::Home)
    }

    pub fn shows_about(self) -> bool {
        matches!(self, Self::About)
    }

    pub fn shows_connect(self) -> bool {
        matches!(self, Self::Connect)
    }
}

/// Owner of the page's view mode.  Transitions are total: each setter
/// unconditionally overrides whatever mode was active before.
#[derive(Debug, Clone, Copy)]
pub struct ViewState(RwSignal<ViewMode>);

impl ViewState {
    pub fn new() -> Self {
        Self(RwSignal::new(ViewMode::default()))
    }

    pub fn mode(&self) -> ViewMode {
        self.0.get()
    }

    pub fn select_home(&self) {
        self.set(ViewMode::Home);
    }

    pub fn select_about(&self) {
        self.set(ViewMode::About);
    }

    pub fn select_connect(&self) {
        self.set(ViewMode::Connect);
    }

    fn set(&self, mode: ViewMode) {
        log::debug!("view mode -> {mode:?}");
        self.0.set(mode);
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Grabs the [`ViewState`] provided by the page root.
pub fn use_view_state() -> ViewState {
    expect_context::<ViewState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Exactly one predicate may hold for any mode
    fn active_panels(mode: ViewMode) -> usize {
        [mode.shows_home(), mode.shows_about(), mode.shows_connect()]
            .into_iter()
            .filter(|b| *b)
            .count()
    }

    #[test]
    fn test_initial_mode_is_home() {
        let owner = Owner::new();
        owner.set();
        let state = ViewState::new();
        assert_eq!(state.mode(), ViewMode::Home);
        assert!(state.mode().shows_home());
        assert!(!state.mode().shows_about());
        assert!(!state.mode().shows_connect());
    }

    #[test]
    fn test_select_connect_shows_only_connect() {
        let owner = Owner::new();
        owner.set();
        let state = ViewState::new();
        state.select_connect();
        assert_eq!(state.mode(), ViewMode::Connect);
        assert!(!state.mode().shows_home());
        assert!(!state.mode().shows_about());
        assert!(state.mode().shows_connect());
    }

    #[test]
    fn test_select_about_shows_only_about() {
        let owner = Owner::new();
        owner.set();
        let state = ViewState::new();
        state.select_about();
        assert_eq!(state.mode(), ViewMode::About);
        assert!(!state.mode().shows_home());
        assert!(state.mode().shows_about());
        assert!(!state.mode().shows_connect());
    }

    #[test]
    fn test_last_selection_wins() {
        let owner = Owner::new();
        owner.set();
        let state = ViewState::new();
        state.select_connect();
        state.select_about();
        assert_eq!(state.mode(), ViewMode::About);
        assert!(!state.mode().shows_connect());
    }

    #[test]
    fn test_select_home_returns_from_any_panel() {
        let owner = Owner::new();
        owner.set();
        let state = ViewState::new();
        state.select_about();
        state.select_home();
        assert_eq!(state.mode(), ViewMode::Home);

        state.select_connect();
        state.select_home();
        assert_eq!(state.mode(), ViewMode::Home);
    }

    #[test]
    fn test_modes_are_mutually_exclusive() {
        for mode in [ViewMode::Home, ViewMode::About, ViewMode::Connect] {
            assert_eq!(active_panels(mode), 1);
        }
    }
}
