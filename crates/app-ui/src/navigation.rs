//! Navigation state machine for Love Quotes
//!
//! The app shows exactly one full-screen view at a time. This module
//! provides:
//! - The [`Screen`] catalog, in rendering priority order
//! - The per-screen transition table and back targets
//! - [`NavigationFlags`], the legacy one-boolean-per-screen representation,
//!   and its resolution into a single screen
//! - [`NavigationState`], the current screen plus the shared selection

use app_state::SelectionContext;
use serde::{Deserialize, Serialize};

// =============================================================================
// Screens
// =============================================================================

/// All routed screens, declared in rendering priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Screen {
    /// Main menu
    #[default]
    Home,
    /// Message categories
    MessagesHome,
    /// Image editor for the selected image
    EditImage,
    /// Background picker reached from settings
    BackgroundChooser,
    /// Favorite messages list
    FavoriteMessages,
    /// Settings
    Settings,
    /// Quote images grid
    Images,
    /// Quote images, one at a time
    ImagesSlide,
    /// Messages in the selected category
    Messages,
    /// Favorite messages, one at a time
    FavoriteMessagesSlide,
    /// Messages, one at a time
    MessagesSlide,
}

impl Screen {
    /// Every screen, highest rendering priority first
    pub const PRIORITY: [Screen; 11] = [
        Screen::Home,
        Screen::MessagesHome,
        Screen::EditImage,
        Screen::BackgroundChooser,
        Screen::FavoriteMessages,
        Screen::Settings,
        Screen::Images,
        Screen::ImagesSlide,
        Screen::Messages,
        Screen::FavoriteMessagesSlide,
        Screen::MessagesSlide,
    ];

    /// Screens this screen hands over to through its own controls
    pub fn exits(&self) -> &'static [Screen] {
        use Screen::*;

        match self {
            Home => &[
                MessagesHome,
                EditImage,
                FavoriteMessages,
                Settings,
                Images,
                ImagesSlide,
                Messages,
            ],
            MessagesHome => &[Home, Messages],
            EditImage => &[Home],
            BackgroundChooser => &[Settings],
            FavoriteMessages => &[Home, FavoriteMessagesSlide],
            Settings => &[Home, BackgroundChooser],
            Images => &[Home, ImagesSlide],
            ImagesSlide => &[Home, Images],
            Messages => &[MessagesHome, MessagesSlide],
            FavoriteMessagesSlide => &[Home, FavoriteMessages],
            MessagesSlide => &[Home, Messages],
        }
    }

    /// Check if `target` is one of this screen's exits
    pub fn can_exit_to(&self, target: Screen) -> bool {
        self.exits().contains(&target)
    }

    /// Where "back" leads from this screen (`None` on Home)
    pub fn parent(&self) -> Option<Screen> {
        match self {
            Screen::Home => None,
            Screen::BackgroundChooser => Some(Screen::Settings),
            Screen::ImagesSlide => Some(Screen::Images),
            Screen::Messages => Some(Screen::MessagesHome),
            Screen::FavoriteMessagesSlide => Some(Screen::FavoriteMessages),
            Screen::MessagesSlide => Some(Screen::Messages),
            _ => Some(Screen::Home),
        }
    }

    /// Whether the ad service is handed to this screen
    pub fn shows_ads(&self) -> bool {
        matches!(
            self,
            Screen::Home
                | Screen::EditImage
                | Screen::FavoriteMessages
                | Screen::Settings
                | Screen::ImagesSlide
                | Screen::FavoriteMessagesSlide
                | Screen::MessagesSlide
        )
    }

    /// Get the screen title
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::MessagesHome => "Messages",
            Screen::EditImage => "Edit Image",
            Screen::BackgroundChooser => "Background",
            Screen::FavoriteMessages => "Favorites",
            Screen::Settings => "Settings",
            Screen::Images => "Images",
            Screen::ImagesSlide => "Images",
            Screen::Messages => "Messages",
            Screen::FavoriteMessagesSlide => "Favorites",
            Screen::MessagesSlide => "Messages",
        }
    }
}

/// Panel shown inside the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomePanel {
    /// Quote categories
    #[default]
    Quotes,
    /// Image categories
    Images,
    /// Animated images
    Gifs,
}

// =============================================================================
// Legacy Flags
// =============================================================================

/// One boolean per screen, as hosts that track visibility flags send it
///
/// Several flags may be set at once. [`NavigationFlags::resolve`] picks the
/// first set flag in [`Screen::PRIORITY`] order and falls back to
/// [`Screen::Home`] when none is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationFlags {
    /// Home
    pub main_view: bool,
    /// Message categories
    pub messages_home: bool,
    /// Image editor
    pub image_edit: bool,
    /// Background picker
    pub background_view: bool,
    /// Favorite messages list
    pub messages_favorite_view: bool,
    /// Settings
    pub setting: bool,
    /// Images grid
    pub image: bool,
    /// Images slideshow
    pub image_slide: bool,
    /// Messages list
    pub messages: bool,
    /// Favorite messages slideshow
    pub messages_favorite_slide: bool,
    /// Messages slideshow
    pub messages_slide: bool,
    /// Home shows its images panel
    pub image_home: bool,
    /// Home shows its GIF panel
    pub gif: bool,
    /// Home shows GIF messages (treated as the GIF panel)
    pub image_messages_gif: bool,
}

impl NavigationFlags {
    /// Flags with exactly the given screen set
    pub fn for_screen(screen: Screen) -> Self {
        let mut flags = Self::default();
        *flags.flag_mut(screen) = true;
        flags
    }

    /// Check the flag of a screen
    pub fn is_set(&self, screen: Screen) -> bool {
        match screen {
            Screen::Home => self.main_view,
            Screen::MessagesHome => self.messages_home,
            Screen::EditImage => self.image_edit,
            Screen::BackgroundChooser => self.background_view,
            Screen::FavoriteMessages => self.messages_favorite_view,
            Screen::Settings => self.setting,
            Screen::Images => self.image,
            Screen::ImagesSlide => self.image_slide,
            Screen::Messages => self.messages,
            Screen::FavoriteMessagesSlide => self.messages_favorite_slide,
            Screen::MessagesSlide => self.messages_slide,
        }
    }

    fn flag_mut(&mut self, screen: Screen) -> &mut bool {
        match screen {
            Screen::Home => &mut self.main_view,
            Screen::MessagesHome => &mut self.messages_home,
            Screen::EditImage => &mut self.image_edit,
            Screen::BackgroundChooser => &mut self.background_view,
            Screen::FavoriteMessages => &mut self.messages_favorite_view,
            Screen::Settings => &mut self.setting,
            Screen::Images => &mut self.image,
            Screen::ImagesSlide => &mut self.image_slide,
            Screen::Messages => &mut self.messages,
            Screen::FavoriteMessagesSlide => &mut self.messages_favorite_slide,
            Screen::MessagesSlide => &mut self.messages_slide,
        }
    }

    /// Number of screen flags set
    pub fn count_set(&self) -> usize {
        Screen::PRIORITY.iter().filter(|s| self.is_set(**s)).count()
    }

    /// The screen these flags select
    pub fn resolve(&self) -> Screen {
        Screen::PRIORITY
            .iter()
            .copied()
            .find(|s| self.is_set(*s))
            .unwrap_or_default()
    }

    /// The home panel these flags select
    pub fn home_panel(&self) -> HomePanel {
        if self.image_home {
            HomePanel::Images
        } else if self.gif || self.image_messages_gif {
            HomePanel::Gifs
        } else {
            HomePanel::Quotes
        }
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Complete navigation state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    /// Screen being shown
    pub screen: Screen,
    /// Panel inside the home screen
    #[serde(default)]
    pub home_panel: HomePanel,
    /// Shared selection
    pub selection: SelectionContext,
}

impl NavigationState {
    /// Create a state on the home screen with the given selection
    pub fn new(selection: SelectionContext) -> Self {
        Self {
            screen: Screen::Home,
            home_panel: HomePanel::default(),
            selection,
        }
    }

    /// Get the current screen
    pub fn current_screen(&self) -> Screen {
        self.screen
    }

    /// Show a screen
    ///
    /// Navigation never fails. Moving somewhere the current screen has no
    /// control for is allowed but logged.
    pub fn navigate(&mut self, target: Screen) {
        let from = self.screen;
        if from == target {
            return;
        }
        if !from.can_exit_to(target) {
            tracing::warn!(?from, to = ?target, "navigation outside the transition table");
        }

        tracing::debug!(?from, to = ?target, "navigate");
        self.screen = target;
    }

    /// Go to the current screen's parent (returns false on Home)
    pub fn go_back(&mut self) -> bool {
        match self.screen.parent() {
            Some(parent) => {
                tracing::debug!(from = ?self.screen, to = ?parent, "back");
                self.screen = parent;
                true
            }
            None => false,
        }
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.screen.parent().is_some()
    }

    /// Show a panel of the home screen, moving to Home if needed
    pub fn show_home_panel(&mut self, panel: HomePanel) {
        self.navigate(Screen::Home);
        self.home_panel = panel;
    }

    /// Adopt the screen selected by legacy flags
    pub fn apply_flags(&mut self, flags: NavigationFlags) {
        let count = flags.count_set();
        if count != 1 {
            tracing::warn!(count, resolved = ?flags.resolve(), "flags do not name exactly one screen");
        }

        self.screen = flags.resolve();
        if self.screen == Screen::Home {
            self.home_panel = flags.home_panel();
        }
    }

    /// Express the state as legacy flags
    pub fn to_flags(&self) -> NavigationFlags {
        let mut flags = NavigationFlags::for_screen(self.screen);
        if self.screen == Screen::Home {
            match self.home_panel {
                HomePanel::Quotes => {}
                HomePanel::Images => flags.image_home = true,
                HomePanel::Gifs => flags.gif = true,
            }
        }
        flags
    }

    /// Reset to the home screen, keeping the selection
    pub fn reset(&mut self) {
        self.screen = Screen::Home;
        self.home_panel = HomePanel::default();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_lists_every_screen_once() {
        let mut seen = std::collections::HashSet::new();
        for screen in Screen::PRIORITY {
            assert!(seen.insert(screen));
        }
        assert_eq!(seen.len(), 11);
        assert_eq!(Screen::PRIORITY[0], Screen::Home);
    }

    #[test]
    fn test_exits_never_include_self() {
        for screen in Screen::PRIORITY {
            assert!(!screen.can_exit_to(screen), "{:?}", screen);
        }
    }

    #[test]
    fn test_parent_is_an_exit() {
        for screen in Screen::PRIORITY {
            if let Some(parent) = screen.parent() {
                assert!(screen.can_exit_to(parent), "{:?} -> {:?}", screen, parent);
            }
        }
    }

    #[test]
    fn test_every_screen_reachable_from_home() {
        let mut reached = vec![Screen::Home];
        let mut i = 0;
        while i < reached.len() {
            for next in reached[i].exits() {
                if !reached.contains(next) {
                    reached.push(*next);
                }
            }
            i += 1;
        }
        assert_eq!(reached.len(), Screen::PRIORITY.len());
    }

    #[test]
    fn test_shows_ads() {
        assert!(Screen::Home.shows_ads());
        assert!(Screen::EditImage.shows_ads());
        assert!(!Screen::Images.shows_ads());
        assert!(!Screen::Messages.shows_ads());
        assert!(!Screen::BackgroundChooser.shows_ads());
    }

    #[test]
    fn test_flags_resolve_single() {
        for screen in Screen::PRIORITY {
            assert_eq!(NavigationFlags::for_screen(screen).resolve(), screen);
        }
    }

    #[test]
    fn test_flags_first_true_wins() {
        let flags = NavigationFlags {
            messages_slide: true,
            setting: true,
            image: true,
            ..Default::default()
        };
        assert_eq!(flags.count_set(), 3);
        assert_eq!(flags.resolve(), Screen::Settings);

        let flags = NavigationFlags {
            main_view: true,
            image_edit: true,
            ..Default::default()
        };
        assert_eq!(flags.resolve(), Screen::Home);
    }

    #[test]
    fn test_flags_none_set_falls_back_to_home() {
        assert_eq!(NavigationFlags::default().resolve(), Screen::Home);

        // Panel flags alone do not route anywhere else
        let flags = NavigationFlags {
            gif: true,
            ..Default::default()
        };
        assert_eq!(flags.resolve(), Screen::Home);
        assert_eq!(flags.home_panel(), HomePanel::Gifs);
    }

    #[test]
    fn test_state_default() {
        let state = NavigationState::default();
        assert_eq!(state.current_screen(), Screen::Home);
        assert_eq!(state.home_panel, HomePanel::Quotes);
        assert!(!state.can_go_back());
        assert_eq!(state.selection.category_name, "NONE");
    }

    #[test]
    fn test_state_navigate_and_back() {
        let mut state = NavigationState::default();

        state.navigate(Screen::Settings);
        state.navigate(Screen::BackgroundChooser);
        assert_eq!(state.current_screen(), Screen::BackgroundChooser);

        assert!(state.go_back());
        assert_eq!(state.current_screen(), Screen::Settings);
        assert!(state.go_back());
        assert_eq!(state.current_screen(), Screen::Home);
        assert!(!state.go_back());
    }

    #[test]
    fn test_state_navigate_off_table_still_moves() {
        let mut state = NavigationState::default();
        state.navigate(Screen::BackgroundChooser);
        assert_eq!(state.current_screen(), Screen::BackgroundChooser);
    }

    #[test]
    fn test_home_panel() {
        let mut state = NavigationState::default();
        state.navigate(Screen::Images);

        state.show_home_panel(HomePanel::Images);
        assert_eq!(state.current_screen(), Screen::Home);
        assert_eq!(state.home_panel, HomePanel::Images);
        assert!(state.to_flags().image_home);
    }

    #[test]
    fn test_apply_flags() {
        let mut state = NavigationState::default();
        state.apply_flags(NavigationFlags::for_screen(Screen::MessagesSlide));
        assert_eq!(state.current_screen(), Screen::MessagesSlide);

        state.apply_flags(NavigationFlags::default());
        assert_eq!(state.current_screen(), Screen::Home);
    }

    #[test]
    fn test_to_flags_round_trip() {
        let mut state = NavigationState::default();
        for screen in Screen::PRIORITY {
            state.navigate(screen);
            let flags = state.to_flags();
            assert_eq!(flags.count_set(), 1);
            assert_eq!(flags.resolve(), screen);
        }
    }

    #[test]
    fn test_state_serialization() {
        let mut state = NavigationState::default();
        state.navigate(Screen::ImagesSlide);
        state.selection.select_category("Romance");

        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"screen\":\"imagesSlide\""));

        let parsed: NavigationState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn test_flags_deserialize_partial() {
        let flags: NavigationFlags = serde_json::from_str(r#"{"imageSlide": true}"#).unwrap();
        assert_eq!(flags.resolve(), Screen::ImagesSlide);
    }

    #[test]
    fn test_reset_keeps_selection() {
        let mut state = NavigationState::default();
        state.selection.select_category("Romance");
        state.show_home_panel(HomePanel::Gifs);
        state.navigate(Screen::Settings);

        state.reset();

        assert_eq!(state.current_screen(), Screen::Home);
        assert_eq!(state.home_panel, HomePanel::Quotes);
        assert_eq!(state.selection.category_name, "Romance");
    }
}
