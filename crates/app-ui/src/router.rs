//! Screen router
//!
//! [`NavigationRouter`] is the app's entry point at runtime. It owns the
//! navigation state, the collaborators, and the app-open ad trigger, and
//! turns the current state into a [`RenderedScreen`] descriptor: which
//! screen to show, its chrome, whether it gets the ad service, and the
//! selection it receives.
//!
//! Only the image editor needs more than the selection string: it gets the
//! resolved bitmap. When the selected reference resolves to nothing the
//! editor renders as a placeholder.

use app_platform::{AdPresentationTrigger, ScenePhase};
use app_state::{AppConfig, SelectionContext};
use media_processing::{Base64Layout, ImageBlob, ImageCodec};

use crate::navigation::{HomePanel, NavigationFlags, NavigationState, Screen};
use crate::services::AppServices;
use crate::theme::{ScreenChrome, Theme};

/// What a rendered screen carries beyond its chrome
#[derive(Debug, Clone)]
pub enum ScreenBody {
    /// Home with its active panel
    Home {
        /// Panel inside home
        panel: HomePanel,
    },
    /// Image editor with the resolved image
    EditImage {
        /// Image being edited
        image: ImageBlob,
    },
    /// Any other screen; it reads what it needs from the selection
    Standard,
    /// Nothing could be shown for this screen
    Placeholder,
}

/// Descriptor of the single screen to show
#[derive(Debug, Clone)]
pub struct RenderedScreen {
    /// Screen being shown
    pub screen: Screen,
    /// Chrome around it
    pub chrome: ScreenChrome,
    /// Whether the ad service is handed to it
    pub ads_enabled: bool,
    /// Selection passed down
    pub selection: SelectionContext,
    /// Screen-specific payload
    pub body: ScreenBody,
}

impl RenderedScreen {
    /// Check if this is a placeholder render
    pub fn is_placeholder(&self) -> bool {
        matches!(self.body, ScreenBody::Placeholder)
    }

    /// The editor image, if this is a populated editor
    pub fn edit_image(&self) -> Option<&ImageBlob> {
        match &self.body {
            ScreenBody::EditImage { image } => Some(image),
            _ => None,
        }
    }
}

/// Owns navigation state and renders the current screen
pub struct NavigationRouter {
    state: NavigationState,
    services: AppServices,
    codec: ImageCodec,
    theme: Theme,
    ads: AdPresentationTrigger,
}

impl NavigationRouter {
    /// Create a router on the home screen and start the ad SDK
    pub fn new(services: AppServices, config: &AppConfig) -> Self {
        let mut ads = AdPresentationTrigger::new(services.ads.clone());
        ads.launch();

        Self {
            state: NavigationState::new(config.initial_selection()),
            codec: ImageCodec::new()
                .with_layout(Base64Layout::from_line_length(config.base64_line_length)),
            theme: Theme::from_config(config),
            services,
            ads,
        }
    }

    /// Restore a router from saved navigation state
    pub fn with_state(mut self, state: NavigationState) -> Self {
        self.state = state;
        self
    }

    /// Get the navigation state
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Get the current screen
    pub fn current_screen(&self) -> Screen {
        self.state.current_screen()
    }

    /// Get the shared selection
    pub fn selection(&self) -> &SelectionContext {
        &self.state.selection
    }

    /// Get the collaborators
    pub fn services(&self) -> &AppServices {
        &self.services
    }

    /// Get the image codec
    pub fn codec(&self) -> &ImageCodec {
        &self.codec
    }

    /// Get the ad trigger
    pub fn ads(&self) -> &AdPresentationTrigger {
        &self.ads
    }

    /// Show a screen
    pub fn navigate(&mut self, screen: Screen) {
        self.state.navigate(screen);
    }

    /// Go back one level (returns false on Home)
    pub fn go_back(&mut self) -> bool {
        self.state.go_back()
    }

    /// Show a panel of the home screen
    pub fn show_home_panel(&mut self, panel: HomePanel) {
        self.state.show_home_panel(panel);
    }

    /// Adopt legacy visibility flags
    pub fn apply_flags(&mut self, flags: NavigationFlags) {
        self.state.apply_flags(flags);
    }

    /// Select a category
    pub fn select_category(&mut self, name: impl Into<String>) {
        self.state.selection.select_category(name);
    }

    /// Select an image by reference
    pub fn select_image(&mut self, reference: impl Into<String>) {
        self.state.selection.select_image(reference);
    }

    /// Select a home screen option
    pub fn select_option(&mut self, index: usize) {
        self.state.selection.select_option(index);
    }

    /// Select an image and open it in the editor
    pub fn edit_image(&mut self, reference: impl Into<String>) {
        self.select_image(reference);
        self.navigate(Screen::EditImage);
    }

    /// Resolve the selected image reference
    pub fn resolve_selected_image(&self) -> Option<ImageBlob> {
        self.codec.resolve(
            &self.state.selection.selected_image_reference,
            self.services.assets.as_ref(),
        )
    }

    /// Describe the screen to show
    pub fn render(&self) -> RenderedScreen {
        let screen = self.state.current_screen();

        let body = match screen {
            Screen::Home => ScreenBody::Home {
                panel: self.state.home_panel,
            },
            Screen::EditImage => match self.resolve_selected_image() {
                Some(image) => ScreenBody::EditImage { image },
                None => {
                    tracing::debug!("selected image did not resolve, rendering placeholder");
                    ScreenBody::Placeholder
                }
            },
            _ => ScreenBody::Standard,
        };

        RenderedScreen {
            screen,
            chrome: self.theme.chrome_for(screen),
            ads_enabled: screen.shows_ads(),
            selection: self.state.selection.clone(),
            body,
        }
    }

    /// Handle an app lifecycle change
    ///
    /// Becoming active requests an app-open ad. Returns whether one was
    /// requested.
    pub fn on_scene_phase(&mut self, phase: ScenePhase) -> bool {
        self.ads.on_scene_phase(phase)
    }
}

impl std::fmt::Debug for NavigationRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationRouter")
            .field("state", &self.state)
            .field("ads", &self.ads)
            .finish_non_exhaustive()
    }
}
