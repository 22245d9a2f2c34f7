//! the theme controller
//!
//! one controller owns the theme state for a session. everything that changes
//! the theme goes through it: the initial resolve, user picks, resets and os
//! preference changes.
pub mod applicator;
pub mod gate;
pub mod notifier;
pub mod resolver;
pub mod state;

use {
    crate::{
        client::DashClient,
        controller::{
            notifier::{Notifier, SubscriptionId, ThemeChange, ThemeSubscriber},
            resolver::{Resolution, resolve_initial_theme},
            state::{ThemeSource, ThemeState},
        },
        storage::PreferenceStore,
        surface::Surface,
        theme::registry::ThemeRegistry,
    },
    std::sync::Arc,
    tokio::{sync::watch, task::JoinHandle},
    tracing::{debug, info, warn},
};

/// the storage key used unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "theme-preference";

/// the theme held before anything has been resolved
pub const DEFAULT_THEME: &str = "light";

/// what happened to a `set` request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// the theme is now active
    Applied,
    /// the registry doesn't know the theme
    UnknownTheme,
    /// the theme is premium and the session isn't entitled to it
    NotEntitled,
    /// the surface isn't mounted yet, nothing changed
    Deferred,
}

impl SetOutcome {
    /// whether the theme changed
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

impl std::fmt::Display for SetOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Applied => "applied",
            Self::UnknownTheme => "unknown theme",
            Self::NotEntitled => "premium required for this theme",
            Self::Deferred => "deferred until the page is ready",
        })
    }
}

/// owns the theme state and keeps the surface, storage and widgets in line
/// with it
pub struct ThemeController<S> {
    /// the known themes
    registry: Arc<ThemeRegistry>,
    /// where themes are applied
    surface: S,
    /// the active theme
    state: ThemeState,
    /// local preference storage
    store: Box<dyn PreferenceStore>,
    /// the key the explicit preference lives under
    storage_key: String,
    /// remote sync, only present for signed-in sessions
    client: Option<DashClient>,
    /// dependent widgets
    notifier: Notifier,
    /// the last os preference seen
    system_prefers_dark: bool,
    /// the most recent remote sync
    in_flight: Option<JoinHandle<()>>,
}

impl<S: Surface> ThemeController<S> {
    /// make a controller holding the default theme
    pub fn new(registry: Arc<ThemeRegistry>, surface: S, store: Box<dyn PreferenceStore>) -> Self {
        let state = ThemeState::initial(DEFAULT_THEME, registry.is_dark_theme(DEFAULT_THEME));

        Self {
            registry,
            surface,
            state,
            store,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            client: None,
            notifier: Notifier::new(),
            system_prefers_dark: false,
            in_flight: None,
        }
    }

    /// use a different storage key
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// hold a different theme until the first resolve
    ///
    /// ignored unless the theme is registered and free.
    pub fn with_default_theme(mut self, theme: &str) -> Self {
        if self.registry.is_valid(theme) && !self.registry.is_premium(theme) {
            self.state = ThemeState::initial(theme, self.registry.is_dark_theme(theme));
        } else {
            warn!(theme, "ignoring unusable default theme");
        }

        self
    }

    /// sync explicit picks to the dashboard
    pub fn with_client(mut self, client: DashClient) -> Self {
        self.client = Some(client);
        self
    }

    /// resolve and apply the starting theme
    ///
    /// a stored premium theme only comes back for entitled sessions; anyone
    /// else gets the os theme and keeps the stored value for later. returns
    /// false, leaving the state alone, while the surface isn't ready. call it
    /// again once it is.
    pub fn init(&mut self, system_prefers_dark: bool, is_entitled: bool) -> bool {
        self.system_prefers_dark = system_prefers_dark;

        let stored = self.load_stored();
        let mut resolution =
            resolve_initial_theme(&self.registry, stored.as_deref(), system_prefers_dark);

        if let Some(stored) = stored.as_deref()
            && stored != resolution.theme
        {
            debug!(stored, "ignoring stored theme that isn't registered");
        }

        if !gate::authorize(&self.registry, resolution.theme, is_entitled) {
            warn!(
                theme = resolution.theme,
                "stored premium theme not entitled, following the os"
            );
            resolution = Resolution::from_system(system_prefers_dark);
        }

        if !self.apply(resolution) {
            return false;
        }

        info!(
            theme = self.state.current(),
            source = %self.state.source(),
            "theme resolved"
        );
        self.notify();
        true
    }

    /// switch to a theme the user picked
    pub fn set(&mut self, theme_id: &str, is_entitled: bool) -> SetOutcome {
        if !self.registry.is_valid(theme_id) {
            warn!(theme = theme_id, "rejecting unknown theme");
            return SetOutcome::UnknownTheme;
        }

        if !gate::authorize(&self.registry, theme_id, is_entitled) {
            warn!(theme = theme_id, "rejecting premium theme, session not entitled");
            return SetOutcome::NotEntitled;
        }

        let applied = applicator::apply(
            &self.registry,
            &mut self.surface,
            &mut self.state,
            theme_id,
            ThemeSource::ExplicitUser,
        );

        if !applied {
            return SetOutcome::Deferred;
        }

        self.persist(theme_id);
        self.sync(theme_id);
        self.notify();

        SetOutcome::Applied
    }

    /// forget the explicit pick and follow the os again
    pub fn reset(&mut self) -> bool {
        if !self.surface.is_ready() {
            debug!("surface not ready, deferring reset");
            return false;
        }

        if let Err(e) = self.store.remove(&self.storage_key) {
            warn!("failed to clear stored theme: {}", e);
        }

        if !self.apply(Resolution::from_system(self.system_prefers_dark)) {
            return false;
        }

        info!(theme = self.state.current(), "theme reset to the os preference");
        self.notify();
        true
    }

    /// react to the os switching between light and dark
    ///
    /// ignored while an explicit pick is active.
    pub fn system_preference_changed(&mut self, prefers_dark: bool) -> bool {
        self.system_prefers_dark = prefers_dark;

        if !self.state.source().follows_system() {
            debug!(prefers_dark, "explicit theme active, ignoring os change");
            return false;
        }

        if !self.apply(Resolution::from_system(prefers_dark)) {
            return false;
        }

        self.notify();
        true
    }

    /// follow os preference changes until the sender goes away
    pub async fn follow_system(&mut self, mut changes: watch::Receiver<bool>) {
        while changes.changed().await.is_ok() {
            let prefers_dark = *changes.borrow_and_update();
            self.system_preference_changed(prefers_dark);
        }

        debug!("os preference watcher stopped");
    }

    /// add a dependent widget
    pub fn subscribe(&mut self, subscriber: Box<dyn ThemeSubscriber>) -> SubscriptionId {
        self.notifier.subscribe(subscriber)
    }

    /// remove a dependent widget
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// the active theme id
    pub fn current(&self) -> &str {
        self.state.current()
    }

    /// whether the active theme is dark
    pub fn is_dark(&self) -> bool {
        self.state.is_dark()
    }

    /// why the active theme is active
    pub fn source(&self) -> ThemeSource {
        self.state.source()
    }

    /// a copy of the whole state
    pub fn state(&self) -> ThemeState {
        self.state.clone()
    }

    /// open or close the theme picker, returning whether it's open now
    pub fn toggle_menu(&mut self) -> bool {
        let open = !self.state.menu_open();
        self.state.set_menu_open(open);
        open
    }

    /// close the theme picker
    pub fn close_menu(&mut self) {
        self.state.set_menu_open(false);
    }

    /// the known themes
    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    /// the surface themes are applied to
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// mutable access to the surface, e.g. to mount it
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// take the handle of the latest remote sync, if one was started
    pub fn take_in_flight_sync(&mut self) -> Option<JoinHandle<()>> {
        self.in_flight.take()
    }

    /// apply a resolved theme
    fn apply(&mut self, resolution: Resolution) -> bool {
        applicator::apply(
            &self.registry,
            &mut self.surface,
            &mut self.state,
            resolution.theme,
            resolution.source,
        )
    }

    /// read the stored preference, treating a broken store as empty
    fn load_stored(&self) -> Option<String> {
        self.store.load(&self.storage_key).unwrap_or_else(|e| {
            warn!("failed to read stored theme: {}", e);
            None
        })
    }

    /// remember an explicit pick, best effort
    fn persist(&self, theme_id: &str) {
        match self.store.save(&self.storage_key, theme_id) {
            Ok(()) => debug!(theme = theme_id, "theme preference stored"),
            Err(e) => warn!(theme = theme_id, "failed to store theme preference: {}", e),
        }
    }

    /// start a remote sync if this session syncs at all
    fn sync(&mut self, theme_id: &str) {
        if let Some(client) = self.client.as_ref()
            && let Some(handle) = client.spawn_theme_sync(theme_id)
        {
            self.in_flight = Some(handle);
        }
    }

    /// tell the widgets about the current theme
    fn notify(&mut self) {
        let change = ThemeChange {
            theme: self.state.current().to_string(),
            is_dark: self.state.is_dark(),
        };

        let report = self.notifier.notify(&change);

        if report.failed > 0 {
            warn!(
                failed = report.failed,
                delivered = report.delivered,
                "some widgets failed to re-theme"
            );
        }
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for ThemeController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("surface", &self.surface)
            .field("state", &self.state)
            .field("storage_key", &self.storage_key)
            .field("syncing", &self.client.is_some())
            .field("notifier", &self.notifier)
            .finish_non_exhaustive()
    }
}
