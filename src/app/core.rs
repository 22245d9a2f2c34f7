//! the core app
use {
    super::{
        cli::{Cli, Command},
        logging,
    },
    crate::{
        client::{ClientOptions, DashClient, feedback::Feedback},
        config::instance::reload_config,
        controller::{
            ThemeController,
            notifier::{ThemeChange, from_fn},
        },
        error::Result,
        getopt,
        storage::{MemoryStore, PreferenceStore, RedbStore},
        surface::RootElement,
        theme::registry::ThemeRegistry,
        watcher::{SchemeProbe, SystemPreferenceWatcher, detect_prefers_dark, scheme_probe},
        widgets::{BackgroundEffect, ChartThemer, TooltipThemer},
    },
    clap::Parser,
    owo_colors::OwoColorize,
    std::{cell::RefCell, rc::Rc, sync::Arc, time::Duration},
    tracing::{debug, info, warn},
};

/// the dashtheme app
#[derive(Debug)]
pub struct DashApp {
    /// the parsed command line
    cli: Cli,
    /// the theme catalog
    registry: Arc<ThemeRegistry>,
}

impl DashApp {
    /// initialize dashtheme
    ///
    /// - 1. installs the miette error handler hook
    /// - 2. handles the config generation flags, exiting if any ran
    /// - 3. sets up logging
    /// - 4. loads the config file
    ///
    /// # Errors
    ///
    /// returns an error if the miette hook can't be installed
    /// returns an error if config generation fails
    /// returns an error if it fails to setup logging
    /// returns an error if it fails to load the configuration file
    pub async fn init() -> Result<Self> {
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::MietteHandlerOpts::new()
                    .terminal_links(true)
                    .unicode(true)
                    .context_lines(3)
                    .tab_width(4)
                    .build(),
            )
        }))?;

        let cli = Cli::parse();

        if cli.run_generators()? {
            std::process::exit(0);
        }

        logging::setup()?;
        reload_config()?;

        info!(
            "Starting {} v{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        );

        Ok(Self {
            cli,
            registry: Arc::new(ThemeRegistry::new()),
        })
    }

    /// run the chosen command
    ///
    /// # Errors
    ///
    /// returns an error if the command fails
    pub async fn run(&self) -> Result<()> {
        match self.cli.command.clone().unwrap_or(Command::Current) {
            Command::List => self.list(),
            Command::Current => self.current(),
            Command::Set { id, entitled } => self.set(&id, entitled).await,
            Command::Reset => self.reset(),
            Command::Css { id } => self.css(id.as_deref()),
            Command::Watch => self.watch().await,
            Command::Feedback {
                page,
                helpful,
                comment,
                ..
            } => self.feedback(page, helpful, comment).await,
        }
    }

    /// print the catalog, marking the active theme
    fn list(&self) -> Result<()> {
        let ctl = self.controller();

        for meta in self.registry.list_themes() {
            let marker = if meta.id == ctl.current() { "*" } else { " " };
            let mode = if meta.is_dark() { "dark" } else { "light" };

            print!("{} {:<10} {:<14} {:<5}", marker, meta.id.bold(), meta.name, mode);

            if meta.premium {
                print!(" {}", "premium".yellow());
            }

            println!("  {}", meta.description.dimmed());
        }

        Ok(())
    }

    /// print the active theme
    fn current(&self) -> Result<()> {
        let ctl = self.controller();
        print_state(&ctl);
        Ok(())
    }

    /// switch themes
    async fn set(&self, id: &str, entitled: bool) -> Result<()> {
        let entitled = entitled || session_entitled();
        let mut ctl = self.controller_for(entitled);

        let outcome = ctl.set(id, entitled);

        if outcome.is_applied() {
            print_state(&ctl);
        } else {
            eprintln!("{} {}: {}", "not applied".red(), id, outcome);
        }

        if let Some(sync) = ctl.take_in_flight_sync()
            && let Err(e) = sync.await
        {
            warn!("theme sync task failed: {}", e);
        }

        Ok(())
    }

    /// forget the chosen theme
    fn reset(&self) -> Result<()> {
        let mut ctl = self.controller();
        ctl.reset();
        print_state(&ctl);
        Ok(())
    }

    /// print css variables for one theme or all of them
    fn css(&self, id: Option<&str>) -> Result<()> {
        let Some(id) = id else {
            print!("{}", self.registry.stylesheet());
            return Ok(());
        };

        match self.registry.css_vars(id) {
            Some(vars) => print!("{}", vars),
            None => crate::bail!("unknown theme {}", id),
        }

        Ok(())
    }

    /// follow the os preference until ctrl+c
    async fn watch(&self) -> Result<()> {
        let mut ctl = self.controller();

        let charts = Rc::new(RefCell::new(ChartThemer::new(Arc::clone(&self.registry))));
        let tooltips = Rc::new(RefCell::new(TooltipThemer::new()));
        let stars = Rc::new(RefCell::new(BackgroundEffect::starfield(None)));

        ctl.subscribe(Box::new(Rc::clone(&charts)));
        ctl.subscribe(Box::new(Rc::clone(&tooltips)));
        ctl.subscribe(Box::new(Rc::clone(&stars)));
        ctl.subscribe(Box::new(from_fn("printer", move |change: &ThemeChange| {
            println!(
                "{} {} ({})",
                "theme".green(),
                change.theme.bold(),
                widget_summary(&charts.borrow(), &tooltips.borrow(), &stars.borrow())
            );
            Ok(())
        })));

        print_state(&ctl);

        let interval = Duration::from_millis(getopt!(system.poll_interval_ms));
        let probe = configured_probe();
        let initial = detect_prefers_dark(&probe, getopt!(raw system.prefers_dark));
        let watcher = SystemPreferenceWatcher::new(probe, interval);
        let (changes, task) = watcher.spawn(initial);

        info!("watching the os color scheme every {:?}", interval);

        tokio::select! {
            _ = ctl.follow_system(changes) => {}
            _ = tokio::signal::ctrl_c() => debug!("interrupted"),
        }

        task.abort();
        Ok(())
    }

    /// send documentation feedback
    async fn feedback(&self, page: String, helpful: bool, comment: Option<String>) -> Result<()> {
        let client = DashClient::new(ClientOptions::from_config())?;
        let feedback = Feedback::new(page, helpful, comment);

        match client.submit_feedback(&feedback).await {
            Ok(response) => println!(
                "{} {}",
                "thanks!".green(),
                response.message.unwrap_or_default()
            ),
            Err(e) => warn!(page = %feedback.page, "feedback submission failed: {}", e),
        }

        Ok(())
    }

    /// build a controller for the configured session
    fn controller(&self) -> ThemeController<RootElement> {
        self.controller_for(session_entitled())
    }

    /// build a controller from the config and resolve the starting theme
    fn controller_for(&self, entitled: bool) -> ThemeController<RootElement> {
        let mut ctl = ThemeController::new(
            Arc::clone(&self.registry),
            RootElement::new(),
            open_store(),
        )
        .with_storage_key(getopt!(theme.storage_key))
        .with_default_theme(&getopt!(theme.default_theme));

        if let Some(client) = sync_client() {
            ctl = ctl.with_client(client);
        }

        ctl.init(system_prefers_dark(), entitled);
        ctl
    }
}

/// open the configured preference store
///
/// a store that can't be opened still lets themes apply, they just won't stick.
fn open_store() -> Box<dyn PreferenceStore> {
    if !getopt!(storage.enabled) {
        return Box::new(MemoryStore::new());
    }

    let path = getopt!(storage.path);

    match RedbStore::open(&path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!("failed to open preference store at {}: {}", path, e);
            Box::new(MemoryStore::unavailable())
        }
    }
}

/// a sync client, for signed-in sessions with sync turned on
fn sync_client() -> Option<DashClient> {
    if !getopt!(sync.enabled) || !getopt!(session.authenticated) {
        return None;
    }

    DashClient::new(ClientOptions::from_config())
        .inspect_err(|e| warn!("theme sync disabled: {}", e))
        .ok()
}

/// whether the configured session may use premium themes
fn session_entitled() -> bool {
    getopt!(session.entitled)
}

/// the probe the `[system]` config asks for
fn configured_probe() -> Box<dyn SchemeProbe + Send> {
    scheme_probe(getopt!(system.detect), getopt!(raw system.prefers_dark))
}

/// what the os wants, unless overridden
fn system_prefers_dark() -> bool {
    detect_prefers_dark(&configured_probe(), getopt!(raw system.prefers_dark))
}

/// one line describing what the widgets look like now
fn widget_summary(
    charts: &ChartThemer,
    tooltips: &TooltipThemer,
    stars: &BackgroundEffect,
) -> String {
    format!(
        "charts: {}, tooltips: {}, {}: {}",
        ChartThemer::style(charts).map_or("unstyled", |style| style.grid.as_str()),
        tooltips.class().unwrap_or("unstyled"),
        stars.layer(),
        if stars.is_enabled() { "on" } else { "off" },
    )
}

/// print the controller's state and the resulting root element
fn print_state(ctl: &ThemeController<RootElement>) {
    let mode = if ctl.is_dark() { "dark" } else { "light" };

    println!(
        "{} ({}, {})",
        ctl.current().bold(),
        mode,
        ctl.source().dimmed()
    );
    println!("<html {}>", ctl.surface().render_attrs());
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::controller::notifier::ThemeSubscriber,
    };

    #[test]
    fn summary_before_any_theme() {
        let charts = ChartThemer::new(Arc::new(ThemeRegistry::new()));
        let tooltips = TooltipThemer::new();
        let stars = BackgroundEffect::starfield(None);

        assert_eq!(
            widget_summary(&charts, &tooltips, &stars),
            "charts: unstyled, tooltips: unstyled, stars: off"
        );
    }

    #[test]
    fn summary_follows_the_widgets() {
        let mut charts = ChartThemer::new(Arc::new(ThemeRegistry::new()));
        let mut tooltips = TooltipThemer::new();
        let mut stars = BackgroundEffect::starfield(None);
        let change = ThemeChange {
            theme: "space".to_string(),
            is_dark: true,
        };

        charts.on_theme_change(&change).unwrap();
        tooltips.on_theme_change(&change).unwrap();
        stars.on_theme_change(&change).unwrap();

        let summary = widget_summary(&charts, &tooltips, &stars);
        assert!(summary.starts_with("charts: #"));
        assert!(summary.ends_with("tooltips: tooltip-dark, stars: on"));
    }
}
