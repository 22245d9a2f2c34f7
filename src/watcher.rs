//! following the os light/dark preference
use {
    std::time::Duration,
    tokio::{sync::watch, task::JoinHandle},
    tracing::{debug, trace},
};

/// something that can tell whether the os prefers dark mode
pub trait SchemeProbe {
    /// `Some(true)` for dark, `Some(false)` for light, `None` if it can't tell
    fn prefers_dark(&self) -> Option<bool>;
}

impl<T: SchemeProbe + ?Sized> SchemeProbe for Box<T> {
    fn prefers_dark(&self) -> Option<bool> {
        (**self).prefers_dark()
    }
}

/// a probe that always says the same thing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedProbe(pub Option<bool>);

impl SchemeProbe for FixedProbe {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// an environment variable lookup
type Lookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// a probe reading the desktop's environment variables
///
/// looks at `GTK_THEME` first (`Adwaita:dark` and friends), then at the
/// terminal's `COLORFGBG` background color.
pub struct EnvProbe {
    /// how variables are read
    lookup: Lookup,
}

impl EnvProbe {
    /// a probe reading the real process environment
    pub fn new() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// a probe reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            lookup: Box::new(lookup),
        }
    }
}

impl Default for EnvProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EnvProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvProbe").finish_non_exhaustive()
    }
}

impl SchemeProbe for EnvProbe {
    fn prefers_dark(&self) -> Option<bool> {
        (self.lookup)("GTK_THEME")
            .and_then(|name| dark_from_theme_name(&name))
            .or_else(|| (self.lookup)("COLORFGBG").and_then(|v| dark_from_colorfgbg(&v)))
    }
}

/// read a gtk theme name
fn dark_from_theme_name(theme_name: &str) -> Option<bool> {
    let normalized = theme_name.trim().to_ascii_lowercase();

    if normalized.is_empty() {
        return None;
    }

    Some(normalized.contains("dark"))
}

/// read a `fg;bg` or `fg;default;bg` terminal color pair
fn dark_from_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(bg, 0..=6 | 8))
}

/// pick the probe the `[system]` settings ask for
///
/// a forced value or turned off detection pins the preference, so nothing the
/// environment says can override it.
pub fn scheme_probe(detect: bool, forced: Option<bool>) -> Box<dyn SchemeProbe + Send> {
    if detect && forced.is_none() {
        Box::new(EnvProbe::new())
    } else {
        Box::new(FixedProbe(forced))
    }
}

/// decide the os preference once, honoring a forced value
pub fn detect_prefers_dark<P: SchemeProbe + ?Sized>(probe: &P, forced: Option<bool>) -> bool {
    forced.or_else(|| probe.prefers_dark()).unwrap_or(false)
}

/// the shortest poll interval a watcher will use
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// polls a probe and publishes changes
#[derive(Debug)]
pub struct SystemPreferenceWatcher<P> {
    /// where the preference comes from
    probe: P,
    /// how often to look
    interval: Duration,
}

impl<P: SchemeProbe + Send + 'static> SystemPreferenceWatcher<P> {
    /// make a new watcher, polling no faster than [`MIN_POLL_INTERVAL`]
    pub fn new(probe: P, interval: Duration) -> Self {
        Self {
            probe,
            interval: interval.max(MIN_POLL_INTERVAL),
        }
    }

    /// start polling on the current tokio runtime
    ///
    /// the receiver only sees actual changes. the task stops once every
    /// receiver is gone.
    pub fn spawn(self, initial: bool) -> (watch::Receiver<bool>, JoinHandle<()>) {
        let (tx, rx) = watch::channel(initial);
        let Self { probe, interval } = self;

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);

            loop {
                ticker.tick().await;

                if tx.is_closed() {
                    debug!("nobody is listening for os preference changes, stopping");
                    break;
                }

                let Some(prefers_dark) = probe.prefers_dark() else {
                    trace!("os preference unknown this tick");
                    continue;
                };

                let changed = tx.send_if_modified(|current| {
                    if *current == prefers_dark {
                        false
                    } else {
                        *current = prefers_dark;
                        true
                    }
                });

                if changed {
                    debug!(prefers_dark, "os color scheme changed");
                }
            }
        });

        (rx, task)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::sync::{
            Arc,
            atomic::{AtomicU8, Ordering},
        },
    };

    /// 0 = unknown, 1 = light, 2 = dark
    #[derive(Clone, Default)]
    struct Toggle(Arc<AtomicU8>);

    impl Toggle {
        fn set(&self, dark: bool) {
            self.0.store(if dark { 2 } else { 1 }, Ordering::SeqCst);
        }
    }

    impl SchemeProbe for Toggle {
        fn prefers_dark(&self) -> Option<bool> {
            match self.0.load(Ordering::SeqCst) {
                1 => Some(false),
                2 => Some(true),
                _ => None,
            }
        }
    }

    fn env(pairs: &'static [(&'static str, &'static str)]) -> EnvProbe {
        EnvProbe::from_lookup(move |name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        })
    }

    #[test]
    fn gtk_theme_names() {
        assert_eq!(env(&[("GTK_THEME", "Adwaita:dark")]).prefers_dark(), Some(true));
        assert_eq!(env(&[("GTK_THEME", "Adwaita")]).prefers_dark(), Some(false));
        assert_eq!(env(&[]).prefers_dark(), None);
    }

    #[test]
    fn colorfgbg_fallback() {
        assert_eq!(env(&[("COLORFGBG", "15;0")]).prefers_dark(), Some(true));
        assert_eq!(env(&[("COLORFGBG", "0;default;15")]).prefers_dark(), Some(false));
        assert_eq!(env(&[("COLORFGBG", "garbage")]).prefers_dark(), None);
    }

    #[test]
    fn forced_value_wins() {
        assert!(detect_prefers_dark(&FixedProbe(Some(false)), Some(true)));
        assert!(!detect_prefers_dark(&FixedProbe(None), None));
        assert!(detect_prefers_dark(&FixedProbe(Some(true)), None));
    }

    #[test]
    fn pinned_settings_ignore_the_environment() {
        assert_eq!(scheme_probe(false, None).prefers_dark(), None);
        assert_eq!(scheme_probe(false, Some(true)).prefers_dark(), Some(true));
        assert_eq!(scheme_probe(true, Some(false)).prefers_dark(), Some(false));
        assert!(detect_prefers_dark(&scheme_probe(true, Some(true)), Some(true)));
    }

    #[test]
    fn interval_is_clamped() {
        let watcher = SystemPreferenceWatcher::new(FixedProbe(None), Duration::ZERO);
        assert_eq!(watcher.interval, MIN_POLL_INTERVAL);
    }

    #[tokio::test(start_paused = true)]
    async fn forced_preference_never_changes() {
        let watcher = SystemPreferenceWatcher::new(
            scheme_probe(true, Some(true)),
            Duration::from_millis(100),
        );
        let (rx, _task) = watcher.spawn(true);

        tokio::time::sleep(Duration::from_millis(550)).await;

        assert!(!rx.has_changed().unwrap());
        assert!(*rx.borrow());
    }

    #[tokio::test(start_paused = true)]
    async fn publishes_only_changes() {
        let toggle = Toggle::default();
        toggle.set(false);
        let watcher = SystemPreferenceWatcher::new(toggle.clone(), Duration::from_millis(100));
        let (mut rx, _task) = watcher.spawn(false);

        tokio::time::sleep(Duration::from_millis(350)).await;
        assert!(!rx.has_changed().unwrap());

        toggle.set(true);
        rx.changed().await.unwrap();
        assert!(*rx.borrow_and_update());
    }
}
