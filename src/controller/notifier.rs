//! fanning theme changes out to dependent widgets
use {
    crate::error::Result,
    serde::{Deserialize, Serialize},
    std::{
        cell::RefCell,
        panic::{AssertUnwindSafe, catch_unwind},
        rc::Rc,
    },
    tracing::{trace, warn},
};

/// what subscribers are told when the theme changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeChange {
    /// the new theme id
    pub theme: String,
    /// whether the new theme is dark
    #[serde(rename = "isDark")]
    pub is_dark: bool,
}

/// something that re-themes itself when the theme changes
///
/// subscribers only ever see a [`ThemeChange`]; they have no way to reach the
/// controller's state from inside a notification.
pub trait ThemeSubscriber {
    /// a name for logs
    fn name(&self) -> &str {
        "anonymous"
    }

    /// react to a theme change
    fn on_theme_change(&mut self, change: &ThemeChange) -> Result<()>;
}

impl<T: ThemeSubscriber> ThemeSubscriber for Rc<RefCell<T>> {
    fn name(&self) -> &str {
        "shared"
    }

    fn on_theme_change(&mut self, change: &ThemeChange) -> Result<()> {
        self.borrow_mut().on_theme_change(change)
    }
}

/// a subscriber made from a closure
pub struct FnSubscriber<F> {
    /// the name used in logs
    name: String,
    /// the callback
    func: F,
}

/// wrap a closure as a subscriber
pub fn from_fn<F>(name: impl Into<String>, func: F) -> FnSubscriber<F>
where
    F: FnMut(&ThemeChange) -> Result<()>,
{
    FnSubscriber {
        name: name.into(),
        func,
    }
}

impl<F> ThemeSubscriber for FnSubscriber<F>
where
    F: FnMut(&ThemeChange) -> Result<()>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn on_theme_change(&mut self, change: &ThemeChange) -> Result<()> {
        (self.func)(change)
    }
}

/// a handle for removing a subscriber again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// how a notification went
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotifyReport {
    /// subscribers that handled the change
    pub delivered: usize,
    /// subscribers that errored or panicked
    pub failed: usize,
}

/// the subscriber list
#[derive(Default)]
pub struct Notifier {
    /// subscribers in registration order
    subscribers: Vec<(SubscriptionId, Box<dyn ThemeSubscriber>)>,
    /// the id handed to the next subscriber
    next_id: u64,
}

impl Notifier {
    /// make an empty notifier
    pub fn new() -> Self {
        Self::default()
    }

    /// add a subscriber to the end of the list
    pub fn subscribe(&mut self, subscriber: Box<dyn ThemeSubscriber>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, subscriber));
        id
    }

    /// remove a subscriber, returning whether it was there
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// how many subscribers are registered
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// whether nobody is listening
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// tell every subscriber about a change, in registration order
    ///
    /// a subscriber that errors or panics is logged and skipped; the rest
    /// still run.
    pub fn notify(&mut self, change: &ThemeChange) -> NotifyReport {
        let mut report = NotifyReport::default();

        for (id, subscriber) in &mut self.subscribers {
            let outcome = catch_unwind(AssertUnwindSafe(|| subscriber.on_theme_change(change)));

            match outcome {
                Ok(Ok(())) => {
                    trace!(subscriber = subscriber.name(), "theme change delivered");
                    report.delivered += 1;
                }
                Ok(Err(e)) => {
                    warn!(subscriber = subscriber.name(), ?id, "subscriber failed: {}", e);
                    report.failed += 1;
                }
                Err(_) => {
                    warn!(subscriber = subscriber.name(), ?id, "subscriber panicked");
                    report.failed += 1;
                }
            }
        }

        report
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("subscribers", &self.subscribers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::error::ThemeError};

    fn change(theme: &str, is_dark: bool) -> ThemeChange {
        ThemeChange {
            theme: theme.to_string(),
            is_dark,
        }
    }

    fn recorder(log: &Rc<RefCell<Vec<String>>>, tag: &'static str) -> Box<dyn ThemeSubscriber> {
        let log = Rc::clone(log);
        Box::new(from_fn(tag, move |c: &ThemeChange| {
            log.borrow_mut().push(format!("{tag}:{}", c.theme));
            Ok(())
        }))
    }

    #[test]
    fn runs_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = Notifier::new();
        notifier.subscribe(recorder(&log, "a"));
        notifier.subscribe(recorder(&log, "b"));

        notifier.notify(&change("dark", true));

        assert_eq!(*log.borrow(), vec!["a:dark", "b:dark"]);
    }

    #[test]
    fn failing_subscriber_does_not_stop_the_rest() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = Notifier::new();
        notifier.subscribe(recorder(&log, "first"));
        notifier.subscribe(Box::new(from_fn("broken", |_: &ThemeChange| {
            Err(ThemeError::Other("chart canvas missing".to_string()))
        })));
        notifier.subscribe(recorder(&log, "third"));

        let report = notifier.notify(&change("space", true));

        assert_eq!(*log.borrow(), vec!["first:space", "third:space"]);
        assert_eq!(report, NotifyReport { delivered: 2, failed: 1 });
    }

    #[test]
    fn panicking_subscriber_is_isolated() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = Notifier::new();
        notifier.subscribe(recorder(&log, "first"));
        notifier.subscribe(Box::new(from_fn("explodes", |_: &ThemeChange| -> Result<()> {
            panic!("tooltip library not loaded")
        })));
        notifier.subscribe(recorder(&log, "third"));

        let report = notifier.notify(&change("light", false));

        assert_eq!(*log.borrow(), vec!["first:light", "third:light"]);
        assert_eq!(report.failed, 1);
    }

    #[test]
    fn unsubscribe_removes_only_that_subscriber() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = Notifier::new();
        let a = notifier.subscribe(recorder(&log, "a"));
        notifier.subscribe(recorder(&log, "b"));

        assert!(notifier.unsubscribe(a));
        assert!(!notifier.unsubscribe(a));
        notifier.notify(&change("dark", true));

        assert_eq!(*log.borrow(), vec!["b:dark"]);
        assert_eq!(notifier.len(), 1);
    }

    #[test]
    fn event_serializes_like_the_browser_event() {
        let json = serde_json::to_string(&change("neon", true)).unwrap();
        assert_eq!(json, r#"{"theme":"neon","isDark":true}"#);
    }
}
