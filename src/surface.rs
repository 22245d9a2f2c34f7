//! the ui surface themes are applied to
use std::collections::BTreeMap;

/// the attribute mirroring the active theme id
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// the root element of a page, as far as theming is concerned
pub trait Surface {
    /// whether the surface can be touched yet
    fn is_ready(&self) -> bool;
    /// whether the element carries `class`
    fn has_class(&self, class: &str) -> bool;
    /// add a class, doing nothing if it is already present
    fn add_class(&mut self, class: &str);
    /// remove a class, doing nothing if it is absent
    fn remove_class(&mut self, class: &str);
    /// set an attribute
    fn set_attribute(&mut self, name: &str, value: &str);
    /// read an attribute
    fn attribute(&self, name: &str) -> Option<String>;
}

/// an in-memory root element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootElement {
    /// whether the element has been mounted
    ready: bool,
    /// classes in insertion order
    classes: Vec<String>,
    /// attributes by name
    attributes: BTreeMap<String, String>,
}

impl RootElement {
    /// a mounted, empty root element
    pub fn new() -> Self {
        Self {
            ready: true,
            ..Default::default()
        }
    }

    /// a root element that hasn't been mounted yet
    pub fn unmounted() -> Self {
        Self::default()
    }

    /// a mounted element with server-rendered classes already on it
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = Self::new();
        for class in classes {
            root.add_class(class.as_ref());
        }
        root
    }

    /// mark the element as mounted
    pub fn mount(&mut self) {
        self.ready = true;
    }

    /// the classes currently on the element
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// render the element's state as html attributes
    pub fn render_attrs(&self) -> String {
        let mut out = format!("class=\"{}\"", self.classes.join(" "));

        for (name, value) in &self.attributes {
            out.push_str(&format!(" {}=\"{}\"", name, value));
        }

        out
    }
}

impl Surface for RootElement {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_never_duplicate() {
        let mut root = RootElement::new();
        root.add_class("dark");
        root.add_class("dark");

        assert_eq!(root.classes(), ["dark"]);
    }

    #[test]
    fn renders_classes_and_attributes() {
        let mut root = RootElement::with_classes(["sidebar-open", "dark"]);
        root.set_attribute(THEME_ATTRIBUTE, "dark");

        assert_eq!(
            root.render_attrs(),
            "class=\"sidebar-open dark\" data-theme=\"dark\""
        );
    }

    #[test]
    fn unmounted_until_mounted() {
        let mut root = RootElement::unmounted();
        assert!(!root.is_ready());

        root.mount();
        assert!(root.is_ready());
    }
}
