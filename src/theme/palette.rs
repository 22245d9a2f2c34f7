//! palette stuff

/// the core colors every theme needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorePalette {
    /// page background
    pub base: String,
    /// cards, panels and the sidebar
    pub surface: String,
    /// dropdowns, modals and tooltips
    pub overlay: String,
    /// borders and grid lines
    pub muted: String,
    /// secondary text
    pub subtle: String,
    /// main text color
    pub text: String,
}

/// optional accent colors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccentColors {
    /// buttons, links and the first chart series
    pub primary: Option<String>,
    /// the second chart series
    pub secondary: Option<String>,
    /// success toasts and online indicators
    pub success: Option<String>,
    /// warnings
    pub warning: Option<String>,
    /// errors and destructive actions
    pub danger: Option<String>,
}

/// optional colors used by decorative layers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectColors {
    /// text/border glow
    pub glow: Option<String>,
    /// background particle color (stars etc)
    pub particle: Option<String>,
}

/// complete theme color configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    /// required core palette
    pub core: CorePalette,
    /// optional accent colors
    pub accents: AccentColors,
    /// optional effect colors
    pub effects: EffectColors,
}

impl ThemeColors {
    /// make new theme colors
    pub fn new(core: CorePalette) -> Self {
        Self {
            core,
            accents: AccentColors::default(),
            effects: EffectColors::default(),
        }
    }

    /// set the accent colors
    pub fn with_accents(mut self, accents: AccentColors) -> Self {
        self.accents = accents;
        self
    }

    /// set the effect colors
    pub fn with_effects(mut self, effects: EffectColors) -> Self {
        self.effects = effects;
        self
    }

    /// the accent to use for primary elements, falling back to the text color
    pub fn primary(&self) -> &str {
        self.accents.primary.as_deref().unwrap_or(&self.core.text)
    }

    /// convert the palette to CSS
    pub fn to_css_vars(&self) -> String {
        let mut vars = String::new();

        vars.push_str(&format!(
            "--base: {};\n--surface: {};\n--overlay: {};\n--muted: {};\n--subtle: {};\n--text: {};\n",
            self.core.base,
            self.core.surface,
            self.core.overlay,
            self.core.muted,
            self.core.subtle,
            self.core.text
        ));

        Self::add_optional_var(&mut vars, "--primary", &self.accents.primary);
        Self::add_optional_var(&mut vars, "--secondary", &self.accents.secondary);
        Self::add_optional_var(&mut vars, "--success", &self.accents.success);
        Self::add_optional_var(&mut vars, "--warning", &self.accents.warning);
        Self::add_optional_var(&mut vars, "--danger", &self.accents.danger);
        Self::add_optional_var(&mut vars, "--glow", &self.effects.glow);
        Self::add_optional_var(&mut vars, "--particle", &self.effects.particle);

        vars
    }

    /// helper to add an optional css variable
    fn add_optional_var(vars: &mut String, name: &str, value: &Option<String>) {
        if let Some(val) = value {
            vars.push_str(&format!("{}: {};\n", name, val));
        }
    }
}
