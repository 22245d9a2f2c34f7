//! the built-in dashboard themes
use crate::{
    impl_theme,
    theme::{Theme, ThemeVariant, palette::*},
};

impl_theme!(
    Light,
    "Light Mode",
    "Clean light theme with blue accents",
    ThemeVariant::Light,
    false,
    {
        ThemeColors::new(CorePalette {
            base: "#f8fafc".to_string(),
            surface: "#ffffff".to_string(),
            overlay: "#f1f5f9".to_string(),
            muted: "#e2e8f0".to_string(),
            subtle: "#64748b".to_string(),
            text: "#1e293b".to_string(),
        })
        .with_accents(AccentColors {
            primary: Some("#3b82f6".to_string()),
            secondary: Some("#8b5cf6".to_string()),
            success: Some("#10b981".to_string()),
            warning: Some("#f59e0b".to_string()),
            danger: Some("#ef4444".to_string()),
        })
    }
);

impl_theme!(
    Dark,
    "Dark Mode",
    "Dark theme that's easier on the eyes",
    ThemeVariant::Dark,
    false,
    {
        ThemeColors::new(CorePalette {
            base: "#0f172a".to_string(),
            surface: "#1e293b".to_string(),
            overlay: "#334155".to_string(),
            muted: "#475569".to_string(),
            subtle: "#94a3b8".to_string(),
            text: "#f1f5f9".to_string(),
        })
        .with_accents(AccentColors {
            primary: Some("#60a5fa".to_string()),
            secondary: Some("#a78bfa".to_string()),
            success: Some("#34d399".to_string()),
            warning: Some("#fbbf24".to_string()),
            danger: Some("#f87171".to_string()),
        })
    }
);

impl_theme!(
    Space,
    "Space Theme",
    "Dark space-inspired theme with stars",
    ThemeVariant::Dark,
    true,
    {
        ThemeColors::new(CorePalette {
            base: "#0b0d21".to_string(),
            surface: "#151836".to_string(),
            overlay: "#1f2350".to_string(),
            muted: "#2e3270".to_string(),
            subtle: "#9ea3d9".to_string(),
            text: "#e6e8ff".to_string(),
        })
        .with_accents(AccentColors {
            primary: Some("#7c83fd".to_string()),
            secondary: Some("#c084fc".to_string()),
            success: Some("#4ade80".to_string()),
            warning: Some("#facc15".to_string()),
            danger: Some("#fb7185".to_string()),
        })
        .with_effects(EffectColors {
            glow: None,
            particle: Some("#ffffff".to_string()),
        })
    }
);

impl_theme!(
    Neon,
    "Neon Theme",
    "Vibrant neon colors on dark background",
    ThemeVariant::Dark,
    true,
    {
        ThemeColors::new(CorePalette {
            base: "#09090b".to_string(),
            surface: "#18181b".to_string(),
            overlay: "#27272a".to_string(),
            muted: "#3f3f46".to_string(),
            subtle: "#a1a1aa".to_string(),
            text: "#fafafa".to_string(),
        })
        .with_accents(AccentColors {
            primary: Some("#00f0ff".to_string()),
            secondary: Some("#ff00e5".to_string()),
            success: Some("#39ff14".to_string()),
            warning: Some("#fff01f".to_string()),
            danger: Some("#ff073a".to_string()),
        })
        .with_effects(EffectColors {
            glow: Some("#00f0ff".to_string()),
            particle: None,
        })
    }
);

impl_theme!(
    Contrast,
    "High Contrast",
    "High contrast theme for better accessibility",
    ThemeVariant::Dark,
    true,
    {
        ThemeColors::new(CorePalette {
            base: "#000000".to_string(),
            surface: "#000000".to_string(),
            overlay: "#1a1a1a".to_string(),
            muted: "#ffffff".to_string(),
            subtle: "#ffff00".to_string(),
            text: "#ffffff".to_string(),
        })
        .with_accents(AccentColors {
            primary: Some("#ffff00".to_string()),
            secondary: Some("#00ffff".to_string()),
            success: Some("#00ff00".to_string()),
            warning: Some("#ffa500".to_string()),
            danger: Some("#ff0000".to_string()),
        })
    }
);
