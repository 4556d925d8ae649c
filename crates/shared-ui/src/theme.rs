use dioxus::prelude::*;

/// Theme families available in the application.
///
/// Each family provides a dark variant, a light variant, or both.
/// Families with only one mode resolve to that mode regardless of `is_dark`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemeFamily {
    #[default]
    Calm,
    Sage,
    /// Dark-only low-stimulus theme for evening use.
    Midnight,
}

/// All available theme families in display order.
pub const ALL_FAMILIES: &[ThemeFamily] = &[
    ThemeFamily::Calm,
    ThemeFamily::Sage,
    ThemeFamily::Midnight,
];

impl ThemeFamily {
    /// Internal key used for storage and Select values.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeFamily::Calm => "calm",
            ThemeFamily::Sage => "sage",
            ThemeFamily::Midnight => "midnight",
        }
    }

    /// Human-readable name for display in UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeFamily::Calm => "Calm",
            ThemeFamily::Sage => "Sage",
            ThemeFamily::Midnight => "Midnight",
        }
    }

    /// Parse a family key string, falling back to Calm.
    pub fn from_key(s: &str) -> Self {
        match s {
            "sage" => ThemeFamily::Sage,
            "midnight" => ThemeFamily::Midnight,
            _ => ThemeFamily::Calm,
        }
    }

    /// Whether this family supports dark mode.
    pub fn has_dark(&self) -> bool {
        true
    }

    /// Whether this family supports light mode.
    pub fn has_light(&self) -> bool {
        !matches!(self, ThemeFamily::Midnight)
    }

    /// Resolve to the CSS `data-theme` attribute value.
    ///
    /// Single-mode families ignore `is_dark` and always return their mode.
    pub fn resolve(&self, is_dark: bool) -> &'static str {
        match (self, is_dark) {
            (ThemeFamily::Calm, false) => "calm",
            (ThemeFamily::Calm, true) => "calm-dark",
            (ThemeFamily::Sage, false) => "sage",
            (ThemeFamily::Sage, true) => "sage-dark",
            // Midnight is dark-only
            (ThemeFamily::Midnight, _) => "midnight",
        }
    }
}

/// Shared theme state provided as context.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub family: Signal<String>,
    pub is_dark: Signal<bool>,
}

impl ThemeState {
    /// Apply the current family + mode to the document.
    pub fn apply(&self) {
        let family = ThemeFamily::from_key(&self.family.read());
        let theme = family.resolve(*self.is_dark.read());
        set_theme(theme);
    }
}

/// Seed the theme on application startup.
///
/// Reads the persisted theme from a cookie and applies it to the document root.
/// Call this once in your top-level App component.
#[component]
pub fn ThemeSeed() -> Element {
    use_effect(|| {
        document::eval(
            r#"
            (function() {
                var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
                var theme = match ? match[1] : 'calm';
                document.documentElement.setAttribute('data-theme', theme);
            })();
            "#,
        );
    });

    rsx! {}
}

/// Set the active theme, persisting to a cookie and updating the document.
pub fn set_theme(theme: &str) {
    document::eval(&format!(
        r#"
        (function() {{
            document.cookie = 'theme={theme};path=/;max-age=2592000;SameSite=Lax';
            document.documentElement.setAttribute('data-theme', '{theme}');
        }})();
        "#,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn theme_family_default_is_calm() {
        assert_eq!(ThemeFamily::default(), ThemeFamily::Calm);
    }

    #[test]
    fn theme_family_as_str_roundtrip() {
        for family in ALL_FAMILIES {
            assert_eq!(ThemeFamily::from_key(family.as_str()), *family);
        }
    }

    #[test]
    fn theme_family_from_key_unknown_falls_back() {
        assert_eq!(ThemeFamily::from_key("unknown"), ThemeFamily::Calm);
        assert_eq!(ThemeFamily::from_key(""), ThemeFamily::Calm);
    }

    #[test]
    fn theme_family_resolve_dual_mode() {
        assert_eq!(ThemeFamily::Calm.resolve(false), "calm");
        assert_eq!(ThemeFamily::Calm.resolve(true), "calm-dark");
        assert_eq!(ThemeFamily::Sage.resolve(false), "sage");
        assert_eq!(ThemeFamily::Sage.resolve(true), "sage-dark");
    }

    #[test]
    fn theme_family_resolve_single_mode() {
        // Midnight is dark-only — always resolves to "midnight"
        assert_eq!(ThemeFamily::Midnight.resolve(true), "midnight");
        assert_eq!(ThemeFamily::Midnight.resolve(false), "midnight");
    }

    #[test]
    fn theme_family_mode_support() {
        assert!(ThemeFamily::Calm.has_light());
        assert!(ThemeFamily::Calm.has_dark());
        assert!(ThemeFamily::Midnight.has_dark());
        assert!(!ThemeFamily::Midnight.has_light());
    }
}
