use crate::preferences::{PreferenceStore, THEME_KEY};
use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
    pub root_class: &'static str,
    pub toggle_label: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            root_class: "app-root dark",
            toggle_label: "Switch to light mode",
        },
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            root_class: "app-root",
            toggle_label: "Switch to dark mode",
        },
    }
}

/// Current theme plus write-through persistence.
///
/// Persistence failures are logged and otherwise ignored; the in-memory mode
/// always reflects the last toggle.
pub struct ThemeController<S: PreferenceStore> {
    mode: ThemeMode,
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Persisted preference when one is stored, else the ambient
    /// colour-scheme signal.
    pub fn initial(store: S, ambient_dark: bool) -> Self {
        let mode = saved_mode(&store).unwrap_or(ambient_mode(ambient_dark));
        tracing::debug!(theme = mode.as_str(), "resolved initial theme");
        Self { mode, store }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Follows a late ambient colour-scheme reading unless a preference
    /// has been saved. Nothing is written to the store.
    pub fn adopt_ambient(&mut self, ambient_dark: bool) -> ThemeMode {
        if saved_mode(&self.store).is_none() {
            self.mode = ambient_mode(ambient_dark);
            tracing::debug!(theme = self.mode.as_str(), "following ambient colour scheme");
        }
        self.mode
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.set(self.mode.toggled());
        self.mode
    }

    pub fn set(&mut self, mode: ThemeMode) {
        self.mode = mode;
        if let Err(err) = self.store.set(THEME_KEY, mode.as_str()) {
            tracing::debug!(%err, "theme preference not persisted");
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn saved_mode<S: PreferenceStore>(store: &S) -> Option<ThemeMode> {
    store.get(THEME_KEY).and_then(|value| ThemeMode::parse(&value))
}

fn ambient_mode(ambient_dark: bool) -> ThemeMode {
    if ambient_dark {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #0f0f10;
    --color-bg-secondary: #18181b;
    --color-bg-overlay: rgba(15, 15, 16, 0.9);
    --color-text-primary: #f4f4f5;
    --color-text-muted: #a1a1aa;
    --color-border: #2e2e33;
    --color-surface: #18181b;
    --color-surface-muted: #232327;
    --color-accent: #f97316;
    --color-accent-strong: #fb923c;
    --color-accent-soft: rgba(249, 115, 22, 0.14);
    --color-assistant-bg: rgba(249, 115, 22, 0.08);
    --color-code-bg: #111113;
    --color-code-text: #e4e4e7;
    --color-json-key: #fb923c;
    --color-json-string: #60a5fa;
    --color-json-number: #34d399;
    --color-json-boolean: #fbbf24;
    --color-json-null: #fb7185;
    --color-error: #fb7185;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #f3f4f6;
    --color-bg-secondary: #ffffff;
    --color-bg-overlay: rgba(243, 244, 246, 0.9);
    --color-text-primary: #1f2937;
    --color-text-muted: #6b7280;
    --color-border: #e5e7eb;
    --color-surface: #ffffff;
    --color-surface-muted: #f9fafb;
    --color-accent: #f97316;
    --color-accent-strong: #ea580c;
    --color-accent-soft: #ffedd5;
    --color-assistant-bg: #fff7ed;
    --color-code-bg: #ffffff;
    --color-code-text: #1f2937;
    --color-json-key: #ea580c;
    --color-json-string: #2563eb;
    --color-json-number: #059669;
    --color-json-boolean: #d97706;
    --color-json-null: #e11d48;
    --color-error: #e11d48;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;
