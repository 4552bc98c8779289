use crate::attachments::{EntryPoint, PendingFileSet};
use crate::config::AppConfig;
use crate::notice::NoticeQueue;
use crate::theme::{ThemeController, theme_definition};
use crate::types::ThemeMode;
use crate::views::icons::{ATTACHMENT, CHAT, FILE, Icon, JSON_LOGO, MOON, SUN};
use crate::views::shared::{offer_files, read_candidates};
use crate::views::{ChatView, GalleryPanel, ToastHost};
use dioxus::html::HasFileData;
use dioxus::prelude::*;
use time::OffsetDateTime;

#[cfg(not(target_arch = "wasm32"))]
pub type AppPreferences = crate::preferences::FilePreferenceStore;
#[cfg(target_arch = "wasm32")]
pub type AppPreferences = crate::preferences::LocalStoragePreferenceStore;

pub type AppTheme = ThemeController<AppPreferences>;

const APP_CSS: Asset = asset!("/assets/app.css");
const PREFERS_DARK_JS: &str =
    "return window.matchMedia('(prefers-color-scheme: dark)').matches;";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AppTab {
    Chat,
    Examples,
}

#[component]
pub fn App() -> Element {
    let config = use_hook(AppConfig::from_env);
    let mut theme = use_context_provider(|| {
        Signal::new(ThemeController::initial(
            config.preference_store(),
            config.ambient_dark(),
        ))
    });
    let follows_platform = config.follows_platform_scheme();
    use_future(move || async move {
        if !follows_platform {
            return;
        }
        match document::eval(PREFERS_DARK_JS).await {
            Ok(value) => {
                if let Some(dark) = value.as_bool() {
                    theme.with_mut(|controller| controller.adopt_ambient(dark));
                }
            }
            Err(err) => tracing::debug!(?err, "platform colour scheme unavailable"),
        }
    });
    let active_tab = use_signal(|| AppTab::Chat);
    let input = use_signal(String::new);
    let pending = use_signal(PendingFileSet::new);
    let notices = use_signal(NoticeQueue::new);
    let mut dragging = use_signal(|| false);

    let mode = theme.read().mode();
    let definition = theme_definition(mode);

    rsx! {
        ThemeStyles { mode }
        div {
            class: "{definition.root_class}",
            ondragover: move |evt: DragEvent| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |evt: DragEvent| {
                evt.prevent_default();
                dragging.set(false);
            },
            ondrop: move |evt: DragEvent| async move {
                evt.prevent_default();
                dragging.set(false);
                if let Some(engine) = evt.files() {
                    let candidates = read_candidates(engine).await;
                    offer_files(pending, notices, candidates, EntryPoint::Drop);
                }
            },
            AppHeader {}
            if dragging() {
                DropOverlay {}
            }
            main { class: "app-main",
                div { class: if active_tab() == AppTab::Chat { "pane pane-chat" } else { "pane pane-chat mobile-hidden" },
                    ChatView { input, pending, notices }
                }
                div { class: if active_tab() == AppTab::Examples { "pane pane-examples" } else { "pane pane-examples mobile-hidden" },
                    GalleryPanel { input }
                }
            }
            AppFooter {}
            TabBar { active_tab }
            ToastHost { notices }
        }
    }
}

#[component]
fn ThemeStyles(mode: ThemeMode) -> Element {
    let definition = theme_definition(mode);
    rsx! {
        document::Title { "JSON Generator AI" }
        document::Link { rel: "stylesheet", href: APP_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn ThemeToggle(class: &'static str) -> Element {
    let mut theme: Signal<AppTheme> = use_context();
    let mode = theme.read().mode();
    let definition = theme_definition(mode);
    let (icon, icon_class) = match mode {
        ThemeMode::Dark => (SUN, "toggle-sun"),
        ThemeMode::Light => (MOON, "toggle-moon"),
    };
    rsx! {
        button {
            class: "theme-toggle {class}",
            r#type: "button",
            aria_label: definition.toggle_label,
            onclick: move |_| {
                let next = theme.with_mut(|controller| controller.toggle());
                tracing::debug!(theme = next.as_str(), "theme toggled");
            },
            Icon { svg: icon, class: icon_class }
        }
    }
}

#[component]
fn AppHeader() -> Element {
    rsx! {
        header { class: "app-header",
            div { class: "header-content",
                div { class: "brand",
                    div { class: "brand-logo", dangerous_inner_html: JSON_LOGO }
                    div {
                        h1 { class: "brand-title", "JSON Generator AI" }
                        p { class: "text-muted text-xs", "Create structured data easily" }
                    }
                }
                ThemeToggle { class: "" }
            }
        }
    }
}

#[component]
fn DropOverlay() -> Element {
    rsx! {
        div { class: "drop-overlay", aria_hidden: "true",
            div { class: "drop-card",
                div { class: "drop-icon", Icon { svg: ATTACHMENT } }
                div { class: "drop-title", "Drop files here" }
                div { class: "text-muted", "Add CSV or Excel files as data sources" }
            }
        }
    }
}

#[component]
fn AppFooter() -> Element {
    let year = OffsetDateTime::now_utc().year();
    rsx! {
        footer { class: "app-footer",
            div { class: "footer-content",
                div { class: "brand",
                    div { class: "footer-logo", dangerous_inner_html: JSON_LOGO }
                    div {
                        div { class: "footer-title", "JSON Generator AI" }
                        div { class: "text-muted text-xs", "Create structured data with AI assistance" }
                    }
                }
                div { class: "footer-meta",
                    span { class: "text-muted text-xs", "© {year} · Built with Rust & Dioxus" }
                    ThemeToggle { class: "mobile-only" }
                }
            }
        }
    }
}

#[component]
fn TabBar(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        nav { class: "tab-bar mobile-only",
            TabButton { active_tab, tab: AppTab::Chat, label: "Conversation", icon: CHAT }
            TabButton { active_tab, tab: AppTab::Examples, label: "Examples", icon: FILE }
        }
    }
}

#[component]
fn TabButton(
    active_tab: Signal<AppTab>,
    tab: AppTab,
    label: &'static str,
    icon: &'static str,
) -> Element {
    let mut active_tab = active_tab;
    let class = if active_tab() == tab {
        "tab active"
    } else {
        "tab"
    };
    rsx! {
        button {
            class: class,
            r#type: "button",
            onclick: move |_| active_tab.set(tab),
            Icon { svg: icon }
            span { class: "tab-label", "{label}" }
        }
    }
}
