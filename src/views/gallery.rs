use crate::gallery::{EXAMPLES, ExampleTemplate, TIPS, seed_prompt};
use crate::views::icons::{INFO, Icon};
use crate::views::shared::JsonSource;
use dioxus::prelude::*;

/// Writes the seed prompt for `example` into the composer.
pub fn apply_example(mut input: Signal<String>, example: &ExampleTemplate) {
    input.set(seed_prompt(example));
}

#[component]
pub fn GalleryPanel(input: Signal<String>) -> Element {
    rsx! {
        div { class: "gallery-panel",
            h2 { class: "section-title",
                span { class: "section-bar" }
                "Example JSON Structures"
            }
            div { class: "example-list",
                for example in EXAMPLES.iter() {
                    ExampleCard { key: "{example.title}", example: *example, input }
                }
            }
            TipsCard {}
        }
    }
}

#[component]
fn ExampleCard(example: ExampleTemplate, input: Signal<String>) -> Element {
    rsx! {
        div { class: "example-card",
            div { class: "example-card-header",
                h3 { class: "example-title", "{example.title}" }
                p { class: "text-muted text-xs", "{example.description}" }
            }
            div { class: "example-card-body",
                JsonSource { json: example.json.to_string() }
            }
            div { class: "example-card-footer",
                button {
                    class: "btn btn-link",
                    r#type: "button",
                    onclick: move |_| apply_example(input, &example),
                    "Use this example"
                }
            }
        }
    }
}

#[component]
fn TipsCard() -> Element {
    rsx! {
        div { class: "tips-card",
            h3 { class: "tips-title",
                Icon { svg: INFO }
                "Tips for Better Results"
            }
            ul { class: "tips-list",
                for tip in TIPS.iter() {
                    li { key: "{tip}", "{tip}" }
                }
            }
        }
    }
}
