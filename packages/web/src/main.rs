use dialog::DialogConfig;
use dioxus::prelude::*;
use ui::{use_modal, Modal};

const DIALOG_CONFIG: &str = include_str!("../dialog.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let modal = use_modal();
    let is_open = modal.is_open;
    let opener = modal.handle.clone();
    let closer = modal.handle.clone();
    let mut saved = use_signal(|| 0u32);

    let config = use_hook(|| {
        DialogConfig::from_toml(DIALOG_CONFIG).unwrap_or_else(|e| {
            tracing::warn!("Falling back to default dialog config: {}", e);
            DialogConfig::default()
        })
    });

    rsx! {
        button {
            onclick: move |_| opener.open(),
            "Open dialog"
        }
        p {
            if is_open() { "Dialog is open" } else { "Dialog is closed" }
        }
        p { "Saved {saved} time(s)" }
        Modal {
            handle: modal.handle.clone(),
            config,
            attributes: vec![("aria-labelledby".to_string(), "unsaved-title".to_string())],
            div {
                h2 { id: "unsaved-title", "Unsaved changes" }
                p { "Press Escape or click outside to dismiss." }
                button {
                    onclick: move |_| {
                        saved += 1;
                        closer.close();
                    },
                    "Save and close"
                }
            }
        }
    }
}
