use dioxus::prelude::*;

use crate::components::{use_document_keys, use_reveal_observer};
use crate::context::{provide_page_context, use_theme};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The portfolio page (single page, sections reached by anchors)
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles, page context, document-wide listeners and routing.
#[component]
pub fn App() -> Element {
    provide_page_context();

    // Escape closes the overlay wherever focus is
    use_document_keys();
    // Section fade-ins and skill bar fills
    use_reveal_observer();

    let theme = use_theme();
    let root_class = theme().root_class();

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "page-root {root_class}",
            Router::<Route> {}
        }
    }
}
