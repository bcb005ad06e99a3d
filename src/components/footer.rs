use dioxus::prelude::*;
use folio_core::page::current_year;

use crate::context::use_site;

#[component]
pub fn Footer() -> Element {
    let site = use_site();
    let year = current_year();

    rsx! {
        footer { class: "site-footer",
            p { "\u{00A9} {year} {site.profile.name}" }
        }
    }
}
