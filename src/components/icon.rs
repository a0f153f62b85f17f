//! Icon Component
//!
//! Renders an inline SVG for a name token. The only contract: name, size, color.

use leptos::prelude::*;

/// Known icon paths (24x24 viewBox)
fn icon_path(name: &str) -> &'static str {
    match name {
        "checkmark" => "M20 6L9 17l-5-5",
        "trash" => "M3 6h18M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2",
        _ => "",
    }
}

/// Inline SVG icon
#[component]
pub fn Icon(
    name: &'static str,
    #[prop(default = 24)] size: u32,
    #[prop(default = "currentColor")] color: &'static str,
) -> impl IntoView {
    view! {
        <svg
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke=color
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <path d=icon_path(name) />
        </svg>
    }
}
