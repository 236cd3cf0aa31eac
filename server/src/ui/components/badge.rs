//! Badge component for small pill labels

use dioxus::prelude::*;
use glowbot_core::StatusVariant;

#[component]
pub fn Badge(
    #[props(default = StatusVariant::Success)] variant: StatusVariant,
    children: Element,
) -> Element {
    rsx! {
        span {
            class: "badge badge-{variant}",
            {children}
        }
    }
}
