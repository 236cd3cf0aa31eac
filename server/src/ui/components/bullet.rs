//! Square status indicator dot

use dioxus::prelude::*;
use glowbot_core::StatusVariant;

#[component]
pub fn Bullet(variant: StatusVariant, #[props(default = false)] small: bool) -> Element {
    let size_class = if small { " bullet-sm" } else { "" };

    rsx! {
        span { class: "bullet{size_class} bullet-{variant}" }
    }
}
