//! Generic dashboard card container

use dioxus::prelude::*;
use glowbot_core::StatusVariant;

use super::Bullet;

/// Titled container chrome: an indicator bullet and uppercase title with
/// an optional addon element in the header, content below.
#[component]
pub fn DashboardCard(
    title: String,
    #[props(default = StatusVariant::Success)] intent: StatusVariant,
    addon: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        section { class: "panel-card",
            header { class: "panel-card-header",
                Bullet { variant: intent }
                span { class: "panel-card-title", "{title}" }
                {addon}
            }
            div { class: "panel-card-body", {children} }
        }
    }
}
