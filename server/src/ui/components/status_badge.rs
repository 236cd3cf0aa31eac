//! Status badge block for a single record

use dioxus::prelude::*;
use glowbot_core::StatusRecord;

use super::Bullet;

/// Renders one record as a bordered block: header row (bullet + title)
/// over a large value and a small status caption. The record's variant
/// selects the color treatment, nothing else.
#[component]
pub fn StatusBadge(record: StatusRecord) -> Element {
    rsx! {
        div { class: "status-item status-item-{record.variant}",
            div { class: "status-item-header",
                Bullet { variant: record.variant, small: true }
                span { "{record.title}" }
            }
            div { class: "status-item-body",
                div { class: "status-item-value", "{record.value}" }
                div { class: "status-item-caption", "{record.status}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glowbot_core::StatusVariant;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_fields_rendered_verbatim() {
        fn app() -> Element {
            rsx! {
                StatusBadge {
                    record: StatusRecord::new(
                        "Firewall",
                        "Active",
                        "No threats",
                        StatusVariant::Success,
                    ),
                }
            }
        }

        let html = render(app);
        assert!(html.contains("Firewall"));
        assert!(html.contains("Active"));
        assert!(html.contains("No threats"));
        assert!(html.contains("status-item-success"));
    }

    #[test]
    fn test_variant_selects_treatment() {
        fn warning() -> Element {
            rsx! {
                StatusBadge {
                    record: StatusRecord::new("Updates", "3 pending", "", StatusVariant::Warning),
                }
            }
        }
        fn destructive() -> Element {
            rsx! {
                StatusBadge {
                    record: StatusRecord::new("Updates", "3 pending", "", StatusVariant::Destructive),
                }
            }
        }

        let html = render(warning);
        assert!(html.contains("status-item-warning"));
        assert!(!html.contains("status-item-success"));
        assert!(!html.contains("status-item-destructive"));

        let html = render(destructive);
        assert!(html.contains("status-item-destructive"));
        assert!(!html.contains("status-item-warning"));
    }
}
