//! Top-level status panel

use dioxus::prelude::*;
use glowbot_core::StatusRecord;

use super::{Badge, DashboardCard, RobotMascot, StatusBadge};

/// The composed panel: a titled card holding one badge per record, in
/// input order, plus exactly one mascot. Pure 1:1 projection of the
/// input list; an empty list renders an empty grid.
#[component]
pub fn StatusPanel(statuses: Vec<StatusRecord>) -> Element {
    rsx! {
        DashboardCard {
            title: "SECURITY STATUS",
            addon: rsx! {
                Badge { "ONLINE" }
            },

            div { class: "status-grid",
                for (i, record) in statuses.iter().enumerate() {
                    StatusBadge { key: "{i}", record: record.clone() }
                }
            }

            RobotMascot {}
        }
    }
}
