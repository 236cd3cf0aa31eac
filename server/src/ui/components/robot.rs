//! Animated robot mascot

use dioxus::prelude::*;

/// Single stroked figure in a 20x20 viewBox: head box with antenna,
/// ears, face and a rounded torso.
const BODY_PATH: &str = "M10 3.333H4.166v7.5h11.667v-7.5H10Zm0 0V1.667m-6.667 12.5 1.25-1.25m12.083 1.25-1.25-1.25M7.5 6.667V7.5m5-.833V7.5M5 10.833V12.5a5 5 0 0 0 10 0v-1.667";

/// Decorative mascot. Purely cosmetic: the glow, the body stroke and
/// each eye run independent infinite loops on the compositor clock, so
/// nothing here is stateful or interactive.
///
/// `speed` is the glow period in seconds; the body breathes at
/// `speed * 1.2` while the eyes flicker on a fixed 0.8s cycle, the
/// right one half a cycle out of phase.
#[component]
pub fn RobotMascot(
    #[props(default = 240)] size: u32,
    #[props(default = "#00ff00".to_string())] color: String,
    #[props(default = 1.8)] speed: f64,
) -> Element {
    let glow = format!("animation: robot-glow {:.2}s ease-in-out infinite;", speed);
    let pulse = format!(
        "animation: robot-pulse {:.2}s ease-in-out infinite;",
        speed * 1.2
    );
    let flicker = "animation: robot-flicker 0.80s ease-in-out infinite;";
    let flicker_offset =
        "animation: robot-flicker 0.80s ease-in-out infinite; animation-delay: -0.40s;";

    rsx! {
        div { class: "robot-wrap",
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 20 20",
                fill: "none",
                width: "{size}",
                height: "{size}",
                style: "{glow}",

                path {
                    class: "robot-body",
                    stroke: "{color}",
                    stroke_linecap: "square",
                    stroke_width: "1.667",
                    d: BODY_PATH,
                    style: "{pulse}",
                }

                circle {
                    class: "robot-eye",
                    cx: "7.5",
                    cy: "7",
                    r: "0.4",
                    fill: "{color}",
                    style: flicker,
                }
                circle {
                    class: "robot-eye",
                    cx: "12.5",
                    cy: "7",
                    r: "0.4",
                    fill: "{color}",
                    style: flicker_offset,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_defaults() {
        fn app() -> Element {
            rsx! {
                RobotMascot {}
            }
        }

        let html = render(app);
        assert_eq!(html.matches("<svg").count(), 1);
        assert!(html.contains("240"));
        assert!(html.contains("#00ff00"));
        assert!(html.contains("robot-glow 1.80s"));
        assert!(html.contains("robot-pulse 2.16s"));
        assert!(html.contains("robot-flicker 0.80s"));
        assert_eq!(html.matches("robot-flicker").count(), 2);
    }

    #[test]
    fn test_parameters_override_defaults() {
        fn app() -> Element {
            rsx! {
                RobotMascot { size: 120, color: "#33ff00", speed: 0.5 }
            }
        }

        let html = render(app);
        assert!(html.contains("120"));
        assert!(html.contains("#33ff00"));
        assert!(html.contains("robot-glow 0.50s"));
        assert!(html.contains("robot-pulse 0.60s"));
    }
}
