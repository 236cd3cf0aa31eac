//! Theme and CSS definitions

use dioxus::prelude::*;

/// Global CSS with theme variables and the mascot keyframes
pub const GLOBAL_CSS: &str = r#"
/* CSS Reset and Base Styles */
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

:root {
    --bg-primary: #0b0f0c;
    --bg-secondary: #111712;
    --text-primary: #e6f2e8;
    --text-muted: #8aa28f;
    --border-color: #233227;
    --accent-success: #00e676;
    --accent-warning: #ffb300;
    --accent-destructive: #ff5252;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    font-size: 16px;
    line-height: 1.5;
    background-color: var(--bg-primary);
    color: var(--text-primary);
    padding: 32px;
}

/* Panel card */
.panel-card {
    background-color: var(--bg-secondary);
    border: 1px solid var(--border-color);
    border-radius: 12px;
    overflow: hidden;
    max-width: 720px;
    margin: 0 auto;
}

.panel-card-header {
    display: flex;
    align-items: center;
    gap: 10px;
    padding: 12px 16px;
    border-bottom: 1px solid var(--border-color);
}

.panel-card-title {
    flex: 1;
    font-size: 0.875rem;
    font-weight: 600;
    letter-spacing: 0.08em;
    text-transform: uppercase;
}

.panel-card-body {
    position: relative;
    padding: 16px;
    min-height: 280px;
}

/* Badge */
.badge {
    display: inline-block;
    padding: 2px 10px;
    border-radius: 9999px;
    font-size: 0.75rem;
    font-weight: 600;
    border: 1px solid;
    background-color: transparent;
}

.badge-success {
    border-color: var(--accent-success);
    color: var(--accent-success);
}

.badge-warning {
    border-color: var(--accent-warning);
    color: var(--accent-warning);
}

.badge-destructive {
    border-color: var(--accent-destructive);
    color: var(--accent-destructive);
}

/* Bullet indicator */
.bullet {
    width: 8px;
    height: 8px;
    border-radius: 2px;
    flex-shrink: 0;
}

.bullet-sm {
    width: 6px;
    height: 6px;
}

.bullet-success {
    background-color: var(--accent-success);
    box-shadow: 0 0 6px rgba(0, 230, 118, 0.6);
}

.bullet-warning {
    background-color: var(--accent-warning);
    box-shadow: 0 0 6px rgba(255, 179, 0, 0.6);
}

.bullet-destructive {
    background-color: var(--accent-destructive);
    box-shadow: 0 0 6px rgba(255, 82, 82, 0.6);
}

/* Status item grid */
.status-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 16px;
    padding: 8px 4px;
    max-width: max-content;
}

.status-item {
    border: 1px solid;
    border-radius: 6px;
    min-width: 180px;
}

.status-item-header {
    display: flex;
    align-items: center;
    gap: 8px;
    padding: 4px 8px;
    border-bottom: 1px solid;
    font-size: 0.875rem;
    font-weight: 500;
}

.status-item-body {
    padding: 4px 10px 8px;
}

.status-item-value {
    font-size: 1.5rem;
    font-weight: 700;
    margin-bottom: 4px;
}

.status-item-caption {
    font-size: 0.75rem;
    opacity: 0.5;
}

.status-item-success {
    border-color: var(--accent-success);
    color: var(--accent-success);
    background-color: rgba(0, 230, 118, 0.05);
    box-shadow: 0 0 0 4px rgba(0, 230, 118, 0.08);
}

.status-item-warning {
    border-color: var(--accent-warning);
    color: var(--accent-warning);
    background-color: rgba(255, 179, 0, 0.05);
    box-shadow: 0 0 0 4px rgba(255, 179, 0, 0.08);
}

.status-item-destructive {
    border-color: var(--accent-destructive);
    color: var(--accent-destructive);
    background-color: rgba(255, 82, 82, 0.05);
    box-shadow: 0 0 0 4px rgba(255, 82, 82, 0.08);
}

/* Robot mascot */
.robot-wrap {
    position: absolute;
    bottom: 0;
    right: 32px;
    pointer-events: none;
    filter: drop-shadow(0 0 10px rgba(0, 255, 0, 0.6));
}

.robot-body {
    transform-origin: center;
    transform-box: fill-box;
}

@keyframes robot-glow {
    0%, 100% {
        filter: drop-shadow(0 0 6px rgba(0, 255, 0, 0.5));
    }
    50% {
        filter: drop-shadow(0 0 12px rgba(0, 255, 0, 0.9));
    }
}

@keyframes robot-pulse {
    0%, 100% {
        opacity: 0.7;
        transform: scale(1);
    }
    50% {
        opacity: 1;
        transform: scale(1.03);
    }
}

@keyframes robot-flicker {
    0%, 100% {
        opacity: 0.3;
    }
    50% {
        opacity: 1;
    }
}

/* Responsive */
@media (max-width: 768px) {
    .status-grid {
        grid-template-columns: repeat(3, 1fr);
        max-width: none;
    }

    .robot-wrap {
        right: 0;
        bottom: 0;
    }

    .robot-wrap svg {
        width: 140px;
        height: 140px;
    }
}
"#;

/// Inject global CSS into the document
pub fn inject_global_css() -> Element {
    rsx! {
        style { dangerous_inner_html: GLOBAL_CSS }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_has_variant_classes() {
        for variant in ["success", "warning", "destructive"] {
            assert!(GLOBAL_CSS.contains(&format!(".status-item-{}", variant)));
            assert!(GLOBAL_CSS.contains(&format!(".badge-{}", variant)));
            assert!(GLOBAL_CSS.contains(&format!(".bullet-{}", variant)));
        }
    }

    #[test]
    fn test_css_has_mascot_keyframes() {
        assert!(GLOBAL_CSS.contains("@keyframes robot-glow"));
        assert!(GLOBAL_CSS.contains("@keyframes robot-pulse"));
        assert!(GLOBAL_CSS.contains("@keyframes robot-flicker"));
    }
}
