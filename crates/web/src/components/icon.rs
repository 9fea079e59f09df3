//! Icons
//!
//! Content fixtures name icons; they are drawn as glyphs so the app ships without an icon font.

use leptos::prelude::*;

/// Glyph for an icon name. Unknown names fall back to a bullet.
pub fn glyph(name: &str) -> &'static str {
    match name {
        "home" => "⌂",
        "bag" | "cart" => "👜",
        "info" => "ℹ",
        "mail" => "✉",
        "rocket" => "🚀",
        "shield-check" | "lock" => "🔒",
        "headset" => "🎧",
        "refresh" => "↺",
        "diamond" => "◆",
        "plane" | "truck" => "🚚",
        "smile" => "☺",
        "grid" => "▦",
        "watch" => "⌚",
        "ribbon" => "🎗",
        "wallet" => "👛",
        "check-circle" => "✔",
        "map-pin" => "📍",
        "phone" => "☎",
        "clock" => "🕘",
        _ => "•",
    }
}

#[component]
pub fn Icon(#[prop(into)] name: String) -> impl IntoView {
    view! { <span class=format!("icon icon-{name}") aria-hidden="true">{glyph(&name)}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_icons_fall_back() {
        assert_eq!(glyph("sparkles"), "•");
        assert_eq!(glyph("phone"), "☎");
    }
}
