use maud::{html, Markup};

pub mod card;

pub use card::card;

/// Renders an attribute value. An absent value is marked explicitly so it
/// can't be mistaken for an empty string.
pub fn field_value(value: Option<&str>) -> Markup {
    html! {
        @match value {
            Some(v) => { (v) }
            None => { em style="color: #9ca3af;" { "(none)" } }
        }
    }
}

pub fn badge(label: &str, color: &str) -> Markup {
    html! {
        span style={ "font-size: 0.75em; font-weight: bold; text-transform: uppercase; padding: 2px 6px; border-radius: 9999px; color: white; background-color: " (color) ";" } {
            (label)
        }
    }
}
