use maud::{html, Markup};

pub fn card(title: &str, subtitle: Option<&str>, body: Markup) -> Markup {
    html! {
        div style="border: 1px solid #e5e7eb; border-radius: 6px; padding: 12px 16px; margin: 12px 0;" {
            h3 style="margin: 0 0 4px 0;" { (title) }
            @if let Some(subtitle) = subtitle {
                p style="margin: 0 0 8px 0; font-size: 0.9em; color: #6b7280;" { (subtitle) }
            }
            div { (body) }
        }
    }
}
