use maud::{html, Markup, DOCTYPE};

/// Page shell for the report. Styles are inline so mail clients keep them.
pub fn email_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
            }
            body style="font-family: Arial, sans-serif; line-height: 1.5; color: #333;" {
                div style="max-width: 800px; margin: 0 auto; padding: 20px;" {
                    h2 { (title) }
                    (content)
                    hr style="margin-top: 30px; border: none; border-top: 1px solid #eee;";
                    p style="font-size: 0.8em; color: #999;" {
                        "Generated by headcount " (env!("CARGO_PKG_VERSION"))
                    }
                }
            }
        }
    }
}
