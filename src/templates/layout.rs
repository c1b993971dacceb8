use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::templates::components::{flash_banner, Flash};

const STYLES: &str = r#"
    body { margin: 0; font-family: Georgia, serif; color: #222; background: #faf8f5; }
    nav { background: #1f2a44; padding: 0.75rem 1.5rem; }
    nav a { color: #f0e8d8; text-decoration: none; margin-right: 1.25rem; font-size: 1.05rem; }
    nav a.brand { font-weight: bold; font-size: 1.2rem; }
    main.container { max-width: 56rem; margin: 0 auto; padding: 1.5rem; }
    footer { text-align: center; color: #888; font-size: 0.85rem; padding: 1.5rem; }
    .flash { padding: 0.6rem 1rem; border-radius: 4px; margin-bottom: 1rem; }
    .flash-success { background: #e2efda; color: #2d5a27; }
    .flash-error { background: #f6dcdc; color: #8a2020; }
    .muted { color: #777; }
    .tag { background: #d8e2f0; border-radius: 3px; font-size: 0.75rem; padding: 0.1rem 0.4rem; margin-left: 0.4rem; }
    .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr)); gap: 1rem; }
    .card { display: block; background: #fff; border: 1px solid #e4ddd2; border-radius: 6px; padding: 1rem; color: inherit; text-decoration: none; }
    .card img { width: 100%; border-radius: 4px; }
    .cover { max-width: 16rem; border-radius: 6px; }
    .stack label { display: block; margin-bottom: 0.5rem; }
    .stack input, .stack textarea { display: block; width: 100%; padding: 0.35rem; margin-top: 0.15rem; }
    form.inline { display: inline; }
    button { cursor: pointer; padding: 0.3rem 0.8rem; }
    button.danger { background: #b33; color: #fff; border: none; border-radius: 3px; }
    section { margin-bottom: 2rem; }
    .links a { margin-right: 1rem; }
"#;

pub fn base_layout(title: &str, flash: Option<Flash>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - Greenroom" }
                style { (PreEscaped(STYLES)) }
            }
            body {
                (nav_bar())
                main class="container" {
                    @if let Some(flash) = &flash {
                        (flash_banner(flash))
                    }
                    (content)
                }
                (footer())
            }
        }
    }
}

fn nav_bar() -> Markup {
    html! {
        nav {
            a class="brand" href="/" { "🎭 Greenroom" }
            a href="/viewer" { "Viewer" }
            a href="/director" { "Director" }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer {
            "Greenroom - production programs for the school stage"
        }
    }
}
