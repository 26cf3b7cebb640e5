//! HTML views for assembled pages.
//!
//! Views are presentation only: they take props produced by the assemblers in
//! [`crate::pages`] and never fetch. Rendering uses maud, which escapes every
//! dynamic value unless it is wrapped in `PreEscaped` (post bodies and Hacker
//! News comment HTML, both already rendered upstream).

mod hn;
mod views;

pub use hn::*;
pub use views::*;

use maud::{html, Markup, PreEscaped, DOCTYPE};

pub const SITE_NAME: &str = "Brian Lovin";

const NAV: &[(&str, &str)] = &[
    ("/", "About"),
    ("/writing", "Writing"),
    ("/podcast", "Podcast"),
    ("/bookmarks", "Bookmarks"),
    ("/hn", "Hacker News"),
    ("/security", "Security"),
];

pub const PAGE_CSS: &str = r#"
:root{--fg:#111;--fg2:#555;--fg3:#888;--bg:#fff;--border:#e5e5e5;--accent:#2563eb;--mono:ui-monospace,SFMono-Regular,Menlo,monospace}
@media (prefers-color-scheme:dark){:root{--fg:#eee;--fg2:#aaa;--fg3:#777;--bg:#111;--border:#2a2a2a}}
*{box-sizing:border-box;margin:0;padding:0}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",sans-serif;color:var(--fg);background:var(--bg);line-height:1.6}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}
.nav{display:flex;gap:1rem;flex-wrap:wrap;padding:1.5rem 1rem;max-width:672px;margin:0 auto;font-family:var(--mono);font-size:.9rem}
.nav a{color:var(--fg2)}
.column{max-width:672px;margin:0 auto;padding:2rem 1rem 4rem;display:flex;flex-direction:column;gap:2rem}
.page-title{font-size:2rem;font-weight:800}
.subtitle{color:var(--fg2)}
.section-title{font-family:var(--mono);font-size:1.1rem;font-weight:700}
.list{display:flex;flex-direction:column;gap:1rem;list-style:none}
.meta{font-family:var(--mono);font-size:.85rem;color:var(--fg3)}
.prose{font-family:var(--mono);line-height:1.8}
.prose p{margin-bottom:1rem}
.divider{height:1px;background:var(--border)}
.comments{list-style:none;padding-left:1rem;border-left:1px solid var(--border);display:flex;flex-direction:column;gap:.75rem}
.comment-body{font-size:.95rem;overflow-wrap:anywhere}
"#;

pub const ERROR_CSS: &str = r#"
.error-page{display:flex;flex-direction:column;align-items:center;justify-content:center;min-height:60vh;gap:1rem;text-align:center}
"#;

/// Wrap a page body in the shared document shell and navigation.
pub fn page_shell(title: &str, description: Option<&str>, body: Markup) -> Markup {
    let full_title = if title == SITE_NAME {
        title.to_string()
    } else {
        format!("{} · {}", title, SITE_NAME)
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (full_title) }
                @if let Some(description) = description {
                    meta name="description" content=(description);
                    meta property="og:description" content=(description);
                }
                meta property="og:title" content=(full_title);
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                nav class="nav" {
                    @for (href, label) in NAV {
                        a href=(href) { (label) }
                    }
                }
                main class="column" { (body) }
            }
        }
    }
}

/// Minimal error page shown when a page cannot be generated.
pub fn error_page(title: &str, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " · " (SITE_NAME) }
                meta name="robots" content="noindex";
                style { (PreEscaped(PAGE_CSS)) }
                style { (PreEscaped(ERROR_CSS)) }
            }
            body {
                main class="error-page" {
                    h1 { (title) }
                    p { (message) }
                    a href="/" { "Back home" }
                }
            }
        }
    }
}

/// Only http(s) URLs are allowed into `href`/`src` attributes.
pub fn is_safe_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_escapes_title() {
        let page = page_shell("<script>", None, html! { p { "x" } }).into_string();
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn home_title_is_not_repeated() {
        let page = page_shell(SITE_NAME, None, html! {}).into_string();
        assert!(page.contains(&format!("<title>{}</title>", SITE_NAME)));
    }

    #[test]
    fn rejects_script_urls() {
        assert!(is_safe_url("https://example.com"));
        assert!(!is_safe_url("javascript:alert(1)"));
    }
}
