// ========================================
// HTML VIEWS
// ========================================

use std::sync::OnceLock;

use crate::navigation::StatusMessage;
use crate::utils::PropFilter;

/// Props the banner component handles itself; never rendered as attributes.
const BANNER_PROPS: [&str; 2] = ["variant", "dismissible"];

fn banner_filter() -> &'static PropFilter {
    static FILTER: OnceLock<PropFilter> = OnceLock::new();
    FILTER.get_or_init(|| PropFilter::new(BANNER_PROPS))
}

/// Renders a status banner `<div>`.
///
/// `variant` overrides the kind-derived `data-variant`, `dismissible="true"`
/// adds a close button. Every other prop lands on the element.
pub fn status_banner(status: &StatusMessage, props: &[(&str, &str)]) -> String {
    let (forwarded, consumed) = banner_filter().partition(props.iter().copied());

    let variant = consumed
        .iter()
        .find(|(name, _)| *name == "variant")
        .map(|(_, value)| *value)
        .unwrap_or(status.kind.as_str());
    let dismissible = consumed
        .iter()
        .any(|(name, value)| *name == "dismissible" && *value == "true");

    let mut html = String::new();
    html.push_str(&format!("<div data-variant=\"{}\"", escape_html(variant)));
    for (name, value) in forwarded {
        html.push_str(&format!(" {}=\"{}\"", escape_html(name), escape_html(value)));
    }
    html.push('>');
    html.push_str(&escape_html(&status.text));
    if dismissible {
        html.push_str("<button type=\"button\" aria-label=\"Dismiss\">&times;</button>");
    }
    html.push_str("</div>");
    html
}

pub fn page(title: &str, status: Option<&StatusMessage>, body: &str) -> String {
    let banner = status
        .map(|s| status_banner(s, &[("role", "alert"), ("class", "banner"), ("dismissible", "true")]))
        .unwrap_or_default();

    format!(
        "<!doctype html>\n<html><head><title>{title}</title></head>\n<body>\n<h1>{title}</h1>\n{banner}\n{body}\n</body></html>\n",
        title = escape_html(title),
        banner = banner,
        body = body,
    )
}

pub fn login_form() -> &'static str {
    concat!(
        "<form method=\"post\" action=\"/login\">",
        "<input name=\"username\" autocomplete=\"username\">",
        "<input name=\"password\" type=\"password\" autocomplete=\"current-password\">",
        "<button type=\"submit\">Sign in</button>",
        "</form>",
    )
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
