use crate::dashboard::view_models::{Fragment, FragmentBody, RegionId};

/// HTML formatter for dashboard fragments
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Markup for one fragment tree.
    pub fn format(fragment: &Fragment) -> String {
        let mut html = String::with_capacity(1024);
        write_fragment(&mut html, fragment);
        html
    }

    /// Region container with its DOM id. `swap_oob` marks it for htmx out-of-band swap.
    pub fn format_region(id: RegionId, fragment: &Fragment, swap_oob: bool) -> String {
        let mut html = String::with_capacity(1024);
        html.push_str(&format!("<div id=\"{}\" class=\"section-card\"", id.dom_id()));
        if swap_oob {
            html.push_str(" hx-swap-oob=\"true\"");
        }
        html.push('>');
        write_fragment(&mut html, fragment);
        html.push_str("</div>");
        html
    }
}

fn write_fragment(html: &mut String, fragment: &Fragment) {
    let tag = fragment.kind.tag();
    html.push('<');
    html.push_str(tag);
    if let Some(class) = fragment.class {
        html.push_str(" class=\"");
        html.push_str(&escape_html(class));
        html.push('"');
    }
    html.push('>');

    match &fragment.body {
        FragmentBody::Text(text) => html.push_str(&escape_html(text)),
        FragmentBody::Children(children) => {
            for child in children {
                write_fragment(html, child);
            }
        }
    }

    html.push_str("</");
    html.push_str(tag);
    html.push('>');
}

pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// JSON text safe to inline inside a `<script>` element.
pub fn json_for_script_tag(value: &str) -> String {
    value.replace("</", "<\\/")
}
