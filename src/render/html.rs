use std::fmt::Write;

use super::{Action, TableView};

/// Class names and action prefix of the rendered markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub application_class: String,
    pub table_class: String,
    pub controls_class: String,
    /// Prepended to every action path, for surfaces mounted below `/`.
    pub action_prefix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            application_class: "application".to_string(),
            table_class: "table".to_string(),
            controls_class: "ctrls".to_string(),
            action_prefix: String::new(),
        }
    }
}

/// Complete HTML document. `banner` is shown above the table.
pub fn page(view: &TableView, opts: &RenderOptions, banner: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>Albums</title>\n</head>\n<body>\n");
    if let Some(message) = banner {
        let _ = writeln!(out, "<p class=\"error\">{}</p>", escape(message));
    }
    out.push_str(&fragment(view, opts));
    out.push_str("</body>\n</html>\n");
    out
}

/// The `application` block: table plus controls.
pub fn fragment(view: &TableView, opts: &RenderOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<div class=\"{}\">", escape(&opts.application_class));
    let _ = writeln!(out, "<div class=\"{}\">", escape(&opts.table_class));
    out.push_str("<table>\n<thead>\n<tr>");
    for title in view.header() {
        let _ = write!(out, "<th>{title}</th>");
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in &view.rows {
        let _ = write!(out, "<tr data-id=\"{}\">", row.id);
        for cell in &row.cells {
            let _ = write!(out, "<td>{}</td>", escape(cell));
        }
        for action in &row.actions {
            let _ = write!(out, "<td>{}</td>", button(action, opts));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n</div>\n");
    let _ = writeln!(out, "<div class=\"{}\">", escape(&opts.controls_class));
    for control in view.controls() {
        let _ = writeln!(out, "{}", button(&control, opts));
    }
    out.push_str("</div>\n</div>\n");
    out
}

fn button(action: &Action, opts: &RenderOptions) -> String {
    format!(
        "<form method=\"post\" action=\"{}{}\"><button type=\"submit\">{}</button></form>",
        escape(&opts.action_prefix),
        action.path(),
        action.label()
    )
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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
