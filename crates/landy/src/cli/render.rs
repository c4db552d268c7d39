//! Output formatting for the terminal: message lines, the page listing, and
//! the full page view. Layout lives here; handlers just print what these
//! functions return.

use super::styles::{DRAFT, ERROR, HEADING, INFO, KIND, MUTED, PUBLISHED, SUCCESS, WARNING};
use chrono::{DateTime, Utc};
use console::Style;
use landyapp::api::{CmdMessage, MessageLevel};
use landyapp::model::{PageSpec, PageStatus, PageSummary};

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let style: &Style = match message.level {
            MessageLevel::Info => &INFO,
            MessageLevel::Success => &SUCCESS,
            MessageLevel::Warning => &WARNING,
            MessageLevel::Error => &ERROR,
        };
        out.push_str(&format!("{}\n", style.apply_to(&message.content)));
    }
    out
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// One line per page: id, status, creation time, industry.
pub fn render_summary_list(pages: &[PageSummary]) -> String {
    if pages.is_empty() {
        return "No pages yet. Create one with `landy generate`.\n".to_string();
    }

    let mut out = String::new();
    for summary in pages {
        out.push_str(&format!(
            "{}  {}  {}  {}\n",
            MUTED.apply_to(summary.id.to_string()),
            status_style(summary.status).apply_to(format!("{:<9}", status_str(summary.status))),
            MUTED.apply_to(format_timestamp(summary.created_at)),
            summary.industry,
        ));
    }
    out
}

/// The full page view: context header, document state, then every section
/// with its position, kind, id, and pretty-printed content.
pub fn render_page(page: &PageSpec) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}\n",
        HEADING.apply_to(format!(
            "{}: {}",
            page.context.industry, page.context.offer
        ))
    ));
    out.push_str(&format!("{}\n", MUTED.apply_to(page.id.to_string())));
    out.push_str(&format!(
        "audience: {}   tone: {}\n",
        page.context.target_audience, page.context.brand_tone
    ));
    if let Some(url) = &page.context.competitor_url {
        out.push_str(&format!("competitor: {}\n", url));
    }
    out.push_str(&format!(
        "status: {}   version: {}   updated: {}\n",
        status_style(page.status).apply_to(status_str(page.status)),
        page.version,
        format_timestamp(page.updated_at),
    ));
    out.push_str("--------------------------------\n");

    if page.sections.is_empty() {
        out.push_str("(no sections)\n");
        return out;
    }

    for (i, section) in page.sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{}. {}  {}\n",
            i + 1,
            KIND.apply_to(section.kind.to_string()),
            MUTED.apply_to(section.id.to_string()),
        ));
        let content = serde_json::to_string_pretty(&section.content)
            .unwrap_or_else(|_| "{}".to_string());
        out.push_str(&indent(&content, "   "));
        out.push('\n');
    }
    out
}

fn status_str(status: PageStatus) -> &'static str {
    match status {
        PageStatus::Draft => "draft",
        PageStatus::Published => "published",
    }
}

fn status_style(status: PageStatus) -> &'static Style {
    match status {
        PageStatus::Draft => &DRAFT,
        PageStatus::Published => &PUBLISHED,
    }
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}

fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n")
}
