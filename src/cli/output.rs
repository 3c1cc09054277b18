//! Output formatting utilities

use crate::application::RenderSummary;
use crate::domain::UsageExample;
use crate::infrastructure::Config;
use std::path::Path;

const HEADERS: [&str; 3] = ["Example", "Output", "Description"];

/// Format the usage examples as a plain-text table
pub fn format_usage_table(tag: &str, examples: &[UsageExample]) -> String {
    let example_width = column_width(HEADERS[0], examples.iter().map(|e| e.example.as_str()));
    let output_width = column_width(HEADERS[1], examples.iter().map(|e| e.output.as_str()));

    let mut output = format!("Active shortcode: [{}]\n\n", tag);
    let mut push_row = |example: &str, result: &str, description: &str| {
        let line = format!(
            "{:<ew$}  {:<ow$}  {}",
            example,
            result,
            description,
            ew = example_width,
            ow = output_width
        );
        output.push_str(line.trim_end());
        output.push('\n');
    };

    push_row(HEADERS[0], HEADERS[1], HEADERS[2]);
    for e in examples {
        push_row(&e.example, &e.output, &e.description);
    }

    output
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .fold(header.chars().count(), usize::max)
}

/// Format the usage examples as an HTML help fragment
pub fn format_usage_html(tag: &str, examples: &[UsageExample]) -> String {
    let mut output = String::new();
    output.push_str("<h3>Current Year Shortcode Usage</h3>\n");
    output.push_str(&format!(
        "<p>Active shortcode: <code>[{}]</code></p>\n",
        escape_html(tag)
    ));
    output.push_str("<table class=\"widefat\">\n<thead>\n<tr>");
    for header in HEADERS {
        output.push_str(&format!("<th>{}</th>", header));
    }
    output.push_str("</tr>\n</thead>\n<tbody>\n");
    for e in examples {
        output.push_str(&format!(
            "<tr><td><code>{}</code></td><td class=\"nowrap\">{}</td><td>{}</td></tr>\n",
            escape_html(&e.example),
            escape_html(&e.output),
            escape_html(&e.description)
        ));
    }
    output.push_str("</tbody>\n</table>\n");
    output
}

/// Format the full config for `config --list`
pub fn format_config(config: &Config) -> String {
    let tag = match &config.tag {
        Some(tag) => format!("{:?}", tag),
        None => "(not set)".to_string(),
    };
    format!(
        "tag = {}\nregistered = {}\n",
        tag,
        config.registered.join(",")
    )
}

/// Format the summary of an in-place directory render
pub fn format_render_summary(summary: &RenderSummary, root: &Path) -> String {
    let mut output = format!(
        "Rendered {} shortcode(s) in {} of {} file(s)\n",
        summary.replaced,
        summary.changed.len(),
        summary.scanned
    );
    for path in &summary.changed {
        let shown = path.strip_prefix(root).unwrap_or(path);
        output.push_str(&format!("  {}\n", shown.display()));
    }
    output
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
