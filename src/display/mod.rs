use jiff::Timestamp;
use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::types::TemplateSummary;

/// Format a creation timestamp as an age relative to `now`, e.g. `3d` or `5m`.
///
/// Missing timestamps render as `-`; unparsable ones are returned unchanged.
///
/// # Examples
///
/// ```
/// use argo_templates::display::format_age;
/// use jiff::Timestamp;
///
/// let now: Timestamp = "2024-01-03T00:00:00Z".parse().unwrap();
/// assert_eq!(format_age(Some("2024-01-01T00:00:00Z"), now), "2d");
/// assert_eq!(format_age(None, now), "-");
/// ```
pub fn format_age(created: Option<&str>, now: Timestamp) -> String {
    let Some(created) = created else {
        return "-".to_string();
    };
    let Ok(timestamp) = created.parse::<Timestamp>() else {
        return created.to_string();
    };

    let secs = (now.as_second() - timestamp.as_second()).max(0);
    match secs {
        s if s < 60 => format!("{s}s"),
        s if s < 60 * 60 => format!("{}m", s / 60),
        s if s < 60 * 60 * 24 => format!("{}h", s / (60 * 60)),
        s if s < 60 * 60 * 24 * 365 => format!("{}d", s / (60 * 60 * 24)),
        s => format!("{}y", s / (60 * 60 * 24 * 365)),
    }
}

/// Format a date string for display
///
/// Extracts just the date part (YYYY-MM-DD) from an ISO datetime string.
/// If the string is too short, returns it unchanged.
pub fn format_date_for_display(date_str: &str) -> String {
    match date_str.get(..10) {
        Some(date) => date.to_string(),
        None => date_str.to_string(),
    }
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "NAMESPACE")]
    namespace: String,
    #[tabled(rename = "CREATED")]
    created: String,
}

/// Render summaries as a plain table, preserving input order
pub fn format_summary_table(templates: &[TemplateSummary], now: Timestamp) -> String {
    let rows = templates.iter().map(|t| SummaryRow {
        name: t.name.clone(),
        namespace: t.namespace.clone(),
        created: format_age(t.creation_timestamp.as_deref(), now),
    });
    Table::new(rows).with(Style::blank()).to_string()
}

/// Dimmed `label:` followed by the value, for detail output
pub fn format_field(label: &str, value: &str) -> String {
    format!("{} {}", format!("{label}:").dimmed(), value)
}

/// Template identity with the namespace dimmed
pub fn format_identity_colored(namespace: &str, name: &str) -> String {
    format!("{}{}", format!("{namespace}/").dimmed(), name.cyan())
}
