use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::types::EntityLocation;

const SIZE_LABELS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Human readable size in 1024 steps, `-` for zero.
pub fn get_file_size(size: u64) -> String {
    if size == 0 {
        return "-".to_string();
    }
    let mut value = size as f64;
    let mut power = 0;
    while value > 1024.0 && power < SIZE_LABELS.len() - 1 {
        value /= 1024.0;
        power += 1;
    }
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{text} {}", SIZE_LABELS[power])
}

fn parse_date(date: &str) -> Option<NaiveDateTime> {
    let date = date.trim();
    if date.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return Some(parsed.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(date, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `Jan 02, 2024` or `Jan 02, 2024, 3:04 PM`; empty on unparsable input.
pub fn format_date(date: &str, show_time: bool) -> String {
    match parse_date(date) {
        Some(parsed) if show_time => parsed.format("%b %d, %Y, %-I:%M %p").to_string(),
        Some(parsed) => parsed.format("%b %d, %Y").to_string(),
        None => String::new(),
    }
}

/// Tab counters are shown with two digits.
pub fn counter_text(count: u64) -> String {
    format!("{count:02}")
}

/// Total next to a tab counter, shown as is.
pub fn out_of_text(total: u64) -> String {
    format!("/{total}")
}

pub fn keyword_label(label: &str) -> String {
    let mapped = match label {
        "us-ssn" => "US SSN",
        "us-itin" => "US ITIN",
        "us-passport-number" => "US Passport number",
        "us-drivers-license" => "US Drivers License",
        "credit-card-number" => "Credit card number",
        "us-bank-account-number" => "US Bank Account Number",
        "iban-code" => "IBAN code",
        "github-token" => "Github Token",
        "slack-token" => "Slack Token",
        "aws-access-key" => "AWS Access Key",
        "aws-secret-key" => "AWS Secret Key",
        "azure-key-id" => "Azure Key ID",
        "azure-client-secret" => "Azure Client Secret",
        "google-api-key" => "Google API Key",
        "harmful-advice" => "Harmful Advice",
        "medical-advice" => "Medical Advice",
        "financial-report" => "Financial Report",
        _ => label,
    };
    mapped.to_string()
}

// === snippet highlighting

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SnippetPart {
    pub text: String,
    pub is_entity: bool,
    pub score: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub score: Option<String>,
}

/// Collects `start_end` locations from entity details; malformed ones are dropped.
pub fn entity_spans(details: &BTreeMap<String, Vec<EntityLocation>>) -> Vec<EntitySpan> {
    let mut spans = details.values()
        .flatten()
        .filter_map(|entry| {
            let (start, end) = entry.location.split_once('_')?;
            let start = start.trim().parse::<usize>().ok()?;
            let end = end.trim().parse::<usize>().ok()?;
            (start < end).then(|| EntitySpan { start, end, score: entry.confidence_score.clone() })
        })
        .collect::<Vec<_>>();
    spans.sort_by_key(|span| (span.start, span.end));
    spans
}

/// Splits `text` into plain and entity parts. Offsets are in chars; spans
/// past the end are clamped and overlapping spans are skipped.
pub fn split_by_pivots(text: &str, spans: &[EntitySpan]) -> Vec<SnippetPart> {
    let chars = text.chars().collect::<Vec<_>>();
    let slice = |from: usize, to: usize| chars[from..to].iter().collect::<String>();

    let mut parts = vec![];
    let mut cursor = 0;
    for span in spans {
        if span.start < cursor || span.start >= chars.len() {
            continue;
        }
        let end = span.end.min(chars.len());
        if span.start > cursor {
            parts.push(SnippetPart { text: slice(cursor, span.start), ..SnippetPart::default() });
        }
        parts.push(SnippetPart {
            text: slice(span.start, end),
            is_entity: true,
            score: span.score.clone(),
        });
        cursor = end;
    }
    if cursor < chars.len() {
        parts.push(SnippetPart { text: slice(cursor, chars.len()), ..SnippetPart::default() });
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_sizes() {
        assert_eq!(get_file_size(0), "-");
        assert_eq!(get_file_size(512), "512 Bytes");
        assert_eq!(get_file_size(1024), "1024 Bytes");
        assert_eq!(get_file_size(1536), "1.5 KB");
        assert_eq!(get_file_size(5 * 1024 * 1024 + 1), "5 MB");
    }

    #[test]
    fn dates() {
        assert_eq!(format_date("2024-03-05T14:07:00.123456", false), "Mar 05, 2024");
        assert_eq!(format_date("2024-03-05 14:07:00", true), "Mar 05, 2024, 2:07 PM");
        assert_eq!(format_date("2024-03-05T09:30:00+00:00", true), "Mar 05, 2024, 9:30 AM");
        assert_eq!(format_date("2024-12-31", false), "Dec 31, 2024");
        assert_eq!(format_date("", true), "");
        assert_eq!(format_date("yesterday", false), "");
    }

    #[test]
    fn tab_counter_texts() {
        assert_eq!(counter_text(3), "03");
        assert_eq!(counter_text(42), "42");
        assert_eq!(counter_text(120), "120");
        assert_eq!(out_of_text(7), "/7");
        assert_eq!(out_of_text(120), "/120");
    }

    #[test]
    fn keyword_labels_fall_back_to_input() {
        assert_eq!(keyword_label("us-ssn"), "US SSN");
        assert_eq!(keyword_label("custom-label"), "custom-label");
    }

    fn details(locations: &[(&str, Option<&str>)]) -> BTreeMap<String, Vec<EntityLocation>> {
        let mut map = BTreeMap::new();
        map.insert(
            "us-ssn".to_string(),
            locations.iter()
                .map(|(location, score)| EntityLocation {
                    location: location.to_string(),
                    confidence_score: score.map(String::from),
                })
                .collect(),
        );
        map
    }

    #[test]
    fn splits_snippet_around_entities() {
        let spans = entity_spans(&details(&[("8_19", Some("HIGH"))]));
        let parts = split_by_pivots("my ssn: 123-45-6789 ok", &spans);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].text, "my ssn: ");
        assert!(!parts[0].is_entity);
        assert_eq!(parts[1].text, "123-45-6789");
        assert!(parts[1].is_entity);
        assert_eq!(parts[1].score.as_deref(), Some("HIGH"));
        assert_eq!(parts[2].text, " ok");
    }

    #[test]
    fn malformed_and_overlapping_spans_are_skipped() {
        let spans = entity_spans(&details(&[("0_4", None), ("2_6", None), ("x_y", None), ("9_3", None)]));
        assert_eq!(spans.len(), 2);
        let parts = split_by_pivots("abcdefgh", &spans);
        let texts: Vec<_> = parts.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, ["abcd", "efgh"]);
        assert!(parts[0].is_entity);
        assert!(!parts[1].is_entity);
    }

    #[test]
    fn spans_past_end_are_clamped() {
        let spans = entity_spans(&details(&[("3_50", None)]));
        let parts = split_by_pivots("héllo", &spans);
        let texts: Vec<_> = parts.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, ["hél", "lo"]);
    }

    #[test]
    fn no_spans_keeps_text() {
        let parts = split_by_pivots("plain", &[]);
        assert_eq!(parts, vec![SnippetPart { text: "plain".to_string(), ..SnippetPart::default() }]);
        assert!(split_by_pivots("", &[]).is_empty());
    }
}
