use std::collections::BTreeMap;

use crate::types::FindingRow;

pub const COLOR_ENTITY: &str = "#BAC5FA";
pub const COLOR_TOPIC: &str = "#B2DDF6";

const MIN_RADIUS: f64 = 14.0;
const PADDING: f64 = 4.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FindingKind {
    Entity,
    Topic,
}

impl FindingKind {
    pub fn from_type(findings_type: &str) -> Self {
        if findings_type.to_lowercase().starts_with("topic") {
            FindingKind::Topic
        } else {
            FindingKind::Entity
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            FindingKind::Entity => COLOR_ENTITY,
            FindingKind::Topic => COLOR_TOPIC,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FindingKind::Entity => "Entities",
            FindingKind::Topic => "Topics",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartItem {
    pub label: String,
    pub value: u64,
    pub kind: FindingKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub item: ChartItem,
}

/// Snippet counts summed per finding label.
pub fn findings_chart_data(rows: &[FindingRow]) -> Vec<ChartItem> {
    let mut grouped: BTreeMap<&str, ChartItem> = BTreeMap::new();
    for row in rows {
        let entry = grouped.entry(row.label_name.as_str()).or_insert_with(|| ChartItem {
            label: row.label_name.clone(),
            value: 0,
            kind: FindingKind::from_type(&row.findings_type),
        });
        entry.value += row.snippet_count.max(row.findings);
    }
    grouped.into_values().filter(|item| item.value > 0).collect()
}

/// Totals per kind, for the chart legend.
pub fn legend_totals(items: &[ChartItem]) -> Vec<(FindingKind, u64)> {
    [FindingKind::Entity, FindingKind::Topic]
        .into_iter()
        .map(|kind| (kind, items.iter().filter(|i| i.kind == kind).map(|i| i.value).sum::<u64>()))
        .collect()
}

/// Row-wrapped bubble placement: largest first, radius by square root of
/// value. Returns the bubbles and the total height used.
pub fn bubble_layout(items: &[ChartItem], width: f64) -> (Vec<Bubble>, f64) {
    let max_value = items.iter().map(|i| i.value).max().unwrap_or_default();
    if max_value == 0 || width <= 0.0 {
        return (vec![], 0.0);
    }
    let max_radius = (width / 8.0).clamp(MIN_RADIUS, 80.0);

    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.label.cmp(&b.label)));

    let mut bubbles = vec![];
    let (mut x, mut row_top, mut row_height) = (0.0_f64, 0.0_f64, 0.0_f64);
    for item in sorted {
        let r = (max_radius * (item.value as f64 / max_value as f64).sqrt()).max(MIN_RADIUS).min(width / 2.0);
        let diameter = r * 2.0;
        if x > 0.0 && x + diameter > width {
            row_top += row_height + PADDING;
            x = 0.0;
            row_height = 0.0;
        }
        bubbles.push(Bubble { x: x + r, y: row_top + r, r, item });
        x += diameter + PADDING;
        row_height = row_height.max(diameter);
    }
    (bubbles, row_top + row_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(label: &str, kind: &str, snippets: u64) -> FindingRow {
        FindingRow {
            label_name: label.to_string(),
            findings_type: kind.to_string(),
            snippet_count: snippets,
            ..FindingRow::default()
        }
    }

    #[test]
    fn groups_by_label() {
        let items = findings_chart_data(&[
            row("us-ssn", "entities", 3),
            row("us-ssn", "entities", 2),
            row("medical-advice", "topics", 4),
            row("empty", "topics", 0),
        ]);
        assert_eq!(items.len(), 2);
        let ssn = items.iter().find(|i| i.label == "us-ssn").map(|i| i.value);
        assert_eq!(ssn, Some(5));
        assert!(items.iter().any(|i| i.kind == FindingKind::Topic));

        let totals = legend_totals(&items);
        assert_eq!(totals, vec![(FindingKind::Entity, 5), (FindingKind::Topic, 4)]);
    }

    #[test]
    fn bubbles_fit_width_and_do_not_overlap() {
        let items = (1..=12)
            .map(|v| ChartItem { label: format!("l{v}"), value: v * 10, kind: FindingKind::Entity })
            .collect::<Vec<_>>();
        let width = 400.0;
        let (bubbles, height) = bubble_layout(&items, width);
        assert_eq!(bubbles.len(), 12);
        assert!(height > 0.0);
        for (i, a) in bubbles.iter().enumerate() {
            assert!(a.x - a.r >= 0.0 && a.x + a.r <= width + 1e-9);
            assert!(a.y + a.r <= height + 1e-9);
            for b in bubbles.iter().skip(i + 1) {
                let distance = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
                assert!(distance + 1e-9 >= a.r + b.r);
            }
        }
        assert_eq!(bubbles[0].item.value, 120);
    }

    #[test]
    fn empty_layout() {
        assert_eq!(bubble_layout(&[], 300.0), (vec![], 0.0));
    }
}
