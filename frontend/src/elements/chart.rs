use dominator::{Dom, html, svg};

use shared::chart::{bubble_layout, ChartItem, findings_chart_data, legend_totals};
use shared::types::FindingRow;
use shared::utils::keyword_label;

use crate::constants::{TAG_DIV, TAG_SPAN};
use crate::elements::empty_state::empty_state;

const CHART_WIDTH: f64 = 560.0;

fn css_class(label: &str) -> String {
    format!("chart__{label}")
}

/// Legend badges plus a bubble per finding label.
pub fn findings_chart(rows: &[FindingRow]) -> Dom {
    let items = findings_chart_data(rows);
    if items.is_empty() {
        return empty_state("No findings to chart");
    }

    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([legend(&items), bubbles(&items)])
    })
}

fn legend(items: &[ChartItem]) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("legend"))
        .children(legend_totals(items).into_iter().map(|(kind, total)| {
            html!(TAG_DIV, {
                .class(css_class("badge"))
                .children([
                    html!(TAG_SPAN, {
                        .class(css_class("swatch"))
                        .style("background-color", kind.color())
                    }),
                    html!(TAG_SPAN, {
                        .text(&format!("{} ({total})", kind.label()))
                    }),
                ])
            })
        }))
    })
}

fn bubbles(items: &[ChartItem]) -> Dom {
    let (bubbles, height) = bubble_layout(items, CHART_WIDTH);

    svg!("svg", {
        .class(css_class("bubbles"))
        .attr("viewBox", &format!("0 0 {CHART_WIDTH} {height}"))
        .attr("width", &CHART_WIDTH.to_string())
        .attr("height", &height.to_string())
        .children(bubbles.iter().map(|bubble| {
            let label = keyword_label(&bubble.item.label);
            svg!("g", {
                .children([
                    svg!("title", {
                        .text(&format!("{label}: {}", bubble.item.value))
                    }),
                    svg!("circle", {
                        .attr("cx", &bubble.x.to_string())
                        .attr("cy", &bubble.y.to_string())
                        .attr("r", &bubble.r.to_string())
                        .attr("fill", bubble.item.kind.color())
                    }),
                    svg!("text", {
                        .attr("x", &bubble.x.to_string())
                        .attr("y", &bubble.y.to_string())
                        .attr("text-anchor", "middle")
                        .attr("dominant-baseline", "middle")
                        .text(&bubble.item.value.to_string())
                    }),
                ])
            })
        }))
    })
}
