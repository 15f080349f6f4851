use dominator::{Dom, events, html};
use futures_signals::signal::{Mutable, SignalExt};

use shared::table::NO_DATA_FOUND;
use shared::types::{FindingsDetail, SnippetItem};
use shared::utils::{entity_spans, keyword_label, split_by_pivots};

use crate::constants::{LABEL_SEARCH, PROP_PLACEHOLDER, PROP_TITLE, PROP_TYPE, TAG_DIV, TAG_INPUT, TAG_SPAN};
use crate::elements::accordion::accordion;
use crate::elements::key_value::key_value;
use crate::elements::view_more::view_more;
use crate::utils::input_value;

fn css_class(label: &str) -> String {
    format!("snippets__{label}")
}

fn matches(detail: &FindingsDetail, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty()
        || detail.label_name.to_lowercase().contains(&query)
        || keyword_label(&detail.label_name).to_lowercase().contains(&query)
        || detail.snippets.iter().any(|s| s.source_path.to_lowercase().contains(&query))
}

/// Snippets grouped per finding label, filtered on each keystroke.
pub fn snippets(details: Vec<FindingsDetail>) -> Dom {
    let query = Mutable::new(String::new());

    html!(TAG_DIV, {
        .class(css_class("container"))
        .child(html!(TAG_INPUT, {
            .class(css_class("search"))
            .attr(PROP_TYPE, "search")
            .attr(PROP_PLACEHOLDER, LABEL_SEARCH)
            .event({
                let query = query.clone();
                move |e: events::KeyUp| query.set_neq(input_value(e.target()))
            })
        }))
        .child_signal(query.signal_cloned().map(move |query| {
            let groups = details.iter()
                .filter(|detail| matches(detail, &query))
                .map(group)
                .collect::<Vec<_>>();
            Some(if groups.is_empty() {
                html!(TAG_DIV, {
                    .class(css_class("no-data"))
                    .text(NO_DATA_FOUND)
                })
            } else {
                html!(TAG_DIV, {
                    .class(css_class("groups"))
                    .children(groups)
                })
            })
        }))
    })
}

fn group(detail: &FindingsDetail) -> Dom {
    let title = format!(
        "{} ({} snippets, {} files)",
        keyword_label(&detail.label_name),
        detail.snippet_count.max(detail.snippets.len() as u64),
        detail.file_count,
    );
    accordion(&title, html!(TAG_DIV, {
        .class(css_class("list"))
        .children(detail.snippets.iter().map(snippet))
    }))
}

fn snippet(item: &SnippetItem) -> Dom {
    let mut spans = entity_spans(&item.entity_details);
    spans.extend(entity_spans(&item.topic_details));
    spans.sort_by_key(|span| (span.start, span.end));

    html!(TAG_DIV, {
        .class(css_class("item"))
        .children([
            html!(TAG_DIV, {
                .class(css_class("text"))
                .children(split_by_pivots(&item.snippet, &spans).into_iter().map(|part| {
                    html!(TAG_SPAN, {
                        .apply_if(part.is_entity, |dom| dom.class(css_class("entity")))
                        .apply_if(part.score.is_some(), |dom| {
                            dom.attr(PROP_TITLE, &format!("Confidence score: {}", part.score.clone().unwrap_or_default()))
                        })
                        .text(&part.text)
                    })
                }))
            }),
            key_value("File", &item.source_path),
            key_value("Owner", &item.file_owner),
            html!(TAG_DIV, {
                .class(css_class("identities"))
                .children([
                    html!(TAG_SPAN, {
                        .text("Authorized Identities")
                    }),
                    view_more("Authorized Identities", item.authorized_identities.clone()),
                ])
            }),
        ])
    })
}
