//! Table of individual attack records.

use leptos::prelude::*;

use crate::net::types::PromptRecord;
use crate::util::stats::{format_confidence, format_date};

/// One row per record, in the order given.
#[component]
pub fn AttackTable(records: Vec<PromptRecord>) -> impl IntoView {
    view! {
        <div class="attack-table-container">
            <table class="attack-table">
                <thead>
                    <tr>
                        <th>"Attack Type"</th>
                        <th>"Prompt"</th>
                        <th>"Confidence"</th>
                        <th>"Date"</th>
                    </tr>
                </thead>
                <tbody>
                    {records
                        .into_iter()
                        .map(|record| {
                            let attack_type = record
                                .attack_type
                                .as_ref()
                                .map_or_else(|| "Unknown".to_owned(), ToString::to_string);
                            view! {
                                <tr>
                                    <td class="attack-table__type">{attack_type}</td>
                                    <td class="attack-table__prompt">{record.prompt}</td>
                                    <td class="attack-table__confidence">{format_confidence(record.confidence)}</td>
                                    <td class="attack-table__date">{format_date(&record.created_at)}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}
