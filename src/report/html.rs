//! HTML pages for the web front end

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::benchmark::Problem;
use crate::models::BenchmarkSummary;
use crate::utils::{format_count, format_local};

use super::comparison::Comparison;

const STYLES: &str = r#"
body { font-family: system-ui, -apple-system, sans-serif; max-width: 960px; margin: 0 auto; padding: 24px; color: #222; background: #fafafa; }
h1 { font-family: monospace; letter-spacing: 4px; }
table { border-collapse: collapse; width: 100%; margin: 16px 0; }
th, td { border: 1px solid #ccc; padding: 6px 10px; text-align: right; }
th:first-child, td:first-child { text-align: left; }
th { background: #333; color: #ffd700; }
.winner { background: #dff5e1; font-weight: bold; }
.loser { background: #fbe3e3; }
.lean { color: #1b7f2a; }
.heavy { color: #b02a2a; }
.meta { color: #555; }
.note { color: #8a6d3b; }
pre { background: #1e1e1e; color: #dcdcdc; padding: 12px; overflow-x: auto; border-radius: 4px; }
"#;

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLES)) }
            }
            body { (body) }
        }
    }
}

/// Landing page listing every registered problem
pub fn index_page(problems: &[Problem]) -> String {
    layout(
        "AlgoBench",
        html! {
            h1 { "AlgoBench" }
            p class="meta" { "Pick a benchmark to run. Each run generates fresh data." }
            ul {
                @for problem in problems {
                    li {
                        a href={ "/benchmark/" (problem.id) } { (problem.display_name()) }
                    }
                }
            }
        },
    )
    .into_string()
}

/// Results page with winner/loser highlighting and optional source snippets
pub fn results_page(summary: &BenchmarkSummary) -> String {
    let comparison = Comparison::from_results(&summary.results);

    layout(
        &summary.title,
        html! {
            h1 { (summary.banner_text) }
            h2 { (summary.title) }
            p class="meta" {
                "Ran " (format_count(summary.test_count)) " tests on " (summary.data_description)
                " at " (format_local(summary.generated_at))
            }

            table {
                thead {
                    tr {
                        th { "Label" }
                        th { "Time (ms)" }
                        th { "RSS (MB)" }
                        th { "Heap Total (MB)" }
                        th { "Heap Used (MB)" }
                    }
                }
                tbody {
                    @for r in &summary.results {
                        @let row_class = comparison.as_ref().map(|c| {
                            if c.is_fastest(&r.label) { "winner" }
                            else if c.is_slowest(&r.label) { "loser" }
                            else { "" }
                        }).unwrap_or("");
                        @let mem_class = comparison.as_ref().map(|c| {
                            if c.is_least_memory(&r.label) { "lean" }
                            else if c.is_most_memory(&r.label) { "heavy" }
                            else { "" }
                        }).unwrap_or("");
                        tr class=(row_class) {
                            td { (r.label) }
                            td { (format!("{:.2}", r.time_ms)) }
                            td { (format!("{:.2}", r.rss_mb)) }
                            td { (format!("{:.2}", r.heap_total_mb)) }
                            td class=(mem_class) { (format!("{:.2}", r.heap_used_mb)) }
                        }
                    }
                }
            }

            @if let Some(c) = &comparison {
                p {
                    strong { (c.fastest.label) }
                    " was " (format!("{:.2}", c.time_pct)) "% faster than "
                    strong { (c.slowest.label) } "."
                }
                p {
                    strong { (c.least_memory.label) }
                    " used " (format!("{:.2}", c.memory_pct)) "% less heap than "
                    strong { (c.most_memory.label) } "."
                }
            }

            @for warning in &summary.source_warnings {
                p class="note" { (warning) }
            }

            @if let Some(sources) = &summary.source_code {
                h3 { "Source" }
                @for source in sources {
                    h4 { (source.label) }
                    pre { code { (source.code) } }
                }
            }

            p { a href="/" { "Back to benchmarks" } }
        },
    )
    .into_string()
}

/// 404 page, naming the unknown problem when there is one
pub fn not_found_page(problem_id: Option<&str>) -> String {
    layout(
        "Not found",
        html! {
            h1 { "404" }
            @match problem_id {
                Some(id) => {
                    p { "Unknown function: " code { (id) } }
                }
                None => {
                    p { "Nothing lives at this address." }
                }
            }
            p { a href="/" { "Back to benchmarks" } }
        },
    )
    .into_string()
}

/// 500 page for a failed run
pub fn error_page(message: &str) -> String {
    layout(
        "Benchmark failed",
        html! {
            h1 { "Benchmark failed" }
            p { (message) }
            p { a href="/" { "Back to benchmarks" } }
        },
    )
    .into_string()
}
