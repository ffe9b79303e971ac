//! Styled console report

use std::fmt::Write;

use colored::Colorize;
use figlet_rs::FIGfont;

use crate::constants::{REPORT_SIGNATURE, REPORT_WIDTH};
use crate::models::BenchmarkSummary;
use crate::utils::{format_count, format_local};

const WAVES: [char; 8] = ['⠁', '⠂', '⠄', '⡀', '⢀', '⠠', '⠐', '⠈'];

const HEADERS: [&str; 5] = [
    "Label",
    "Time (ms)",
    "RSS (MB)",
    "Heap Total (MB)",
    "Heap Used (MB)",
];
const COLUMN_WIDTHS: [usize; 5] = [32, 17, 14, 18, 18];

/// Render a summary as a framed, coloured console report
pub fn render_terminal(summary: &BenchmarkSummary) -> String {
    let mut out = String::new();
    let stripe = wave_stripe(REPORT_WIDTH);

    // top border with the signature centred in the wave
    let name_len = REPORT_SIGNATURE.chars().count();
    let left = REPORT_WIDTH.saturating_sub(name_len) / 2;
    let left_wave: String = stripe.chars().take(left).collect();
    let right_wave: String = stripe.chars().skip(left + name_len).collect();
    let _ = writeln!(
        out,
        "{}{}{}",
        format!("╭{left_wave}").bright_blue(),
        REPORT_SIGNATURE.bright_yellow().bold(),
        format!("{right_wave}╮").bright_blue()
    );

    let _ = writeln!(out, "{}", banner(&summary.banner_text).bright_cyan());
    let _ = writeln!(out, "{}\n", summary.title.bright_magenta());

    let _ = writeln!(
        out,
        "{}",
        format!(
            "Running {} tests on {}",
            format_count(summary.test_count),
            summary.data_description
        )
        .bright_white()
        .on_black()
    );
    let _ = writeln!(
        out,
        "{} {}",
        "Time:".truecolor(255, 215, 0),
        format_local(summary.generated_at).white()
    );
    let _ = writeln!(out, "{}", "─".repeat(REPORT_WIDTH).bright_black());

    let _ = writeln!(out, "{}\n", summary.labels().join("   vs.   ").bright_green());

    render_table(&mut out, summary);

    for warning in &summary.source_warnings {
        let _ = writeln!(out, "{}", format!("note: {warning}").bright_black());
    }

    let _ = writeln!(out, "{}", format!("╰{stripe}╯").bright_blue());
    out
}

fn wave_stripe(width: usize) -> String {
    WAVES.iter().cycle().take(width).collect()
}

/// FIGlet rendering of `text`, or the plain text when the font is unavailable
fn banner(text: &str) -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(text).map(|figure| figure.to_string()))
        .unwrap_or_else(|| text.to_string())
}

fn render_table(out: &mut String, summary: &BenchmarkSummary) {
    let _ = writeln!(out, "{}", border('┌', '┬', '┐'));

    let header: Vec<String> = HEADERS
        .iter()
        .zip(COLUMN_WIDTHS)
        .enumerate()
        .map(|(i, (h, w))| pad_cell(h, w, i == 0).yellow().bold().to_string())
        .collect();
    let _ = writeln!(out, "{}", row(&header));
    let _ = writeln!(out, "{}", border('├', '┼', '┤'));

    for r in &summary.results {
        let values = [
            r.label.clone(),
            format!("{:.2}", r.time_ms),
            format!("{:.2}", r.rss_mb),
            format!("{:.2}", r.heap_total_mb),
            format!("{:.2}", r.heap_used_mb),
        ];
        let cells: Vec<String> = values
            .iter()
            .zip(COLUMN_WIDTHS)
            .enumerate()
            .map(|(i, (v, w))| pad_cell(v, w, i == 0))
            .collect();
        let _ = writeln!(out, "{}", row(&cells));
    }

    let _ = writeln!(out, "{}", border('└', '┴', '┘'));
}

/// Pad (or truncate) to the column width, leaving one space of margin per side
fn pad_cell(value: &str, width: usize, left_align: bool) -> String {
    let inner = width.saturating_sub(2);
    let text: String = value.chars().take(inner).collect();
    if left_align {
        format!(" {text:<inner$} ")
    } else {
        format!(" {text:>inner$} ")
    }
}

fn row(cells: &[String]) -> String {
    let sep = "│".bright_black().to_string();
    format!("{sep}{}{sep}", cells.join(sep.as_str()))
}

fn border(left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = COLUMN_WIDTHS.iter().map(|w| "─".repeat(*w)).collect();
    format!("{left}{}{right}", segments.join(mid.to_string().as_str()))
        .bright_black()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BenchmarkResult;
    use chrono::Utc;

    fn summary() -> BenchmarkSummary {
        BenchmarkSummary {
            run_id: uuid::Uuid::nil(),
            problem_id: "reverse".to_string(),
            banner_text: "REVERSE".to_string(),
            title: "Reverse Integer Benchmark".to_string(),
            test_count: 100_000,
            data_description: "unique integers".to_string(),
            results: vec![
                BenchmarkResult {
                    label: "String-based".to_string(),
                    time_ms: 12.3456,
                    rss_mb: 0.5,
                    heap_total_mb: 0.0,
                    heap_used_mb: 0.25,
                    external_mb: 0.0,
                },
                BenchmarkResult {
                    label: "Math-based".to_string(),
                    time_ms: 1.2,
                    rss_mb: 0.0,
                    heap_total_mb: 0.0,
                    heap_used_mb: -0.1,
                    external_mb: 0.0,
                },
            ],
            source_code: None,
            source_warnings: vec!["Could not find function x in y.rs".to_string()],
            generated_at: Utc::now(),
        }
    }

    /// Drop `ESC [ ... m` colour sequences so assertions see plain text
    fn strip_ansi(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for code in chars.by_ref() {
                    if code == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_strip_ansi() {
        assert_eq!(strip_ansi("\x1b[1;33mLabel\x1b[0m |"), "Label |");
    }

    #[test]
    fn test_report_contents() {
        let report = strip_ansi(&render_terminal(&summary()));

        assert!(report.contains("Reverse Integer Benchmark"));
        assert!(report.contains("Running 100,000 tests on unique integers"));
        assert!(report.contains("String-based   vs.   Math-based"));
        assert!(report.contains("12.35"));
        assert!(report.contains("-0.10"));
        assert!(report.contains("note: Could not find function x in y.rs"));
        assert!(report.contains(REPORT_SIGNATURE));
    }

    #[test]
    fn test_pad_cell() {
        assert_eq!(pad_cell("ab", 6, true), " ab   ");
        assert_eq!(pad_cell("ab", 6, false), "   ab ");
        assert_eq!(pad_cell("abcdef", 6, true), " abcd ");
    }

    #[test]
    fn test_wave_stripe_width() {
        assert_eq!(wave_stripe(REPORT_WIDTH).chars().count(), REPORT_WIDTH);
    }
}
