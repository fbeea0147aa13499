// ============================================================================
// playprobe-cli/src/output.rs
// ============================================================================
//
// REPORT RENDERING: Human-Readable and JSON Output on stdout
//
// Failed files are always listed in their own section, apart from the
// classified ones, together with their error messages.

use owo_colors::OwoColorize;
use playprobe_core::{
    AggregateReport, ClassificationVerdict, FrameStepReport, ProbeResult, TimingStats,
    format_duration_secs, format_fps, format_millis, format_resolution,
};
use serde::Serialize;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::CliResult;

// Global color setting
static USE_COLOR: AtomicBool = AtomicBool::new(true);

/// Set whether to use color in terminal output
pub fn set_color(enable: bool) {
    USE_COLOR.store(enable, Ordering::Relaxed);
}

fn should_use_color() -> bool {
    USE_COLOR.load(Ordering::Relaxed)
}

/// Whether `stream` can show colour and the user has not turned it off.
pub fn detect_color(no_color_flag: bool, stream: supports_color::Stream) -> bool {
    !no_color_flag && supports_color::on(stream).is_some()
}

fn heading(text: &str) -> String {
    if should_use_color() {
        text.bold().cyan().to_string()
    } else {
        text.to_string()
    }
}

fn good(text: &str) -> String {
    if should_use_color() {
        text.green().to_string()
    } else {
        text.to_string()
    }
}

fn bad(text: &str) -> String {
    if should_use_color() {
        text.bright_red().bold().to_string()
    } else {
        text.to_string()
    }
}

fn notice(text: &str) -> String {
    if should_use_color() {
        text.yellow().to_string()
    } else {
        text.to_string()
    }
}

fn print_section(title: &str) {
    println!();
    println!("{}", heading(&format!("===== {} =====", title.to_uppercase())));
}

fn print_info(label: &str, value: impl std::fmt::Display) {
    println!("  {:<22} {}", format!("{label}:"), value);
}

/// Prints any serializable value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.display().to_string()
}

/// Prints the descriptor of one probed file.
pub fn print_probe_result(result: &ProbeResult) {
    print_section("Probe");
    let d = &result.descriptor;
    print_info("File", display_name(&result.file_path));
    print_info(
        "Status",
        if result.succeeded { good("ok") } else { bad("failed") },
    );
    if let Some(message) = &result.error_message {
        print_info("Error", bad(message));
    }
    print_info("Codec", d.codec.as_deref().unwrap_or("unknown"));
    print_info("Container", d.container.as_deref().unwrap_or("unknown"));
    print_info("Resolution", format_resolution(d.width, d.height));
    print_info("Frame rate", format_fps(d.frame_rate));
    print_info(
        "Duration",
        d.duration_seconds
            .map(format_duration_secs)
            .unwrap_or_else(|| "unknown".to_string()),
    );
    print_info("Load time", format_millis(result.load_time_millis as f64));
}

/// Prints the classification of one file.
pub fn print_verdict(verdict: &ClassificationVerdict) {
    let text = match verdict.reason {
        Some(reason) => notice(&format!("would require conversion ({reason})")),
        None => good("plays as is"),
    };
    print_info("Legacy pipeline", text);
}

/// Prints the per-file table and the aggregate report of a scan.
pub fn print_scan_report(verdicts: &[ClassificationVerdict], report: &AggregateReport, interrupted: bool) {
    let classified: Vec<&ClassificationVerdict> =
        verdicts.iter().filter(|v| v.probe_result.succeeded).collect();

    print_section("Files");
    if classified.is_empty() {
        println!("  {}", notice("No file was probed successfully"));
    }
    for verdict in &classified {
        let probe = &verdict.probe_result;
        let status = match verdict.reason {
            Some(reason) => notice(&format!("convert: {reason}")),
            None => good("ok"),
        };
        println!(
            "  {}  [{} | {} | {} | {}]  {}",
            display_name(&probe.file_path),
            probe.descriptor.codec.as_deref().unwrap_or("?"),
            format_resolution(probe.descriptor.width, probe.descriptor.height),
            format_fps(probe.descriptor.frame_rate),
            format_millis(probe.load_time_millis as f64),
            status
        );
    }

    if !report.failures.is_empty() {
        print_section("Failed");
        for failure in &report.failures {
            println!(
                "  {}  {}",
                bad(&display_name(&failure.file_path)),
                failure.error_message
            );
        }
    }

    print_section("Summary");
    print_info("Files", report.total);
    print_info("Succeeded", good(&report.succeeded_count.to_string()));
    let failed = report.failed_count.to_string();
    print_info(
        "Failed",
        if report.failed_count > 0 { bad(&failed) } else { failed },
    );
    print_info(
        "Conversions avoided",
        format!(
            "{} ({:.1}% of succeeded)",
            report.conversions_avoided,
            report.conversion_rate_percent()
        ),
    );
    print_info("Average load time", format_millis(report.average_load_time_millis));

    if !report.per_codec_counts.is_empty() {
        println!();
        println!("  {}", heading("Codecs"));
        for (codec, count) in &report.per_codec_counts {
            println!("    {codec:<16} {count}");
        }
    }

    if interrupted {
        println!();
        println!("  {}", notice("Interrupted: remaining files were not probed"));
    }
}

fn print_timing(label: &str, stats: &TimingStats) {
    if stats.samples == 0 {
        print_info(label, notice("no successful steps"));
        return;
    }
    print_info(
        label,
        format!(
            "mean {} / min {} / max {} ({} steps)",
            format_millis(stats.mean_ms()),
            format_millis(stats.min_ms),
            format_millis(stats.max_ms),
            stats.samples
        ),
    );
}

/// Prints frame-step benchmark timings.
pub fn print_bench_report(file: &Path, report: &FrameStepReport) {
    print_section("Frame-step benchmark");
    print_info("File", display_name(file));
    print_timing("Forward", &report.forward);
    print_timing("Backward", &report.backward);
    let failed = report.failed_steps.to_string();
    print_info(
        "Failed steps",
        if report.failed_steps > 0 { bad(&failed) } else { failed },
    );
    if report.interrupted {
        println!();
        println!("  {}", notice("Interrupted: remaining steps were not run"));
    }
}
