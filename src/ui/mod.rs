// Presentation glue: the core never depends on anything in here.

pub mod plot;

use crate::pipeline::SignalReport;

pub fn print_banner() {
    println!("signalgen-rs — digital line coding simulator");
}

/// Print a full report: title, bit string, analyses, levels, waveform.
pub fn print_report(report: &SignalReport) {
    println!();
    println!("{}", report.title);
    println!("Bits: {}", report.bits);
    println!(
        "Longest Palindrome: {} (Length: {})",
        report.palindrome.text, report.palindrome.len
    );

    let levels_text = report
        .levels
        .iter()
        .map(|level| level.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("Signal: {}", levels_text);

    if let Some(run) = report.zero_run {
        println!(
            "Longest zero sequence: {} zeros starting at position {}",
            run.len, run.start
        );
    }

    println!();
    print!("{}", plot::render(&report.levels, report.line_code));
}
