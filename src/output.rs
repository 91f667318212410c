use std::path::Path;

use colored::*;

use crate::verify::VerifyReport;
use crate::wav::AudioFormat;

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn get_display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub(crate) fn format_duration(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

pub(crate) fn print_progress(display_name: &str, progress: u32) {
    if progress >= 100 {
        eprintln!("\rWriting {}... done", display_name);
    } else {
        eprint!("\rWriting {}... {}%", display_name, progress);
    }
}

pub(crate) fn print_summary(
    display_name: &str,
    format: AudioFormat,
    duration_secs: u32,
    frequencies: &[u32],
    data_size: u32,
) {
    let harmonics: Vec<String> = frequencies.iter().map(|f| format!("{} Hz", f)).collect();

    println!("File: {}", display_name.bold());
    println!(
        "Format: PCM {}-bit, {} Hz, Channels: {}",
        format.bits_per_sample, format.sample_rate, format.channels
    );
    println!("Duration: {}", format_duration(duration_secs));
    println!("Harmonics: {}", harmonics.join(", "));
    println!("Data: {} bytes", data_size);
}

pub(crate) fn print_verify_report(report: &VerifyReport) {
    println!();
    println!("[Verify]");
    println!(
        "Decoded: {} frames, {} Hz, {} ch, {} bit",
        report.frames, report.sample_rate, report.channels, report.bits_per_sample
    );
    match report.dominant_hz {
        Some(hz) => println!("Dominant frequency: {:.1} Hz", hz),
        None => println!("Dominant frequency: -"),
    }
    println!("{}", "OK".green().bold());
}
