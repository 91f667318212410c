mod analysis;
mod audio;
mod error;
mod output;
mod request;
mod synth;
mod verify;
mod wav;

use std::collections::HashSet;
use std::path::PathBuf;

use clap::Parser;

use error::AppError;
use output::{
    get_display_name, print_error, print_progress, print_summary, print_verify_report,
    print_warning,
};
use request::SynthesisRequest;
use synth::{PhaseMode, Synthesizer, synthesize};
use verify::verify_wave;
use wav::{AudioFormat, WaveHeader, stream_wave_file, write_wave_file};

#[derive(Parser)]
#[command(
    name = "wavdump",
    version,
    about = "Generates a PCM .wav file by combining several harmonics into a complex signal",
    after_help = "Examples:
  wavdump test.wav 5 440 880                 5 seconds of 440 Hz + 880 Hz
  wavdump a.wav 10 1000 2000 3000            10 seconds, three harmonics
  wavdump --stream long.wav 3600 220 330     Stream an hour without buffering it
  wavdump --verify check.wav 1 440           Decode the result and report its format"
)]
struct Args {
    /// Output file name (created or overwritten)
    output: PathBuf,

    /// Signal duration in seconds (greater than 0)
    #[arg(value_name = "SECONDS")]
    duration: u32,

    /// Harmonic frequencies in Hz, each in the range [20, 22050]
    #[arg(required = true, value_name = "FREQ")]
    frequencies: Vec<u32>,

    /// Suppress progress and summary (show verification data only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Keep phase continuous across second boundaries
    #[arg(short, long)]
    continuous: bool,

    /// Write samples in fixed windows instead of buffering the whole signal
    #[arg(short, long)]
    stream: bool,

    /// Decode the written file and check its format
    #[arg(long)]
    verify: bool,
}

fn run(args: &Args) -> Result<(), AppError> {
    let request = SynthesisRequest::new(&args.output, args.duration, args.frequencies.clone())?;

    let mut seen = HashSet::new();
    for freq in request.frequencies() {
        if !seen.insert(freq) {
            print_warning(&format!("frequency {} Hz is listed more than once", freq));
        }
    }

    let format = AudioFormat::CD_MONO;
    let phase = if args.continuous {
        PhaseMode::Continuous
    } else {
        PhaseMode::PerSecond
    };
    let path = request.output_path();
    let display_name = get_display_name(path);

    let synth = Synthesizer::new(request.frequencies(), format.sample_rate, phase);
    let sample_count = synth.sample_count(request.duration_secs());
    // Rejects oversized requests before any allocation
    let header = WaveHeader::new(format, sample_count)?;

    let show_progress = !args.quiet;
    let on_progress = |progress| {
        if show_progress {
            print_progress(&display_name, progress);
        }
    };

    if args.stream {
        stream_wave_file(
            path,
            synth.samples(request.duration_secs()),
            format,
            on_progress,
        )?;
    } else {
        let buffer = synthesize(
            request.frequencies(),
            request.duration_secs(),
            format.sample_rate,
            phase,
        );
        write_wave_file(path, buffer, format, on_progress)?;
    }

    if !args.quiet {
        print_summary(
            &display_name,
            format,
            request.duration_secs(),
            request.frequencies(),
            header.data_size(),
        );
    }

    if args.verify {
        let report = verify_wave(path, format, sample_count).map_err(AppError::Verify)?;
        print_verify_report(&report);
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&args) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
