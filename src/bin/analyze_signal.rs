use clap::Parser;

use signalgen_rs::modulation::Quantization;
use signalgen_rs::phy::{LineCodeKind, ScrambleKind};
use signalgen_rs::signal::BitString;
use signalgen_rs::utils::consts::DEFAULT_PCM_BITS;
use signalgen_rs::utils::logging::init_logging;
use signalgen_rs::utils::{dump, wav};
use signalgen_rs::{pipeline, ui};

/// Run the line-coding pipeline without the interactive menu.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Binary input data, e.g. 10110010
    #[arg(short, long, conflicts_with_all = ["samples", "wav"])]
    bits: Option<String>,

    /// Comma-separated analog samples to quantize
    #[arg(long)]
    samples: Option<String>,

    /// Mono WAV file to use as the analog source
    #[arg(long, conflicts_with = "samples")]
    wav: Option<String>,

    /// Quantize with delta modulation instead of PCM
    #[arg(long)]
    delta: bool,

    /// PCM bits per sample
    #[arg(long, default_value_t = DEFAULT_PCM_BITS)]
    pcm_bits: u32,

    /// Line coding scheme (nrz-l, nrz-i, manchester, diff-manchester, ami)
    #[arg(short, long, default_value = "nrz-l")]
    encoding: LineCodeKind,

    /// Zero-suppression scrambling (b8zs, hdb3); AMI only
    #[arg(short, long)]
    scramble: Option<ScrambleKind>,

    /// Write the report as pretty JSON to this path
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let report = match build_report(&cli) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    };

    ui::print_report(&report);

    if let Some(path) = &cli.output {
        if let Err(err) = dump::write_report_json(&report, path) {
            eprintln!("error: failed to write {}: {}", path, err);
            std::process::exit(1);
        }
    }
}

fn build_report(
    cli: &Cli,
) -> Result<pipeline::SignalReport, Box<dyn std::error::Error>> {
    let bits = if let Some(text) = &cli.bits {
        BitString::parse(text)?
    } else {
        let samples = if let Some(path) = &cli.wav {
            wav::read_wav_samples(path)?
        } else if let Some(list) = &cli.samples {
            parse_samples(list)?
        } else {
            return Err("one of --bits, --samples or --wav is required".into());
        };
        let scheme = if cli.delta {
            Quantization::Delta
        } else {
            Quantization::Pcm { bits: cli.pcm_bits }
        };
        signalgen_rs::quantize(&samples, scheme)?
    };

    Ok(pipeline::run(&bits, cli.encoding, cli.scramble)?)
}

fn parse_samples(list: &str) -> Result<Vec<f64>, Box<dyn std::error::Error>> {
    let mut samples = Vec::new();
    for token in list.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        samples.push(token.parse::<f64>()?);
    }
    Ok(samples)
}
