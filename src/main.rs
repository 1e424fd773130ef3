use dialoguer::{Confirm, Input, Select};

use signalgen_rs::modulation::Quantization;
use signalgen_rs::phy::{LineCodeKind, ScrambleKind};
use signalgen_rs::signal::BitString;
use signalgen_rs::utils::consts::DEFAULT_PCM_BITS;
use signalgen_rs::utils::logging::init_logging;
use signalgen_rs::utils::wav;
use signalgen_rs::{pipeline, ui};

fn main() {
    init_logging();
    ui::print_banner();

    loop {
        if let Err(err) = run_once() {
            // a failed run is non-fatal; the menu comes back around
            eprintln!("error: {}", err);
        }

        let again = Confirm::new()
            .with_prompt("Encode another signal?")
            .default(false)
            .interact()
            .unwrap_or(false);
        if !again {
            break;
        }
    }
}

fn run_once() -> Result<(), Box<dyn std::error::Error>> {
    let modes = ["Digital bit string", "Analog samples (PCM/DM)"];
    let mode = Select::new()
        .with_prompt("Input type")
        .items(&modes)
        .default(0)
        .interact()?;

    let bits = if mode == 0 {
        let text: String = Input::new()
            .with_prompt("Binary data")
            .interact_text()?;
        BitString::parse(text.trim())?
    } else {
        quantize_analog_input()?
    };

    let names: Vec<&str> = LineCodeKind::ALL.iter().map(|k| k.name()).collect();
    let pick = Select::new()
        .with_prompt("Line coding")
        .items(&names)
        .default(0)
        .interact()?;
    let line_code = LineCodeKind::ALL[pick];

    let mut scrambling = None;
    if line_code.supports_scrambling() {
        let wanted = Confirm::new()
            .with_prompt("Apply scrambling?")
            .default(false)
            .interact()?;
        if wanted {
            let names: Vec<&str> =
                ScrambleKind::ALL.iter().map(|s| s.name()).collect();
            let pick = Select::new()
                .with_prompt("Scrambling")
                .items(&names)
                .default(0)
                .interact()?;
            scrambling = Some(ScrambleKind::ALL[pick]);
        }
    }

    let report = pipeline::run(&bits, line_code, scrambling)?;
    ui::print_report(&report);
    Ok(())
}

fn quantize_analog_input() -> Result<BitString, Box<dyn std::error::Error>> {
    let sources = ["Type sample values", "Load mono WAV file"];
    let source = Select::new()
        .with_prompt("Analog source")
        .items(&sources)
        .default(0)
        .interact()?;

    let samples = if source == 1 {
        let path: String = Input::new()
            .with_prompt("WAV path")
            .interact_text()?;
        wav::read_wav_samples(path.trim())?
    } else {
        let line: String = Input::new()
            .with_prompt("Values (space or comma separated)")
            .interact_text()?;
        parse_samples(&line)?
    };

    let schemes = ["PCM", "Delta modulation"];
    let scheme = Select::new()
        .with_prompt("Quantization")
        .items(&schemes)
        .default(0)
        .interact()?;

    let quantization = if scheme == 0 {
        let bits: u32 = Input::new()
            .with_prompt("Bits per sample")
            .default(DEFAULT_PCM_BITS)
            .interact_text()?;
        Quantization::Pcm { bits }
    } else {
        Quantization::Delta
    };

    let bits = signalgen_rs::quantize(&samples, quantization)?;
    println!("{}: {}", quantization.name(), bits);
    Ok(bits)
}

fn parse_samples(line: &str) -> Result<Vec<f64>, Box<dyn std::error::Error>> {
    let mut samples = Vec::new();
    for token in line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        samples.push(token.parse::<f64>()?);
    }
    Ok(samples)
}
