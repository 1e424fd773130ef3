use signalgen_rs::modulation::Quantization;
use signalgen_rs::phy::{LineCodeKind, ScrambleKind};
use signalgen_rs::signal::BitString;
use signalgen_rs::pipeline;

#[test]
fn analog_sweep_to_scrambled_ami_report() {
    // short triangle sweep digitized at 2 bits per sample
    let samples = [0.0, 1.0, 2.0, 3.0, 2.0, 1.0, 0.0, 0.0];

    let report = pipeline::run_analog(
        &samples,
        Quantization::Pcm { bits: 2 },
        LineCodeKind::Ami,
        Some(ScrambleKind::B8zs),
    )
    .expect("pipeline should accept the offline sweep");

    assert_eq!(report.title, "AMI with B8ZS");
    assert_eq!(report.bits, "0001101110010000");

    // no eight-zero run exists, so B8ZS leaves the AMI signal untouched
    assert_eq!(
        report.levels,
        vec![0, 0, 0, 1, -1, 0, 1, -1, 1, 0, 0, -1, 0, 0, 0, 0]
    );
    assert_eq!(report.zero_run.map(|r| (r.len, r.start)), Some((4, 12)));

    assert_eq!(report.palindrome.text, "11011");
    assert_eq!(report.palindrome.start, 3);
    assert_eq!(report.palindrome.len, 5);
}

#[test]
fn hdb3_substitutions_with_both_parities() {
    let bits = BitString::parse("1000010000001").unwrap();

    let report = pipeline::run(
        &bits,
        LineCodeKind::Ami,
        Some(ScrambleKind::Hdb3),
    )
    .expect("pipeline should scramble the AMI signal");

    assert_eq!(report.title, "AMI with HDB3");
    // first run hits odd mark parity (000V), second hits even (B00V)
    assert_eq!(
        report.levels,
        vec![1, 0, 0, 0, 1, -1, 1, 0, 0, -1, 0, 0, 1]
    );
    assert_eq!(report.zero_run.map(|r| (r.len, r.start)), Some((3, 1)));
}

#[test]
fn repeated_runs_are_bit_identical() {
    let bits = BitString::parse("110000000010110000").unwrap();

    let first = pipeline::run(
        &bits,
        LineCodeKind::Ami,
        Some(ScrambleKind::B8zs),
    )
    .expect("first run");
    let second = pipeline::run(
        &bits,
        LineCodeKind::Ami,
        Some(ScrambleKind::B8zs),
    )
    .expect("second run");

    assert_eq!(first.levels, second.levels);
    assert_eq!(first.bits, second.bits);
    assert_eq!(first.title, second.title);
}

#[test]
fn every_line_code_reports_expected_length() {
    let bits = BitString::parse("1011001").unwrap();

    for kind in LineCodeKind::ALL {
        let report = pipeline::run(&bits, kind, None).expect("encode");
        assert_eq!(report.levels.len(), bits.len() * kind.symbols_per_bit());
        assert_eq!(report.zero_run, None, "{} ran no scrambler", kind);
    }
}
