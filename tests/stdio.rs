//! Drives the compiled binary through its standard I/O
use std::{
    io::{BufRead, BufReader, Write},
    process::{Command, Stdio},
};

use iri_query::prelude::{ChapmanModel, ElectronDensityModel, ExternalModel, Query};

const BINARY: &str = env!("CARGO_BIN_EXE_iri-query");

const BOULDER: &str = "2020\n3\n15\n12\n0\n40.0\n-105.0\n300.0\n";

#[test]
fn answer_is_received_before_next_request() {
    let mut child = Command::new(BINARY)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let mut stdin = child.stdin.take().unwrap();
    let mut stdout = BufReader::new(child.stdout.take().unwrap());

    // first request: stdin is kept open, answer must show up anyway
    write!(stdin, "{}0\n", BOULDER).unwrap();
    stdin.flush().unwrap();

    let mut first = String::new();
    stdout.read_line(&mut first).unwrap();
    let first = first.trim().parse::<f64>().unwrap();
    assert!(first > 0.0);

    write!(stdin, "{}1\n", BOULDER).unwrap();
    stdin.flush().unwrap();

    let mut second = String::new();
    stdout.read_line(&mut second).unwrap();
    assert_eq!(second.trim().parse::<f64>().unwrap(), first);

    let status = child.wait().unwrap();
    assert!(status.success());

    let mut trailing = String::new();
    assert_eq!(stdout.read_line(&mut trailing).unwrap(), 0);
}

#[test]
fn malformed_input_is_fatal() {
    let output = Command::new(BINARY)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            child
                .stdin
                .take()
                .unwrap()
                .write_all(b"2020\n3\n15\n12\n0\nabc\n-105.0\n300.0\n1\n")?;
            child.wait_with_output()
        })
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn external_bridge() {
    // the binary itself is a valid worker
    let mut bridge = ExternalModel::spawn::<&str>(BINARY, &[]).unwrap();
    let mut chapman = ChapmanModel::default();

    for fields in [
        ["2020", "3", "15", "12", "0", "40.0", "-105.0", "300.0"],
        ["2013", "1", "1", "2", "30", "-33.9", "151.2", "650.5"],
    ] {
        let point = Query::from_fields(&fields)
            .unwrap()
            .space_time_point()
            .unwrap();

        let expected = chapman.electron_density(&point).unwrap();
        let bridged = bridge.electron_density(&point).unwrap();

        let err = (bridged.per_m3() - expected.per_m3()).abs() / expected.per_m3();
        assert!(err < 1.0E-9, "{:?} != {:?}", bridged, expected);
    }

    // worker is asked to terminate, and exits normally
    let status = bridge.shutdown().unwrap();
    assert!(status.success(), "worker exited with {}", status);
}

/// Runs the binary over given input, returns (success, stdout)
fn run(args: &[&str], input: &str) -> (bool, String) {
    let mut child = Command::new(BINARY)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    // may have exited already, on command line errors
    let _ = child.stdin.take().unwrap().write_all(input.as_bytes());

    let output = child.wait_with_output().unwrap();
    (
        output.status.success(),
        String::from_utf8(output.stdout).unwrap(),
    )
}

#[test]
fn large_termination_flag() {
    let (success, stdout) = run(&[], &format!("{}99999999999999999999\n", BOULDER));
    assert!(success);
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn density_units() {
    let input = format!("{}1\n", BOULDER);

    let (success, cm3) = run(&["-u", "cm3"], &input);
    assert!(success);

    let (success, m3) = run(&["-u", "m3"], &input);
    assert!(success);

    let cm3 = cm3.trim().parse::<f64>().unwrap();
    let m3 = m3.trim().parse::<f64>().unwrap();
    assert!((m3 - cm3 * 1.0E6).abs() / m3 < 1.0E-9);

    // unknown units are rejected, nothing gets evaluated
    let (success, stdout) = run(&["-u", "km3"], &input);
    assert!(!success);
    assert!(stdout.is_empty());
}
