use std::process::{Command, Output};

use geoframe_core::{EllipsoidConstants, GeodeticPosition, Vector3};
use geoframe_sez::output::format_component;
use geoframe_sez::{
    execute, sez_to_ecef, OutputFormat, RotationConvention, SezDisplacement, SezRequest,
    SezToEcef, TextbookRotation, TransformOptions, ValidationMode, USAGE,
};

const REFERENCE_ARGS: [&str; 6] = ["40.496", "-80.246", "0.37", "0", "1", "0.3"];
const REFERENCE_OUTPUT: [f64; 3] = [823.9574278775165, -4787.242302467653, 4120.456750462098];
const REFERENCE_STDOUT: &str = "823.9574278775165\n-4787.242302467653\n4120.456750462098\n";

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sez_to_ecef"))
        .args(args)
        .output()
        .expect("failed to launch sez_to_ecef")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

// --- Library pipeline ---

#[test]
fn reference_scenario_through_request_parsing() {
    let request = SezRequest::from_args(&REFERENCE_ARGS).unwrap();
    let ecef = execute(&request, &TransformOptions::default()).unwrap();
    assert_eq!(ecef.to_array(), REFERENCE_OUTPUT);
}

#[test]
fn reference_output_renders_like_published_values() {
    let text = OutputFormat::Plain
        .render(&Vector3::from_array(REFERENCE_OUTPUT))
        .unwrap();
    assert_eq!(
        text,
        "823.9574278775165\n-4787.242302467653\n4120.456750462098"
    );
}

#[test]
fn zero_displacement_is_the_observer() {
    let transform = SezToEcef::default();
    for (lat, lon, h) in [
        (40.496, -80.246, 0.37),
        (0.0, 0.0, 0.0),
        (-89.99, 179.99, 2.8),
        (51.5, -0.12, 0.011),
    ] {
        let obs = GeodeticPosition::new(lat, lon, h);
        assert_eq!(
            sez_to_ecef(&obs, &SezDisplacement::zero()),
            transform.observer_ecef(&obs)
        );
    }
}

#[test]
fn origin_maps_to_equatorial_radius() {
    let r = EllipsoidConstants::REFERENCE.to_ecef(&GeodeticPosition::new(0.0, 0.0, 0.0));
    assert_eq!(r, Vector3::new(6378.1363, 0.0, 0.0));
}

#[test]
fn pole_has_no_equatorial_component() {
    for lon in [0.0, 90.0, -135.0, 400.0] {
        let r = EllipsoidConstants::REFERENCE.to_ecef(&GeodeticPosition::new(90.0, lon, 0.0));
        assert!(r.x.abs() < 1e-9 && r.y.abs() < 1e-9, "{} at lon {}", r, lon);
    }
}

#[test]
fn transform_is_affine_in_displacement() {
    let obs = GeodeticPosition::new(40.496, -80.246, 0.37);
    let transform = SezToEcef::default();
    let origin = transform.observer_ecef(&obs);
    let a = SezDisplacement::new(0.0, 1.0, 0.3);
    let b = SezDisplacement::new(-2.0, 0.5, 10.0);

    let lhs = transform.transform(&obs, &(a + b));
    let rhs = transform.transform(&obs, &a) + transform.transform(&obs, &b) - origin;
    assert!((lhs - rhs).magnitude() < 1e-9);
}

#[test]
fn swapped_rotation_is_textbook_rotation() {
    let obs = GeodeticPosition::new(40.496, -80.246, 0.37);
    let sez = SezDisplacement::new(0.0, 1.0, 0.3);
    let reference = SezToEcef::default().transform(&obs, &sez);
    let textbook = SezToEcef::new(EllipsoidConstants::REFERENCE, TextbookRotation)
        .transform(&obs, &sez);
    assert!((reference - textbook).magnitude() < 1e-12);
}

#[test]
fn unchecked_mode_propagates_nan() {
    let request = SezRequest::from_args(&["nan", "0", "0", "0", "0", "0"]).unwrap();
    let options = TransformOptions {
        validation: ValidationMode::Unchecked,
        rotation: RotationConvention::Reference,
        ..TransformOptions::default()
    };
    let ecef = execute(&request, &options).unwrap();
    assert_eq!(format_component(ecef.x), "nan");
    assert!(execute(&request, &TransformOptions::default()).is_err());
}

// --- Binary contract ---

#[test]
fn binary_reference_scenario_prints_three_lines() {
    let output = run(&REFERENCE_ARGS);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), REFERENCE_STDOUT);
}

#[test]
fn binary_wrong_argument_count_prints_usage_and_succeeds() {
    for args in [
        &[][..],
        &REFERENCE_ARGS[..5],
        &["40.496", "-80.246", "0.37", "0", "1", "0.3", "9"][..],
        &["1", "2", "3", "4", "5", "6", "-y"][..],
        &["1", "2", "3", "4", "5", "6", "--format", "json"][..],
        &["-x", "1"][..],
    ] {
        let output = run(args);
        assert!(output.status.success(), "args {:?}", args);
        assert_eq!(stdout_lines(&output), vec![USAGE.to_string()], "args {:?}", args);
    }
}

#[test]
fn binary_invalid_number_fails_without_output() {
    let output = run(&["40.496", "west", "0.37", "0", "1", "0.3"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid numeric argument o_lon_deg: 'west'"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn binary_rejects_latitude_out_of_range_by_default() {
    let output = run(&["95", "0", "0", "0", "0", "0"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn binary_no_validate_transforms_anything() {
    let output = run(&["--no-validate", "95", "0", "0", "0", "0", "0"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output).len(), 3);

    let output = run(&["--no-validate", "nan", "0", "0", "0", "0", "0"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["nan", "nan", "nan"]);

    let output = run(&["--no-validate", "0", "0", "0", "-inf", "0", "0"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout_lines(&output), vec!["nan", "nan", "inf"]);
}

#[test]
fn binary_negative_infinity_is_a_value_not_a_flag() {
    let output = run(&["0", "0", "0", "-inf", "0", "0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("s_km must be finite"), "stderr: {}", stderr);
}

#[test]
fn binary_json_refuses_non_finite_result() {
    let output = run(&["--no-validate", "--format", "json", "nan", "0", "0", "0", "0", "0"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot encode x_km"), "stderr: {}", stderr);
}

#[test]
fn binary_textbook_rotation_matches_reference() {
    let mut args = vec!["--rotation", "textbook"];
    args.extend(REFERENCE_ARGS);
    let output = run(&args);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 3);
    for (line, expected) in lines.iter().zip(REFERENCE_OUTPUT) {
        let value: f64 = line.parse().unwrap();
        assert!((value - expected).abs() < 1e-9, "{} vs {}", value, expected);
    }
}

#[test]
fn binary_json_format() {
    let mut args = vec!["--format", "json"];
    args.extend(REFERENCE_ARGS);
    let output = run(&args);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    let parsed: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(parsed["x_km"].as_f64(), Some(REFERENCE_OUTPUT[0]));
    assert_eq!(parsed["y_km"].as_f64(), Some(REFERENCE_OUTPUT[1]));
    assert_eq!(parsed["z_km"].as_f64(), Some(REFERENCE_OUTPUT[2]));
}

#[test]
fn binary_logging_stays_off_stdout() {
    let mut args = vec!["-vv"];
    args.extend(REFERENCE_ARGS);
    let output = run(&args);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), REFERENCE_STDOUT);
    assert!(!output.stderr.is_empty());
}
