#![allow(missing_docs)]

use std::process::{Command, Output};

use blendshade_testkit::{fixture_path, workspace_root};

#[test]
fn missing_documents_report_io_errors() {
	let output = run(&["info", &fixture_path("absent.json").display().to_string()]);

	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).starts_with("error: io: "));
}

#[test]
fn non_documents_report_their_magic() {
	let manifest = workspace_root().join("Cargo.toml");
	let output = run(&["info", &manifest.display().to_string()]);

	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).contains("error: unsupported compression or not a shader document"));
}

#[test]
fn relative_material_roots_are_rejected_before_reading() {
	let output = run(&["export", &fixture_path("wood.json").display().to_string(), "--material-root", "looks"]);

	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).contains("error: invalid prim path: looks"));
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_blendshade")).args(args).output().expect("command executes")
}
