use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use blendshade_testkit::{fixture_path as shared_fixture_path, target_dir as workspace_target_dir};

static BLENDSHADE_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_path(name: &str) -> PathBuf {
	shared_fixture_path(name)
}

pub(crate) fn fixture_arg(name: &str) -> String {
	fixture_path(name).to_string_lossy().into_owned()
}

pub(crate) fn run_blendshade(args: &[&str]) -> Output {
	Command::new(blendshade_bin()).args(args).output().expect("blendshade command executes")
}

pub(crate) fn run_blendshade_stdout(args: &[&str]) -> String {
	let output = run_blendshade(args);
	assert!(
		output.status.success(),
		"blendshade command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	String::from_utf8(output.stdout).expect("stdout should be utf-8")
}

pub(crate) fn run_blendshade_json(args: &[&str]) -> serde_json::Value {
	serde_json::from_str(&run_blendshade_stdout(args)).expect("stdout should be valid json")
}

fn blendshade_bin() -> &'static PathBuf {
	BLENDSHADE_BIN.get_or_init(resolve_blendshade_bin)
}

fn resolve_blendshade_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_blendshade") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "blendshade.exe" } else { "blendshade" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "blendshade"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build blendshade binary at {}", bin.display());

	bin
}
