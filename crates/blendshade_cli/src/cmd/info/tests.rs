use crate::cmd::test_support::{fixture_arg, run_blendshade_json, run_blendshade_stdout};

#[test]
fn info_json_lists_materials_and_groups() {
	let fixture = fixture_arg("wood.json");
	let json = run_blendshade_json(&["info", &fixture, "--json"]);

	assert_eq!(json["compression"], "none");
	let names: Vec<&str> = json["materials"]
		.as_array()
		.expect("materials array")
		.iter()
		.filter_map(|item| item["name"].as_str())
		.collect();
	assert_eq!(names, ["Wood", "Plain", "Broken"]);
	assert_eq!(json["materials"][0]["nodes"], 7);
	assert_eq!(json["materials"][1]["use_nodes"], false);
	assert_eq!(json["node_groups"][0]["name"], "Roughen");
}

#[test]
fn info_text_reports_counts() {
	let fixture = fixture_arg("wood.json");
	let stdout = run_blendshade_stdout(&["info", &fixture]);

	assert!(stdout.contains("materials: 3"));
	assert!(stdout.contains("  Wood: use_nodes=true nodes=7 links=5 muted=0"));
	assert!(stdout.contains("  Roughen: nodes=3 links=2"));
}
