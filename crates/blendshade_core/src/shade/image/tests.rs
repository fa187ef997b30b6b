use crate::shade::{ImageSource, ImageUser, sequence_path, split_frame_digits, udim_path};

#[test]
fn frame_mapping_shifts_by_start_and_offset() {
	let user = ImageUser {
		frames: 10,
		start: 5,
		offset: 100,
		cyclic: false,
	};
	assert_eq!(user.frame_for(5), 101);
	assert_eq!(user.frame_for(7), 103);
}

#[test]
fn frame_mapping_clamps_outside_range() {
	let user = ImageUser {
		frames: 3,
		start: 1,
		offset: 0,
		cyclic: false,
	};
	assert_eq!(user.frame_for(-4), 0);
	assert_eq!(user.frame_for(50), 3);
}

#[test]
fn cyclic_frame_mapping_wraps_into_one_based_range() {
	let user = ImageUser {
		frames: 4,
		start: 1,
		offset: 0,
		cyclic: true,
	};
	let frames: Vec<i32> = (1..=9).map(|frame| user.frame_for(frame)).collect();
	assert_eq!(frames, [1, 2, 3, 4, 1, 2, 3, 4, 1]);
	assert_eq!(user.frame_for(0), 4);
	assert_eq!(user.frame_for(-1), 3);
}

#[test]
fn empty_sequences_map_to_frame_zero() {
	let user = ImageUser {
		frames: 0,
		start: 1,
		offset: 7,
		cyclic: true,
	};
	assert_eq!(user.frame_for(12), 0);
}

#[test]
fn sequence_paths_keep_padding_width() {
	assert_eq!(sequence_path("//tex/fire_0001.png", 12), "//tex/fire_0012.png");
	assert_eq!(sequence_path("//tex/fire_0001.png", 12345), "//tex/fire_12345.png");
	assert_eq!(sequence_path("//tex/v2/fire.png", 3), "//tex/v2/fire3.png");
	assert_eq!(sequence_path("shot10_frame.0001.exr", 2), "shot10_frame.0002.exr");
}

#[test]
fn digit_split_ignores_directories() {
	assert_eq!(split_frame_digits("/a1/b2/c.png"), ("/a1/b2/c", "", ".png"));
	assert_eq!(split_frame_digits("/a/tile_1001"), ("/a/tile_", "1001", ""));
	assert_eq!(split_frame_digits("/a/tile.1001"), ("/a/tile", "", ".1001"));
}

#[test]
fn udim_marker_replaces_tile_number() {
	assert_eq!(udim_path("//tex/albedo.1001.png"), "//tex/albedo.<UDIM>.png");
}

#[test]
fn source_codes_match_host_values() {
	let codes: Vec<i32> = [
		ImageSource::File,
		ImageSource::Sequence,
		ImageSource::Movie,
		ImageSource::Generated,
		ImageSource::Viewer,
		ImageSource::Tiled,
	]
	.iter()
	.map(|source| source.code())
	.collect();
	assert_eq!(codes, [1, 2, 3, 4, 5, 6]);
}

#[test]
fn extreme_starts_and_offsets_saturate() {
	let user = ImageUser {
		frames: 10,
		start: i32::MIN,
		offset: i32::MAX,
		cyclic: false,
	};
	assert_eq!(user.frame_for(i32::MAX), i32::MAX);

	let user = ImageUser {
		frames: 10,
		start: i32::MAX,
		offset: i32::MIN,
		cyclic: true,
	};
	assert_eq!(user.frame_for(i32::MIN), i32::MIN + 6);
}
