use crate::shade::{
	ExportConfig, GeneratedImage, Image, ImageSource, ImageUser, PrimPath, ShadeError, ShaderUnit, TexturePath, Value, ValueType, resolve_texture,
};

fn image(source: ImageSource, filepath: &str) -> Image {
	Image {
		name: "tex".to_owned(),
		filepath: filepath.to_owned(),
		source,
		..Image::default()
	}
}

fn unit() -> ShaderUnit {
	ShaderUnit::new(PrimPath::parse("/materials/M/cycles/Tex").expect("valid path"), "cycles_image_texture")
}

#[test]
fn missing_image_names_the_node() {
	let err = resolve_texture("Image Texture", None, &ImageUser::default(), &ExportConfig::default()).expect_err("no image");
	assert!(matches!(err, ShadeError::MissingResource { node } if node == "Image Texture"));
}

#[test]
fn still_files_author_one_normalized_path() {
	let resolved = resolve_texture("Tex", Some(&image(ImageSource::File, "//textures\\wood.png")), &ImageUser::default(), &ExportConfig::default())
		.expect("resolves");
	assert_eq!(resolved.path, Some(TexturePath::Static("//textures/wood.png".to_owned())));
	assert!(resolved.sequence.is_none());

	let mut unit = unit();
	resolved.write(&mut unit, "filename");
	assert_eq!(unit.literal("image_source"), Some(&Value::Int(1)));
	assert_eq!(unit.literal("filename"), Some(&Value::Asset("//textures/wood.png".to_owned())));
}

#[test]
fn tiled_images_use_the_udim_marker() {
	let resolved = resolve_texture("Tex", Some(&image(ImageSource::Tiled, "/t/albedo_1001.png")), &ImageUser::default(), &ExportConfig::default())
		.expect("resolves");
	assert_eq!(resolved.path, Some(TexturePath::Static("/t/albedo_<UDIM>.png".to_owned())));
}

#[test]
fn animated_sequences_sample_every_output_frame() {
	let config = ExportConfig {
		export_animated_textures: true,
		anim_tex_start: 1.0,
		anim_tex_end: 3.0,
		..ExportConfig::default()
	};
	let user = ImageUser {
		frames: 10,
		start: 1,
		offset: 4,
		cyclic: false,
	};

	let resolved = resolve_texture("Tex", Some(&image(ImageSource::Sequence, "/seq/frame.0001.png")), &user, &config).expect("resolves");
	let Some(TexturePath::Sampled(samples)) = &resolved.path else {
		panic!("expected sampled path, got {:?}", resolved.path);
	};
	let times: Vec<f64> = samples.iter().map(|(time, _)| *time).collect();
	assert_eq!(times, [1.0, 2.0, 3.0]);
	assert_eq!(samples[0].1, "/seq/frame.0005.png");
	assert_eq!(samples[2].1, "/seq/frame.0007.png");

	let mut unit = unit();
	resolved.write(&mut unit, "filename");
	assert_eq!(unit.input("filename").map(|input| input.ty), Some(ValueType::Asset));
	assert_eq!(unit.literal("num_frames"), Some(&Value::Int(10)));
	assert_eq!(unit.literal("frame_offset"), Some(&Value::Int(4)));
	assert_eq!(unit.literal("cyclic"), Some(&Value::Bool(false)));
	assert!(unit.input("deinterlace").is_none());
}

#[test]
fn still_export_of_a_sequence_uses_the_current_frame() {
	let config = ExportConfig {
		current_frame: 12.0,
		..ExportConfig::default()
	};
	let user = ImageUser {
		frames: 5,
		start: 1,
		offset: 0,
		cyclic: true,
	};

	let resolved = resolve_texture("Tex", Some(&image(ImageSource::Sequence, "/seq/f_01.exr")), &user, &config).expect("resolves");
	assert_eq!(resolved.path, Some(TexturePath::Static("/seq/f_02.exr".to_owned())));
}

#[test]
fn movies_keep_their_path_and_report_deinterlacing() {
	let config = ExportConfig {
		export_animated_textures: true,
		anim_tex_start: 1.0,
		anim_tex_end: 5.0,
		..ExportConfig::default()
	};
	let mut movie = image(ImageSource::Movie, "/clips/take1.mov");
	movie.deinterlace = true;

	let resolved = resolve_texture("Tex", Some(&movie), &ImageUser::default(), &config).expect("resolves");
	assert_eq!(resolved.path, Some(TexturePath::Static("/clips/take1.mov".to_owned())));
	assert_eq!(resolved.sequence.and_then(|sequence| sequence.deinterlace), Some(true));
}

#[test]
fn empty_paths_author_an_empty_asset_without_sequence_fields() {
	let resolved = resolve_texture("Tex", Some(&image(ImageSource::Sequence, "")), &ImageUser::default(), &ExportConfig::default()).expect("resolves");
	assert_eq!(resolved.path, Some(TexturePath::Static(String::new())));
	assert!(resolved.sequence.is_none());
}

#[test]
fn generated_images_author_generator_values() {
	let mut generated = image(ImageSource::Generated, "");
	generated.generated = GeneratedImage {
		width: 512,
		height: 256,
		gen_type: 1,
		gen_flag: 0,
		color: [1.0, 0.0, 0.0, 1.0],
	};

	let resolved = resolve_texture("Tex", Some(&generated), &ImageUser::default(), &ExportConfig::default()).expect("resolves");
	let mut unit = unit();
	resolved.write(&mut unit, "filename");
	assert_eq!(unit.literal("image_source"), Some(&Value::Int(4)));
	assert_eq!(unit.literal("gen_tex_x"), Some(&Value::Int(512)));
	assert_eq!(unit.literal("gen_tex_color"), Some(&Value::Float4([1.0, 0.0, 0.0, 1.0])));
	assert!(unit.input("filename").is_none());
}

#[test]
fn viewer_images_author_only_the_source() {
	let resolved = resolve_texture("Tex", Some(&image(ImageSource::Viewer, "")), &ImageUser::default(), &ExportConfig::default()).expect("resolves");
	let mut unit = unit();
	resolved.write(&mut unit, "filename");
	assert_eq!(unit.inputs.len(), 1);
	assert_eq!(unit.literal("image_source"), Some(&Value::Int(5)));
}

#[test]
fn fractional_ranges_sample_whole_frames() {
	let config = ExportConfig {
		export_animated_textures: true,
		anim_tex_start: 0.5,
		anim_tex_end: 3.0,
		..ExportConfig::default()
	};
	let user = ImageUser {
		frames: 10,
		start: 1,
		offset: 0,
		cyclic: false,
	};

	let resolved = resolve_texture("Tex", Some(&image(ImageSource::Sequence, "/seq/frame.0001.png")), &user, &config).expect("resolves");
	let Some(TexturePath::Sampled(samples)) = &resolved.path else {
		panic!("expected sampled path, got {:?}", resolved.path);
	};
	let times: Vec<f64> = samples.iter().map(|(time, _)| *time).collect();
	assert_eq!(times, [1.0, 2.0, 3.0]);
	assert_eq!(samples[0].1, "/seq/frame.0001.png");

	let config = ExportConfig { anim_tex_end: 1e12, ..config };
	let err = resolve_texture("Tex", Some(&image(ImageSource::Sequence, "/seq/frame.0001.png")), &user, &config).expect_err("unbounded range");
	assert!(matches!(err, ShadeError::InvalidFrameRange { .. }));
}
