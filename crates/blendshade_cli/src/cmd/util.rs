use blendshade::shade::{Material, Result, ShaderDocument};

/// Print a payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to serialize json output: {err}"),
	}
}

/// Pick the named materials, or every material when no names are given.
pub(crate) fn select_materials<'a>(document: &'a ShaderDocument, names: &[String]) -> Result<Vec<&'a Material>> {
	if names.is_empty() {
		return Ok(document.materials.iter().collect());
	}
	names.iter().map(|name| document.material(name)).collect()
}

/// Quote text for DOT labels and identifiers.
pub(crate) fn dot_escape(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	for ch in input.chars() {
		match ch {
			'"' => out.push_str("\\\""),
			'\\' => out.push_str("\\\\"),
			'\n' => out.push_str("\\n"),
			c => out.push(c),
		}
	}
	out
}
