use blendshade::shade::{NodeKind, Result, TokenTable, token_tables};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// Only tables of this node idname, or `material` for material settings.
	#[arg(long)]
	pub kind: Option<String>,
	#[arg(long)]
	pub json: bool,
}

/// List the enum code to token tables.
pub fn run(args: Args) -> Result<()> {
	let Args { kind, json } = args;

	let tables: Vec<TokenTable> = token_tables().filter(|table| matches_kind(table, kind.as_deref())).collect();

	if json {
		let payload: Vec<TableJson> = tables
			.iter()
			.map(|table| TableJson {
				kind: owner_label(table.kind).to_owned(),
				field: table.field,
				entries: table.entries.iter().map(|(code, token)| EntryJson { code: *code, token }).collect(),
			})
			.collect();
		emit_json(&payload);
		return Ok(());
	}

	for table in &tables {
		println!("{} {}:", owner_label(table.kind), table.field);
		for (code, token) in table.entries {
			println!("  {code}: {token}");
		}
	}

	Ok(())
}

fn owner_label(kind: Option<NodeKind>) -> &'static str {
	kind.map_or("material", NodeKind::idname)
}

fn matches_kind(table: &TokenTable, filter: Option<&str>) -> bool {
	filter.is_none_or(|filter| owner_label(table.kind) == filter)
}

#[derive(serde::Serialize)]
struct TableJson {
	kind: String,
	field: &'static str,
	entries: Vec<EntryJson>,
}

#[derive(serde::Serialize)]
struct EntryJson {
	code: i32,
	token: &'static str,
}
