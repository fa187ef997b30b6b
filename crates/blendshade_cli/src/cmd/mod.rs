/// Material export command.
pub mod export;
/// Flattened graph inspection command.
pub mod flatten;
/// Document summary command.
pub mod info;
/// Enum token table listing command.
pub mod tokens;

mod util;

#[cfg(test)]
mod test_support;
