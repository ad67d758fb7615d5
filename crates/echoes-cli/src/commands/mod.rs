pub mod check;
pub mod endings;
pub mod play;
pub mod stats;

use echoes_script::Script;

/// Build the shipped script, mapping content errors to the CLI boundary.
fn build_script() -> Result<Script, String> {
    echoes_content::script().map_err(|e| format!("script content: {e}"))
}
