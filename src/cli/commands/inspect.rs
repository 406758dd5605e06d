use anyhow::{Context, Result};

use super::project::Project;
use crate::cli::args::InspectCommand;

pub fn inspect(cmd: InspectCommand) -> Result<()> {
    let project = Project::load(&cmd.common)?;
    let definitions = project.extract()?;

    let json = serde_json::to_string_pretty(&definitions)
        .context("Failed to serialize collection definitions")?;
    println!("{}", json);

    Ok(())
}
