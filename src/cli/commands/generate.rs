use anyhow::Result;
use tracing::info;

use super::project::Project;
use crate::cli::args::GenerateCommand;
use crate::cli::report::print_generated;
use crate::core::generate_config;
use crate::json_writer::write_json;

pub fn generate(cmd: GenerateCommand) -> Result<()> {
    let project = Project::load(&cmd.common)?;
    let output = project.output_path(cmd.output.as_deref());

    info!(module = %project.module_path().display(), "generating cms config");
    let definitions = project.extract()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let config = runtime.block_on(generate_config(
        &definitions,
        &project.root,
        project.schema_dir(),
    ))?;

    write_json(&output, &config)?;
    print_generated(&config, definitions.len(), &output);

    Ok(())
}
