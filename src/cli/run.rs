use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;

use super::{args::Arguments, exit_status::ExitStatus};
use crate::catalog::assets::relocate_assets;
use crate::catalog::render::render_document;
use crate::catalog::walker::{build_catalog, matched_files};

/// Main entry point for the lsdoc CLI.
///
/// Runs the full pipeline: read the template, list the matched source
/// files, walk their declarations into a component list, relocate image
/// assets into the build tree, dump the final list as JSON, and render and
/// write the catalog document.
///
/// # Returns
/// - `Ok(ExitStatus::Success)` when the document was written
/// - `Ok(ExitStatus::Failure)` when everything built but the final write
///   failed (the error is reported; relocated assets are left in place)
/// - `Err` when the run aborted earlier, e.g. on a missing template or a
///   failed asset copy (in that case no document is produced)
pub fn run(args: Arguments) -> Result<ExitStatus> {
    let config = args.into_config();

    // Read the template up front so a missing template fails before any
    // filesystem work happens.
    let template_src = fs::read_to_string(&config.template)
        .with_context(|| format!("Failed to read template {}", config.template.display()))?;

    let files = matched_files(&config.pattern, config.verbose)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        // Extraction is fully sequential and finishes before any copy is
        // scheduled.
        let mut components = build_catalog(&files, config.verbose);

        fs::create_dir_all(config.asset_dir()).with_context(|| {
            format!("Failed to create asset directory {}", config.asset_dir().display())
        })?;
        relocate_assets(&mut components, &config.build_dir).await?;

        // Diagnostic dump of the final list, post-relocation.
        println!("{}", serde_json::to_string(&components)?);

        let document = render_document(&template_src, &components)?;
        let output_file = config.output_file();
        match fs::write(&output_file, document) {
            Ok(()) => {
                println!(
                    "{} Catalog written to {}",
                    "\u{2713}".green(),
                    output_file.display()
                );
                Ok(ExitStatus::Success)
            }
            Err(err) => {
                eprintln!(
                    "{} Failed to write {}: {}",
                    "error:".bold().red(),
                    output_file.display(),
                    err
                );
                Ok(ExitStatus::Failure)
            }
        }
    })
}
