use std::path::PathBuf;

/// File name of the rendered catalog document inside the build directory.
pub const OUTPUT_FILE_NAME: &str = "index.html";

/// Subdirectory of the build directory that receives relocated image assets.
pub const ASSET_SUBDIR: &str = "generated/img";

/// Resolved configuration for a catalog run.
///
/// The defaults reproduce the fixed setup the tool originally shipped with:
/// component sources under `./src/**/*.tsx`, output under `build/`, and a
/// `template.html` read from the working directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Glob pattern selecting candidate component source files.
    pub pattern: String,
    /// Root of the build output tree.
    pub build_dir: PathBuf,
    /// Path of the template the document is rendered from.
    pub template: PathBuf,
    /// Emit per-file warnings for skipped sources.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pattern: "./src/**/*.tsx".to_string(),
            build_dir: PathBuf::from("build"),
            template: PathBuf::from("template.html"),
            verbose: false,
        }
    }
}

impl Config {
    /// Path of the rendered document.
    pub fn output_file(&self) -> PathBuf {
        self.build_dir.join(OUTPUT_FILE_NAME)
    }

    /// Directory relocated image assets are copied into.
    pub fn asset_dir(&self) -> PathBuf {
        self.build_dir.join(ASSET_SUBDIR)
    }
}
