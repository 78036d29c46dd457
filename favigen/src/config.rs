//! `config`
//!
//! Where the generator reads from and writes to.

use std::path::{Path, PathBuf};

use crate::{DEFAULT_ICO_FILE_NAME, DEFAULT_ICO_SIZE, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_FILE_NAME};

/// Settings for a generation run.
/// The defaults match the layout the web front-end expects.
/// When deserialized, a missing `source_file` is looked for inside `output_dir`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(from = "PartialGeneratorConfig")]
pub struct GeneratorConfig {
    /// Directory all icons are written into. Created if missing.
    pub output_dir: PathBuf,
    /// The SVG every icon is rendered from.
    pub source_file: PathBuf,
    /// File name of the icon container, inside `output_dir`.
    pub ico_file_name: String,
    /// Edge length of the image stored in the icon container.
    pub ico_size: u32,
    /// Whether each PNG is decoded and saved again through the image library after it is written.
    pub reencode_png: bool,
}

impl GeneratorConfig {
    /// Creates a config that reads and writes inside `output_dir`, using the default file names.
    ///
    /// # Arguments
    /// * `output_dir`: The directory holding the source SVG and receiving the icons.
    #[must_use]
    pub fn in_dir(output_dir: impl Into<PathBuf>) -> Self {
        let output_dir = output_dir.into();
        Self {
            source_file: output_dir.join(DEFAULT_SOURCE_FILE_NAME),
            output_dir,
            ..Self::default()
        }
    }

    /// Gets the full path of the icon container.
    #[must_use]
    pub fn ico_path(&self) -> PathBuf {
        self.output_path(&self.ico_file_name)
    }

    /// Resolves a file name against the output directory.
    ///
    /// # Arguments
    /// * `file_name`: Name of the file inside the output directory.
    #[must_use]
    pub fn output_path(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

/// A config as written on disk, where any field may be left out.
#[derive(Default, serde::Deserialize)]
#[serde(default)]
struct PartialGeneratorConfig {
    /// See [`GeneratorConfig::output_dir`].
    output_dir: Option<PathBuf>,
    /// See [`GeneratorConfig::source_file`].
    source_file: Option<PathBuf>,
    /// See [`GeneratorConfig::ico_file_name`].
    ico_file_name: Option<String>,
    /// See [`GeneratorConfig::ico_size`].
    ico_size: Option<u32>,
    /// See [`GeneratorConfig::reencode_png`].
    reencode_png: Option<bool>,
}

impl From<PartialGeneratorConfig> for GeneratorConfig {
    fn from(partial: PartialGeneratorConfig) -> Self {
        let mut config = match partial.output_dir {
            Some(output_dir) => GeneratorConfig::in_dir(output_dir),
            None => GeneratorConfig::default(),
        };
        if let Some(source_file) = partial.source_file {
            config.source_file = source_file;
        }
        if let Some(ico_file_name) = partial.ico_file_name {
            config.ico_file_name = ico_file_name;
        }
        if let Some(ico_size) = partial.ico_size {
            config.ico_size = ico_size;
        }
        if let Some(reencode_png) = partial.reencode_png {
            config.reencode_png = reencode_png;
        }
        config
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let output_dir = PathBuf::from(DEFAULT_OUTPUT_DIR);
        Self {
            source_file: output_dir.join(DEFAULT_SOURCE_FILE_NAME),
            output_dir,
            ico_file_name: DEFAULT_ICO_FILE_NAME.to_string(),
            ico_size: DEFAULT_ICO_SIZE,
            reencode_png: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let config = GeneratorConfig::default();
        assert_eq!(
            config.source_file,
            Path::new("static/img/bulk-watermarker.svg"),
            "source path"
        );
        assert_eq!(config.ico_path(), Path::new("static/img/favicon.ico"), "ico path");
        assert_eq!(config.ico_size, 32, "ico size");
        assert!(config.reencode_png, "re-encoding should default on");
    }

    #[test]
    fn in_dir_moves_source_along() {
        let config = GeneratorConfig::in_dir("/tmp/icons");
        assert_eq!(
            config.source_file,
            Path::new("/tmp/icons/bulk-watermarker.svg"),
            "source path"
        );
        assert_eq!(
            config.output_path("favicon-32x32.png"),
            Path::new("/tmp/icons/favicon-32x32.png"),
            "output path"
        );
    }
}
