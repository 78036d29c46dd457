//! `generate`
//!
//! Drives a full run: every PNG in the size tables, then the icon container.

use std::path::{Path, PathBuf};

use image::ImageFormat;
use resvg::usvg;

use crate::{
    raster::render_png,
    sizes::{IconSet, IconSize},
    svg::load_svg,
    GenerateIconsError, GeneratorConfig,
};

/// The files written by a successful run, in the order they were written.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Every PNG icon.
    pub pngs: Vec<PathBuf>,
    /// The icon container.
    pub ico: PathBuf,
}

impl GenerationReport {
    /// Iterates over every written file, the icon container last.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.pngs
            .iter()
            .map(PathBuf::as_path)
            .chain(std::iter::once(self.ico.as_path()))
    }
}

/// Renders the icon set described by a [`GeneratorConfig`].
#[derive(Debug, Clone, Default)]
pub struct IconGenerator {
    /// Where to read from and write to.
    config: GeneratorConfig,
}

impl IconGenerator {
    /// Creates a generator.
    ///
    /// # Arguments
    /// * `config`: Where to read from and write to.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Gets the generator's config.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Lists every file a run writes, in the order it writes them.
    ///
    /// # Returns
    /// The PNG paths from each size table in turn, followed by the icon container.
    #[must_use]
    pub fn planned_outputs(&self) -> Vec<PathBuf> {
        IconSet::ALL
            .iter()
            .flat_map(|set| set.sizes())
            .map(|entry| self.config.output_path(entry.file_name))
            .chain(std::iter::once(self.config.ico_path()))
            .collect()
    }

    /// Renders one square PNG straight from an SVG file.
    ///
    /// # Arguments
    /// * `source`: The SVG to render.
    /// * `size`: Width and height of the icon, in pixels.
    /// * `file_name`: Name of the PNG inside the output directory. Overwritten if it exists.
    ///
    /// # Returns
    /// The path of the written PNG.
    ///
    /// # Errors
    /// Any failure reading, parsing, rendering or writing. Nothing is retried.
    pub fn convert_one_size(
        &self,
        source: &Path,
        size: u32,
        file_name: &str,
    ) -> Result<PathBuf, GenerateIconsError> {
        let tree = load_svg(source)?;
        self.write_png(&tree, size, file_name)
    }

    /// Runs the whole generation.
    ///
    /// The output directory is created first. The source is then parsed once, so a missing or
    /// malformed source fails before any icon is written. Files written before a later failure
    /// are left in place.
    ///
    /// # Returns
    /// The paths of everything written.
    ///
    /// # Errors
    /// The first error hit; the remaining icons are not attempted.
    pub fn run(&self) -> Result<GenerationReport, GenerateIconsError> {
        self.ensure_output_dir()?;

        let tree = load_svg(&self.config.source_file)?;
        log::info!(
            "Loaded {} ({}x{})",
            self.config.source_file.display(),
            tree.size().width(),
            tree.size().height()
        );

        let mut report = GenerationReport::default();
        for set in IconSet::ALL {
            log::info!("Generating {set}");
            for IconSize { size, file_name } in set.sizes() {
                report.pngs.push(self.write_png(&tree, *size, file_name)?);
            }
        }

        report.ico = self.write_ico(&tree)?;
        log::info!("Wrote {} files", report.pngs.len() + 1);

        Ok(report)
    }

    /// Creates the output directory and any missing parents.
    ///
    /// # Errors
    /// [`GenerateIconsError::CreateOutputDir`] if the directory cannot be created.
    fn ensure_output_dir(&self) -> Result<(), GenerateIconsError> {
        let dir = &self.config.output_dir;
        std::fs::create_dir_all(dir).map_err(|source| GenerateIconsError::CreateOutputDir {
            path: dir.clone(),
            source,
        })
    }

    /// Renders the tree at one size and saves it as a PNG in the output directory.
    ///
    /// # Arguments
    /// * `tree`: The parsed source SVG.
    /// * `size`: Width and height of the icon, in pixels.
    /// * `file_name`: Name of the PNG inside the output directory.
    ///
    /// # Returns
    /// The path of the written PNG.
    ///
    /// # Errors
    /// Any rendering error, [`GenerateIconsError::WriteOutput`] if the file cannot be written, or
    /// [`GenerateIconsError::Image`] if re-encoding fails.
    fn write_png(
        &self,
        tree: &usvg::Tree,
        size: u32,
        file_name: &str,
    ) -> Result<PathBuf, GenerateIconsError> {
        let png = render_png(tree, size)?;
        let output_path = self.config.output_path(file_name);
        std::fs::write(&output_path, &png).map_err(|source| GenerateIconsError::WriteOutput {
            path: output_path.clone(),
            source,
        })?;

        if self.config.reencode_png {
            image::open(&output_path)?.save_with_format(&output_path, ImageFormat::Png)?;
        }

        log::info!("Saved {size}x{size} icon to {}", output_path.display());
        println!("Saved: {}", output_path.display());
        Ok(output_path)
    }

    /// Renders the tree at the container size and saves it as an ICO.
    /// The render never goes through a PNG file on disk.
    ///
    /// # Returns
    /// The path of the written icon container.
    ///
    /// # Errors
    /// Any rendering error, or [`GenerateIconsError::Image`] if the ICO cannot be encoded or saved.
    fn write_ico(&self, tree: &usvg::Tree) -> Result<PathBuf, GenerateIconsError> {
        let size = self.config.ico_size;
        let png = render_png(tree, size)?;
        let image = image::load_from_memory_with_format(&png, ImageFormat::Png)?;

        let ico_path = self.config.ico_path();
        image.save_with_format(&ico_path, ImageFormat::Ico)?;

        log::info!("Saved {size}x{size} icon container to {}", ico_path.display());
        println!("Saved: {}", ico_path.display());
        Ok(ico_path)
    }
}
