//! `favigen`
//!
//! Regenerates `static/img/` icons from `static/img/bulk-watermarker.svg`.

use std::process::ExitCode;

use favigen::{GeneratorConfig, IconGenerator};

fn main() -> ExitCode {
    env_logger::init();

    let generator = IconGenerator::new(GeneratorConfig::default());
    log::info!(
        "Rendering {} into {}",
        generator.config().source_file.display(),
        generator.config().output_dir.display()
    );
    match generator.run() {
        Ok(report) => {
            log::debug!("Generated {:?}", report.files().collect::<Vec<_>>());
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("Icon generation failed: {err}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
