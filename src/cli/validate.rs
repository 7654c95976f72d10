use anyhow::Result;
use log::info;
use std::path::PathBuf;

/// Validate a project file
pub fn run(file: PathBuf) -> Result<()> {
    use scalewiz::validator::validate_project_file;

    info!("Project Validator");
    info!("=================");
    info!("File: {}", file.display());

    match validate_project_file(&file) {
        Ok(report) => {
            #[cfg(feature = "colorized_output")]
            {
                println!("{}", report.format_colored());
            }

            #[cfg(not(feature = "colorized_output"))]
            {
                println!("{}", report);
            }

            if report.has_failures() {
                std::process::exit(1);
            }

            Ok(())
        }
        Err(e) => {
            eprintln!("Validation error: {}", e);
            std::process::exit(1);
        }
    }
}
