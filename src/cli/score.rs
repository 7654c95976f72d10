use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use scalewiz::evaluation::Evaluation;
use scalewiz::project::Project;

use super::config::Config;

/// Score a project and print the derivation log
pub fn run(
    project_path: PathBuf,
    save: bool,
    export_csv: bool,
    output_dir: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    if !project_path.exists() {
        anyhow::bail!("Project file does not exist: {}", project_path.display());
    }

    let config = match config {
        Some(path) => Config::from_file(&path)?,
        None => Config::default(),
    };

    let mut project = Project::load_json(&project_path)
        .with_context(|| format!("Failed to load project {}", project_path.display()))?;

    info!("Scoring {}", project_path.display());
    let mut evaluation = Evaluation::new(&mut project);
    let report = evaluation
        .score()
        .with_context(|| format!("Could not score {}", project_path.display()))?;
    print!("{}", report.log);

    if save {
        let options = config.save_options(export_csv, output_dir);
        let saved = evaluation.save(&options).context("Failed to save evaluation")?;
        for path in [saved.log, saved.data, saved.project].into_iter().flatten() {
            println!("Saved {}", path.display());
        }
    }

    Ok(())
}
