//! Runs every fixture tool doc through the generator and reports per file.
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use gatk_cwl_gen::path_de::from_str_with_path;
use gatk_cwl_gen::{generate_document, GeneratorSettings, ToolDoc};

fn check(path: &Path, settings: &GeneratorSettings) -> Result<(usize, usize)> {
    let source = std::fs::read_to_string(path)?;
    let tool: ToolDoc = from_str_with_path(&source)?;
    let sequential = generate_document(&tool, settings)?;
    let parallel = generate_document(&tool, &GeneratorSettings { parallel: true, ..settings.clone() })?;
    anyhow::ensure!(sequential == parallel, "parallel and sequential output differ");
    serde_json::to_string_pretty(&sequential).context("serialize")?;
    Ok((sequential.inputs.len(), sequential.outputs.len()))
}

fn main() -> Result<()> {
    let dir = std::env::args().nth(1).unwrap_or_else(|| "fixtures".to_string());
    let pattern = format!("{dir}/*.json");
    let settings = GeneratorSettings::default();

    let mut failed = 0usize;
    let mut total = 0usize;
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        total += 1;
        match check(&path, &settings) {
            Ok((inputs, outputs)) => {
                eprintln!("{} {} ({inputs} inputs, {outputs} outputs)", "✅".green(), path.display());
            }
            Err(error) => {
                failed += 1;
                eprintln!("{} {}: {error:#}", "❌ failed:".red(), path.display());
            }
        }
    }

    eprintln!("—— {} fixtures, {} failed ——", total, failed);
    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
