//! CLI: scraped tool docs → (CWL tool | descriptor fragment)
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::document::{generate, generate_document};
use crate::path_de::{from_str_with_path, from_value_with_path};
use crate::record::ToolDoc;
use crate::settings::GeneratorSettings;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// translate scraped GATK argument docs into CWL input/output descriptors
#[derive(Parser, Debug)]
#[command(name = "gatk-cwl-gen", version)]
pub struct CommandLineInterface {
    /// debug-level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// emit a complete CommandLineTool document per tool
    Tool(ToolOut),
    /// emit only the `inputs`/`outputs` lists per tool
    Fragment(FragmentOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// treat input as newline-delimited JSON (NDJSON)
    #[arg(long, default_value_t = false)]
    ndjson: bool,

    /// JSON Pointer to select the tool doc in each document (e.g. /data/tool)
    #[arg(long)]
    json_pointer: Option<String>,

    /// JQ pre-process filter for each document; every result is one tool doc
    #[arg(long)]
    jq_expr: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Args, Debug, Clone)]
struct EngineSettings {
    /// JSON settings file; flags below override it
    #[arg(long)]
    settings: Option<PathBuf>,

    /// build descriptors on the rayon pool
    #[arg(long)]
    parallel: bool,

    /// name of the reference sequence argument
    #[arg(long)]
    reference_arg: Option<String>,

    /// name of the input file argument
    #[arg(long)]
    input_file_arg: Option<String>,
}

#[derive(clap::Parser, Debug)]
struct ToolOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    engine: EngineSettings,

    #[arg(long)]
    docker_image: Option<String>,

    #[arg(long)]
    gatk_jar: Option<String>,

    #[arg(long)]
    cwl_version: Option<String>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct FragmentOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    engine: EngineSettings,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load_tools(&self) -> Result<Vec<ToolDoc>> {
        let source_paths = resolve_file_path_patterns(&self.input)?;
        let mut tools = Vec::new();
        for source_path in source_paths {
            let source_path_str = source_path.to_string_lossy().to_string();
            let source = std::fs::read_to_string(&source_path)
                .with_context(|| format!("failed to read source file {source_path_str}"))?;
            for json_value in self.documents(&source, &source_path_str)? {
                for doc in self.preprocess(json_value, &source_path_str)? {
                    let tool = from_value_with_path::<ToolDoc>(doc)
                        .with_context(|| format!("invalid tool doc in {source_path_str}"))?;
                    debug!(tool = %tool.name, arguments = tool.arguments.len(), "loaded");
                    tools.push(tool);
                }
            }
        }
        Ok(tools)
    }

    fn documents(&self, source: &str, source_path_str: &str) -> Result<Vec<Value>> {
        let parse = |text: &str| {
            from_str_with_path::<Value>(text)
                .with_context(|| format!("failed to parse JSON source file ({source_path_str})"))
        };
        if self.ndjson {
            source.lines().filter(|l| !l.trim().is_empty()).map(parse).collect()
        } else {
            Ok(vec![parse(source)?])
        }
    }

    fn preprocess(&self, json_value: Value, source_path_str: &str) -> Result<Vec<Value>> {
        let json_value = match self.json_pointer.as_deref() {
            None => json_value,
            Some(ptr) => json_value
                .pointer(ptr)
                .cloned()
                .ok_or_else(|| anyhow!("JSON pointer {ptr} selects nothing in {source_path_str}"))?,
        };
        match self.jq_expr.as_deref() {
            None => Ok(vec![json_value]),
            Some(jq_expr) => crate::jq_exec::apply_filter(jq_expr, &json_value).with_context(|| {
                format!("Failed to apply jq expression to source file ({source_path_str})")
            }),
        }
    }
}

impl EngineSettings {
    fn resolve(&self) -> Result<GeneratorSettings> {
        let mut settings = match self.settings.as_ref() {
            None => GeneratorSettings::default(),
            Some(path) => {
                let source = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read settings {}", path.display()))?;
                from_str_with_path(&source).with_context(|| format!("invalid settings {}", path.display()))?
            }
        };
        settings.parallel |= self.parallel;
        if let Some(name) = &self.reference_arg {
            settings.conventions.reference_argument = name.clone();
        }
        if let Some(name) = &self.input_file_arg {
            settings.conventions.input_file_argument = name.clone();
        }
        Ok(settings)
    }
}

impl ToolOut {
    fn settings(&self) -> Result<GeneratorSettings> {
        let mut settings = self.engine.resolve()?;
        if let Some(image) = &self.docker_image {
            settings.docker_image = image.clone();
        }
        if let Some(jar) = &self.gatk_jar {
            settings.gatk_jar = jar.clone();
        }
        if let Some(version) = &self.cwl_version {
            settings.cwl_version = version.clone();
        }
        Ok(settings)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Tool(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }
                let settings = target.settings()?;
                let tools = target.input_settings.load_tools()?;
                let docs = tools
                    .iter()
                    .map(|tool| {
                        generate_document(tool, &settings)
                            .with_context(|| format!("failed to generate tool {}", tool.name))
                    })
                    .collect::<Result<Vec<_>>>()?;
                print_json(&docs)
            }
            Command::Fragment(target) => {
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }
                let settings = target.engine.resolve()?;
                let tools = target.input_settings.load_tools()?;
                let fragments = tools
                    .iter()
                    .map(|tool| {
                        generate(tool, &settings).with_context(|| format!("failed to generate tool {}", tool.name))
                    })
                    .collect::<Result<Vec<_>>>()?;
                print_json(&fragments)
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// One document prints as an object, several as an array.
fn print_json<T: Serialize>(items: &[T]) -> Result<()> {
    let rendered = match items {
        [] => bail!("no tool docs in input"),
        [single] => serde_json::to_string_pretty(single)?,
        many => serde_json::to_string_pretty(many)?,
    };
    println!("{rendered}");
    Ok(())
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{' ))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched = glob::glob(pattern)
                .with_context(|| format!("invalid glob pattern {pattern}"))?
                .collect::<Result<Vec<_>, _>>()?;
            if matched.is_empty() {
                bail!("glob pattern matched no files: {pattern}");
            }
            matched.sort();
            out.append(&mut matched);
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
