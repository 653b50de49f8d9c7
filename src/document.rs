//! CWL CommandLineTool assembly around the generated descriptors.
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::descriptor::{InputDescriptor, OutputDescriptor};
use crate::dispatch::{dispatch_all, dispatch_parallel, Generated};
use crate::error::GenerateError;
use crate::record::ToolDoc;
use crate::settings::GeneratorSettings;

const TOOL_SELECTOR: &str = "--analysis_type";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDocument {
    pub cwl_version: String,
    pub class: &'static str,
    pub id: String,
    pub label: String,
    pub doc: String,
    pub requirements: IndexMap<&'static str, Value>,
    pub base_command: Vec<String>,
    pub arguments: Vec<Value>,
    pub inputs: Vec<InputDescriptor>,
    pub outputs: Vec<OutputDescriptor>,
}

impl ToolDocument {
    pub fn assemble(tool: &ToolDoc, generated: Generated, settings: &GeneratorSettings) -> Self {
        let mut requirements = IndexMap::new();
        requirements.insert("DockerRequirement", json!({ "dockerPull": settings.docker_image }));
        // secondaryFiles and glob are `$(...)` expressions
        requirements.insert("InlineJavascriptRequirement", json!({}));

        Self {
            cwl_version: settings.cwl_version.clone(),
            class: "CommandLineTool",
            id: tool.name.clone(),
            label: tool.name.clone(),
            doc: tool.summary.clone(),
            requirements,
            base_command: vec!["java".to_string(), "-jar".to_string(), settings.gatk_jar.clone()],
            arguments: vec![json!({ "prefix": TOOL_SELECTOR, "valueFrom": tool.name })],
            inputs: generated.inputs,
            outputs: generated.outputs,
        }
    }
}

/// Translate every argument of `tool`.
pub fn generate(tool: &ToolDoc, settings: &GeneratorSettings) -> Result<Generated, GenerateError> {
    let generated = if settings.parallel {
        dispatch_parallel(&tool.arguments, &settings.conventions)?
    } else {
        dispatch_all(&tool.arguments, &settings.conventions)?
    };
    info!(
        tool = %tool.name,
        inputs = generated.inputs.len(),
        outputs = generated.outputs.len(),
        "generated descriptors"
    );
    Ok(generated)
}

pub fn generate_document(tool: &ToolDoc, settings: &GeneratorSettings) -> Result<ToolDocument, GenerateError> {
    let generated = generate(tool, settings)?;
    Ok(ToolDocument::assemble(tool, generated, settings))
}
