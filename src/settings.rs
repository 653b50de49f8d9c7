//! Generator configuration.
//!
//! Only the canonical argument names and the document boilerplate are
//! configurable; the mapping rules are fixed.
use serde::Deserialize;

/// Names of the arguments that get special treatment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Conventions {
    /// Gets `.fai`/`.dict` companions and goes first among the inputs.
    pub reference_argument: String,
    /// Always typed `File`; the scraped type for it is wrong.
    pub input_file_argument: String,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            reference_argument: "--reference_sequence".to_string(),
            input_file_argument: "--input_file".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    pub conventions: Conventions,
    pub cwl_version: String,
    pub docker_image: String,
    pub gatk_jar: String,
    /// Build descriptors with rayon; output is identical either way.
    pub parallel: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            conventions: Conventions::default(),
            cwl_version: "v1.0".to_string(),
            docker_image: "broadinstitute/gatk3:3.6-0".to_string(),
            gatk_jar: "/usr/GenomeAnalysisTK.jar".to_string(),
            parallel: false,
        }
    }
}
