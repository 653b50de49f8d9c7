//! Routing of argument records into ordered input/output descriptor lists.
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::descriptor::{build_input, build_output, is_output, InputDescriptor, OutputDescriptor};
use crate::error::GenerateError;
use crate::record::ArgumentRecord;
use crate::secondary::{attach, InputCollector, Placement};
use crate::settings::Conventions;

/// The two ordered collections handed to document assembly.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Generated {
    pub inputs: Vec<InputDescriptor>,
    pub outputs: Vec<OutputDescriptor>,
}

enum Routed {
    Input(InputDescriptor, Placement),
    Output(OutputDescriptor),
}

fn route(record: &ArgumentRecord, conventions: &Conventions) -> Result<Routed, GenerateError> {
    if is_output(record) {
        debug!(argument = %record.name, "output");
        return Ok(Routed::Output(build_output(record)));
    }
    let desc = build_input(record, conventions)?;
    let (desc, placement) = attach(desc, record, conventions);
    debug!(argument = %record.name, ?placement, "input");
    Ok(Routed::Input(desc, placement))
}

pub struct Dispatcher<'a> {
    conventions: &'a Conventions,
    inputs: InputCollector,
    outputs: Vec<OutputDescriptor>,
}

impl<'a> Dispatcher<'a> {
    pub fn new(conventions: &'a Conventions) -> Self {
        Self { conventions, inputs: InputCollector::new(), outputs: Vec::new() }
    }

    pub fn dispatch(&mut self, record: &ArgumentRecord) -> Result<(), GenerateError> {
        let routed = route(record, self.conventions)?;
        self.accept(routed);
        Ok(())
    }

    fn accept(&mut self, routed: Routed) {
        match routed {
            Routed::Input(desc, placement) => self.inputs.push(desc, placement),
            Routed::Output(desc) => self.outputs.push(desc),
        }
    }

    pub fn finish(self) -> Generated {
        Generated { inputs: self.inputs.finish(), outputs: self.outputs }
    }
}

/// Process `records` in order, stopping at the first failure.
pub fn dispatch_all(records: &[ArgumentRecord], conventions: &Conventions) -> Result<Generated, GenerateError> {
    let mut dispatcher = Dispatcher::new(conventions);
    for record in records {
        dispatcher.dispatch(record)?;
    }
    Ok(dispatcher.finish())
}

/// Same result as [`dispatch_all`], with the records built on the rayon pool.
///
/// When several records fail, the earliest one is reported.
pub fn dispatch_parallel(records: &[ArgumentRecord], conventions: &Conventions) -> Result<Generated, GenerateError> {
    let routed: Vec<Result<Routed, GenerateError>> = records
        .par_iter()
        .map(|record| route(record, conventions))
        .collect();

    let mut dispatcher = Dispatcher::new(conventions);
    for item in routed {
        dispatcher.accept(item?);
    }
    Ok(dispatcher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Scalar, TargetType};
    use serde_json::json;

    fn records() -> Vec<ArgumentRecord> {
        serde_json::from_value(json!([
            {"name": "--num_threads", "type": "int", "required": "no", "defaultValue": "1"},
            {"name": "--out", "type": "PrintStream", "required": "no", "defaultValue": "stdout"},
            {"name": "--reference_sequence", "type": "File", "required": "yes"},
            {"name": "--validation_strictness", "type": "ValidationStringency", "required": "no",
             "defaultValue": "SILENT", "options": [{"name": "STRICT"}, {"name": "LENIENT"}, {"name": "SILENT"}]},
            {"name": "--BQSR", "type": "File", "required": "no",
             "fulltext": "This argument requires that the index files are present"},
            {"name": "--dbsnp", "type": "RodBinding[VariantContext]", "required": "no"}
        ])).unwrap()
    }

    #[test]
    fn routes_and_orders() {
        let generated = dispatch_all(&records(), &Conventions::default()).unwrap();
        let ids: Vec<&str> = generated.inputs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["BQSR", "reference_sequence", "num_threads", "validation_strictness"]);

        let out_ids: Vec<&str> = generated.outputs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(out_ids, ["--out", "--dbsnp"]);
        assert_eq!(generated.outputs[0].type_, TargetType::nullable(TargetType::scalar(Scalar::File)));
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut many = Vec::new();
        for i in 0..50 {
            for mut r in records() {
                r.name = format!("{}_{i}", r.name);
                many.push(r);
            }
        }
        let conventions = Conventions { reference_argument: "--reference_sequence_7".into(), ..Conventions::default() };
        assert_eq!(
            dispatch_parallel(&many, &conventions).unwrap(),
            dispatch_all(&many, &conventions).unwrap()
        );
    }

    #[test]
    fn first_failure_wins() {
        let records: Vec<ArgumentRecord> = serde_json::from_value(json!([
            {"name": "--ok", "type": "int", "required": "no"},
            {"name": "--first", "type": "Downsampling", "required": "no"},
            {"name": "--second", "type": "int", "required": "no", "defaultValue": "x"}
        ])).unwrap();
        let conventions = Conventions::default();
        for result in [dispatch_all(&records, &conventions), dispatch_parallel(&records, &conventions)] {
            assert_eq!(result.unwrap_err().argument(), "--first");
        }
    }

    #[test]
    fn empty_input() {
        assert_eq!(dispatch_all(&[], &Conventions::default()).unwrap(), Generated::default());
    }
}
