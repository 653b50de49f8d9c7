//! Secondary-file attachment and input ordering.
//!
//! Inputs that need companion files go to the front; each one lands ahead
//! of the ones before it, so the front block ends up in reverse arrival
//! order. Everything else follows in arrival order.
use crate::descriptor::{InputDescriptor, SecondaryFiles};
use crate::record::ArgumentRecord;
use crate::settings::Conventions;

const REFERENCE_COMPANIONS: [&str; 2] = [".fai", "^.dict"];

/// `foo.bam` → `foo.bam.bai`, `foo.cram` → `foo.cram.crai`.
pub const INDEX_EXPRESSION: &str = "$(self.location + '.' + self.nameext.slice(1, -1) + 'i')";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Front,
    Back,
}

fn mentions_required_files(fulltext: &str) -> bool {
    fulltext.contains("requires") && fulltext.contains("files")
}

/// Decide companion files for `desc` and where it belongs.
pub fn attach(mut desc: InputDescriptor, record: &ArgumentRecord, conventions: &Conventions) -> (InputDescriptor, Placement) {
    if record.name == conventions.reference_argument {
        desc.secondary_files = Some(SecondaryFiles::Patterns(
            REFERENCE_COMPANIONS.iter().map(|s| s.to_string()).collect(),
        ));
        (desc, Placement::Front)
    } else if mentions_required_files(&record.fulltext) {
        desc.secondary_files = Some(SecondaryFiles::Expression(INDEX_EXPRESSION.to_string()));
        (desc, Placement::Front)
    } else {
        (desc, Placement::Back)
    }
}

/// Two-bucket accumulation of input descriptors.
#[derive(Debug, Default)]
pub struct InputCollector {
    front: Vec<InputDescriptor>,
    back: Vec<InputDescriptor>,
}

impl InputCollector {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, desc: InputDescriptor, placement: Placement) {
        match placement {
            Placement::Front => self.front.push(desc),
            Placement::Back => self.back.push(desc),
        }
    }

    /// Front block (latest first), then the rest in arrival order.
    pub fn finish(self) -> Vec<InputDescriptor> {
        let Self { mut front, back } = self;
        front.reverse();
        front.extend(back);
        front
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::build_input;
    use crate::record::Required;

    fn record(name: &str, fulltext: &str) -> ArgumentRecord {
        ArgumentRecord {
            name: name.into(),
            type_: "File".into(),
            required: Required::No,
            default_value: "NA".into(),
            options: Vec::new(),
            summary: String::new(),
            fulltext: fulltext.into(),
        }
    }

    fn collect(records: &[ArgumentRecord]) -> Vec<String> {
        let conventions = Conventions::default();
        let mut inputs = InputCollector::new();
        for r in records {
            let desc = build_input(r, &conventions).unwrap();
            let (desc, placement) = attach(desc, r, &conventions);
            inputs.push(desc, placement);
        }
        inputs.finish().into_iter().map(|d| d.id).collect()
    }

    #[test]
    fn reference_gets_fai_and_dict() {
        let r = record("--reference_sequence", "");
        let desc = build_input(&r, &Conventions::default()).unwrap();
        let (desc, placement) = attach(desc, &r, &Conventions::default());
        assert_eq!(placement, Placement::Front);
        assert_eq!(desc.secondary_files, Some(SecondaryFiles::Patterns(vec![".fai".into(), "^.dict".into()])));
    }

    #[test]
    fn fulltext_cue_gets_index_expression() {
        let r = record("--BQSR", "This argument requires index files alongside the input");
        let desc = build_input(&r, &Conventions::default()).unwrap();
        let (desc, placement) = attach(desc, &r, &Conventions::default());
        assert_eq!(placement, Placement::Front);
        assert_eq!(desc.secondary_files, Some(SecondaryFiles::Expression(INDEX_EXPRESSION.into())));

        // both words are needed
        let r = record("--other", "requires nothing");
        let desc = build_input(&r, &Conventions::default()).unwrap();
        assert_eq!(attach(desc, &r, &Conventions::default()).1, Placement::Back);
    }

    #[test]
    fn front_block_is_reverse_arrival_order() {
        let ids = collect(&[
            record("--r1", ""),
            record("--reference_sequence", ""),
            record("--r3", ""),
            record("--r4", "requires the index files"),
        ]);
        assert_eq!(ids, ["r4", "reference_sequence", "r1", "r3"]);
    }

    #[test]
    fn custom_reference_name() {
        let conventions = Conventions { reference_argument: "--reference".into(), ..Conventions::default() };
        let r = record("--reference", "");
        let desc = build_input(&r, &conventions).unwrap();
        assert_eq!(attach(desc, &r, &conventions).1, Placement::Front);
    }
}
