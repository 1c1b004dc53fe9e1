use std::collections::HashMap;
use std::ops::Deref;

use crate::blocks::Section;
use crate::blocks::block_traits::{pull_until_separator, BlockContext, Process, PullFromLines};
use crate::error::LxcatError;
use crate::utils::{split_key_value, LineCursor};

//=====================================================================
// Info section
//
// Free-form "KEY: value" lines between the parameters and the first
// separator, e.g. "PROCESS: E + Ar -> E + Ar*(11.5eV), Excitation".
// Lines without a colon are skipped. A repeated key keeps its last value.
//=====================================================================
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Info(pub HashMap<String, String>);

impl Deref for Info {
    type Target = HashMap<String, String>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> PullFromLines<'a> for Info {
    fn pull_from_lines(
        lines: &'a [&'a str],
        cursor: LineCursor,
        context: &BlockContext,
    ) -> Result<(&'a [&'a str], LineCursor), LxcatError> {
        pull_until_separator(lines, cursor, context, Section::Info)
    }
}

impl<'a> Process<'a> for Info {
    type Dependencies = ();

    fn process(section: &'a [&'a str], start: LineCursor, context: &BlockContext, _dependencies: ()) -> Result<Self, LxcatError> {
        let mut info = HashMap::new();
        for (offset, line) in section.iter().enumerate() {
            let Some((key, value)) = split_key_value(line) else {
                continue;
            };
            if let Some(previous) = info.insert(key.to_string(), value.to_string()) {
                log::warn!(
                    "Line {}: {} block for '{}' repeats info key '{}', replacing '{}'",
                    start.advance(offset).line_number(),
                    context.process_type,
                    context.species,
                    key,
                    previous
                );
            }
        }
        Ok(Self(info))
    }
}
