use crate::blocks::Section;
use crate::blocks::block_traits::{BlockContext, Process, PullFromLines};
use crate::error::LxcatError;
use crate::utils::LineCursor;

//=====================================================================
// Species line
//
// The line straight after the block header. Its first token names the
// target, e.g. "Ar" in "Ar -> Ar*(11.5eV)". The rest of the line is
// free text.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct Species(pub String);

impl<'a> PullFromLines<'a> for Species {
    fn pull_from_lines(
        lines: &'a [&'a str],
        cursor: LineCursor,
        context: &BlockContext,
    ) -> Result<(&'a [&'a str], LineCursor), LxcatError> {
        let remaining = cursor.remaining(lines);
        if remaining.is_empty() {
            return Err(context.truncated(Section::Species));
        }
        Ok((&remaining[..1], cursor.next()))
    }
}

impl<'a> Process<'a> for Species {
    type Dependencies = ();

    fn process(section: &'a [&'a str], start: LineCursor, context: &BlockContext, _dependencies: ()) -> Result<Self, LxcatError> {
        section
            .first()
            .and_then(|line| line.split_whitespace().next())
            .map(|token| Self(token.to_string()))
            .ok_or_else(|| context.missing_tokens(start, Section::Species, 1, 0))
    }
}
