use crate::blocks::Section;
use crate::blocks::block_traits::{pull_until_separator, require_tokens, BlockContext, Process, PullFromLines};
use crate::error::LxcatError;
use crate::interpolation::CrossSectionPoint;
use crate::utils::LineCursor;

//=====================================================================
// Data table
//
// Two columns, energy (eV) and cross section (m^2), between the two
// separators of a block. Points are kept in file order; the threshold
// rule is applied later by the block processor.
//=====================================================================
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTable(pub Vec<CrossSectionPoint>);

impl<'a> PullFromLines<'a> for RawTable {
    fn pull_from_lines(
        lines: &'a [&'a str],
        cursor: LineCursor,
        context: &BlockContext,
    ) -> Result<(&'a [&'a str], LineCursor), LxcatError> {
        pull_until_separator(lines, cursor, context, Section::Data)
    }
}

impl<'a> Process<'a> for RawTable {
    type Dependencies = ();

    fn process(section: &'a [&'a str], start: LineCursor, context: &BlockContext, _dependencies: ()) -> Result<Self, LxcatError> {
        let points = section
            .iter()
            .enumerate()
            .map(|(offset, line)| -> Result<CrossSectionPoint, LxcatError> {
                let at = start.advance(offset);
                let tokens = require_tokens(line, 2, at, context, Section::Data)?;
                Ok(CrossSectionPoint {
                    energy: context.parse_number(tokens[0], "energy", at, Section::Data)?,
                    value: context.parse_number(tokens[1], "cross section", at, Section::Data)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(points))
    }
}
