use crate::blocks::{ProcessType, Section};
use crate::error::LxcatError;
use crate::utils::{is_separator, parse_f64, LineCursor};

//=====================================================================
// Every section of a block needs to implement the following traits:
// - PullFromLines:
//     - Pull the section's lines from the input, this should implement
//       all of the logic needed to determine the end of the section.
//       We return the section as a slice of lines, together with the
//       cursor just past it.
// - Process:
//     - Process the lines produced by PullFromLines into the final
//       data structure.
//
// If both of these traits are implemented, we automatically implement
// the Parse trait, which calls the two other traits in order.
//=====================================================================

// Pull a section from the input lines starting at `cursor`. Running out
// of input before the section is complete is a truncated block.
pub trait PullFromLines<'a> {
    fn pull_from_lines(
        lines: &'a [&'a str],
        cursor: LineCursor,
        context: &BlockContext,
    ) -> Result<(&'a [&'a str], LineCursor), LxcatError>
    where
        Self: Sized;
}

// Process the section from PullFromLines into the final data structure.
// `start` is the cursor of the first line of the section, so errors can
// name the offending line. Some sections depend on values parsed
// earlier in the block, these are passed in as dependencies.
pub trait Process<'a> {
    type Dependencies;

    fn process(
        section: &'a [&'a str],
        start: LineCursor,
        context: &BlockContext,
        dependencies: Self::Dependencies,
    ) -> Result<Self, LxcatError>
    where
        Self: Sized;
}

// Pull a section from the input and process it into the final data
// structure, handing back the cursor just past the section.
pub trait Parse<'a>: PullFromLines<'a> + Process<'a> {
    fn parse(
        lines: &'a [&'a str],
        cursor: LineCursor,
        context: &BlockContext,
        dependencies: Self::Dependencies,
    ) -> Result<(Self, LineCursor), LxcatError>
    where
        Self: Sized,
    {
        let (section, next) = Self::pull_from_lines(lines, cursor, context)?;
        let parsed = Self::process(section, cursor, context, dependencies)?;
        Ok((parsed, next))
    }
}

impl<'a, T> Parse<'a> for T
where
    T: PullFromLines<'a> + Process<'a>,
{}

//=====================================================================
// What is known about the block being parsed, carried into every
// error raised while parsing it.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct BlockContext {
    pub process_type: ProcessType,
    pub species: String, // Empty until the species line has been read
    pub header: LineCursor,
}

impl BlockContext {
    pub fn new(process_type: ProcessType, header: LineCursor) -> Self {
        Self { process_type, species: String::new(), header }
    }

    pub fn truncated(&self, section: Section) -> LxcatError {
        LxcatError::TruncatedBlock {
            line: self.header.line_number(),
            section,
            process_type: self.process_type,
            species: self.species.clone(),
        }
    }

    pub fn missing_tokens(&self, line: LineCursor, section: Section, expected: usize, found: usize) -> LxcatError {
        LxcatError::MissingTokens {
            line: line.line_number(),
            section,
            process_type: self.process_type,
            species: self.species.clone(),
            expected,
            found,
        }
    }

    // Parse a single numeric token, `role` names the field for the error message
    pub fn parse_number(&self, token: &str, role: &'static str, line: LineCursor, section: Section) -> Result<f64, LxcatError> {
        parse_f64(token).ok_or_else(|| LxcatError::MalformedNumber {
            line: line.line_number(),
            token: token.to_string(),
            role,
            section,
            process_type: self.process_type,
            species: self.species.clone(),
        })
    }
}

//=====================================================================
// Helper functions shared by the sections.
//=====================================================================

// Lines from the cursor up to (not including) the next separator line,
// and the cursor just past that separator.
pub fn pull_until_separator<'a>(
    lines: &'a [&'a str],
    cursor: LineCursor,
    context: &BlockContext,
    section: Section,
) -> Result<(&'a [&'a str], LineCursor), LxcatError> {
    let remaining = cursor.remaining(lines);
    let section_length = remaining
        .iter()
        .position(|line| is_separator(line))
        .ok_or_else(|| context.truncated(section))?;
    Ok((&remaining[..section_length], cursor.advance(section_length + 1)))
}

// Whitespace-delimited tokens of a line, requiring at least `expected`
pub fn require_tokens<'a>(
    line: &'a str,
    expected: usize,
    at: LineCursor,
    context: &BlockContext,
    section: Section,
) -> Result<Vec<&'a str>, LxcatError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < expected {
        return Err(context.missing_tokens(at, section, expected, tokens.len()));
    }
    Ok(tokens)
}
