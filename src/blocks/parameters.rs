use crate::blocks::{ProcessType, Section};
use crate::blocks::block_traits::{require_tokens, BlockContext, Process, PullFromLines};
use crate::error::LxcatError;
use crate::utils::LineCursor;

//=====================================================================
// Parameter line(s)
//
// The numeric line following the species line. What it holds depends
// on the process type:
//   ELASTIC, EFFECTIVE  mass ratio
//   EXCITATION          threshold [statistical weight ratio, default 1]
//   IONIZATION          threshold
//   ROTATION            lower energy, lower weight, then on the next
//                       non-empty line upper energy, upper weight
//   ATTACHMENT          nothing, the line is left for the info section
//=====================================================================
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProcessParameters {
    pub mass_ratio: Option<f64>,
    pub threshold: f64,
    pub stat_weight_ratio: Option<f64>,
    pub rotation: Option<RotationLevels>,
}

// Energies (eV) and statistical weights of the two levels of a rotational transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationLevels {
    pub lower_energy: f64,
    pub lower_stat_weight: f64,
    pub upper_energy: f64,
    pub upper_stat_weight: f64,
}

impl<'a> PullFromLines<'a> for ProcessParameters {
    fn pull_from_lines(
        lines: &'a [&'a str],
        cursor: LineCursor,
        context: &BlockContext,
    ) -> Result<(&'a [&'a str], LineCursor), LxcatError> {
        let remaining = cursor.remaining(lines);

        match context.process_type {
            // Nothing is consumed
            ProcessType::Attachment => Ok((&remaining[..0], cursor)),
            // Two lines, the second being the next non-empty one
            ProcessType::Rotation => {
                if remaining.is_empty() {
                    return Err(context.truncated(Section::Parameters));
                }
                let second = remaining
                    .iter()
                    .skip(1)
                    .position(|line| !line.trim().is_empty())
                    .map(|offset| offset + 1)
                    .ok_or_else(|| context.truncated(Section::Parameters))?;
                Ok((&remaining[..=second], cursor.advance(second + 1)))
            }
            ProcessType::Elastic | ProcessType::Effective | ProcessType::Excitation | ProcessType::Ionization => {
                if remaining.is_empty() {
                    return Err(context.truncated(Section::Parameters));
                }
                Ok((&remaining[..1], cursor.next()))
            }
        }
    }
}

impl<'a> Process<'a> for ProcessParameters {
    type Dependencies = ();

    fn process(section: &'a [&'a str], start: LineCursor, context: &BlockContext, _dependencies: ()) -> Result<Self, LxcatError> {
        let line = |index: usize| section.get(index).copied().unwrap_or("");
        let number = |token: &str, role: &'static str, at: LineCursor| {
            context.parse_number(token, role, at, Section::Parameters)
        };

        match context.process_type {
            ProcessType::Elastic | ProcessType::Effective => {
                let tokens = require_tokens(line(0), 1, start, context, Section::Parameters)?;
                Ok(Self {
                    mass_ratio: Some(number(tokens[0], "mass ratio", start)?),
                    ..Self::default()
                })
            }
            ProcessType::Excitation => {
                let tokens = require_tokens(line(0), 1, start, context, Section::Parameters)?;
                let threshold = number(tokens[0], "threshold", start)?;
                let stat_weight_ratio = match tokens.get(1).copied() {
                    Some(token) => number(token, "statistical weight ratio", start)?,
                    None => 1.0,
                };
                Ok(Self {
                    threshold,
                    stat_weight_ratio: Some(stat_weight_ratio),
                    ..Self::default()
                })
            }
            ProcessType::Ionization => {
                let tokens = require_tokens(line(0), 1, start, context, Section::Parameters)?;
                Ok(Self {
                    threshold: number(tokens[0], "threshold", start)?,
                    ..Self::default()
                })
            }
            ProcessType::Rotation => {
                let lower = require_tokens(line(0), 2, start, context, Section::Parameters)?;
                let upper_at = start.advance(section.len().saturating_sub(1));
                let upper = require_tokens(line(section.len().saturating_sub(1)), 2, upper_at, context, Section::Parameters)?;
                Ok(Self {
                    rotation: Some(RotationLevels {
                        lower_energy: number(lower[0], "lower level energy", start)?,
                        lower_stat_weight: number(lower[1], "lower level statistical weight", start)?,
                        upper_energy: number(upper[0], "upper level energy", upper_at)?,
                        upper_stat_weight: number(upper[1], "upper level statistical weight", upper_at)?,
                    }),
                    ..Self::default()
                })
            }
            ProcessType::Attachment => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::block_traits::Parse;

    fn parse(process_type: ProcessType, lines: &[&str]) -> Result<(ProcessParameters, LineCursor), LxcatError> {
        let mut context = BlockContext::new(process_type, LineCursor::new(0));
        context.species = String::from("Ar");
        ProcessParameters::parse(lines, LineCursor::new(0), &context, ())
    }

    #[test]
    fn test_elastic_mass_ratio() {
        let (parameters, next) = parse(ProcessType::Elastic, &[" 1.360000e-5", "SPECIES: e / Ar"]).unwrap();
        assert_eq!(parameters.mass_ratio, Some(1.36e-5));
        assert_eq!(parameters.threshold, 0.0);
        assert_eq!(next, LineCursor::new(1));
    }

    #[test]
    fn test_effective_mass_ratio() {
        let (parameters, _) = parse(ProcessType::Effective, &["1.95e-5 extra"]).unwrap();
        assert_eq!(parameters.mass_ratio, Some(1.95e-5));
    }

    #[test]
    fn test_excitation_default_stat_weight_ratio() {
        let (parameters, _) = parse(ProcessType::Excitation, &[" 1.150000e+1"]).unwrap();
        assert_eq!(parameters.threshold, 11.5);
        assert_eq!(parameters.stat_weight_ratio, Some(1.0));
    }

    #[test]
    fn test_excitation_stat_weight_ratio() {
        let (parameters, _) = parse(ProcessType::Excitation, &[" 1.150000e+1  3.000000e+0"]).unwrap();
        assert_eq!(parameters.threshold, 11.5);
        assert_eq!(parameters.stat_weight_ratio, Some(3.0));
    }

    #[test]
    fn test_ionization_threshold() {
        let (parameters, _) = parse(ProcessType::Ionization, &["15.8"]).unwrap();
        assert_eq!(parameters.threshold, 15.8);
        assert_eq!(parameters.mass_ratio, None);
        assert_eq!(parameters.stat_weight_ratio, None);
    }

    #[test]
    fn test_rotation_levels_across_blank_lines() {
        let lines = ["0.0 1.0", "", "   ", "1.48e-3 5.0", "SPECIES: e / N2"];
        let (parameters, next) = parse(ProcessType::Rotation, &lines).unwrap();
        assert_eq!(
            parameters.rotation,
            Some(RotationLevels {
                lower_energy: 0.0,
                lower_stat_weight: 1.0,
                upper_energy: 1.48e-3,
                upper_stat_weight: 5.0,
            })
        );
        assert_eq!(parameters.threshold, 0.0);
        assert_eq!(next, LineCursor::new(4));
    }

    #[test]
    fn test_rotation_upper_line_errors_point_at_that_line() {
        let lines = ["0.0 1.0", "", "1.48e-3 x"];
        let err = parse(ProcessType::Rotation, &lines).unwrap_err();
        assert!(matches!(
            err,
            LxcatError::MalformedNumber { line: 3, role: "upper level statistical weight", .. }
        ));
    }

    #[test]
    fn test_rotation_missing_upper_line() {
        let err = parse(ProcessType::Rotation, &["0.0 1.0", "", ""]).unwrap_err();
        assert!(matches!(err, LxcatError::TruncatedBlock { section: Section::Parameters, .. }));
    }

    #[test]
    fn test_rotation_too_few_tokens() {
        let err = parse(ProcessType::Rotation, &["0.0", "1.48e-3 5.0"]).unwrap_err();
        assert!(matches!(err, LxcatError::MissingTokens { expected: 2, found: 1, line: 1, .. }));
    }

    #[test]
    fn test_attachment_consumes_nothing() {
        let (parameters, next) = parse(ProcessType::Attachment, &["SPECIES: e / O2"]).unwrap();
        assert_eq!(parameters, ProcessParameters::default());
        assert_eq!(next, LineCursor::new(0));
    }

    #[test]
    fn test_empty_parameter_line() {
        let err = parse(ProcessType::Ionization, &[""]).unwrap_err();
        assert!(matches!(err, LxcatError::MissingTokens { section: Section::Parameters, expected: 1, found: 0, .. }));
    }

    #[test]
    fn test_malformed_threshold() {
        let err = parse(ProcessType::Excitation, &["eleven"]).unwrap_err();
        match err {
            LxcatError::MalformedNumber { token, role, process_type, .. } => {
                assert_eq!(token, "eleven");
                assert_eq!(role, "threshold");
                assert_eq!(process_type, ProcessType::Excitation);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_missing_parameter_line() {
        let err = parse(ProcessType::Elastic, &[]).unwrap_err();
        assert!(matches!(err, LxcatError::TruncatedBlock { section: Section::Parameters, .. }));
    }
}
