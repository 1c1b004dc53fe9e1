use crate::api::Collision;
use crate::blocks::block_traits::{BlockContext, Parse};
use crate::blocks::{Info, ProcessParameters, ProcessType, RawTable, Species};
use crate::error::LxcatError;
use crate::interpolation::normalize_threshold;
use crate::utils::LineCursor;

//=====================================================================
// Walk the lines of an LXCat file, turning every block into a
// Collision. Lines outside of blocks (file headers, banners, blank
// lines) are skipped. The first error aborts the whole walk.
//=====================================================================
pub fn parse_collisions(lines: &[&str]) -> Result<Vec<Collision>, LxcatError> {
    let mut collisions = Vec::new();
    let mut cursor = LineCursor::default();

    while let Some(line) = cursor.peek(lines) {
        match ProcessType::from_header_line(line) {
            Some(process_type) => {
                let (collision, next) = parse_block(lines, cursor, process_type)?;
                collisions.push(collision);
                cursor = next;
            }
            None => {
                log::trace!("Skipping line {} outside of any block", cursor.line_number());
                cursor = cursor.next();
            }
        }
    }

    Ok(collisions)
}

// Parse one block whose header sits under `header`. Returns the
// collision and the cursor just past the block's closing separator.
pub fn parse_block(
    lines: &[&str],
    header: LineCursor,
    process_type: ProcessType,
) -> Result<(Collision, LineCursor), LxcatError> {
    let mut context = BlockContext::new(process_type, header);

    // Target species
    let (species, cursor) = Species::parse(lines, header.next(), &context, ())?;
    context.species = species.0;

    // Numeric parameters
    let (parameters, cursor) = ProcessParameters::parse(lines, cursor, &context, ())?;

    // Free-form metadata
    let (info, cursor) = Info::parse(lines, cursor, &context, ())?;

    // Cross section points
    let (raw_table, cursor) = RawTable::parse(lines, cursor, &context, ())?;

    // Zero-below-threshold rule
    let num_raw_points = raw_table.0.len();
    let data = normalize_threshold(process_type, parameters.threshold, raw_table.0).map_err(|source| {
        LxcatError::Normalize {
            line: header.line_number(),
            process_type,
            species: context.species.clone(),
            source,
        }
    })?;

    log::debug!(
        "Parsed {} block for '{}' at line {}: {} points ({} read)",
        process_type,
        context.species,
        header.line_number(),
        data.len(),
        num_raw_points
    );

    let collision = Collision {
        process_type,
        species: context.species,
        mass_ratio: parameters.mass_ratio,
        threshold: parameters.threshold,
        stat_weight_ratio: parameters.stat_weight_ratio,
        rotation: parameters.rotation,
        info: info.0,
        data,
    };

    Ok((collision, cursor))
}
