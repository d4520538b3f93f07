use std::io;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::blast::blast_string;
use crate::blast::output::{write_fixture, Destination};
use crate::cli::{BlastError, Cli};
use crate::utils::validation::{parse_integer, validate_params, validate_segments};

/// Validate the arguments, build the fixture and write it.
///
/// Checks run in the order K, overlap parsing, overlap bounds. The string is
/// generated before the destination is opened, so neither a validation failure
/// nor an allocation failure leaves a file behind.
///
/// # Errors
///
/// Returns a [`BlastError`] whose [`exit_code`](BlastError::exit_code) is the
/// process exit status.
pub fn run(cli: &Cli) -> Result<(), BlastError> {
    validate_segments(cli.strlen, cli.k)?;
    let min_ov = parse_integer(cli.min_ov.as_deref())?;
    let max_ov = parse_integer(cli.max_ov.as_deref())?;
    let params = validate_params(cli.strlen, cli.k, min_ov, max_ov, cli.seed)?;
    debug!(
        length = params.length,
        segments = params.segments,
        segment_size = params.segment_size(),
        min_overlap = params.min_overlap,
        max_overlap = params.max_overlap,
        seed = params.seed,
        "validated parameters"
    );

    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
    let blasted =
        blast_string(&params, &mut rng).map_err(|source| BlastError::Allocation {
            length: params.length,
            source,
        })?;
    let order = blasted.shuffled(&mut rng);

    let destination = Destination::from_arg(&cli.filename);
    let mut sink = destination
        .open()
        .map_err(|e| BlastError::from_io(&destination, e))?;

    let written = write_fixture(&mut sink, params.segments, order, &blasted.original)
        .and_then(|()| sink.finish());

    match written {
        Ok(()) => {
            info!(
                "Wrote {} strands and the original string to {destination}",
                params.segments
            );
            Ok(())
        }
        // A reader such as `head` closed the pipe; that is not a failure
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("output closed early: {e}");
            Ok(())
        }
        Err(e) => Err(BlastError::from_io(&destination, e)),
    }
}
