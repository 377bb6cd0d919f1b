use crate::codec;
use crate::response::Response;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const QUERY_IMAGE_NAME: &str = "query_image.png";
pub const REFERENCE_IMAGE_NAME: &str = "reference_image.png";

/// Capability for the matcher's informational output. Callers inject a sink
/// instead of the matcher assuming a process-wide logger.
pub trait MatchLog {
    fn info(&self, message: &str);
}

/// Default sink: forwards to the `log` facade.
pub struct LogSink;

impl MatchLog for LogSink {
    fn info(&self, message: &str) {
        log::info!("{}", message);
    }
}

/// What a match extraction returns: the two decoded image files plus the
/// scores the calling test suite asserts on.
#[derive(Debug)]
pub struct MatchOutcome {
    pub reference_image: PathBuf,
    pub query_image: PathBuf,
    pub reference_confidence: f32,
    pub query_confidence: f32,
    pub score: f32,
}

/// Pick the best-matching reference for the top query signature and write
/// both images (decoded from base64) under `out_dir` with fixed names,
/// overwriting anything already there.
///
/// The scan seeds `max = 0` and compares from index 1 onward with strict `>`,
/// so ties keep the earliest index past 0 and a maximum sitting at index 0 is
/// only ever selected by default seeding. This mirrors the behavior of the
/// service's own client helpers; do not change it without coordinating with
/// the suites that assert on it.
pub fn run_matching_at(
    response: &Response,
    out_dir: impl AsRef<Path>,
    log: &dyn MatchLog,
) -> Result<MatchOutcome> {
    let out_dir = out_dir.as_ref();

    let top_reference = response
        .reference
        .first()
        .context("response contains no reference signatures")?;
    let top_query = response
        .query
        .first()
        .context("response contains no query signatures")?;

    log.info(&format!(
        "Found {} signatures from REFERENCE image, top confidence is {}",
        response.reference.len(),
        top_reference.confidence
    ));
    log.info(&format!(
        "Found {} signatures from QUERY image, top confidence is {}",
        response.query.len(),
        top_query.confidence
    ));

    let mut max = 0.0_f32;
    let mut index = 0;
    for i in 1..top_query.similarities.len() {
        if top_query.similarities[i] > max {
            max = top_query.similarities[i];
            index = i;
        }
    }

    let score = *top_query
        .similarities
        .get(index)
        .context("top query signature has no similarity scores")?;

    log.info(&format!("Index of the maximum value is : {}", index));
    log.info(&format!("Match score for it is: {}", score));

    let best_reference = response
        .reference
        .get(index)
        .with_context(|| format!("no reference signature at index {}", index))?;

    let query_image = out_dir.join(QUERY_IMAGE_NAME);
    let reference_image = out_dir.join(REFERENCE_IMAGE_NAME);

    codec::decode_to_file(codec::data_url_payload(&top_query.image), &query_image)
        .context("writing query signature image")?;
    codec::decode_to_file(
        codec::data_url_payload(&best_reference.image),
        &reference_image,
    )
    .context("writing reference signature image")?;

    Ok(MatchOutcome {
        reference_image,
        query_image,
        reference_confidence: top_reference.confidence,
        query_confidence: top_query.confidence,
        score,
    })
}

/// Convenience entry point matching the test-suite keyword: writes the two
/// images into the current working directory.
pub fn read_matching_response(response: &Response, log: &dyn MatchLog) -> Result<MatchOutcome> {
    run_matching_at(response, ".", log)
}
