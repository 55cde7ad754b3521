//! Request-scoped editing session.
//!
//! An [`EditSession`] owns one source and the engine handles needed to
//! process it. Work is requested through discrete [`EditCommand`]s, each
//! handled synchronously and independently; the session keeps no state
//! between commands beyond the source itself.

use crate::config::CoreConfig;
use crate::edit::{ExportRequest, Region};
use crate::error::CoreResult;
use crate::external::{FfmpegSpawner, FfprobeExecutor};
use crate::processing::{EditOutput, cut_audio, export_audio};

/// A single edit to apply to the session's source.
#[derive(Debug, Clone, PartialEq)]
pub enum EditCommand {
    /// Remove the region and join what remains.
    CutRequested(Region),
    /// Re-encode with the given export parameters.
    ExportRequested(ExportRequest),
}

pub struct EditSession<S, P> {
    spawner: S,
    prober: P,
    config: CoreConfig,
    source: Vec<u8>,
    extension: String,
}

impl<S, P> EditSession<S, P>
where
    S: FfmpegSpawner + Sync,
    P: FfprobeExecutor,
{
    pub fn new(
        spawner: S,
        prober: P,
        config: CoreConfig,
        source: Vec<u8>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            spawner,
            prober,
            config,
            source,
            extension: extension.into(),
        }
    }

    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Runs `command` against the source.
    pub fn apply(&self, command: EditCommand) -> CoreResult<EditOutput> {
        match command {
            EditCommand::CutRequested(region) => cut_audio(
                &self.spawner,
                &self.prober,
                &self.config,
                &self.source,
                &self.extension,
                region,
            ),
            EditCommand::ExportRequested(request) => export_audio(
                &self.spawner,
                &self.prober,
                &self.config,
                &self.source,
                &self.extension,
                &request,
            ),
        }
    }

    /// Releases the session, handing back the source bytes.
    pub fn into_source(self) -> Vec<u8> {
        self.source
    }
}
