//! Scoped randomness authority
//!
//! The single owner of a session's randomness. Every domain draws from its own
//! stream keyed `"<seed>_<domain>"`, and the cosmic timeline runs once at
//! construction on the `"<seed>_cosmic-timeline"` stream. Nothing here is
//! process-wide, so sessions for different seeds never share state.

use std::collections::HashMap;

use sampling::{KeyedSource, SeededStream};
use tracing::trace;

use crate::config::TimelineConfig;
use crate::domain::Domain;
use crate::timeline::{self, OverrideTable};

/// Stream scope reserved for the cosmic timeline
pub const TIMELINE_SCOPE: &str = "cosmic-timeline";

/// Owns the seed, the per-domain streams and the override table
#[derive(Debug)]
pub struct RandomnessAuthority<S = SeededStream> {
    seed: String,
    streams: HashMap<Domain, S>,
    overrides: OverrideTable,
}

impl<S: KeyedSource> RandomnessAuthority<S> {
    /// Creates the authority and runs the timeline
    ///
    /// When `timeline.enabled` is false the override table is empty and no
    /// timeline stream is created.
    pub fn new(seed: impl Into<String>, timeline: &TimelineConfig) -> Self {
        let seed = seed.into();
        let overrides = if timeline.enabled {
            let mut stream = S::from_key(&stream_key(&seed, TIMELINE_SCOPE));
            timeline::generate(&mut stream, timeline)
        } else {
            OverrideTable::new()
        };

        Self {
            seed,
            streams: HashMap::new(),
            overrides,
        }
    }

    /// Fix constants on top of the timeline output
    ///
    /// A pinned value replaces whatever the timeline produced under the same
    /// name. Streams are untouched, so pinning one constant leaves every draw
    /// where it was.
    pub fn with_pinned<I, K>(mut self, pinned: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        for (name, value) in pinned {
            self.overrides.insert(name, value);
        }
        self
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// The stream bound to `domain`, created on first access
    ///
    /// Repeated calls hand back the same stream, so its position carries over
    /// from one call to the next.
    pub fn scoped_stream(&mut self, domain: Domain) -> &mut S {
        stream_entry(&mut self.streams, &self.seed, domain)
    }

    /// Raw constants from the cosmic timeline plus any pinned values
    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    /// Stream and override table together, for evaluating one domain
    pub fn scoped(&mut self, domain: Domain) -> (&mut S, &OverrideTable) {
        let stream = stream_entry(&mut self.streams, &self.seed, domain);
        (stream, &self.overrides)
    }
}

fn stream_key(seed: &str, scope: &str) -> String {
    format!("{seed}_{scope}")
}

fn stream_entry<'a, S: KeyedSource>(
    streams: &'a mut HashMap<Domain, S>,
    seed: &str,
    domain: Domain,
) -> &'a mut S {
    streams.entry(domain).or_insert_with(|| {
        let key = stream_key(seed, domain.label());
        trace!(%domain, key = %key, "Creating scoped stream");
        S::from_key(&key)
    })
}
