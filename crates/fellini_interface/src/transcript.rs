//! The agent transcript stream.
//!
//! Every provider call emits two records: one [`Direction::Outgoing`] with
//! the instruction text and one [`Direction::Incoming`] with the response,
//! each tagged with the emitting agent's name and role label. The coordinator
//! additionally narrates progress with [`Direction::Status`] records.
//!
//! An interactive display can subscribe by implementing [`TranscriptSink`];
//! the pipeline never depends on whether a subscriber is present.

use std::sync::Mutex;

/// Direction of a transcript record relative to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Direction {
    /// An instruction on its way to the provider
    #[display("outgoing")]
    Outgoing,
    /// A response received from the provider
    #[display("incoming")]
    Incoming,
    /// Coordinator progress narration, not tied to a single call
    #[display("status")]
    Status,
}

/// One record in the agent transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptRecord {
    /// Name of the emitting agent (e.g., "Screenwriter")
    pub agent: String,
    /// Role label of the emitting agent (e.g., "Final Screenplay Writer")
    pub role: String,
    /// Record direction
    pub direction: Direction,
    /// The instruction, response, or narration text
    pub text: String,
}

impl TranscriptRecord {
    /// Create a record with an explicit direction.
    pub fn new(
        agent: impl Into<String>,
        role: impl Into<String>,
        direction: Direction,
        text: impl Into<String>,
    ) -> Self {
        Self {
            agent: agent.into(),
            role: role.into(),
            direction,
            text: text.into(),
        }
    }

    /// Record an instruction being sent to the provider.
    pub fn outgoing(
        agent: impl Into<String>,
        role: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self::new(agent, role, Direction::Outgoing, text)
    }

    /// Record a response received from the provider.
    pub fn incoming(
        agent: impl Into<String>,
        role: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self::new(agent, role, Direction::Incoming, text)
    }

    /// Record coordinator progress narration.
    pub fn status(
        agent: impl Into<String>,
        role: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self::new(agent, role, Direction::Status, text)
    }
}

/// Receiver for transcript records.
///
/// Implementations must tolerate being called from the single pipeline task
/// for the whole duration of a run. Sinks observe; they cannot interrupt.
pub trait TranscriptSink: Send + Sync {
    /// Accept one transcript record.
    fn record(&self, record: TranscriptRecord);
}

/// Default sink that forwards records to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TranscriptSink for TracingSink {
    fn record(&self, record: TranscriptRecord) {
        tracing::info!(
            agent = %record.agent,
            role = %record.role,
            direction = %record.direction,
            "{}",
            record.text
        );
    }
}

/// Sink that collects records in memory.
///
/// Useful for tests and for display surfaces that re-render the full
/// transcript after every record.
///
/// # Examples
///
/// ```
/// use fellini_interface::{MemorySink, TranscriptRecord, TranscriptSink};
///
/// let sink = MemorySink::default();
/// sink.record(TranscriptRecord::status("Director", "Coordinator", "Starting..."));
/// assert_eq!(sink.records().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<TranscriptRecord>>,
}

impl MemorySink {
    /// Snapshot of all records received so far, in arrival order.
    pub fn records(&self) -> Vec<TranscriptRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl TranscriptSink for MemorySink {
    fn record(&self, record: TranscriptRecord) {
        self.records.lock().unwrap().push(record);
    }
}
