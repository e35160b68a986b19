use chrono::{DateTime, Utc};
use onft_core::error::StorageError;
use onft_core::Event;
use onft_store::{KvStore, StoreBatch};

/// Execution context for one registry operation.
///
/// A context is built fresh per operation by the host ledger's
/// dispatcher and carries everything the operation may touch: the
/// transaction-scoped store view, the ledger time, and the event sink.
/// It is an explicit value, never process-wide state, so tests can run
/// any number of isolated instances side by side.
pub struct TxContext<'a> {
    /// Transaction-scoped store view; discarded unless the operation
    /// commits
    pub batch: StoreBatch<'a>,
    block_time: DateTime<Utc>,
    events: Vec<Event>,
}

impl<'a> TxContext<'a> {
    pub fn new(store: &'a mut dyn KvStore, block_time: DateTime<Utc>) -> Self {
        Self {
            batch: StoreBatch::new(store),
            block_time,
            events: Vec::new(),
        }
    }

    /// The ledger time this operation executes at
    pub fn block_time(&self) -> DateTime<Utc> {
        self.block_time
    }

    /// Queue an event for emission. Events only become visible if the
    /// operation commits, keeping emission atomic with the mutation.
    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Events queued so far
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Apply all staged writes to the base store and hand the emitted
    /// events to the caller.
    pub fn commit(self) -> Result<Vec<Event>, StorageError> {
        self.batch.commit()?;
        Ok(self.events)
    }
}
