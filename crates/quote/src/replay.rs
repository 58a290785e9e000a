use std::collections::HashSet;

use lbc_primitives::Digest;
use parking_lot::Mutex;

/// Store of quote digests that have already been executed.
///
/// Authorization itself is stateless, callers that want at-most-once
/// execution keep one of these next to the bridge.
pub trait ConsumedQuoteStore: Send + Sync {
    /// Marks `digest` as consumed.  Returns `false` if it already was.
    fn try_consume(&self, digest: &Digest) -> bool;

    /// Undoes a consumption whose execution did not go through.
    fn release(&self, digest: &Digest);

    fn is_consumed(&self, digest: &Digest) -> bool;
}

/// Process-local [`ConsumedQuoteStore`].
#[derive(Debug, Default)]
pub struct InMemoryConsumedQuotes {
    consumed: Mutex<HashSet<Digest>>,
}

impl InMemoryConsumedQuotes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.consumed.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.consumed.lock().is_empty()
    }
}

impl ConsumedQuoteStore for InMemoryConsumedQuotes {
    fn try_consume(&self, digest: &Digest) -> bool {
        self.consumed.lock().insert(*digest)
    }

    fn release(&self, digest: &Digest) {
        self.consumed.lock().remove(digest);
    }

    fn is_consumed(&self, digest: &Digest) -> bool {
        self.consumed.lock().contains(digest)
    }
}
