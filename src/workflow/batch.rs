use crate::{
    spotify::{Catalog, MAX_ITEMS_PER_REQUEST},
    success,
    types::PlaylistRef,
    warning,
};

/// Result of one append call. `index` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    Added {
        index: usize,
        count: usize,
        snapshot_id: String,
    },
    Failed {
        index: usize,
        count: usize,
        error: String,
    },
}

impl BatchOutcome {
    pub fn index(&self) -> usize {
        match self {
            BatchOutcome::Added { index, .. } | BatchOutcome::Failed { index, .. } => *index,
        }
    }

    pub fn count(&self) -> usize {
        match self {
            BatchOutcome::Added { count, .. } | BatchOutcome::Failed { count, .. } => *count,
        }
    }

    pub fn is_added(&self) -> bool {
        matches!(self, BatchOutcome::Added { .. })
    }
}

/// Appends `uris` to `playlist` in chunks of at most 100.
///
/// Chunks keep the input order and are submitted one after another. A failed
/// chunk is logged and recorded, and the remaining chunks are still sent.
/// An empty `uris` slice makes no calls.
pub fn import_batches<C: Catalog + ?Sized>(
    catalog: &C,
    playlist: &PlaylistRef,
    uris: &[String],
) -> Vec<BatchOutcome> {
    uris.chunks(MAX_ITEMS_PER_REQUEST)
        .enumerate()
        .fold(Vec::new(), |mut outcomes, (i, batch)| {
            let index = i + 1;
            let count = batch.len();

            let outcome = match catalog.add_items(&playlist.id, batch) {
                Ok(snapshot_id) => {
                    success!("Added batch of {} tracks to the playlist!", count);
                    BatchOutcome::Added {
                        index,
                        count,
                        snapshot_id,
                    }
                }
                Err(e) => {
                    warning!("Error adding batch {}: {}", index, e);
                    BatchOutcome::Failed {
                        index,
                        count,
                        error: e.to_string(),
                    }
                }
            };

            outcomes.push(outcome);
            outcomes
        })
}
