//! Down-sampling of a matched list.

use crate::domain::{FileList, SamplePolicy};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Reduce `list` to at most `count` entries.
///
/// `Random` picks a seeded uniform subset and keeps the survivors in their
/// original order; `Prefix` keeps the first `count`. Lists already within the
/// cap are left alone.
pub fn sample(list: &mut FileList, count: usize, policy: SamplePolicy, seed: u64) {
    let total = list.len();
    if count >= total {
        return;
    }

    let files = list.files_mut();
    match policy {
        SamplePolicy::Prefix => files.truncate(count),
        SamplePolicy::Random => {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut keep = rand::seq::index::sample(&mut rng, total, count).into_vec();
            keep.sort_unstable();

            let taken = std::mem::take(files);
            let mut keep_iter = keep.into_iter().peekable();
            for (idx, path) in taken.into_iter().enumerate() {
                if keep_iter.peek() == Some(&idx) {
                    files.push(path);
                    keep_iter.next();
                }
            }
        }
    }

    tracing::debug!("Sampled {} of {} entries ({:?}, seed {})", files.len(), total, policy, seed);
}
