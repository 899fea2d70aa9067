use std::sync::Barrier;
use std::sync::atomic::{AtomicU64, Ordering};

use static_locals::LookupError;
use tracing::{debug, info};

use crate::AnyResult;

fn record_hit() -> u64 {
    static HITS: AtomicU64 = AtomicU64::new(0);
    static_locals::track!(HITS);
    HITS.fetch_add(1, Ordering::SeqCst) + 1
}

/// Races `readers` lookup threads against the first call of `record_hit`.
pub fn run(readers: usize) -> AnyResult<()> {
    let start = Barrier::new(readers + 1);

    let results: Vec<AnyResult<usize>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..readers)
            .map(|reader| {
                let start = &start;
                s.spawn(move || {
                    start.wait();
                    let mut misses = 0;
                    loop {
                        match static_locals::try_get_named::<AtomicU64>("HITS") {
                            Ok(hits) => {
                                debug!(
                                    reader,
                                    misses,
                                    hits = hits.load(Ordering::SeqCst),
                                    "registration became visible"
                                );
                                return Ok(misses);
                            }
                            Err(LookupError::NotFound { .. }) => {
                                misses += 1;
                                std::thread::yield_now();
                            }
                            Err(err) => return Err(err.to_string()),
                        }
                    }
                })
            })
            .collect();

        start.wait();
        record_hit();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|_| Err("reader thread panicked".to_owned())))
            .collect()
    });

    let mut total_misses = 0;
    for result in results {
        total_misses += result?;
    }
    let hits = static_locals::get_ref!(AtomicU64, HITS).load(Ordering::SeqCst);
    if hits != 1 {
        return Err(format!("record_hit ran once but HITS is {hits}"));
    }
    info!(readers, total_misses, "every reader saw a complete registration");
    Ok(())
}
