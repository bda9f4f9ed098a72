//! Fixed fan-out/join task runner.
//!
//! [`invoke`] starts a fixed number of units of work on the rayon thread pool and blocks until all
//! of them have finished. Units report results by writing into buffers the caller has already
//! split into disjoint parts; there is no return channel.

pub use crate::config::worker_count;

/// Runs `worker_count()` units of work in parallel and waits for all of them.
///
/// `factory` is called on the current thread, once per unit, with the unit's index and the total
/// number of units. The units it returns are then run concurrently. If any unit panics, the panic
/// is propagated to the caller after every unit has finished.
///
/// # Examples
///
/// ```
/// # use seven_algebra::parallel;
/// let mut results = vec![0; parallel::worker_count()];
/// let mut slots = results.iter_mut();
/// parallel::invoke(|index, _count| {
///     let slot = slots.next();
///     move || {
///         if let Some(slot) = slot {
///             *slot = index * 10;
///         }
///     }
/// });
/// assert!(results.iter().enumerate().all(|(i, &r)| r == i * 10));
/// ```
pub fn invoke<F, U>(factory: F)
where
    F: FnMut(usize, usize) -> U,
    U: FnOnce() + Send,
{
    invoke_n(worker_count(), factory)
}

fn invoke_n<F, U>(count: usize, mut factory: F)
where
    F: FnMut(usize, usize) -> U,
    U: FnOnce() + Send,
{
    let units = (0..count)
        .map(|index| factory(index, count))
        .collect::<Vec<_>>();
    log::trace!("fan-out to {count} units");
    rayon::scope(|s| {
        for unit in units {
            s.spawn(move |_| unit());
        }
    });
}

/// Splits the row-major buffer `out` into contiguous row bands and runs `work` on each band in
/// parallel.
///
/// `work` receives the index of the band's first row and the band itself.
pub(crate) fn for_each_row_band<T, W>(out: &mut [T], columns: usize, work: W)
where
    T: Send,
    W: Fn(usize, &mut [T]) + Sync,
{
    let rows = out.len() / columns;
    let count = worker_count().min(rows).max(1);
    let rows_per_band = (rows + count - 1) / count;
    log::trace!("partitioning {rows} rows into bands of {rows_per_band}");

    let mut bands = out.chunks_mut(rows_per_band * columns).enumerate();
    let work = &work;
    invoke_n(count, |_, _| {
        let band = bands.next();
        move || {
            if let Some((i, band)) = band {
                work(i * rows_per_band, band);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn factory_sees_every_index() {
        let mut seen = vec![usize::MAX; 6];
        let mut slots = seen.iter_mut();
        invoke_n(6, |index, count| {
            assert_eq!(count, 6);
            let slot = slots.next();
            move || {
                if let Some(slot) = slot {
                    *slot = index;
                }
            }
        });
        assert_eq!(seen, [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn all_units_finish_before_return() {
        let done = &AtomicUsize::new(0);
        invoke(|_, _| {
            move || {
                done.fetch_add(1, Ordering::Relaxed);
            }
        });
        assert_eq!(done.load(Ordering::Relaxed), worker_count());
    }

    #[test]
    #[should_panic]
    fn unit_panic_propagates() {
        invoke_n(3, |index, _| {
            move || {
                if index == 1 {
                    panic!("unit failed");
                }
            }
        });
    }

    #[test]
    fn row_bands_cover_every_row_once() {
        let columns = 3;
        for rows in [1, 2, 7, 50] {
            let mut out = vec![0usize; rows * columns];
            for_each_row_band(&mut out, columns, |first_row, band| {
                for (r, row) in band.chunks_exact_mut(columns).enumerate() {
                    for cell in row {
                        *cell += first_row + r + 1;
                    }
                }
            });
            let expected = (0..rows)
                .flat_map(|r| [r + 1; 3])
                .collect::<Vec<_>>();
            assert_eq!(out, expected);
        }
    }
}
