// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Phased Worker Pool
//!
//! A fixed pool of worker threads executing a `PhasedJob` in three phases:
//! `initialize`, `work` and `cleanup`. Each hook runs exactly once on every
//! worker, and every worker finishes a phase before any worker starts the
//! next one.
//!
//! The barrier between phases is rayon's `ThreadPool::broadcast`, which runs
//! a closure once per pool thread and returns only after all of them have
//! completed. The `work` phase returns one output per worker, collected in
//! worker-index order.
//!
//! ## Usage
//!
//! ```rust
//! use sumguard_bulk::harness::{PhasedJob, PhasedPool, WorkerContext};
//!
//! struct SumOfSquares<'a>(&'a [u64]);
//!
//! impl PhasedJob for SumOfSquares<'_> {
//!     type Output = u64;
//!
//!     fn work(&self, worker: WorkerContext) -> u64 {
//!         self.0[worker.chunk(self.0.len())].iter().map(|x| x * x).sum()
//!     }
//! }
//!
//! let data: Vec<u64> = (1..=100).collect();
//! let pool = PhasedPool::new(Some(4)).unwrap();
//! let run = pool.run(&SumOfSquares(&data));
//! assert_eq!(run.num_workers(), 4);
//! assert_eq!(run.outputs().iter().sum::<u64>(), 338_350);
//! ```

use crate::error::BulkError;
use std::{
    ops::Range,
    time::{Duration, Instant},
};
use tracing::debug;

/// The position of a worker within its pool, passed to every phase hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkerContext {
    index: usize,
    num_workers: usize,
}

impl WorkerContext {
    /// Creates a new `WorkerContext`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= num_workers`.
    #[inline]
    pub fn new(index: usize, num_workers: usize) -> Self {
        assert!(
            index < num_workers,
            "Invalid worker context: index must be less than num_workers"
        );
        Self { index, num_workers }
    }

    /// Returns the index of this worker, in `0..num_workers`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sumguard_bulk::harness::WorkerContext;
    /// assert_eq!(WorkerContext::new(2, 4).index(), 2);
    /// ```
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the number of workers in the pool.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sumguard_bulk::harness::WorkerContext;
    /// assert_eq!(WorkerContext::new(2, 4).num_workers(), 4);
    /// ```
    #[inline]
    pub const fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Returns this worker's share of the index range `0..len`.
    ///
    /// The chunks of all workers are contiguous, disjoint, ordered by worker
    /// index and together cover `0..len`. Their sizes differ by at most one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sumguard_bulk::harness::WorkerContext;
    /// let chunks: Vec<_> = (0..3).map(|i| WorkerContext::new(i, 3).chunk(10)).collect();
    /// assert_eq!(chunks, vec![0..4, 4..7, 7..10]);
    /// ```
    #[inline]
    pub fn chunk(&self, len: usize) -> Range<usize> {
        let base = len / self.num_workers;
        let remainder = len % self.num_workers;
        let start = self.index * base + self.index.min(remainder);
        let size = base + usize::from(self.index < remainder);
        start..start + size
    }
}

/// The phases of a `PhasedJob`, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Initialize,
    Work,
    Cleanup,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Initialize => "initialize",
            Self::Work => "work",
            Self::Cleanup => "cleanup",
        };
        f.write_str(name)
    }
}

/// A batch of independent computations executed by every worker of a
/// `PhasedPool`.
///
/// The job is shared by reference between all workers, so it must be `Sync`;
/// any per-worker state belongs behind interior mutability keyed by
/// `WorkerContext::index`.
pub trait PhasedJob: Sync {
    /// The value each worker produces in the work phase.
    type Output: Send;

    /// Runs once per worker before any worker starts `work`.
    fn initialize(&self, _worker: WorkerContext) {}

    /// Runs once per worker after all workers finished `initialize`.
    fn work(&self, worker: WorkerContext) -> Self::Output;

    /// Runs once per worker after all workers finished `work`.
    fn cleanup(&self, _worker: WorkerContext) {}
}

/// The result of running a `PhasedJob`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseRun<O> {
    outputs: Vec<O>,
    elapsed: [Duration; 3],
}

impl<O> PhaseRun<O> {
    /// Returns the work-phase outputs, indexed by worker.
    #[inline]
    pub fn outputs(&self) -> &[O] {
        &self.outputs
    }

    /// Consumes the run, returning the work-phase outputs indexed by worker.
    #[inline]
    pub fn into_outputs(self) -> Vec<O> {
        self.outputs
    }

    /// Returns the number of workers that ran the job, one per output.
    #[inline]
    pub fn num_workers(&self) -> usize {
        self.outputs.len()
    }

    /// Returns the wall-clock duration of `phase`.
    #[inline]
    pub fn elapsed(&self, phase: Phase) -> Duration {
        match phase {
            Phase::Initialize => self.elapsed[0],
            Phase::Work => self.elapsed[1],
            Phase::Cleanup => self.elapsed[2],
        }
    }

    /// Returns the total wall-clock duration of all phases.
    #[inline]
    pub fn total_elapsed(&self) -> Duration {
        self.elapsed.iter().sum()
    }
}

/// A fixed pool of worker threads running phased jobs.
#[derive(Debug)]
pub struct PhasedPool {
    pool: rayon::ThreadPool,
}

impl PhasedPool {
    /// Creates a pool with `num_threads` workers, or rayon's default thread
    /// count when `None`.
    ///
    /// # Errors
    ///
    /// Returns `BulkError::InvalidConfig` for `Some(0)` and
    /// `BulkError::PoolBuild` if the threads cannot be spawned.
    pub fn new(num_threads: Option<usize>) -> Result<Self, BulkError> {
        let mut builder =
            rayon::ThreadPoolBuilder::new().thread_name(|i| format!("sumguard-worker-{i}"));
        match num_threads {
            Some(0) => {
                return Err(BulkError::InvalidConfig(
                    "num_threads must be positive".to_string(),
                ));
            }
            Some(n) => builder = builder.num_threads(n),
            None => {}
        }
        let pool = builder.build()?;
        debug!(workers = pool.current_num_threads(), "phased pool started");
        Ok(Self { pool })
    }

    /// Returns the number of worker threads.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sumguard_bulk::harness::PhasedPool;
    /// let pool = PhasedPool::new(Some(3)).unwrap();
    /// assert_eq!(pool.num_workers(), 3);
    /// ```
    #[inline]
    pub fn num_workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Runs `op` inside the pool, so nested rayon calls use its threads.
    #[inline]
    pub fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }

    /// Runs `job` through all three phases on every worker.
    pub fn run<J>(&self, job: &J) -> PhaseRun<J::Output>
    where
        J: PhasedJob,
    {
        let mut elapsed = [Duration::ZERO; 3];

        let start = Instant::now();
        self.pool
            .broadcast(|ctx| job.initialize(WorkerContext::new(ctx.index(), ctx.num_threads())));
        elapsed[0] = start.elapsed();
        debug!(phase = %Phase::Initialize, elapsed = ?elapsed[0], "phase complete");

        let start = Instant::now();
        let outputs = self
            .pool
            .broadcast(|ctx| job.work(WorkerContext::new(ctx.index(), ctx.num_threads())));
        elapsed[1] = start.elapsed();
        debug!(phase = %Phase::Work, elapsed = ?elapsed[1], "phase complete");

        let start = Instant::now();
        self.pool
            .broadcast(|ctx| job.cleanup(WorkerContext::new(ctx.index(), ctx.num_threads())));
        elapsed[2] = start.elapsed();
        debug!(phase = %Phase::Cleanup, elapsed = ?elapsed[2], "phase complete");

        PhaseRun { outputs, elapsed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    #[test]
    fn test_chunks_cover_range_without_overlap() {
        for workers in 1..=7 {
            for len in [0, 1, 5, 6, 7, 100, 101] {
                let mut next = 0;
                for i in 0..workers {
                    let chunk = WorkerContext::new(i, workers).chunk(len);
                    assert_eq!(chunk.start, next, "workers = {workers}, len = {len}");
                    next = chunk.end;
                }
                assert_eq!(next, len);
            }
        }
    }

    #[test]
    fn test_chunk_sizes_are_balanced() {
        let sizes: Vec<usize> = (0..4).map(|i| WorkerContext::new(i, 4).chunk(10).len()).collect();
        assert_eq!(sizes, vec![3, 3, 2, 2]);
    }

    #[test]
    #[should_panic(expected = "Invalid worker context")]
    fn test_worker_context_index_out_of_range_panics() {
        let _ = WorkerContext::new(3, 3);
    }

    #[test]
    fn test_zero_threads_rejected() {
        assert!(matches!(
            PhasedPool::new(Some(0)),
            Err(BulkError::InvalidConfig(_))
        ));
    }

    /// Records, per phase, how many workers had completed the previous phase
    /// when each hook started.
    struct BarrierProbe {
        initialized: AtomicUsize,
        worked: AtomicUsize,
        cleaned: AtomicUsize,
        seen_at_work: Mutex<Vec<usize>>,
        seen_at_cleanup: Mutex<Vec<usize>>,
    }

    impl BarrierProbe {
        fn new() -> Self {
            Self {
                initialized: AtomicUsize::new(0),
                worked: AtomicUsize::new(0),
                cleaned: AtomicUsize::new(0),
                seen_at_work: Mutex::new(Vec::new()),
                seen_at_cleanup: Mutex::new(Vec::new()),
            }
        }
    }

    impl PhasedJob for BarrierProbe {
        type Output = usize;

        fn initialize(&self, _worker: WorkerContext) {
            self.initialized.fetch_add(1, Ordering::SeqCst);
        }

        fn work(&self, worker: WorkerContext) -> usize {
            let seen = self.initialized.load(Ordering::SeqCst);
            self.seen_at_work.lock().unwrap().push(seen);
            self.worked.fetch_add(1, Ordering::SeqCst);
            worker.index()
        }

        fn cleanup(&self, _worker: WorkerContext) {
            let seen = self.worked.load(Ordering::SeqCst);
            self.seen_at_cleanup.lock().unwrap().push(seen);
            self.cleaned.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_phase_barrier_and_output_order() {
        let pool = PhasedPool::new(Some(4)).unwrap();
        let probe = BarrierProbe::new();
        let run = pool.run(&probe);

        assert_eq!(run.num_workers(), 4);
        assert_eq!(run.outputs(), &[0, 1, 2, 3]);
        assert_eq!(probe.initialized.load(Ordering::SeqCst), 4);
        assert_eq!(probe.worked.load(Ordering::SeqCst), 4);
        assert_eq!(probe.cleaned.load(Ordering::SeqCst), 4);

        // Every worker saw the previous phase fully completed.
        assert!(probe.seen_at_work.lock().unwrap().iter().all(|&n| n == 4));
        assert!(probe.seen_at_cleanup.lock().unwrap().iter().all(|&n| n == 4));
    }

    #[test]
    fn test_run_reports_timings() {
        let pool = PhasedPool::new(Some(2)).unwrap();
        let run = pool.run(&BarrierProbe::new());
        assert_eq!(
            run.total_elapsed(),
            run.elapsed(Phase::Initialize) + run.elapsed(Phase::Work) + run.elapsed(Phase::Cleanup)
        );
    }

    #[test]
    fn test_pool_is_reusable() {
        let pool = PhasedPool::new(Some(3)).unwrap();
        for _ in 0..5 {
            let run = pool.run(&BarrierProbe::new());
            assert_eq!(run.into_outputs(), vec![0, 1, 2]);
        }
    }

    #[test]
    fn test_install_runs_inside_pool() {
        let pool = PhasedPool::new(Some(2)).unwrap();
        let threads = pool.install(rayon::current_num_threads);
        assert_eq!(threads, 2);
    }
}
