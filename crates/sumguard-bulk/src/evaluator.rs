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

//! # Bulk Evaluator
//!
//! Applies the scalar predicates and the safe sum of `sumguard-core` to every
//! index of one or two sequences. All strategies produce the same,
//! index-aligned output; they only differ in which threads compute it.
//!
//! Pairwise forms check the lengths before any element is evaluated and
//! fail with `BulkError::LengthMismatch`, producing no partial result.

use crate::{
    config::{BulkConfig, ExecutionStrategy},
    error::BulkError,
    harness::{PhasedJob, PhasedPool, WorkerContext},
};
use rayon::prelude::*;
use std::marker::PhantomData;
use sumguard_core::{
    num::numeric::GuardNumeric,
    ops::{
        overflow::would_overflow,
        sum::{SafeAdd, safe_add},
        underflow::would_underflow,
    },
};
use tracing::{debug, trace};

/// Evaluates an index kernel over the worker's contiguous chunk.
struct ChunkJob<'a, F, R> {
    len: usize,
    kernel: &'a F,
    _output: PhantomData<fn() -> R>,
}

impl<F, R> PhasedJob for ChunkJob<'_, F, R>
where
    F: Fn(usize) -> R + Sync,
    R: Send,
{
    type Output = Vec<R>;

    fn work(&self, worker: WorkerContext) -> Vec<R> {
        worker.chunk(self.len).map(self.kernel).collect()
    }
}

/// A configurable engine for element-wise evaluation over sequences.
///
/// # Examples
///
/// ```rust
/// use sumguard_bulk::{
///     config::{BulkConfig, ExecutionStrategy},
///     evaluator::BulkEvaluator,
/// };
///
/// let config = BulkConfig::new(ExecutionStrategy::Phased)
///     .with_num_threads(2)
///     .with_sequential_cutoff(0);
/// let evaluator = BulkEvaluator::new(config).unwrap();
///
/// let lhs = [1.0, f64::INFINITY, f64::MIN];
/// let rhs = [2.0, f64::INFINITY, f64::MIN];
/// assert_eq!(
///     evaluator.would_underflow_pairwise(&lhs, &rhs).unwrap(),
///     vec![false, true, true]
/// );
/// assert_eq!(
///     evaluator.safe_add_pairwise(&lhs[..2], &rhs[..2]).unwrap(),
///     vec![3.0, f64::INFINITY]
/// );
/// ```
#[derive(Debug)]
pub struct BulkEvaluator {
    config: BulkConfig,
    pool: Option<PhasedPool>,
}

impl Default for BulkEvaluator {
    /// Work stealing on the global rayon pool with the default cutoff.
    fn default() -> Self {
        Self {
            config: BulkConfig::default(),
            pool: None,
        }
    }
}

impl BulkEvaluator {
    /// Creates an evaluator for `config`, spawning a dedicated pool when the
    /// strategy needs one.
    ///
    /// # Errors
    ///
    /// Returns `BulkError::InvalidConfig` for an invalid configuration and
    /// `BulkError::PoolBuild` if the pool cannot be created.
    pub fn new(config: BulkConfig) -> Result<Self, BulkError> {
        config.validate()?;
        let pool = match config.strategy() {
            ExecutionStrategy::Sequential => None,
            ExecutionStrategy::WorkStealing => config
                .num_threads()
                .map(|n| PhasedPool::new(Some(n)))
                .transpose()?,
            ExecutionStrategy::Phased => Some(PhasedPool::new(config.num_threads())?),
        };
        debug!(%config, "bulk evaluator configured");
        Ok(Self { config, pool })
    }

    /// Returns the configuration this evaluator was built with.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sumguard_bulk::{config::ExecutionStrategy, evaluator::BulkEvaluator};
    /// let evaluator = BulkEvaluator::default();
    /// assert_eq!(evaluator.config().strategy(), ExecutionStrategy::WorkStealing);
    /// ```
    #[inline]
    pub fn config(&self) -> &BulkConfig {
        &self.config
    }

    /// Evaluates `would_underflow(lhs[i], rhs[i])` for every index.
    ///
    /// # Errors
    ///
    /// Returns `BulkError::LengthMismatch` if the sequences differ in length.
    pub fn would_underflow_pairwise<T>(&self, lhs: &[T], rhs: &[T]) -> Result<Vec<bool>, BulkError>
    where
        T: GuardNumeric,
    {
        self.zip_map(lhs, rhs, would_underflow::<T>)
    }

    /// Evaluates `would_underflow(lhs[i], rhs)` for every index.
    pub fn would_underflow_scalar_rhs<T>(&self, lhs: &[T], rhs: T) -> Vec<bool>
    where
        T: GuardNumeric,
    {
        self.map_indexed(lhs.len(), |i| would_underflow(lhs[i], rhs))
    }

    /// Evaluates `would_underflow(lhs, rhs[i])` for every index.
    ///
    /// Underflow is symmetric in its operands, so this delegates to
    /// `would_underflow_scalar_rhs` with the operands swapped.
    #[inline]
    pub fn would_underflow_scalar_lhs<T>(&self, lhs: T, rhs: &[T]) -> Vec<bool>
    where
        T: GuardNumeric,
    {
        self.would_underflow_scalar_rhs(rhs, lhs)
    }

    /// Evaluates `would_overflow(lhs[i], rhs[i])` for every index.
    ///
    /// # Errors
    ///
    /// Returns `BulkError::LengthMismatch` if the sequences differ in length.
    pub fn would_overflow_pairwise<T>(&self, lhs: &[T], rhs: &[T]) -> Result<Vec<bool>, BulkError>
    where
        T: GuardNumeric,
    {
        self.zip_map(lhs, rhs, would_overflow::<T>)
    }

    /// Evaluates `would_overflow(lhs[i], rhs)` for every index.
    pub fn would_overflow_scalar_rhs<T>(&self, lhs: &[T], rhs: T) -> Vec<bool>
    where
        T: GuardNumeric,
    {
        self.map_indexed(lhs.len(), |i| would_overflow(lhs[i], rhs))
    }

    /// Evaluates `would_overflow(lhs, rhs[i])` for every index.
    pub fn would_overflow_scalar_lhs<T>(&self, lhs: T, rhs: &[T]) -> Vec<bool>
    where
        T: GuardNumeric,
    {
        self.map_indexed(rhs.len(), |i| would_overflow(lhs, rhs[i]))
    }

    /// Computes `safe_add(lhs[i], rhs[i])` for every index.
    ///
    /// Like the scalar evaluator this does not check the finite bounds; run
    /// the predicates first.
    ///
    /// # Errors
    ///
    /// Returns `BulkError::LengthMismatch` if the sequences differ in length.
    pub fn safe_add_pairwise<T>(&self, lhs: &[T], rhs: &[T]) -> Result<Vec<T>, BulkError>
    where
        T: SafeAdd,
    {
        self.zip_map(lhs, rhs, safe_add::<T>)
    }

    /// Computes `safe_add(lhs[i], rhs)` for every index.
    pub fn safe_add_scalar_rhs<T>(&self, lhs: &[T], rhs: T) -> Vec<T>
    where
        T: SafeAdd,
    {
        self.map_indexed(lhs.len(), |i| safe_add(lhs[i], rhs))
    }

    fn zip_map<T, R, F>(&self, lhs: &[T], rhs: &[T], f: F) -> Result<Vec<R>, BulkError>
    where
        T: Copy + Sync,
        R: Send,
        F: Fn(T, T) -> R + Sync,
    {
        if lhs.len() != rhs.len() {
            debug!(lhs = lhs.len(), rhs = rhs.len(), "rejecting sequences of unequal length");
            return Err(BulkError::LengthMismatch {
                lhs: lhs.len(),
                rhs: rhs.len(),
            });
        }
        Ok(self.map_indexed(lhs.len(), |i| f(lhs[i], rhs[i])))
    }

    /// Evaluates `kernel(i)` for `i in 0..len`, returning results in index order.
    fn map_indexed<R, F>(&self, len: usize, kernel: F) -> Vec<R>
    where
        R: Send,
        F: Fn(usize) -> R + Sync,
    {
        let strategy = self.config.effective_strategy(len);
        trace!(len, %strategy, "evaluating sequence");

        match (strategy, &self.pool) {
            (ExecutionStrategy::Sequential, _) => (0..len).map(&kernel).collect(),
            (ExecutionStrategy::WorkStealing, Some(pool)) => {
                pool.install(|| (0..len).into_par_iter().map(&kernel).collect())
            }
            (ExecutionStrategy::WorkStealing, None) => {
                (0..len).into_par_iter().map(&kernel).collect()
            }
            (ExecutionStrategy::Phased, Some(pool)) => {
                let job = ChunkJob {
                    len,
                    kernel: &kernel,
                    _output: PhantomData,
                };
                let mut out = Vec::with_capacity(len);
                for chunk in pool.run(&job).into_outputs() {
                    out.extend(chunk);
                }
                out
            }
            // Unreachable: `new` always builds a pool for `Phased`, and
            // `Default` selects `WorkStealing`.
            (ExecutionStrategy::Phased, None) => (0..len).map(&kernel).collect(),
        }
    }
}
