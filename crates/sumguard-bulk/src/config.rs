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

//! # Bulk Configuration
//!
//! `BulkConfig` selects how a `BulkEvaluator` spreads element-wise work:
//!
//! - `ExecutionStrategy::Sequential` evaluates on the calling thread.
//! - `ExecutionStrategy::WorkStealing` uses rayon indexed parallel iterators,
//!   on a dedicated pool when `num_threads` is set and on the global rayon
//!   pool otherwise.
//! - `ExecutionStrategy::Phased` hands every worker of a fixed `PhasedPool`
//!   one contiguous chunk of the index range.
//!
//! Inputs shorter than `sequential_cutoff` are always evaluated sequentially;
//! below that size thread coordination costs more than the predicates.
//!
//! ## Usage
//!
//! ```rust
//! use sumguard_bulk::config::{BulkConfig, ExecutionStrategy};
//!
//! let config = BulkConfig::default()
//!     .with_strategy(ExecutionStrategy::Phased)
//!     .with_num_threads(4)
//!     .with_sequential_cutoff(0);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.num_threads(), Some(4));
//! ```

use crate::error::BulkError;

/// Default number of elements below which evaluation stays sequential.
pub const DEFAULT_SEQUENTIAL_CUTOFF: usize = 4096;

/// How element-wise work is distributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExecutionStrategy {
    /// Evaluate on the calling thread.
    Sequential,
    /// Evaluate with rayon's work-stealing parallel iterators.
    #[default]
    WorkStealing,
    /// Evaluate one contiguous chunk per worker of a fixed pool.
    Phased,
}

impl std::fmt::Display for ExecutionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Sequential => "Sequential",
            Self::WorkStealing => "WorkStealing",
            Self::Phased => "Phased",
        };
        f.write_str(name)
    }
}

/// Configuration of a `BulkEvaluator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BulkConfig {
    strategy: ExecutionStrategy,
    num_threads: Option<usize>,
    sequential_cutoff: usize,
}

impl Default for BulkConfig {
    fn default() -> Self {
        Self {
            strategy: ExecutionStrategy::default(),
            num_threads: None,
            sequential_cutoff: DEFAULT_SEQUENTIAL_CUTOFF,
        }
    }
}

impl BulkConfig {
    /// Creates a configuration with the given strategy and default settings
    /// otherwise.
    #[inline]
    pub fn new(strategy: ExecutionStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Sets the execution strategy.
    #[inline]
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the number of worker threads of a dedicated pool.
    #[inline]
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    /// Sets the input length below which evaluation stays sequential.
    #[inline]
    pub fn with_sequential_cutoff(mut self, sequential_cutoff: usize) -> Self {
        self.sequential_cutoff = sequential_cutoff;
        self
    }

    /// Returns the execution strategy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sumguard_bulk::config::{BulkConfig, ExecutionStrategy};
    /// let config = BulkConfig::new(ExecutionStrategy::Sequential);
    /// assert_eq!(config.strategy(), ExecutionStrategy::Sequential);
    /// ```
    #[inline]
    pub fn strategy(&self) -> ExecutionStrategy {
        self.strategy
    }

    /// Returns the size of the dedicated pool, or `None` when the global
    /// rayon pool (or its default thread count) is used.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sumguard_bulk::config::BulkConfig;
    /// assert_eq!(BulkConfig::default().num_threads(), None);
    /// assert_eq!(BulkConfig::default().with_num_threads(4).num_threads(), Some(4));
    /// ```
    #[inline]
    pub fn num_threads(&self) -> Option<usize> {
        self.num_threads
    }

    /// Returns the input length below which evaluation stays sequential.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sumguard_bulk::config::{BulkConfig, DEFAULT_SEQUENTIAL_CUTOFF};
    /// assert_eq!(BulkConfig::default().sequential_cutoff(), DEFAULT_SEQUENTIAL_CUTOFF);
    /// ```
    #[inline]
    pub fn sequential_cutoff(&self) -> usize {
        self.sequential_cutoff
    }

    /// Checks that the configuration can be used to build an evaluator.
    ///
    /// # Errors
    ///
    /// Returns `BulkError::InvalidConfig` if `num_threads` is `Some(0)`.
    pub fn validate(&self) -> Result<(), BulkError> {
        if self.num_threads == Some(0) {
            return Err(BulkError::InvalidConfig(
                "num_threads must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the strategy to use for an input of `len` elements.
    #[inline]
    pub fn effective_strategy(&self, len: usize) -> ExecutionStrategy {
        if len < self.sequential_cutoff {
            ExecutionStrategy::Sequential
        } else {
            self.strategy
        }
    }
}

impl std::fmt::Display for BulkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.num_threads {
            Some(n) => write!(
                f,
                "BulkConfig(strategy: {}, num_threads: {}, sequential_cutoff: {})",
                self.strategy, n, self.sequential_cutoff
            ),
            None => write!(
                f,
                "BulkConfig(strategy: {}, num_threads: auto, sequential_cutoff: {})",
                self.strategy, self.sequential_cutoff
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = BulkConfig::default();
        assert_eq!(config.strategy(), ExecutionStrategy::WorkStealing);
        assert_eq!(config.num_threads(), None);
        assert_eq!(config.sequential_cutoff(), DEFAULT_SEQUENTIAL_CUTOFF);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = BulkConfig::new(ExecutionStrategy::Sequential)
            .with_num_threads(3)
            .with_sequential_cutoff(10);
        assert_eq!(config.strategy(), ExecutionStrategy::Sequential);
        assert_eq!(config.num_threads(), Some(3));
        assert_eq!(config.sequential_cutoff(), 10);
    }

    #[test]
    fn test_zero_threads_is_invalid() {
        let config = BulkConfig::default().with_num_threads(0);
        assert!(matches!(
            config.validate(),
            Err(BulkError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_effective_strategy_respects_cutoff() {
        let config = BulkConfig::new(ExecutionStrategy::Phased).with_sequential_cutoff(100);
        assert_eq!(config.effective_strategy(99), ExecutionStrategy::Sequential);
        assert_eq!(config.effective_strategy(100), ExecutionStrategy::Phased);
    }

    #[test]
    fn test_display() {
        let config = BulkConfig::new(ExecutionStrategy::Phased).with_num_threads(2);
        assert_eq!(
            format!("{}", config),
            "BulkConfig(strategy: Phased, num_threads: 2, sequential_cutoff: 4096)"
        );
    }
}
