//! Fluent builder assembling decorators in a fixed order.

use super::config::PipelineConfig;
use super::error::BuildError;
use crate::core::{Composable, Error};
use crate::decorators;
use crate::executor::Executor;
use std::sync::Arc;
use std::time::Duration;

/// Builder for a decorated pipeline.
///
/// Layers are applied outermost first:
///
/// 1. catch (fallback)
/// 2. error publishers
/// 3. value publishers
/// 4. retry, optionally with delay
/// 5. timeout
///
/// So each attempt gets its own deadline, timeouts are retried like any other
/// failure, and the publishers and fallback see only the final outcome.
pub struct PipelineBuilder<T> {
    retries: usize,
    retry_delay: Option<Duration>,
    timeout: Option<Duration>,
    executor: Option<Arc<dyn Executor>>,
    fallback: Option<Composable<T>>,
    publishers: Vec<Composable<T>>,
    error_publishers: Vec<Composable<T>>,
}

impl<T: Send + 'static> PipelineBuilder<T> {
    pub fn new() -> Self {
        Self {
            retries: 0,
            retry_delay: None,
            timeout: None,
            executor: None,
            fallback: None,
            publishers: Vec::new(),
            error_publishers: Vec::new(),
        }
    }

    /// Start from declarative settings.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            retries: config.retries,
            retry_delay: config.retry_delay,
            timeout: config.timeout,
            ..Self::new()
        }
    }

    /// Set number of retries after the first attempt
    pub fn retries(mut self, n: usize) -> Self {
        self.retries = n;
        self
    }

    /// Set pause before each retry
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = Some(delay);
        self
    }

    /// Set per-attempt deadline
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the execution context used by the timeout layer
    pub fn executor(mut self, executor: Arc<dyn Executor>) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Recover from the final failure with `handler`
    pub fn catch<F>(mut self, handler: F) -> Self
    where
        F: Fn(Error) -> Result<T, Error> + Send + Sync + 'static,
    {
        self.fallback = Some(decorators::catch(handler));
        self
    }

    /// Add a callback for successful values
    pub fn publish<F>(mut self, on_value: F) -> Self
    where
        F: Fn(&T) -> Result<(), Error> + Send + Sync + 'static,
    {
        self.publishers.push(decorators::publish(on_value));
        self
    }

    /// Add a callback for the final error
    pub fn publish_error<F>(mut self, on_error: F) -> Self
    where
        F: Fn(&Error) -> Result<(), Error> + Send + Sync + 'static,
    {
        self.error_publishers.push(decorators::publish_error(on_error));
        self
    }

    /// Build the pipeline
    pub fn build(self) -> Result<Composable<T>, BuildError> {
        if self.retry_delay.is_some() && self.retries == 0 {
            return Err(BuildError::RetryDelayWithoutRetries);
        }

        let deadline = match (self.timeout, self.executor) {
            (Some(duration), _) if duration.is_zero() => return Err(BuildError::ZeroTimeout),
            (Some(_), None) => return Err(BuildError::MissingExecutor),
            (Some(duration), Some(executor)) => Some(decorators::timeout(duration, executor)),
            (None, _) => None,
        };

        let layers = self
            .error_publishers
            .into_iter()
            .chain(self.publishers)
            .chain((self.retries > 0).then(|| match self.retry_delay {
                Some(delay) => decorators::retry_with_delay(self.retries, delay),
                None => decorators::retry(self.retries),
            }))
            .chain(deadline);

        let outermost = self.fallback.unwrap_or_else(decorators::noop);
        Ok(layers.fold(outermost, |pipeline, layer| pipeline.compose(&layer)))
    }
}

impl<T: Clone + Send + Sync + 'static> PipelineBuilder<T> {
    /// Recover from the final failure with a fixed value
    pub fn catch_return(mut self, value: T) -> Self {
        self.fallback = Some(decorators::catch_return(value));
        self
    }
}

impl<T: Send + 'static> Default for PipelineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
