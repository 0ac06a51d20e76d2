//! Builder API for configuring decorated pipelines.
//!
//! This module provides a fluent builder and a serializable configuration
//! so retry and timeout policies can be set from code or loaded from JSON.
//!
//! # Example
//!
//! ```rust
//! use composable_fp::builder::{PipelineBuilder, PipelineConfig};
//! use composable_fp::core::operation;
//!
//! let config = PipelineConfig::from_json(r#"{ "retries": 2 }"#).unwrap();
//! let pipeline = PipelineBuilder::from_config(&config)
//!     .catch_return(0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(pipeline.run(operation(|| Err("down".into()))).unwrap(), 0);
//! ```

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::PipelineConfig;
pub use error::BuildError;
pub use pipeline::PipelineBuilder;
