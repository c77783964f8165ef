//! # idxgather: Indexed gather over flattened matrices
//!
//! Select a diagonal-biased subset of a `rows` x `cols` matrix with a
//! single indexed gather and rebuild a partially filled grid from the
//! gathered values.
//!
//! ```
//! use idxgather::{build_descriptor, flatten, format_transform, gather};
//! use ndarray::array;
//!
//! let matrix = array![[11, 12, 13], [21, 22, 23], [31, 32, 33]];
//! let descriptor = build_descriptor(3, 3).unwrap();
//! let gathered = gather(&flatten(&matrix), &descriptor).unwrap();
//! assert_eq!(gathered, vec![11, 12, 13, 22, 23, 33]);
//!
//! let grid = format_transform(&gathered, 3, 3).unwrap();
//! assert_eq!(grid.get(2, 2), Some("33"));
//! assert!(grid.is_placeholder(2, 0));
//! ```
//!
//! The selection is defined once in [`geometry::selection`]; descriptor
//! and formatter are both derived from it.
//!
//! With feature `mpi`, [`transport::MpiTransport`] moves the buffer with a
//! real mpi send-receive through an indexed datatype.
pub mod descriptor;
pub mod display;
pub mod error;
pub mod flatten;
pub mod format;
pub mod gather;
pub mod geometry;
pub mod mpi;
pub mod pipeline;
pub mod source;
pub mod transport;
pub mod types;

pub use descriptor::{build_descriptor, Block, BlockDescriptor};
pub use error::{Result, TransformError};
pub use flatten::{flatten, unflatten};
pub use format::{format_transform, DisplayGrid, PLACEHOLDER};
pub use gather::{gather, scatter};
pub use pipeline::{TransformConfig, TransformReport};
pub use source::{FixedSource, MatrixSource, RandomSource};
pub use transport::{LocalTransport, Transport};
pub use types::{Scalar, Value};
