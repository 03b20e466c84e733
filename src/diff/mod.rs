//! Diff result structures.
//!
//! A [`DiffResult`] is the complete, already computed comparison between two
//! versions of an API document. This crate only consumes it: the structures
//! here are filled in by the comparison step and handed to report generators
//! untouched.

mod result;

pub use result::{
    ChangedEndpoint, ChangedOperation, ChangedParameter, DiffResult, DiffSummary, OperationMap,
};
