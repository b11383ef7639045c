//! Dense tensor implementation and operations
//!
//! `DenseND<T>` is split across functional sub-modules:
//!
//! - `types` - type definition, constructors, shape queries
//! - `layout` - zero-copy axis swaps and layout materialization
//! - `region` - rectangular sub-region read/write and origin padding
//! - `elementwise` - Hadamard product, sum, real/complex conversion

pub mod types;

mod elementwise;
mod layout;
mod region;

pub mod densend_traits;

pub use types::DenseND;
