#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `itemstring-rs` decodes the compact colon-delimited item link strings used by
//! game clients into named, randomly addressable fields, and re-encodes them.
//!
//! The actual implementation lives in [`itemstring_types`]; this crate is the
//! facade the rest of the project links against. `use itemstring_rs::prelude::*;`
//! pulls in the commonly used types.

pub use itemstring_internal::*;
