//! Domain logic for the polyglot example: the process bridge, XDG
//! base-directory lookup, the shared result file, and the text transforms
//! performed by the processor.
//!
//! Nothing here knows about HTTP. The `api` crate wires these pieces into
//! handlers and the `processor` crate into a CLI.

pub mod bridge;
pub mod error;
pub mod greeting;
pub mod processing;
pub mod results;
pub mod xdg;
