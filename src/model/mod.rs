/// Host-side board entities in KiCad's native nanometre units.
pub mod board;
/// Document and version descriptors reported by KiCad.
pub mod common;
/// The serialized snapshot sent to the backend.
pub mod snapshot;
