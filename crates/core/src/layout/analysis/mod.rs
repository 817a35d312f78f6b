//! Layout analysis - direction bucketing, line assembly and direction analysis
//!
//! Contains the algorithms for:
//! - Grouping glyphs by quantized baseline direction
//! - Inserting glyphs into ordered lines and words
//! - Picking the dominant text direction and the matching page rotation

mod assembly;
mod direction;

pub use assembly::{InsertOutcome, LineAssembler};
pub use direction::{
    DirectionBucket, DirectionBuckets, DirectionKey, rotation_for_direction,
};
