mod is_equilateral;
mod position_offset;
mod triangle_quality;

pub use is_equilateral::IsEquilateral;
pub use position_offset::{PositionError, PositionOffset};
pub use triangle_quality::TriangleQuality;
