//! Plain data types shared by the series, the mascot, and the renderer.

pub mod candle;
pub mod path;

pub use candle::Candle;
pub use path::{ChartPathPoint, SurfaceLayout};
