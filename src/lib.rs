pub use cgmath;
pub use config::PathConfig;
pub use debug::DebugShape;
#[cfg(feature = "debug")]
pub use debug::take_debug_frame;
pub use error::PathError;
pub use obstacle::{NearestObstacle, Obstacle, ObstacleField};
pub use sampler::{path_length, sample_curve, sample_path, PathSample};
pub use session::PathSession;
pub use state::{Entity, MobileState};
pub use util::Interval;

mod config;
mod debug;
mod error;
pub mod math;
mod obstacle;
mod sampler;
mod session;
mod state;
mod util;
