pub mod brick;
pub mod coursing;
pub mod error;
pub mod kernel;
pub mod math;
pub mod samples;
pub mod scene;

pub use brick::BrickInfo;
pub use coursing::{BrickWall, MortarSlice};
pub use error::{BrickworkError, Result};
pub use kernel::CsgKernel;
pub use scene::CourseStack;
