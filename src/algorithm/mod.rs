//! Graph algorithms
mod depth_first;
pub use self::depth_first::*;
mod breadth_first;
pub use self::breadth_first::*;
mod shortest_path;
pub use self::shortest_path::*;
