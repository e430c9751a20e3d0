//! GraphQL namespace objects. Each field delegates to one service method.

pub mod blog;
pub mod gallery;
pub mod stem_player;

pub use blog::*;
pub use gallery::*;
pub use stem_player::*;
