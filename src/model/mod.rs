pub mod common;
pub mod gallery;
pub mod post;
pub mod song;

pub use common::*;
pub use gallery::*;
pub use post::*;
pub use song::*;
