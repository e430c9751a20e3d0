pub mod base;
pub mod gallery;
pub mod post;
pub mod song;

pub use base::*;
pub use gallery::*;
pub use post::*;
pub use song::*;
