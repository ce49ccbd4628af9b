pub mod trip;
pub mod seed;
pub mod workspace;
pub mod config;

pub use trip::*;
pub use seed::*;
pub use workspace::*;
pub use config::*;
