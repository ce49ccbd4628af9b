pub mod cli;
pub mod io;
pub mod model;
pub mod notify;
pub mod ops;
pub mod util;
