pub mod error;
pub mod repository;
pub mod transport;

pub use error::*;
pub use repository::*;
pub use transport::*;
