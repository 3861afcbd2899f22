#[cfg(any(test, feature = "test-util"))]
mod memory;
mod pagination;
mod repository;

#[cfg(any(test, feature = "test-util"))]
pub use memory::*;
pub use pagination::*;
pub use repository::*;
