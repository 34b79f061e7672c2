//! Service layer between handlers and the persistence gateway.

mod operation;
pub mod posts;

pub use operation::Operation;
pub use posts::PostService;
