pub mod chains;
pub mod configs;
pub mod events;
pub mod fees;
pub mod routes;
pub mod submission;

pub use chains::*;
pub use configs::*;
pub use events::*;
pub use fees::*;
pub use routes::*;
pub use submission::*;
