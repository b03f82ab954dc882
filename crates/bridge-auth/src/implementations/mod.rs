pub mod env;
pub mod fixed;

pub use env::EnvTokenProvider;
pub use fixed::FixedTokenProvider;
