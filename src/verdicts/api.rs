mod session;
pub mod types;

pub use session::Session;
