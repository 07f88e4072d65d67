pub mod config;
pub mod session;
pub mod store;

pub use config::{ConfigError, ReshufflePolicy, SessionConfig};
pub use session::{clock_seed, Session};
pub use store::{SessionSnapshot, SessionStore, StoreError, SESSION_FILE};
