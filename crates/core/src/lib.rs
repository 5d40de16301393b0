pub mod config;
pub mod error;
pub mod job;
pub mod locale;
pub mod reconcile;

pub use config::Config;
pub use error::*;
pub use job::*;
pub use locale::Locale;
pub use reconcile::{reconcile, MatchStrategy, Reconciled};
