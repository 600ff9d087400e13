pub mod cli;
pub mod config;
pub mod error;
pub mod locate;
pub mod logging;
pub mod output;
pub mod split;
pub mod utils;

pub use cli::{Cli, Command, SplitArgs, VersionArgs};
pub use config::AppConfig;
pub use error::SplitError;
pub use locate::AppDirs;
pub use logging::{LoggingConfig, init_logging};
pub use split::{SavedSheet, SplitReport, split_workbook};
