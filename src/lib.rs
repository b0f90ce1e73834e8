//! Announce the latest GitHub release of a repository in a Slack channel.
//!
//! The run is a single forward pipeline: resolve inputs ([`cli`]), fetch the
//! latest release ([`forge`]), format the message ([`message`]), post it
//! ([`slack`]) and report the outcome to the Actions runner ([`reporter`]).
pub mod cli;
pub mod error;
pub mod forge;
pub mod message;
pub mod pipeline;
pub mod reporter;
pub mod slack;

pub use cli::{Args, Inputs};
pub use error::{NotifyError, Result};
pub use pipeline::run;
pub use reporter::{ActionsReporter, RunOutcome};
