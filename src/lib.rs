//! Harness around the Db2 Admin Tool ADB2RE stored procedure: build the
//! option and request strings it expects, call it once, and verify the
//! generated DDL and report.
//!
//! The call itself sits behind [`client::GenCaller`]; the report read
//! behind [`client::zosmf::ReportSource`]. Checks drive [`gen::Gen`]
//! directly and plug in fakes where no subsystem is available.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod gen;
pub mod options;
pub mod output;
pub mod request;

pub use error::{GenError, Result};
pub use gen::Gen;
