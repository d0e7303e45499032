//! CI/CD pipeline for the workspace: lint, test, then deploy the API and the
//! dashboard to Heroku.
//!
//! The stage graph lives in [`pipeline::Pipeline`]; how a stage actually runs is
//! behind [`runner::StageRunner`].

pub mod config;
pub mod error;
pub mod pipeline;
pub mod runner;
pub mod stage;
