//! Production document stores.

pub mod github;

pub use github::GithubDocumentStore;
