//! A personal website: writing, podcast episodes, bookmarks, an about page, a
//! Hacker News mirror and a security checklist.
//!
//! # Architecture
//!
//! - **Queries** ([`graphql`]): typed query documents built from shared fragments
//! - **Sources** ([`content`], [`hn`]): the GraphQL content client and the Hacker
//!   News feed adapter, both behind traits so they can be replaced in tests
//! - **Assemblers** ([`pages`]): per-route functions that fetch, shape props and
//!   declare a revalidation interval
//! - **Regeneration** ([`cache`]): last good props per route, regenerated when stale
//! - **Views** ([`render`]): maud templates over assembled props
//! - **HTTP** ([`api`]): axum router serving HTML and JSON props

pub mod api;
pub mod cache;
pub mod config;
pub mod content;
pub mod error;
pub mod graphql;
pub mod hn;
pub mod models;
pub mod pages;
pub mod render;
pub mod state;

pub use config::Config;
pub use error::PageError;
pub use state::AppState;
