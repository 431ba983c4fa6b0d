//! A minimal static link-dump blog generator.
//!
//! Posts are small `.ini` records (`posts/2024-01-10-foo.ini`) holding a
//! title, description, link, tags and an optional comment. A run renders the
//! records that changed since their page was last written, the overview pages
//! of the months those records belong to, and every tag page of the corpus.

pub mod aggregator;
pub mod config;
pub mod content_cache;
pub mod error;
pub mod freshness;
pub mod generator;
pub mod logger;
pub mod parsing_utils;
pub mod post;
pub mod post_cache;
pub mod post_list;
pub mod site_writer;
pub mod text_utils;
pub mod view;
mod test_data;

pub use crate::generator::{build_site, BuildSummary, Generator};
