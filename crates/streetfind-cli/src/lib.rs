//! streetfind-cli
//! ==============
//!
//! Command-line interface for the `streetfind-core` street search.
//!
//! This crate primarily provides a binary (`streetfind`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install streetfind-cli
//! streetfind --help
//! streetfind search "Victor Hugo"
//! streetfind nearest "Victor Hugo" --from 48.8566,2.3522
//! streetfind map "Jean Jaurès" --from 43.6047,1.4442
//! ```
//!
//! For programmatic access, use the [`streetfind-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
