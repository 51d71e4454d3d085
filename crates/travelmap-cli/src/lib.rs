//! travelmap-cli
//! =============
//!
//! Command-line interface for the `travelmap-core` itinerary store.
//!
//! This crate primarily provides a binary (`travelmap-cli`). The library
//! target only carries this overview so docs.rs renders a page for it.
//!
//! Quick start
//! -----------
//!
//! ```text
//! travelmap-cli --help
//! travelmap-cli stats
//! travelmap-cli locations --day 2
//! travelmap-cli show 3
//! travelmap-cli --data-file trips/taipei.json check
//! ```
//!
//! For programmatic access to the data structures, use the
//! [`travelmap-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
