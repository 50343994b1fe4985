//! Report renderers for website localization scans.
//!
//! - [`terminal`] — colored summary box with signal and hreflang tables;
//!   respects `--verbose` / `--quiet`. JSON output is serialized directly
//!   from the report model in `main`.

pub mod terminal;
