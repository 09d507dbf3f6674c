//! Console rendering for the bikeshare explorer.
//!
//! Turns computed reports and raw trip rows into plain text blocks. Nothing
//! here reads input or touches the filesystem.

pub mod report_view;
pub mod table_view;

pub use bikeshare_core as core;
