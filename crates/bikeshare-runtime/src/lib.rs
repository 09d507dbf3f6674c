//! Interactive layer of the bikeshare explorer.
//!
//! Prompts for filters, drives the data and report pipeline, pages raw rows
//! and repeats until the user is done. All console I/O goes through caller
//! supplied [`BufRead`](std::io::BufRead) / [`Write`](std::io::Write) handles.

pub mod pager;
pub mod prompt;
pub mod session;

pub use bikeshare_core as core;
pub use bikeshare_data as data;
