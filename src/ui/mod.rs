//! UI utilities for terminal output
//!
//! Progress feedback on stderr while tags are being fetched.

mod spinner;

pub use spinner::{create_spinner, finish_spinner_with_status, update_spinner};
