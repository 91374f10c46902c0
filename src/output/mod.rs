//! Console output module.

mod plain;

pub use plain::{
    print_error, print_results, print_scan_header, print_success, print_summary, write_results,
};
