//! # photo-tidy CLI
//!
//! Command-line interface for the photo tidier.
//!
//! ## Usage
//! ```bash
//! photo-tidy duplicates ~/Photos --recursive
//! photo-tidy organize ~/Photos --make-changes --log-file organize.log
//! ```

mod cli;

use photo_tidy::Result;

fn main() -> Result<()> {
    cli::run()
}
