//! Output writers for rendered pages.
//!
//! # Submodules
//!
//! - [`html`]: Writes a rendered HTML page into a date-named file
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── 2025-05-06.html
//! └── 2025-05-07.html
//! ```
//!
//! A second run on the same day replaces that day's page.

pub mod html;
