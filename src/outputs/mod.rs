//! Output sinks for collected articles.
//!
//! # Submodules
//!
//! - [`articles`]: one text file per article, grouped by label
//! - [`ledger`]: shared CSV ledger appended to by every run
//!
//! # Output Structure
//!
//! ```text
//! base_dir/
//! ├── falso/
//! │   ├── colombiaCheck_001.txt
//! │   └── colombiaCheck_002.txt
//! ├── verdad/
//! │   └── colombiaCheck_001.txt
//! └── noticiasColombiaCheck.csv
//! ```

pub mod articles;
pub mod ledger;
