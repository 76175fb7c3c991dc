//! Font validation of subtitle documents.
//!
//! [`validate`] interprets every dialogue line, matches each text run against
//! the font catalog and collects the problems in a [`DiagnosticsReport`].
//! [`summarize`] turns a report into one message per problem.
//!
//! ```
//! use subrel_core::fonts::{Catalog, FontRecord};
//! use subrel_core::subtitles::{SubtitleDocument, SubtitleStyle};
//! use subrel_core::validation::{summarize, validate, Category};
//!
//! let catalog = Catalog::from_records(vec![FontRecord::new("Arial", 400, false)]);
//! let mut doc = SubtitleDocument::new();
//! doc.set_style(SubtitleStyle::new("Default"));
//! doc.push_dialogue("Default", r"{\b1}Bold text");
//!
//! let report = validate(&doc, &catalog, true, false);
//! assert!(report.has(Category::FauxBold));
//! assert!(!report.has_blocking(&[Category::MissingFont]));
//! assert_eq!(summarize(&report, 10).len(), 1);
//! ```

mod report;
mod summary;
mod validator;

pub use report::{Category, DiagnosticKey, DiagnosticsReport};
pub use summary::{format_lines, summarize, summarize_with};
pub use validator::{validate, validate_with};
