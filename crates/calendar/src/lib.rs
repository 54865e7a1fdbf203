//! # isithot-calendar
//!
//! Pure date arithmetic for the Gregorian calendar, as used by the
//! climatology pipeline.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate"] -->|"Doy::of()"| B["Doy (1..=366)"]
//!     A -->|"ToyWindow::around()"| C["ToyWindow"]
//!     C -->|".contains(doy)"| D["bool"]
//!     E["year"] -->|"year_dates()"| F["Vec of NaiveDate"]
//!     G["month"] -->|"month_abbreviation()"| H["&str"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use isithot_calendar::{Doy, ToyWindow, year_dates};
//!
//! let anchor = NaiveDate::from_ymd_opt(2023, 1, 3).unwrap();
//! let window = ToyWindow::with_defaults(anchor);
//! // Late December belongs to the same time of year as early January.
//! assert!(window.contains(Doy::new(362).unwrap()));
//!
//! assert_eq!(year_dates(2024).unwrap().len(), 366);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `doy` | Day-of-year newtype |
//! | `window` | Time-of-year window selection |
//! | `sequence` | Whole-year date sequences and leap-year rules |
//! | `month` | Month labels and lengths |
//! | `error` | Error types |

mod doy;
mod error;
mod month;
mod sequence;
mod window;

pub use doy::Doy;
pub use error::CalendarError;
pub use month::{MAX_DAYS_IN_MONTH, MONTH_ABBREVIATIONS, days_in_month, month_abbreviation};
pub use sequence::{days_in_year, is_leap_year, year_dates};
pub use window::{DEFAULT_HALF_WIDTH_DAYS, DEFAULT_WINDOW_POINTS, ToyWindow, sample_dates};
