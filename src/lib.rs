//! `tzresolve` answers, for a local wall-clock instant and a named IANA
//! time zone, four coupled questions: the zone's standard offset from
//! UTC, any daylight saving in force, whether the instant is standard,
//! daylight, ambiguous, or invalid, and the abbreviation to display.
//!
//! The zone database ships with the crate as immutable static tables; a
//! [`Resolver`] compiles one zone's tables into an efficient lookup
//! structure and classifies instants against it.
//!
//! ```
//! use tzresolve::{CivilDateTime, LocalTimeKind, Resolver};
//!
//! let zone = Resolver::new("Europe/Bucharest")?;
//! let record = zone.resolve(CivilDateTime::new(2013, 6, 15, 12 * 3600))?;
//! assert_eq!(record.kind, LocalTimeKind::Daylight);
//! assert_eq!(record.std_offset, 7200);
//! assert_eq!(record.savings, 3600);
//! assert_eq!(zone.display_name(CivilDateTime::new(2013, 6, 15, 12 * 3600), false)?, "EEST");
//! # Ok::<(), tzresolve::TzError>(())
//! ```
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc
)]

pub mod cache;
pub mod civil;
pub mod error;
pub mod types;

pub(crate) mod compiler;
pub(crate) mod data;
pub(crate) mod resolver;

#[doc(inline)]
pub use civil::{CivilDateTime, WeekDay};
#[doc(inline)]
pub use error::{TzError, TzResult};
#[doc(inline)]
pub use resolver::{known_zones, LocalTimeKind, LocalTimeRecord, Resolver};
