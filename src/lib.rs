//! # factura
//!
//! Data-quality gate for Spanish invoice datasets: drops every row that is
//! malformed, internally inconsistent or whose identifier is not unique.
//!
//! A row is kept when its gross and net amounts are decimals, exactly one
//! of IVA/IGIC is set, exactly one of CIF/NIF is set (and well formed, the
//! NIF with a correct check letter) and `gross - gross * tax / 100 == net`.
//! Amounts are compared with [`rust_decimal::Decimal`] by default.
//!
//! ## Quick Start
//!
//! ```rust
//! use factura::core::*;
//!
//! let lines = [
//!     "Num_factura,Fecha,Bruto,Neto,IVA,IGIC,Concepto,CIF_cliente,NIF_cliente",
//!     "1,02/05/2019,1000,810,19,,consultoria,B76430134,",
//!     "2,02/05/2019,1000,810,9,,wrong net,B76430134,",
//!     "3,02/05/2019,1000,930,,7,canarias,,12345678Z",
//! ];
//!
//! let report = filter_with(&lines, &FilterConfig::default());
//! assert_eq!(report.lines, [lines[0], lines[1], lines[3]]);
//! assert_eq!(report.rejected[0].line, 3);
//! assert!(matches!(report.rejected[0].reason, RowRejection::UnbalancedNet { .. }));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Row validation, deduplication, CIF/NIF checks |
//! | `io` | Filter from a `BufRead` into a `Write` |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod taxid;

#[cfg(feature = "io")]
pub mod io;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
