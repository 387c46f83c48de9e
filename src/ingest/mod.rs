//! Paystub ingestion for the projection engine.
//!
//! Two sources are supported: a config-style YAML file with explicit
//! paystub fields, and a tabular CSV payslip export whose rows are matched
//! against known labels. The source is chosen by file extension.

mod stub_file;
mod tabular;

pub use stub_file::load_paystub_file;
pub use tabular::load_paystub_csv;

use std::path::Path;

use crate::error::EngineResult;
use crate::models::Paystub;

/// Loads a paystub from either supported source.
///
/// Files ending in `.csv` are parsed as the tabular payslip export;
/// anything else is parsed as a YAML paystub file.
///
/// # Example
///
/// ```no_run
/// use contrib_engine::ingest::load_paystub;
///
/// let paystub = load_paystub("july.csv").unwrap();
/// println!("Pay date: {}", paystub.pay_date);
/// ```
pub fn load_paystub<P: AsRef<Path>>(path: P) -> EngineResult<Paystub> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        load_paystub_csv(path)
    } else {
        load_paystub_file(path)
    }
}
