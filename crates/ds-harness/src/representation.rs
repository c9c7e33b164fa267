//! The series representations the harness can measure.

use core::fmt;
use core::str::FromStr;

use tracing::info;

use ds_core::{Series, SeriesOps};
use ds_handle::{NullableHandle, SwapHandle, TransferHandle};

use crate::collection::build_collection;
use crate::config::HarnessConfig;
use crate::error::{HarnessError, Result};
use crate::report::{time_sort, SortReport};

/// How each element of the sorted collection holds its series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Representation {
    /// `Series` stored inline.
    Value,
    /// `SwapHandle`, exchanging ownership on move.
    Swap,
    /// `TransferHandle`, leaving the source null on move.
    Transfer,
    /// `NullableHandle`, null by default and after move.
    Nullable,
}

impl Representation {
    /// Every representation, baseline first.
    pub const ALL: [Representation; 4] = [
        Representation::Value,
        Representation::Swap,
        Representation::Transfer,
        Representation::Nullable,
    ];

    /// Lower-case label used in reports and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Representation::Value => "value",
            Representation::Swap => "swap",
            Representation::Transfer => "transfer",
            Representation::Nullable => "nullable",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Representation {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Representation::ALL
            .into_iter()
            .find(|r| r.name() == wanted)
            .ok_or_else(|| HarnessError::UnknownRepresentation(s.to_string()))
    }
}

/// Build a collection for `repr` and time sorting it.
pub fn run(repr: Representation, config: &HarnessConfig) -> Result<SortReport> {
    config.validate()?;
    info!(
        representation = repr.name(),
        count = config.count,
        length = config.length,
        "running"
    );
    match repr {
        Representation::Value => measure::<Series>(repr, config),
        Representation::Swap => measure::<SwapHandle>(repr, config),
        Representation::Transfer => measure::<TransferHandle>(repr, config),
        Representation::Nullable => measure::<NullableHandle>(repr, config),
    }
}

/// Run every representation in [`Representation::ALL`] order.
pub fn run_all(config: &HarnessConfig) -> Result<Vec<SortReport>> {
    Representation::ALL
        .into_iter()
        .map(|repr| run(repr, config))
        .collect()
}

fn measure<S: SeriesOps + Clone>(repr: Representation, config: &HarnessConfig) -> Result<SortReport> {
    let items: Vec<S> = build_collection(config);
    time_sort(&items, repr.name(), config.iterations)
}
