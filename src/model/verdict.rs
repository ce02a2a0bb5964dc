use serde::{Deserialize, Serialize};

/// Tri-state knowledge about whether a letter occupies a cell: ruled out,
/// still possible, or certain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    No,
    Maybe,
    Yes,
}
