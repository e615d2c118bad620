pub mod dynamic;
pub mod text;

pub use dynamic::DynamicAxis;
pub use text::TextAxis;

use crate::context::BuildContext;

/// Sentinel substituted whenever no real values can be derived, keeping
/// every axis non-empty for the expansion machinery.
pub const DEFAULT_AXIS_VALUE: &str = "default";

/// Capability interface the host's matrix expansion works against.
///
/// Implementations guarantee that `values` and `rebuild` never return an
/// empty list and always hand out snapshot copies, never a live view of
/// internal state.
pub trait Axis: Send + Sync {
    /// Axis name, used as the dimension key in combinations.
    fn name(&self) -> &str;

    /// Display label describing where the values come from.
    fn value_label(&self) -> String;

    /// Snapshot of the most recently resolved values.
    fn values(&self) -> Vec<String>;

    /// Recompute the values for the given build execution and return the
    /// new list. Called by the host once per build, before expansion.
    fn rebuild(&self, context: &dyn BuildContext) -> Vec<String>;
}
