pub mod axis;
pub mod context;
pub mod matrix;
pub mod model;
pub mod tokenizer;
pub mod validation;

pub use axis::{Axis, DynamicAxis, TextAxis, DEFAULT_AXIS_VALUE};
pub use context::{BuildContext, ContextError, EnvSnapshot, EnvVars};
pub use matrix::{AxisList, Combination};
pub use model::AxisDefinition;
pub use validation::{check_source_name, NameCheck, Severity};
