pub mod errors;
pub mod haccp_plan;
pub mod plan_version;

pub use errors::*;
pub use haccp_plan::*;
pub use plan_version::*;
