pub mod parameter;
pub mod store;

pub use parameter::{ParamRole, Parameter};
pub use store::ParameterStore;
