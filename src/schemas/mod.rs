pub mod schema;
pub(crate) mod validation;
pub mod validator;

pub use schema::parameters_schema;
pub use validator::{StrictValidator, Validator};
