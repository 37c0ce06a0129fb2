pub mod logging;
pub mod validator;
pub mod wizard;
