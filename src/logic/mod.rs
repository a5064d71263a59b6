pub mod solver;
pub mod validator;
