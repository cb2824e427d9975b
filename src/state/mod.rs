pub mod flow;
pub mod session;
pub mod store;
pub mod validation;
pub mod visibility;
