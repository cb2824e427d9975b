pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod notify;
pub mod replay;
pub mod state;
pub mod submission;
pub mod terminal;
pub mod transport;
pub mod view;

pub use crate::core::intake;
pub use crate::core::schema;
pub use crate::core::value;

pub use crate::state::flow;
pub use crate::state::session;
pub use crate::state::store;
pub use crate::state::validation;
pub use crate::state::visibility;

pub use error::{TransportError, WizardError};
pub use session::WizardSession;
