pub mod model;
pub mod run;
pub mod state;
pub mod view;

pub use model::CheckOutcome;
pub use run::start_check;
pub use state::{RunState, RunTicket};
pub use view::{CheckView, ModalBody, OverallStatus};
