mod errors;
mod outcome;
mod reservation_service;

pub use errors::{ReservationApplicationError, Result};
pub use outcome::{SessionOutcome, report_outcome};
pub use reservation_service::{
    SessionDependencies, make_reservation, run_session, update_reservation_dates,
};
