//! Personnel availability status.

use crate::define_text_enum;

define_text_enum! {
    /// Availability of a person on the roster.
    PersonStatus("status") {
        Active = "ACTIVE",
        Standby = "STANDBY",
        Deployed = "DEPLOYED",
        Unavailable = "UNAVAILABLE",
    }
}

impl Default for PersonStatus {
    fn default() -> Self {
        PersonStatus::Active
    }
}
