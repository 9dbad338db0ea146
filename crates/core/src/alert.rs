//! Alert severity and lifecycle status.

use crate::define_text_enum;

define_text_enum! {
    /// How urgent an alert is.
    AlertSeverity("severity") {
        Info = "INFO",
        Warning = "WARNING",
        Danger = "DANGER",
        Critical = "CRITICAL",
    }
}

define_text_enum! {
    /// Whether an alert is still in force.
    AlertStatus("status") {
        Active = "ACTIVE",
        Resolved = "RESOLVED",
    }
}

impl Default for AlertSeverity {
    fn default() -> Self {
        AlertSeverity::Info
    }
}

impl Default for AlertStatus {
    fn default() -> Self {
        AlertStatus::Active
    }
}
