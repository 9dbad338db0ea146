//! Evacuation route status.

use crate::define_text_enum;

define_text_enum! {
    /// Traffic condition of an evacuation route.
    RouteStatus("status") {
        Open = "OPEN",
        Congested = "CONGESTED",
        Closed = "CLOSED",
    }
}

impl Default for RouteStatus {
    fn default() -> Self {
        RouteStatus::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_enum::TextEnum;

    #[test]
    fn status_parsing() {
        assert_eq!(RouteStatus::parse_or_default(None), RouteStatus::Open);
        assert_eq!(RouteStatus::parse_or_default(Some("closed")), RouteStatus::Closed);
    }
}
