//! Resource categories and stock status.

use crate::define_text_enum;

define_text_enum! {
    /// Category of a stockpiled resource.
    ResourceKind("type") {
        Food = "FOOD",
        Water = "WATER",
        Medical = "MEDICAL",
        Fuel = "FUEL",
        Equipment = "EQUIPMENT",
        Communication = "COMMUNICATION",
        Other = "OTHER",
    }
}

define_text_enum! {
    /// Stock level of a resource.
    ResourceStatus("status") {
        Available = "AVAILABLE",
        Low = "LOW",
        Depleted = "DEPLETED",
        Reserved = "RESERVED",
    }
}

impl Default for ResourceStatus {
    fn default() -> Self {
        ResourceStatus::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_enum::TextEnum;

    #[test]
    fn kind_is_strict() {
        assert!(ResourceKind::parse_strict("ammunition").is_err());
        assert_eq!(ResourceKind::parse_strict("water").unwrap(), ResourceKind::Water);
    }

    #[test]
    fn status_is_tolerant() {
        assert_eq!(ResourceStatus::parse_or_default(Some("plenty")), ResourceStatus::Available);
        assert_eq!(ResourceStatus::parse_or_default(Some("low")), ResourceStatus::Low);
    }
}
