//! Location kinds and operational status.

use crate::define_text_enum;
use crate::error::CoreError;
use crate::geo::LatLng;

define_text_enum! {
    /// What a named physical site is used for.
    LocationKind("type") {
        Bunker = "BUNKER",
        Shelter = "SHELTER",
        Medical = "MEDICAL",
        SupplyDepot = "SUPPLY_DEPOT",
        CommandPost = "COMMAND_POST",
        EvacuationPoint = "EVACUATION_POINT",
        Other = "OTHER",
    }
}

define_text_enum! {
    /// Whether a site is currently usable.
    LocationStatus("status") {
        Operational = "OPERATIONAL",
        Limited = "LIMITED",
        Offline = "OFFLINE",
    }
}

impl Default for LocationStatus {
    fn default() -> Self {
        LocationStatus::Operational
    }
}

/// Validate a site position given as separate latitude and longitude.
pub fn validate_position(latitude: f64, longitude: f64) -> Result<(), CoreError> {
    LatLng(latitude, longitude).validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_enum::TextEnum;

    #[test]
    fn kind_accepts_spaced_input() {
        assert_eq!(
            LocationKind::parse("evacuation point"),
            Some(LocationKind::EvacuationPoint)
        );
        assert_eq!(LocationKind::parse("supply-depot"), Some(LocationKind::SupplyDepot));
    }

    #[test]
    fn status_defaults_to_operational() {
        assert_eq!(LocationStatus::parse_or_default(Some("broken")), LocationStatus::Operational);
        assert_eq!(LocationStatus::parse_or_default(Some("offline")), LocationStatus::Offline);
    }

    #[test]
    fn position_bounds() {
        assert!(validate_position(52.37, 4.89).is_ok());
        assert!(validate_position(-91.0, 4.89).is_err());
    }
}
