use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
#[repr(i8)]
pub enum GameMode {
    Survival = 0,
    Creative,
    Adventure,
    Spectator,
}

impl GameMode {
    /// Players in these modes never wear down their equipment.
    pub fn is_equipment_wear_exempt(&self) -> bool {
        matches!(self, Self::Creative | Self::Spectator)
    }
}

#[cfg(test)]
mod tests {
    use super::GameMode;

    #[test]
    fn wear_exemption() {
        assert!(!GameMode::Survival.is_equipment_wear_exempt());
        assert!(!GameMode::Adventure.is_equipment_wear_exempt());
        assert!(GameMode::Creative.is_equipment_wear_exempt());
        assert!(GameMode::Spectator.is_equipment_wear_exempt());
    }
}
