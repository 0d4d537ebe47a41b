//! Hit point tracking

use promptcast_protocol::hp_percent;

/// Current and maximum hit points for one combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Health {
    /// Health at full
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Subtract damage, clamping at zero. Returns the new value.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.current = self.current.saturating_sub(amount);
        self.current
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Rounded percentage of max, 0-100
    pub fn percent(&self) -> u32 {
        hp_percent(self.current, self.max)
    }
}
