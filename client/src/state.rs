use tokio::time::Instant;

/// The attack currently flying toward the enemy
#[derive(Debug, Clone, Copy)]
pub(crate) struct Flight {
    pub attack_id: u64,
    pub lands_at: Instant,
}
