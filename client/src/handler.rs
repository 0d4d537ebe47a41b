use promptcast_battle::PendingAttack;
use promptcast_protocol::{AttackResolution, GameEvent, RejectReason, SessionSnapshot};

/// Trait for reacting to battle events.
///
/// Implement this trait to render a battle. All methods have default no-op
/// implementations, so you only need to implement the events you care about.
///
/// # Example
///
/// ```ignore
/// struct Scoreboard;
///
/// impl Handler for Scoreboard {
///     async fn on_game_over(&mut self, victory: bool) {
///         println!("{}", if victory { "You win" } else { "You lose" });
///     }
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait Handler {
    /// Called on start and on every restart with the full new state.
    async fn on_state_reset(&mut self, snapshot: &SessionSnapshot) {
        let _ = snapshot;
    }

    /// Called whenever the prompt text changes.
    /// `banned` is the first banned word found, if any.
    async fn on_banned_status_changed(&mut self, banned: Option<&str>) {
        let _ = banned;
    }

    /// Called when an attack is accepted and its projectile should launch.
    async fn on_attack_launched(&mut self, attack: &PendingAttack) {
        let _ = attack;
    }

    /// Called when a submission is refused. Only banned-word rejections are
    /// meant to reach the player; see [`RejectReason::is_silent`].
    async fn on_attack_rejected(&mut self, reason: &RejectReason) {
        let _ = reason;
    }

    /// Called once per landed attack, before any game over.
    async fn on_attack_resolved(&mut self, resolution: &AttackResolution) {
        let _ = resolution;
    }

    /// Called once when the battle ends.
    async fn on_game_over(&mut self, victory: bool) {
        let _ = victory;
    }
}

/// Handler that keeps every event as a [`GameEvent`]
#[derive(Debug, Default)]
pub struct EventRecorder {
    pub events: Vec<GameEvent>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain recorded events
    pub fn take(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Handler for EventRecorder {
    async fn on_state_reset(&mut self, snapshot: &SessionSnapshot) {
        self.events.push(GameEvent::StateReset(snapshot.clone()));
    }

    async fn on_banned_status_changed(&mut self, banned: Option<&str>) {
        self.events.push(GameEvent::BannedStatusChanged {
            banned: banned.map(str::to_string),
        });
    }

    async fn on_attack_launched(&mut self, attack: &PendingAttack) {
        self.events.push(GameEvent::AttackLaunched {
            text: attack.text.clone(),
            attack_element: attack.attack_element,
        });
    }

    async fn on_attack_rejected(&mut self, reason: &RejectReason) {
        self.events.push(GameEvent::AttackRejected {
            reason: reason.clone(),
        });
    }

    async fn on_attack_resolved(&mut self, resolution: &AttackResolution) {
        self.events.push(GameEvent::AttackResolved(resolution.clone()));
    }

    async fn on_game_over(&mut self, victory: bool) {
        self.events.push(GameEvent::GameOver { victory });
    }
}
