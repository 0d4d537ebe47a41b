//! Async driver for promptcast battles.
//!
//! [`GameClient`] owns a [`BattleSession`] and turns the session's two-phase
//! attack protocol into real time: an accepted attack flies for
//! [`ClientConfig::flight_ms`] before it lands and resolves. Everything that
//! happens is reported to a [`Handler`].

mod config;
mod handler;
mod state;

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};

pub use config::ClientConfig;
pub use handler::{EventRecorder, Handler};
pub use promptcast_battle::{BattleConfig, BattleSession, PendingAttack};
pub use promptcast_protocol::{
    AttackResolution, Element, GameEvent, Outcome, PlayerCommand, RejectReason, SessionSnapshot,
    parse_player_command,
};

use state::Flight;

/// Runs one battle session against a handler
pub struct GameClient {
    session: BattleSession,
    rng: StdRng,
    flight_duration: Duration,
    flight: Option<Flight>,
}

impl GameClient {
    /// Create a client; the session stays idle until [`restart`](Self::restart)
    pub fn new(config: ClientConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let flight_duration = config.flight_duration();
        Self {
            session: BattleSession::new(config.battle),
            rng,
            flight_duration,
            flight: None,
        }
    }

    pub fn session(&self) -> &BattleSession {
        &self.session
    }

    /// When the attack in flight will land, if any
    pub fn flight_deadline(&self) -> Option<Instant> {
        self.flight.map(|f| f.lands_at)
    }

    /// Start a new round, abandoning any attack in flight
    pub async fn restart<H: Handler>(&mut self, handler: &mut H) {
        if let Some(flight) = self.flight.take() {
            tracing::warn!(attack_id = flight.attack_id, "Restart abandoned attack in flight");
        }

        self.session.reset(&mut self.rng);
        tracing::info!(
            enemy_type = %self.session.enemy_type(),
            banned_words = self.session.banned_words().len(),
            "Battle started"
        );

        handler.on_state_reset(&self.session.snapshot()).await;
    }

    /// Report the banned-word status of the current prompt text
    pub async fn input_changed<H: Handler>(&mut self, handler: &mut H, text: &str) -> Option<String> {
        let banned = self.session.input_changed(text).map(str::to_string);
        tracing::trace!(can_submit = self.can_submit(text), "Input changed");
        handler.on_banned_status_changed(banned.as_deref()).await;
        banned
    }

    /// Whether a send control for `text` should be enabled right now
    pub fn can_submit(&self, text: &str) -> bool {
        self.session.can_submit(text)
    }

    /// Submit a prompt; on acceptance the attack starts flying
    pub async fn submit<H: Handler>(
        &mut self,
        handler: &mut H,
        text: &str,
    ) -> Result<PendingAttack, RejectReason> {
        match self.session.accept_attack(text) {
            Ok(attack) => {
                self.flight = Some(Flight {
                    attack_id: attack.id,
                    lands_at: Instant::now() + self.flight_duration,
                });
                tracing::debug!(
                    attack_id = attack.id,
                    element = %attack.attack_element,
                    effective = attack.is_effective,
                    "Attack launched"
                );
                handler.on_attack_launched(&attack).await;
                Ok(attack)
            }
            Err(reason) => {
                tracing::debug!(reason = %reason, "Attack rejected");
                handler.on_attack_rejected(&reason).await;
                Err(reason)
            }
        }
    }

    /// Resolve the attack in flight, without waiting for its deadline
    pub async fn land<H: Handler>(&mut self, handler: &mut H) -> Option<AttackResolution> {
        let flight = self.flight.take()?;

        let Some(resolution) = self.session.resolve_attack(flight.attack_id) else {
            tracing::warn!(attack_id = flight.attack_id, "Dropped stale attack");
            return None;
        };

        tracing::debug!(
            attack_id = flight.attack_id,
            effective = resolution.is_effective,
            enemy_hp = resolution.enemy_hp,
            player_hp = resolution.player_hp,
            "Attack landed"
        );
        handler.on_attack_resolved(&resolution).await;

        if let Some(outcome) = resolution.outcome {
            tracing::info!(outcome = ?outcome, "Battle over");
            handler.on_game_over(outcome.is_victory()).await;
        }

        Some(resolution)
    }

    /// Apply one command. Returns false when the client should stop.
    pub async fn dispatch<H: Handler>(&mut self, handler: &mut H, command: PlayerCommand) -> bool {
        match command {
            PlayerCommand::Attack(text) => {
                let _ = self.submit(handler, &text).await;
            }
            PlayerCommand::Input(text) => {
                self.input_changed(handler, &text).await;
            }
            PlayerCommand::Restart => self.restart(handler).await,
            PlayerCommand::Help => {}
            PlayerCommand::Quit => return false,
        }
        true
    }

    /// Start a round and process commands until Quit or the channel closes.
    ///
    /// Attacks land on their own once their flight time has passed. Attacks
    /// submitted while one is flying are dropped, not queued. An attack still
    /// flying when the commands stop is waited for and landed before returning.
    pub async fn run<H: Handler>(
        &mut self,
        handler: &mut H,
        mut commands: mpsc::Receiver<PlayerCommand>,
    ) {
        self.restart(handler).await;

        loop {
            let deadline = self.flight_deadline();

            tokio::select! {
                command = commands.recv() => {
                    let Some(command) = command else { break };
                    if !self.dispatch(handler, command).await {
                        break;
                    }
                }
                _ = landing(deadline) => {
                    self.land(handler).await;
                }
            }
        }

        if let Some(deadline) = self.flight_deadline() {
            tracing::debug!("Waiting for attack in flight before stopping");
            sleep_until(deadline).await;
            self.land(handler).await;
        }
    }
}

async fn landing(deadline: Option<Instant>) {
    match deadline {
        Some(at) => sleep_until(at).await,
        None => std::future::pending().await,
    }
}
