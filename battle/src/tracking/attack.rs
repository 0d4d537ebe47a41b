//! Two-phase attack protocol: accept, then resolve

use promptcast_protocol::{AttackResolution, Element, Outcome, RejectReason};

use super::session::{BattlePhase, BattleSession};
use crate::query::Classify;
use crate::types::is_effective;

/// An accepted attack waiting for its animation to land
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAttack {
    /// Ticket passed back to `resolve_attack`
    pub id: u64,
    /// Trimmed prompt text
    pub text: String,
    pub attack_element: Element,
    pub is_effective: bool,
}

/// Result of a one-shot submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackOutcome {
    Rejected(RejectReason),
    Resolved(AttackResolution),
}

impl<C: Classify> BattleSession<C> {
    /// Validate and classify a prompt, marking it in flight
    ///
    /// Rejections leave the session untouched. The classifier only runs once
    /// every gate has passed.
    pub fn accept_attack(&mut self, text: &str) -> Result<PendingAttack, RejectReason> {
        match self.phase {
            BattlePhase::AwaitingInput => {}
            BattlePhase::AttackInFlight => return Err(RejectReason::Busy),
            BattlePhase::Idle | BattlePhase::PlayerVictory | BattlePhase::PlayerDefeat => {
                return Err(RejectReason::Inactive);
            }
        }

        let raw = text.trim();
        if raw.is_empty() {
            return Err(RejectReason::Empty);
        }

        if let Some(word) = self.banned.find(raw) {
            return Err(RejectReason::Banned(word.to_string()));
        }

        let attack_element = self.classifier.classify(raw);
        self.next_attack_id += 1;

        let pending = PendingAttack {
            id: self.next_attack_id,
            text: raw.to_string(),
            attack_element,
            is_effective: is_effective(attack_element, self.enemy_type),
        };

        self.in_flight = Some(pending.clone());
        self.phase = BattlePhase::AttackInFlight;
        Ok(pending)
    }

    /// Apply damage for the in-flight attack with this id
    ///
    /// Returns None when `attack_id` is not the attack in flight, e.g. when a
    /// reset abandoned it.
    pub fn resolve_attack(&mut self, attack_id: u64) -> Option<AttackResolution> {
        let pending = self.in_flight.take_if(|p| p.id == attack_id)?;
        Some(self.apply_attack(&pending))
    }

    /// Accept and resolve in one step, for front ends without animation
    pub fn submit_attack(&mut self, text: &str) -> AttackOutcome {
        match self.accept_attack(text) {
            Ok(pending) => {
                self.in_flight = None;
                AttackOutcome::Resolved(self.apply_attack(&pending))
            }
            Err(reason) => AttackOutcome::Rejected(reason),
        }
    }

    fn apply_attack(&mut self, pending: &PendingAttack) -> AttackResolution {
        let damage = self.config.rules.damage_per_hit;
        if pending.is_effective {
            self.enemy.take_damage(damage);
        } else {
            self.player.take_damage(damage);
        }

        // Enemy defeat wins when both pools are empty
        let outcome = if self.enemy.is_depleted() {
            Some(Outcome::Victory)
        } else if self.player.is_depleted() {
            Some(Outcome::Defeat)
        } else {
            None
        };

        self.phase = match outcome {
            Some(Outcome::Victory) => BattlePhase::PlayerVictory,
            Some(Outcome::Defeat) => BattlePhase::PlayerDefeat,
            None => BattlePhase::AwaitingInput,
        };

        AttackResolution {
            attack_element: pending.attack_element,
            is_effective: pending.is_effective,
            enemy_hp: self.enemy.current,
            player_hp: self.player.current,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::query::{BannedWords, Lexicon};
    use crate::types::{BattleConfig, Rules};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Lexicon that counts how often it was asked
    struct CountingClassifier {
        inner: Lexicon,
        calls: Cell<usize>,
    }

    impl Classify for CountingClassifier {
        fn classify(&self, text: &str) -> Element {
            self.calls.set(self.calls.get() + 1);
            self.inner.classify(text)
        }
    }

    fn create_test_session(enemy: Element) -> BattleSession {
        let mut session = BattleSession::new(BattleConfig::default());
        session
            .reset_with(enemy, BannedWords::new(["dragon", "neon"]))
            .unwrap();
        session
    }

    fn resolved(outcome: AttackOutcome) -> AttackResolution {
        match outcome {
            AttackOutcome::Resolved(resolution) => resolution,
            other => panic!("expected resolution, got {:?}", other),
        }
    }

    fn counting_session(enemy: Element) -> BattleSession<CountingClassifier> {
        let classifier = CountingClassifier {
            inner: Lexicon::default(),
            calls: Cell::new(0),
        };
        let mut session = BattleSession::with_classifier(BattleConfig::default(), classifier);
        session
            .reset_with(enemy, BannedWords::new(["dragon"]))
            .unwrap();
        session
    }

    #[test]
    fn test_flame_and_leaf_against_water() {
        let mut session = create_test_session(Element::Water);

        let pending = session
            .accept_attack("a gentle flame touches the leaf")
            .unwrap();
        assert_eq!(pending.attack_element, Element::Fire);
        assert!(!pending.is_effective);
        assert_eq!(session.phase(), BattlePhase::AttackInFlight);

        let resolution = session.resolve_attack(pending.id).unwrap();
        assert_eq!(
            resolution,
            AttackResolution {
                attack_element: Element::Fire,
                is_effective: false,
                enemy_hp: 100,
                player_hp: 95,
                outcome: None,
            }
        );
        assert_eq!(session.phase(), BattlePhase::AwaitingInput);
    }

    #[test]
    fn test_effective_hit_damages_enemy() {
        let mut session = create_test_session(Element::Fire);

        let outcome = session.submit_attack("tidal wave");
        let resolution = resolved(outcome);
        assert_eq!(resolution.attack_element, Element::Water);
        assert!(resolution.is_effective);
        assert_eq!(resolution.enemy_hp, 95);
        assert_eq!(resolution.player_hp, 100);
    }

    #[test]
    fn test_neutral_hit_damages_player() {
        let mut session = create_test_session(Element::Grass);

        let outcome = session.submit_attack("a polite handshake");
        let resolution = resolved(outcome);
        assert_eq!(resolution.attack_element, Element::Neutral);
        assert!(!resolution.is_effective);
        assert_eq!(session.enemy_hp(), 100);
        assert_eq!(session.player_hp(), 95);
    }

    #[test]
    fn test_busy_rejected_without_damage() {
        let mut session = create_test_session(Element::Fire);
        let first = session.accept_attack("rain").unwrap();

        assert_eq!(session.accept_attack("more rain"), Err(RejectReason::Busy));
        assert_eq!(
            session.submit_attack("even more rain"),
            AttackOutcome::Rejected(RejectReason::Busy)
        );
        assert_eq!(session.enemy_hp(), 100);
        assert_eq!(session.player_hp(), 100);
        assert_eq!(session.pending_attack(), Some(&first));
    }

    #[test]
    fn test_empty_rejected_without_damage() {
        let mut session = counting_session(Element::Fire);

        assert_eq!(session.accept_attack(""), Err(RejectReason::Empty));
        assert_eq!(
            session.submit_attack("  \t\n "),
            AttackOutcome::Rejected(RejectReason::Empty)
        );
        assert_eq!(session.enemy_hp(), 100);
        assert_eq!(session.player_hp(), 100);
        assert_eq!(session.classifier().calls.get(), 0);
    }

    #[test]
    fn test_banned_rejected_before_classification() {
        let mut session = counting_session(Element::Water);

        let outcome = session.submit_attack("a DRAGON made of leaves");
        assert_eq!(
            outcome,
            AttackOutcome::Rejected(RejectReason::Banned("dragon".into()))
        );
        assert_eq!(session.classifier().calls.get(), 0);
        assert_eq!(session.enemy_hp(), 100);
        assert_eq!(session.player_hp(), 100);
        assert!(!session.attack_in_flight());

        session.submit_attack("leaves");
        assert_eq!(session.classifier().calls.get(), 1);
    }

    #[test]
    fn test_classifies_trimmed_text() {
        let mut session = create_test_session(Element::Fire);
        let pending = session.accept_attack("   splash   ").unwrap();
        assert_eq!(pending.text, "splash");
    }

    #[test]
    fn test_damage_clamps_at_zero() {
        let config = BattleConfig {
            rules: Rules {
                player_max_hp: 50,
                damage_per_hit: 30,
                ..Rules::default()
            },
            ..BattleConfig::default()
        };
        let mut session = BattleSession::new(config);
        session
            .reset_with(Element::Water, BannedWords::default())
            .unwrap();

        session.submit_attack("ember");
        assert_eq!(session.player_hp(), 20);
        let outcome = session.submit_attack("ember");
        let resolution = resolved(outcome);
        assert_eq!(resolution.player_hp, 0);
        assert_eq!(resolution.outcome, Some(Outcome::Defeat));
        assert_eq!(session.phase(), BattlePhase::PlayerDefeat);
    }

    #[test]
    fn test_victory_after_twenty_hits() {
        let mut session = create_test_session(Element::Water);

        for hit in 1..=19 {
            let outcome = session.submit_attack("vine whip");
            let resolution = resolved(outcome);
            assert_eq!(resolution.enemy_hp, 100 - hit * 5);
            assert_eq!(resolution.outcome, None);
        }

        let outcome = session.submit_attack("vine whip");
        let resolution = resolved(outcome);
        assert_eq!(resolution.enemy_hp, 0);
        assert_eq!(resolution.outcome, Some(Outcome::Victory));
        assert_eq!(session.outcome(), Some(Outcome::Victory));
    }

    #[test]
    fn test_enemy_defeat_takes_priority() {
        let mut session = create_test_session(Element::Fire);
        session.enemy.current = 5;
        session.player.current = 0;

        let outcome = session.submit_attack("ocean");
        let resolution = resolved(outcome);
        assert_eq!(resolution.enemy_hp, 0);
        assert_eq!(resolution.player_hp, 0);
        assert_eq!(resolution.outcome, Some(Outcome::Victory));
        assert_eq!(session.phase(), BattlePhase::PlayerVictory);
    }

    #[test]
    fn test_no_attacks_after_game_over() {
        let mut session = create_test_session(Element::Fire);
        session.enemy.current = 5;
        session.submit_attack("ocean");

        assert_eq!(session.accept_attack("ocean"), Err(RejectReason::Inactive));
        assert_eq!(session.enemy_hp(), 0);
        assert_eq!(session.player_hp(), 100);
    }

    #[test]
    fn test_idle_session_rejects() {
        let mut session = BattleSession::new(BattleConfig::default());
        assert_eq!(
            session.submit_attack("ocean"),
            AttackOutcome::Rejected(RejectReason::Inactive)
        );
    }

    #[test]
    fn test_reset_abandons_flight() {
        let mut session = create_test_session(Element::Fire);
        let stale = session.accept_attack("rain").unwrap();

        session.reset(&mut StdRng::seed_from_u64(3));
        assert!(!session.attack_in_flight());
        assert_eq!(session.resolve_attack(stale.id), None);
        assert_eq!(session.enemy_hp(), 100);
        assert_eq!(session.player_hp(), 100);
    }

    #[test]
    fn test_stale_ticket_does_not_resolve_new_attack() {
        let mut session = create_test_session(Element::Fire);
        let stale = session.accept_attack("rain").unwrap();
        session
            .reset_with(Element::Fire, BannedWords::default())
            .unwrap();
        let fresh = session.accept_attack("rain").unwrap();

        assert_ne!(stale.id, fresh.id);
        assert_eq!(session.resolve_attack(stale.id), None);
        assert!(session.attack_in_flight());
        assert!(session.resolve_attack(fresh.id).is_some());
    }
}
