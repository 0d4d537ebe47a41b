//! BattleSession - one enemy encounter from reset to victory or defeat

use promptcast_protocol::{Element, Outcome, SessionSnapshot};
use rand::Rng;

use super::attack::PendingAttack;
use crate::BattleError;
use crate::query::{BannedWords, Classify, Lexicon};
use crate::types::{BattleConfig, Health};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    /// Constructed but never reset
    Idle,
    AwaitingInput,
    /// An attack was accepted and waits for `resolve_attack`
    AttackInFlight,
    PlayerVictory,
    PlayerDefeat,
}

impl BattlePhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, BattlePhase::PlayerVictory | BattlePhase::PlayerDefeat)
    }
}

/// Battle state for a single player against a single enemy
///
/// The session owns everything that used to be loose game state: enemy type,
/// both health pools, the banned words for this round and the in-flight
/// attack. It never waits on real time; a front end accepts an attack, plays
/// whatever animation it likes, then resolves it.
#[derive(Debug, Clone)]
pub struct BattleSession<C = Lexicon> {
    pub(crate) config: BattleConfig,
    pub(crate) classifier: C,

    // === State ===
    pub(crate) enemy_type: Element,
    pub(crate) enemy: Health,
    pub(crate) player: Health,
    pub(crate) banned: BannedWords,
    pub(crate) phase: BattlePhase,

    // === In-flight attack ===
    pub(crate) in_flight: Option<PendingAttack>,
    pub(crate) next_attack_id: u64,
}

impl BattleSession<Lexicon> {
    /// Create an idle session classifying with the configured lexicon
    pub fn new(config: BattleConfig) -> Self {
        let lexicon = config.lexicon.clone();
        Self::with_classifier(config, lexicon)
    }
}

impl Default for BattleSession<Lexicon> {
    fn default() -> Self {
        Self::new(BattleConfig::default())
    }
}

impl<C: Classify> BattleSession<C> {
    /// Create an idle session with a custom classifier
    pub fn with_classifier(config: BattleConfig, classifier: C) -> Self {
        let enemy = Health::full(config.rules.enemy_max_hp);
        let player = Health::full(config.rules.player_max_hp);
        Self {
            config,
            classifier,
            enemy_type: Element::COMBAT[0],
            enemy,
            player,
            banned: BannedWords::default(),
            phase: BattlePhase::Idle,
            in_flight: None,
            next_attack_id: 0,
        }
    }

    /// Start a fresh round: random enemy type, fresh banned words, full health
    ///
    /// Any attack still in flight is abandoned.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let enemy_type = Element::COMBAT[rng.gen_range(0..Element::COMBAT.len())];
        let banned = BannedWords::draw(
            self.config.banned_pool.as_slice(),
            self.config.rules.banned_word_count,
            rng,
        );
        self.start(enemy_type, banned);
    }

    /// Start a fresh round with a chosen enemy type and banned set
    pub fn reset_with(
        &mut self,
        enemy_type: Element,
        banned: BannedWords,
    ) -> Result<(), BattleError> {
        if !enemy_type.is_combat() {
            return Err(BattleError::NonCombatEnemy(enemy_type));
        }
        self.start(enemy_type, banned);
        Ok(())
    }

    fn start(&mut self, enemy_type: Element, banned: BannedWords) {
        self.enemy_type = enemy_type;
        self.enemy = Health::full(self.config.rules.enemy_max_hp);
        self.player = Health::full(self.config.rules.player_max_hp);
        self.banned = banned;
        self.in_flight = None;
        self.phase = BattlePhase::AwaitingInput;
    }

    /// Check the current prompt text against the banned words
    pub fn input_changed(&self, text: &str) -> Option<&str> {
        self.banned.find(text)
    }

    /// Whether a submit button for `text` should be enabled
    pub fn can_submit(&self, text: &str) -> bool {
        self.phase == BattlePhase::AwaitingInput && self.banned.find(text).is_none()
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn enemy_type(&self) -> Element {
        self.enemy_type
    }

    pub fn enemy(&self) -> Health {
        self.enemy
    }

    pub fn player(&self) -> Health {
        self.player
    }

    pub fn enemy_hp(&self) -> u32 {
        self.enemy.current
    }

    pub fn player_hp(&self) -> u32 {
        self.player.current
    }

    pub fn banned_words(&self) -> &BannedWords {
        &self.banned
    }

    pub fn attack_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn pending_attack(&self) -> Option<&PendingAttack> {
        self.in_flight.as_ref()
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Terminal outcome, if the battle has ended
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            BattlePhase::PlayerVictory => Some(Outcome::Victory),
            BattlePhase::PlayerDefeat => Some(Outcome::Defeat),
            _ => None,
        }
    }

    /// Full state for rendering
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            enemy_type: self.enemy_type,
            enemy_hp: self.enemy.current,
            enemy_max_hp: self.enemy.max,
            player_hp: self.player.current,
            player_max_hp: self.player.max,
            banned_words: self.banned.to_vec(),
            attack_in_flight: self.attack_in_flight(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rules;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_session_is_idle() {
        let session = BattleSession::new(BattleConfig::default());
        assert_eq!(session.phase(), BattlePhase::Idle);
        assert_eq!(session.enemy_hp(), 100);
        assert_eq!(session.player_hp(), 100);
        assert!(session.banned_words().is_empty());
        assert!(!session.can_submit("anything"));
    }

    #[test]
    fn test_reset_starts_round() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = BattleSession::new(BattleConfig::default());
        session.reset(&mut rng);

        assert_eq!(session.phase(), BattlePhase::AwaitingInput);
        assert!(session.enemy_type().is_combat());
        assert_eq!(session.banned_words().len(), 10);
        assert!(!session.attack_in_flight());
    }

    #[test]
    fn test_reset_enemy_type_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut session = BattleSession::new(BattleConfig::default());
        let mut counts = [0usize; 3];

        for _ in 0..1000 {
            session.reset(&mut rng);
            let idx = Element::COMBAT
                .iter()
                .position(|e| *e == session.enemy_type())
                .unwrap();
            counts[idx] += 1;
        }

        for count in counts {
            assert!((250..=420).contains(&count), "skewed counts: {:?}", counts);
        }
    }

    #[test]
    fn test_reset_twice_draws_valid_sets() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = BattleSession::new(BattleConfig::default());

        session.reset(&mut rng);
        let first = session.banned_words().clone();
        session.reset(&mut rng);
        let second = session.banned_words().clone();

        for banned in [&first, &second] {
            assert_eq!(banned.len(), 10);
            assert!(banned.iter().all(|w| session.config().banned_pool.iter().any(|p| p == w)));
        }
    }

    #[test]
    fn test_reset_with_small_pool() {
        let config = BattleConfig {
            banned_pool: vec!["dragon".into(), "sword".into()],
            ..BattleConfig::default()
        };
        let mut session = BattleSession::new(config);
        session.reset(&mut StdRng::seed_from_u64(0));
        assert_eq!(session.banned_words().len(), 2);
    }

    #[test]
    fn test_reset_restores_health() {
        let mut session = BattleSession::new(BattleConfig::default());
        session
            .reset_with(Element::Fire, BannedWords::default())
            .unwrap();
        session.enemy.take_damage(40);
        session.player.take_damage(15);

        session.reset(&mut StdRng::seed_from_u64(8));
        assert_eq!(session.enemy_hp(), 100);
        assert_eq!(session.player_hp(), 100);
    }

    #[test]
    fn test_reset_with_rejects_neutral() {
        let mut session = BattleSession::new(BattleConfig::default());
        let err = session
            .reset_with(Element::Neutral, BannedWords::default())
            .unwrap_err();
        assert_eq!(err, BattleError::NonCombatEnemy(Element::Neutral));
        assert_eq!(session.phase(), BattlePhase::Idle);
    }

    #[test]
    fn test_custom_rules_apply_on_reset() {
        let config = BattleConfig {
            rules: Rules {
                enemy_max_hp: 30,
                player_max_hp: 20,
                ..Rules::default()
            },
            ..BattleConfig::default()
        };
        let mut session = BattleSession::new(config);
        session
            .reset_with(Element::Grass, BannedWords::default())
            .unwrap();
        assert_eq!(session.enemy(), Health::full(30));
        assert_eq!(session.player(), Health::full(20));
    }

    #[test]
    fn test_input_changed_and_can_submit() {
        let mut session = BattleSession::new(BattleConfig::default());
        session
            .reset_with(Element::Water, BannedWords::new(["dragon", "neon"]))
            .unwrap();

        assert_eq!(session.input_changed("a Neon sign"), Some("neon"));
        assert_eq!(session.input_changed("a quiet river"), None);
        assert!(!session.can_submit("dragon breath"));
        assert!(session.can_submit("splash"));
        assert!(session.can_submit(""));
    }

    #[test]
    fn test_snapshot() {
        let mut session = BattleSession::new(BattleConfig::default());
        session
            .reset_with(Element::Grass, BannedWords::new(["ghost"]))
            .unwrap();

        let snap = session.snapshot();
        assert_eq!(snap.enemy_type, Element::Grass);
        assert_eq!(snap.enemy_hp, 100);
        assert_eq!(snap.enemy_max_hp, 100);
        assert_eq!(snap.player_hp, 100);
        assert_eq!(snap.banned_words, vec!["ghost".to_string()]);
        assert!(!snap.attack_in_flight);
    }
}
