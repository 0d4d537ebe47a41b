//! Terminal Duel
//!
//! Type attack prompts at a demon of a hidden-until-start element. Prompts are
//! classified as fire, water or grass; hit the demon's weakness to hurt it,
//! miss and it hurts you. Some words are banned each round.
//!
//! Usage: cargo run --example duel -- [CONFIG.json] [--json]

use anyhow::Result;
use promptcast_client::{
    AttackResolution, ClientConfig, Element, GameClient, GameEvent, Handler, PendingAttack,
    PlayerCommand, RejectReason, SessionSnapshot, parse_player_command,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

const LABEL_MAX_CHARS: usize = 22;
const BAR_WIDTH: usize = 20;

struct TerminalDuel {
    /// Print raw events instead of prose
    json: bool,
    /// Last known state, kept current as attacks land
    board: Option<SessionSnapshot>,
}

impl TerminalDuel {
    fn emit(&self, event: GameEvent) {
        match event.to_json_line() {
            Ok(line) => println!("{}", line),
            Err(e) => eprintln!("Failed to encode event: {}", e),
        }
    }

    fn print_bars(&self) {
        let Some(board) = &self.board else { return };
        println!(
            "  Demon  {} {} / {}",
            health_bar(board.enemy_hp_percent()),
            board.enemy_hp,
            board.enemy_max_hp
        );
        println!(
            "  You    {} {} / {}",
            health_bar(board.player_hp_percent()),
            board.player_hp,
            board.player_max_hp
        );
    }
}

impl Handler for TerminalDuel {
    async fn on_state_reset(&mut self, snapshot: &SessionSnapshot) {
        self.board = Some(snapshot.clone());

        if self.json {
            self.emit(GameEvent::StateReset(snapshot.clone()));
            return;
        }

        println!();
        println!(
            "A {} {} demon appears!",
            emoji(snapshot.enemy_type),
            snapshot.enemy_type
        );
        println!("{} words are banned this round. Find out which.", snapshot.banned_words.len());
        self.print_bars();
    }

    async fn on_banned_status_changed(&mut self, banned: Option<&str>) {
        if self.json {
            self.emit(GameEvent::BannedStatusChanged {
                banned: banned.map(str::to_string),
            });
            return;
        }

        if let Some(word) = banned {
            println!("Banned word detected: \"{}\"", word);
        }
    }

    async fn on_attack_launched(&mut self, attack: &PendingAttack) {
        if self.json {
            self.emit(GameEvent::AttackLaunched {
                text: attack.text.clone(),
                attack_element: attack.attack_element,
            });
            return;
        }

        println!(
            "{} [{}] flies toward the demon...",
            emoji(attack.attack_element),
            truncate(&attack.text, LABEL_MAX_CHARS)
        );
    }

    async fn on_attack_rejected(&mut self, reason: &RejectReason) {
        if self.json {
            self.emit(GameEvent::AttackRejected {
                reason: reason.clone(),
            });
            return;
        }

        if !reason.is_silent() {
            println!("Remove banned word to send.");
        } else if *reason == RejectReason::Inactive {
            println!("The battle is over. Type /restart to play again.");
        }
    }

    async fn on_attack_resolved(&mut self, resolution: &AttackResolution) {
        if let Some(board) = &mut self.board {
            board.enemy_hp = resolution.enemy_hp;
            board.player_hp = resolution.player_hp;
            board.attack_in_flight = false;
        }

        if self.json {
            self.emit(GameEvent::AttackResolved(resolution.clone()));
            return;
        }

        if resolution.is_effective {
            println!("It's super effective!");
        } else {
            println!("The demon shrugs off your {} attack and strikes back!", resolution.attack_element);
        }
        self.print_bars();
    }

    async fn on_game_over(&mut self, victory: bool) {
        if self.json {
            self.emit(GameEvent::GameOver { victory });
            return;
        }

        if victory {
            println!("Victory! You defeated the demon.");
        } else {
            println!("Defeat! The demon overpowered you.");
        }
        println!("Type /restart to play again.");
    }
}

fn emoji(element: Element) -> &'static str {
    match element {
        Element::Fire => "🔥",
        Element::Water => "💧",
        Element::Grass => "🌿",
        Element::Neutral => "✨",
    }
}

fn health_bar(percent: u32) -> String {
    let filled = (percent.min(100) as usize * BAR_WIDTH).div_ceil(100);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars - 1).collect();
    format!("{}…", head)
}

fn print_help() {
    println!("Commands:");
    println!("  <prompt>        - Attack with a prompt");
    println!("  /input <text>   - Check text for banned words without attacking");
    println!("  /restart        - Start a new battle");
    println!("  /quit           - Exit");
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let mut json = false;
    let mut config_path = None;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            config_path = Some(arg);
        }
    }

    let config = match config_path {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    };

    if !json {
        println!("Prompt Duel");
        println!("===========");
        print_help();
    }

    let mut handler = TerminalDuel { json, board: None };
    let mut client = GameClient::new(config);

    let (tx, rx) = mpsc::channel(16);

    // Spawn input reader
    tokio::spawn(async move {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        while let Ok(Some(line)) = lines.next_line().await {
            let commands = match parse_player_command(&line) {
                Ok(PlayerCommand::Help) => {
                    print_help();
                    continue;
                }
                // Typing, then pressing enter
                Ok(PlayerCommand::Attack(text)) => {
                    vec![PlayerCommand::Input(text.clone()), PlayerCommand::Attack(text)]
                }
                Ok(command) => vec![command],
                Err(e) => {
                    println!("Error: {}", e);
                    continue;
                }
            };

            for command in commands {
                if tx.send(command).await.is_err() {
                    return;
                }
            }
        }

        // Exit when input ends
        tx.send(PlayerCommand::Quit).await.ok();
    });

    client.run(&mut handler, rx).await;
    Ok(())
}
