#![allow(dead_code)]

use cmdspec_core::commands::{ArgumentNode, ParseFailure, Value};
use cmdspec_core::player::{Location, Player, World};
use cmdspec_core::server::{CommandSender, Server};
use std::cell::RefCell;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn alice() -> Player {
    Player::new("Alice", 1, Location::new("world", 12.5, 64.0, -30.0))
}

pub fn bob() -> Player {
    Player::new("Bob", 2, Location::new("world", 100.0, 70.0, 8.25))
}

/// An in-memory host whose random picks are fixed by `random_choice`.
pub struct TestServer {
    pub players: Vec<Player>,
    pub worlds: Vec<World>,
    random_choice: usize,
    random_calls: AtomicUsize,
}

impl TestServer {
    /// Alice and Bob online, worlds `world` and `world_nether`.
    pub fn new() -> TestServer {
        TestServer::with_players(vec![alice(), bob()])
    }

    pub fn with_players(players: Vec<Player>) -> TestServer {
        TestServer {
            players,
            worlds: vec![World::new("world"), World::new("world_nether")],
            random_choice: 0,
            random_calls: AtomicUsize::new(0),
        }
    }

    pub fn random_choice(mut self, choice: usize) -> TestServer {
        self.random_choice = choice;
        self
    }

    pub fn random_calls(&self) -> usize {
        self.random_calls.load(Ordering::SeqCst)
    }
}

impl Server for TestServer {
    fn online_players(&self) -> Vec<Player> {
        self.players.clone()
    }

    fn worlds(&self) -> Vec<World> {
        self.worlds.clone()
    }

    fn random_index(&self, len: usize) -> usize {
        self.random_calls.fetch_add(1, Ordering::SeqCst);
        self.random_choice % len
    }
}

/// Records every message it is sent.
pub struct TestSender {
    player: Option<Player>,
    permissions: Vec<String>,
    all_permissions: bool,
    messages: RefCell<Vec<String>>,
}

impl TestSender {
    /// A console sender holding every permission.
    pub fn console() -> TestSender {
        TestSender {
            player: None,
            permissions: Vec::new(),
            all_permissions: true,
            messages: RefCell::new(Vec::new()),
        }
    }

    /// A player sender holding no permissions until granted.
    pub fn player(player: Player) -> TestSender {
        TestSender {
            player: Some(player),
            permissions: Vec::new(),
            all_permissions: false,
            messages: RefCell::new(Vec::new()),
        }
    }

    pub fn grant(mut self, permission: &str) -> TestSender {
        self.permissions.push(permission.to_string());
        self
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl CommandSender for TestSender {
    fn name(&self) -> String {
        match &self.player {
            Some(player) => player.name.clone(),
            None => "CONSOLE".to_string(),
        }
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.all_permissions || self.permissions.iter().any(|p| p == permission)
    }

    fn as_player(&self) -> Option<Player> {
        self.player.clone()
    }

    fn send_message(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Counts how often nodes created from it are parsed and completed.
#[derive(Clone, Default)]
pub struct Probe {
    parses: Arc<AtomicUsize>,
    completions: Arc<AtomicUsize>,
}

impl Probe {
    /// A string node that fails to parse the token `bad`.
    pub fn node(&self, usage: &str) -> ArgumentNode {
        let parses = self.parses.clone();
        let completions = self.completions.clone();
        ArgumentNode::new(
            usage,
            move |_| {
                completions.fetch_add(1, Ordering::SeqCst);
                vec!["good".to_string(), "bad".to_string()]
            },
            move |_, token| {
                parses.fetch_add(1, Ordering::SeqCst);
                if token == "bad" {
                    Err(ParseFailure::message(format!("Bad token {}", token)))
                } else {
                    Ok(Value::String(token.to_string()))
                }
            },
        )
    }

    pub fn parses(&self) -> usize {
        self.parses.load(Ordering::SeqCst)
    }

    pub fn completions(&self) -> usize {
        self.completions.load(Ordering::SeqCst)
    }
}

/// Counts executor invocations.
#[derive(Clone, Default)]
pub struct Calls(Arc<AtomicUsize>);

impl Calls {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}
