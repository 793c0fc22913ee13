use crate::permissions::PermissionOverrides;
use cmdspec_core::player::{Location, Player, World};
use cmdspec_core::server::{CommandSender, Server};

/// A fixed set of players and worlds for trying commands out from a terminal.
pub struct DemoServer {
    players: Vec<Player>,
    worlds: Vec<World>,
}

impl DemoServer {
    pub fn new() -> DemoServer {
        DemoServer {
            players: vec![
                Player::new("Alice", 0x1, Location::new("world", 12.5, 64.0, -30.0)),
                Player::new("Bob", 0x2, Location::new("world", 100.0, 70.0, 8.25)),
                Player::new("Steve", 0x3, Location::new("world_nether", -4.0, 32.0, 16.0)),
            ],
            worlds: vec![
                World::new("world"),
                World::new("world_nether"),
                World::new("world_the_end"),
            ],
        }
    }
}

impl Server for DemoServer {
    fn online_players(&self) -> Vec<Player> {
        self.players.clone()
    }

    fn worlds(&self) -> Vec<World> {
        self.worlds.clone()
    }
}

pub struct ConsoleSender {
    player: Option<Player>,
    default_permission: bool,
    overrides: PermissionOverrides,
}

impl ConsoleSender {
    /// `player` makes the console act as that player; `default_permission` is
    /// the answer for any permission no override matches.
    pub fn new(player: Option<Player>, default_permission: bool, denied: &[String]) -> Self {
        let mut overrides = PermissionOverrides::default();
        for permission in denied {
            overrides.insert(permission, false);
        }
        ConsoleSender {
            player,
            default_permission,
            overrides,
        }
    }
}

impl CommandSender for ConsoleSender {
    fn name(&self) -> String {
        match &self.player {
            Some(player) => player.name.clone(),
            None => "CONSOLE".to_string(),
        }
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.overrides
            .get_node_val(permission)
            .unwrap_or(self.default_permission)
    }

    fn as_player(&self) -> Option<Player> {
        self.player.clone()
    }

    fn send_message(&self, message: &str) {
        println!("{}", message);
    }
}
