use crate::duration;
use crate::player::{Player, World};
use rand::Rng;
use std::time::Duration;

/// The host runtime that the command engine reads live state from.
///
/// Everything besides the player and world listings has a default, so a host
/// only overrides lookups it can do faster or a random source it wants to
/// control.
pub trait Server {
    fn online_players(&self) -> Vec<Player>;

    fn worlds(&self) -> Vec<World>;

    /// Exact (case-insensitive) name lookup of an online player.
    fn player_exact(&self, name: &str) -> Option<Player> {
        self.online_players()
            .into_iter()
            .find(|player| player.name.eq_ignore_ascii_case(name))
    }

    fn world(&self, name: &str) -> Option<World> {
        self.worlds().into_iter().find(|world| world.name == name)
    }

    /// Returns an index in `0..len`. Never called with `len == 0`.
    fn random_index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }

    fn parse_duration(&self, token: &str) -> Option<Duration> {
        duration::parse_duration(token)
    }
}

/// Whoever issued a command: a player, the console, or anything else the host
/// routes commands from.
pub trait CommandSender {
    fn name(&self) -> String;

    fn has_permission(&self, permission: &str) -> bool;

    /// The player view of this sender, if it is one.
    fn as_player(&self) -> Option<Player> {
        None
    }

    fn send_message(&self, message: &str);
}
