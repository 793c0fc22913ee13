use super::context::CommandSource;
use crate::commands::error::{ParseFailure, SelectorError};
use crate::player::Player;

/// One of the reserved `@` tokens of a player-collection argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// `@a`
    AllPlayers,
    /// `@p`
    NearestPlayer,
    /// `@s`
    Sender,
    /// `@r`
    RandomPlayer,
}

impl Selector {
    pub const TOKENS: [&'static str; 4] = ["@a", "@p", "@s", "@r"];

    pub fn parse(token: &str) -> Option<Selector> {
        Some(match token.to_ascii_lowercase().as_str() {
            "@a" => Selector::AllPlayers,
            "@p" => Selector::NearestPlayer,
            "@s" => Selector::Sender,
            "@r" => Selector::RandomPlayer,
            _ => return None,
        })
    }

    pub fn resolve(self, source: CommandSource<'_>) -> Result<Vec<Player>, SelectorError> {
        match self {
            Selector::AllPlayers => Ok(source.server().online_players()),
            // Not a proximity search: a player sender is its own nearest player,
            // anyone else gets a random online player.
            Selector::NearestPlayer => match source.player() {
                Some(player) => Ok(vec![player]),
                None => random_player(source).map(|player| vec![player]),
            },
            Selector::Sender => source
                .player()
                .map(|player| vec![player])
                .ok_or(SelectorError::SenderNotPlayer),
            Selector::RandomPlayer => random_player(source).map(|player| vec![player]),
        }
    }
}

fn random_player(source: CommandSource<'_>) -> Result<Player, SelectorError> {
    let mut players = source.server().online_players();
    if players.is_empty() {
        return Err(SelectorError::NoPlayersOnline);
    }
    let index = source.server().random_index(players.len());
    Ok(players.swap_remove(index.min(players.len() - 1)))
}

/// Resolves a player-collection token: a selector or an exact player name.
pub fn resolve_players(source: CommandSource<'_>, token: &str) -> Result<Vec<Player>, ParseFailure> {
    if let Some(selector) = Selector::parse(token) {
        return Ok(selector.resolve(source)?);
    }

    match source.server().player_exact(token) {
        Some(player) => Ok(vec![player]),
        None => Err(ParseFailure::PlayerNotFound {
            name: token.to_string(),
        }),
    }
}
