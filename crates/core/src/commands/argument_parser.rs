use super::context::CommandSource;
use super::selector::{self, Selector};
use crate::commands::error::ParseFailure;
use crate::commands::value::Value;
use crate::player::Location;

pub type ArgumentParseResult = Result<Value, ParseFailure>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn of(self, location: &Location) -> f64 {
        match self {
            Axis::X => location.x,
            Axis::Y => location.y,
            Axis::Z => location.z,
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

fn owned(candidates: &[&str]) -> Vec<String> {
    candidates.iter().map(|s| s.to_string()).collect()
}

pub fn suggest_players(source: CommandSource<'_>) -> Vec<String> {
    source
        .server()
        .online_players()
        .into_iter()
        .map(|player| player.name)
        .chain(Selector::TOKENS.iter().map(|token| token.to_string()))
        .collect()
}

pub fn parse_players(source: CommandSource<'_>, token: &str) -> ArgumentParseResult {
    selector::resolve_players(source, token).map(Value::Players)
}

pub fn suggest_worlds(source: CommandSource<'_>) -> Vec<String> {
    source
        .server()
        .worlds()
        .into_iter()
        .map(|world| world.name)
        .collect()
}

pub fn parse_world(source: CommandSource<'_>, token: &str) -> ArgumentParseResult {
    source
        .server()
        .world(token)
        .map(Value::World)
        .ok_or_else(|| ParseFailure::WorldNotFound {
            name: token.to_string(),
        })
}

pub fn suggest_booleans(_: CommandSource<'_>) -> Vec<String> {
    owned(&["true", "false"])
}

/// Lenient on purpose: only `true` (any case) is true, every other token is
/// `false` rather than an error.
pub fn parse_boolean(_: CommandSource<'_>, token: &str) -> ArgumentParseResult {
    Ok(Value::Boolean(token.eq_ignore_ascii_case("true")))
}

pub fn suggest_times(_: CommandSource<'_>) -> Vec<String> {
    owned(&["1ms", "1s", "1m", "1h", "1d"])
}

pub fn parse_time(source: CommandSource<'_>, token: &str) -> ArgumentParseResult {
    source
        .server()
        .parse_duration(token)
        .map(Value::Duration)
        .ok_or_else(|| ParseFailure::InvalidDuration {
            token: token.to_string(),
        })
}

pub fn suggest_numbers(_: CommandSource<'_>) -> Vec<String> {
    owned(&["1", "2", "3", "4", "5", "number"])
}

fn parse_decimal(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

pub fn parse_number(_: CommandSource<'_>, token: &str) -> ArgumentParseResult {
    parse_decimal(token)
        .map(Value::Number)
        .ok_or_else(|| ParseFailure::InvalidNumber {
            token: token.to_string(),
        })
}

pub fn suggest_coordinate(source: CommandSource<'_>, axis: Axis) -> Vec<String> {
    match source.player() {
        Some(player) => vec![axis.of(&player.location).to_string()],
        None => owned(&["1", "2", "3", "4", "5"]),
    }
}

pub fn parse_coordinate(_: CommandSource<'_>, token: &str) -> ArgumentParseResult {
    parse_decimal(token)
        .map(Value::Coordinate)
        .ok_or_else(|| ParseFailure::InvalidCoordinate {
            token: token.to_string(),
        })
}

pub fn parse_string(_: CommandSource<'_>, token: &str) -> ArgumentParseResult {
    Ok(Value::String(token.to_string()))
}

pub fn parse_integer(token: &str, min: i32, max: i32) -> ArgumentParseResult {
    let value = token
        .parse::<i32>()
        .map_err(|_| ParseFailure::InvalidInteger {
            token: token.to_string(),
        })?;
    if !(min..=max).contains(&value) {
        return Err(ParseFailure::OutOfRange { value, min, max });
    }
    Ok(Value::Integer(value))
}
