use crate::player::{Player, World};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// A parsed argument, tagged with the kind of node that produced it.
#[derive(Clone)]
pub enum Value {
    Players(Vec<Player>),
    World(World),
    Boolean(bool),
    Duration(Duration),
    Number(f64),
    Coordinate(f64),
    String(String),
    Integer(i32),
    Custom(Arc<dyn Any + Send + Sync>),
}

impl Value {
    pub(super) fn kind(&self) -> &'static str {
        match self {
            Value::Players(_) => "Players",
            Value::World(_) => "World",
            Value::Boolean(_) => "Boolean",
            Value::Duration(_) => "Duration",
            Value::Number(_) => "Number",
            Value::Coordinate(_) => "Coordinate",
            Value::String(_) => "String",
            Value::Integer(_) => "Integer",
            Value::Custom(_) => "Custom",
        }
    }

    pub fn as_players(&self) -> Option<&[Player]> {
        match self {
            Value::Players(players) => Some(players),
            _ => None,
        }
    }

    pub fn as_world(&self) -> Option<&World> {
        match self {
            Value::World(world) => Some(world),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            Value::Duration(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_coordinate(&self) -> Option<f64> {
        match self {
            Value::Coordinate(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_custom<T: Any>(&self) -> Option<&T> {
        match self {
            Value::Custom(value) => value.downcast_ref(),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Players(players) => f.debug_tuple("Players").field(players).finish(),
            Value::World(world) => f.debug_tuple("World").field(world).finish(),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Duration(d) => f.debug_tuple("Duration").field(d).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::Coordinate(c) => f.debug_tuple("Coordinate").field(c).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Integer(i) => f.debug_tuple("Integer").field(i).finish(),
            Value::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
