use std::fmt;

/// A position inside a named world.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub world: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Location {
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64) -> Location {
        Location {
            world: world.into(),
            x,
            y,
            z,
        }
    }
}

/// A snapshot of an online player, as handed out by the host [`Server`].
///
/// [`Server`]: crate::server::Server
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub uuid: u128,
    pub location: Location,
}

impl Player {
    pub fn new(name: impl Into<String>, uuid: u128, location: Location) -> Player {
        Player {
            name: name.into(),
            uuid,
            location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct World {
    pub name: String,
}

impl World {
    pub fn new(name: impl Into<String>) -> World {
        World { name: name.into() }
    }
}

pub struct HyphenatedUUID(pub u128);

impl fmt::Display for HyphenatedUUID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut hex = format!("{:032x}", self.0);
        hex.insert(8, '-');
        hex.insert(13, '-');
        hex.insert(18, '-');
        hex.insert(23, '-');
        write!(f, "{}", hex)
    }
}
