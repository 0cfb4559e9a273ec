use std::fmt;

/// Stable identifier assigned to a player when it joins the roster.
///
/// Ids are never reused by the roster that issued them, so a caller holding an
/// id across removals either reaches the same player or gets
/// [`RosterError::UnknownPlayer`](crate::RosterError::UnknownPlayer).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Display name of a player. Always trimmed and never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct PlayerName(String);

impl PlayerName {
    /// Trims `raw` and returns `None` when nothing is left.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PlayerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PlayerName {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value).ok_or("player name must not be blank")
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}

/// A tracked player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: PlayerName,
    pub score: i64,
}

impl Player {
    pub fn new(id: PlayerId, name: PlayerName, score: i64) -> Self {
        Self { id, name, score }
    }

    /// Adds `delta` to the score, saturating at the `i64` bounds.
    pub fn add_points(&mut self, delta: i64) {
        self.score = self.score.saturating_add(delta);
    }
}
