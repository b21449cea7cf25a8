//! User-declared levels and their colors

use super::color::ColorId;
use super::error::{LoggerError, Result};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A validated level name
///
/// Names are non-empty and contain no whitespace or control characters. The
/// original casing is kept; [`LevelName::label`] is the uppercased form
/// printed in log lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LevelName {
    name: String,
    label: String,
}

impl LevelName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(LoggerError::invalid_level_name(name, "name is empty"));
        }
        if let Some(c) = name.chars().find(|c| c.is_whitespace() || c.is_control()) {
            return Err(LoggerError::invalid_level_name(
                name.clone(),
                format!("contains {:?}", c),
            ));
        }
        let label = name.to_uppercase();
        Ok(Self { name, label })
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for LevelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for LevelName {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        LevelName::new(s)
    }
}

impl AsRef<str> for LevelName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

/// Ordered, duplicate-free table of level names and colors
///
/// Declaration order is kept so that [`LevelSpec::iter`] and
/// `Logger::levels` list levels the way the configuration wrote them.
///
/// # Examples
///
/// ```
/// use relogger::{ColorId, LevelSpec};
///
/// let spec = LevelSpec::from_pairs([("info", "blue"), ("error", "red")]).unwrap();
/// assert_eq!(spec.color_of("error"), Some(ColorId::Red));
/// assert_eq!(spec.color_of("debug"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelSpec {
    entries: Vec<(LevelName, ColorId)>,
    index: HashMap<String, usize>,
}

impl LevelSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(name, color)` string pairs, validating both
    pub fn from_pairs<I, N, C>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: AsRef<str>,
    {
        let mut spec = Self::new();
        for (name, color) in pairs {
            let color: ColorId = color.as_ref().parse()?;
            spec.insert(LevelName::new(name)?, color)?;
        }
        Ok(spec)
    }

    /// Add a level. Declaring the same name twice is an error.
    pub fn insert(&mut self, name: LevelName, color: ColorId) -> Result<()> {
        if self.index.contains_key(name.as_str()) {
            return Err(LoggerError::duplicate_level(name.as_str()));
        }
        self.index.insert(name.as_str().to_string(), self.entries.len());
        self.entries.push((name, color));
        Ok(())
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_level(mut self, name: LevelName, color: ColorId) -> Result<Self> {
        self.insert(name, color)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<(&LevelName, ColorId)> {
        self.index
            .get(name)
            .map(|&idx| (&self.entries[idx].0, self.entries[idx].1))
    }

    pub fn color_of(&self, name: &str) -> Option<ColorId> {
        self.get(name).map(|(_, color)| color)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LevelName, ColorId)> {
        self.entries.iter().map(|(name, color)| (name, *color))
    }
}

impl Serialize for LevelSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, color) in &self.entries {
            map.serialize_entry(name.as_str(), color)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LevelSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct LevelSpecVisitor;

        impl<'de> Visitor<'de> for LevelSpecVisitor {
            type Value = LevelSpec;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of level names to color names")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<LevelSpec, A::Error> {
                use serde::de::Error;

                // Entries arrive in document order, which is the order we keep
                let mut spec = LevelSpec::new();
                while let Some((name, color)) = access.next_entry::<String, ColorId>()? {
                    let name = LevelName::new(name).map_err(A::Error::custom)?;
                    spec.insert(name, color).map_err(A::Error::custom)?;
                }
                Ok(spec)
            }
        }

        deserializer.deserialize_map(LevelSpecVisitor)
    }
}
