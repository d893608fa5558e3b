//! Declarative game setups.

use std::str::FromStr;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Starting state for a game.
///
/// Everything is created in declaration order: factions first, then items,
/// then characters, so characters can refer to the other two by name.
#[derive(Clone, Default, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Scenario {
    pub factions: Vec<String>,
    pub items: IndexMap<String, ItemSpec>,
    pub characters: IndexMap<String, CharacterSpec>,
}

#[derive(Clone, Default, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ItemSpec {
    pub health: i32,
    /// Items with damage are weapons, the rest are consumables.
    pub damage: Option<i32>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CharacterSpec {
    pub level: i32,
    pub factions: Vec<String>,
    /// Weapon the character equips at the start.
    pub wields: Option<String>,
}

impl Default for CharacterSpec {
    fn default() -> Self {
        CharacterSpec {
            level: 1,
            factions: Default::default(),
            wields: None,
        }
    }
}

impl FromStr for Scenario {
    type Err = anyhow::Error;

    /// Parse a scenario from IDM text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(idm::from_str(s)?)
    }
}

impl Game {
    pub fn from_scenario(scenario: &Scenario) -> anyhow::Result<Game> {
        let mut game = Game::new();
        let mut names: HashMap<&str, Entity> = HashMap::default();

        for name in &scenario.factions {
            if names.contains_key(name.as_str()) {
                bail!("Duplicate name {name:?}");
            }
            names.insert(name.as_str(), game.create_faction(name.as_str()));
        }

        for (name, spec) in &scenario.items {
            if names.contains_key(name.as_str()) {
                bail!("Duplicate name {name:?}");
            }
            let item = match spec.damage {
                Some(damage) => game.create_weapon(spec.health, damage),
                None => game.create_item(spec.health),
            }
            .with_context(|| format!("Bad item {name:?}"))?;
            item.set_name(&mut game, name.as_str());
            names.insert(name.as_str(), item);
        }

        for (name, spec) in &scenario.characters {
            if names.contains_key(name.as_str()) {
                bail!("Duplicate name {name:?}");
            }
            let c = game
                .create_character(spec.level)
                .with_context(|| format!("Bad character {name:?}"))?;
            c.set_name(&mut game, name.as_str());
            names.insert(name.as_str(), c);

            let mut factions = Vec::new();
            for f in &spec.factions {
                match names.get(f.as_str()) {
                    Some(e) if e.is_faction(&game) => factions.push(*e),
                    _ => bail!("{name:?}: Unknown faction {f:?}"),
                }
            }
            c.join(&mut game, &factions);

            if let Some(w) = &spec.wields {
                match names.get(w.as_str()) {
                    Some(e) if e.is_weapon(&game) => c.use_item(&mut game, e),
                    Some(_) => bail!("{name:?}: {w:?} is not a weapon"),
                    None => bail!("{name:?}: Unknown weapon {w:?}"),
                }
            }
        }

        log::info!(
            "Scenario loaded: {} factions, {} items, {} characters",
            scenario.factions.len(),
            scenario.items.len(),
            scenario.characters.len()
        );

        Ok(game)
    }
}
