use super::{Location, Options, Transformable, Walker};
use crate::case::CaseStyle;
use crate::error::Result;
use toml::map::Map;
use toml::Value;

impl Transformable for Value {
    fn transform(&self, style: CaseStyle, options: &Options) -> Result<Self> {
        Walker::new(style, options).table(self, &Location::Root, 0)
    }
}

impl Walker<'_> {
    pub(crate) fn table(&self, value: &Value, at: &Location<'_>, depth: usize) -> Result<Value> {
        match value {
            Value::Array(items) => {
                let depth = self.descend(depth)?;
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| self.table(item, &Location::Index(at, i), depth))
                    .collect::<Result<Vec<_>>>()
                    .map(Value::Array)
            }
            Value::Table(map) => {
                let depth = self.descend(depth)?;
                let mut renamed = Map::with_capacity(map.len());
                for (key, item) in map {
                    let new_key = self.rename(key);
                    let new_value = self.table(item, &Location::Key(at, key), depth)?;
                    if renamed.contains_key(&new_key) {
                        self.collide(&new_key, at)?;
                    }
                    renamed.insert(new_key, new_value);
                }
                Ok(Value::Table(renamed))
            }
            primitive => Ok(primitive.clone()),
        }
    }
}
