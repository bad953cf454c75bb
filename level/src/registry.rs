use std::{collections::HashMap, rc::Rc};

use terrain::TerrainTemplate;
use tracing::debug;

use crate::LevelError;

/// Owns one template per terrain kind for the lifetime of a level.
#[derive(Default, Debug)]
pub struct TemplateRegistry {
    templates: HashMap<String, Rc<TerrainTemplate>>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        template: TerrainTemplate,
    ) -> Result<Rc<TerrainTemplate>, LevelError> {
        let name = name.into();
        if self.templates.contains_key(&name) {
            return Err(LevelError::DuplicateTemplate(name));
        }

        debug!(
            name = %name,
            path = template.object_type_path(),
            segment_length = template.segment_length(),
            "registered terrain template"
        );

        let template = Rc::new(template);
        self.templates.insert(name, template.clone());
        Ok(template)
    }

    pub fn get(&self, name: &str) -> Option<Rc<TerrainTemplate>> {
        self.templates.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use terrain::TerrainPosition;

    use super::*;

    fn grass() -> TerrainTemplate {
        TerrainTemplate::new("Terrain/Grass", TerrainPosition::Top, 40, 0.9, [8]).unwrap()
    }

    #[test]
    fn lookups_share_the_registered_template() {
        let mut registry = TemplateRegistry::new();
        let registered = registry.register("grass", grass()).unwrap();

        let found = registry.get("grass").unwrap();

        assert!(Rc::ptr_eq(&registered, &found));
        assert_eq!(registry.len(), 1);
        assert!(registry.get("sand").is_none());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut registry = TemplateRegistry::new();
        registry.register("grass", grass()).unwrap();

        assert_eq!(
            registry.register("grass", grass()),
            Err(LevelError::DuplicateTemplate("grass".into()))
        );
        assert_eq!(registry.len(), 1);
    }
}
