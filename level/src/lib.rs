use terrain::{Terrain, TerrainSegment, TerrainTemplate, TerrainTemplateDescriptor};
use tracing::debug;

mod actor;
mod error;
mod registry;
mod room;

pub use actor::Actor;
pub use error::LevelError;
pub use registry::TemplateRegistry;
pub use room::Room;

/// Terrain templates and the rooms that place them.
#[derive(Default, Debug)]
pub struct Level {
    templates: TemplateRegistry,
    rooms: Vec<Room>,
}

impl Level {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    pub fn register_template(
        &mut self,
        name: impl Into<String>,
        descriptor: TerrainTemplateDescriptor,
    ) -> Result<(), LevelError> {
        let template = TerrainTemplate::try_from(descriptor)?;
        self.templates.register(name, template)?;
        Ok(())
    }

    /// Builds an undocked terrain of the named kind. Docking happens when a
    /// room takes it.
    pub fn build_terrain<S>(
        &self,
        template_name: &str,
        segments: impl IntoIterator<Item = S>,
    ) -> Result<Terrain, LevelError>
    where
        S: Into<TerrainSegment>,
    {
        let template = self
            .templates
            .get(template_name)
            .ok_or_else(|| LevelError::UnknownTemplate(template_name.into()))?;

        Ok(Terrain::new(template, segments)?)
    }

    pub fn add_room(&mut self, room: Room) -> usize {
        debug!(room = room.name(), terrains = room.terrains().count(), "added room");
        self.rooms.push(room);
        self.rooms.len() - 1
    }

    pub fn room(&self, index: usize) -> Option<&Room> {
        self.rooms.get(index)
    }

    pub fn room_mut(&mut self, index: usize) -> Option<&mut Room> {
        self.rooms.get_mut(index)
    }

    pub fn room_named(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.name() == name)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }
}
