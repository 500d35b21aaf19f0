//! Helpers shared by the unit tests.

use std::io;
use std::sync::{Arc, Mutex};

use crate::config::GameConfig;
use crate::game::grid::parse_map;
use crate::game::session::GameSession;
use crate::game::state::{Snapshot, World};
use crate::game::systems::Renderer;

#[derive(Debug, Default)]
struct Recorded {
    frames: Vec<Snapshot>,
    victories: usize,
    timeouts: usize,
}

/// In-memory renderer. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    inner: Arc<Mutex<Recorded>>,
}

impl RecordingRenderer {
    pub fn frames(&self) -> usize {
        self.inner.lock().unwrap().frames.len()
    }

    pub fn last_frame(&self) -> Option<Snapshot> {
        self.inner.lock().unwrap().frames.last().cloned()
    }

    pub fn victories(&self) -> usize {
        self.inner.lock().unwrap().victories
    }

    pub fn timeouts(&self) -> usize {
        self.inner.lock().unwrap().timeouts
    }
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        self.inner.lock().unwrap().frames.push(snapshot.clone());
        Ok(())
    }

    fn victory(&mut self) -> io::Result<()> {
        self.inner.lock().unwrap().victories += 1;
        Ok(())
    }

    fn timeout(&mut self) -> io::Result<()> {
        self.inner.lock().unwrap().timeouts += 1;
        Ok(())
    }
}

pub fn session_from_world(world: World) -> (Arc<GameSession>, RecordingRenderer) {
    let renderer = RecordingRenderer::default();
    let session = GameSession::new(world, Box::new(renderer.clone()), GameConfig::default());
    (session, renderer)
}

pub fn session_from_map(text: &str) -> (Arc<GameSession>, RecordingRenderer) {
    session_from_world(World::from_map(parse_map(text)))
}
