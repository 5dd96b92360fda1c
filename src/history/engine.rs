use crate::foundation::error::MaquetteResult;
use crate::scene::Scene;

/// Maximum retained snapshots; recording past this evicts the oldest.
pub const HISTORY_CAPACITY: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EngineState {
    Idle,
    Replaying,
}

/// Linear undo/redo log of full-scene snapshots.
///
/// The engine is a two-state machine: *Idle* accepts [`record`] calls,
/// *Replaying* (entered for the duration of an undo/redo restore) suppresses
/// them, so a restore can never capture itself into the log. The snapshot
/// sequence plus the cursor are the source of truth for "current scene"
/// after any undo/redo.
///
/// [`record`]: HistoryEngine::record
#[derive(Debug)]
pub struct HistoryEngine {
    snapshots: Vec<String>,
    cursor: usize,
    state: EngineState,
}

impl Default for HistoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryEngine {
    /// An empty log.
    pub fn new() -> Self {
        Self {
            snapshots: Vec::new(),
            cursor: 0,
            state: EngineState::Idle,
        }
    }

    /// Append a snapshot of the scene after a committed mutation.
    ///
    /// Any redo tail beyond the cursor is discarded first (the pruned future
    /// is unrecoverable). Calls arriving while a restore replays are
    /// suppressed.
    pub fn record(&mut self, scene: &Scene) -> MaquetteResult<()> {
        if self.state == EngineState::Replaying {
            return Ok(());
        }

        if !self.snapshots.is_empty() {
            self.snapshots.truncate(self.cursor + 1);
        }
        self.snapshots.push(scene.to_json()?);
        self.cursor = self.snapshots.len() - 1;

        if self.snapshots.len() > HISTORY_CAPACITY {
            self.snapshots.remove(0);
            self.cursor -= 1;
        }
        Ok(())
    }

    /// Step back one snapshot, restoring it into `scene`.
    ///
    /// Returns `Ok(false)` without touching anything when already at the
    /// earliest snapshot (underflow is a silent no-op, not an error).
    pub fn undo(&mut self, scene: &mut Scene) -> MaquetteResult<bool> {
        if self.snapshots.is_empty() || self.cursor == 0 {
            return Ok(false);
        }
        let target = self.cursor - 1;
        self.restore(target, scene)?;
        self.cursor = target;
        Ok(true)
    }

    /// Step forward one snapshot, restoring it into `scene`.
    ///
    /// Returns `Ok(false)` when already at the newest snapshot.
    pub fn redo(&mut self, scene: &mut Scene) -> MaquetteResult<bool> {
        if self.snapshots.is_empty() || self.cursor + 1 >= self.snapshots.len() {
            return Ok(false);
        }
        let target = self.cursor + 1;
        self.restore(target, scene)?;
        self.cursor = target;
        Ok(true)
    }

    fn restore(&mut self, index: usize, scene: &mut Scene) -> MaquetteResult<()> {
        self.state = EngineState::Replaying;
        let result = Scene::from_json(&self.snapshots[index]);
        self.state = EngineState::Idle;
        *scene = result?;
        Ok(())
    }

    /// Whether an undo would change the scene.
    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty() && self.cursor > 0
    }

    /// Whether a redo would change the scene.
    pub fn can_redo(&self) -> bool {
        !self.snapshots.is_empty() && self.cursor + 1 < self.snapshots.len()
    }

    /// Number of retained snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the log holds no snapshots yet.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Current cursor position (meaningful only when non-empty).
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
#[path = "../../tests/unit/history/engine.rs"]
mod tests;
