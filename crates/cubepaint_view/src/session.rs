use cubepaint_core::{Color, Cube, MoveError};
use cubepaint_prefs::AnimationPreferences;

use crate::{AssemblySequence, AssemblyTask, FlashMap, InputEvent};

/// Everything a frontend needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Sticker state.
    pub cube: Cube,
    /// Highlight strength of recently changed cells.
    pub flash: FlashMap,
}

/// Result of a single animation timer tick.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// No assembly animation is running. The timer can be stopped.
    Idle,
    /// One cell was painted.
    Applied(AssemblyTask),
    /// The last cell was painted on a previous tick and the animation is now
    /// over. This is reported once.
    Finished,
}

/// Error produced by a [`PaintSession`] operation. None of these are fatal;
/// the session is left unchanged.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Some non-center cells have not been painted
    #[error("paint every sticker before assembling the cube ({unpainted} unpainted)")]
    Incomplete {
        /// Number of unpainted non-center cells.
        unpainted: usize,
    },
    /// Replay was requested before the cube was ever assembled
    #[error("assemble the cube first to save a state for the animation")]
    NoSavedState,
    /// Unsupported move tag
    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Cube painting session.
///
/// The session is the single owner of the cube. Frontends mutate it only
/// through [`PaintSession::handle()`], [`PaintSession::start_assembly()`],
/// [`PaintSession::replay()`], and [`PaintSession::tick()`], and poll
/// [`PaintSession::take_repaint_request()`] to learn when to redraw.
#[derive(Debug, Clone)]
pub struct PaintSession {
    cube: Cube,
    /// Color used when a cell is clicked.
    brush: Color,

    /// Cube state from when the assembly animation was last started.
    start_state: Option<Cube>,
    /// Assembly animation in progress.
    assembly: Option<AssemblySequence>,
    flash: FlashMap,

    /// Whether ticks should record frames.
    recording: bool,
    frames: Vec<Snapshot>,

    prefs: AnimationPreferences,
    wants_repaint: bool,
}
impl PaintSession {
    /// Constructs a session with a fresh unpainted cube.
    pub fn new(prefs: AnimationPreferences) -> Self {
        Self::with_cube(Cube::new(), prefs)
    }
    /// Constructs a session starting from an existing cube.
    pub fn with_cube(cube: Cube, mut prefs: AnimationPreferences) -> Self {
        prefs.clamp();
        Self {
            cube,
            brush: Color::White,

            start_state: None,
            assembly: None,
            flash: FlashMap::default(),

            recording: false,
            frames: vec![],

            prefs,
            wants_repaint: true,
        }
    }

    /// Returns the current cube state.
    pub fn cube(&self) -> &Cube {
        &self.cube
    }
    /// Returns the current brush color.
    pub fn brush(&self) -> Color {
        self.brush
    }
    /// Returns the current cell highlights.
    pub fn flash(&self) -> &FlashMap {
        &self.flash
    }
    /// Returns the cube state saved when the assembly animation last started.
    pub fn saved_state(&self) -> Option<&Cube> {
        self.start_state.as_ref()
    }
    /// Returns the animation preferences.
    pub fn prefs(&self) -> &AnimationPreferences {
        &self.prefs
    }

    /// Returns whether the frontend should redraw, and resets the request.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.wants_repaint)
    }
    fn request_repaint(&mut self) {
        self.wants_repaint = true;
    }

    /// Handles a single input event.
    pub fn handle(&mut self, event: InputEvent) -> Result<(), SessionError> {
        match event {
            InputEvent::Click { face, pos } => {
                if self.cube.paint(face, pos, self.brush) {
                    self.request_repaint();
                }
            }
            InputEvent::Paint { face, pos, color } => {
                if self.cube.paint(face, pos, color) {
                    self.request_repaint();
                }
            }
            InputEvent::SetBrush(color) => self.brush = color,
            InputEvent::RotateFace(face) => {
                self.cube.rotate_face_clockwise(face);
                self.request_repaint();
            }
            InputEvent::Move(tag) => {
                self.cube.apply_move_str(&tag)?;
                self.request_repaint();
            }
            InputEvent::ResetSolved => {
                self.cube.solve();
                self.request_repaint();
            }
            InputEvent::RestoreSnapshot => {
                let start = self.start_state.ok_or(SessionError::NoSavedState)?;
                self.stop_assembly();
                self.cube.restore(&start);
                self.request_repaint();
            }
        }
        Ok(())
    }

    /// Returns whether the assembly animation is running.
    pub fn is_assembling(&self) -> bool {
        self.assembly.is_some()
    }
    /// Returns the number of assembly steps left, or `None` if the animation is
    /// not running.
    pub fn assembly_remaining(&self) -> Option<usize> {
        self.assembly.as_ref().map(AssemblySequence::remaining)
    }

    /// Saves the current state and starts the assembly animation.
    ///
    /// Fails if any non-center cell is unpainted.
    pub fn start_assembly(&mut self) -> Result<(), SessionError> {
        let unpainted = self.cube.unpainted_count();
        if unpainted > 0 {
            return Err(SessionError::Incomplete { unpainted });
        }
        self.start_state = Some(self.cube);
        self.play();
        Ok(())
    }
    /// Restores the state saved by [`Self::start_assembly()`] and plays the
    /// assembly animation again.
    pub fn replay(&mut self) -> Result<(), SessionError> {
        let start = self.start_state.ok_or(SessionError::NoSavedState)?;
        self.cube.restore(&start);
        self.request_repaint();
        self.play();
        Ok(())
    }
    fn play(&mut self) {
        let assembly = AssemblySequence::new();
        log::info!("Starting assembly animation ({} steps)", assembly.remaining());
        self.assembly = Some(assembly);
        self.frames.clear();
        self.recording = true;
    }
    fn stop_assembly(&mut self) {
        self.assembly = None;
        self.recording = false;
    }

    /// Advances the assembly animation by one step. This should be called
    /// once per timer tick.
    pub fn tick(&mut self) -> TickOutcome {
        let Some(assembly) = &mut self.assembly else {
            return TickOutcome::Idle;
        };
        let Some(task) = assembly.next_task() else {
            self.stop_assembly();
            log::info!("Cube assembled ({} frames recorded)", self.frames.len());
            return TickOutcome::Finished;
        };

        log::debug!("Painting {}{} {}", task.face, task.pos, task.color);
        task.apply(&mut self.cube);
        self.flash.flash(task.face, task.pos.index());
        self.request_repaint();
        if self.recording {
            let frame = self.redraw();
            self.frames.push(frame);
        }
        TickOutcome::Applied(task)
    }

    /// Handles a redraw: fades cell highlights by one step and returns what
    /// should be drawn.
    ///
    /// Another redraw is requested while any highlight is still visible.
    pub fn redraw(&mut self) -> Snapshot {
        self.wants_repaint = self.flash.decay(self.prefs.flash_decay);
        Snapshot {
            cube: self.cube,
            flash: self.flash.clone(),
        }
    }

    /// Returns whether ticks are currently recording frames.
    pub fn is_recording(&self) -> bool {
        self.recording
    }
    /// Returns the frames recorded by the most recent assembly animation.
    pub fn frames(&self) -> &[Snapshot] {
        &self.frames
    }
}
