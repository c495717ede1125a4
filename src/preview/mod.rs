//!
//! Renderer collaborators, and image-based previews of leg geometry
//!

use std::path::{Path, PathBuf};

use crate::controller::state::LegFrame;

pub mod canvas;
pub mod error;

use canvas::PreviewCanvas;
use error::PreviewError;

///
/// The trait for all collaborators receiving leg geometry to implement.
/// Calls are synchronous; whatever a renderer does with a frame is invisible to the walk.
///
/// # Functions:
/// - `render_leg`: Receives the geometry of one leg, once per leg per tick
/// - `finish_tick`: Called once every leg of a tick has been rendered
///
pub trait Renderer {
    fn render_leg(&mut self, leg: usize, frame: &LegFrame);

    fn finish_tick(&mut self, _tick: u64) {}
}

///
/// A renderer that keeps every frame it is handed, for inspection or replay.
///
/// # Fields:
/// - `frames`: Each rendered frame, as (tick, leg index, frame)
/// - `finished`: The ticks that were finished, in order
/// - `current_tick`: The tick frames are currently being recorded for
///
#[derive(Default)]
pub struct FrameRecorder {
    frames: Vec<(u64, usize, LegFrame)>,
    finished: Vec<u64>,
    current_tick: u64,
}

impl FrameRecorder {
    pub fn frames(&self) -> &[(u64, usize, LegFrame)] {
        &self.frames
    }

    pub fn finished_ticks(&self) -> &[u64] {
        &self.finished
    }

    ///
    /// # Returns:
    /// - Every frame recorded for one leg, in tick order
    ///
    pub fn leg_frames(&self, leg: usize) -> impl Iterator<Item = &LegFrame> {
        self.frames.iter().filter(move |(_, idx, _)| *idx == leg).map(|(_, _, frame)| frame)
    }
}

impl Renderer for FrameRecorder {
    fn render_leg(&mut self, leg: usize, frame: &LegFrame) {
        self.frames.push((self.current_tick, leg, *frame));
    }

    fn finish_tick(&mut self, tick: u64) {
        self.finished.push(tick);
        self.current_tick = tick + 1;
    }
}

///
/// A renderer drawing each leg into its own panel of a grid, like the side-by-side plots of a
/// walking quadruped. Each tick replaces the previous drawing.
///
/// # Fields:
/// - `canvas`: The image the panels are drawn on
/// - `panel_size`: The width and height of one panel, in world units
/// - `columns` and `rows`: The panel grid
/// - `ground`: An optional ground height drawn as a horizontal line in each panel
/// - `frame_dir`: If set, each finished tick is saved here as `frame_NNNNN.png`
/// - `clear_pending`: Whether the next leg starts a new tick
/// - `save_error`: The first frame that failed to save since the last `take_error`
///
pub struct CanvasRenderer {
    canvas: PreviewCanvas,
    panel_size: (u32, u32),
    columns: usize,
    rows: usize,
    ground: Option<f64>,
    frame_dir: Option<PathBuf>,
    clear_pending: bool,
    save_error: Option<(u64, PreviewError)>,
}

impl CanvasRenderer {
    ///
    /// Creates a renderer with enough panels for `legs` legs, two per row.
    ///
    /// # Parameters:
    /// - `legs`: The number of legs to lay out
    /// - `panel_size`: The width and height of one panel, in world units
    /// - `scale`: An optional number of pixels per world unit, defaults to 1
    ///
    /// # Returns:
    /// - A new `CanvasRenderer` instance
    ///
    pub fn new(legs: usize, panel_size: (u32, u32), scale: Option<u32>) -> CanvasRenderer {
        let columns = legs.clamp(1, 2);
        let rows = legs.max(1).div_ceil(columns);
        let canvas = PreviewCanvas::new(
            panel_size.0 * columns as u32,
            panel_size.1 * rows as u32,
            scale,
        );

        CanvasRenderer {
            canvas,
            panel_size,
            columns,
            rows,
            ground: None,
            frame_dir: None,
            clear_pending: true,
            save_error: None,
        }
    }

    pub fn with_ground(mut self, ground: f64) -> CanvasRenderer {
        self.ground = Some(ground);
        self
    }

    pub fn with_frame_dir(mut self, dir: impl Into<PathBuf>) -> CanvasRenderer {
        self.frame_dir = Some(dir.into());
        self
    }

    pub fn canvas(&self) -> &PreviewCanvas {
        &self.canvas
    }

    ///
    /// Saves the current drawing to a PNG file.
    ///
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PreviewError> {
        self.canvas.save(path)
    }

    ///
    /// Frame saving happens inside `finish_tick`, which cannot return an error, so the first
    /// failure is held here until the caller asks for it. Later failures are only logged.
    ///
    /// # Returns:
    /// - The tick and error of the first frame that failed to save, if any, clearing it
    ///
    pub fn take_error(&mut self) -> Option<(u64, PreviewError)> {
        self.save_error.take()
    }

    ///
    /// # Returns:
    /// - The offset of a leg's panel from the bottom left of the canvas, in world units
    ///
    fn panel_origin(&self, leg: usize) -> (f64, f64) {
        let column = leg % self.columns;
        let row = (leg / self.columns).min(self.rows - 1);

        // row 0 is drawn at the top
        let x = (column as u32 * self.panel_size.0) as f64;
        let y = ((self.rows - 1 - row) as u32 * self.panel_size.1) as f64;
        (x, y)
    }

    fn start_tick(&mut self) {
        self.canvas.clear();

        if let Some(ground) = self.ground {
            let width = (self.columns as u32 * self.panel_size.0) as f64;
            for row in 0..self.rows {
                let y = ((self.rows - 1 - row) as u32 * self.panel_size.1) as f64 + ground;
                self.canvas.line(0., y, width, y);
            }
        }

        self.clear_pending = false;
    }
}

impl Renderer for CanvasRenderer {
    fn render_leg(&mut self, leg: usize, frame: &LegFrame) {
        if self.clear_pending {
            self.start_tick();
        }

        let (ox, oy) = self.panel_origin(leg);
        let (pivot, elbow, wrist, foot) = (frame.pivot, frame.elbow, frame.wrist, frame.foot);

        self.canvas.line(ox + pivot.x, oy + pivot.y, ox + elbow.x, oy + elbow.y);
        self.canvas.line(ox + elbow.x, oy + elbow.y, ox + wrist.x, oy + wrist.y);
        self.canvas.cross(ox + foot.x, oy + foot.y, 3.);
    }

    fn finish_tick(&mut self, tick: u64) {
        self.clear_pending = true;

        if let Some(dir) = &self.frame_dir {
            let path = dir.join(format!("frame_{:05}.png", tick));
            if let Err(err) = self.canvas.save(&path) {
                log::error!("failed to save preview frame {} to {}: {}", tick, path.display(), err);
                self.save_error.get_or_insert((tick, err));
            }
        }
    }
}
