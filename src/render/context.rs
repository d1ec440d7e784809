use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Canvas-like immediate-mode 2D drawing surface.
///
/// Paint state (stroke/fill style, line width, global alpha) and the current
/// transform are saved and restored together. The current path survives
/// `stroke` and `fill` until the next `begin_path`.
pub trait DrawingContext {
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_fill_style(&mut self, color: &str);
    fn set_global_alpha(&mut self, alpha: f64);

    fn save(&mut self) -> ChartResult<()>;
    fn restore(&mut self) -> ChartResult<()>;
    fn translate(&mut self, x: f64, y: f64);
    /// Clockwise rotation in radians.
    fn rotate(&mut self, radians: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn stroke(&mut self) -> ChartResult<()>;
    fn fill(&mut self) -> ChartResult<()>;
}

/// One call issued against a `RecordingContext`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    SetStrokeStyle(String),
    SetLineWidth(f64),
    SetFillStyle(String),
    SetGlobalAlpha(f64),
    Save,
    Restore,
    Translate { x: f64, y: f64 },
    Rotate { radians: f64 },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    ClosePath,
    Stroke,
    Fill,
}

/// Headless context that records every call, for tests and diagnostics.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    save_depth: usize,
}

impl RecordingContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of `save` calls not yet matched by `restore`.
    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.save_depth
    }

    #[must_use]
    pub fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|command| predicate(command)).count()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.commands).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize draw commands: {e}"))
        })
    }
}

impl DrawingContext for RecordingContext {
    fn set_stroke_style(&mut self, color: &str) {
        self.commands
            .push(DrawCommand::SetStrokeStyle(color.to_owned()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::SetLineWidth(width));
    }

    fn set_fill_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::SetFillStyle(color.to_owned()));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.commands.push(DrawCommand::SetGlobalAlpha(alpha));
    }

    fn save(&mut self) -> ChartResult<()> {
        self.save_depth += 1;
        self.commands.push(DrawCommand::Save);
        Ok(())
    }

    fn restore(&mut self) -> ChartResult<()> {
        if self.save_depth == 0 {
            return Err(ChartError::InvalidData(
                "restore called without a matching save".to_owned(),
            ));
        }
        self.save_depth -= 1;
        self.commands.push(DrawCommand::Restore);
        Ok(())
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::Translate { x, y });
    }

    fn rotate(&mut self, radians: f64) {
        self.commands.push(DrawCommand::Rotate { radians });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn stroke(&mut self) -> ChartResult<()> {
        self.commands.push(DrawCommand::Stroke);
        Ok(())
    }

    fn fill(&mut self) -> ChartResult<()> {
        self.commands.push(DrawCommand::Fill);
        Ok(())
    }
}
