//! Gesture script format
//!
//! A gesture script records the raw input for one player surface as
//! newline-delimited JSON. The first line is a header object, every
//! following line is an event array:
//!
//! ```text
//! {"version":1,"container_width":400,"duration":120,"track":{"origin_x":0,"width_px":320}}
//! [1000,"tap",310]
//! [1120,"tap",305]
//! [4000,"press",160]
//! [4100,"drag",200]
//! [4200,"release"]
//! [8000,"tick"]
//! ```
//!
//! Timestamps are milliseconds on a monotonic clock and must not decrease.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::controller::TrackGeometry;

/// Supported script format version.
pub const SCRIPT_VERSION: u8 = 1;

/// Gesture script header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptHeader {
    pub version: u8,
    /// Width of the tappable video surface
    pub container_width: f64,
    /// Stream duration in seconds (0 when unknown)
    #[serde(default)]
    pub duration: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<TrackGeometry>,
    /// Whether playback is running when the script starts
    #[serde(default)]
    pub playing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ScriptHeader {
    pub fn new(container_width: f64, duration: f64) -> Self {
        Self {
            version: SCRIPT_VERSION,
            container_width,
            duration,
            track: None,
            playing: false,
            title: None,
        }
    }
}

/// Event type codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptEventKind {
    /// Touch-down on the video surface
    Tap, // "tap"
    /// Touch-down on the seek track
    Press, // "press"
    /// Finger moved along the seek track
    Drag, // "drag"
    /// Finger lifted from the seek track
    Release, // "release"
    /// Clock advance with no input
    Tick, // "tick"
}

impl ScriptEventKind {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "tap" => Some(ScriptEventKind::Tap),
            "press" => Some(ScriptEventKind::Press),
            "drag" => Some(ScriptEventKind::Drag),
            "release" => Some(ScriptEventKind::Release),
            "tick" => Some(ScriptEventKind::Tick),
            _ => None,
        }
    }

    pub fn to_code(&self) -> &'static str {
        match self {
            ScriptEventKind::Tap => "tap",
            ScriptEventKind::Press => "press",
            ScriptEventKind::Drag => "drag",
            ScriptEventKind::Release => "release",
            ScriptEventKind::Tick => "tick",
        }
    }

    /// Whether events of this kind carry an x position.
    pub fn needs_position(&self) -> bool {
        matches!(
            self,
            ScriptEventKind::Tap | ScriptEventKind::Press | ScriptEventKind::Drag
        )
    }
}

/// An event in the gesture script
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptEvent {
    pub timestamp_ms: u64,
    pub kind: ScriptEventKind,
    /// Horizontal position for tap/press/drag
    pub x: Option<f64>,
}

impl ScriptEvent {
    pub fn new(timestamp_ms: u64, kind: ScriptEventKind, x: Option<f64>) -> Self {
        Self {
            timestamp_ms,
            kind,
            x,
        }
    }

    pub fn tap(timestamp_ms: u64, x: f64) -> Self {
        Self::new(timestamp_ms, ScriptEventKind::Tap, Some(x))
    }

    pub fn press(timestamp_ms: u64, x: f64) -> Self {
        Self::new(timestamp_ms, ScriptEventKind::Press, Some(x))
    }

    pub fn drag(timestamp_ms: u64, x: f64) -> Self {
        Self::new(timestamp_ms, ScriptEventKind::Drag, Some(x))
    }

    pub fn release(timestamp_ms: u64) -> Self {
        Self::new(timestamp_ms, ScriptEventKind::Release, None)
    }

    pub fn tick(timestamp_ms: u64) -> Self {
        Self::new(timestamp_ms, ScriptEventKind::Tick, None)
    }

    /// Parse an event from a JSON line
    pub fn from_json(line: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(line).context("Failed to parse event JSON")?;

        let arr = value.as_array().context("Event must be a JSON array")?;

        if arr.len() < 2 {
            bail!("Event array must have at least 2 elements");
        }

        let timestamp_ms = arr[0]
            .as_u64()
            .context("Event timestamp must be a non-negative integer")?;

        let code = arr[1].as_str().context("Event type must be a string")?;

        let kind = ScriptEventKind::from_code(code)
            .with_context(|| format!("Unknown event type: {}", code))?;

        let x = match arr.get(2) {
            Some(value) => Some(value.as_f64().context("Event position must be a number")?),
            None => None,
        };

        if kind.needs_position() && x.is_none() {
            bail!("Event type '{}' requires a position", code);
        }

        Ok(ScriptEvent {
            timestamp_ms,
            kind,
            x,
        })
    }

    /// Convert event to JSON string
    pub fn to_json(&self) -> String {
        let value = match self.x {
            Some(x) => serde_json::json!([self.timestamp_ms, self.kind.to_code(), x]),
            None => serde_json::json!([self.timestamp_ms, self.kind.to_code()]),
        };
        value.to_string()
    }
}

/// Complete gesture script
#[derive(Debug, Clone, PartialEq)]
pub struct GestureScript {
    pub header: ScriptHeader,
    pub events: Vec<ScriptEvent>,
}

impl GestureScript {
    pub fn new(header: ScriptHeader) -> Self {
        Self {
            header,
            events: Vec::new(),
        }
    }

    /// Parse a gesture script from a path
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file =
            fs::File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
        let reader = BufReader::new(file);

        Self::parse_reader(reader)
    }

    /// Parse a gesture script from a reader
    pub fn parse_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();

        // First line is the header
        let header_line = lines
            .next()
            .context("File is empty")?
            .context("Failed to read header line")?;

        let header: ScriptHeader =
            serde_json::from_str(&header_line).context("Failed to parse header")?;

        if header.version != SCRIPT_VERSION {
            bail!(
                "Only gesture script version {} is supported (got version {})",
                SCRIPT_VERSION,
                header.version
            );
        }

        if !(header.container_width.is_finite() && header.container_width > 0.0) {
            bail!(
                "Container width must be positive (got {})",
                header.container_width
            );
        }

        // Remaining lines are events
        let mut events: Vec<ScriptEvent> = Vec::new();
        for (line_num, line_result) in lines.enumerate() {
            let line =
                line_result.with_context(|| format!("Failed to read line {}", line_num + 2))?;

            if line.trim().is_empty() {
                continue;
            }

            let event = ScriptEvent::from_json(&line)
                .with_context(|| format!("Failed to parse event on line {}", line_num + 2))?;

            if let Some(previous) = events.last() {
                if event.timestamp_ms < previous.timestamp_ms {
                    bail!(
                        "Timestamp goes backwards on line {} ({}ms after {}ms)",
                        line_num + 2,
                        event.timestamp_ms,
                        previous.timestamp_ms
                    );
                }
            }
            events.push(event);
        }

        Ok(GestureScript { header, events })
    }

    /// Write the script to a path
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut file =
            fs::File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;

        self.write_to(&mut file)
    }

    /// Write the script to a writer
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let header_json =
            serde_json::to_string(&self.header).context("Failed to serialize header")?;
        writeln!(writer, "{}", header_json)?;

        for event in &self.events {
            writeln!(writer, "{}", event.to_json())?;
        }

        Ok(())
    }

    /// Timestamp of the last event, if any.
    pub fn end_ms(&self) -> Option<u64> {
        self.events.last().map(|e| e.timestamp_ms)
    }
}
