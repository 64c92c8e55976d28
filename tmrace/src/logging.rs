//! On-screen logger. Raw mode owns the terminal, so log output is drawn as a
//! decaying overlay in the top-right corner instead of going to stderr.

use std::{
    cmp::Reverse,
    sync::{Mutex, MutexGuard, OnceLock},
    time::{Duration, Instant},
};

use cmrace::dims::Dims;
use crossterm::style::{Attribute, Color, ContentStyle};
use log::{Log, Metadata, Record};
use unicode_width::UnicodeWidthStr;

use crate::{
    renderer::{drawable::Drawable, Frame},
    ui::style_with_attribute,
};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    const DEFAULT_DECAY: Duration = Duration::from_secs(5);
    const DEFAULT_MAX_VISIBLE: usize = 5;

    LOGGER.get_or_init(|| AppLogger::new(log::Level::Info, DEFAULT_DECAY, DEFAULT_MAX_VISIBLE))
}

pub fn init() {
    log::set_logger(get_logger()).unwrap();
    log::set_max_level(log::LevelFilter::Trace);
}

#[derive(Debug, Clone)]
pub struct Message {
    pub level: log::Level,
    pub pushed: Instant,
    pub message: String,
    pub source: String,
}

pub struct AppLogger {
    min_level: log::Level,
    decay: Duration,
    max_visible: usize,
    messages: Mutex<Vec<Message>>,
}

impl AppLogger {
    fn new(min_level: log::Level, decay: Duration, max_visible: usize) -> Self {
        Self {
            min_level,
            decay,
            max_visible,
            messages: Mutex::new(Vec::new()),
        }
    }

    fn lock_messages(&self) -> MutexGuard<Vec<Message>> {
        self.messages
            .lock()
            .expect("thread holding the log panicked, cannot use this logger")
    }

    /// Undecayed messages, most severe first, newest first within a level.
    pub fn recent(&self) -> Vec<Message> {
        let mut messages = self.lock_messages();

        let now = Instant::now();
        messages.retain(|msg| now.duration_since(msg.pushed) < self.decay);

        let mut out = messages.clone();
        out.sort_by_key(|msg| (msg.level, Reverse(msg.pushed)));
        out
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.lock_messages().push(Message {
                level: record.level(),
                pushed: Instant::now(),
                message: record.args().to_string(),
                source: record.module_path().unwrap_or("unknown").to_string(),
            });
        }
    }

    fn flush(&self) {}
}

impl Drawable for AppLogger {
    fn draw(&self, pos: Dims, frame: &mut Frame, style: ContentStyle) {
        for (i, msg) in self.recent().into_iter().take(self.max_visible).enumerate() {
            let color = match msg.level {
                log::Level::Error => Color::Red,
                log::Level::Warn => Color::Yellow,
                log::Level::Info => Color::White,
                log::Level::Debug => Color::Blue,
                log::Level::Trace => Color::Grey,
            };

            let indicator_style = ContentStyle {
                foreground_color: Some(color),
                ..style
            };
            let source_style = style_with_attribute(style, Attribute::Dim);

            let y = pos.1 + i as i32;
            let len = msg.source.width() + 4 + msg.message.width();

            let src_x = frame.size().0 - len as i32 - 2;
            let msg_x = src_x + msg.source.width() as i32 + 4;

            msg.source.draw(Dims(src_x, y), frame, source_style);
            "->".draw(Dims(msg_x - 3, y), frame, style);
            msg.message.draw(Dims(msg_x, y), frame, style);
            '|'.draw(Dims(frame.size().0 - 1, y), frame, indicator_style);
        }
    }
}
