use std::io::Write;
use std::sync::{Mutex, OnceLock};
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Logger {
    fn new(prefix: Option<String>, sink: Box<dyn Write + Send>) -> Self {
        Self {
            prefix,
            sink: Mutex::new(sink),
        }
    }

    pub fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!(
                "[{}][{}][{}:{}] {}",
                timestamp,
                prefix,
                file_name,
                line,
                message
            ),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let formatted = self.format_line(file, line, message);
        if let Ok(mut sink) = self.sink.lock() {
            let _ = writeln!(sink, "{}", formatted);
        }
    }
}

// writes to stderr
pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix, Box::new(std::io::stderr())));
}

// dropped until init_logger is called
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
