use gloo::console;

/// Console logger with a component tag so portal output is filterable in the
/// browser devtools.
pub struct Logger;

impl Logger {
    pub fn debug(component: &str, message: &str) {
        console::debug!(Self::line(component, message));
    }

    pub fn info(component: &str, message: &str) {
        console::log!(Self::line(component, message));
    }

    pub fn warn(component: &str, message: &str) {
        console::warn!(Self::line(component, message));
    }

    pub fn error(component: &str, message: &str) {
        console::error!(Self::line(component, message));
    }

    fn line(component: &str, message: &str) -> String {
        format!("[{}] {}", component, message)
    }
}
