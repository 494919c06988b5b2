use colored::*;

/// Console handles terminal output with colored formatting
pub struct Console {
    user_color: Color,
    assistant_color: Color,
}

impl Console {
    /// Create a new Console with default colors
    pub fn new() -> Self {
        Self {
            user_color: Color::Cyan,
            assistant_color: Color::Green,
        }
    }

    /// Print a user message with colored formatting
    pub fn print_user(&self, message: &str) {
        println!("{} {}", "User:".color(self.user_color).bold(), message);
    }

    /// Print a complete assistant message with colored formatting
    pub fn print_assistant(&self, message: &str) {
        println!(
            "{} {}",
            "Assistant:".color(self.assistant_color).bold(),
            message.color(self.assistant_color)
        );
    }

    /// Print a system message (errors, info, etc.)
    pub fn print_system(&self, message: &str) {
        println!("{} {}", "System:".yellow().bold(), message);
    }

    /// Print a welcome banner
    pub fn print_banner(&self) {
        println!("{}", "=".repeat(60).bright_blue());
        println!(
            "{}",
            "  Weathervane - Powered by Claude".bright_blue().bold()
        );
        println!("{}", "=".repeat(60).bright_blue());
        println!();
    }

    /// Print a separator line
    pub fn print_separator(&self) {
        println!("{}", "-".repeat(60).bright_black());
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
