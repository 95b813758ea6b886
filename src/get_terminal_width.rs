use terminal_size::{Width, terminal_size};

/// Width for clap's help output: the terminal width minus `margin`,
/// or 100 when not connected to a terminal.
pub fn get_terminal_width(margin: usize) -> usize {
    match terminal_size() {
        Some((Width(w), _)) => usize::from(w).saturating_sub(margin).max(40),
        None => 100,
    }
}
