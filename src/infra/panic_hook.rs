use std::{io, panic};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};

/// Leaves raw mode and the alternate screen. Safe to call more than once.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Restores the terminal before the panic message is printed, so the
/// message is readable instead of being swallowed by the alternate screen.
pub fn install_terminal_restore_hook() {
    panic::set_hook(Box::new(|panic_info| {
        restore_terminal();

        let payload = panic_payload(panic_info.payload());
        tracing::error!(payload = %payload, "panic");

        if let Some(location) = panic_info.location() {
            eprintln!(
                "chatmenu panic: {} at {}:{}:{}",
                payload,
                location.file(),
                location.line(),
                location.column()
            );
        } else {
            eprintln!("chatmenu panic: {}", payload);
        }
    }));
}

fn panic_payload(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "panic payload omitted".to_owned())
}
