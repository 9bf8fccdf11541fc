use anstyle::Style;
use std::io::{IsTerminal, Write};

/// Print a one-line diagnostic for a failed launch, bold when stderr is a
/// terminal.
pub fn report_error(error: &anyhow::Error) {
    let style = if std::io::stderr().is_terminal() {
        Style::new().bold()
    } else {
        Style::new()
    };
    let _ = writeln!(std::io::stderr(), "{style}error{style:#}: {error:#}");
}
