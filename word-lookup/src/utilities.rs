use std::io::{self, Write};

pub const COMMANDS: &[&str] = &[":define", ":find", ":play", ":sources", ":help", ":quit", ":exit", ":q"];

pub fn prompt(prompt: &str) -> io::Result<()> {
    print!("{prompt}");
    io::stdout().flush()
}

/// Reads one line from stdin, `None` once stdin is closed.
pub fn read_line() -> io::Result<Option<String>> {
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// The known command closest to `typed`, if it is close enough to be a typo.
pub fn suggest_command(typed: &str) -> Option<&'static str> {
    let typed = typed.to_lowercase();
    COMMANDS
        .iter()
        .map(|command| (*command, strsim::jaro(command, &typed)))
        // most similar first
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .filter(|(_, score)| *score > 0.8)
        .map(|(command, _)| command)
}
