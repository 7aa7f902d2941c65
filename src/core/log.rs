use ansi_term::Colour;
use chrono::Local;
use regex::Regex;
use std::sync::OnceLock;

fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ansi regex"));
    re.replace_all(s, "").into_owned()
}

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "generate" => Colour::Green,
        "overtime" => Colour::Yellow,
        "period" => Colour::Cyan,
        "export" => Colour::Blue,
        _ => Colour::White,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub id: usize,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// In-memory operation log of a session. Dropped with the session.
#[derive(Debug, Clone, Default)]
pub struct SessionLog {
    entries: Vec<LogEntry>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, operation: &str, target: &str, message: &str) {
        let id = self.entries.len() + 1;
        self.entries.push(LogEntry {
            id,
            date: Local::now().format("%FT%T%:z").to_string(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aligned, colour-coded listing, one line per entry.
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return String::from("📜 Session log is empty.\n");
        }

        // Unica colonna op+target
        let op_targets: Vec<String> = self
            .entries
            .iter()
            .map(|e| {
                if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                }
            })
            .collect();

        // larghezza max ma con limite a 60
        let op_w = op_targets
            .iter()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(10)
            .min(60);
        let id_w = self.entries.len().to_string().len();
        let date_w = self
            .entries
            .iter()
            .map(|e| e.date.len())
            .max()
            .unwrap_or(0);

        let mut out = String::from("📜 Session log:\n\n");

        for (entry, op_target) in self.entries.iter().zip(op_targets) {
            let color = color_for_operation(&entry.operation);

            // taglio a 57 + "..."
            let visible = if op_target.chars().count() > 60 {
                let mut s = op_target.chars().take(57).collect::<String>();
                s.push_str("...");
                s
            } else {
                op_target
            };

            // solo l'operazione è colorata
            let colored = match visible.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding =
                " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            out.push_str(&format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}\n",
                entry.id,
                entry.date,
                colored,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            ));
        }

        out
    }

    pub fn print(&self) {
        print!("{}", self.render());
    }
}
