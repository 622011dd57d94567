// Terminal formatting for archive commands

use std::io::IsTerminal;
use crate::archive::{AreaEntry, LayoutReport, UnitInventory};

const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Apply bold formatting if in TTY mode
fn bold_if_tty(text: &str, is_tty: bool) -> String {
    if is_tty {
        format!("{}{}{}", ANSI_BOLD, text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

/// Human-readable byte count (B, KB, MB, GB)
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

pub fn format_layout_report(report: &LayoutReport) -> String {
    if report.is_valid() {
        return format!("Archive layout OK: {}", report.root.display());
    }
    let mut lines = vec![format!(
        "Archive layout at {} has {} problem(s):",
        report.root.display(),
        report.violations.len()
    )];
    for violation in &report.violations {
        lines.push(format!("  - {}", violation));
    }
    lines.join("\n")
}

fn format_area(lines: &mut Vec<String>, name: &str, entries: &[AreaEntry]) {
    lines.push(format!("  {}/ ({} entries)", name, entries.len()));
    for entry in entries {
        let modified = entry
            .modified
            .map(|m| m.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        let name = if entry.is_dir {
            format!("{}/", entry.name)
        } else {
            entry.name.clone()
        };
        let size = if entry.is_dir { "-".to_string() } else { format_size(entry.size) };
        lines.push(format!("    {:<40} {:>10}  {}", name, size, modified));
    }
}

/// Per-unit listing of source and results areas
pub fn format_inventory(inventory: &[UnitInventory], is_tty: bool) -> String {
    let mut lines = Vec::new();
    for (i, unit) in inventory.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(bold_if_tty(&unit.label, is_tty));
        format_area(&mut lines, crate::archive::SOURCE_AREA, &unit.source);
        format_area(&mut lines, crate::archive::RESULTS_AREA, &unit.results);
    }
    lines.join("\n")
}
