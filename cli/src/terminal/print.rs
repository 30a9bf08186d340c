use colored::*;
use vfind_common::inventory::ManagedObjectReference;

pub const TOTAL_WIDTH: usize = 64;

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    println!("{}", line);
}

/// One resolved object. At quiet level 2 only the path is printed.
pub fn object_line(path: &str, reference: &ManagedObjectReference, q_level: u8) {
    if q_level > 1 {
        println!("{path}");
        return;
    }

    let kind: ColoredString = format!("[{}]", reference.kind).bright_black();
    let id: ColoredString = reference.value.dimmed();
    println!("{} {} {}", path.bold(), kind, id);
}

pub fn summary(count: usize, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let unit: &str = if count == 1 { "object" } else { "objects" };
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    println!("{}", sep);
    println!("{}", format!("{count} {unit} found").bold().green());
}

pub fn no_results(q_level: u8) {
    if q_level > 1 {
        return;
    }
    println!("{}", "No matching objects".red().bold());
}
