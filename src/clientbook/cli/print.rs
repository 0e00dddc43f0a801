use clientbook::api::{CmdMessage, MessageLevel, Stats};
use clientbook::error::{ClientError, Result};
use clientbook::model::{Client, Status};
use colored::{ColoredString, Colorize};
use std::io::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 6;
const PHONE_WIDTH: usize = 16;
const STATUS_WIDTH: usize = 9;
const DATE_WIDTH: usize = 10;
const GAPS: usize = 4 * 2;
const MIN_NAME_WIDTH: usize = 8;

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> Result<()> {
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
        };
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub(super) fn print_error<W: Write>(out: &mut W, error: &ClientError) -> Result<()> {
    writeln!(out, "{}", format!("Error: {}", error).red())?;
    Ok(())
}

/// One row per client: id, name, phone, status, date.
/// `total` is the size of the unfiltered collection, for the footer.
pub(super) fn print_clients<W: Write>(
    out: &mut W,
    clients: &[Client],
    total: usize,
    line_width: usize,
) -> Result<()> {
    if clients.is_empty() {
        writeln!(out, "No clients found.")?;
        return Ok(());
    }

    let fixed = ID_WIDTH + PHONE_WIDTH + STATUS_WIDTH + DATE_WIDTH + GAPS;
    let name_width = line_width.saturating_sub(fixed).max(MIN_NAME_WIDTH);

    for client in clients {
        let id = format!("#{}", client.id);
        let name = truncate_to_width(&client.name, name_width);
        let phone = truncate_to_width(&client.phone, PHONE_WIDTH);

        writeln!(
            out,
            "  {}  {}  {}  {}  {}",
            pad_to_width(&id, ID_WIDTH).yellow(),
            pad_to_width(&name, name_width).bold(),
            pad_to_width(&phone, PHONE_WIDTH),
            status_colored(client.status, STATUS_WIDTH),
            client.date.to_string().dimmed()
        )?;
    }

    let footer = if clients.len() == total {
        format!("{} client(s)", total)
    } else {
        format!("{} of {} client(s)", clients.len(), total)
    };
    writeln!(out, "{}", footer.dimmed())?;
    Ok(())
}

pub(super) fn print_client_detail<W: Write>(out: &mut W, client: &Client) -> Result<()> {
    writeln!(
        out,
        "{} {}  {}",
        format!("#{}", client.id).yellow(),
        client.name.bold(),
        status_colored(client.status, 0)
    )?;
    writeln!(out, "--------------------------------")?;
    writeln!(out, "Phone:   {}", client.phone)?;
    if let Some(email) = &client.email {
        writeln!(out, "Email:   {}", email)?;
    }
    writeln!(out, "Created: {}", client.date)?;
    if let Some(notes) = &client.notes {
        writeln!(out, "Notes:   {}", notes)?;
    }
    Ok(())
}

pub(super) fn print_stats<W: Write>(out: &mut W, stats: &Stats) -> Result<()> {
    writeln!(
        out,
        "Total: {}   Active: {}",
        stats.total.to_string().bold(),
        stats.count(Status::Active).to_string().bold()
    )?;
    let breakdown: Vec<String> = stats
        .by_status
        .iter()
        .map(|(status, n)| format!("{} {}", status, n))
        .collect();
    writeln!(out, "{}", breakdown.join(" · ").dimmed())?;
    Ok(())
}

fn status_colored(status: Status, width: usize) -> ColoredString {
    let label = pad_to_width(status.as_str(), width);
    match status {
        Status::New => label.blue(),
        Status::Active => label.green(),
        Status::Pending => label.yellow(),
        Status::Closed => label.dimmed(),
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clientbook::seed::sample_clients;

    fn render<F: FnOnce(&mut Vec<u8>) -> Result<()>>(f: F) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn truncates_long_names() {
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("abc", 4), "abc");
    }

    #[test]
    fn pads_wide_characters_by_display_width() {
        assert_eq!(pad_to_width("日本", 6).width(), 6);
    }

    #[test]
    fn lists_clients_with_footer() {
        let clients = sample_clients();
        let text = render(|out| print_clients(out, &clients, 2, 100));

        assert!(text.contains("#1"));
        assert!(text.contains("Alisher Karimov"));
        assert!(text.contains("+998907654321"));
        assert!(text.contains("active"));
        assert!(text.contains("2024-11-18"));
        assert!(text.contains("2 client(s)"));
    }

    #[test]
    fn filtered_list_footer_shows_total() {
        let clients = sample_clients();
        let text = render(|out| print_clients(out, &clients[..1], 2, 100));
        assert!(text.contains("1 of 2 client(s)"));
    }

    #[test]
    fn empty_list_message() {
        let text = render(|out| print_clients(out, &[], 0, 100));
        assert_eq!(text, "No clients found.\n");
    }

    #[test]
    fn detail_skips_absent_optional_fields() {
        let clients = sample_clients();
        let text = render(|out| print_client_detail(out, &clients[1]));
        assert!(text.contains("Phone:   +998907654321"));
        assert!(!text.contains("Notes:"));
    }

    #[test]
    fn stats_show_total_and_active() {
        let stats = Stats {
            total: 3,
            by_status: vec![
                (Status::New, 1),
                (Status::Active, 2),
                (Status::Pending, 0),
                (Status::Closed, 0),
            ],
        };
        let text = render(|out| print_stats(out, &stats));
        assert!(text.contains("Total: 3   Active: 2"));
        assert!(text.contains("pending 0"));
    }
}
