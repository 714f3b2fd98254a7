//! Slash commands typed into the command bar

use roster_core::{PageLimit, SortKey};
use shared::models::EmployeeId;
use shared::{AppError, AppResult};

/// Help lines, one per command
pub const HELP: &[&str] = &[
    "  /add                 - Open the add form",
    "  /edit <id>           - Edit an employee",
    "  /delete <id>         - Delete an employee (asks for confirmation)",
    "  /sort name|address   - Toggle sorting by a column",
    "  /page <n>            - Go to page n",
    "  /limit 5|10|20|50    - Rows per page",
    "  /help                - Show this help",
    "  /quit                - Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Add,
    Edit(EmployeeId),
    Delete(EmployeeId),
    Sort(SortKey),
    Page(u32),
    Limit(PageLimit),
    Quit,
}

pub fn parse(line: &str) -> AppResult<Command> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(&name) = parts.first() else {
        return Err(AppError::invalid_request("Empty command"));
    };

    match name {
        "/help" => Ok(Command::Help),
        "/add" => Ok(Command::Add),
        "/quit" | "/q" => Ok(Command::Quit),
        "/edit" => Ok(Command::Edit(id_arg(&parts, "/edit <id>")?)),
        "/delete" => Ok(Command::Delete(id_arg(&parts, "/delete <id>")?)),
        "/sort" => {
            let arg = arg(&parts, "/sort name|address")?;
            Ok(Command::Sort(arg.parse()?))
        }
        "/page" => {
            let arg = arg(&parts, "/page <n>")?;
            let page = arg
                .parse::<u32>()
                .ok()
                .filter(|p| *p > 0)
                .ok_or_else(|| {
                    AppError::invalid_format(format!("Page must be a positive number: {arg}"))
                })?;
            Ok(Command::Page(page))
        }
        "/limit" => {
            let arg = arg(&parts, "/limit 5|10|20|50")?;
            let value = arg
                .parse::<u32>()
                .map_err(|_| AppError::invalid_format(format!("Not a number: {arg}")))?;
            Ok(Command::Limit(PageLimit::try_from(value)?))
        }
        other => Err(AppError::invalid_request(format!("Unknown command: {other}"))
            .with_detail("command", other)),
    }
}

fn arg<'a>(parts: &[&'a str], usage: &str) -> AppResult<&'a str> {
    parts
        .get(1)
        .copied()
        .ok_or_else(|| AppError::invalid_request(format!("Usage: {usage}")))
}

fn id_arg(parts: &[&str], usage: &str) -> AppResult<EmployeeId> {
    let raw = arg(parts, usage)?;
    raw.parse()
        .map_err(|_| AppError::invalid_format(format!("Invalid employee id: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse("/help").unwrap(), Command::Help);
        assert_eq!(parse("  /add ").unwrap(), Command::Add);
        assert_eq!(parse("/edit 42").unwrap(), Command::Edit(42));
        assert_eq!(parse("/delete 7").unwrap(), Command::Delete(7));
        assert_eq!(parse("/sort Address").unwrap(), Command::Sort(SortKey::Address));
        assert_eq!(parse("/page 3").unwrap(), Command::Page(3));
        assert_eq!(parse("/limit 20").unwrap(), Command::Limit(PageLimit::Twenty));
        assert_eq!(parse("/quit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse("/edit").unwrap_err().message, "Usage: /edit <id>");
        assert_eq!(parse("/edit abc").unwrap_err().code, ErrorCode::InvalidFormat);
        assert_eq!(parse("/page 0").unwrap_err().code, ErrorCode::InvalidFormat);
        assert_eq!(parse("/limit 7").unwrap_err().code, ErrorCode::ValueOutOfRange);
        assert_eq!(parse("/sort email").unwrap_err().code, ErrorCode::InvalidRequest);
        assert_eq!(parse("/ping").unwrap_err().message, "Unknown command: /ping");
        assert!(parse("   ").is_err());
    }
}
