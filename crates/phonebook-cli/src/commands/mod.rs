use crate::error::{user_message, CommandError, CommandResult};
use phonebook_core::AddressBook;
use tracing::debug;

pub mod contacts;
pub mod phones;

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const EMPTY_COMMAND: &str = "You didn't enter any command. Please try again.";
pub const INVALID_COMMAND: &str = "Invalid command.";

pub struct Context<'a> {
    pub book: &'a mut AddressBook,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Empty,
    Hello,
    Help,
    Add,
    Change,
    Show,
    All,
    Delete,
    AddPhone,
    RemovePhone,
    EditPhone,
    FindPhone,
    Unknown,
}

impl Command {
    pub fn from_token(token: &str) -> Self {
        match token {
            "close" | "exit" => Command::Exit,
            "" => Command::Empty,
            "hello" => Command::Hello,
            "help" => Command::Help,
            "add" => Command::Add,
            "change" => Command::Change,
            "show" => Command::Show,
            "all" => Command::All,
            "delete" => Command::Delete,
            "add-phone" => Command::AddPhone,
            "remove-phone" => Command::RemovePhone,
            "edit-phone" => Command::EditPhone,
            "find-phone" => Command::FindPhone,
            _ => Command::Unknown,
        }
    }
}

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Reply(String),
    Exit(String),
}

/// Splits a line into a lowercased command token and its arguments.
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    let mut tokens = line.split_whitespace();
    let command = match tokens.next() {
        Some(token) => token.to_lowercase(),
        None => return (String::new(), Vec::new()),
    };
    (command, tokens.map(str::to_string).collect())
}

pub fn dispatch(ctx: &mut Context<'_>, line: &str) -> Step {
    let (token, args) = parse_input(line);
    let command = Command::from_token(&token);
    debug!(command = %token, args = args.len(), "dispatch");

    let result = match command {
        Command::Exit => return Step::Exit(FAREWELL.to_string()),
        Command::Empty => return Step::Reply(EMPTY_COMMAND.to_string()),
        Command::Hello => return Step::Reply(GREETING.to_string()),
        Command::Help => return Step::Reply(help_text()),
        Command::All => return Step::Reply(contacts::list_contacts(ctx)),
        Command::Unknown => return Step::Reply(INVALID_COMMAND.to_string()),
        Command::Add => contacts::add_contact(ctx, &args),
        Command::Change => contacts::change_contact(ctx, &args),
        Command::Show => contacts::show_contact(ctx, &args),
        Command::Delete => contacts::delete_contact(ctx, &args),
        Command::AddPhone => phones::add_phone(ctx, &args),
        Command::RemovePhone => phones::remove_phone(ctx, &args),
        Command::EditPhone => phones::edit_phone(ctx, &args),
        Command::FindPhone => phones::find_phone(ctx, &args),
    };
    Step::Reply(translate(result))
}

fn translate(result: CommandResult) -> String {
    match result {
        Ok(message) => message,
        Err(err) => {
            debug!(error = %err, "command failed");
            user_message(&err)
        }
    }
}

pub(crate) fn name_and_phone(args: &[String]) -> Result<(&str, &str), CommandError> {
    match args {
        [name, phone] => Ok((name.as_str(), phone.as_str())),
        _ => Err(CommandError::Format("expected NAME PHONE".to_string())),
    }
}

fn help_text() -> String {
    [
        "Commands:",
        "  hello",
        "  add NAME PHONE",
        "  change NAME PHONE",
        "  show NAME",
        "  all",
        "  delete NAME",
        "  add-phone NAME PHONE",
        "  remove-phone NAME PHONE",
        "  edit-phone NAME OLD NEW",
        "  find-phone NAME PHONE",
        "  close | exit",
    ]
    .join("\n")
}
