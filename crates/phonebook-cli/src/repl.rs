use crate::commands::{dispatch, Context, Step};
use anyhow::{Context as _, Result};
use phonebook_config::ReplConfig;
use phonebook_core::AddressBook;
use std::io::{BufRead, Write};
use tracing::debug;

/// Reads commands from `input` until an exit command or end of input.
pub fn run<R, W>(
    mut input: R,
    output: &mut W,
    config: &ReplConfig,
    book: &mut AddressBook,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut ctx = Context { book };
    writeln!(output, "{}", config.banner).with_context(|| "write banner")?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", config.prompt).with_context(|| "write prompt")?;
        output.flush().with_context(|| "flush output")?;

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .with_context(|| "read command")?;
        if read == 0 {
            debug!("end of input");
            writeln!(output).with_context(|| "write output")?;
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        match dispatch(&mut ctx, &line) {
            Step::Reply(message) => {
                writeln!(output, "{}", message).with_context(|| "write output")?;
            }
            Step::Exit(message) => {
                writeln!(output, "{}", message).with_context(|| "write output")?;
                break;
            }
        }
    }

    debug!(contacts = ctx.book.len(), "session finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;
    use phonebook_config::AppConfig;
    use phonebook_core::AddressBook;
    use std::io::Cursor;

    fn session(script: &str) -> (String, AddressBook) {
        let config = AppConfig::default();
        let mut book = AddressBook::new();
        let mut output = Vec::new();
        run(Cursor::new(script), &mut output, &config.repl, &mut book).expect("run session");
        (String::from_utf8(output).expect("utf8"), book)
    }

    #[test]
    fn session_prints_banner_and_farewell() {
        let (output, _) = session("hello\nexit\nhello\n");
        assert_eq!(
            output,
            "Welcome to the assistant bot!\n\
             Enter a command: How can I help you?\n\
             Enter a command: Good bye!\n"
        );
    }

    #[test]
    fn session_continues_after_errors() {
        let (output, book) = session("show\nadd Bob 123\n\nadd Bob 1234567890\nclose\n");
        assert!(output.contains("Give me name.\n"));
        assert!(output.contains("Give me name and phone please.\n"));
        assert!(output.contains("You didn't enter any command. Please try again.\n"));
        assert!(output.contains("Contact added.\n"));
        assert!(output.ends_with("Good bye!\n"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn session_survives_invalid_utf8_line() {
        let config = AppConfig::default();
        let mut book = AddressBook::new();
        let mut output = Vec::new();
        let script: &[u8] = b"add Alice 1234567890\nadd \xff 1234567890\nshow Alice\nexit\n";
        run(script, &mut output, &config.repl, &mut book).expect("run session");

        let output = String::from_utf8(output).expect("utf8");
        assert!(output.contains("Enter a command: Alice: 1234567890\n"));
        assert!(output.ends_with("Good bye!\n"));
        assert!(book.find("Alice").is_some());
        assert!(book.find("\u{fffd}").is_some());
    }

    #[test]
    fn session_ends_at_end_of_input() {
        let (output, book) = session("add Alice 1234567890");
        assert_eq!(
            output,
            "Welcome to the assistant bot!\n\
             Enter a command: Contact added.\n\
             Enter a command: \n"
        );
        assert!(book.find("Alice").is_some());
    }

    #[test]
    fn session_uses_configured_prompt() {
        let mut config = AppConfig::default();
        config.repl.prompt = "> ".to_string();
        config.repl.banner = "phonebook".to_string();
        let mut book = AddressBook::new();
        let mut output = Vec::new();
        run(Cursor::new("exit\n"), &mut output, &config.repl, &mut book).expect("run session");
        assert_eq!(String::from_utf8(output).expect("utf8"), "phonebook\n> Good bye!\n");
    }
}
