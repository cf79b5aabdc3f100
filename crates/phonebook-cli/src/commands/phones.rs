use crate::commands::{name_and_phone, Context};
use crate::error::{CommandError, CommandResult};
use phonebook_core::Record;

pub fn add_phone(ctx: &mut Context<'_>, args: &[String]) -> CommandResult {
    let (name, phone) = name_and_phone(args)?;
    find_record(ctx, name)?.add_phone(phone)?;
    Ok("Phone added.".to_string())
}

pub fn remove_phone(ctx: &mut Context<'_>, args: &[String]) -> CommandResult {
    let (name, phone) = name_and_phone(args)?;
    find_record(ctx, name)?.remove_phone(phone)?;
    Ok("Phone removed.".to_string())
}

pub fn edit_phone(ctx: &mut Context<'_>, args: &[String]) -> CommandResult {
    let (name, old, new) = match args {
        [name, old, new] => (name.as_str(), old.as_str(), new.as_str()),
        _ => return Err(CommandError::Format("expected NAME OLD NEW".to_string())),
    };
    find_record(ctx, name)?.edit_phone(old, new)?;
    Ok("Phone updated.".to_string())
}

pub fn find_phone(ctx: &Context<'_>, args: &[String]) -> CommandResult {
    let (name, phone) = name_and_phone(args)?;
    let record = ctx
        .book
        .find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    let found = record.find_phone(phone)?;
    Ok(format!("{}: {}", record.name(), found))
}

fn find_record<'b>(
    ctx: &'b mut Context<'_>,
    name: &str,
) -> Result<&'b mut Record, CommandError> {
    ctx.book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{add_phone, edit_phone, find_phone, remove_phone};
    use crate::commands::Context;
    use crate::error::CommandError;
    use phonebook_core::{AddressBook, Record};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn book_with_alice() -> AddressBook {
        let mut book = AddressBook::new();
        let mut record = Record::named("Alice").expect("record");
        record.add_phone("1111111111").expect("phone");
        book.add_record(record);
        book
    }

    #[test]
    fn add_and_find_phone() {
        let mut book = book_with_alice();
        let mut ctx = Context { book: &mut book };
        add_phone(&mut ctx, &args(&["Alice", "2222222222"])).expect("add phone");
        assert_eq!(
            find_phone(&ctx, &args(&["Alice", "2222222222"])).expect("find"),
            "Alice: 2222222222"
        );
        assert_eq!(
            ctx.book.find("Alice").expect("alice").phones_joined(),
            "1111111111; 2222222222"
        );
    }

    #[test]
    fn find_phone_reports_missing_contact_and_phone() {
        let mut book = book_with_alice();
        let ctx = Context { book: &mut book };
        assert_eq!(
            find_phone(&ctx, &args(&["Bob", "1111111111"])).unwrap_err(),
            CommandError::ContactNotFound("Bob".to_string())
        );
        assert_eq!(
            find_phone(&ctx, &args(&["Alice", "2222222222"])).unwrap_err(),
            CommandError::PhoneNotFound("2222222222".to_string())
        );
    }

    #[test]
    fn add_phone_to_unknown_contact() {
        let mut book = AddressBook::new();
        let mut ctx = Context { book: &mut book };
        assert_eq!(
            add_phone(&mut ctx, &args(&["Bob", "2222222222"])).unwrap_err(),
            CommandError::ContactNotFound("Bob".to_string())
        );
    }

    #[test]
    fn remove_phone_reports_missing_phone() {
        let mut book = book_with_alice();
        let mut ctx = Context { book: &mut book };
        assert_eq!(
            remove_phone(&mut ctx, &args(&["Alice", "9999999999"])).unwrap_err(),
            CommandError::PhoneNotFound("9999999999".to_string())
        );
        remove_phone(&mut ctx, &args(&["Alice", "1111111111"])).expect("remove");
        assert!(ctx.book.find("Alice").expect("alice").phones().is_empty());
    }

    #[test]
    fn edit_phone_validates_and_replaces() {
        let mut book = book_with_alice();
        let mut ctx = Context { book: &mut book };
        assert!(matches!(
            edit_phone(&mut ctx, &args(&["Alice", "1111111111", "abc"])),
            Err(CommandError::Format(_))
        ));
        assert!(matches!(
            edit_phone(&mut ctx, &args(&["Alice", "1111111111"])),
            Err(CommandError::Format(_))
        ));
        edit_phone(&mut ctx, &args(&["Alice", "1111111111", "3333333333"])).expect("edit");
        assert_eq!(
            ctx.book.find("Alice").expect("alice").phones_joined(),
            "3333333333"
        );
    }
}
