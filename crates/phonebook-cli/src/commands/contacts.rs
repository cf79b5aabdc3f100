use crate::commands::{name_and_phone, Context};
use crate::error::{CommandError, CommandResult};
use phonebook_core::Record;

pub fn add_contact(ctx: &mut Context<'_>, args: &[String]) -> CommandResult {
    let (name, phone) = name_and_phone(args)?;
    if ctx.book.contains(name) {
        return Ok("This name already in contacts".to_string());
    }
    let mut record = Record::named(name)?;
    record.add_phone(phone)?;
    ctx.book.add_record(record);
    Ok("Contact added.".to_string())
}

pub fn change_contact(ctx: &mut Context<'_>, args: &[String]) -> CommandResult {
    let (name, phone) = name_and_phone(args)?;
    let record = ctx
        .book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    record.set_phone(phone)?;
    Ok("Contact updated.".to_string())
}

pub fn show_contact(ctx: &mut Context<'_>, args: &[String]) -> CommandResult {
    let name = args.first().ok_or(CommandError::MissingArgument("name"))?;
    let record = ctx
        .book
        .find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    Ok(format!("{}: {}", record.name(), record.phones_joined()))
}

pub fn delete_contact(ctx: &mut Context<'_>, args: &[String]) -> CommandResult {
    let name = args.first().ok_or(CommandError::MissingArgument("name"))?;
    ctx.book.delete(name)?;
    Ok("Contact deleted.".to_string())
}

pub fn list_contacts(ctx: &Context<'_>) -> String {
    let mut lines = vec!["Contacts:".to_string()];
    lines.extend(
        ctx.book
            .iter()
            .map(|record| format!("{}: {}", record.name(), record.phones_joined())),
    );
    lines.join("\n")
}
