//! Interactive command loop for the contact book.
//!
//! Reads commands line by line from stdin and prints responses to stdout.
//! The loop owns the single mutable address book for the process lifetime
//! and serializes all calls into it; logging goes to stderr so responses
//! stay clean.

use crate::book::AddressBook;
use crate::commands::{handlers, parse_input};
use crate::config::Config;
use crate::error::CommandResult;
use chrono::Local;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Startup banner listing the available commands.
const HELP: &str = "\
Welcome to the assistant bot!
Available commands:
 add <name> <phone>              - Add a contact or another phone
 change <name> <old> <new>       - Change a phone number
 phone <name>                    - Show a contact's phones
 all                             - Show all contacts
 add-birthday <name> <date>      - Add a birthday (DD.MM.YYYY)
 show-birthday <name>            - Show a contact's birthday
 birthdays                       - Birthdays in the next 7 days
 hello                           - Greeting from the bot
 close / exit                    - Quit the program";

/// Print a handler result, prefixing failures with `Error: `.
fn respond(result: CommandResult) {
    match result {
        Ok(message) => println!("{}", message),
        Err(e) => println!("Error: {}", e),
    }
}

/// Run the interactive loop until `close`/`exit` or end of input.
pub fn run(config: &Config) -> io::Result<()> {
    println!("{}\n", HELP);

    let mut book = AddressBook::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    info!("Contact book ready");

    loop {
        write!(stdout, "{}", config.prompt)?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // End of input counts as a quit.
            info!("Input closed, shutting down");
            break;
        }

        let Some((command, args)) = parse_input(&line) else {
            continue;
        };
        debug!(command = %command, args = args.len(), "dispatching");

        match command.as_str() {
            "close" | "exit" => {
                println!("Good bye!");
                break;
            }
            "hello" => println!("Hello! How can I help you?"),
            "help" => println!("{}", HELP),
            "add" => respond(handlers::add_contact(&args, &mut book)),
            "change" => respond(handlers::change_contact(&args, &mut book)),
            "phone" => respond(handlers::show_phones(&args, &book)),
            "all" => println!("{}", handlers::show_all(&book)),
            "add-birthday" => respond(handlers::add_birthday(&args, &mut book)),
            "show-birthday" => respond(handlers::show_birthday(&args, &book)),
            "birthdays" => respond(handlers::birthdays(&book, Local::now().date_naive())),
            _ => println!("Invalid command. Type 'help' to list commands."),
        }
    }

    Ok(())
}
