//! Interactive text menu
//!
//! Thin dispatcher translating menu choices into core calls. Expected
//! outcomes (not found, book unavailable) print as a single line and the
//! loop continues; persistence failures propagate and end the session.

use std::io::{self, BufRead, Write};

use chrono::Utc;

use crate::error::AppResult;
use crate::repository::Repository;
use crate::services::{queries, LendingService};

/// Run the menu loop until the user quits or stdin closes.
pub fn run(repo: &mut Repository, lending: &LendingService) -> AppResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu();
        let Some(choice) = prompt(&mut input, "Choose an option: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let Some(title) = prompt(&mut input, "Book title: ")? else { break };
                let Some(author) = prompt(&mut input, "Book author: ")? else { break };
                let Some(isbn) = prompt(&mut input, "Book ISBN: ")? else { break };
                let book = repo.catalog.add_book(&title, &author, &isbn)?;
                println!("Book added: {}", book.title);
            }
            "2" => {
                let books = queries::list_books(repo);
                if books.is_empty() {
                    println!("No books registered.");
                }
                for book in books {
                    println!("{}", book);
                }
            }
            "3" => {
                let Some(name) = prompt(&mut input, "Member name: ")? else { break };
                let Some(member_id) = prompt(&mut input, "Member ID: ")? else { break };
                let member = repo.roster.add_member(&name, &member_id)?;
                println!("Member added: {}", member.name);
            }
            "4" => {
                let members = queries::list_members(repo);
                if members.is_empty() {
                    println!("No members registered.");
                }
                for member in members {
                    println!("{}", member);
                }
            }
            "5" => {
                let Some(isbn) = prompt(&mut input, "ISBN of the book to loan: ")? else { break };
                let Some(member_id) = prompt(&mut input, "ID of the borrowing member: ")? else {
                    break;
                };
                match lending.loan_book(repo, &isbn, &member_id, Utc::now()) {
                    Ok(loan) => println!(
                        "{} loaned to {}. Due date: {}",
                        loan.book.title,
                        loan.member.name,
                        loan.due_date.format("%Y-%m-%d")
                    ),
                    Err(e) if e.is_reportable() => println!("{}", e),
                    Err(e) => return Err(e),
                }
            }
            "6" => {
                let Some(isbn) = prompt(&mut input, "ISBN of the book to return: ")? else {
                    break;
                };
                match lending.return_book(repo, &isbn) {
                    Ok(loan) => println!("{} returned successfully.", loan.book.title),
                    Err(e) if e.is_reportable() => println!("{}", e),
                    Err(e) => return Err(e),
                }
            }
            "7" => {
                let loans = queries::list_loans(repo);
                if loans.is_empty() {
                    println!("No open loans.");
                }
                for loan in loans {
                    println!("{}", loan);
                }
            }
            "8" => break,
            _ => println!("Invalid option, try again."),
        }
    }

    Ok(())
}

fn print_menu() {
    println!();
    println!("São Rafael Library Manager");
    println!("1. Add book");
    println!("2. List books");
    println!("3. Add member");
    println!("4. List members");
    println!("5. Loan book");
    println!("6. Return book");
    println!("7. List loans");
    println!("8. Quit");
}

/// Prompt for one line of input. `None` means stdin reached EOF.
fn prompt(input: &mut impl BufRead, label: &str) -> AppResult<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
