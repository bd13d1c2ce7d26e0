//! ShelfDB Catalog CLI
//!
//! Interactive menu over a flat-file book catalog. Optionally seeds the
//! catalog from a plain-text import list before the menu starts.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use shelfdb::{Config, Library};
use tracing_subscriber::{fmt, EnvFilter};

/// ShelfDB Catalog CLI
#[derive(Parser, Debug)]
#[command(name = "shelfdb-cli")]
#[command(about = "Interactive menu for a flat-file book catalog")]
#[command(version)]
struct Args {
    /// Catalog file
    #[arg(short, long, default_value = "books.dat")]
    db: PathBuf,

    /// List file naming the book description files to import on startup
    #[arg(short, long)]
    import: Option<PathBuf>,

    /// Keep existing records when importing instead of resetting first
    #[arg(long)]
    keep_existing: bool,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,shelfdb=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let args = Args::parse();

    // Build config from args
    let mut builder = Config::builder()
        .db_path(&args.db)
        .reset_on_import(!args.keep_existing);
    if let Some(list) = &args.import {
        builder = builder.import_list(list);
    }
    let config = builder.build();

    // Open catalog
    let library = match Library::open(config) {
        Ok(library) => library,
        Err(err) => {
            eprintln!("Error generating database: {}", err);
            process::exit(1);
        }
    };

    let editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("Cannot start line editor: {}", err);
            process::exit(1);
        }
    };

    run_menu(library, editor);
}

/// Menu loop: dispatch options until the user quits or closes stdin
fn run_menu(mut library: Library, mut editor: DefaultEditor) {
    loop {
        print_menu();
        let option = match prompt_option(&mut editor) {
            Some(option) => option,
            // Ctrl+C / Ctrl+D quit like option 4
            None => break,
        };
        match option {
            1 => list_titles(&mut library),
            2 => show_book(&mut library, &mut editor),
            3 => delete_book(&mut library, &mut editor),
            _ => break,
        }
        println!();
    }

    if let Err(err) = library.close() {
        eprintln!("Error closing database: {}", err);
        process::exit(1);
    }
}

fn print_menu() {
    println!("Options menu:");
    println!("1 - List all titles.");
    println!("2 - Get the information from one book.");
    println!("3 - Delete a book.");
    println!("4 - Quit.");
}

/// Prompt until the user enters an option between 1 and 4.
/// Returns `None` on Ctrl+C or end of input.
fn prompt_option(editor: &mut DefaultEditor) -> Option<u32> {
    loop {
        match editor.readline("Select an option: ") {
            Ok(line) => {
                if let Ok(option) = line.trim().parse::<u32>() {
                    if (1..=4).contains(&option) {
                        return Some(option);
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return None,
            Err(err) => {
                eprintln!("Input error: {}", err);
                return None;
            }
        }
    }
}

/// Read one line under `prompt`, or `None` on Ctrl+C or end of input
fn prompt_line(editor: &mut DefaultEditor, prompt: &str) -> Option<String> {
    match editor.readline(prompt) {
        Ok(line) => Some(line),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => None,
        Err(err) => {
            eprintln!("Input error: {}", err);
            None
        }
    }
}

fn list_titles(library: &mut Library) {
    println!();
    match library.titles() {
        Ok(titles) => {
            for title in titles {
                println!("{}", title);
            }
        }
        Err(err) => eprintln!("Database error: {}", err),
    }
}

fn show_book(library: &mut Library, editor: &mut DefaultEditor) {
    let title = match prompt_line(editor, "Type the title of the book: ") {
        Some(title) => title,
        None => return,
    };
    match library.find(&title) {
        Ok(Some(book)) => println!("{}", book),
        Ok(None) => println!("Book not found."),
        Err(err) => eprintln!("Database error: {}", err),
    }
}

fn delete_book(library: &mut Library, editor: &mut DefaultEditor) {
    let title = match prompt_line(editor, "Type the title of the book to delete: ") {
        Some(title) => title,
        None => return,
    };
    match library.remove(&title) {
        Ok(deleted) => {
            if !deleted {
                println!("Book not found.");
            }
        }
        Err(err) => eprintln!("Database error: {}", err),
    }
}
