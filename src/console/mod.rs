//! Line-oriented console front end.
//!
//! Forwards user commands to the gallery and prints the projection after every
//! change. Holds no pagination or fetch logic of its own.

pub mod command;
pub mod render;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use pixsea::app::Gallery;

use command::{Command, parse_command};
use render::{HELP, render_json, render_view};

/// What: Apply one console command to the gallery.
///
/// Inputs:
/// - `gallery`: Gallery to drive.
/// - `cmd`: Parsed command.
///
/// Output:
/// - `false` when the user asked to quit, `true` otherwise.
fn apply_command(gallery: &mut Gallery, cmd: Command) -> bool {
    match cmd {
        Command::Search(term) => gallery.set_search_term(&term),
        Command::More => gallery.load_more(),
        Command::Open(index) => {
            if !gallery.select_index(index) {
                println!("No item {}.", index + 1);
                return true;
            }
        }
        Command::Close => gallery.dismiss(),
        Command::Show => {}
        Command::Help => {
            println!("{HELP}");
            return true;
        }
        Command::Quit => return false,
    }
    print!("{}", render_view(&gallery.view()));
    true
}

/// What: Run the interactive read-eval-print loop on stdin.
///
/// Inputs:
/// - `gallery`: Gallery to drive.
///
/// Output:
/// - `Ok(())` on `:quit` or end of input.
///
/// # Errors
/// - Returns `Err` when stdin cannot be read.
///
/// Details:
/// - Waits on user input and fetch completions at the same time, re-rendering
///   whenever a completion is applied.
pub async fn run_interactive(gallery: &mut Gallery) -> std::io::Result<()> {
    println!("{HELP}");
    if gallery.has_pending() {
        print!("{}", render_view(&gallery.view()));
    }
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if let Some(cmd) = parse_command(&line) {
                    if !apply_command(gallery, cmd) {
                        break;
                    }
                } else if !line.trim().is_empty() {
                    println!("Unknown command. Type :help for the list.");
                }
            }
            Some(applied) = gallery.next_update() => {
                if applied {
                    print!("{}", render_view(&gallery.view()));
                }
            }
        }
    }
    Ok(())
}

/// What: Load `pages` pages for the gallery's current term, print them and return.
///
/// Inputs:
/// - `gallery`: Gallery with a search already started.
/// - `pages`: Number of pages to load in total.
/// - `json`: Print the items as JSON instead of the text listing.
///
/// Details:
/// - Stops early when a page comes back without growing the list.
pub async fn run_once(gallery: &mut Gallery, pages: u32, json: bool) {
    while gallery.next_update().await.is_some() {}
    for _ in 1..pages {
        let before = gallery.view().items.len();
        gallery.load_more();
        while gallery.next_update().await.is_some() {}
        if gallery.view().items.len() == before {
            break;
        }
    }
    if !json {
        print!("{}", render_view(&gallery.view()));
        return;
    }
    match render_json(gallery.view().items) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            warn!(error = %e, "failed to serialize results");
            eprintln!("pixsea: cannot print results as JSON: {e}");
        }
    }
}
