//! Interactive catalog loop: listing, modal detail, thumbnail hover.

use storefront_catalog::render::{render_detail, render_search};
use storefront_catalog::{CatalogPage, ListOutcome};
use storefront_client::CatalogClient;
use storefront_core::AppConfig;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{load_page, login_redirect, SearchSource};

const HELP: &str = concat!(
    "commands: <n> open card, h <n> hover thumbnail, ",
    "c close, /<term> search, q quit"
);

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BrowseCommand {
    /// Open the card with this 1-based number.
    Open(usize),
    /// Hover the thumbnail with this 1-based number.
    Hover(usize),
    Close,
    Search(String),
    Quit,
    Help,
}

/// Parses a line of input. Returns `None` for anything unrecognised.
pub(crate) fn parse_browse_command(line: &str) -> Option<BrowseCommand> {
    let line = line.trim();
    if let Some(term) = line.strip_prefix('/') {
        return Some(BrowseCommand::Search(term.trim().to_owned()));
    }
    match line {
        "q" | "quit" => return Some(BrowseCommand::Quit),
        "c" | "close" => return Some(BrowseCommand::Close),
        "?" | "help" => return Some(BrowseCommand::Help),
        _ => {}
    }
    if let Some(rest) = line.strip_prefix("h ") {
        return parse_number(rest).map(BrowseCommand::Hover);
    }
    parse_number(line).map(BrowseCommand::Open)
}

fn parse_number(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

pub(crate) async fn run_browse(
    config: &AppConfig,
    client: CatalogClient,
    source: &SearchSource,
) -> anyhow::Result<()> {
    let mut page = CatalogPage::new(client, config.login_path.clone());
    if let ListOutcome::Redirect(path) = load_page(&mut page, source).await {
        return Err(login_redirect(page.api(), &path));
    }
    print_listing(&page, config);
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = parse_browse_command(&line) else {
            println!("{HELP}");
            continue;
        };

        match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => println!("{HELP}"),
            BrowseCommand::Search(term) => {
                if page.search().modal_open() {
                    page.close_modal();
                }
                if let ListOutcome::Redirect(path) = page.set_term(&term).await {
                    return Err(login_redirect(page.api(), &path));
                }
                print_listing(&page, config);
            }
            BrowseCommand::Open(number) => {
                if page.open(number - 1).await {
                    println!("{}", render_detail(page.detail()));
                } else {
                    println!("no card numbered {number}");
                }
            }
            BrowseCommand::Hover(number) => {
                if page.hover(number - 1) {
                    println!("{}", render_detail(page.detail()));
                } else {
                    println!("no thumbnail numbered {number}");
                }
            }
            BrowseCommand::Close => {
                page.close_modal();
                print_listing(&page, config);
            }
        }
    }

    Ok(())
}

fn print_listing(page: &CatalogPage<CatalogClient>, config: &AppConfig) {
    let term = page.search().term();
    if term.is_empty() {
        println!("-- all products --");
    } else {
        println!("-- results for \"{term}\" --");
    }
    println!("{}", render_search(page.search(), &config.placeholder_image));
}
