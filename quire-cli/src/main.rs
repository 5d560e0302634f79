//! Quire CLI - element pagination demo and debugging tool
//!
//! Reads one item per line from a file, paginates the resulting element
//! tree, and prints the pages with the current one highlighted. With
//! `--interactive`, navigation commands are read from stdin, standing in
//! for the click events a real rendering surface would dispatch.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use quire_common::warning::clear_warnings;
use quire_core::{
    ACTIVE_CLASS, DISABLED_CLASS, NAV_CLASS, NUMBERS_CLASS, PADDLE_CLASS, Paddle, Paginator,
    Settings, WRAP_CLASS,
};
use quire_dom::{ElementTree, NodeId, print_tree};

/// Quire - paginate a list of items and walk the pages
#[derive(Parser, Debug)]
#[command(name = "quire")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Paginate a file of items, 3 per page
    quire items.txt

    # 5 per page, paddles only
    quire items.txt --amount 5 --no-numbers

    # Settings from a JSON file, then drive navigation interactively
    quire items.txt --settings quire.json --interactive

INTERACTIVE COMMANDS:
    next, prev     activate a paddle (no-op when disabled)
    go N           navigate to page N (0-based)
    tree           dump the element tree
    destroy        revert to the original flat list
    build          paginate again after destroy
    quit"#)]
struct Args {
    /// File with one item per line
    items: PathBuf,

    /// JSON settings file merged over the defaults
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Items per page (overrides the settings file)
    #[arg(long)]
    amount: Option<usize>,

    /// Disable the numbered page links
    #[arg(long)]
    no_numbers: bool,

    /// Disable the previous/next paddles
    #[arg(long)]
    no_paddles: bool,

    /// Label for the previous paddle
    #[arg(long)]
    prev_text: Option<String>,

    /// Label for the next paddle
    #[arg(long)]
    next_text: Option<String>,

    /// Drive navigation from stdin
    #[arg(long, short)]
    interactive: bool,
}

/// Resolve settings: file (if any) over defaults, then flag overrides.
fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.settings {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading settings file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing settings file {}", path.display()))?
        }
        None => Settings::default(),
    };

    if let Some(amount) = args.amount {
        settings.amount = amount;
    }
    if args.no_numbers {
        settings.numbers = false;
    }
    if args.no_paddles {
        settings.paddles = false;
    }
    if let Some(text) = &args.prev_text {
        settings.prev_text = text.clone();
    }
    if let Some(text) = &args.next_text {
        settings.next_text = text.clone();
    }
    Ok(settings)
}

/// Build the item tree: a `ul` container under the root, one `li` per
/// nonempty input line.
fn load_items(tree: &mut ElementTree, path: &Path) -> Result<NodeId> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading items file {}", path.display()))?;

    let container = tree.alloc_element("ul");
    let root = tree.root();
    tree.append_child(root, container);

    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        let item = tree.alloc_element("li");
        let label = tree.alloc_text(line.trim());
        tree.append_child(item, label);
        tree.append_child(container, item);
    }
    Ok(container)
}

/// First child of `node` carrying the given class.
fn child_with_class(tree: &ElementTree, node: NodeId, class: &str) -> Option<NodeId> {
    tree.children(node)
        .iter()
        .copied()
        .find(|&c| tree.has_class(c, class))
}

/// Text of a node's first text child, e.g. an item label.
fn label_of(tree: &ElementTree, node: NodeId) -> String {
    tree.children(node)
        .iter()
        .copied()
        .find_map(|c| tree.as_text(c))
        .unwrap_or_default()
        .to_string()
}

/// Print the pages, highlighting the visible one, then the navigation row.
fn print_status(tree: &ElementTree, container: NodeId) {
    let Some(wrap) = child_with_class(tree, container, WRAP_CLASS) else {
        println!("{}", "(not built)".dimmed());
        return;
    };

    for &page in tree.children(wrap) {
        let items: Vec<String> = tree
            .children(page)
            .iter()
            .map(|&item| label_of(tree, item))
            .collect();
        let line = format!("{}: {}", label_of_class(tree, page), items.join(", "));
        if tree.is_hidden(page) {
            println!("  {}", line.dimmed());
        } else {
            println!("> {}", line.green().bold());
        }
    }

    if let Some(nav) = child_with_class(tree, container, NAV_CLASS) {
        println!("{}", render_nav(tree, nav));
    }
}

/// The class attribute of a page container (`page-1`, `page-2`, ...).
fn label_of_class(tree: &ElementTree, node: NodeId) -> String {
    tree.attribute(node, "class").unwrap_or("?").to_string()
}

/// Render the navigation row: `[2]` marks the active link, `(Previous)`
/// marks a disabled paddle.
fn render_nav(tree: &ElementTree, nav: NodeId) -> String {
    let mut parts: Vec<String> = Vec::new();

    for &child in tree.children(nav) {
        if tree.has_class(child, NUMBERS_CLASS) {
            for &link in tree.children(child) {
                let label = label_of(tree, link);
                if tree.has_class(link, ACTIVE_CLASS) {
                    parts.push(format!("[{label}]"));
                } else {
                    parts.push(label);
                }
            }
        } else if tree.has_class(child, PADDLE_CLASS) {
            let label = label_of(tree, child);
            if tree.has_class(child, DISABLED_CLASS) {
                parts.push(format!("({label})"));
            } else {
                parts.push(label);
            }
        }
    }
    parts.join(" ")
}

/// Read navigation commands from stdin until `quit` or EOF.
fn run_repl(
    tree: &mut ElementTree,
    paginator: &mut Paginator<ElementTree>,
    container: NodeId,
) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", "quire>".cyan());
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let mut words = line.split_whitespace();

        match words.next() {
            Some("next" | "n") => {
                let _ = paginator.activate_paddle(tree, Paddle::Next);
            }
            Some("prev" | "p") => {
                let _ = paginator.activate_paddle(tree, Paddle::Prev);
            }
            Some("go" | "g") => match words.next().and_then(|w| w.parse::<isize>().ok()) {
                Some(page) => {
                    let _ = paginator.go_to_page(tree, page);
                }
                None => eprintln!("usage: go <page>"),
            },
            Some("tree" | "t") => {
                print_tree(tree, container, 0);
                continue;
            }
            Some("destroy" | "d") => {
                if let Err(err) = paginator.destroy(tree) {
                    eprintln!("{}", err.red());
                }
            }
            Some("build" | "b") => {
                // A fresh build cycle: old invalid-page reports are news
                // again.
                clear_warnings();
                if let Err(err) = paginator.build(tree) {
                    eprintln!("{}", err.red());
                }
            }
            Some("quit" | "q") => break,
            None => continue,
            Some(other) => {
                eprintln!("unknown command: {other} (try next, prev, go N, tree, destroy, build, quit)");
                continue;
            }
        }
        print_status(tree, container);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = load_settings(&args)?;

    let mut tree = ElementTree::new();
    let container = load_items(&mut tree, &args.items)?;
    let item_count = tree.children(container).len();

    let mut paginator = Paginator::new(container, settings)?;
    let _ = paginator.build(&mut tree)?;

    println!(
        "{} items, {} pages",
        item_count.bold(),
        paginator.page_count().unwrap_or(0).bold()
    );
    print_status(&tree, container);

    if args.interactive {
        run_repl(&mut tree, &mut paginator, container)?;
    }
    Ok(())
}
