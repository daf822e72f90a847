use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ticketboard::data::{columns, Bucket, GroupKey, SortKey, TicketStore, ViewState};
use ticketboard::integrations::preferences::MemoryPreferenceStore;
use ticketboard::{config, integrations, tui};

#[derive(Parser, Debug)]
#[command(name = "ticketboard")]
#[command(about = "Terminal kanban board for remote tickets")]
#[command(version)]
struct Args {
    /// Initialize configuration
    #[arg(long)]
    init: bool,

    /// Path to config file
    #[arg(long, short)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the board once and print it to stdout
    Print {
        /// Group by status, user, or priority (not persisted)
        #[arg(long)]
        group_by: Option<String>,

        /// Order by priority or title (not persisted)
        #[arg(long)]
        sort_by: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ticketboard=info".parse()?),
        )
        .init();

    if args.init {
        config::init_wizard()?;
        return Ok(());
    }

    let config = config::load(args.config.as_deref())?;

    match args.command {
        Some(Command::Print {
            group_by,
            sort_by,
            json,
        }) => print_board(&config, group_by, sort_by, json).await,
        None => tui::run(config).await,
    }
}

async fn print_board(
    config: &config::Config,
    group_by: Option<String>,
    sort_by: Option<String>,
    json: bool,
) -> Result<()> {
    let board = integrations::fetch_board(config).await?;
    let mut store = TicketStore::new();
    store.load(board.tickets, board.users);

    let persisted = tui::load_view_state(config)?;
    let group_by = match group_by {
        Some(raw) => raw.parse::<GroupKey>().context("Invalid --group-by")?,
        None => persisted.group_by(),
    };
    let sort_by = match sort_by {
        Some(raw) => raw.parse::<SortKey>().context("Invalid --sort-by")?,
        None => persisted.sort_by(),
    };

    // Overrides go to a throwaway store so the saved preferences stay as they are
    let mut view = ViewState::load(Box::new(MemoryPreferenceStore::new()));
    view.set_group_by(group_by)?;
    view.set_sort_by(sort_by)?;

    let cols = columns(&store, &view);
    if json {
        println!("{}", serde_json::to_string_pretty(&cols)?);
    } else {
        print!("{}", render_text(&cols));
    }
    Ok(())
}

fn render_text(cols: &[Bucket<'_>]) -> String {
    let mut out = String::new();
    for bucket in cols {
        out.push_str(&format!("== {} ({})\n", bucket.label, bucket.tickets.len()));
        for ticket in &bucket.tickets {
            out.push_str(&format!(
                "  {:<8} [{}] {}\n",
                ticket.id,
                ticket.priority,
                ticket.title
            ));
        }
    }
    out
}
