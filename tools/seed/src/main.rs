mod roster_file;

use clap::Parser;
use skillswap::roster::{DEFAULT_ROSTER, seed};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seed", about = "Seed the skill swap roster")]
struct Args {
    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// File with one name per line (defaults to the built-in roster)
    #[arg(short, long)]
    names: Option<PathBuf>,

    /// Delete the mapping, responses and people before seeding
    #[arg(long)]
    clear: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    println!("Connecting to database...");
    let pool = skillswap::db::connect(&args.database_url).await?;

    if args.clear {
        println!("Clearing existing roster...");
        let mut tx = pool.begin().await?;
        for table in ["mapping", "responses", "people"] {
            sqlx::query(&format!("DELETE FROM {table}"))
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
    }

    let names = match &args.names {
        Some(path) => {
            println!("Reading names from {:?}", path);
            roster_file::read_names(path)?
        }
        None => {
            println!("No names file provided, using the default roster");
            DEFAULT_ROSTER.iter().map(|name| name.to_string()).collect()
        }
    };
    println!("Found {} names", names.len());

    let inserted = seed(&pool, &names).await?;

    println!();
    if inserted == 0 && !names.is_empty() {
        println!("Roster already populated; nothing inserted (use --clear to replace it)");
    } else {
        println!("Inserted {} people", inserted);
    }

    Ok(())
}
