mod commands;
mod config;
mod screen;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use portal_auth::{Controller, CredentialStore};
use portal_db::{KeyValueStore, MemoryStore, SqliteStore};
use portal_types::view::ViewState;

use commands::{Command, HELP};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr so they don't interleave with the screen on stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portal=info,portal_auth=info,portal_db=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let storage: Box<dyn KeyValueStore> = if config.in_memory {
        info!("Using in-memory storage; nothing will be kept after exit");
        Box::new(MemoryStore::new())
    } else {
        Box::new(SqliteStore::open(&config.db_path)?)
    };

    let mut app = Controller::new(CredentialStore::new(storage), config.latency);
    app.restore()?;

    println!("{}", HELP);
    print!("{}", screen::render(&mut app));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Quit => break,
            Command::Empty => continue,
            Command::Help => println!("{}", HELP),
            Command::User(name) => app.set_username(name),
            Command::Pass(secret) => app.set_password(secret),
            Command::Switch => app.toggle_view(),
            Command::Submit => {
                if app.view() != ViewState::Home {
                    println!("...");
                }
                app.submit().await?;
            }
            Command::Logout => {
                if app.view() == ViewState::Home {
                    app.logout()?;
                } else {
                    println!("! not logged in");
                }
            }
            Command::WhoAmI => match app.store().current_user()? {
                Some(user) => println!("{} (registered {})", user.username, user.created_at.to_rfc3339()),
                None => println!("nobody is logged in"),
            },
            Command::Unknown(verb) => {
                println!("! unknown command `{}`, type `help`", verb);
                continue;
            }
        }
        print!("{}", screen::render(&mut app));
    }

    info!("Bye");
    Ok(())
}
