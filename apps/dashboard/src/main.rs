use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use roster_core::{
    config::{load_settings, load_settings_from},
    ClientSettings, HttpRosterService, NewCatField, NewCatForm, RosterEvent, RosterStore,
    SalaryEditDialog,
};
use shared::domain::CatName;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(name = "spycats", about = "Spy cats roster dashboard")]
struct Cli {
    /// Settings file; defaults to ./dashboard.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the roster service url from settings.
    #[arg(long)]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    List,
    Show {
        name: String,
    },
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "0")]
        experience: String,
        #[arg(long)]
        breed: String,
        #[arg(long, default_value = "0")]
        salary: String,
    },
    Delete {
        name: String,
    },
    SetSalary {
        name: String,
        salary: String,
    },
}

fn resolve_settings(cli: &Cli) -> Result<ClientSettings> {
    let settings = match &cli.config {
        Some(path) => load_settings_from(path)?,
        None => load_settings()?,
    };
    match &cli.base_url {
        Some(base_url) => ClientSettings::with_base_url(base_url.as_str()),
        None => Ok(settings),
    }
}

fn spawn_notice_printer(mut events: broadcast::Receiver<RosterEvent>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(RosterEvent::Notice(notice)) => eprintln!("{notice}"),
                Ok(RosterEvent::SnapshotReplaced { .. }) => {}
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            }
        }
    })
}

async fn run(store: &Arc<RosterStore>, command: Command) -> Result<()> {
    match command {
        Command::List => {}
        Command::Show { name } => {
            match store.fetch_record(&CatName::from(name.as_str())).await {
                Some(cat) => println!(
                    "{}: {} yrs, {}, ${}",
                    cat.name, cat.experience_years, cat.breed, cat.salary
                ),
                None => println!("no cat named '{name}'"),
            }
            return Ok(());
        }
        Command::Add {
            name,
            experience,
            breed,
            salary,
        } => {
            let mut form = NewCatForm::default();
            form.set(NewCatField::Name, name);
            form.set(NewCatField::Experience, experience);
            form.set(NewCatField::Breed, breed);
            form.set(NewCatField::Salary, salary);
            form.submit(store).await?;
        }
        Command::Delete { name } => {
            store.delete_record(&CatName::from(name)).await;
        }
        Command::SetSalary { name, salary } => {
            let Some(cat) = store
                .snapshot()
                .await
                .into_iter()
                .find(|cat| cat.name.as_str() == name)
            else {
                bail!("no cat named '{name}' on the roster");
            };
            let dialog = SalaryEditDialog::new(Arc::clone(store));
            dialog.begin_edit(&cat).await;
            dialog.update_value(salary).await;
            dialog.submit().await?;
        }
    }

    print!("{}", render::render_roster(&store.view().await));
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let settings = resolve_settings(&cli)?;
    info!(base_url = %settings.base_url, "roster service");

    let store = RosterStore::new(Arc::new(HttpRosterService::new(&settings)));
    let printer = spawn_notice_printer(store.subscribe());

    store.init().await;
    let result = run(&store, cli.command).await;
    store.dispose().await;

    drop(store);
    let _ = printer.await;
    result
}
