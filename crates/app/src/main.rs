//! Campus - classroom occupancy and role dashboards
//!
//! Headless driver: signs in, prints the role dashboard and notifications,
//! then mounts the occupancy view and prints the board after every tick.

use std::path::PathBuf;

use campus_app::viewmodel::{dashboard, NotificationsPanel, OccupancyView};
use campus_app::{AppConfig, AppState, Result, SessionContext};
use campus_core::{navigation, NotificationFilter};
use chrono::{Local, NaiveDate};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "campus", version, about = "Campus classroom occupancy dashboard")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sign in as the user with this email
    #[arg(long)]
    login: Option<String>,

    /// Only show rooms in this building
    #[arg(long)]
    building: Option<String>,

    /// Ticks to run before tearing the occupancy view down (0 = until Ctrl-C)
    #[arg(long)]
    ticks: Option<u64>,

    /// Day the dashboards are shown for (YYYY-MM-DD), today by default
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Print panels as JSON lines
    #[arg(long)]
    json: bool,
}

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    tracing::info!("Starting campus dashboard");

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run(cli)) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn emit<T: Serialize + std::fmt::Display>(json: bool, panel: &T) {
    if json {
        match serde_json::to_string(panel) {
            Ok(line) => println!("{}", line),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize panel"),
        }
    } else {
        println!("{}", panel);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(building) = cli.building {
        config.occupancy.building = building;
    }
    if let Some(ticks) = cli.ticks {
        config.occupancy.ticks = ticks;
    }
    config.validate()?;

    let state = AppState::new(&config)?;
    let mut session = SessionContext::new();

    if let Some(email) = cli.login.or_else(|| config.session.login_email.clone()) {
        session.login(state.fixtures(), &email)?;
    }

    let nav: Vec<&str> = navigation(session.principal())
        .iter()
        .map(|item| item.view.path())
        .collect();
    tracing::info!(?nav, "Navigation");

    let now = Local::now();
    let date = cli.date.unwrap_or_else(|| now.date_naive());
    if session.is_signed_in() {
        let panel = dashboard::open_home(&state, &session, date, now.time())?;
        emit(cli.json, &panel);
    }

    let feed = state.notification_feed();
    emit(
        cli.json,
        &NotificationsPanel::build(&feed, NotificationFilter::All),
    );

    let mut view = OccupancyView::new(state.fixtures().occupancy_board(), &config.occupancy);
    let mut updates = view.subscribe();

    view.mount();
    emit(cli.json, &view.render()?);

    let limit = config.occupancy.ticks;
    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                emit(cli.json, &view.render()?);
                if limit != 0 && snapshot.ticks >= limit {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
        }
    }

    view.unmount().await;
    session.logout();
    Ok(())
}
