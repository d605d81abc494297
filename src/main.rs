use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveTime};
use clap::{Parser, Subcommand};
use colored::Colorize;

use study_room_scheduler::domain::capacity::capacity_policy::desired_capacity;
use study_room_scheduler::domain::monitor::study_room_monitor::StudyRoomMonitor;
use study_room_scheduler::domain::occupancy::file_feed::FileFeed;
use study_room_scheduler::domain::pager::layout_page::PagerView;
use study_room_scheduler::domain::pager::room_layout_pager::{activate_layouts, assign_global_seat_ids};
use study_room_scheduler::domain::room::rooms_config::RoomsConfig;
use study_room_scheduler::domain::time_table::time_section::SectionType;
use study_room_scheduler::domain::time_table::time_table::TimeTable;
use study_room_scheduler::domain::time_table::timer_status::TimerStatus;
use study_room_scheduler::{load_monitor, logger};

#[derive(Debug, Parser)]
#[command(name = "study-room", version, about = "Study room timer, capacity controller and seat pager")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the monitor until Ctrl-C.
    Run {
        #[arg(long)]
        config: String,
    },
    /// Print the countdown for a time of day.
    Timer {
        /// `HH:MM` or `HH:MM:SS`; defaults to now.
        #[arg(long)]
        at: Option<String>,
        #[arg(long)]
        time_table: Option<String>,
    },
    /// Show which layouts a given occupancy activates.
    Plan {
        #[arg(long)]
        rooms: String,
        #[arg(long)]
        occupants: u32,
        #[arg(long, default_value_t = 0.1)]
        vacancy: f64,
        #[arg(long)]
        fixed: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init();

    if let Err(e) = run_command(cli.command).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run_command(command: Command) -> Result<()> {
    match command {
        Command::Run { config } => run_monitor(&config).await,
        Command::Timer { at, time_table } => print_timer(at.as_deref(), time_table.as_deref()),
        Command::Plan { rooms, occupants, vacancy, fixed } => print_plan(&rooms, occupants, vacancy, fixed),
    }
}

async fn run_monitor(config_path: &str) -> Result<()> {
    let (config, mut monitor) = load_monitor(config_path).with_context(|| format!("failed to set up monitor from '{}'", config_path))?;

    if let Some(feed_path) = &config.feed_path {
        let period = StudyRoomMonitor::feed_period(&config)?;
        let file_feed = FileFeed::new(feed_path.clone(), monitor.feed(), period);
        tokio::spawn(file_feed.run(monitor.child_token()));
    } else {
        log::warn!("No feed path configured. Occupancy stays empty until something publishes into the feed.");
    }

    let mut pages = monitor.subscribe_pages();
    let token = monitor.child_token();
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                changed = pages.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    log_view(&pages.borrow_and_update());
                }
            }
        }
    });

    monitor.start()?;
    println!("{} press Ctrl-C to stop", "Monitoring".green().bold());

    tokio::signal::ctrl_c().await.context("failed to listen for Ctrl-C")?;
    monitor.shutdown().await?;
    Ok(())
}

fn log_view(view: &PagerView) {
    match view.current_page() {
        Some(page) => log::info!(
            "Showing page {}/{}: '{}' seats {}..={} with {} occupant(s){}.",
            view.pages().iter().position(|p| p.display).map_or(0, |i| i + 1),
            view.pages().len(),
            page.room_layout.name(),
            page.seat_range().first_seat_id,
            page.seat_range().last_seat_id,
            page.used_seats.len(),
            if page.member_only { " (members)" } else { "" }
        ),
        None => log::debug!("Pages not ready."),
    }
}

fn print_timer(at: Option<&str>, time_table: Option<&str>) -> Result<()> {
    let table = match time_table {
        Some(path) => TimeTable::load(path)?,
        None => TimeTable::default_table(),
    };

    let today = Local::now().naive_local();
    let now = match at {
        Some(text) => {
            let time = NaiveTime::parse_from_str(text, "%H:%M:%S")
                .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
                .with_context(|| format!("'{}' is not a time of day", text))?;
            today.date().and_time(time)
        }
        None => today,
    };

    let status = TimerStatus::at(&table, now);
    let label = match status.section_type {
        SectionType::Study => format!("Study #{}", status.section_id).green().bold(),
        SectionType::Break => "Break".yellow().bold(),
    };

    println!("{} {} ({})", now.format("%H:%M:%S"), label, status.part_type);
    println!("  remaining  {}", status.countdown().bold());
    println!("  next       {} for {} min", status.next_section_type, status.next_section_duration);
    if status.is_fallback {
        println!("  {}", "no section matched, showing the first table entry".red());
    }
    Ok(())
}

fn print_plan(rooms_path: &str, occupants: u32, vacancy: f64, fixed: bool) -> Result<()> {
    if !(0.0..1.0).contains(&vacancy) {
        bail!("vacancy rate must be in [0, 1), got {}", vacancy);
    }

    let rooms = RoomsConfig::load(rooms_path)?;
    let pool = &rooms.general;
    let desired = desired_capacity(pool, occupants, vacancy, fixed);
    let layouts = activate_layouts(pool, desired);
    let ranges = assign_global_seat_ids(&layouts);

    println!(
        "{} occupants, vacancy {}{} -> desired capacity {}",
        occupants,
        vacancy,
        if fixed { " (fixed)" } else { "" },
        desired.to_string().green().bold()
    );
    for (index, (layout, range)) in layouts.iter().zip(ranges).enumerate() {
        let kind = if index < pool.basic().len() { "basic".normal() } else { "temporary".cyan() };
        println!("  {:>2}. {:<24} {:<9} seats {:>4}..={:<4}", index + 1, layout.name(), kind, range.first_seat_id, range.last_seat_id);
    }
    Ok(())
}
