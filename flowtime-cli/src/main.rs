mod cli;
mod config;
mod seed;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use time::Date;

use flowtime_core::bootstrap::{self, Startup};
use flowtime_core::domain::{
    format_duration, Employee, EmployeeStatus, EmployeeUpdate, NewEmployee, Page,
};
use flowtime_core::roster::{EmployeeRoster, RosterFilter, RosterSort};
use flowtime_core::session::SessionStore;
use flowtime_core::store::JsonFileStore;
use flowtime_core::theme::ThemeService;
use flowtime_core::timeclock::{Phase, TimeClock};
use flowtime_core::timesheet::TimesheetLedger;

use cli::{Cli, ClockCommands, Commands, RosterCommands, ThemeCommands};
use config::FlowtimeConfig;

const ADMIN_LOGIN: &str = "admin";
const ADMIN_PASSWORD: &str = "admin123";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    let cli = Cli::parse();

    let config = FlowtimeConfig::load()?;
    let data_dir = match std::env::var("FLOWTIME_DATA_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => config.store_dir()?,
    };
    tracing::debug!("Using data dir {}", data_dir.display());
    let store = JsonFileStore::new(data_dir);

    let startup = bootstrap::restore(&store).context("could not restore saved state")?;

    match cli.command {
        Commands::Login { username } => login(&store, &username)?,
        Commands::ConfigPath => show_config_path()?,
        Commands::Status => show_status(&store, &startup)?,
        _ if !startup.authenticated => {
            bail!("not signed in, run 'flowtime login <username>' first")
        }
        Commands::Logout => logout(&store)?,
        Commands::Open { page } => open_page(&store, page)?,
        Commands::Roster { command } => run_roster(&store, command)?,
        Commands::Clock { command } => run_clock(&store, startup.time_clock, command).await?,
        Commands::Timesheet => show_timesheet(&store)?,
        Commands::Theme { command } => run_theme(&store, command)?,
    }

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("FLOWTIME_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn login(store: &JsonFileStore, username: &str) -> Result<()> {
    let username = username.trim();
    if username.is_empty() {
        bail!("login cannot be empty");
    }

    let password = rpassword::prompt_password("Password: ").context("could not read password")?;
    let password = password.trim();
    if password.is_empty() {
        bail!("password cannot be empty");
    }

    if username != ADMIN_LOGIN {
        bail!("user not found: no account is named '{username}'");
    }
    if password != ADMIN_PASSWORD {
        bail!("incorrect password");
    }

    let session = SessionStore::new(store.clone());
    session.login()?;
    // A fresh sign-in always lands on the employees page.
    session.set_current_page(Page::default())?;
    println!("Signed in as {username}.");
    Ok(())
}

fn logout(store: &JsonFileStore) -> Result<()> {
    SessionStore::new(store.clone()).logout()?;
    println!("Signed out.");
    Ok(())
}

fn show_status(store: &JsonFileStore, startup: &Startup<JsonFileStore>) -> Result<()> {
    if !startup.authenticated {
        println!("Signed out.");
        return Ok(());
    }

    let theme = ThemeService::new(store.clone()).current()?;
    println!("Signed in as {ADMIN_LOGIN}.");
    println!("Page:  {}", startup.page);
    println!("Theme: {theme}");

    let clock = &startup.time_clock;
    match (clock.phase(), clock.department(), clock.elapsed()) {
        (Phase::Working, Some(department), Some(elapsed)) => {
            println!(
                "Clock: working in {department} for {}",
                format_duration(elapsed)
            );
        }
        (phase, _, _) => println!("Clock: {phase}"),
    }
    Ok(())
}

fn open_page(store: &JsonFileStore, page: Page) -> Result<()> {
    SessionStore::new(store.clone()).set_current_page(page)?;
    println!("Now on the {page} page.");
    Ok(())
}

fn run_roster(store: &JsonFileStore, command: RosterCommands) -> Result<()> {
    let mut roster = EmployeeRoster::load_or(store.clone(), seed::default_roster())?;

    match command {
        RosterCommands::List {
            status,
            department,
            search,
            sort,
            desc,
        } => {
            let mut filter = RosterFilter::new();
            if let Some(status) = status {
                filter = filter.with_status(status);
            }
            if let Some(department) = department {
                filter = filter.with_department(department);
            }
            if let Some(term) = search {
                filter = filter.with_search_term(term);
            }

            let mut rows = filter.apply(roster.employees());
            if let Some(key) = sort {
                let mut order = RosterSort::ascending(key);
                if desc {
                    order.direction = order.direction.flipped();
                }
                rows = order.apply(&rows);
            }

            if rows.is_empty() {
                println!("No matching employees.");
                return Ok(());
            }
            print_employees(&rows);
        }
        RosterCommands::Add {
            name,
            position,
            department,
            status,
            hire_date,
        } => {
            let mut new = NewEmployee::new(name, position, department);
            if let Some(status) = status {
                new = new.with_status(status);
            }
            if let Some(raw) = hire_date {
                new = new.with_hire_date(parse_date(&raw)?);
            }
            let employee = roster.add(new)?;
            println!("Added #{} {}.", employee.id, employee.name);
        }
        RosterCommands::Edit {
            id,
            name,
            position,
            department,
            status,
            hire_date,
        } => {
            require_editable(&roster, id)?;
            if name.is_none()
                && position.is_none()
                && department.is_none()
                && status.is_none()
                && hire_date.is_none()
            {
                bail!("nothing to change, pass at least one field flag");
            }
            let update = EmployeeUpdate {
                name,
                position,
                department,
                status,
                hire_date: hire_date.map(|raw| parse_date(&raw)).transpose()?,
            };
            let employee = roster.update(id, update)?;
            println!("Updated #{} {}.", employee.id, employee.name);
        }
        RosterCommands::Remove { id } => {
            require_editable(&roster, id)?;
            roster.remove(id)?;
            println!("Removed #{id}.");
        }
    }
    Ok(())
}

/// Terminated employees are frozen in the dashboard, so refuse to touch
/// them here as well. Unknown ids fall through to the repository's own
/// not-found error.
fn require_editable(roster: &EmployeeRoster<JsonFileStore>, id: u32) -> Result<()> {
    if let Some(employee) = roster.get(id) {
        if employee.status == EmployeeStatus::Terminated {
            bail!("employee #{id} is terminated and can no longer be changed");
        }
    }
    Ok(())
}

fn print_employees(employees: &[Employee]) {
    println!(
        "{:>4}  {:<22} {:<24} {:<6} {:<11} {}",
        "ID", "NAME", "POSITION", "DEPT", "STATUS", "HIRED"
    );
    for e in employees {
        println!(
            "{:>4}  {:<22} {:<24} {:<6} {:<11} {}",
            e.id,
            e.name,
            e.position,
            e.department.to_string(),
            e.status.to_string(),
            e.hire_date
        );
    }
}

async fn run_clock(
    store: &JsonFileStore,
    mut clock: TimeClock<JsonFileStore>,
    command: ClockCommands,
) -> Result<()> {
    match command {
        ClockCommands::In { department } => {
            clock.select_department(department)?;
            clock.arm()?;
            clock.start()?;
            println!("Clocked in to {department}.");
        }
        ClockCommands::Out => {
            let mut ledger = TimesheetLedger::load(store.clone())?;
            let entry = clock.stop(&mut ledger)?;
            println!("Clocked out of {} after {}.", entry.department, entry.total);
        }
        ClockCommands::Watch => {
            let mut ticks = clock.resume_ticker()?;
            println!("Watching the running session, Ctrl-C leaves it running.");
            print!("{}", *ticks.borrow());
            std::io::stdout().flush()?;

            loop {
                tokio::select! {
                    changed = ticks.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        print!("\r{}", *ticks.borrow_and_update());
                        std::io::stdout().flush()?;
                    }
                    _ = tokio::signal::ctrl_c() => break,
                }
            }
            println!();
        }
    }
    Ok(())
}

fn show_timesheet(store: &JsonFileStore) -> Result<()> {
    let ledger = TimesheetLedger::load(store.clone())?;
    if ledger.entries().is_empty() {
        println!("No recorded sessions yet.");
        return Ok(());
    }

    println!(
        "{:<12} {:<6} {:<10} {:<10} {}",
        "DATE", "DEPT", "START", "END", "TOTAL"
    );
    for entry in ledger.entries() {
        println!(
            "{:<12} {:<6} {:<10} {:<10} {}",
            entry.date, entry.department, entry.start, entry.end, entry.total
        );
    }
    Ok(())
}

fn run_theme(store: &JsonFileStore, command: ThemeCommands) -> Result<()> {
    let themes = ThemeService::new(store.clone());
    match command {
        ThemeCommands::Show => println!("{}", themes.current()?),
        ThemeCommands::Toggle => println!("Theme set to {}.", themes.toggle()?),
    }
    Ok(())
}

fn show_config_path() -> Result<()> {
    let path = FlowtimeConfig::config_path()?;
    if !path.exists() {
        FlowtimeConfig::default().save()?;
    }
    println!("{}", path.display());
    Ok(())
}

fn parse_date(raw: &str) -> Result<Date> {
    let format = time::format_description::parse("[year]-[month]-[day]")?;
    Date::parse(raw, &format)
        .with_context(|| format!("could not parse date '{raw}', expected YYYY-MM-DD"))
}
