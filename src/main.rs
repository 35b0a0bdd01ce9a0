mod app;
mod cli;
mod config;
mod error;
mod logging;
mod logic;
mod models;
mod output;
mod ui;

use app::App;
use clap::Parser;
use cli::{AdviseArgs, Cli, Commands};
use config::Config;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use error::Result;
use logic::GardenAdvisor;
use models::{Edition, PlantOption, Season};
use output::{AdvicePresenter, ConsoleOutput, HtmlOutput, JsonOutput, OutputFormat};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use ui::screens::AdvisorScreen;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let log_target = logging::log_target(cli.command.as_ref(), dirs::data_dir());
    logging::init(cli.verbose, &log_target);

    match cli.command {
        Some(Commands::Init) => {
            Config::setup_interactive()?;
            Ok(())
        }
        Some(Commands::Advise(args)) => {
            let (config, advisor) = load(cli.config.as_ref(), cli.edition)?;
            run_advise(&advisor, &config, args)
        }
        Some(Commands::Options { season }) => {
            let (config, advisor) = load(cli.config.as_ref(), cli.edition)?;
            let season = season.unwrap_or(config.defaults.season);
            print_options(&advisor, &season);
            Ok(())
        }
        Some(Commands::Tui { season }) => {
            let (_, advisor) = load(cli.config.as_ref(), cli.edition)?;
            run_tui(advisor, season.as_deref())
        }
        Some(Commands::Check) => {
            let (config, advisor) = load(cli.config.as_ref(), cli.edition)?;
            run_check(&advisor, &config);
            Ok(())
        }
        None => {
            // One-shot run with the configured defaults
            let (config, advisor) = load(cli.config.as_ref(), cli.edition)?;
            run_advise(&advisor, &config, AdviseArgs::default())
        }
    }
}

fn load(
    config_path: Option<&PathBuf>,
    edition: Option<Edition>,
) -> Result<(Config, Arc<GardenAdvisor>)> {
    let mut config = match Config::load(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Run `gardenops init` to write a fresh config file");
            std::process::exit(1);
        }
    };

    if let Some(edition) = edition {
        config.edition = edition;
    }

    let knowledge = match config.knowledge_base() {
        Ok(kb) => kb,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        edition = %config.edition,
        regional_plants = knowledge.regional_plant_count(),
        "Knowledge base ready"
    );

    Ok((config, Arc::new(GardenAdvisor::new(Arc::new(knowledge)))))
}

fn run_advise(advisor: &GardenAdvisor, config: &Config, args: AdviseArgs) -> Result<()> {
    let season = if args.current_season {
        let today = chrono::Local::now().date_naive();
        let hemisphere = args.hemisphere.unwrap_or(config.hemisphere);
        Season::for_date(&today, hemisphere).to_string()
    } else {
        args.season
            .unwrap_or_else(|| config.defaults.season.clone())
    };
    let plant_type = args
        .plant
        .unwrap_or_else(|| config.defaults.plant_type.clone());
    let format = args.format.unwrap_or(config.output);
    let title = advisor.knowledge().edition().banner_title();

    let mut presenter: Box<dyn AdvicePresenter> = match format {
        OutputFormat::Text => Box::new(ConsoleOutput::new(
            title,
            io::stdout().lock(),
            io::stderr().lock(),
        )),
        OutputFormat::Json => Box::new(JsonOutput::new(io::stdout().lock()).pretty(true)),
        OutputFormat::Html => Box::new(HtmlOutput::new(title, io::stdout().lock())),
    };

    // Invalid input is reported by the presenter; the exit status stays 0
    advisor.present(&season, &plant_type, presenter.as_mut())
}

fn print_options(advisor: &GardenAdvisor, season: &str) {
    println!("Plant choices for {}:", season);
    for option in advisor.plant_options(season) {
        match option {
            PlantOption::Placeholder => {}
            PlantOption::Separator { label } => println!("  {}", label),
            other => println!("  {:<12} {}", other.value(), other.label()),
        }
    }
}

fn run_check(advisor: &GardenAdvisor, config: &Config) {
    println!(
        "Config: OK (edition {}, hemisphere {}, output {})",
        config.edition, config.hemisphere, config.output
    );
    let per_season: Vec<String> = Season::all()
        .iter()
        .map(|s| format!("{} {}", s, advisor.knowledge().plants_for(*s).len()))
        .collect();
    println!(
        "Regional plants: {} ({})",
        advisor.knowledge().regional_plant_count(),
        per_season.join(", ")
    );
    println!(
        "Accepted plant types: {}",
        advisor.validator().accepted_plant_types().join(", ")
    );

    let today = chrono::Local::now().date_naive();
    println!(
        "Current season: {}",
        Season::for_date(&today, config.hemisphere)
    );

    let defaults = &config.defaults;
    match advisor
        .validator()
        .validate(&defaults.season, &defaults.plant_type)
    {
        Ok(()) => println!(
            "Defaults: {} / {}: OK",
            defaults.season, defaults.plant_type
        ),
        Err(invalid) => {
            eprintln!(
                "Defaults: {} / {}: {}",
                defaults.season, defaults.plant_type, invalid
            );
            std::process::exit(1);
        }
    }
}

fn run_tui(advisor: Arc<GardenAdvisor>, season: Option<&str>) -> Result<()> {
    let mut app = App::new(advisor);
    if let Some(season) = season {
        app = app.with_season(season);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let area = f.area();
            f.render_widget(AdvisorScreen::new(app), area);
        })?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Char('q') => app.quit(),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.quit();
                    }
                    KeyCode::Tab | KeyCode::BackTab => app.next_field(),
                    KeyCode::Up | KeyCode::Left => app.prev_option(),
                    KeyCode::Down | KeyCode::Right => app.next_option(),
                    KeyCode::Enter => app.submit()?,
                    KeyCode::Esc => app.clear_output(),
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
