use skimmer::app::App;
use skimmer::engine::config::Config;
use skimmer::logging;
use skimmer::ui::TuiManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    // The TUI owns stdout, so a logger failure is reported before it starts
    if let Err(err) = logging::init(&config.log) {
        eprintln!("Logging disabled: {}", err);
    }
    if let Some(err) = config_error {
        log::warn!("{}; using default configuration", err);
    }
    log::info!("skimmer starting");

    let mut app = App::new(config);
    let mut tui = TuiManager::new()?;

    // The TUI handles all user input including loading commands
    tui.run_event_loop(&mut app)?;

    log::info!("skimmer exiting");
    Ok(())
}
