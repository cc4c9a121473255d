use std::sync::mpsc;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::catalog::{CatalogClient, CatalogWorker};
use crate::mpris::ControlCmd;
use crate::player::Player;
use crate::store::{JsonFileStore, MusicLibrary, default_data_dir};

mod event_loop;
mod mpris_sync;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    let data_dir = settings
        .storage
        .data_dir
        .clone()
        .or_else(default_data_dir)
        .ok_or("could not determine a data directory; set storage.data_dir")?;
    let library = MusicLibrary::new(Box::new(JsonFileStore::new(data_dir)));

    let client = CatalogClient::new(&settings.catalog)?;
    let catalog = CatalogWorker::spawn(client);

    let player = Player::new(settings.audio.clone());
    let mut app = App::new();
    app.set_now_playing_handle(player.now_playing_handle());

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = crate::mpris::spawn_mpris(control_tx.clone());

    startup::prime(&mut app, &catalog, &library);
    mpris_sync::update_mpris(&mpris, &app);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::new(&app);

        event_loop::run(
            &mut terminal,
            &settings,
            &mut app,
            &player,
            &catalog,
            &library,
            &mpris,
            &control_tx,
            &control_rx,
            &mut state,
        )
    })();

    catalog.shutdown();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
