//! Frogger entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::KeyboardEvent;

    use frogger::consts::TICK_PERIOD_MS;
    use frogger::view::SvgPresenter;
    use frogger::{Session, Settings};

    /// Game instance: the session plus what draws it
    struct Game {
        session: Session,
        presenter: SvgPresenter,
        last_time: f64,
    }

    impl Game {
        fn update(&mut self, now: f64) {
            let dt = if self.last_time > 0.0 {
                now - self.last_time
            } else {
                f64::from(TICK_PERIOD_MS)
            };
            self.last_time = now;
            self.session.advance(dt, &mut self.presenter);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("logger init failed: {e}").into());
        }

        log::info!("Frogger starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let settings = Settings::load();
        let presenter = SvgPresenter::new(document.clone(), "svgCanvas", settings)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let game = Rc::new(RefCell::new(Game {
            session: Session::new(),
            presenter,
            last_time: 0.0,
        }));

        setup_input_handlers(&document, game.clone())?;
        setup_blur(&window, game.clone())?;
        setup_clock(&window, game)?;

        log::info!("Frogger running!");
        Ok(())
    }

    fn setup_input_handlers(
        document: &web_sys::Document,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let Game {
                    session, presenter, ..
                } = &mut *g;
                session.key_down(&event.code(), event.repeat(), presenter);
            });
            document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            game.borrow_mut().session.key_up(&event.code());
        });
        document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_blur(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().session.blur();
        });
        window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_clock(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut()>::new(move || {
            game.borrow_mut().update(js_sys::Date::now());
        });
        window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            TICK_PERIOD_MS as i32,
        )?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug)]
#[command(name = "frogger")]
#[command(about = "Headless Frogger run: a seeded autopilot plays, the HUD goes to the log")]
struct Cli {
    /// Autopilot seed
    #[arg(long, default_value_t = 2024)]
    seed: u64,
    /// Simulated clock ticks to run
    #[arg(long, default_value_t = 10_000)]
    ticks: u64,
    /// Write the settings in effect to frogger-settings.json before running
    #[arg(long)]
    save_settings: bool,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use frogger::autopilot::Autopilot;
    use frogger::consts::TICK_PERIOD_MS;
    use frogger::view::LogPresenter;
    use frogger::{Session, Settings};

    let cli = Cli::parse();

    env_logger::init();
    log::info!("Frogger (native) starting...");
    log::info!("Native mode is headless: the autopilot plays, the HUD goes to the log");

    let settings = Settings::load();
    if cli.save_settings {
        if let Err(e) = settings.save() {
            log::error!("Could not save settings: {e}");
        }
    }
    let mut presenter = LogPresenter::new(settings);
    let mut session = Session::new();
    let mut pilot = Autopilot::new(cli.seed);

    let ticks = cli.ticks;
    log::info!("Seed {}, {ticks} ticks", cli.seed);
    let mut simulated = 0;
    while simulated < ticks {
        if let Some(hop) = pilot.decide(session.state()) {
            session.handle(hop, &mut presenter);
        }
        simulated += session.advance(f64::from(TICK_PERIOD_MS), &mut presenter) as u64;
    }

    let state = session.state();
    log::info!(
        "Finished: score {}, high score {}, level {}, {} game over(s)",
        state.score,
        state.high_score,
        state.level,
        presenter.games_over()
    );

    match serde_json::to_string_pretty(state) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Could not serialize final state: {e}"),
    }
}
