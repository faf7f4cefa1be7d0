use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use anyhow::{Context, Result};
use counter_store::{counter_store, CounterState, CounterStore};

mod config;
mod logger;
mod render;

use config::DemoConfig;

fn main() -> Result<()> {
    logger::init();

    log::info!("Starting counter-demo");

    let config = DemoConfig::load();
    let out = Rc::new(RefCell::new(io::stdout()));
    let store = run(&config, out)?;

    log::info!("Exiting counter-demo with count {}", store.get_state().count);
    Ok(())
}

/// Build a store from `config`, subscribe the renderer and play the script
///
/// The initial state is rendered by hand; every dispatch after that is
/// rendered by the subscribed listener.
fn run<W: Write + 'static>(
    config: &DemoConfig,
    out: Rc<RefCell<W>>,
) -> Result<Rc<CounterStore>> {
    let store = Rc::new(
        counter_store(CounterState::new(config.initial_count)).with_policy(config.notify_policy),
    );

    let render = Rc::new(render::render_to(&store, Rc::clone(&out)));
    let listener = Rc::clone(&render);
    store.try_subscribe(move || listener());

    writeln!(out.borrow_mut(), "Scenario 1: Initial state")?;
    render().context("Rendering initial state failed")?;

    for (index, scenario) in config.scenarios.iter().enumerate() {
        writeln!(out.borrow_mut(), "Scenario {}: {}", index + 2, scenario.label)?;
        for action in &scenario.actions {
            store
                .dispatch(*action)
                .with_context(|| format!("Dispatching {} failed", action.type_name()))?;
        }
    }

    Ok(store)
}
