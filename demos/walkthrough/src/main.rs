use glimmer_core::prelude::*;

const TARGETS: [&str; 5] = ["animatedBox", "card", "mathResult", "colorResult", "scopeResult"];

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut pg = Playground::new(PlaygroundConfig::default())?;
    for id in TARGETS {
        pg.stage_mut().insert(id);
    }
    pg.spinner()
        .subscribe(|v| log::info!("spinner is now {v:?}"));

    let sum = pg.calculate_random_sum()?;
    log::info!("{sum}");
    pg.update_result_display("mathResult", sum.to_string(), Color::from_hex("#4ecdc4").ok())?;

    let color = pg.random_color();
    log::info!("Random Color: {color}");
    pg.update_result_display("colorResult", color.to_hex(), Some(color))?;

    let scope = pg.demonstrate_scope();
    log::info!("{}: {scope}", scope.local_message);
    pg.update_result_display("scopeResult", scope.to_string(), Color::from_hex("#ff9a9e").ok())?;

    pg.trigger_animation("animatedBox", "bounce-animation", None)?;
    pg.flip_card("card")?;
    if let Err(e) = pg.trigger_animation("missingBox", "slide-animation", None) {
        log::warn!("{e}");
    }

    pg.toggle_modal(Some(true));
    log::info!("modal visible: {}", pg.modal().is_visible());
    pg.toggle_modal(Some(false));

    pg.toggle_loading_spinner(true, Some(Duration::from_millis(400)));

    // Sleep until the next deadline and run it, until nothing is pending.
    while let Some(deadline) = pg.next_deadline() {
        let wait = deadline.saturating_duration_since(pg.now());
        std::thread::sleep(wait);
        let fired = pg.tick();
        log::debug!("tick: {fired} deferred action(s)");
    }

    for (_, el) in pg.stage().iter() {
        let classes: Vec<&str> = el.classes().collect();
        log::info!(
            "{:<14} classes={:?} content={:?} background={}",
            el.id(),
            classes,
            el.content,
            el.background.map(|c| c.to_hex()).unwrap_or_default()
        );
    }
    log::info!("counter = {}", pg.counter());
    Ok(())
}
