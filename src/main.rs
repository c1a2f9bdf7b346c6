use helicat::HeliCatError;
use helicat::config::{AppConfig, fetch_config};
use helicat::tui::{self, App};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), HeliCatError> {
    // Log to stderr so tracing output never tears the alternate screen;
    // redirect fd 2 to a file to capture it.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = fetch_config()?;
    tracing::info!(
        base_price = config.chart.base_price,
        volatility = config.chart.volatility,
        max_candles = config.chart.max_candles,
        trend = config.chart.trend.label(),
        "starting"
    );

    let mut terminal = tui::setup_terminal()?;
    let result = run(&mut terminal, &config).await;
    tui::restore_terminal(&mut terminal)?;
    result
}

/// Drives the animation: one reducer, one draw per message.
async fn run(terminal: &mut tui::Tui, config: &AppConfig) -> Result<(), HeliCatError> {
    let mut app = App::new(&config.chart);

    let (tx, mut rx) = mpsc::unbounded_channel();
    tui::spawn_event_reader(tx.clone());
    tui::spawn_tick_timer(tx, config.chart.tick_ms);

    while !app.should_quit {
        match rx.recv().await {
            Some(message) => tui::update(&mut app, message),
            None => break,
        }

        terminal
            .draw(|frame| tui::render(frame, &mut app))
            .map_err(|e| HeliCatError::Io(format!("draw failed: {e}")))?;
    }

    tracing::info!(ticks = app.ticks, "shutting down");
    Ok(())
}
