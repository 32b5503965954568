use viralforge_admin::app::{App, AppContext, AppMessage};
use viralforge_admin::cli::{parse_args, run_cli_command, CliCommand};
use viralforge_admin::config::{AdminConfig, DataMode};
use viralforge_admin::logging::{init_logging, LogTarget};
use viralforge_admin::terminal::{setup_panic_hook, TerminalManager};
use viralforge_admin::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;
use tokio::sync::mpsc;

/// Event loop tick; drives spinners and idle redraws.
const TICK: Duration = Duration::from_millis(16);

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args());
    let log_target = match command {
        CliCommand::RunTui { .. } => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    init_logging(log_target)?;

    let mut config = AdminConfig::from_env();
    if let CliCommand::RunTui { api: true } = command {
        config = config.with_data_mode(DataMode::Api);
    }

    if let Some(result) = run_cli_command(&command, &config).await {
        return result;
    }

    tracing::info!(
        "Starting viralforge-admin {} ({} data, {})",
        env!("CARGO_PKG_VERSION"),
        config.data_mode.as_str(),
        config.base_url
    );

    let (message_tx, message_rx) = mpsc::unbounded_channel();
    let context = AppContext::production(config, message_tx.clone())?;
    let mut app = App::new(context, message_tx, message_rx);

    setup_panic_hook();
    let mut manager = TerminalManager::new()?;

    app.start();
    let result = run_app(manager.terminal(), &mut app).await;

    manager.restore();
    if let Err(e) = &result {
        tracing::error!("Exiting with error: {}", e);
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &*app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => app.tick(),

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("Terminal event error: {}", e);
                    }
                    None => {
                        tracing::info!("Terminal event stream closed");
                        app.quit();
                    }
                }
            }

            Some(msg) = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
