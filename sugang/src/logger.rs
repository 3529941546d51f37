use std::path::Path;

use chrono::Local;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Inicializa el logger global. Llamar una sola vez al comienzo de `main`.
///
/// El nivel sale de `RUST_LOG` (por defecto `info`); `verbose` lo sube a
/// `debug`. Si se indica `log_file`, además se escribe ahí sin colores.
pub fn init(verbose: bool, log_file: Option<&Path>) {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    let level = if verbose { level.max(LevelFilter::Debug) } else { level };

    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::BrightBlack);

    let console = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr());

    let mut base = Dispatch::new().level(level).chain(console);

    if let Some(path) = log_file {
        match fern::log_file(path) {
            Ok(file) => {
                base = base.chain(
                    Dispatch::new()
                        .format(|out, message, record| {
                            out.finish(format_args!(
                                "[{} {} {}] {}",
                                Local::now().format("%Y-%m-%d %H:%M:%S"),
                                record.level(),
                                record.target(),
                                message
                            ))
                        })
                        .chain(file),
                );
            }
            Err(e) => eprintln!("no se pudo abrir el log '{}': {}", path.display(), e),
        }
    }

    if let Err(e) = base.apply() {
        eprintln!("no se pudo inicializar el logger: {}", e);
    }
}
