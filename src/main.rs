//! Native entry point: inspect and export the locally stored selections.
//!
//! ```text
//! fotosel-native [stats|summary|export <path>]
//! ```

#[cfg(not(target_arch = "wasm32"))]
use fotosel::{ConfirmKind, Frontend, NotificationLevel, state::ConfirmChoice};

/// Terminal frontend: toasts go to the log, downloads go to a file.
#[cfg(not(target_arch = "wasm32"))]
struct CliFrontend {
    export_path: Option<std::path::PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
impl Frontend for CliFrontend {
    fn notify(&mut self, level: NotificationLevel, message: &str) {
        match level {
            NotificationLevel::Success => log::info!("{}", message),
            NotificationLevel::Warning => log::warn!("{}", message),
            NotificationLevel::Error => log::error!("{}", message),
        }
    }

    fn confirm(&mut self, kind: ConfirmKind) -> ConfirmChoice {
        log::debug!("No interactive prompt for {:?}", kind);
        ConfirmChoice::Abort
    }

    fn download(&mut self, filename: &str, contents: &str) -> Result<(), String> {
        let path = self
            .export_path
            .clone()
            .unwrap_or_else(|| std::path::PathBuf::from(filename));
        std::fs::write(&path, contents).map_err(|e| format!("{}: {}", path.display(), e))?;
        println!("📥 {}", path.display());
        Ok(())
    }

    fn copy_text(&mut self, text: &str) -> Result<(), String> {
        print!("{}", text);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use fotosel::model::{Catalog, Category};
    use fotosel::storage::FileStore;
    use fotosel::{AppConfig, SelectorApp};

    let config = AppConfig::load_from_default_path().unwrap_or_default();
    env_logger::Builder::new()
        .filter_level(config.preferences.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let store = match FileStore::open_default() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Cannot open selection storage: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("Using storage directory {:?}", store.dir());

    let app = SelectorApp::new(Catalog::event(), config, store);
    let mut args = std::env::args().skip(1);
    let command = args.next();
    let mut frontend = CliFrontend {
        export_path: args.next().map(std::path::PathBuf::from),
    };

    match command.as_deref() {
        None | Some("stats") => {
            let stats = app.stats();
            for category in Category::ALL {
                let count = stats.count(category);
                match category.limit() {
                    Some(limit) => println!("{}: {}/{}", category.label(), count, limit),
                    None => println!("{}: {}", category.label(), count),
                }
            }
            println!("Sin Clasificar: {}", stats.unclassified);
        }
        Some("summary") => app.copy_summary(&mut frontend),
        Some("export") => app.export_report(&mut frontend),
        Some(other) => {
            eprintln!(
                "Unknown command '{}'. Usage: fotosel-native [stats|summary|export <path>]",
                other
            );
            std::process::exit(2);
        }
    }
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
