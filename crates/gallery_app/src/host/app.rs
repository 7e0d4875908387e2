use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::Context;
use gallery_core::{update, AppState, GalleryViewModel, Msg};
use gallery_engine::{
    resolve_manifest_location, resolve_manifest_path, EngineConfig, EngineEvent, EngineHandle,
    ManifestPathSources,
};
use gallery_logging::{gallery_debug, gallery_info, gallery_warn};
use url::Url;

use super::effects::apply_effects;
use super::history::{BrowserHistory, HistoryRecord};
use super::render::render;
use crate::cli::Cli;

const HELP: &str = "commands: next | prev | cat <slug> | back | forward | show | quit";

pub fn run_app(cli: &Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("reading current directory")?;
    let page_url = cli.resolve_page_url(&cwd)?;
    let config = EngineConfig::default();
    let engine = EngineHandle::new(config.clone());

    let mut session = Session::new(page_url.clone());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    show(&mut out, &session.view())?;

    let manifest_path = resolve_manifest_path(&ManifestPathSources {
        explicit: cli.manifest.clone(),
        global_override: cli.data_path.clone(),
        page_url: Some(page_url.clone()),
    });
    gallery_info!("manifest path {manifest_path} for page {page_url}");

    let loaded = match resolve_manifest_location(&page_url, &manifest_path) {
        Ok(location) => {
            engine.load(location);
            let wait = config.fetch.connect_timeout + config.fetch.request_timeout;
            wait_for_manifest(&engine, wait + Duration::from_secs(1), session.location())
        }
        Err(err) => Msg::LoadFailed {
            reason: err.to_string(),
        },
    };
    if let Some(view) = session.dispatch(loaded) {
        show(&mut out, &view)?;
    }

    writeln!(out, "{HELP}")?;
    for line in io::stdin().lock().lines() {
        let line = line.context("reading command")?;
        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Show) => show(&mut out, &session.view())?,
            Some(command) => {
                let Some(msg) = session.command_msg(command) else {
                    continue;
                };
                if let Some(view) = session.dispatch(msg) {
                    show(&mut out, &view)?;
                }
            }
            None if line.trim().is_empty() => {}
            None => writeln!(out, "{HELP}")?,
        }
    }
    Ok(())
}

fn wait_for_manifest(engine: &EngineHandle, timeout: Duration, page_url: Url) -> Msg {
    match engine.recv_timeout(timeout) {
        Some(EngineEvent::ManifestLoaded { location, result }) => match result {
            Ok(manifest) => Msg::ManifestLoaded {
                manifest,
                location: page_url,
            },
            Err(err) => {
                gallery_warn!("loading {location} failed");
                Msg::LoadFailed {
                    reason: err.to_string(),
                }
            }
        },
        None => Msg::LoadFailed {
            reason: format!("manifest load did not finish within {timeout:?}"),
        },
    }
}

fn show(out: &mut impl Write, view: &GalleryViewModel) -> io::Result<()> {
    writeln!(out)?;
    for line in render(view) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Next,
    Prev,
    Category(String),
    Back,
    Forward,
    Show,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let command = match (words.next()?, words.next()) {
        ("next" | "n", None) => Command::Next,
        ("prev" | "p", None) => Command::Prev,
        ("cat" | "c", Some(slug)) => Command::Category(slug.to_string()),
        ("back" | "b", None) => Command::Back,
        ("forward" | "f", None) => Command::Forward,
        ("show" | "s", None) => Command::Show,
        ("quit" | "q", None) => Command::Quit,
        _ => return None,
    };
    if words.next().is_some() {
        return None;
    }
    Some(command)
}

/// State machine plus the host side it drives.
struct Session {
    state: AppState,
    history: BrowserHistory,
}

impl Session {
    fn new(page_url: Url) -> Self {
        Self {
            state: AppState::new(),
            history: BrowserHistory::new(page_url),
        }
    }

    fn location(&self) -> Url {
        self.history.current().url.clone()
    }

    fn view(&self) -> GalleryViewModel {
        self.state.view()
    }

    /// Run `msg` through `update`, apply its effects and return the view when
    /// it needs redrawing.
    fn dispatch(&mut self, msg: Msg) -> Option<GalleryViewModel> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        apply_effects(&mut self.history, effects);
        let view = state.view();
        let was_dirty = state.consume_dirty();
        self.state = state;
        was_dirty.then_some(view)
    }

    fn command_msg(&mut self, command: Command) -> Option<Msg> {
        let msg = match command {
            Command::Next => Msg::NextPageClicked,
            Command::Prev => Msg::PrevPageClicked,
            Command::Category(slug) => Msg::CategoryClicked(slug),
            Command::Back => return popped_msg(self.history.back()),
            Command::Forward => return popped_msg(self.history.forward()),
            Command::Show | Command::Quit => return None,
        };
        Some(msg)
    }
}

fn popped_msg(record: Option<HistoryRecord>) -> Option<Msg> {
    let Some(record) = record else {
        gallery_debug!("no history entry in that direction");
        return None;
    };
    Some(Msg::HistoryPopped {
        state: record.state,
        location: record.url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_core::{HistoryState, Phase};
    use gallery_engine::decode_manifest;
    use pretty_assertions::assert_eq;

    const MANIFEST: &str = r#"{
        "baseUrl": "plots",
        "categories": [
            { "slug": "umap", "name": "UMAP", "path": "umap", "items": [
                { "title": "One", "file": "one.png", "type": "image" }
            ] },
            { "slug": "pca", "name": "PCA", "path": "pca", "items": [] }
        ]
    }"#;

    fn loaded_session(page: &str) -> Session {
        let mut session = Session::new(Url::parse(page).unwrap());
        let manifest = decode_manifest(MANIFEST.as_bytes()).unwrap();
        let location = session.location();
        let view = session
            .dispatch(Msg::ManifestLoaded { manifest, location })
            .expect("ready view");
        assert_eq!(view.phase, Phase::Ready);
        session
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("next"), Some(Command::Next));
        assert_eq!(parse_command("  p "), Some(Command::Prev));
        assert_eq!(
            parse_command("cat pca"),
            Some(Command::Category("pca".to_string()))
        );
        assert_eq!(parse_command("cat"), None);
        assert_eq!(parse_command("next page"), None);
        assert_eq!(parse_command("jump"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn initial_load_replaces_history_entry() {
        let session = loaded_session("https://x.test/gallery.html?category=pca");
        assert_eq!(session.history.depth(), 1);
        assert_eq!(
            session.history.current().state,
            Some(HistoryState::new("pca"))
        );
        assert_eq!(
            session.location().as_str(),
            "https://x.test/gallery.html?category=pca"
        );
    }

    #[test]
    fn category_click_then_back_restores_previous_category() {
        let mut session = loaded_session("https://x.test/");

        let msg = session
            .command_msg(Command::Category("pca".into()))
            .unwrap();
        let view = session.dispatch(msg).expect("redraw");
        assert_eq!(view.category_meta.as_deref(), Some("0 plots • pca"));
        assert_eq!(session.history.depth(), 2);

        let msg = session.command_msg(Command::Back).unwrap();
        let view = session.dispatch(msg).expect("redraw");
        assert_eq!(view.category_meta.as_deref(), Some("1 plots • umap"));
        assert_eq!(session.history.depth(), 2);
        assert_eq!(session.location().as_str(), "https://x.test/?category=umap");

        assert_eq!(session.command_msg(Command::Back), None);

        let msg = session.command_msg(Command::Forward).unwrap();
        let view = session.dispatch(msg).expect("redraw");
        assert_eq!(view.category_meta.as_deref(), Some("0 plots • pca"));
    }

    #[test]
    fn disabled_page_moves_do_not_redraw() {
        let mut session = loaded_session("https://x.test/");
        assert_eq!(session.dispatch(Msg::NextPageClicked), None);
        assert_eq!(session.dispatch(Msg::PrevPageClicked), None);
    }

    #[test]
    fn load_failure_is_rendered() {
        let mut session = Session::new(Url::parse("https://x.test/").unwrap());
        let view = session
            .dispatch(Msg::LoadFailed {
                reason: "http status 404: Failed to load gallery data (404)".into(),
            })
            .expect("redraw");
        assert_eq!(view.phase, Phase::Failed);
        assert_eq!(
            render(&view),
            vec!["error: Failed to load gallery data. Re-run the gallery build step.".to_string()]
        );
    }
}
