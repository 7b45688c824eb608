use anyhow::Context;
use plotline_core::{Event, EventBus, PlayerState, RngState};
use plotline_data::{load_catalog, load_deck, load_rules_config};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone)]
struct CliOptions {
    assets: PathBuf,
    deck: Option<PathBuf>,
    seed: Option<u64>,
    session: String,
    mulligan: bool,
    plot: Option<String>,
    setup_plays: usize,
}

#[derive(Serialize)]
struct StepReport<'a> {
    step: &'a str,
    events: Vec<Event>,
    owner: plotline_core::PlayerView,
    opponent: plotline_core::PlayerView,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions {
        assets: PathBuf::from("assets"),
        deck: None,
        seed: std::env::var("PLOTLINE_SEED")
            .ok()
            .and_then(|value| value.parse().ok()),
        session: "/#local".to_string(),
        mulligan: false,
        plot: None,
        setup_plays: usize::MAX,
    };
    let mut idx = 0usize;
    while idx < args.len() {
        let value = args.get(idx + 1);
        match args[idx].as_str() {
            "--mulligan" => options.mulligan = true,
            "--assets" | "-a" => {
                if let Some(value) = value {
                    options.assets = PathBuf::from(value);
                    idx += 1;
                }
            }
            "--deck" | "-d" => {
                if let Some(value) = value {
                    options.deck = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            "--seed" => {
                if let Some(value) = value {
                    options.seed = value.parse::<u64>().ok();
                    idx += 1;
                }
            }
            "--session" => {
                if let Some(value) = value {
                    options.session = value.clone();
                    idx += 1;
                }
            }
            "--plot" => {
                if let Some(value) = value {
                    options.plot = Some(value.clone());
                    idx += 1;
                }
            }
            "--setup-plays" => {
                if let Some(value) = value {
                    options.setup_plays = value.parse().unwrap_or(usize::MAX);
                    idx += 1;
                }
            }
            other => log::warn!("ignoring argument {other}"),
        }
        idx += 1;
    }
    options
}

fn report(step: &str, player: &PlayerState, events: &mut EventBus) -> anyhow::Result<()> {
    let report = StepReport {
        step,
        events: events.drain().collect(),
        owner: player.view(true),
        opponent: player.view(false),
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

/// Plays affordable cards from hand in order until nothing else is legal.
fn play_setup(player: &mut PlayerState, limit: usize, events: &mut EventBus) -> usize {
    let mut played = 0;
    while played < limit {
        let next = player
            .hand()
            .cards()
            .iter()
            .find(|card| player.can_play_card(card))
            .cloned();
        let Some(card) = next else {
            break;
        };
        if !player.play_card(&card, events) {
            break;
        }
        played += 1;
    }
    played
}

fn run(options: CliOptions) -> anyhow::Result<()> {
    let rules = load_rules_config(&options.assets)?;
    let catalog = load_catalog(&options.assets, &rules)?;
    let deck_path = options
        .deck
        .clone()
        .unwrap_or_else(|| options.assets.join("decks").join("stark_starter.json"));
    let deck = load_deck(&deck_path, &catalog)?;
    let rng = options
        .seed
        .map(RngState::from_seed)
        .unwrap_or_else(RngState::from_entropy);
    log::info!("deck {} with seed {}", deck_path.display(), rng.seed());

    let mut player = PlayerState::with_config(&options.session, &deck, rng, rules)
        .context("build player")?;
    let mut events = EventBus::default();

    player.initialise(&mut events);
    report("initialise", &player, &mut events)?;

    if options.mulligan {
        player.mulligan(&mut events);
        report("mulligan", &player, &mut events)?;
    } else {
        player.keep(&mut events);
        report("keep", &player, &mut events)?;
    }

    player.start_game(&mut events);
    report("start_game", &player, &mut events)?;

    let played = play_setup(&mut player, options.setup_plays, &mut events);
    log::info!("{played} setup plays, {} gold left", player.gold());
    player.setup_done(&mut events);
    report("setup", &player, &mut events)?;

    player.start_plot_phase(&mut events);
    report("plot_phase", &player, &mut events)?;

    let plot = match &options.plot {
        Some(code) => catalog_plot(&player, code)?,
        None => player
            .plot_deck()
            .first()
            .cloned()
            .context("plot deck is empty")?,
    };
    player.select_plot(&plot, &mut events);
    report("select_plot", &player, &mut events)?;

    player.reveal_plots(&mut events)?;
    report("reveal_plots", &player, &mut events)?;

    player.draw_phase(&mut events);
    report("draw_phase", &player, &mut events)
}

fn catalog_plot(player: &PlayerState, code: &str) -> anyhow::Result<plotline_core::CardRef> {
    player
        .plot_deck()
        .iter()
        .find(|card| card.code() == code)
        .cloned()
        .with_context(|| format!("plot {code} not in plot deck"))
}

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    if let Err(err) = run(options) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn parses_flags() {
        let options = parse_cli_options(&args(&[
            "--seed",
            "9",
            "--mulligan",
            "--plot",
            "01102",
            "--setup-plays",
            "2",
            "-a",
            "data",
        ]));
        assert_eq!(options.seed, Some(9));
        assert!(options.mulligan);
        assert_eq!(options.plot.as_deref(), Some("01102"));
        assert_eq!(options.setup_plays, 2);
        assert_eq!(options.assets, PathBuf::from("data"));
    }

    #[test]
    fn defaults_without_flags() {
        let options = parse_cli_options(&[]);
        assert!(!options.mulligan);
        assert_eq!(options.setup_plays, usize::MAX);
        assert_eq!(options.session, "/#local");
    }
}
