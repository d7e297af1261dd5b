use pipfall_core::{
    Action, CombatOutcome, Event, EventBus, Intent, Phase, RunState,
};
use pipfall_data::load_assets;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const DEFAULT_RUN_SEED: u64 = 0xD1CE;

#[derive(Debug, Clone)]
struct CliOptions {
    seed: u64,
    assets: PathBuf,
    tui: bool,
    help: bool,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions {
        seed: DEFAULT_RUN_SEED,
        assets: PathBuf::from("assets"),
        tui: false,
        help: false,
    };
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    if let Ok(seed) = value.parse::<u64>() {
                        options.seed = seed;
                    }
                    idx += 1;
                }
            }
            "--assets" => {
                if let Some(value) = args.get(idx + 1) {
                    options.assets = PathBuf::from(value);
                    idx += 1;
                }
            }
            "--tui" => options.tui = true,
            "--help" | "-h" => options.help = true,
            _ => {}
        }
        idx += 1;
    }
    options
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    if options.help {
        print_usage();
        return;
    }
    if options.tui {
        let launch = pipfall_cui::LaunchOptions {
            seed: Some(options.seed),
            assets: Some(options.assets.clone()),
        };
        if let Err(err) = pipfall_cui::run(launch) {
            eprintln!("tui launch error: {err}");
            std::process::exit(1);
        }
        return;
    }
    if let Err(err) = repl(&options) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("pipfall: a dice card roguelike");
    println!();
    println!("usage: pipfall [--seed N] [--assets DIR] [--tui]");
    println!();
    println!("  --seed N      seed the run RNG");
    println!("  --assets DIR  asset directory (default: assets)");
    println!("  --tui         launch the full-screen terminal interface");
}

fn build_run(options: &CliOptions) -> Result<RunState, String> {
    let (config, catalog) = load_assets(&options.assets).map_err(|err| format!("{err:#}"))?;
    RunState::new(config, catalog, options.seed).map_err(|err| err.to_string())
}

fn repl(options: &CliOptions) -> Result<(), String> {
    let mut events = EventBus::default();
    let mut run = build_run(options)?;
    run.reset_combat(&mut events).map_err(|err| err.to_string())?;

    println!("pipfall (seed {}), type 'help' for commands", options.seed);
    flush_events(&run, &mut events);
    print_status(&run);

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        if stdin.lock().read_line(&mut line).map_err(|err| err.to_string())? == 0 {
            break;
        }
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let argument = parts.next().and_then(|value| value.parse::<usize>().ok());

        match command {
            "quit" | "exit" | "q" => break,
            "help" | "h" | "?" => print_help(),
            "status" | "s" => print_status(&run),
            "dice" | "d" => print_dice(&run),
            "hand" => print_hand(&run),
            "shop" => print_offers(&run),
            "play" | "p" => match argument {
                Some(index) if index >= 1 => {
                    let instance = run.combat.hand.get(index - 1).map(|card| card.id);
                    match instance {
                        Some(instance) => perform(&mut run, Action::PlayCard { instance }, &mut events),
                        None => println!("no card {index} in hand"),
                    }
                }
                _ => println!("usage: play <hand position>"),
            },
            "die" => match argument {
                Some(index) if (1..=5).contains(&index) => {
                    perform(&mut run, Action::DieClicked { index: index - 1 }, &mut events)
                }
                _ => println!("usage: die <1-5>"),
            },
            "confirm" | "c" => perform(&mut run, Action::ConfirmSelection, &mut events),
            "end" | "e" => perform(&mut run, Action::EndTurn, &mut events),
            "new" | "reset" => perform(&mut run, Action::ResetCombat, &mut events),
            "buy" | "b" => match argument {
                Some(index) if index >= 1 => {
                    perform(&mut run, Action::Buy { index: index - 1 }, &mut events)
                }
                _ => println!("usage: buy <offer number>"),
            },
            "enhance" | "upgrade" | "u" => match argument {
                Some(index) if index >= 1 => {
                    perform(&mut run, Action::ApplyUpgrade { index: index - 1 }, &mut events)
                }
                _ => println!("usage: enhance <option number>"),
            },
            "continue" | "go" | "g" => perform(&mut run, Action::Continue, &mut events),
            other => println!("unknown command '{other}' (try 'help')"),
        }
    }
    Ok(())
}

fn perform(run: &mut RunState, action: Action, events: &mut EventBus) {
    if let Err(err) = run.perform(action, events) {
        println!("refused: {err}");
    }
    flush_events(run, events);
    print_status(run);
}

fn print_help() {
    println!("  dice            show the five dice");
    println!("  hand            show your hand");
    println!("  play <n>        play the n-th card in hand");
    println!("  die <n>         click the n-th die (inspect or target)");
    println!("  confirm         confirm a multi-select card");
    println!("  end             end the turn");
    println!("  new             start a fresh battle");
    println!("  shop            show shop or upgrade offers");
    println!("  buy <n>         buy the n-th shop offer");
    println!("  enhance <n>     apply the n-th upgrade option");
    println!("  continue        leave the shop/upgrade for the next battle");
    println!("  status          show the battle summary");
    println!("  quit            leave the game");
}

fn print_status(run: &RunState) {
    match run.phase {
        Phase::Combat => {
            let combat = &run.combat;
            let outcome = match combat.outcome {
                Some(CombatOutcome::Victory) => " [victory]",
                Some(CombatOutcome::Defeat) => " [defeat]",
                None => "",
            };
            let intent = match combat.intent {
                Intent::Attack(value) => format!("attack {value}"),
                Intent::Block(value) => format!("block {value}"),
            };
            println!(
                "turn {} | you {}/{} (+{} block) | enemy {}/{} (+{} block) | intent {} | gold {}{}",
                combat.turn,
                combat.player_hp.max(0),
                combat.player_max_hp,
                combat.player_block,
                combat.enemy_hp.max(0),
                combat.enemy_max_hp,
                combat.enemy_block,
                intent,
                run.profile.gold,
                outcome,
            );
        }
        Phase::Shop => {
            println!("in the shop | gold {}", run.profile.gold);
            print_offers(run);
        }
        Phase::Upgrade => {
            println!("in the upgrade chamber | gold {}", run.profile.gold);
            print_offers(run);
        }
    }
}

fn print_dice(run: &RunState) {
    let selected = run
        .combat
        .pending
        .as_ref()
        .map(|pending| pending.selected.clone())
        .unwrap_or_default();
    let rendered: Vec<String> = run
        .combat
        .dice
        .dice
        .iter()
        .enumerate()
        .map(|(index, die)| {
            let mut marks = String::new();
            if die.frozen() {
                marks.push('*');
            }
            if selected.contains(&index) {
                marks.push('^');
            }
            format!("{}:[{}]{}", index + 1, die.value, marks)
        })
        .collect();
    println!("{}", rendered.join("  "));
}

fn print_hand(run: &RunState) {
    if run.combat.hand.is_empty() {
        println!("hand is empty");
        return;
    }
    for (index, card) in run.combat.hand.iter().enumerate() {
        let label = match run.catalog.get(&card.key) {
            Ok(def) => format!("{}: {}", def.name, def.description),
            Err(_) => card.key.clone(),
        };
        println!("  {}: {}", index + 1, label);
    }
    if let Some(pending) = &run.combat.pending {
        let name = card_name(run, &pending.card.key);
        println!("  (resolving {name}, selected dice: {:?})", pending.selected);
    }
}

fn print_offers(run: &RunState) {
    match run.phase {
        Phase::Shop => {
            let Some(shop) = run.shop.as_ref() else {
                println!("the shop is closed");
                return;
            };
            for (index, offer) in shop.offers.iter().enumerate() {
                let marker = if offer.sold { " (sold)" } else { "" };
                println!(
                    "  {}: {} at {} gold{marker}",
                    index + 1,
                    card_name(run, &offer.key),
                    offer.price
                );
            }
        }
        Phase::Upgrade => {
            let Some(upgrade) = run.upgrade.as_ref() else {
                println!("nothing to upgrade");
                return;
            };
            if upgrade.options.is_empty() {
                println!("  no cards can be enhanced; type 'continue'");
                return;
            }
            for (index, option) in upgrade.options.iter().enumerate() {
                println!(
                    "  {}: {} -> {}",
                    index + 1,
                    card_name(run, &option.base_key),
                    card_name(run, &option.upgraded_key)
                );
            }
            if upgrade.spent {
                println!("  (upgrade already applied; type 'continue')");
            }
        }
        Phase::Combat => println!("no offers during combat"),
    }
}

fn card_name(run: &RunState, key: &str) -> String {
    run.catalog
        .get(key)
        .map(|def| def.name.clone())
        .unwrap_or_else(|_| key.to_string())
}

fn flush_events(run: &RunState, events: &mut EventBus) {
    let drained: Vec<Event> = events.drain().collect();
    for event in drained {
        println!("* {}", describe_event(run, &event));
    }
}

fn describe_event(run: &RunState, event: &Event) -> String {
    match event {
        Event::CombatStarted { deck } => format!("a new battle begins ({deck} cards in the deck)"),
        Event::TurnStarted { turn } => format!("turn {turn} begins"),
        Event::TurnEnded { turn } => format!("turn {turn} ends"),
        Event::DiceRolled { values } => format!("dice rolled: {values:?}"),
        Event::CardsDrawn { drawn, requested } => {
            if drawn < requested {
                format!("drew {drawn} of {requested} cards (piles ran dry)")
            } else {
                format!("drew {drawn} cards")
            }
        }
        Event::DeckReshuffled { cards } => {
            format!("shuffled {cards} discards back into the deck")
        }
        Event::DieInspected { index, value } => format!("die {} shows {value}", index + 1),
        Event::CardPlayed { key } => format!("{} played", card_name(run, key)),
        Event::SelectionStarted { key, hint, .. } => {
            format!("playing {}: {}", card_name(run, key), hint.to_lowercase())
        }
        Event::DieToggled { index, selected } => {
            if *selected {
                format!("selected die {}", index + 1)
            } else {
                format!("deselected die {}", index + 1)
            }
        }
        Event::SelectionResolved { key } => format!("{} resolved", card_name(run, key)),
        Event::DieCopied { from, to, value } => {
            format!("copied die {} value ({value}) onto die {}", from + 1, to + 1)
        }
        Event::DieFlipped { index, from, to } => {
            format!("die {} flipped {from} -> {to}", index + 1)
        }
        Event::DieFrozen { index } => format!("die {} locked until next turn", index + 1),
        Event::DieTuned { index, from, to } => format!("die {} tuned {from} -> {to}", index + 1),
        Event::DieRerolled { index, from, to } => {
            format!("die {} rerolled {from} -> {to}", index + 1)
        }
        Event::DamageDealt {
            source,
            blocked,
            damage,
        } => format!("{source}: removed {blocked} block, dealt {damage} damage"),
        Event::BlockGained { source, amount } => format!("{source}: gained {amount} block"),
        Event::NoEffect { source } => format!("{source}: no effect"),
        Event::EffectFizzled { key } => format!("{} fizzled without targets", card_name(run, key)),
        Event::ResolutionFailed { key } => format!("card effect failed to resolve ({key})"),
        Event::IntentRolled { intent } => match intent {
            Intent::Attack(value) => format!("enemy intent: attack {value}"),
            Intent::Block(value) => format!("enemy intent: block {value}"),
        },
        Event::EnemyAttacked {
            magnitude,
            blocked,
            damage,
        } => format!("enemy attacks for {magnitude}: blocked {blocked}, took {damage} damage"),
        Event::EnemyBlocked { magnitude } => format!("enemy gained {magnitude} block"),
        Event::Victory { reward, gold, next } => {
            let destination = match next {
                Phase::Shop => "shop",
                Phase::Upgrade => "upgrade chamber",
                Phase::Combat => "battle",
            };
            format!("victory! gained {reward} gold ({gold} total), heading to the {destination}")
        }
        Event::Defeat { turn } => format!("defeated on turn {turn}, type 'new' to try again"),
        Event::ShopOpened { offers, price } => {
            format!("shop open: {offers} cards at {price} gold each")
        }
        Event::CardBought { key, cost, gold } => format!(
            "bought {} for {cost} gold ({gold} left)",
            card_name(run, key)
        ),
        Event::UpgradeOpened { options } => format!("{options} cards can be enhanced"),
        Event::UpgradeApplied { from, to } => format!(
            "upgraded {} into {}",
            card_name(run, from),
            card_name(run, to)
        ),
        Event::UpgradeUnavailable => {
            "no cards can be enhanced right now; continue when ready".to_string()
        }
    }
}
