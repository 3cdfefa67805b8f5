use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use anyhow::Result;
use clap::{crate_authors, crate_version, Arg, ArgMatches, Command};
use ct_application::inmem;
use ct_core::gateways::notify::{NotificationEvent, NotificationGateway};
use ct_gateways::{email::send_to_json_file::SendToJsonFile, notify::Notify};

use crate::{config, replay};

pub fn run() -> Result<()> {
    let matches = command().get_matches();

    let cfg_file = matches.get_one::<PathBuf>("config");
    let cfg = config::Config::try_load_from_file_or_default(cfg_file)?;

    match matches.subcommand() {
        Some(("replay", args)) => run_replay(&cfg, args),
        _ => unreachable!("subcommand required"),
    }
}

fn command() -> Command {
    Command::new("comment-threads")
        .version(crate_version!())
        .author(crate_authors!())
        .about("Comment threads with moderation, votes and subscriptions")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Configuration file (TOML)"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("replay")
                .about("Replays a script of requests against an in-memory database")
                .arg(
                    Arg::new("script")
                        .value_name("SCRIPT")
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("JSON lines file with one step per line, reads stdin if omitted"),
                ),
        )
}

fn run_replay(cfg: &config::Config, args: &ArgMatches) -> Result<()> {
    let connections = inmem::Connections::init();
    let notify = notification_gateway(cfg)?;
    let ctx = replay::Context {
        connections: &connections,
        notify: &*notify,
        settings: &cfg.threads,
    };
    let stdout = io::stdout();
    let summary = match args.get_one::<PathBuf>("script") {
        Some(path) => {
            log::info!("Replaying {}", path.display());
            let file = File::open(path)?;
            replay::replay(&ctx, BufReader::new(file), stdout.lock())?
        }
        None => replay::replay(&ctx, io::stdin().lock(), stdout.lock())?,
    };
    log::info!(
        "Replayed {} steps: {} requests, {} forbidden, {} with errors",
        summary.steps,
        summary.requests,
        summary.forbidden,
        summary.invalid
    );
    Ok(())
}

fn notification_gateway(cfg: &config::Config) -> Result<Box<dyn NotificationGateway>> {
    let notify_on = cfg.notifications.notify_on.clone();
    let gw: Box<dyn NotificationGateway> = match &cfg.email.gateway {
        Some(config::EmailGateway::EmailToJsonFile { dir }) => {
            let gw = SendToJsonFile::try_new(dir)?;
            log::info!("Storing e-mails in {}", gw.path().display());
            Box::new(Notify::new(gw, notify_on))
        }
        None => {
            log::warn!("No e-mail gateway configured, notifications are discarded");
            Box::new(DiscardNotifications)
        }
    };
    Ok(gw)
}

struct DiscardNotifications;

impl NotificationGateway for DiscardNotifications {
    fn notify(&self, event: NotificationEvent) {
        log::debug!("Discarding notification {:?}", event.kind());
    }
}
