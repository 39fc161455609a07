use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use anyhow::{Context, Result, bail};
use roster_core::{Action, FilterPolicy, PageRequest, RosterEvent, RosterStore};
use roster_ingest::load_or_empty;
use roster_cli::config::Config;
use roster_cli::render::{describe_event, print_page};
use roster_cli::session::{SessionReport, run_script};
use tracing::{info, info_span};

use crate::cli::{RosterArgs, SessionArgs, ShowArgs};

pub fn run_show(args: &ShowArgs, config: &Config) -> Result<()> {
    let mut store = open_store(&args.roster, config)?;
    if let Some(query) = &args.query {
        store.dispatch(Action::Search(query.clone()));
    }
    if args.page != store.state().current_page() {
        let events = store.dispatch(Action::GoToPage(PageRequest::Number(args.page)));
        let rejected = events.iter().find_map(|event| match event {
            RosterEvent::PageRejected {
                requested,
                total_pages,
            } => Some((*requested, *total_pages)),
            _ => None,
        });
        if let Some((requested, total_pages)) = rejected {
            bail!("page {requested} is out of range (1-{total_pages})");
        }
    }
    print_page(&store.page_view(), args.roster.json).context("render page")?;
    Ok(())
}

pub fn run_session(args: &SessionArgs, config: &Config) -> Result<SessionReport> {
    let mut store = open_store(&args.roster, config)?;
    let json = args.roster.json;
    let on_show = |store: &RosterStore| {
        if let Err(error) = print_page(&store.page_view(), json) {
            eprintln!("error: render page: {error}");
        }
    };
    let on_events = |events: &[RosterEvent]| {
        if json {
            return;
        }
        for message in events.iter().filter_map(describe_event) {
            println!("> {message}");
        }
    };
    let report = match args.script.as_deref() {
        Some(path) if path != Path::new("-") => {
            let file =
                File::open(path).with_context(|| format!("open script {}", path.display()))?;
            run_script(
                &mut store,
                BufReader::new(file),
                args.strict,
                on_show,
                on_events,
            )
        }
        _ => run_script(
            &mut store,
            io::stdin().lock(),
            args.strict,
            on_show,
            on_events,
        ),
    }
    .context("read script")?;
    for (line, error) in &report.errors {
        eprintln!("error: line {line}: {error}");
    }
    info!(
        actions = report.dispatched,
        errors = report.errors.len(),
        "session finished"
    );
    Ok(report)
}

fn open_store(args: &RosterArgs, config: &Config) -> Result<RosterStore> {
    let source = config.source(args.source.as_deref())?;
    let policy = args
        .filter_policy
        .map_or(config.roster.filter_policy, FilterPolicy::from);
    let span = info_span!("load", source = %source);
    let _guard = span.enter();
    let records = load_or_empty(&source, config.load_options());
    Ok(RosterStore::from_records(records, policy))
}
