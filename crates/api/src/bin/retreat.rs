//! retreat - terminal front end for the availability selector
//!
//! Reads one command per line from stdin. Asks for a name first when none is
//! saved.

use std::io::Write;

use anyhow::Context;
use retreat_app::commands::{execute, saved_identity, Command, Reply};
use retreat_app::AppContext;
use retreat_core::{Notice, NoticeLevel};
use retreat_infra::{config, observability};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load().context("failed to load configuration")?;
    observability::init_tracing(&config.logging).context("failed to initialise logging")?;

    let mut ctx = AppContext::new(config).context("failed to initialise application")?;
    let mut stdout = std::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    writeln!(stdout, "Retreat availability")?;
    let saved = match saved_identity(&ctx) {
        Ok(saved) => saved,
        Err(notice) => {
            render(&mut stdout, &Reply::Notice(notice))?;
            None
        }
    };
    match saved {
        Some(identity) => writeln!(stdout, "Welcome back, {identity}!")?,
        None => {
            let Some(identity) = ask_name(&ctx, &mut lines, &mut stdout).await? else {
                return Ok(());
            };
            writeln!(stdout, "Welcome, {identity}!")?;
        }
    }
    writeln!(stdout, "{}", ctx.selector.prompt())?;
    writeln!(stdout, "Type 'help' for commands.")?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                render(&mut stdout, &Reply::from(err))?;
                continue;
            }
        };

        let reply = execute(&mut ctx, command).await;
        if reply == Reply::Quit {
            break;
        }
        render(&mut stdout, &reply)?;
    }

    Ok(())
}

/// Prompt until a valid name is saved. `None` on end of input.
async fn ask_name<R>(
    ctx: &AppContext,
    lines: &mut tokio::io::Lines<R>,
    stdout: &mut impl Write,
) -> anyhow::Result<Option<retreat_domain::Identity>>
where
    R: tokio::io::AsyncBufRead + Unpin,
{
    loop {
        write!(stdout, "What's your name? ")?;
        stdout.flush()?;

        let Some(line) = lines.next_line().await? else {
            return Ok(None);
        };
        match ctx.session.capture(&line) {
            Ok(identity) => return Ok(Some(identity)),
            Err(err) => render(&mut *stdout, &Reply::Notice(Notice::error(err.to_string())))?,
        }
    }
}

fn render(out: &mut impl Write, reply: &Reply) -> std::io::Result<()> {
    match reply {
        Reply::Notice(notice) => {
            let marker = match notice.level {
                NoticeLevel::Info => "·",
                NoticeLevel::Success => "✓",
                NoticeLevel::Error => "✗",
            };
            writeln!(out, "{marker} {notice}")
        }
        Reply::Lines(lines) => lines.iter().try_for_each(|line| writeln!(out, "{line}")),
        Reply::Quit => Ok(()),
    }
}
