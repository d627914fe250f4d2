//! Terminal front end hosting an `InterviewController` on stdin/stdout.
//!
//! Questions and the report go to stdout; prompts and status go to stderr.
//! Input is only read between calls, so nothing can be submitted while a
//! completion is pending.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::config::ChatConfig;
use crate::error::SessionError;
use crate::interview::{
    InterviewController, REPORT_NOTICE, ReportLine, SessionPhase, SubmitOutcome, classify_lines,
};
use crate::llm::RelayClient;

const RESTART_COMMAND: &str = "/restart";
const QUIT_COMMAND: &str = "/quit";

/// Run sessions until `/quit` or end of input.
pub async fn run_chat(config: ChatConfig) -> anyhow::Result<()> {
    let client = Arc::new(RelayClient::new(config.relay_url.clone()));
    let controller = InterviewController::new(client, config.controller.clone());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    tracing::info!(relay = %config.relay_url, "Chat front end ready");

    loop {
        match controller.phase().await {
            SessionPhase::Intro => {
                print_intro();
                let Some(line) = read_line(&mut lines).await? else {
                    break;
                };
                if line == QUIT_COMMAND {
                    break;
                }
                let question = controller.start().await?;
                println!("\n{question}\n");
            }
            SessionPhase::Interviewing => {
                eprint!("> ");
                let Some(line) = read_line(&mut lines).await? else {
                    break;
                };
                match line.as_str() {
                    QUIT_COMMAND => break,
                    RESTART_COMMAND => controller.restart().await,
                    _ => {
                        eprintln!("⏳ ...");
                        match controller.submit(&line).await {
                            Ok(SubmitOutcome::Reply(text)) => println!("\n{text}\n"),
                            Ok(SubmitOutcome::Report(report)) => print_report(&report),
                            Ok(SubmitOutcome::Stale) => {}
                            Err(SessionError::EmptyInput) => {}
                            Err(e) => eprintln!("ℹ️  {e}"),
                        }
                    }
                }
            }
            SessionPhase::GeneratingReport | SessionPhase::ReportReady => {
                eprintln!("Type {RESTART_COMMAND} to start over or {QUIT_COMMAND} to exit.");
                let Some(line) = read_line(&mut lines).await? else {
                    break;
                };
                match line.as_str() {
                    QUIT_COMMAND => break,
                    RESTART_COMMAND => controller.restart().await,
                    _ => {}
                }
            }
        }
    }

    Ok(())
}

async fn read_line(lines: &mut Lines<BufReader<Stdin>>) -> anyhow::Result<Option<String>> {
    Ok(lines.next_line().await?.map(|line| line.trim().to_string()))
}

fn print_intro() {
    println!("LifeStyleCheck");
    println!(
        "A short conversation about your work and daily routine, \
         followed by a personal lifestyle report."
    );
    eprintln!("Press Enter to start ({QUIT_COMMAND} to exit, {RESTART_COMMAND} at any time).");
}

fn print_report(report: &str) {
    println!("\n# Your Wellness Analysis\n");
    for line in classify_lines(report) {
        match line {
            ReportLine::Heading(text) => println!("\n== {text} =="),
            ReportLine::Emphasis(text) => println!("{text}"),
            ReportLine::Bullet(text) => println!("  • {text}"),
            ReportLine::Paragraph(text) => println!("{text}"),
        }
    }
    println!("\n{REPORT_NOTICE}\n");
}
