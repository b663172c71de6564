use std::io::{Read, Write};

use tickler_core::config::EngineConfig;
use tickler_rule::error::RuleError;
use tickler_rule::rule::{CalendarDate, parse};
use tickler_service::task::{Completion, Task, TaskScheduler};

use crate::cli::{CheckRuleArgs, Command, NextDateArgs, TaskCommand};
use crate::error::AppResult;

/// ## Summary
/// Runs one subcommand against the given streams.
///
/// ## Errors
/// Returns an error if the scheduler rejects the input, the task JSON is
/// malformed, or a stream fails.
pub fn run(
    command: &Command,
    engine: &EngineConfig,
    today: CalendarDate,
    input: impl Read,
    mut output: impl Write,
) -> AppResult<()> {
    let scheduler = TaskScheduler::from_config(engine)?;

    match command {
        Command::NextDate(args) => next_date(&scheduler, args, today, &mut output),
        Command::CheckRule(args) => check_rule(args, &mut output),
        Command::Task(task_command) => {
            run_task(&scheduler, task_command, today, input, &mut output)
        }
    }
}

fn next_date(
    scheduler: &TaskScheduler,
    args: &NextDateArgs,
    today: CalendarDate,
    output: &mut impl Write,
) -> AppResult<()> {
    let next = scheduler.next_date(args.now.as_deref(), &args.date, &args.repeat, today)?;
    let text = next.map(|date| date.to_string()).unwrap_or_default();
    writeln!(output, "{text}")?;
    Ok(())
}

fn check_rule(args: &CheckRuleArgs, output: &mut impl Write) -> AppResult<()> {
    let rule = parse(&args.rule).map_err(RuleError::from)?;
    tracing::debug!(kind = %rule.kind(), "Rule accepted");
    writeln!(output, "{rule}")?;
    Ok(())
}

fn run_task(
    scheduler: &TaskScheduler,
    command: &TaskCommand,
    today: CalendarDate,
    mut input: impl Read,
    output: &mut impl Write,
) -> AppResult<()> {
    let mut body = String::new();
    input.read_to_string(&mut body)?;
    let task: Task = serde_json::from_str(&body)?;

    match command {
        TaskCommand::Prepare => {
            let task = scheduler.prepare(task, today)?;
            serde_json::to_writer(&mut *output, &task)?;
        }
        TaskCommand::Done => match scheduler.complete(task, today)? {
            Completion::Reschedule(task) => serde_json::to_writer(&mut *output, &task)?,
            Completion::Remove => write!(output, "{{}}")?,
        },
    }
    writeln!(output)?;
    Ok(())
}
