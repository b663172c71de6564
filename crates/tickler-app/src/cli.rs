use clap::{Parser, Subcommand};

/// Tickler recurring task scheduler.
#[derive(Parser, Debug)]
#[command(name = "tickler", version, about = "Recurring task date calculator")]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the next date of a task, or an empty line if there is none.
    NextDate(NextDateArgs),
    /// Validate a rule and print its canonical form.
    CheckRule(CheckRuleArgs),
    /// Apply scheduling to a task read as JSON from stdin.
    #[command(subcommand)]
    Task(TaskCommand),
}

/// Arguments for the `next-date` subcommand.
#[derive(clap::Args, Debug)]
pub struct NextDateArgs {
    /// Date the task is scheduled on, `YYYYMMDD`.
    #[arg(short, long)]
    pub date: String,

    /// Reference date, `YYYYMMDD`. Defaults to today.
    #[arg(short, long)]
    pub now: Option<String>,

    /// Recurrence rule, e.g. `d 7` or `m -1 2,3`. Empty for a one-off task.
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub repeat: String,
}

/// Arguments for the `check-rule` subcommand.
#[derive(clap::Args, Debug)]
pub struct CheckRuleArgs {
    /// Rule text to validate.
    #[arg(allow_hyphen_values = true)]
    pub rule: String,
}

/// Task subcommands; both read one task from stdin and write JSON to stdout.
#[derive(Subcommand, Debug)]
pub enum TaskCommand {
    /// Validate a new or edited task and normalize its date.
    Prepare,
    /// Mark a task done; prints the rescheduled task or `{}` to remove it.
    Done,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_next_date_args() {
        let cli = Cli::parse_from([
            "tickler", "next-date", "--date", "20240101", "--now", "20240126", "--repeat", "m -1",
        ]);
        let Command::NextDate(args) = cli.command else {
            panic!("expected next-date");
        };
        assert_eq!(args.date, "20240101");
        assert_eq!(args.now.as_deref(), Some("20240126"));
        assert_eq!(args.repeat, "m -1");
    }

    #[test]
    fn repeat_defaults_to_once() {
        let cli = Cli::parse_from(["tickler", "next-date", "-d", "20240101"]);
        let Command::NextDate(args) = cli.command else {
            panic!("expected next-date");
        };
        assert!(args.now.is_none());
        assert!(args.repeat.is_empty());
    }

    #[test]
    fn parse_task_done() {
        let cli = Cli::parse_from(["tickler", "task", "done"]);
        assert!(matches!(cli.command, Command::Task(TaskCommand::Done)));
    }

    #[test]
    fn next_date_requires_date() {
        assert!(Cli::try_parse_from(["tickler", "next-date"]).is_err());
    }
}
