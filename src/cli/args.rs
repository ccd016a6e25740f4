//! Command-line argument parsing for PolicyPilot
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};

/// PolicyPilot - Grounded university policy answers from the terminal
#[derive(Parser, Debug)]
#[command(name = "policypilot")]
#[command(version)]
#[command(about = "Ask questions about university policies and regulations", long_about = None)]
pub struct Args {
    /// Question to ask
    #[arg(value_name = "QUESTION")]
    pub question: Option<String>,

    /// Response tone: helpful, formal, or concise
    #[arg(short, long)]
    pub tone: Option<String>,

    /// Sampling temperature override
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Maximum output tokens override
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Nucleus sampling override
    #[arg(long)]
    pub top_p: Option<f32>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress all output except the answer)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check text against the banned-term list without sending it
    Check {
        /// Text to check
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// List the policy documents in the corpus
    Corpus,

    /// Run a set of known queries through retrieval and show the rankings
    Selftest,

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Check that a question or a subcommand was provided, not both
    pub fn validate(&self) -> Result<(), String> {
        if self.command.is_none() && self.question.is_none() {
            return Err(
                "Question required. Use 'policypilot <QUESTION>' or run a subcommand.".to_string(),
            );
        }

        if self.command.is_some() && self.question.is_some() {
            return Err("Cannot specify a question with a subcommand.".to_string());
        }

        Ok(())
    }
}

impl Verbosity {
    /// Check if retrieval details should be printed
    pub fn show_sources(&self) -> bool {
        matches!(self, Verbosity::Verbose | Verbosity::VeryVerbose)
    }

    /// Check if token usage and sampling parameters should be printed
    pub fn show_usage(&self) -> bool {
        matches!(self, Verbosity::VeryVerbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(question: Option<&str>, command: Option<Commands>) -> Args {
        Args {
            question: question.map(str::to_string),
            tone: None,
            temperature: None,
            max_tokens: None,
            top_p: None,
            verbose: 0,
            quiet: false,
            command,
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let mut args = args_with(Some("q"), None);
        assert_eq!(args.verbosity(), Verbosity::Normal);
        args.verbose = 1;
        assert_eq!(args.verbosity(), Verbosity::Verbose);
        args.verbose = 2;
        assert_eq!(args.verbosity(), Verbosity::VeryVerbose);
        args.quiet = true;
        assert_eq!(args.verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_validate_success_with_question() {
        assert!(args_with(Some("when are fees due"), None).validate().is_ok());
    }

    #[test]
    fn test_validate_success_with_subcommand() {
        assert!(args_with(None, Some(Commands::Corpus)).validate().is_ok());
    }

    #[test]
    fn test_validate_fail_no_question_or_command() {
        assert!(args_with(None, None).validate().is_err());
    }

    #[test]
    fn test_validate_fail_both_question_and_command() {
        assert!(args_with(Some("q"), Some(Commands::Corpus)).validate().is_err());
    }

    #[test]
    fn test_verbosity_methods() {
        assert!(!Verbosity::Normal.show_sources());
        assert!(Verbosity::Verbose.show_sources());
        assert!(!Verbosity::Verbose.show_usage());
        assert!(Verbosity::VeryVerbose.show_usage());
    }
}
