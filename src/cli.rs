use clap::Parser;

const AFTER_HELP: &str = "\
Examples:
  tmux-im \"$(tmux display -p '#S:#{pane_id}')\"            Get IM for the current pane
  tmux-im \"$(tmux display -p '#S:#{pane_id}')\" im.rime.x  Set IM for the current pane

Environment:
  TMUX_IM_FILE     Storage path (default: ~/.cache/tmux-im/store.json)
  TMUX_IM_TTL      TTL in seconds (default: 86400)
  TMUX_IM_DEFAULT  Default IM (default: com.apple.keylayout.ABC)
  TMUX_IM_LOG      Log filter, e.g. \"debug\" (logs to tmux-im.log beside the store)";

#[derive(Debug, Parser)]
#[command(
    name = "tmux-im",
    version,
    about = "tmux pane input method store",
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// List all records
    #[arg(short, long)]
    pub list: bool,

    /// Pane key, e.g. "session:%1"
    pub pane_key: Option<String>,

    /// Input method to store for the pane
    pub im: Option<String>,
}

/// The single operation an invocation performs.
#[derive(Debug, PartialEq, Eq)]
pub enum Operation {
    Help,
    List,
    Get { pane_key: String },
    Set { pane_key: String, im: String },
}

impl Cli {
    pub fn operation(self) -> Operation {
        if self.list {
            return Operation::List;
        }
        match (self.pane_key, self.im) {
            (Some(pane_key), Some(im)) => Operation::Set { pane_key, im },
            (Some(pane_key), None) => Operation::Get { pane_key },
            (None, _) => Operation::Help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Operation {
        let argv = std::iter::once("tmux-im").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap().operation()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_is_help() {
        assert_eq!(parse(&[]), Operation::Help);
    }

    #[test]
    fn test_single_arg_is_get() {
        assert_eq!(
            parse(&["work:%3"]),
            Operation::Get {
                pane_key: "work:%3".to_string()
            }
        );
    }

    #[test]
    fn test_two_args_is_set() {
        assert_eq!(
            parse(&["work:%3", "im.rime.inputmethod.Squirrel.Hans"]),
            Operation::Set {
                pane_key: "work:%3".to_string(),
                im: "im.rime.inputmethod.Squirrel.Hans".to_string(),
            }
        );
    }

    #[test]
    fn test_list_flag_wins_over_positionals() {
        assert_eq!(parse(&["-l"]), Operation::List);
        assert_eq!(parse(&["--list", "work:%3"]), Operation::List);
    }

    #[test]
    fn test_help_flag_exits_with_display_help() {
        let err = Cli::try_parse_from(["tmux-im", "-h"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("TMUX_IM_FILE"));
    }

    #[test]
    fn test_extra_positional_rejected() {
        assert!(Cli::try_parse_from(["tmux-im", "a", "b", "c"]).is_err());
    }
}
