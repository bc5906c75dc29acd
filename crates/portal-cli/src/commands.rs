/// A line typed at the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    User(String),
    Pass(String),
    Submit,
    Switch,
    Logout,
    WhoAmI,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    /// Field values keep inner spaces; only the gap after the verb is dropped.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.trim().is_empty() {
            return Self::Empty;
        }

        let (verb, rest) = match trimmed.split_once(' ') {
            Some((verb, rest)) => (verb, rest),
            None => (trimmed.trim_end(), ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "user" => Self::User(rest.to_string()),
            "pass" => Self::Pass(rest.to_string()),
            "submit" => Self::Submit,
            "switch" => Self::Switch,
            "logout" => Self::Logout,
            "whoami" => Self::WhoAmI,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(verb.to_string()),
        }
    }
}

pub const HELP: &str = "\
commands:
  user <name>     set the username field
  pass <secret>   set the password field
  submit          submit the current form
  switch          toggle between sign in and registration
  logout          leave the home screen
  whoami          show the logged in user
  help            this list
  quit            exit";
