/// One line of player input, split on its literal verb prefix.
///
/// Verbs are case-sensitive and the argument is the untouched rest of the
/// line, so `take  key` asks for an item named ` key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Take(&'a str),
    Leave(&'a str),
    Talk(&'a str),
    Go(&'a str),
}

pub fn parse_command(input: &str) -> Command<'_> {
    if let Some(rest) = input.strip_prefix("take ") {
        Command::Take(rest)
    } else if let Some(rest) = input.strip_prefix("leave ") {
        Command::Leave(rest)
    } else if let Some(rest) = input.strip_prefix("talk ") {
        Command::Talk(rest)
    } else {
        Command::Go(input)
    }
}
