//! Console commands.
//!
//! Parsing is where target temperatures are range checked: a value outside
//! the accepted range never turns into a toggle request.

use thiserror::Error;

use super::view::TemperatureSelection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `on <temp>`: start heating toward the selected target
    TurnOn(TemperatureSelection),
    /// `on`: open the temperature dialog
    OpenDialog,
    /// `preview <temp>`: select a temperature in the dialog
    Preview(TemperatureSelection),
    /// `cancel`: close the dialog
    Cancel,
    /// `off`
    TurnOff,
    /// `toggle`: what the toggle button does for the current state
    Toggle,
    Refresh,
    /// `lang <code>`
    Language(String),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("missing argument for {0}")]
    MissingArgument(&'static str),
    #[error("invalid temperature: {0}")]
    InvalidTemperature(String),
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Err(CommandError::Empty);
    };
    let arg = parts.next();

    match word.to_ascii_lowercase().as_str() {
        "on" | "start" => match arg {
            Some(raw) => parse_temperature(raw).map(Command::TurnOn),
            None => Ok(Command::OpenDialog),
        },
        "preview" | "p" => {
            let raw = arg.ok_or(CommandError::MissingArgument("preview"))?;
            parse_temperature(raw).map(Command::Preview)
        }
        "cancel" => Ok(Command::Cancel),
        "off" | "stop" => Ok(Command::TurnOff),
        "toggle" | "t" => Ok(Command::Toggle),
        "refresh" | "r" => Ok(Command::Refresh),
        "lang" | "language" => {
            let code = arg.ok_or(CommandError::MissingArgument("lang"))?;
            Ok(Command::Language(code.to_string()))
        }
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_temperature(raw: &str) -> Result<TemperatureSelection, CommandError> {
    let raw = raw.trim_end_matches("°C").trim_end_matches(['c', 'C']);
    let value: i64 = raw
        .parse()
        .map_err(|_| CommandError::InvalidTemperature(raw.to_string()))?;
    TemperatureSelection::new(value).map_err(|_| CommandError::InvalidTemperature(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_turn_on_with_target() {
        let cmd = parse_command("on 55").unwrap();
        assert_eq!(
            cmd,
            Command::TurnOn(TemperatureSelection::new(55).unwrap())
        );
        assert_eq!(parse_command("ON 37C").unwrap(), Command::TurnOn(TemperatureSelection::new(37).unwrap()));
    }

    #[test]
    fn rejects_out_of_range_targets() {
        assert_eq!(
            parse_command("on 36"),
            Err(CommandError::InvalidTemperature("36".to_string()))
        );
        assert_eq!(
            parse_command("on 81"),
            Err(CommandError::InvalidTemperature("81".to_string()))
        );
        assert!(matches!(
            parse_command("preview hot"),
            Err(CommandError::InvalidTemperature(_))
        ));
    }

    #[test]
    fn bare_on_opens_dialog() {
        assert_eq!(parse_command("on").unwrap(), Command::OpenDialog);
    }

    #[test]
    fn language_needs_code() {
        assert_eq!(
            parse_command("lang"),
            Err(CommandError::MissingArgument("lang"))
        );
        assert_eq!(
            parse_command("lang he").unwrap(),
            Command::Language("he".to_string())
        );
    }

    #[test]
    fn blank_and_unknown() {
        assert_eq!(parse_command("   "), Err(CommandError::Empty));
        assert_eq!(
            parse_command("dance"),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }
}
